use serde::{Deserialize, Serialize};

/// A position on the shared 2D map plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned min/max rectangle over a point sequence.
///
/// Only ever constructed from a non-empty sequence, so `min_x <= max_x`
/// and `min_y <= max_y` hold by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl BoundingBox {
    pub(crate) fn include(&mut self, x: f32, y: f32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// The rectangular window of the map currently displayed, in world
/// coordinates. Mirrors an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    /// Renders the whitespace-separated `"x y width height"` descriptor
    /// form consumed back by [`super::viewport::parse_viewport`].
    pub fn to_descriptor(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Text alignment relative to its anchor coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Preferred label offset and alignment for a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub dx: f32,
    pub dy: f32,
    #[serde(rename = "textAnchor")]
    pub anchor: TextAnchor,
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self {
            dx: 3.2,
            dy: -3.3,
            anchor: TextAnchor::Start,
        }
    }
}

/// Resolved label draw position with the possibly-flipped anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLayout {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "textAnchor")]
    pub anchor: TextAnchor,
}
