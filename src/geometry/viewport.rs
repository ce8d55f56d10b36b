use log::debug;

use super::types::{BoundingBox, ViewportRect};

// Floor on each viewport axis so a degenerate bounding box never yields
// a zero or negative-area viewport.
const MIN_VIEWPORT_SPAN: f32 = 1.0;

/// Frames `bounds` with `padding` on every side, clamped to the world
/// extent `[0, world_width] x [0, world_height]`.
pub fn build_focused_viewport(
    bounds: &BoundingBox,
    world_width: f32,
    world_height: f32,
    padding: f32,
) -> ViewportRect {
    let min_x = (bounds.min_x - padding).max(0.0);
    let min_y = (bounds.min_y - padding).max(0.0);
    let max_x = (bounds.max_x + padding).min(world_width);
    let max_y = (bounds.max_y + padding).min(world_height);

    ViewportRect {
        x: min_x,
        y: min_y,
        width: (max_x - min_x).max(MIN_VIEWPORT_SPAN),
        height: (max_y - min_y).max(MIN_VIEWPORT_SPAN),
    }
}

/// Decodes a whitespace-separated `"x y width height"` descriptor.
///
/// Each field falls back independently: x and y to 0, width and height
/// to the supplied defaults. A present-but-non-numeric field falls back
/// the same way a missing one does.
pub fn parse_viewport(descriptor: &str, default_width: f32, default_height: f32) -> ViewportRect {
    let tokens: Vec<&str> = descriptor.split_whitespace().collect();
    let field = |index: usize, default: f32| match tokens.get(index) {
        Some(token) => token.parse::<f32>().unwrap_or_else(|_| {
            debug!("viewport descriptor field {index} is not numeric ({token:?}); using {default}");
            default
        }),
        None => default,
    };

    ViewportRect {
        x: field(0, 0.0),
        y: field(1, 0.0),
        width: field(2, default_width),
        height: field(3, default_height),
    }
}
