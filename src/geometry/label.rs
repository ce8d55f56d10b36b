// Safe label placement for focused-province city labels. Works with pure
// geometry against the active viewport; the renderer only draws the
// result.

use crate::config::GeometryConfig;
use crate::text_metrics::{estimated_text_height, estimated_text_width};

use super::types::{LabelLayout, LabelPlacement, TextAnchor, ViewportRect};

/// Places `text` near `(point_x, point_y)` so its estimated bounding box
/// stays inside `viewport`, preferring the supplied placement hint.
///
/// A label that would run off the right edge with a `start` anchor flips
/// to `end` and mirrors the offset to the other side of the point; the
/// symmetric rule handles `end` labels against the left edge. The two
/// checks run once, in that order - a label that fails both directions is
/// not re-flipped, it just gets clamped.
pub fn place_label(
    text: &str,
    point_x: f32,
    point_y: f32,
    placement: &LabelPlacement,
    viewport: &ViewportRect,
    config: &GeometryConfig,
) -> LabelLayout {
    let text_width = estimated_text_width(text, &config.metrics);
    let text_height = estimated_text_height(&config.metrics);
    let pad = config.label_edge_padding;

    let min_x = viewport.x + pad;
    let max_x = viewport.right() - pad;
    let min_y = viewport.y + text_height + pad;
    let max_y = viewport.bottom() - pad;

    let mut x = point_x + placement.dx;
    let mut anchor = placement.anchor;

    if anchor == TextAnchor::Start && x + text_width > max_x {
        anchor = TextAnchor::End;
        x = point_x - placement.dx.abs();
    }
    if anchor == TextAnchor::End && x - text_width < min_x {
        anchor = TextAnchor::Start;
        x = point_x + placement.dx.abs();
    }

    // min() before max(): when the padded viewport is narrower than the
    // text, the lower bound wins instead of panicking like clamp would.
    x = match anchor {
        TextAnchor::Start => x.min(max_x - text_width).max(min_x),
        TextAnchor::End => x.min(max_x).max(min_x + text_width),
        TextAnchor::Middle => x
            .min(max_x - text_width / 2.0)
            .max(min_x + text_width / 2.0),
    };
    let y = (point_y + placement.dy).min(max_y).max(min_y);

    LabelLayout { x, y, anchor }
}
