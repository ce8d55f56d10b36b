use super::outline::parse_outline;
use super::types::{BoundingBox, Point};

/// Reduces a point sequence to its axis-aligned bounding box.
/// Returns `None` for an empty sequence.
pub fn compute_bounding_box(points: &[Point]) -> Option<BoundingBox> {
    let mut iter = points.iter();
    let first = iter.next()?;
    let mut bounds = BoundingBox {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for point in iter {
        bounds.include(point.x, point.y);
    }
    Some(bounds)
}

/// Bounding box of an outline string, `None` when it has no drawable
/// points. Callers treat the absence as "fall back to the world view".
pub fn outline_bounds(outline: &str) -> Option<BoundingBox> {
    compute_bounding_box(&parse_outline(outline))
}
