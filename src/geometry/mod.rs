pub mod bounds;
pub mod label;
pub mod outline;
pub mod types;
pub mod viewport;

pub use bounds::{compute_bounding_box, outline_bounds};
pub use label::place_label;
pub use outline::parse_outline;
pub use types::*;
pub use viewport::{build_focused_viewport, parse_viewport};
