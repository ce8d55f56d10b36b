pub mod catalog;
pub mod config;
pub mod geometry;
pub mod selection;
pub mod text_metrics;

pub use catalog::{Catalog, CatalogError, City, Region};
pub use config::{GeometryConfig, load_config};
pub use geometry::types::{
    BoundingBox, LabelLayout, LabelPlacement, Point, TextAnchor, ViewportRect,
};
pub use selection::{FocusView, MapMode, Selection, focus_view};
