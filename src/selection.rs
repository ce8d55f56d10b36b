// Selection state is plain data owned by the UI layer; this module only
// turns a selection into the geometry the renderer needs.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::GeometryConfig;
use crate::geometry::label::place_label;
use crate::geometry::types::{LabelLayout, ViewportRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapMode {
    /// Stylized puzzle-piece overview; no region focus applies.
    #[default]
    Puzzle,
    /// Accurate province atlas, where a region may be focused.
    Atlas,
}

/// Immutable snapshot of what the user currently has selected.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub mode: MapMode,
    pub active_city_id: Option<String>,
    pub focused_region_id: Option<String>,
    pub visible_label_city_id: Option<String>,
}

/// One city marker in a focus view. `label` is resolved only for the
/// city whose label the selection marks visible.
#[derive(Debug, Clone)]
pub struct CityMarker {
    pub city_id: String,
    pub x: f32,
    pub y: f32,
    pub active: bool,
    pub label: Option<LabelLayout>,
}

/// Everything the rendering layer needs to draw the current map state.
#[derive(Debug, Clone)]
pub struct FocusView {
    pub viewport: ViewportRect,
    pub markers: Vec<CityMarker>,
}

/// Resolves the active viewport and per-city markers for a selection.
///
/// Puzzle mode and the no-focus atlas state show the full world; a
/// focused region frames its padded viewport and lists the region's
/// cities, with a safe label layout for the visible one.
pub fn focus_view(catalog: &Catalog, selection: &Selection, config: &GeometryConfig) -> FocusView {
    let focused_region = match selection.mode {
        MapMode::Atlas => selection.focused_region_id.as_deref(),
        MapMode::Puzzle => None,
    };

    let Some(region_id) = focused_region else {
        return FocusView {
            viewport: catalog.world_rect(),
            markers: Vec::new(),
        };
    };

    let viewport = catalog.focused_viewport(region_id, config);
    let markers = catalog
        .cities_in_region(region_id)
        .map(|city| {
            let label = (selection.visible_label_city_id.as_deref() == Some(city.id.as_str()))
                .then(|| {
                    place_label(
                        &city.name,
                        city.focus_x,
                        city.focus_y,
                        &catalog.placement_for(&city.id),
                        &viewport,
                        config,
                    )
                });
            CityMarker {
                city_id: city.id.clone(),
                x: city.focus_x,
                y: city.focus_y,
                active: selection.active_city_id.as_deref() == Some(city.id.as_str()),
                label,
            }
        })
        .collect();

    FocusView { viewport, markers }
}
