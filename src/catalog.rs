use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::config::GeometryConfig;
use crate::geometry::bounds::outline_bounds;
use crate::geometry::types::{BoundingBox, LabelPlacement, ViewportRect};
use crate::geometry::viewport::{build_focused_viewport, parse_viewport};

// World dimensions used when the catalog's own viewport descriptor is
// missing fields, matching the source atlas.
const WORLD_FALLBACK_WIDTH: f32 = 774.0;
const WORLD_FALLBACK_HEIGHT: f32 = 569.0;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate region id {0:?}")]
    DuplicateRegion(String),
    #[error("city {city:?} references unknown region {region:?}")]
    UnknownRegion { city: String, region: String },
}

/// An administrative region with a string-encoded boundary outline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: String,
    pub name: String,
    pub outline: String,
}

/// A labeled point of interest inside a region.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    pub region_id: String,
    pub focus_x: f32,
    pub focus_y: f32,
    #[serde(default)]
    pub photo_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    world_viewport: String,
    regions: Vec<Region>,
    cities: Vec<City>,
    #[serde(default)]
    label_placements: BTreeMap<String, LabelPlacement>,
}

/// The static region/city catalog plus bounds precomputed once at load.
///
/// Outlines never change after load, so region bounding boxes live in a
/// plain map keyed by region id instead of being recomputed per lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    world: ViewportRect,
    regions: BTreeMap<String, Region>,
    cities: Vec<City>,
    placements: BTreeMap<String, LabelPlacement>,
    region_bounds: BTreeMap<String, BoundingBox>,
}

impl Catalog {
    pub fn from_json(contents: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(contents)?;

        let world = parse_viewport(
            &file.world_viewport,
            WORLD_FALLBACK_WIDTH,
            WORLD_FALLBACK_HEIGHT,
        );

        let mut regions = BTreeMap::new();
        let mut region_bounds = BTreeMap::new();
        for region in file.regions {
            if regions.contains_key(&region.id) {
                return Err(CatalogError::DuplicateRegion(region.id));
            }
            match outline_bounds(&region.outline) {
                Some(bounds) => {
                    region_bounds.insert(region.id.clone(), bounds);
                }
                None => {
                    debug!("region {:?} has no drawable outline points", region.id);
                }
            }
            regions.insert(region.id.clone(), region);
        }

        for city in &file.cities {
            if !regions.contains_key(&city.region_id) {
                return Err(CatalogError::UnknownRegion {
                    city: city.id.clone(),
                    region: city.region_id.clone(),
                });
            }
        }

        Ok(Self {
            world,
            regions,
            cities: file.cities,
            placements: file.label_placements,
            region_bounds,
        })
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Ok(Self::from_json(&contents)?)
    }

    /// The full world extent, derived once from the catalog's world
    /// viewport descriptor.
    pub fn world_rect(&self) -> ViewportRect {
        self.world
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn region_bounds(&self, id: &str) -> Option<&BoundingBox> {
        self.region_bounds.get(id)
    }

    /// Padded, clamped viewport framing the given region. An unknown id
    /// or a region without drawable points falls back to the full world
    /// extent so the caller always has something valid to display.
    pub fn focused_viewport(&self, region_id: &str, config: &GeometryConfig) -> ViewportRect {
        match self.region_bounds.get(region_id) {
            Some(bounds) => build_focused_viewport(
                bounds,
                self.world.width,
                self.world.height,
                config.focus_padding,
            ),
            None => {
                debug!("no bounds for region {region_id:?}; falling back to world viewport");
                self.world
            }
        }
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Cities shown in a region's focus view: members of the region that
    /// actually have photos.
    pub fn cities_in_region(&self, region_id: &str) -> impl Iterator<Item = &City> {
        self.cities
            .iter()
            .filter(move |city| city.region_id == region_id && city.photo_count > 0)
    }

    /// Per-city placement hint, with the standard offset when absent.
    pub fn placement_for(&self, city_id: &str) -> LabelPlacement {
        self.placements.get(city_id).copied().unwrap_or_default()
    }
}
