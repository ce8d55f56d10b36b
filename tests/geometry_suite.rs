use std::path::Path;

use map_focus::geometry::{parse_outline, parse_viewport};
use map_focus::text_metrics::{estimated_text_height, estimated_text_width};
use map_focus::{
    Catalog, GeometryConfig, MapMode, Selection, TextAnchor, focus_view,
};

fn load_catalog() -> Catalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("catalog.json");
    Catalog::load(&path).expect("fixture catalog loads")
}

#[test]
fn world_dimensions_come_from_the_descriptor() {
    let catalog = load_catalog();
    let world = catalog.world_rect();
    assert_eq!(world.x, 0.0);
    assert_eq!(world.y, 0.0);
    assert_eq!(world.width, 774.0);
    assert_eq!(world.height, 569.0);
}

#[test]
fn region_bounds_contain_their_cities() {
    let catalog = load_catalog();
    for city in catalog.cities() {
        let Some(bounds) = catalog.region_bounds(&city.region_id) else {
            continue;
        };
        assert!(
            bounds.contains(city.focus_x, city.focus_y),
            "{} at ({}, {}) outside bounds of {}",
            city.id,
            city.focus_x,
            city.focus_y,
            city.region_id
        );
    }
}

#[test]
fn every_drawable_region_has_precomputed_bounds() {
    let catalog = load_catalog();
    for region in catalog.regions() {
        let has_points = !parse_outline(&region.outline).is_empty();
        assert_eq!(
            catalog.region_bounds(&region.id).is_some(),
            has_points,
            "bounds presence mismatch for {}",
            region.id
        );
    }
    // The pointless placeholder region is kept, but bound-less.
    assert!(catalog.region("nameless-sea").is_some());
    assert!(catalog.region_bounds("nameless-sea").is_none());
}

#[test]
fn focused_viewports_stay_inside_the_world() {
    let catalog = load_catalog();
    let config = GeometryConfig::default();
    let world = catalog.world_rect();
    for region in catalog.regions() {
        let rect = catalog.focused_viewport(&region.id, &config);
        assert!(rect.x >= 0.0 && rect.y >= 0.0, "{} origin", region.id);
        assert!(rect.right() <= world.width, "{} right edge", region.id);
        assert!(rect.bottom() <= world.height, "{} bottom edge", region.id);
        assert!(rect.width >= 1.0 && rect.height >= 1.0, "{} span", region.id);
    }
}

#[test]
fn focused_viewport_descriptor_round_trips() {
    let catalog = load_catalog();
    let config = GeometryConfig::default();
    for region in catalog.regions() {
        let rect = catalog.focused_viewport(&region.id, &config);
        let reparsed = parse_viewport(&rect.to_descriptor(), 774.0, 569.0);
        assert!((rect.x - reparsed.x).abs() < 1e-3, "{} x", region.id);
        assert!((rect.y - reparsed.y).abs() < 1e-3, "{} y", region.id);
        assert!((rect.width - reparsed.width).abs() < 1e-3, "{} width", region.id);
        assert!(
            (rect.height - reparsed.height).abs() < 1e-3,
            "{} height",
            region.id
        );
    }
}

#[test]
fn multi_subpath_outline_accumulates_across_moves() {
    let catalog = load_catalog();
    let region = catalog.region("guangdong").unwrap();
    let points = parse_outline(&region.outline);
    // 8 points from the mainland subpath, 4 from the island.
    assert_eq!(points.len(), 12);
    // The island subpath starts relative to the mainland's last point.
    assert_eq!(points[8].x, points[7].x - 20.0);
    assert_eq!(points[8].y, points[7].y + 30.0);

    let bounds = catalog.region_bounds("guangdong").unwrap();
    assert_eq!(bounds.min_x, 450.0);
    assert_eq!(bounds.max_x, 550.0);
}

#[test]
fn every_city_label_fits_its_focused_viewport() {
    let catalog = load_catalog();
    let config = GeometryConfig::default();

    for city in catalog.cities() {
        if city.photo_count == 0 {
            continue;
        }
        let selection = Selection {
            mode: MapMode::Atlas,
            active_city_id: Some(city.id.clone()),
            focused_region_id: Some(city.region_id.clone()),
            visible_label_city_id: Some(city.id.clone()),
        };
        let view = focus_view(&catalog, &selection, &config);
        let marker = view
            .markers
            .iter()
            .find(|marker| marker.city_id == city.id)
            .expect("selected city appears in its own focus view");
        let label = marker.label.expect("visible label resolved");

        let width = estimated_text_width(&city.name, &config.metrics);
        let height = estimated_text_height(&config.metrics);
        let left = match label.anchor {
            TextAnchor::Start => label.x,
            TextAnchor::End => label.x - width,
            TextAnchor::Middle => label.x - width / 2.0,
        };
        let vp = view.viewport;
        assert!(left >= vp.x, "{}: label left {left} < {}", city.id, vp.x);
        assert!(
            left + width <= vp.right(),
            "{}: label right {} > {}",
            city.id,
            left + width,
            vp.right()
        );
        assert!(label.y - height >= vp.y, "{}: label top", city.id);
        assert!(label.y <= vp.bottom(), "{}: label bottom", city.id);
    }
}

#[test]
fn municipality_focus_frames_a_tight_viewport() {
    let catalog = load_catalog();
    let config = GeometryConfig::default();
    let rect = catalog.focused_viewport("shanghai", &config);
    // bbox 601..610 x 382..394, padded by 12 on each side.
    assert_eq!(rect.x, 589.0);
    assert_eq!(rect.y, 370.0);
    assert_eq!(rect.width, 33.0);
    assert_eq!(rect.height, 36.0);
}
