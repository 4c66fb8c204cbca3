// ABOUTME: Integration tests for rendering activity collections onto map surfaces
// ABOUTME: Covers overlay order, colors, popup content and skip-and-continue behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use activity_map::config::MapConfig;
use activity_map::models::{Activity, ActivityBuilder, ActivityCategory};
use activity_map::render::{LeafletScript, MapRenderer, RecordingSurface, SkipReason};
use common::{activity, init_test_logging, SAMPLE_POLYLINE};

fn recording_renderer() -> MapRenderer<RecordingSurface> {
    MapRenderer::new(RecordingSurface::default(), &MapConfig::default())
}

#[test]
fn test_end_to_end_single_ride() {
    init_test_logging();
    let collection: Vec<Activity> = serde_json::from_str(
        r#"[{"type":"Ride","distance":10000,"average_speed":10,
             "map":{"summary_polyline":"_p~iF~ps|U_ulLnnqC_mqNvxq`@"}}]"#,
    )
    .unwrap();

    let mut renderer = recording_renderer();
    let report = renderer.render(&collection);

    assert_eq!(report.drawn, 1);
    assert!(report.skipped.is_empty());

    let surface = renderer.surface();
    assert_eq!(surface.overlays.len(), 1);
    let overlay = &surface.overlays[0];
    assert_eq!(overlay.style.color, "green");
    assert_eq!(overlay.points.len(), 3);
    assert!(overlay.popup.contains("Ride"));
    assert!(overlay.popup.contains("10 km"));
    assert!(overlay.popup.contains("36 km/h"));
}

#[test]
fn test_one_overlay_per_activity_in_order() {
    init_test_logging();
    let categories = [
        ActivityCategory::Hike,
        ActivityCategory::Run,
        ActivityCategory::NordicSki,
        ActivityCategory::Other("Swim".into()),
        ActivityCategory::AlpineSki,
        ActivityCategory::Unknown,
    ];
    let collection: Vec<Activity> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| activity(c.clone(), &format!("activity {i}")))
        .collect();

    let mut renderer = recording_renderer();
    let report = renderer.render(&collection);
    assert_eq!(report.drawn, categories.len());

    let colors: Vec<&str> = renderer
        .surface()
        .overlays
        .iter()
        .map(|o| o.style.color)
        .collect();
    assert_eq!(
        colors,
        ["brown", "red", "#77C3EC", "black", "blue", "black"]
    );

    for (i, overlay) in renderer.surface().overlays.iter().enumerate() {
        assert_eq!(overlay.popup.lines()[0], format!("activity {i}"));
    }
}

#[test]
fn test_malformed_activities_are_skipped_not_fatal() {
    init_test_logging();
    let collection = vec![
        activity(ActivityCategory::Run, "good 1"),
        ActivityBuilder::new(ActivityCategory::Ride)
            .name("no route")
            .distance(1_000.0)
            .average_speed(5.0)
            .build(),
        ActivityBuilder::new(ActivityCategory::Ride)
            .name("broken route")
            .distance(1_000.0)
            .average_speed(5.0)
            .summary_polyline("_p~iF")
            .build(),
        ActivityBuilder::new(ActivityCategory::Ride)
            .name("no distance")
            .average_speed(5.0)
            .summary_polyline(SAMPLE_POLYLINE)
            .build(),
        activity(ActivityCategory::Hike, "good 2"),
    ];

    let mut renderer = recording_renderer();
    let report = renderer.render(&collection);

    assert_eq!(report.drawn, 3);
    let skipped: Vec<(usize, &SkipReason)> =
        report.skipped.iter().map(|s| (s.index, &s.reason)).collect();
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0], (1, &SkipReason::MissingPolyline));
    assert!(matches!(skipped[1], (2, SkipReason::Undecodable(_))));

    let names: Vec<&str> = renderer
        .surface()
        .overlays
        .iter()
        .map(|o| o.popup.lines()[0].as_str())
        .collect();
    assert_eq!(names, ["good 1", "no distance", "good 2"]);
}

#[test]
fn test_missing_popup_fields_still_draw() {
    init_test_logging();
    let bare = ActivityBuilder::new(ActivityCategory::Run)
        .summary_polyline(SAMPLE_POLYLINE)
        .build();

    let mut renderer = recording_renderer();
    let report = renderer.render(&[bare]);

    assert_eq!(report.drawn, 1);
    assert!(report.skipped.is_empty());
    let overlay = &renderer.surface().overlays[0];
    assert_eq!(overlay.popup.lines(), ["Run"]);
    assert_eq!(overlay.style.color, "red");
}

#[test]
fn test_empty_collection_leaves_tiles_only() {
    let mut renderer = recording_renderer();
    let report = renderer.render(&[]);
    assert_eq!(report.drawn, 0);

    let surface = renderer.into_surface();
    assert!(surface.overlays.is_empty());
    assert_eq!(surface.tile_layers.len(), 1);
    assert_eq!(surface.tile_layers[0].max_zoom, 19);
    assert_eq!(surface.tile_layers[0].attribution, "© OpenStreetMap");
}

#[test]
fn test_custom_view() {
    let mut config = MapConfig::default();
    config.center.lat = 46.5;
    config.center.lng = 7.9;
    config.zoom = 12;

    let renderer = MapRenderer::new(RecordingSurface::default(), &config);
    let (center, zoom) = renderer.surface().view.unwrap();
    assert!((center.lat - 46.5).abs() < f64::EPSILON);
    assert!((center.lng - 7.9).abs() < f64::EPSILON);
    assert_eq!(zoom, 12);
}

#[test]
fn test_leaflet_script_has_one_polyline_per_drawn_activity() {
    init_test_logging();
    let collection = vec![
        activity(ActivityCategory::Ride, "a"),
        ActivityBuilder::new(ActivityCategory::Run).build(),
        activity(ActivityCategory::AlpineSki, "b"),
    ];

    let mut renderer = MapRenderer::new(LeafletScript::default(), &MapConfig::default());
    renderer.render(&collection);

    let script = renderer.surface().script();
    assert_eq!(script.matches("L.polyline(").count(), 2);
    assert_eq!(script.matches(".bindPopup(").count(), 2);
    assert!(script.contains("\"color\":\"blue\""));
    assert!(script.contains("\"weight\":3"));
    assert!(script.contains("\"opacity\":1.0"));
}
