// ABOUTME: Map renderer that turns activities into styled route overlays with popups
// ABOUTME: Draws onto a pluggable MapSurface and skips malformed activities with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Map Rendering
//!
//! [`MapRenderer`] owns a [`MapSurface`] and the map it represents. Creating a
//! renderer sets the initial view and adds the base tile layer; each call to
//! [`MapRenderer::render`] then appends one route overlay per well-formed
//! activity, in input order.
//!
//! Two surfaces ship with the crate:
//!
//! - [`RecordingSurface`] keeps everything in memory
//! - [`LeafletScript`] emits the equivalent Leaflet JavaScript

mod leaflet;
mod recording;

pub use leaflet::LeafletScript;
pub use recording::RecordingSurface;

use crate::collection::ActivityCollection;
use crate::config::MapConfig;
use crate::models::{Activity, LatLng};
use crate::polyline::{self, PolylineError};
use crate::popup::Popup;
use crate::style::PathStyle;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Raster tile layer drawn beneath the routes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    /// URL template with `{z}`, `{x}` and `{y}` placeholders
    #[serde(skip)]
    pub url_template: String,
    /// Maximum zoom served by the provider
    pub max_zoom: u8,
    /// Attribution shown in the map corner
    pub attribution: String,
}

impl From<&MapConfig> for TileLayer {
    fn from(config: &MapConfig) -> Self {
        Self {
            url_template: config.tile_url_template.clone(),
            max_zoom: config.tile_max_zoom,
            attribution: config.tile_attribution.clone(),
        }
    }
}

/// One activity route ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PathOverlay {
    /// Route vertices in order
    pub points: Vec<LatLng>,
    /// Stroke
    pub style: PathStyle,
    /// Content shown on click
    pub popup: Popup,
}

/// Something a map can be drawn on
pub trait MapSurface {
    /// Center the view
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Add a base tile layer
    fn add_tile_layer(&mut self, layer: &TileLayer);

    /// Draw a route overlay on top of the existing ones
    fn add_path(&mut self, overlay: PathOverlay);

    /// Remove every route overlay, keeping the view and tile layers
    fn clear(&mut self);
}

/// Why an activity was left off the map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// No `map.summary_polyline`
    #[error("activity has no encoded route")]
    MissingPolyline,
    /// The route decoded to zero points
    #[error("encoded route is empty")]
    EmptyPath,
    /// The route is not a valid encoded polyline
    #[error("encoded route is invalid: {0}")]
    Undecodable(#[from] PolylineError),
    /// The collection element is not an activity at all
    #[error("record is not an activity: {0}")]
    Malformed(String),
}

/// An activity that was not drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedActivity {
    /// Position in the source collection
    pub index: usize,
    /// What was wrong with it
    pub reason: SkipReason,
}

/// Outcome of one [`MapRenderer::render`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Number of overlays added
    pub drawn: usize,
    /// Activities left off the map
    pub skipped: Vec<SkippedActivity>,
}

/// Build the overlay for one activity
///
/// # Errors
///
/// Returns the [`SkipReason`] when the activity lacks a usable route. Missing
/// popup fields only drop their popup line.
pub fn build_overlay(activity: &Activity) -> Result<PathOverlay, SkipReason> {
    let encoded = activity
        .summary_polyline()
        .ok_or(SkipReason::MissingPolyline)?;

    let points = polyline::decode(encoded)?;
    if points.is_empty() {
        return Err(SkipReason::EmptyPath);
    }

    Ok(PathOverlay {
        points,
        style: PathStyle::for_category(activity.category()),
        popup: Popup::for_activity(activity),
    })
}

/// Draws activity collections onto a surface it owns
#[derive(Debug)]
pub struct MapRenderer<S: MapSurface> {
    surface: S,
}

impl<S: MapSurface> MapRenderer<S> {
    /// Take ownership of `surface`, set its initial view and add the base tiles
    #[must_use]
    pub fn new(mut surface: S, config: &MapConfig) -> Self {
        surface.set_view(config.center, config.zoom);
        surface.add_tile_layer(&TileLayer::from(config));
        Self { surface }
    }

    /// Draw every well-formed activity, in order
    ///
    /// Overlays accumulate across calls. Malformed activities are logged and
    /// reported, never fatal.
    pub fn render(&mut self, activities: &[Activity]) -> RenderReport {
        self.render_indexed(activities.iter().enumerate())
    }

    /// Draw a parsed collection
    ///
    /// Elements that were not activities are reported as
    /// [`SkipReason::Malformed`]; every index refers to the source array.
    pub fn render_collection(&mut self, collection: &ActivityCollection) -> RenderReport {
        let mut report = self.render_indexed(collection.indexed());

        report
            .skipped
            .extend(collection.rejected().iter().map(|record| SkippedActivity {
                index: record.index,
                reason: SkipReason::Malformed(record.error.clone()),
            }));
        report.skipped.sort_by_key(|skipped| skipped.index);
        report
    }

    fn render_indexed<'a>(
        &mut self,
        activities: impl IntoIterator<Item = (usize, &'a Activity)>,
    ) -> RenderReport {
        let mut report = RenderReport::default();

        for (index, activity) in activities {
            match build_overlay(activity) {
                Ok(overlay) => {
                    self.surface.add_path(overlay);
                    report.drawn += 1;
                }
                Err(reason) => {
                    warn!(
                        index,
                        name = activity.name().unwrap_or_default(),
                        reason = %reason,
                        "Skipping activity"
                    );
                    report.skipped.push(SkippedActivity { index, reason });
                }
            }
        }

        debug!(
            drawn = report.drawn,
            skipped = report.skipped.len(),
            "Rendered activity collection"
        );
        report
    }

    /// The surface drawn so far
    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to [`MapSurface::clear`] it
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give the surface back
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityBuilder, ActivityCategory};

    const ROUTE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn run(name: &str) -> Activity {
        ActivityBuilder::new(ActivityCategory::Run)
            .name(name)
            .distance(5_000.0)
            .average_speed(3.0)
            .summary_polyline(ROUTE)
            .build()
    }

    #[test]
    fn test_new_sets_view_and_tiles() {
        let renderer = MapRenderer::new(RecordingSurface::default(), &MapConfig::default());
        let surface = renderer.surface();
        let (center, zoom) = surface.view.unwrap();
        assert!((center.lat - 51.044_922).abs() < f64::EPSILON);
        assert_eq!(zoom, 10);
        assert_eq!(surface.tile_layers.len(), 1);
        assert!(surface.overlays.is_empty());
    }

    #[test]
    fn test_skip_reasons() {
        let no_route = ActivityBuilder::new(ActivityCategory::Ride)
            .distance(1.0)
            .average_speed(1.0)
            .build();
        assert_eq!(build_overlay(&no_route), Err(SkipReason::MissingPolyline));

        let empty = ActivityBuilder::new(ActivityCategory::Ride)
            .distance(1.0)
            .average_speed(1.0)
            .summary_polyline("")
            .build();
        assert_eq!(build_overlay(&empty), Err(SkipReason::EmptyPath));

        let no_speed = ActivityBuilder::new(ActivityCategory::Ride)
            .distance(1_000.0)
            .summary_polyline(ROUTE)
            .build();
        let overlay = build_overlay(&no_speed).unwrap();
        assert_eq!(overlay.popup.lines(), ["Ride", "1 km"]);

        let garbage = ActivityBuilder::new(ActivityCategory::Ride)
            .distance(1.0)
            .average_speed(1.0)
            .summary_polyline("_")
            .build();
        assert!(matches!(
            build_overlay(&garbage),
            Err(SkipReason::Undecodable(_))
        ));
    }

    #[test]
    fn test_collection_indices_refer_to_source() {
        let body = br#"[
            {"type": "Run", "map": {"summary_polyline": "_p~iF~ps|U"}},
            {"type": "Run", "distance": "5k"},
            {"type": "Run"}
        ]"#;
        let collection = ActivityCollection::from_json(body).unwrap();

        let mut renderer = MapRenderer::new(RecordingSurface::default(), &MapConfig::default());
        let report = renderer.render_collection(&collection);

        assert_eq!(report.drawn, 1);
        let skipped: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
        assert_eq!(skipped, [1, 2]);
        assert!(matches!(report.skipped[0].reason, SkipReason::Malformed(_)));
        assert_eq!(report.skipped[1].reason, SkipReason::MissingPolyline);
    }

    #[test]
    fn test_render_accumulates_and_clears() {
        let mut renderer = MapRenderer::new(RecordingSurface::default(), &MapConfig::default());
        renderer.render(&[run("a")]);
        renderer.render(&[run("b")]);
        assert_eq!(renderer.surface().overlays.len(), 2);

        renderer.surface_mut().clear();
        assert!(renderer.surface().overlays.is_empty());
        assert_eq!(renderer.surface().tile_layers.len(), 1);
    }
}
