// ABOUTME: Map surface that emits Leaflet JavaScript for the browser to execute
// ABOUTME: View, tile layer and route overlays become L.map, L.tileLayer and L.polyline calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MapSurface, PathOverlay, TileLayer};
use crate::constants::map::MOUNT_ELEMENT_ID;
use crate::models::LatLng;
use serde::Serialize;

/// Leaflet script builder
///
/// Statements are kept per kind so [`MapSurface::clear`] can drop the routes
/// without touching the map or its tiles. [`LeafletScript::script`] assembles
/// them in the order Leaflet needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafletScript {
    view: Option<String>,
    tile_layers: Vec<String>,
    paths: Vec<String>,
}

impl LeafletScript {
    /// Complete script, one statement per line
    #[must_use]
    pub fn script(&self) -> String {
        self.view
            .iter()
            .chain(&self.tile_layers)
            .chain(&self.paths)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of route statements
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }
}

impl MapSurface for LeafletScript {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.view = Some(format!(
            "var map = L.map({}).setView({}, {zoom});",
            js_value(&MOUNT_ELEMENT_ID),
            js_value(&center),
        ));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(format!(
            "L.tileLayer({}, {}).addTo(map);",
            js_value(&layer.url_template),
            js_value(layer),
        ));
    }

    fn add_path(&mut self, overlay: PathOverlay) {
        self.paths.push(format!(
            "L.polyline({}, {}).addTo(map).bindPopup({});",
            js_value(&overlay.points),
            js_value(&overlay.style),
            js_value(&overlay.popup.to_html()),
        ));
    }

    fn clear(&mut self) {
        self.paths.clear();
    }
}

/// JSON literal that is also safe inside an inline `<script>` element
fn js_value<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).map_or_else(
        |_| "null".to_owned(),
        |json| json.replace("</", "<\\/"),
    )
}
