// ABOUTME: In-memory map surface that records the view, tile layers and overlays it receives
// ABOUTME: Lets tests and the page server inspect exactly what a render produced
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MapSurface, PathOverlay, TileLayer};
use crate::models::LatLng;

/// Map surface backed by plain vectors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    /// Last view set, as center and zoom
    pub view: Option<(LatLng, u8)>,
    /// Tile layers in the order they were added
    pub tile_layers: Vec<TileLayer>,
    /// Route overlays in the order they were drawn
    pub overlays: Vec<PathOverlay>,
}

impl MapSurface for RecordingSurface {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.view = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) {
        self.tile_layers.push(layer.clone());
    }

    fn add_path(&mut self, overlay: PathOverlay) {
        self.overlays.push(overlay);
    }

    fn clear(&mut self) {
        self.overlays.clear();
    }
}
