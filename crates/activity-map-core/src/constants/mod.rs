// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Map view defaults, tile provider, path styling, endpoints and units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large file.

/// Unit conversion and measurement constants
pub mod units;

/// Default map view and base tile layer
pub mod map {
    /// Default center latitude (Calgary)
    pub const DEFAULT_CENTER_LAT: f64 = 51.044_922;
    /// Default center longitude (Calgary)
    pub const DEFAULT_CENTER_LON: f64 = -114.073_746;
    /// Default zoom level of the initial view
    pub const DEFAULT_ZOOM: u8 = 10;
    /// Identifier of the DOM element the map is mounted on
    pub const MOUNT_ELEMENT_ID: &str = "map";
    /// `OpenStreetMap` tile URL template
    pub const TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
    /// Maximum zoom served by the tile provider
    pub const TILE_MAX_ZOOM: u8 = 19;
    /// Attribution required by the tile provider
    pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap";
    /// Leaflet release the generated page loads
    pub const LEAFLET_VERSION: &str = "1.9.4";
}

/// Route overlay styling
pub mod path_style {
    /// Stroke weight in pixels
    pub const STROKE_WEIGHT: u32 = 3;
    /// Stroke opacity
    pub const STROKE_OPACITY: f64 = 1.0;
    /// Color of rides
    pub const RIDE_COLOR: &str = "green";
    /// Color of runs
    pub const RUN_COLOR: &str = "red";
    /// Color of alpine ski days
    pub const ALPINE_SKI_COLOR: &str = "blue";
    /// Color of nordic ski sessions
    pub const NORDIC_SKI_COLOR: &str = "#77C3EC";
    /// Color of hikes
    pub const HIKE_COLOR: &str = "brown";
    /// Color of every other category
    pub const DEFAULT_COLOR: &str = "black";
}

/// Accordion markup contract
pub mod accordion {
    /// Class carried by accordion headers
    pub const HEADER_CLASS: &str = "accordion";
    /// Class toggled on a header while its panel is open
    pub const ACTIVE_CLASS: &str = "active";
    /// Class carried by accordion panels
    pub const PANEL_CLASS: &str = "panel";
}

/// API endpoints
pub mod endpoints {
    /// Map page
    pub const INDEX: &str = "/";
    /// Full activity collection
    pub const ALL_ACTIVITIES: &str = "/api/all_activities";
    /// Per-group summary statistics
    pub const SUMMARY: &str = "/api/summary";
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
}

/// Network defaults
pub mod network {
    /// Default HTTP port of the page server
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
    /// Default host the page server binds to
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Service identification
pub mod service_names {
    /// Service name used in structured logs
    pub const ACTIVITY_MAP: &str = "activity-map";
}
