// ABOUTME: Main library entry point for the activity map renderer
// ABOUTME: Fetches activities, decodes their routes and draws them on a Leaflet map
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Activity Map
//!
//! Renders a collection of fitness activities (runs, rides, ski days, hikes)
//! as colored routes on an interactive Leaflet map, with a collapsible
//! accordion of summary statistics next to it.
//!
//! ## Architecture
//!
//! - **Fetcher**: one `GET /api/all_activities`, logged and dropped on failure
//! - **Renderer**: decodes each encoded route and draws it on a [`render::MapSurface`]
//! - **Panels**: accordion headers that toggle their adjacent panel
//! - **Stats**: ride, commute and mountain-bike summaries shown in the panels
//! - **Server**: serves the map page and the activity collection
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use activity_map::config::{ClientConfig, MapConfig};
//! use activity_map::fetcher::{load_and_render, ActivityFetcher, LoadOutcome};
//! use activity_map::render::{MapRenderer, RecordingSurface};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = ActivityFetcher::new(&ClientConfig::default())?;
//!     let mut renderer = MapRenderer::new(RecordingSurface::default(), &MapConfig::default());
//!
//!     if let LoadOutcome::Rendered { report, .. } = load_and_render(&fetcher, &mut renderer).await {
//!         println!("drew {} routes", report.drawn);
//!     }
//!     Ok(())
//! }
//! ```

/// Error types, models and constants shared with the core crate
pub use activity_map_core::{constants, errors, models};

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Shared HTTP client with configured timeouts
pub mod http_client;

/// Record-by-record activity collection parsing
pub mod collection;

/// One-shot activity fetch and the load-then-render error boundary
pub mod fetcher;

/// Encoded polyline codec
pub mod polyline;

/// Category colors and route stroke styling
pub mod style;

/// Popup content and derived display fields
pub mod popup;

/// Map renderer and map surfaces
pub mod render;

/// Accordion panel toggling
pub mod panels;

/// Ride, commute and mountain-bike summary statistics
pub mod stats;

/// Full HTML map page assembly
pub mod page;

/// HTTP routes of the page server
pub mod routes;

/// Page server state and lifecycle
pub mod server;
