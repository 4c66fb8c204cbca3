// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, sample activities and an ephemeral stub activity API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `activity_map`

use activity_map::config::ClientConfig;
use activity_map::models::{Activity, ActivityBuilder, ActivityCategory};
use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Once;
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Reference route: (38.5, -120.2), (40.7, -120.95), (43.252, -126.453)
pub const SAMPLE_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Well-formed activity of the given category
pub fn activity(category: ActivityCategory, name: &str) -> Activity {
    ActivityBuilder::new(category)
        .name(name)
        .distance(10_000.0)
        .average_speed(10.0)
        .total_elevation_gain(120.0)
        .summary_polyline(SAMPLE_POLYLINE)
        .build()
}

/// Collection as the provider would serve it, covering every stats group
pub const SAMPLE_COLLECTION_JSON: &str = r#"[
    {"name": "Road loop", "type": "Ride", "sport_type": "Ride", "commute": false,
     "distance": 42000.0, "average_speed": 8.0, "total_elevation_gain": 350.0, "average_watts": 180.0,
     "map": {"summary_polyline": "_p~iF~ps|U_ulLnnqC_mqNvxq`@"}},
    {"name": "To work", "type": "Ride", "sport_type": "Ride", "commute": true,
     "distance": 8000.0, "average_speed": 6.0, "total_elevation_gain": 40.0,
     "map": {"summary_polyline": "_p~iF~ps|U"}},
    {"name": "Trail day", "type": "Ride", "sport_type": "MountainBikeRide", "commute": false,
     "distance": 15000.0, "average_speed": 4.0, "total_elevation_gain": 600.0, "average_watts": 210.0,
     "map": {"summary_polyline": "_ulLnnqC"}},
    {"name": "Lunch run", "type": "Run", "sport_type": "Run",
     "distance": 5000.0, "average_speed": 3.2, "total_elevation_gain": 20.0,
     "map": {"summary_polyline": "_mqNvxq`@"}}
]"#;

/// Parsed [`SAMPLE_COLLECTION_JSON`]
pub fn sample_collection() -> Vec<Activity> {
    serde_json::from_str(SAMPLE_COLLECTION_JSON).expect("sample collection is valid JSON")
}

/// Client configuration pointing at `base_url` with short timeouts
pub fn client_config(base_url: &str) -> ClientConfig {
    ClientConfig {
        base_url: base_url.to_owned(),
        timeout_secs: 5,
        connect_timeout_secs: 2,
    }
}

/// Serve `router` on an ephemeral localhost port
pub async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });
    addr
}

/// Stub activity API answering `/api/all_activities` with a fixed response
pub async fn spawn_activity_api(
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
) -> String {
    let router = Router::new().route(
        "/api/all_activities",
        get(move || async move { (status, [(header::CONTENT_TYPE, content_type)], body) }),
    );
    format!("http://{}", spawn_router(router).await)
}

/// Base URL of a localhost port nobody listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
