// ABOUTME: HTTP integration tests for the page server routes
// ABOUTME: Drives the router in-process for the map page, activity API, summaries and health check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use activity_map::collection::ActivityCollection;
use activity_map::config::MapConfig;
use activity_map::models::Activity;
use activity_map::server::{app, AppState};
use common::{init_test_logging, sample_collection};
use helpers::axum_test::AxumTestRequest;
use std::sync::Arc;

fn test_app() -> axum::Router {
    init_test_logging();
    app(Arc::new(AppState::new(
        sample_collection().into(),
        &MapConfig::default(),
    )))
}

#[tokio::test]
async fn test_all_activities_serves_snapshot() {
    let response = AxumTestRequest::get("/api/all_activities")
        .send(test_app())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.content_type(), Some("application/json"));
    let served: Vec<Activity> = response.json();
    assert_eq!(served, sample_collection());
}

#[tokio::test]
async fn test_index_serves_map_page() {
    let response = AxumTestRequest::get("/").send(test_app()).await;

    assert_eq!(response.status(), 200);
    assert!(response
        .content_type()
        .is_some_and(|ct| ct.starts_with("text/html")));

    let html = response.text();
    assert!(html.contains("<div id=\"map\"></div>"));
    assert_eq!(html.matches("class=\"accordion\"").count(), 3);
    assert_eq!(html.matches("L.polyline(").count(), 4);
    assert!(html.contains("getComputedStyle"));
}

#[tokio::test]
async fn test_summary_endpoint() {
    let response = AxumTestRequest::get("/api/summary").send(test_app()).await;

    assert_eq!(response.status(), 200);
    let summaries: serde_json::Value = response.json();
    let groups: Vec<&str> = summaries
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["group"].as_str().unwrap())
        .collect();
    assert_eq!(groups, ["rides", "commutes", "mountain_bike"]);
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/health").send(test_app()).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = AxumTestRequest::get("/api/activities/42")
        .send(test_app())
        .await;
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
}

#[tokio::test]
async fn test_empty_snapshot_still_serves_tiles() {
    let state = AppState::new(ActivityCollection::default(), &MapConfig::default());
    let response = AxumTestRequest::get("/").send(app(Arc::new(state))).await;

    let html = response.text();
    assert!(html.contains("L.tileLayer("));
    assert!(!html.contains("L.polyline("));
}
