// ABOUTME: Page server state and lifecycle: snapshot loading, router assembly and serving
// ABOUTME: The activity snapshot is read once at startup and shared immutably across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Page Server
//!
//! Serves the rendered map page at `/`, the raw collection at
//! `/api/all_activities`, group summaries at `/api/summary` and a health
//! check. Everything is computed from the snapshot when the server starts.

use crate::collection::ActivityCollection;
use crate::config::{AppConfig, MapConfig};
use crate::errors::{AppError, AppResult};
use crate::models::Activity;
use crate::page::MapPage;
use crate::routes;
use crate::stats::GroupSummary;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Immutable data shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    activities: Vec<Activity>,
    summaries: Vec<GroupSummary>,
    page_html: String,
}

impl AppState {
    /// Render the page and summaries for `collection`
    #[must_use]
    pub fn new(collection: ActivityCollection, map: &MapConfig) -> Self {
        let (page, report) = MapPage::build(&collection, map);
        if !report.skipped.is_empty() {
            warn!(
                skipped = report.skipped.len(),
                "Some activities are not drawn on the map"
            );
        }
        info!(
            activities = collection.source_len(),
            drawn = report.drawn,
            "Map page rendered"
        );

        Self {
            summaries: page.summaries().to_vec(),
            page_html: page.to_html(),
            activities: collection.into_activities(),
        }
    }

    /// The well-formed activities of the loaded collection
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Group summaries
    #[must_use]
    pub fn summaries(&self) -> &[GroupSummary] {
        &self.summaries
    }

    /// The rendered page
    #[must_use]
    pub fn page_html(&self) -> &str {
        &self.page_html
    }
}

/// Read a JSON array of activities from `path`
///
/// Elements that are not activities are logged and kept out of the
/// collection.
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and a serialization
/// error if it is not a JSON array
pub async fn load_snapshot(path: &Path) -> AppResult<ActivityCollection> {
    let raw = tokio::fs::read(path).await.map_err(|e| {
        AppError::storage(format!("Cannot read snapshot {}", path.display())).with_source(e)
    })?;

    let collection = ActivityCollection::from_json(&raw).map_err(|e| {
        AppError::serialization(format!("Invalid snapshot {}", path.display())).with_source(e)
    })?;

    info!(
        path = %path.display(),
        count = collection.activities().len(),
        rejected = collection.rejected().len(),
        "Loaded activity snapshot"
    );
    Ok(collection)
}

/// Router with every route and HTTP tracing
pub fn app(state: Arc<AppState>) -> Router {
    routes::router(state).layer(TraceLayer::new_for_http())
}

/// Serve on an already bound listener until Ctrl-C
///
/// # Errors
///
/// Returns an internal error if the server stops abnormally
pub async fn serve_on(listener: TcpListener, state: Arc<AppState>) -> AppResult<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Activity map listening on http://{addr}");
    }

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal("HTTP server failed").with_source(e))
}

/// Load the configured snapshot, bind the configured address and serve
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded, the address cannot be
/// bound, or the server stops abnormally
pub async fn serve(config: &AppConfig) -> AppResult<()> {
    let collection = load_snapshot(&config.server.data_file).await?;
    let state = Arc::new(AppState::new(collection, &config.map));

    let addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::config(format!("Cannot bind HTTP listener on {addr}")).with_source(e)
    })?;

    serve_on(listener, state).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityBuilder, ActivityCategory};

    #[test]
    fn test_state_renders_page_and_summaries() {
        let ride = ActivityBuilder::new(ActivityCategory::Ride)
            .distance(10_000.0)
            .average_speed(10.0)
            .sport_type("Ride")
            .summary_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@")
            .build();

        let state = AppState::new(vec![ride].into(), &MapConfig::default());
        assert_eq!(state.activities().len(), 1);
        assert_eq!(state.summaries().len(), 3);
        assert_eq!(state.summaries()[0].count, 1);
        assert_eq!(state.page_html().matches("L.polyline(").count(), 1);
    }
}
