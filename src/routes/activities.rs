// ABOUTME: Activity API routes serving the loaded collection and its summary statistics
// ABOUTME: Both answer from the immutable snapshot shared through the server state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity collection routes

use crate::constants::endpoints;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

/// Activity API routes
pub struct ActivityRoutes;

impl ActivityRoutes {
    /// Create the activity routes
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(endpoints::ALL_ACTIVITIES, get(Self::handle_all_activities))
            .route(endpoints::SUMMARY, get(Self::handle_summary))
            .with_state(state)
    }

    /// Handle the full activity collection
    async fn handle_all_activities(State(state): State<Arc<AppState>>) -> Response {
        debug!(count = state.activities().len(), "Serving all activities");
        (StatusCode::OK, Json(state.activities())).into_response()
    }

    /// Handle the per-group summary statistics
    async fn handle_summary(State(state): State<Arc<AppState>>) -> Response {
        (StatusCode::OK, Json(state.summaries())).into_response()
    }
}
