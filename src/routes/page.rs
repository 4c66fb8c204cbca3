// ABOUTME: Map page route serving the pre-rendered HTML page
// ABOUTME: The page is built once at startup from the activity snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::endpoints;
use crate::server::AppState;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

/// Map page routes
pub struct MapPageRoutes;

impl MapPageRoutes {
    /// Create the index route
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route(endpoints::INDEX, get(Self::handle_index))
            .with_state(state)
    }

    async fn handle_index(State(state): State<Arc<AppState>>) -> Html<String> {
        Html(state.page_html().to_owned())
    }
}
