// ABOUTME: Route module organization for the activity map page server
// ABOUTME: Combines the map page, activity API and health routes into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the page server
//!
//! Each domain module holds its route definitions and thin handlers that read
//! from the shared [`AppState`].

/// Activity collection and summary routes
pub mod activities;
/// Health check route
pub mod health;
/// Map page route
pub mod page;

pub use activities::ActivityRoutes;
pub use health::HealthRoutes;
pub use page::MapPageRoutes;

use crate::errors::AppError;
use crate::server::AppState;
use axum::{http::Uri, Router};
use std::sync::Arc;

/// Every route of the page server
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(MapPageRoutes::routes(Arc::clone(&state)))
        .merge(ActivityRoutes::routes(state))
        .merge(HealthRoutes::routes())
        .fallback(handle_not_found)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}
