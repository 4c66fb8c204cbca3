// ABOUTME: Core data models for the activity map
// ABOUTME: Re-exports Activity, ActivityCategory and geographic coordinate types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Activities arrive as JSON from the `/api/all_activities` endpoint in the
//! shape the upstream fitness provider uses. Every field the renderer does not
//! strictly need is optional so that one incomplete record cannot fail the
//! parse of the whole collection.

mod activity;
mod category;
mod geo;

pub use activity::{Activity, ActivityBuilder, ActivityMap};
pub use category::ActivityCategory;
pub use geo::LatLng;
