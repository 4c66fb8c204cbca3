// ABOUTME: Configuration module for the map view, activity client and page server
// ABOUTME: Environment-only configuration with command-line overrides applied by the binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: all settings come from `ACTIVITY_MAP_*` variables with
//!   defaults from [`crate::constants`]

/// Environment and server configuration
pub mod environment;

pub use environment::{AppConfig, ClientConfig, Environment, MapConfig, ServerConfig};
