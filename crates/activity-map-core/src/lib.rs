// ABOUTME: Core types and constants for the activity map workspace
// ABOUTME: Foundation crate with error handling, activity models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Activity Map Core
//!
//! Shared types for the activity map renderer. This crate changes rarely and
//! carries no I/O, so the renderer, the HTTP client and the page server can all
//! depend on it without pulling in each other's stacks.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Map defaults, tile provider, endpoints and unit conversions
//! - **models**: `Activity`, `ActivityCategory` and `LatLng`

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Activity, `ActivityCategory`, `LatLng`)
pub mod models;
