// ABOUTME: Unit conversion constants for distance and speed
// ABOUTME: Provides named constants to eliminate magic numbers in popup calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per kilometer conversion factor
pub const METERS_PER_KM: f64 = 1000.0;

/// Meters per second to kilometers per hour
pub const MPS_TO_KMH: f64 = 3.6;
