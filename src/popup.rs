// ABOUTME: Popup content shown when a route is clicked, with its derived display fields
// ABOUTME: Converts meters and meters-per-second to rounded kilometers and km/h
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{METERS_PER_KM, MPS_TO_KMH};
use crate::models::Activity;
use serde::Serialize;

/// Round to two decimals, ties away from zero
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Distance in kilometers, rounded to two decimals
#[must_use]
pub fn distance_km(meters: f64) -> f64 {
    round2(meters / METERS_PER_KM)
}

/// Speed in km/h, rounded to two decimals
#[must_use]
pub fn speed_kmh(meters_per_second: f64) -> f64 {
    round2(meters_per_second * MPS_TO_KMH)
}

/// Plain-text popup lines for one activity
///
/// Lines appear in a fixed order (name, category, distance, speed, elevation
/// gain); a line is left out when its field is absent, except the category
/// which is always shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Popup {
    lines: Vec<String>,
}

impl Popup {
    /// Build the popup for an activity
    ///
    /// # Examples
    ///
    /// ```rust
    /// use activity_map::models::{ActivityBuilder, ActivityCategory};
    /// use activity_map::popup::Popup;
    ///
    /// let activity = ActivityBuilder::new(ActivityCategory::Ride)
    ///     .distance(12_345.0)
    ///     .average_speed(5.5)
    ///     .build();
    ///
    /// let popup = Popup::for_activity(&activity);
    /// assert_eq!(popup.lines(), ["Ride", "12.35 km", "19.8 km/h"]);
    /// ```
    #[must_use]
    pub fn for_activity(activity: &Activity) -> Self {
        let mut lines = Vec::with_capacity(5);

        if let Some(name) = activity.name() {
            lines.push(name.to_owned());
        }
        lines.push(activity.category().to_string());
        if let Some(meters) = activity.distance() {
            lines.push(format!("{} km", distance_km(meters)));
        }
        if let Some(speed) = activity.average_speed() {
            lines.push(format!("{} km/h", speed_kmh(speed)));
        }
        if let Some(gain) = activity.total_elevation_gain() {
            lines.push(format!("{} m", round2(gain)));
        }

        Self { lines }
    }

    /// Lines in display order
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line equals `text`
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lines.iter().any(|line| line == text)
    }

    /// HTML-escaped lines joined with `<br>`
    #[must_use]
    pub fn to_html(&self) -> String {
        self.lines
            .iter()
            .map(|line| html_escape::encode_text(line))
            .collect::<Vec<_>>()
            .join("<br>")
    }
}
