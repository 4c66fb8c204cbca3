// ABOUTME: Activity model as served by the all-activities endpoint, plus its builder
// ABOUTME: Fields mirror the provider's summary activity JSON; unknown fields are ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::ActivityCategory;

/// Map block of a summary activity
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActivityMap {
    /// Encoded polyline of the simplified route
    #[serde(default)]
    pub summary_polyline: Option<String>,
}

/// A single activity as rendered on the map
///
/// Fields are private; read them through the accessors and construct new
/// instances with [`ActivityBuilder`] or by deserializing provider JSON.
///
/// # Examples
///
/// ```rust
/// use activity_map_core::models::{ActivityBuilder, ActivityCategory};
///
/// let activity = ActivityBuilder::new(ActivityCategory::Ride)
///     .name("Morning Ride")
///     .distance(10_000.0)
///     .average_speed(10.0)
///     .summary_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@")
///     .build();
///
/// assert_eq!(activity.name(), Some("Morning Ride"));
/// assert_eq!(activity.category(), &ActivityCategory::Ride);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Category tag
    #[serde(rename = "type", default)]
    category: ActivityCategory,
    /// Distance in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    /// Average moving speed in meters per second
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_speed: Option<f64>,
    /// Elevation gained in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_elevation_gain: Option<f64>,
    /// Route summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    map: Option<ActivityMap>,
    /// Finer-grained sport tag (e.g. `MountainBikeRide`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sport_type: Option<String>,
    /// Whether the activity was flagged as a commute
    #[serde(default)]
    commute: bool,
    /// Average power in watts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_watts: Option<f64>,
}

impl Activity {
    /// Display label
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Category tag
    #[must_use]
    pub const fn category(&self) -> &ActivityCategory {
        &self.category
    }

    /// Distance in meters
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Average speed in meters per second
    #[must_use]
    pub const fn average_speed(&self) -> Option<f64> {
        self.average_speed
    }

    /// Elevation gain in meters
    #[must_use]
    pub const fn total_elevation_gain(&self) -> Option<f64> {
        self.total_elevation_gain
    }

    /// Encoded route, if the activity has one
    #[must_use]
    pub fn summary_polyline(&self) -> Option<&str> {
        self.map.as_ref()?.summary_polyline.as_deref()
    }

    /// Finer-grained sport tag
    #[must_use]
    pub fn sport_type(&self) -> Option<&str> {
        self.sport_type.as_deref()
    }

    /// Commute flag
    #[must_use]
    pub const fn is_commute(&self) -> bool {
        self.commute
    }

    /// Average power in watts
    #[must_use]
    pub const fn average_watts(&self) -> Option<f64> {
        self.average_watts
    }
}

/// Builder for [`Activity`]
#[derive(Debug, Clone)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Start an activity of the given category with every other field empty
    #[must_use]
    pub fn new(category: ActivityCategory) -> Self {
        Self {
            activity: Activity {
                name: None,
                category,
                distance: None,
                average_speed: None,
                total_elevation_gain: None,
                map: None,
                sport_type: None,
                commute: false,
                average_watts: None,
            },
        }
    }

    /// Set the display label
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.activity.name = Some(name.into());
        self
    }

    /// Set the distance in meters
    #[must_use]
    pub fn distance(mut self, meters: f64) -> Self {
        self.activity.distance = Some(meters);
        self
    }

    /// Set the average speed in meters per second
    #[must_use]
    pub fn average_speed(mut self, meters_per_second: f64) -> Self {
        self.activity.average_speed = Some(meters_per_second);
        self
    }

    /// Set the elevation gain in meters
    #[must_use]
    pub fn total_elevation_gain(mut self, meters: f64) -> Self {
        self.activity.total_elevation_gain = Some(meters);
        self
    }

    /// Set the encoded route
    #[must_use]
    pub fn summary_polyline(mut self, encoded: impl Into<String>) -> Self {
        self.activity.map = Some(ActivityMap {
            summary_polyline: Some(encoded.into()),
        });
        self
    }

    /// Set the finer-grained sport tag
    #[must_use]
    pub fn sport_type(mut self, sport_type: impl Into<String>) -> Self {
        self.activity.sport_type = Some(sport_type.into());
        self
    }

    /// Flag the activity as a commute
    #[must_use]
    pub fn commute(mut self, commute: bool) -> Self {
        self.activity.commute = commute;
        self
    }

    /// Set the average power in watts
    #[must_use]
    pub fn average_watts(mut self, watts: f64) -> Self {
        self.activity.average_watts = Some(watts);
        self
    }

    /// Finish the activity
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
