// ABOUTME: Summary statistics for rides, bike commutes and mountain-bike rides
// ABOUTME: Counts, totals and per-activity averages rounded to one decimal for the accordion panels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{METERS_PER_KM, MPS_TO_KMH};
use crate::models::{Activity, ActivityCategory};
use serde::Serialize;

/// Sport tag of a plain road ride
const ROAD_RIDE_SPORT: &str = "Ride";

/// Sport tag of a mountain-bike ride
const MOUNTAIN_BIKE_SPORT: &str = "MountainBikeRide";

/// Round to one decimal, ties away from zero
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Activity subsets summarized on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityGroup {
    /// Non-commute rides tagged as plain rides
    Rides,
    /// Rides flagged as commutes
    Commutes,
    /// Rides tagged as mountain-bike rides
    MountainBike,
}

impl ActivityGroup {
    /// Every group, in page order
    pub const ALL: [Self; 3] = [Self::Rides, Self::Commutes, Self::MountainBike];

    /// Whether `activity` belongs to this group
    #[must_use]
    pub fn matches(self, activity: &Activity) -> bool {
        if activity.category() != &ActivityCategory::Ride {
            return false;
        }
        match self {
            Self::Rides => {
                !activity.is_commute() && activity.sport_type() == Some(ROAD_RIDE_SPORT)
            }
            Self::Commutes => activity.is_commute(),
            Self::MountainBike => activity.sport_type() == Some(MOUNTAIN_BIKE_SPORT),
        }
    }

    /// Heading shown on the accordion header
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Rides => "Rides",
            Self::Commutes => "Commutes",
            Self::MountainBike => "Mountain bike",
        }
    }
}

/// Totals and averages of one [`ActivityGroup`]
///
/// Averages are taken over the activities that carry the field; a group with
/// no such activity has `None` instead of a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Group summarized
    pub group: ActivityGroup,
    /// Number of activities in the group
    pub count: usize,
    /// Sum of distances in kilometers
    pub total_distance_km: f64,
    /// Sum of elevation gain in meters
    pub total_elevation_m: f64,
    /// Mean average speed in km/h
    pub avg_speed_kmh: Option<f64>,
    /// Mean average power in watts
    pub avg_power_w: Option<f64>,
    /// Mean distance in kilometers
    pub avg_distance_km: Option<f64>,
    /// Mean elevation gain in meters
    pub avg_elevation_m: Option<f64>,
}

impl GroupSummary {
    /// Labelled values for display; missing averages read `n/a`
    #[must_use]
    pub fn rows(&self) -> [(&'static str, String); 7] {
        let show = |value: Option<f64>| value.map_or_else(|| "n/a".to_owned(), |v| v.to_string());
        [
            ("Total activities", self.count.to_string()),
            ("Total distance (km)", self.total_distance_km.to_string()),
            ("Total elevation (m)", self.total_elevation_m.to_string()),
            ("Average speed (km/h)", show(self.avg_speed_kmh)),
            ("Average power (W)", show(self.avg_power_w)),
            ("Average distance (km)", show(self.avg_distance_km)),
            ("Average elevation (m)", show(self.avg_elevation_m)),
        ]
    }
}

/// Summarize the activities of `group`
#[must_use]
pub fn summarize(group: ActivityGroup, activities: &[Activity]) -> GroupSummary {
    let members: Vec<&Activity> = activities.iter().filter(|a| group.matches(a)).collect();

    let distances = || members.iter().filter_map(|a| a.distance());
    let elevations = || members.iter().filter_map(|a| a.total_elevation_gain());

    GroupSummary {
        group,
        count: members.len(),
        total_distance_km: round1(total(distances()) / METERS_PER_KM),
        total_elevation_m: round1(total(elevations())),
        avg_speed_kmh: mean(members.iter().filter_map(|a| a.average_speed()))
            .map(|speed| round1(speed * MPS_TO_KMH)),
        avg_power_w: mean(members.iter().filter_map(|a| a.average_watts())).map(round1),
        avg_distance_km: mean(distances()).map(|meters| round1(meters / METERS_PER_KM)),
        avg_elevation_m: mean(elevations()).map(round1),
    }
}

/// Summaries of every group, in page order
#[must_use]
pub fn summarize_all(activities: &[Activity]) -> Vec<GroupSummary> {
    ActivityGroup::ALL
        .iter()
        .map(|&group| summarize(group, activities))
        .collect()
}

/// Sum starting from `+0.0`; `Iterator::sum` over nothing yields `-0.0`
fn total(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |sum, v| sum + v)
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert!((round1(12.345) - 12.3).abs() < f64::EPSILON);
        assert!((round1(0.25) - 0.3).abs() < f64::EPSILON);
        assert!((round1(-0.25) + 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean_of_nothing() {
        assert_eq!(mean(std::iter::empty()), None);
        assert_eq!(mean([1.0, 2.0].into_iter()), Some(1.5));
    }

    #[test]
    fn test_total_of_nothing_is_positive_zero() {
        let sum = total(std::iter::empty());
        assert!(sum.is_sign_positive());
        assert_eq!(sum.to_string(), "0");
    }

    #[test]
    fn test_empty_group_rows() {
        let summary = summarize(ActivityGroup::Commutes, &[]);
        assert_eq!(summary.count, 0);
        let rows = summary.rows();
        assert_eq!(rows[0], ("Total activities", "0".to_owned()));
        assert_eq!(rows[1], ("Total distance (km)", "0".to_owned()));
        assert_eq!(rows[2], ("Total elevation (m)", "0".to_owned()));
        assert_eq!(rows[3], ("Average speed (km/h)", "n/a".to_owned()));
    }
}
