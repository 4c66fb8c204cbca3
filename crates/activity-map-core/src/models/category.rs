// ABOUTME: Activity category enumeration parsed from the provider's `type` tag
// ABOUTME: Known categories get dedicated variants; anything else is carried through verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an activity as tagged by the provider
///
/// Parsing is an exact, case-sensitive match on the provider tag. Tags outside
/// the known set land in `Other`, and a missing or `null` tag becomes
/// `Unknown`; neither is an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ActivityCategory {
    /// Bike ride
    Ride,
    /// Run
    Run,
    /// Downhill ski day
    AlpineSki,
    /// Cross-country ski session
    NordicSki,
    /// Hike
    Hike,
    /// Any other provider tag
    Other(String),
    /// The activity carried no tag at all
    #[default]
    Unknown,
}

impl ActivityCategory {
    /// Parse a provider tag
    #[must_use]
    pub fn from_provider_tag(tag: &str) -> Self {
        match tag {
            "Ride" => Self::Ride,
            "Run" => Self::Run,
            "AlpineSki" => Self::AlpineSki,
            "NordicSki" => Self::NordicSki,
            "Hike" => Self::Hike,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Provider tag for this category, `None` when the activity had none
    #[must_use]
    pub fn as_provider_tag(&self) -> Option<&str> {
        match self {
            Self::Ride => Some("Ride"),
            Self::Run => Some("Run"),
            Self::AlpineSki => Some("AlpineSki"),
            Self::NordicSki => Some("NordicSki"),
            Self::Hike => Some("Hike"),
            Self::Other(tag) => Some(tag),
            Self::Unknown => None,
        }
    }
}

impl From<Option<String>> for ActivityCategory {
    fn from(tag: Option<String>) -> Self {
        tag.as_deref()
            .map_or(Self::Unknown, Self::from_provider_tag)
    }
}

impl From<ActivityCategory> for Option<String> {
    fn from(category: ActivityCategory) -> Self {
        match category {
            ActivityCategory::Other(tag) => Some(tag),
            known => known.as_provider_tag().map(str::to_owned),
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_provider_tag().unwrap_or("Unknown"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_parse_exactly() {
        assert_eq!(ActivityCategory::from_provider_tag("Ride"), ActivityCategory::Ride);
        assert_eq!(
            ActivityCategory::from_provider_tag("NordicSki"),
            ActivityCategory::NordicSki
        );
        assert_eq!(
            ActivityCategory::from_provider_tag("ride"),
            ActivityCategory::Other("ride".to_owned())
        );
    }

    #[test]
    fn test_missing_and_null_tags_are_unknown() {
        let missing: ActivityCategory = serde_json::from_str("null").unwrap();
        assert_eq!(missing, ActivityCategory::Unknown);
        assert_eq!(missing.to_string(), "Unknown");
    }

    #[test]
    fn test_other_tag_survives_serialization() {
        let category = ActivityCategory::from_provider_tag("VirtualRide");
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"VirtualRide\"");
    }
}
