// ABOUTME: Route stroke styling keyed by activity category
// ABOUTME: Exhaustive category-to-color lookup plus the fixed weight, opacity and line join
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::path_style;
use crate::models::ActivityCategory;
use serde::Serialize;

/// How path segments are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Rounded corners
    Round,
}

impl LineJoin {
    /// Name used by Leaflet and SVG
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
        }
    }
}

/// Stroke of a route overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    /// CSS color
    pub color: &'static str,
    /// Stroke width in pixels
    pub weight: u32,
    /// Stroke opacity in `0.0..=1.0`
    pub opacity: f64,
    /// Segment join
    pub line_join: LineJoin,
}

impl PathStyle {
    /// Style for an activity of the given category
    #[must_use]
    pub fn for_category(category: &ActivityCategory) -> Self {
        Self {
            color: color_for(category),
            weight: path_style::STROKE_WEIGHT,
            opacity: path_style::STROKE_OPACITY,
            line_join: LineJoin::Round,
        }
    }
}

/// Route color for a category; anything outside the known set is black
#[must_use]
pub const fn color_for(category: &ActivityCategory) -> &'static str {
    match category {
        ActivityCategory::Ride => path_style::RIDE_COLOR,
        ActivityCategory::Run => path_style::RUN_COLOR,
        ActivityCategory::AlpineSki => path_style::ALPINE_SKI_COLOR,
        ActivityCategory::NordicSki => path_style::NORDIC_SKI_COLOR,
        ActivityCategory::Hike => path_style::HIKE_COLOR,
        ActivityCategory::Other(_) | ActivityCategory::Unknown => path_style::DEFAULT_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(color_for(&ActivityCategory::Ride), "green");
        assert_eq!(color_for(&ActivityCategory::Run), "red");
        assert_eq!(color_for(&ActivityCategory::AlpineSki), "blue");
        assert_eq!(color_for(&ActivityCategory::NordicSki), "#77C3EC");
        assert_eq!(color_for(&ActivityCategory::Hike), "brown");
    }

    #[test]
    fn test_everything_else_is_black() {
        for tag in ["Swim", "Walk", "ride", "RIDE", ""] {
            let category = ActivityCategory::from_provider_tag(tag);
            assert_eq!(color_for(&category), "black", "tag {tag:?}");
        }
        assert_eq!(color_for(&ActivityCategory::Unknown), "black");
    }

    #[test]
    fn test_fixed_stroke() {
        let style = PathStyle::for_category(&ActivityCategory::Run);
        assert_eq!(style.weight, 3);
        assert!((style.opacity - 1.0).abs() < f64::EPSILON);
        assert_eq!(style.line_join.as_str(), "round");
    }
}
