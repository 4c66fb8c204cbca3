// ABOUTME: Record-by-record parsing of an activity collection served as a JSON array
// ABOUTME: Records that do not fit the activity shape are set aside instead of failing the batch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::Activity;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// An array element that could not be read as an activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position in the source array
    pub index: usize,
    /// Deserialization error
    pub error: String,
}

/// Activities of one collection, each remembering its source position
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityCollection {
    activities: Vec<Activity>,
    positions: Vec<usize>,
    rejected: Vec<RejectedRecord>,
}

impl ActivityCollection {
    /// Parse a JSON array, keeping every element that reads as an activity
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `body` is not a JSON array at all; a bad
    /// element only lands in [`Self::rejected`]
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        let records: Vec<Value> = serde_json::from_slice(body)?;
        let mut collection = Self::default();

        for (index, record) in records.into_iter().enumerate() {
            match Activity::deserialize(record) {
                Ok(activity) => {
                    collection.activities.push(activity);
                    collection.positions.push(index);
                }
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed activity record");
                    collection.rejected.push(RejectedRecord {
                        index,
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(collection)
    }

    /// Well-formed activities in source order
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Elements that were not activities
    #[must_use]
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    /// Activities paired with their source position
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Activity)> {
        self.positions.iter().copied().zip(&self.activities)
    }

    /// Number of elements in the source array
    #[must_use]
    pub fn source_len(&self) -> usize {
        self.activities.len() + self.rejected.len()
    }

    /// Drop the bookkeeping and keep the activities
    #[must_use]
    pub fn into_activities(self) -> Vec<Activity> {
        self.activities
    }
}

impl From<Vec<Activity>> for ActivityCollection {
    fn from(activities: Vec<Activity>) -> Self {
        Self {
            positions: (0..activities.len()).collect(),
            activities,
            rejected: Vec::new(),
        }
    }
}
