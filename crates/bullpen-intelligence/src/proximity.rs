// ABOUTME: Euclidean distance and exponential-decay proximity score between normalized points
// ABOUTME: Score is 1 for an exact hit and decays toward 0 with a 0.15 characteristic distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use bullpen_core::models::{NormalizedPoint, PitchRecord};

use crate::command_constants::proximity::DECAY_RATE;

/// Distance and proximity calculations
pub struct ProximityModel;

impl ProximityModel {
    /// Euclidean distance between two normalized points
    #[must_use]
    pub fn distance(a: NormalizedPoint, b: NormalizedPoint) -> f64 {
        (b.x - a.x).hypot(b.y - a.y)
    }

    /// Similarity between intended and actual location, `exp(-d / 0.15)`
    ///
    /// Returns 1.0 at distance 0, about 0.37 at 0.15, and approaches 0 for
    /// large distances. Negative distances are treated as 0 and NaN as
    /// infinitely far, so the result always lies in [0, 1].
    #[must_use]
    pub fn proximity_score(distance: f64) -> f64 {
        if distance.is_nan() {
            return 0.0;
        }
        (-DECAY_RATE * distance.max(0.0)).exp()
    }

    /// Distance between target and actual point of a record, when all four
    /// coordinates were captured
    #[must_use]
    pub fn record_distance(record: &PitchRecord) -> Option<f64> {
        record
            .coordinate_pair()
            .map(|(target, actual)| Self::distance(target, actual))
    }

    /// Proximity score of a record, when all four coordinates were captured
    #[must_use]
    pub fn record_score(record: &PitchRecord) -> Option<f64> {
        Self::record_distance(record).map(Self::proximity_score)
    }

    /// Mean proximity score over the coordinate-bearing records, 0 if none
    #[must_use]
    pub fn mean_score<'a, I>(records: I) -> f64
    where
        I: IntoIterator<Item = &'a PitchRecord>,
    {
        let (sum, count) = records
            .into_iter()
            .filter_map(Self::record_score)
            .fold((0.0, 0_usize), |(sum, count), score| (sum + score, count + 1));

        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }
}
