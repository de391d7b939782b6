// ABOUTME: Composite 0-100 command score from strike rate, proximity and miss distance
// ABOUTME: Weighted 40/40/20 with the miss component saturating at a 0.5 normalized distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use crate::command_constants::command_score::{
    MAX_SCORE, MISS_NORMALIZATION, MISS_WEIGHT, PROXIMITY_WEIGHT, STRIKE_WEIGHT,
};
use crate::metrics::PitchMetrics;
use crate::miss_pattern::MissPattern;

/// Composite command score
pub struct CommandScoreCalculator;

impl CommandScoreCalculator {
    /// `40*strike/100 + 40*proximity + 20*(1 - min(1, miss/0.5))`, rounded and clamped
    ///
    /// Non-finite or negative inputs cannot push the result outside [0, 100].
    #[must_use]
    pub fn score(strike_pct: u8, proximity_avg: f64, avg_miss_distance: f64) -> u8 {
        let proximity = if proximity_avg.is_finite() {
            proximity_avg.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let miss_ratio = if avg_miss_distance.is_nan() {
            1.0
        } else {
            (avg_miss_distance.max(0.0) / MISS_NORMALIZATION).min(1.0)
        };

        let raw = STRIKE_WEIGHT * f64::from(strike_pct) / 100.0
            + PROXIMITY_WEIGHT * proximity
            + MISS_WEIGHT * (1.0 - miss_ratio);
        raw.round().clamp(0.0, MAX_SCORE) as u8
    }

    /// Score from aggregated metrics and the miss pattern
    #[must_use]
    pub fn from_components(metrics: &PitchMetrics, misses: &MissPattern) -> u8 {
        Self::score(
            metrics.strike_pct,
            metrics.accuracy_proximity_avg,
            misses.avg_miss_distance,
        )
    }
}
