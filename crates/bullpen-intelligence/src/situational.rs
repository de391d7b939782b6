// ABOUTME: Count- and base-state-dependent strike rates for a pitching session
// ABOUTME: First-pitch, behind, ahead, two-strike and runners-on splits under the strike policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use bullpen_core::models::PitchRecord;
use serde::{Deserialize, Serialize};

use crate::metrics::PitchMetricsAggregator;

/// Strike rates split by game situation; each split is 0 when empty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SituationalMetrics {
    /// Strike % on 0-0 counts
    pub first_pitch_strike_pct: u8,
    /// Pitches thrown on 0-0
    pub first_pitch_count: usize,
    /// Strike % when balls exceed strikes
    pub behind_in_count_strike_pct: u8,
    /// Target-hit % when balls exceed strikes
    pub behind_in_count_accuracy: u8,
    /// Pitches thrown while behind
    pub behind_in_count_count: usize,
    /// Strike % when strikes exceed balls
    pub ahead_in_count_strike_pct: u8,
    /// Strike % with two strikes
    pub two_strike_strike_pct: u8,
    /// Strike % with at least one runner on base
    pub runners_on_strike_pct: u8,
    /// Strike % with a runner on second or third
    pub scoring_position_strike_pct: u8,
}

impl SituationalMetrics {
    /// Split a session's records by count and base state
    #[must_use]
    pub fn compute(aggregator: &PitchMetricsAggregator, records: &[PitchRecord]) -> Self {
        let first: Vec<&PitchRecord> = records.iter().filter(|r| r.count.is_first_pitch()).collect();
        let behind: Vec<&PitchRecord> = records
            .iter()
            .filter(|r| r.count.is_pitcher_behind())
            .collect();

        Self {
            first_pitch_strike_pct: aggregator.strike_pct(first.iter().copied()),
            first_pitch_count: first.len(),
            behind_in_count_strike_pct: aggregator.strike_pct(behind.iter().copied()),
            behind_in_count_accuracy: PitchMetricsAggregator::hit_rate(behind.iter().copied()),
            behind_in_count_count: behind.len(),
            ahead_in_count_strike_pct: aggregator
                .strike_pct(records.iter().filter(|r| r.count.is_pitcher_ahead())),
            two_strike_strike_pct: aggregator
                .strike_pct(records.iter().filter(|r| r.count.is_two_strike())),
            runners_on_strike_pct: aggregator
                .strike_pct(records.iter().filter(|r| !r.base_runners.is_empty())),
            scoring_position_strike_pct: aggregator
                .strike_pct(records.iter().filter(|r| r.base_runners.in_scoring_position())),
        }
    }
}
