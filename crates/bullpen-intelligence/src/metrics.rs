// ABOUTME: Strike, target-hit and proximity rate statistics for a session and per pitch type
// ABOUTME: Includes the strike policy flag, per-type command rating and zone distribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Pitch metrics aggregation
//!
//! Rate statistics are computed over every record. Proximity only looks at
//! records that carry all four normalized coordinates, so a record without
//! coordinates still counts toward strike and hit-rate denominators.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use bullpen_core::models::{PitchOutcome, PitchRecord, ZoneId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command_constants::command_rating::{
    COMPETITIVE_WEIGHT, MIDDLE_MIDDLE_PENALTY, STRIKE_WEIGHT, TARGET_HIT_WEIGHT,
};
use crate::config::ConfigError;
use crate::proximity::ProximityModel;
use crate::statistics::{percentage, round_to_hundredths, round_to_tenths, DistributionSummary};

/// Whether a ball put in play counts as a strike
///
/// Call sites disagree on this, so it is always an explicit choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikePolicy {
    /// Only called, swinging and foul strikes
    #[default]
    ExcludeInPlay,
    /// Balls in play also count as strikes
    IncludeInPlay,
}

impl StrikePolicy {
    /// Whether the outcome counts as a strike under this policy
    #[must_use]
    pub const fn is_strike(self, outcome: PitchOutcome) -> bool {
        match self {
            Self::ExcludeInPlay => outcome.is_strike_call(),
            Self::IncludeInPlay => {
                outcome.is_strike_call() || matches!(outcome, PitchOutcome::InPlay)
            }
        }
    }

    /// Config/env label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExcludeInPlay => "exclude_in_play",
            Self::IncludeInPlay => "include_in_play",
        }
    }
}

impl fmt::Display for StrikePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrikePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "exclude_in_play" | "exclude" => Ok(Self::ExcludeInPlay),
            "include_in_play" | "include" => Ok(Self::IncludeInPlay),
            other => Err(ConfigError::Parse(format!("unknown strike policy '{other}'"))),
        }
    }
}

/// Session-level rate statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchMetrics {
    /// Records considered
    pub pitch_count: usize,
    /// Strike percentage, 0-100
    pub strike_pct: u8,
    /// Percentage of pitches landing in their target zone, 0-100
    pub accuracy_hit_rate: u8,
    /// Mean proximity score over coordinate-bearing records, 2 dp
    pub accuracy_proximity_avg: f64,
}

/// Average and peak velocity of a pitch type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityStats {
    /// Mean velocity, 1 dp
    pub avg_mph: f64,
    /// Peak velocity
    pub max_mph: f64,
    /// Records that carried a velocity reading
    pub samples: usize,
}

impl VelocityStats {
    fn from_readings(readings: &[f64]) -> Option<Self> {
        let summary = DistributionSummary::from_values(readings)?;
        Some(Self {
            avg_mph: round_to_tenths(summary.mean),
            max_mph: summary.max,
            samples: summary.samples,
        })
    }
}

/// Command statistics for one pitch type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchTypeMetrics {
    /// Pitch type identifier
    pub pitch_type_id: String,
    /// Pitches of this type
    pub pitch_count: usize,
    /// Strike percentage, 0-100
    pub strike_pct: u8,
    /// Target-hit percentage, 0-100
    pub target_hit_pct: u8,
    /// Mean proximity score, 2 dp
    pub proximity_avg: f64,
    /// Strikes plus pitches landing on an edge, percent
    pub competitive_strike_pct: u8,
    /// Pitches landing in the centre cell, percent
    pub middle_middle_pct: u8,
    /// Weighted command rating, 0-100
    pub command_rating: u8,
    /// Miss distance in inches, when any record of this type carries one
    pub miss_distance: Option<DistributionSummary>,
    /// Velocity, when any record of this type carries one
    pub velocity: Option<VelocityStats>,
}

/// Count of pitches that landed in one zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCount {
    /// Landing zone
    pub zone: ZoneId,
    /// Pitches landing there
    pub count: usize,
    /// Share of all pitches, percent
    pub pct: u8,
}

/// Computes rate statistics under a strike policy
#[derive(Debug, Clone, Copy, Default)]
pub struct PitchMetricsAggregator {
    strike_policy: StrikePolicy,
}

impl PitchMetricsAggregator {
    /// Aggregator using the default policy (in-play excluded)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strike_policy: StrikePolicy::ExcludeInPlay,
        }
    }

    /// Aggregator using an explicit strike policy
    #[must_use]
    pub const fn with_policy(strike_policy: StrikePolicy) -> Self {
        Self { strike_policy }
    }

    /// Strike policy in use
    #[must_use]
    pub const fn policy(&self) -> StrikePolicy {
        self.strike_policy
    }

    /// Session-level strike %, hit rate and proximity average
    #[must_use]
    pub fn summarize(&self, records: &[PitchRecord]) -> PitchMetrics {
        let metrics = PitchMetrics {
            pitch_count: records.len(),
            strike_pct: self.strike_pct(records.iter()),
            accuracy_hit_rate: Self::hit_rate(records.iter()),
            accuracy_proximity_avg: round_to_hundredths(ProximityModel::mean_score(records)),
        };
        debug!(
            pitches = metrics.pitch_count,
            strike_pct = metrics.strike_pct,
            hit_rate = metrics.accuracy_hit_rate,
            policy = %self.strike_policy,
            "Summarized pitch metrics"
        );
        metrics
    }

    /// Strike percentage of any subset of records
    #[must_use]
    pub fn strike_pct<'a, I>(&self, records: I) -> u8
    where
        I: IntoIterator<Item = &'a PitchRecord>,
    {
        let (strikes, total) = records.into_iter().fold((0, 0), |(strikes, total), r| {
            (
                strikes + usize::from(self.strike_policy.is_strike(r.outcome)),
                total + 1,
            )
        });
        percentage(strikes, total)
    }

    /// Target-hit percentage of any subset of records
    #[must_use]
    pub fn hit_rate<'a, I>(records: I) -> u8
    where
        I: IntoIterator<Item = &'a PitchRecord>,
    {
        let (hits, total) = records.into_iter().fold((0, 0), |(hits, total), r| {
            (hits + usize::from(r.hit_target()), total + 1)
        });
        percentage(hits, total)
    }

    /// Per pitch-type metrics, ordered by first appearance of each type
    #[must_use]
    pub fn by_pitch_type(&self, records: &[PitchRecord]) -> Vec<PitchTypeMetrics> {
        group_by_pitch_type(records)
            .into_iter()
            .map(|(pitch_type_id, group)| self.pitch_type_metrics(pitch_type_id, &group))
            .collect()
    }

    /// Actual-zone histogram ordered Z11..Z33, then edges, then unknown labels
    #[must_use]
    pub fn zone_distribution(records: &[PitchRecord]) -> Vec<ZoneCount> {
        let mut counts: BTreeMap<(u8, u8, String), (ZoneId, usize)> = BTreeMap::new();
        for record in records {
            counts
                .entry(record.actual_zone.sort_key())
                .or_insert_with(|| (record.actual_zone.clone(), 0))
                .1 += 1;
        }

        counts
            .into_values()
            .map(|(zone, count)| ZoneCount {
                zone,
                count,
                pct: percentage(count, records.len()),
            })
            .collect()
    }

    fn pitch_type_metrics(&self, pitch_type_id: &str, group: &[&PitchRecord]) -> PitchTypeMetrics {
        let total = group.len();
        let strike_pct = self.strike_pct(group.iter().copied());
        let target_hit_pct = Self::hit_rate(group.iter().copied());

        let competitive = group
            .iter()
            .filter(|r| self.strike_policy.is_strike(r.outcome) || r.actual_zone.is_edge())
            .count();
        let middle = group.iter().filter(|r| r.actual_zone.is_center()).count();
        let competitive_strike_pct = percentage(competitive, total);
        let middle_middle_pct = percentage(middle, total);

        let miss_inches: Vec<f64> = group.iter().filter_map(|r| r.miss_distance_inches).collect();
        let velocities: Vec<f64> = group.iter().filter_map(|r| r.velocity_mph).collect();

        PitchTypeMetrics {
            pitch_type_id: pitch_type_id.to_owned(),
            pitch_count: total,
            strike_pct,
            target_hit_pct,
            proximity_avg: round_to_hundredths(ProximityModel::mean_score(group.iter().copied())),
            competitive_strike_pct,
            middle_middle_pct,
            command_rating: command_rating(
                target_hit_pct,
                competitive_strike_pct,
                strike_pct,
                middle_middle_pct,
            ),
            miss_distance: DistributionSummary::from_values(&miss_inches),
            velocity: VelocityStats::from_readings(&velocities),
        }
    }
}

/// `clamp(0, 100, round(0.4*hit + 0.3*competitive + 0.2*strike - 0.5*middle))`
#[must_use]
pub fn command_rating(
    target_hit_pct: u8,
    competitive_strike_pct: u8,
    strike_pct: u8,
    middle_middle_pct: u8,
) -> u8 {
    let raw = TARGET_HIT_WEIGHT * f64::from(target_hit_pct)
        + COMPETITIVE_WEIGHT * f64::from(competitive_strike_pct)
        + STRIKE_WEIGHT * f64::from(strike_pct)
        - MIDDLE_MIDDLE_PENALTY * f64::from(middle_middle_pct);
    raw.round().clamp(0.0, 100.0) as u8
}

/// Group records by pitch type, keeping first-appearance order
pub(crate) fn group_by_pitch_type(records: &[PitchRecord]) -> Vec<(&str, Vec<&PitchRecord>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&PitchRecord>)> = Vec::new();

    for record in records {
        let key = record.pitch_type_id.as_str();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }
    groups
}
