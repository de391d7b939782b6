// ABOUTME: Command analytics configuration: strike policy, miss convention, trend window
// ABOUTME: Also carries the coaching insight thresholds with defaults from the command constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Command Analytics Configuration

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::command_constants::{insight_thresholds, trend};
use crate::metrics::StrikePolicy;
use crate::miss_pattern::MissDirectionConvention;

/// Command analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Whether balls in play count as strikes
    pub strike_policy: StrikePolicy,
    /// How horizontal misses map onto arm and glove side
    pub miss_convention: MissDirectionConvention,
    /// Records in each of the early and late trend windows
    pub trend_window_size: usize,
    /// Coaching insight thresholds
    pub insights: InsightThresholds,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            strike_policy: StrikePolicy::default(),
            miss_convention: MissDirectionConvention::default(),
            trend_window_size: trend::WINDOW_SIZE,
            insights: InsightThresholds::default(),
        }
    }
}

impl CommandConfig {
    /// Check window size and insight thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value is outside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend_window_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_window_size must be at least 1",
            ));
        }
        self.insights.validate()
    }
}

/// Thresholds for the coaching insight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightThresholds {
    /// Pitch types required before naming a most consistent pitch
    pub min_pitch_types_for_comparison: usize,
    /// Strike % a pitch type needs to be called most consistent
    pub consistent_pitch_strike_pct: u8,
    /// Share of misses (percent) a direction must exceed to be called out
    pub dominant_miss_share_pct: f64,
    /// Pitches required before comparing early and late windows
    pub min_pitches_for_trend: usize,
    /// Accuracy change that counts as a trend
    pub trend_change_threshold: f64,
    /// Strike % praised as excellent
    pub high_strike_pct: u8,
    /// Strike % below which strikes need focus
    pub low_strike_pct: u8,
    /// Hit rate praised as precise
    pub high_hit_rate: u8,
    /// Hit rate below which zone targeting needs practice
    pub low_hit_rate: u8,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            min_pitch_types_for_comparison: insight_thresholds::MIN_PITCH_TYPES_FOR_COMPARISON,
            consistent_pitch_strike_pct: insight_thresholds::CONSISTENT_PITCH_STRIKE_PCT,
            dominant_miss_share_pct: insight_thresholds::DOMINANT_MISS_SHARE_PCT,
            min_pitches_for_trend: insight_thresholds::MIN_PITCHES_FOR_TREND,
            trend_change_threshold: insight_thresholds::TREND_CHANGE_THRESHOLD,
            high_strike_pct: insight_thresholds::HIGH_STRIKE_PCT,
            low_strike_pct: insight_thresholds::LOW_STRIKE_PCT,
            high_hit_rate: insight_thresholds::HIGH_HIT_RATE,
            low_hit_rate: insight_thresholds::LOW_HIT_RATE,
        }
    }
}

impl InsightThresholds {
    /// Check threshold ordering and percentage bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when thresholds are out of order or out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low_strike_pct > self.high_strike_pct {
            return Err(ConfigError::InvalidRange(
                "low_strike_pct must be <= high_strike_pct",
            ));
        }
        if self.low_hit_rate > self.high_hit_rate {
            return Err(ConfigError::InvalidRange(
                "low_hit_rate must be <= high_hit_rate",
            ));
        }
        if [
            self.consistent_pitch_strike_pct,
            self.high_strike_pct,
            self.high_hit_rate,
        ]
        .iter()
        .any(|pct| *pct > 100)
        {
            return Err(ConfigError::InvalidWeights(
                "percentage thresholds must be within 0-100",
            ));
        }
        if !(0.0..=100.0).contains(&self.dominant_miss_share_pct) {
            return Err(ConfigError::InvalidWeights(
                "dominant_miss_share_pct must be within 0-100",
            ));
        }
        if !self.trend_change_threshold.is_finite() || self.trend_change_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_change_threshold must be a non-negative number",
            ));
        }
        Ok(())
    }
}
