// ABOUTME: Session analytics pipeline combining metrics, misses, trend, score and insights
// ABOUTME: Produces PitchSessionAnalytics for one session, a batch of sessions, or at finalize time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Pitch session analytics
//!
//! The aggregator, miss-pattern analyzer and trend analyzer each read the
//! full record list independently. The command score is built from their
//! outputs and the insight generator reads everything. Analytics are always
//! recomputed from scratch and never merged into a previous result.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use bullpen_core::errors::AppResult;
use bullpen_core::models::{PitchRecord, PitchSession, PitcherHandedness};

use crate::command_score::CommandScoreCalculator;
use crate::config::{AnalyticsConfig, CommandConfig};
use crate::insights::{InsightContext, InsightGenerator};
use crate::metrics::{PitchMetricsAggregator, PitchTypeMetrics, ZoneCount};
use crate::miss_pattern::{MissPattern, MissPatternAnalyzer};
use crate::situational::SituationalMetrics;
use crate::trend::{TrendAnalyzer, TrendMetrics};

/// Derived command analytics for a set of pitch records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchSessionAnalytics {
    /// Records analyzed
    pub total_pitches: usize,
    /// Strike percentage, 0-100
    pub strike_pct: u8,
    /// Target-hit percentage, 0-100
    pub accuracy_hit_rate: u8,
    /// Mean proximity score, 2 dp
    pub accuracy_proximity_avg: f64,
    /// Per pitch-type breakdown in first-appearance order
    pub pitch_type_metrics: Vec<PitchTypeMetrics>,
    /// Miss-direction shares
    pub miss_pattern: MissPattern,
    /// Count and base-state splits
    pub situational: SituationalMetrics,
    /// Early/late accuracy
    pub trend: TrendMetrics,
    /// Composite score, 0-100
    pub command_score: u8,
    /// Triggered coaching remarks, possibly empty
    pub insights: Vec<String>,
    /// Landing-zone histogram
    pub zone_distribution: Vec<ZoneCount>,
}

impl PitchSessionAnalytics {
    /// Fully zeroed analytics for an empty record list
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total_pitches: 0,
            strike_pct: 0,
            accuracy_hit_rate: 0,
            accuracy_proximity_avg: 0.0,
            pitch_type_metrics: Vec::new(),
            miss_pattern: MissPattern::default(),
            situational: SituationalMetrics::default(),
            trend: TrendMetrics::default(),
            command_score: 0,
            insights: Vec::new(),
            zone_distribution: Vec::new(),
        }
    }
}

impl Default for PitchSessionAnalytics {
    fn default() -> Self {
        Self::empty()
    }
}

/// Runs the full analytics pipeline
#[derive(Debug, Clone, Default)]
pub struct PitchAnalyticsEngine {
    aggregator: PitchMetricsAggregator,
    miss_analyzer: MissPatternAnalyzer,
    trend_analyzer: TrendAnalyzer,
    insight_generator: InsightGenerator,
    pitch_type_names: HashMap<String, String>,
}

impl PitchAnalyticsEngine {
    /// Engine with default policies and thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine configured from a command analytics config
    #[must_use]
    pub fn from_config(config: &CommandConfig) -> Self {
        Self {
            aggregator: PitchMetricsAggregator::with_policy(config.strike_policy),
            miss_analyzer: MissPatternAnalyzer::new(config.miss_convention),
            trend_analyzer: TrendAnalyzer::new(config.trend_window_size),
            insight_generator: InsightGenerator::new(config.insights.clone()),
            pitch_type_names: HashMap::new(),
        }
    }

    /// Engine configured from the global analytics config
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::from_config(&AnalyticsConfig::global().command)
    }

    /// Display names used by insights instead of raw pitch-type ids
    #[must_use]
    pub fn with_pitch_type_names(mut self, names: HashMap<String, String>) -> Self {
        self.pitch_type_names = names;
        self
    }

    /// Metrics aggregator in use
    #[must_use]
    pub const fn aggregator(&self) -> &PitchMetricsAggregator {
        &self.aggregator
    }

    /// Analyze one session's records in capture order
    #[must_use]
    pub fn compute(&self, records: &[PitchRecord], hand: PitcherHandedness) -> PitchSessionAnalytics {
        if records.is_empty() {
            return PitchSessionAnalytics::empty();
        }

        let metrics = self.aggregator.summarize(records);
        let pitch_type_metrics = self.aggregator.by_pitch_type(records);
        let miss_pattern = self.miss_analyzer.analyze(records, hand);
        let trend = self.trend_analyzer.analyze(records);
        let situational = SituationalMetrics::compute(&self.aggregator, records);
        let command_score = CommandScoreCalculator::from_components(&metrics, &miss_pattern);

        let ctx = InsightContext::new(&metrics, &pitch_type_metrics, &miss_pattern, &trend)
            .with_pitch_type_names(&self.pitch_type_names);
        let insights = self.insight_generator.generate(&ctx);

        debug!(
            pitches = records.len(),
            pitch_types = pitch_type_metrics.len(),
            command_score,
            "Computed session analytics"
        );

        PitchSessionAnalytics {
            total_pitches: metrics.pitch_count,
            strike_pct: metrics.strike_pct,
            accuracy_hit_rate: metrics.accuracy_hit_rate,
            accuracy_proximity_avg: metrics.accuracy_proximity_avg,
            pitch_type_metrics,
            miss_pattern,
            situational,
            trend,
            command_score,
            insights,
            zone_distribution: PitchMetricsAggregator::zone_distribution(records),
        }
    }

    /// Analyze many sessions in parallel, results in input order
    #[must_use]
    pub fn analyze_batch(
        &self,
        sessions: &[Vec<PitchRecord>],
        hand: PitcherHandedness,
    ) -> Vec<PitchSessionAnalytics> {
        sessions
            .par_iter()
            .map(|records| self.compute(records, hand))
            .collect()
    }

    /// Compute analytics for a session's records and attach them, completing the session
    ///
    /// The session's running pitch count is raised to the number of records
    /// if it fell behind.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session is not in progress, or
    /// `InvalidInput` if `ended_at` precedes the start
    pub fn finalize_session(
        &self,
        session: &mut PitchSession<PitchSessionAnalytics>,
        records: &[PitchRecord],
        hand: PitcherHandedness,
        ended_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let analytics = self.compute(records, hand);
        let command_score = analytics.command_score;
        session.finalize(analytics, ended_at)?;
        // the running count may lag when records were imported in bulk
        let record_count = u32::try_from(records.len()).unwrap_or(u32::MAX);
        session.total_pitches = session.total_pitches.max(record_count);
        info!(
            session_id = %session.id,
            pitches = records.len(),
            command_score,
            "Finalized pitching session"
        );
        Ok(())
    }
}
