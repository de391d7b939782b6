// ABOUTME: Rule-based coaching remarks generated from a session's command analytics
// ABOUTME: Explicit fixed-priority list of independent predicate/template rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Insight generation
//!
//! Every rule whose predicate holds appends one remark, in [`RULES`] order.
//! Rules never short-circuit each other and an empty result is returned as
//! is; what to show for "no insights" is the caller's decision.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::InsightThresholds;
use crate::metrics::{PitchMetrics, PitchTypeMetrics};
use crate::miss_pattern::{MissDirection, MissPattern};
use crate::trend::TrendMetrics;

/// Identifier of a single insight rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightRuleId {
    /// Best pitch type by strike rate
    MostConsistentPitch,
    /// One miss direction dominates
    DominantMissDirection,
    /// Accuracy improved from early to late window
    TrendImproving,
    /// Accuracy fell from early to late window
    TrendDeclining,
    /// Strike rate at or above the excellent threshold
    StrikeRateHigh,
    /// Strike rate below the focus threshold
    StrikeRateLow,
    /// Target-hit rate at or above the precision threshold
    HitRateHigh,
    /// Target-hit rate below the practice threshold
    HitRateLow,
}

/// Everything the rules may look at
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    /// Session-level rates
    pub metrics: &'a PitchMetrics,
    /// Per pitch-type metrics, in first-appearance order
    pub pitch_types: &'a [PitchTypeMetrics],
    /// Miss-direction shares
    pub miss_pattern: &'a MissPattern,
    /// Early/late accuracy
    pub trend: &'a TrendMetrics,
    /// Optional display names keyed by pitch-type id
    pub pitch_type_names: Option<&'a HashMap<String, String>>,
}

impl<'a> InsightContext<'a> {
    /// Context without display names
    #[must_use]
    pub const fn new(
        metrics: &'a PitchMetrics,
        pitch_types: &'a [PitchTypeMetrics],
        miss_pattern: &'a MissPattern,
        trend: &'a TrendMetrics,
    ) -> Self {
        Self {
            metrics,
            pitch_types,
            miss_pattern,
            trend,
            pitch_type_names: None,
        }
    }

    /// Use display names for pitch types; ids without a name fall back to the id
    #[must_use]
    pub const fn with_pitch_type_names(mut self, names: &'a HashMap<String, String>) -> Self {
        self.pitch_type_names = Some(names);
        self
    }

    fn display_name(&self, pitch_type_id: &'a str) -> &'a str {
        self.pitch_type_names
            .and_then(|names| names.get(pitch_type_id))
            .map_or(pitch_type_id, String::as_str)
    }

    /// Pitch type with the highest strike rate, first one wins ties
    fn best_pitch_type(&self) -> Option<&'a PitchTypeMetrics> {
        self.pitch_types.iter().fold(None, |best, candidate| match best {
            Some(current) if current.strike_pct >= candidate.strike_pct => Some(current),
            _ => Some(candidate),
        })
    }
}

/// A predicate and the remark it produces
pub struct InsightRule {
    /// Rule identifier
    pub id: InsightRuleId,
    /// Whether the rule fires
    pub predicate: fn(&InsightContext<'_>, &InsightThresholds) -> bool,
    /// Remark text, only called when the predicate holds
    pub template: fn(&InsightContext<'_>) -> String,
}

/// All rules in evaluation order
pub const RULES: &[InsightRule] = &[
    InsightRule {
        id: InsightRuleId::MostConsistentPitch,
        predicate: |ctx, t| {
            ctx.pitch_types.len() >= t.min_pitch_types_for_comparison
                && ctx
                    .best_pitch_type()
                    .is_some_and(|best| best.strike_pct >= t.consistent_pitch_strike_pct)
        },
        template: |ctx| match ctx.best_pitch_type() {
            Some(best) => format!(
                "{} is your most consistent pitch at {}% strikes.",
                ctx.display_name(&best.pitch_type_id),
                best.strike_pct
            ),
            None => String::new(),
        },
    },
    InsightRule {
        id: InsightRuleId::DominantMissDirection,
        predicate: |ctx, t| {
            ctx.miss_pattern.dominant().is_some_and(|(direction, _)| {
                ctx.miss_pattern.exact_share(direction) > t.dominant_miss_share_pct
            })
        },
        template: |ctx| match ctx.miss_pattern.dominant() {
            Some((direction, pct)) => format!(
                "Misses are trending {direction} ({pct:.0}% of misses). {}",
                miss_remark(direction)
            ),
            None => String::new(),
        },
    },
    InsightRule {
        id: InsightRuleId::TrendImproving,
        predicate: |ctx, t| {
            ctx.metrics.pitch_count >= t.min_pitches_for_trend
                && ctx.trend.change() > t.trend_change_threshold
        },
        template: |ctx| {
            format!(
                "Command sharpened as the session went on, finishing at {:.2} late-window accuracy.",
                ctx.trend.late_accuracy
            )
        },
    },
    InsightRule {
        id: InsightRuleId::TrendDeclining,
        predicate: |ctx, t| {
            ctx.metrics.pitch_count >= t.min_pitches_for_trend
                && ctx.trend.change() < -t.trend_change_threshold
        },
        template: |_| {
            "Accuracy dropped late in the session. Watch fatigue and manage pitch counts.".to_owned()
        },
    },
    InsightRule {
        id: InsightRuleId::StrikeRateHigh,
        predicate: |ctx, t| ctx.metrics.strike_pct >= t.high_strike_pct,
        template: |ctx| format!("Excellent strike rate at {}%.", ctx.metrics.strike_pct),
    },
    InsightRule {
        id: InsightRuleId::StrikeRateLow,
        predicate: |ctx, t| ctx.metrics.strike_pct < t.low_strike_pct,
        template: |ctx| {
            format!(
                "Strike rate was {}%. Focus on filling up the zone.",
                ctx.metrics.strike_pct
            )
        },
    },
    InsightRule {
        id: InsightRuleId::HitRateHigh,
        predicate: |ctx, t| ctx.metrics.accuracy_hit_rate >= t.high_hit_rate,
        template: |ctx| {
            format!(
                "Precise command: {}% of pitches landed in their target zone.",
                ctx.metrics.accuracy_hit_rate
            )
        },
    },
    InsightRule {
        id: InsightRuleId::HitRateLow,
        predicate: |ctx, t| ctx.metrics.accuracy_hit_rate < t.low_hit_rate,
        template: |ctx| {
            format!(
                "Only {}% of pitches hit their target zone. Add zone-targeting practice.",
                ctx.metrics.accuracy_hit_rate
            )
        },
    },
];

fn miss_remark(direction: MissDirection) -> &'static str {
    match direction {
        MissDirection::ArmSide => "Check for early rotation or pulling off line.",
        MissDirection::GloveSide => "Stay through the pitch toward the target.",
        MissDirection::Up => "Work on release-point consistency.",
        MissDirection::Down => "Engage the lower half through the delivery.",
    }
}

/// Evaluates [`RULES`] against a context
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    thresholds: InsightThresholds,
}

impl InsightGenerator {
    /// Generator with the given thresholds
    #[must_use]
    pub const fn new(thresholds: InsightThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &InsightThresholds {
        &self.thresholds
    }

    /// Every triggered remark, in rule order
    #[must_use]
    pub fn generate(&self, ctx: &InsightContext<'_>) -> Vec<String> {
        let insights: Vec<String> = RULES
            .iter()
            .filter(|rule| (rule.predicate)(ctx, &self.thresholds))
            .map(|rule| (rule.template)(ctx))
            .collect();
        debug!(count = insights.len(), "Generated command insights");
        insights
    }

    /// Ids of the rules that fire for a context
    #[must_use]
    pub fn triggered(&self, ctx: &InsightContext<'_>) -> Vec<InsightRuleId> {
        RULES
            .iter()
            .filter(|rule| (rule.predicate)(ctx, &self.thresholds))
            .map(|rule| rule.id)
            .collect()
    }

    /// Evaluate one rule in isolation
    #[must_use]
    pub fn evaluate(&self, id: InsightRuleId, ctx: &InsightContext<'_>) -> Option<String> {
        RULES
            .iter()
            .find(|rule| rule.id == id)
            .filter(|rule| (rule.predicate)(ctx, &self.thresholds))
            .map(|rule| (rule.template)(ctx))
    }
}
