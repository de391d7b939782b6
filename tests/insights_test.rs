// ABOUTME: Integration tests for the rule-based coaching insight generator
// ABOUTME: Each rule is checked at and around its threshold, plus ordering and display names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::HashMap;

use bullpen::intelligence::config::InsightThresholds;
use bullpen::intelligence::insights::RULES;
use bullpen::intelligence::trend::TrendMetrics;
use bullpen::intelligence::TrendAnalyzer;
use bullpen::intelligence::{
    InsightContext, InsightGenerator, InsightRuleId, MissCounts, MissPattern, PitchMetrics,
    PitchMetricsAggregator, PitchTypeMetrics,
};
use bullpen::models::PitchOutcome;
use helpers::{two_window_session, zoned_pitch};

fn metrics(pitch_count: usize, strike_pct: u8, accuracy_hit_rate: u8) -> PitchMetrics {
    PitchMetrics {
        pitch_count,
        strike_pct,
        accuracy_hit_rate,
        accuracy_proximity_avg: 0.5,
    }
}

fn trend(early_accuracy: f64, late_accuracy: f64) -> TrendMetrics {
    TrendMetrics {
        early_accuracy,
        late_accuracy,
        early_sample_size: 10,
        late_sample_size: 10,
    }
}

fn misses(arm_side: usize, glove_side: usize, up: usize, down: usize) -> MissPattern {
    let counts = MissCounts {
        arm_side,
        glove_side,
        up,
        down,
    };
    MissPattern::from_counts(counts, 0.2)
}

fn triggered(
    metrics: &PitchMetrics,
    pitch_types: &[PitchTypeMetrics],
    miss: &MissPattern,
    trend: &TrendMetrics,
) -> Vec<InsightRuleId> {
    let ctx = InsightContext::new(metrics, pitch_types, miss, trend);
    InsightGenerator::default().triggered(&ctx)
}

// ============================================================================
// Rate rules
// ============================================================================

#[test]
fn test_middling_session_produces_no_insights() {
    let metrics = metrics(12, 60, 40);
    let trend = trend(0.5, 0.5);
    let miss = MissPattern::default();
    let ctx = InsightContext::new(&metrics, &[], &miss, &trend);
    assert!(InsightGenerator::default().generate(&ctx).is_empty());
}

#[test]
fn test_high_strike_rate_praised_at_threshold() {
    let miss = MissPattern::default();
    let trend = trend(0.5, 0.5);
    let at = metrics(12, 70, 40);
    let ctx = InsightContext::new(&at, &[], &miss, &trend);
    assert_eq!(
        InsightGenerator::default().generate(&ctx),
        ["Excellent strike rate at 70%."]
    );

    let below = metrics(12, 69, 40);
    assert!(triggered(&below, &[], &miss, &trend).is_empty());
}

#[test]
fn test_low_rates_flagged() {
    let miss = MissPattern::default();
    let trend = trend(0.5, 0.5);
    let weak = metrics(12, 40, 20);
    let ctx = InsightContext::new(&weak, &[], &miss, &trend);
    assert_eq!(
        InsightGenerator::default().generate(&ctx),
        [
            "Strike rate was 40%. Focus on filling up the zone.",
            "Only 20% of pitches hit their target zone. Add zone-targeting practice.",
        ]
    );

    // thresholds are strict below
    let edge = metrics(12, 50, 30);
    assert!(triggered(&edge, &[], &miss, &trend).is_empty());
}

#[test]
fn test_high_hit_rate_praised() {
    let miss = MissPattern::default();
    let trend = trend(0.5, 0.5);
    let sharp = metrics(12, 60, 55);
    let ctx = InsightContext::new(&sharp, &[], &miss, &trend);
    assert_eq!(
        InsightGenerator::default().evaluate(InsightRuleId::HitRateHigh, &ctx),
        Some("Precise command: 55% of pitches landed in their target zone.".to_owned())
    );
    assert_eq!(
        InsightGenerator::default().evaluate(InsightRuleId::HitRateLow, &ctx),
        None
    );
}

// ============================================================================
// Miss direction
// ============================================================================

#[test]
fn test_dominant_miss_direction_needs_more_than_threshold() {
    let metrics = metrics(12, 60, 40);
    let trend = trend(0.5, 0.5);
    let dominant = misses(3, 1, 1, 0);
    let ctx = InsightContext::new(&metrics, &[], &dominant, &trend);
    assert_eq!(
        InsightGenerator::default().generate(&ctx),
        ["Misses are trending arm side (60% of misses). Check for early rotation or pulling off line."]
    );

    let even = misses(4, 3, 3, 0);
    assert!(triggered(&metrics, &[], &even, &trend).is_empty());
}

#[test]
fn test_dominant_share_is_compared_before_rounding() {
    let metrics = metrics(12, 60, 40);
    let trend = trend(0.5, 0.5);

    // 801 of 2001 is 40.03%, shown as 40.0
    let just_over = misses(400, 400, 801, 400);
    assert!((just_over.up_pct - 40.0).abs() < f64::EPSILON);
    assert_eq!(
        triggered(&metrics, &[], &just_over, &trend),
        [InsightRuleId::DominantMissDirection]
    );

    let exactly_at = misses(400, 400, 800, 400);
    assert!(triggered(&metrics, &[], &exactly_at, &trend).is_empty());
}

#[test]
fn test_each_direction_has_its_own_remark() {
    let metrics = metrics(12, 60, 40);
    let trend = trend(0.5, 0.5);
    let cases = [
        (misses(0, 0, 1, 3), "trending down (75% of misses). Engage the lower half"),
        (misses(0, 0, 4, 0), "trending up (100% of misses). Work on release-point"),
        (misses(0, 2, 1, 1), "trending glove side (50% of misses). Stay through"),
    ];
    for (pattern, expected) in cases {
        let ctx = InsightContext::new(&metrics, &[], &pattern, &trend);
        let message = InsightGenerator::default()
            .evaluate(InsightRuleId::DominantMissDirection, &ctx)
            .unwrap();
        assert!(message.contains(expected), "{message}");
    }
}

// ============================================================================
// Trend
// ============================================================================

#[test]
fn test_trend_rules_need_enough_pitches() {
    let miss = MissPattern::default();
    let improving = trend(0.5, 0.7);

    let enough = metrics(20, 60, 40);
    let ctx = InsightContext::new(&enough, &[], &miss, &improving);
    assert_eq!(
        InsightGenerator::default().generate(&ctx),
        ["Command sharpened as the session went on, finishing at 0.70 late-window accuracy."]
    );

    let too_few = metrics(19, 60, 40);
    assert!(triggered(&too_few, &[], &miss, &improving).is_empty());
}

#[test]
fn test_trend_rules_use_unrounded_window_accuracy() {
    let miss = MissPattern::default();
    let enough = metrics(20, 60, 40);
    let analyzer = TrendAnalyzer::default();

    // 0.304 -> 0.396 would display as 0.30 -> 0.40
    let small_gain = analyzer.analyze(&two_window_session(0.304, 0.396));
    assert!((small_gain.change() - 0.092).abs() < 1e-9);
    assert!(triggered(&enough, &[], &miss, &small_gain).is_empty());

    // 0.4951 -> 0.5959 would display as 0.50 -> 0.60
    let real_gain = analyzer.analyze(&two_window_session(0.4951, 0.5959));
    assert!(real_gain.change() > 0.1);
    assert_eq!(
        triggered(&enough, &[], &miss, &real_gain),
        [InsightRuleId::TrendImproving]
    );

    let real_drop = analyzer.analyze(&two_window_session(0.5959, 0.4951));
    assert_eq!(
        triggered(&enough, &[], &miss, &real_drop),
        [InsightRuleId::TrendDeclining]
    );
}

#[test]
fn test_declining_trend_flags_fatigue() {
    let miss = MissPattern::default();
    let declining = trend(0.8, 0.55);
    let enough = metrics(40, 60, 40);
    assert_eq!(
        triggered(&enough, &[], &miss, &declining),
        [InsightRuleId::TrendDeclining]
    );

    let flat = trend(0.8, 0.75);
    assert!(triggered(&enough, &[], &miss, &flat).is_empty());
}

// ============================================================================
// Most consistent pitch
// ============================================================================

fn two_pitch_session() -> Vec<PitchTypeMetrics> {
    let records = vec![
        zoned_pitch(0, "slider", "Z13", "Z13", PitchOutcome::CalledStrike),
        zoned_pitch(1, "fastball", "Z22", "Z22", PitchOutcome::CalledStrike),
        zoned_pitch(2, "slider", "Z13", "EDGE_GLOVE", PitchOutcome::Ball),
        zoned_pitch(3, "fastball", "Z11", "Z11", PitchOutcome::Foul),
        zoned_pitch(4, "fastball", "Z33", "Z33", PitchOutcome::SwingingStrike),
        zoned_pitch(5, "fastball", "Z33", "Z32", PitchOutcome::Ball),
    ];
    PitchMetricsAggregator::new().by_pitch_type(&records)
}

#[test]
fn test_most_consistent_pitch_uses_display_name() {
    let pitch_types = two_pitch_session();
    let metrics = metrics(6, 60, 40);
    let miss = MissPattern::default();
    let trend = trend(0.5, 0.5);
    let names = HashMap::from([("fastball".to_owned(), "Four-seam".to_owned())]);

    let ctx = InsightContext::new(&metrics, &pitch_types, &miss, &trend)
        .with_pitch_type_names(&names);
    assert_eq!(
        InsightGenerator::default().generate(&ctx),
        ["Four-seam is your most consistent pitch at 75% strikes."]
    );

    let unnamed = InsightContext::new(&metrics, &pitch_types, &miss, &trend);
    assert_eq!(
        InsightGenerator::default().generate(&unnamed),
        ["fastball is your most consistent pitch at 75% strikes."]
    );
}

#[test]
fn test_most_consistent_pitch_needs_two_types() {
    let pitch_types = two_pitch_session();
    let metrics = metrics(4, 60, 40);
    let miss = MissPattern::default();
    let trend = trend(0.5, 0.5);
    assert!(triggered(&metrics, &pitch_types[1..], &miss, &trend).is_empty());
}

#[test]
fn test_most_consistent_pitch_tie_goes_to_first_seen() {
    let records = vec![
        zoned_pitch(0, "curveball", "Z31", "Z31", PitchOutcome::CalledStrike),
        zoned_pitch(1, "sinker", "Z33", "Z33", PitchOutcome::CalledStrike),
    ];
    let pitch_types = PitchMetricsAggregator::new().by_pitch_type(&records);
    let metrics = metrics(2, 60, 40);
    let miss = MissPattern::default();
    let trend = trend(0.5, 0.5);
    let ctx = InsightContext::new(&metrics, &pitch_types, &miss, &trend);
    let message = InsightGenerator::default()
        .evaluate(InsightRuleId::MostConsistentPitch, &ctx)
        .unwrap();
    assert!(message.starts_with("curveball"));
}

// ============================================================================
// Ordering and thresholds
// ============================================================================

#[test]
fn test_insights_follow_rule_order() {
    let pitch_types = two_pitch_session();
    let metrics = metrics(30, 80, 60);
    let miss = misses(0, 0, 7, 3);
    let trend = trend(0.4, 0.8);
    assert_eq!(
        triggered(&metrics, &pitch_types, &miss, &trend),
        [
            InsightRuleId::MostConsistentPitch,
            InsightRuleId::DominantMissDirection,
            InsightRuleId::TrendImproving,
            InsightRuleId::StrikeRateHigh,
            InsightRuleId::HitRateHigh,
        ]
    );
    assert_eq!(RULES.len(), 8);
}

#[test]
fn test_custom_thresholds_change_what_fires() {
    let thresholds = InsightThresholds {
        high_strike_pct: 55,
        ..InsightThresholds::default()
    };
    let generator = InsightGenerator::new(thresholds);
    let metrics = metrics(12, 60, 40);
    let miss = MissPattern::default();
    let trend = trend(0.5, 0.5);
    let ctx = InsightContext::new(&metrics, &[], &miss, &trend);
    assert_eq!(generator.triggered(&ctx), [InsightRuleId::StrikeRateHigh]);
    assert_eq!(generator.thresholds().high_strike_pct, 55);
}
