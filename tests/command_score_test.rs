// ABOUTME: Integration tests for the composite 0-100 command score
// ABOUTME: Checks the weighting, clamping and pathological inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bullpen::intelligence::{CommandScoreCalculator, MissCounts, MissPattern, PitchMetrics};

#[test]
fn test_perfect_inputs_score_hundred() {
    assert_eq!(CommandScoreCalculator::score(100, 1.0, 0.0), 100);
}

#[test]
fn test_worst_inputs_score_zero() {
    assert_eq!(CommandScoreCalculator::score(0, 0.0, 0.5), 0);
    assert_eq!(CommandScoreCalculator::score(0, 0.0, 3.0), 0);
}

#[test]
fn test_weighted_components() {
    // 40*0.6 + 40*0.5 + 20*(1 - 0.25/0.5) = 24 + 20 + 10
    assert_eq!(CommandScoreCalculator::score(60, 0.5, 0.25), 54);
    // 40*0.5 + 40*0.25 + 20 = 50
    assert_eq!(CommandScoreCalculator::score(50, 0.25, 0.0), 50);
}

#[test]
fn test_pathological_inputs_stay_in_range() {
    let cases = [
        (100, f64::INFINITY, f64::NEG_INFINITY),
        (100, f64::NAN, f64::NAN),
        (0, -5.0, -1.0),
        (100, 7.5, f64::INFINITY),
        (255, 1.0, 0.0),
    ];
    for (strike, proximity, miss) in cases {
        let score = CommandScoreCalculator::score(strike, proximity, miss);
        assert!(score <= 100, "{strike} {proximity} {miss} -> {score}");
    }
}

#[test]
fn test_nan_miss_distance_earns_no_miss_credit() {
    assert_eq!(CommandScoreCalculator::score(100, 1.0, f64::NAN), 80);
}

#[test]
fn test_components_use_unrounded_miss_distance() {
    let metrics = PitchMetrics {
        pitch_count: 1,
        strike_pct: 0,
        accuracy_hit_rate: 0,
        accuracy_proximity_avg: 0.0,
    };
    let misses = MissPattern::from_counts(
        MissCounts {
            arm_side: 1,
            ..MissCounts::default()
        },
        0.0374,
    );
    // 20 * (1 - 0.0374 / 0.5) = 18.504; a 0.04 average would give 18.4
    assert_eq!(CommandScoreCalculator::from_components(&metrics, &misses), 19);
}
