// ABOUTME: Small descriptive-statistics helpers shared by the command analyzers
// ABOUTME: Guarded percentages, means, medians and rounding used across every engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Every helper guards its denominator and returns 0 for empty input, so
//! callers never divide by zero and never see NaN from an empty subset.

use serde::{Deserialize, Serialize};

/// Whole-number percentage `round(100 * part / total)`, 0 when `total == 0`
#[must_use]
pub fn percentage(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (100.0 * part as f64 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Unrounded share `100 * part / total`, 0 when `total == 0`
#[must_use]
pub fn share(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}

/// Arithmetic mean, 0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Median using the midpoint rule for even lengths, `None` for an empty slice
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Largest value, `None` for an empty slice
#[must_use]
pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().max_by(f64::total_cmp)
}

/// Round to two decimal places
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place
#[must_use]
pub fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean / median / max summary of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    /// Arithmetic mean
    pub mean: f64,
    /// Median (midpoint rule for even counts)
    pub median: f64,
    /// Maximum
    pub max: f64,
    /// Number of values summarized
    pub samples: usize,
}

impl DistributionSummary {
    /// Summarize a set of values, `None` when there are none
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        Some(Self {
            mean: round_to_hundredths(mean(values)),
            median: round_to_hundredths(median(values)?),
            max: round_to_hundredths(max(values)?),
            samples: values.len(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_guards_zero_total() {
        assert_eq!(percentage(3, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_summary_of_empty_is_none() {
        assert!(DistributionSummary::from_values(&[]).is_none());
        let summary = DistributionSummary::from_values(&[2.0, 6.0]).unwrap();
        assert!((summary.mean - 4.0).abs() < f64::EPSILON);
        assert!((summary.max - 6.0).abs() < f64::EPSILON);
        assert_eq!(summary.samples, 2);
    }
}
