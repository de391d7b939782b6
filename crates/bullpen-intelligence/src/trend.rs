// ABOUTME: Early-versus-late session accuracy comparison over fixed-size capture windows
// ABOUTME: Windows overlap for short sessions; accuracy is mean proximity within each window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use bullpen_core::models::PitchRecord;
use serde::{Deserialize, Serialize};

use crate::command_constants::trend::WINDOW_SIZE;
use crate::proximity::ProximityModel;

/// Accuracy at the start and end of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMetrics {
    /// Mean proximity over the early window
    pub early_accuracy: f64,
    /// Mean proximity over the late window
    pub late_accuracy: f64,
    /// Records in the early window
    pub early_sample_size: usize,
    /// Records in the late window
    pub late_sample_size: usize,
}

impl TrendMetrics {
    /// Late minus early accuracy; positive means the pitcher got sharper
    #[must_use]
    pub fn change(&self) -> f64 {
        self.late_accuracy - self.early_accuracy
    }
}

/// Compares the first and last `window_size` records in capture order
#[derive(Debug, Clone, Copy)]
pub struct TrendAnalyzer {
    window_size: usize,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(WINDOW_SIZE)
    }
}

impl TrendAnalyzer {
    /// Analyzer with a custom window size (at least 1)
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size: window_size.max(1),
        }
    }

    /// Window size in records
    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Early and late window accuracy
    #[must_use]
    pub fn analyze(&self, records: &[PitchRecord]) -> TrendMetrics {
        let window = self.window_size.min(records.len());
        let early = &records[..window];
        let late = &records[records.len() - window..];

        TrendMetrics {
            early_accuracy: ProximityModel::mean_score(early),
            late_accuracy: ProximityModel::mean_score(late),
            early_sample_size: early.len(),
            late_sample_size: late.len(),
        }
    }
}
