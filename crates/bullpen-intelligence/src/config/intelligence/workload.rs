// ABOUTME: Workload rest configuration: hours of rest owed per pitch and the borderline band
// ABOUTME: Defaults come from the workload constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::command_constants::workload::{BORDERLINE_REST_DAYS, DEFAULT_REST_HOURS_PER_PITCH};

/// Workload rest configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Hours of rest owed per pitch thrown
    pub rest_hours_per_pitch: f64,
    /// Remaining rest (days) at or below which status is yellow rather than red
    pub yellow_threshold_days: f64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            rest_hours_per_pitch: DEFAULT_REST_HOURS_PER_PITCH,
            yellow_threshold_days: BORDERLINE_REST_DAYS,
        }
    }
}

impl WorkloadConfig {
    /// Check the rest rule is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive or non-finite values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rest_hours_per_pitch.is_finite() || self.rest_hours_per_pitch <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rest_hours_per_pitch must be a positive number",
            ));
        }
        if !self.yellow_threshold_days.is_finite() || self.yellow_threshold_days < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "yellow_threshold_days must be a non-negative number",
            ));
        }
        Ok(())
    }
}
