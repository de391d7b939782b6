// ABOUTME: Analytics configuration for the command and workload engines
// ABOUTME: Groups domain configs and provides env overrides, validation and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Analytics Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `command` - Strike policy, miss convention, trend window and insight thresholds
//! - `workload` - Rest hours per pitch and the borderline band
//!
//! Environment overrides:
//! - `BULLPEN_STRIKE_POLICY` (`exclude_in_play` | `include_in_play`)
//! - `BULLPEN_MISS_CONVENTION` (`catcher_view` | `pitcher_relative`)
//! - `BULLPEN_TREND_WINDOW` (records per window)
//! - `BULLPEN_REST_HOURS_PER_PITCH` (hours)

pub mod command;
pub mod error;
pub mod workload;

pub use command::{CommandConfig, InsightThresholds};
pub use error::ConfigError;
pub use workload::WorkloadConfig;

use std::env::{self, VarError};
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Env var selecting the strike policy
pub const STRIKE_POLICY_ENV: &str = "BULLPEN_STRIKE_POLICY";
/// Env var selecting the miss direction convention
pub const MISS_CONVENTION_ENV: &str = "BULLPEN_MISS_CONVENTION";
/// Env var overriding the trend window size
pub const TREND_WINDOW_ENV: &str = "BULLPEN_TREND_WINDOW";
/// Env var overriding rest hours per pitch
pub const REST_HOURS_PER_PITCH_ENV: &str = "BULLPEN_REST_HOURS_PER_PITCH";

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Main analytics configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Configuration for the command analytics pipeline
    pub command: CommandConfig,
    /// Configuration for the workload rest engine
    pub workload: WorkloadConfig,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            strike_policy = %config.command.strike_policy,
            miss_convention = %config.command.miss_convention,
            trend_window = config.command.trend_window_size,
            rest_hours_per_pitch = config.workload.rest_hours_per_pitch,
            "Loaded analytics configuration"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.command.validate()?;
        self.workload.validate()
    }

    /// Helper function to parse and apply an environment variable override
    ///
    /// An unset variable leaves `target` alone; a set but non-UTF-8 value is an error.
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(ConfigError::EnvVar(e)),
        };
        *target = val
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(STRIKE_POLICY_ENV, &mut self.command.strike_policy)?;
        Self::apply_env_var(MISS_CONVENTION_ENV, &mut self.command.miss_convention)?;
        Self::apply_env_var(TREND_WINDOW_ENV, &mut self.command.trend_window_size)?;
        Self::apply_env_var(
            REST_HOURS_PER_PITCH_ENV,
            &mut self.workload.rest_hours_per_pitch,
        )?;
        Ok(self)
    }
}
