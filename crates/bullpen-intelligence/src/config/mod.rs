// ABOUTME: Configuration module for bullpen-intelligence crate
// ABOUTME: Re-exports analytics configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

/// Analytics engine configuration (strike policy, insight thresholds, rest model)
pub mod intelligence;

pub use intelligence::{
    AnalyticsConfig, CommandConfig, ConfigError, InsightThresholds, WorkloadConfig,
};
