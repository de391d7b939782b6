// ABOUTME: Configuration error types for analytics configuration validation
// ABOUTME: Defines error variants for invalid ranges, env overrides and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Configuration error types for analytics configuration validation.

use std::env;

use bullpen_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Paired thresholds out of order (e.g. low strike % above high strike %)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Weights or shares that must stay within 0-100 do not
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        let code = match &err {
            ConfigError::Parse(_) | ConfigError::EnvVar(_) => ErrorCode::ConfigError,
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, err.to_string()).with_source(err)
    }
}
