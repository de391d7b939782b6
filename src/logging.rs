// ABOUTME: Logging configuration and structured logging setup for the Bullpen tools
// ABOUTME: Configures log level, output format and stderr writer for the tracing subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Structured logging setup
//!
//! Logs always go to stderr so command output on stdout stays machine
//! readable. `RUST_LOG` and `LOG_FORMAT` (json, pretty, compact) are honored;
//! building with the `json-logs` feature makes json the default format.

use std::env;
use std::io;

use bullpen_core::constants::service_names;
use bullpen_core::errors::{AppError, AppResult};
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl LogFormat {
    /// Format used when `LOG_FORMAT` is unset or unknown
    #[must_use]
    pub const fn default_format() -> Self {
        if cfg!(feature = "json-logs") {
            Self::Json
        } else {
            Self::Compact
        }
    }

    /// Parse a `LOG_FORMAT` value, `None` for unknown values
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::default_format(),
            include_location: false,
            include_thread: false,
            service_name: service_names::BULLPEN_CLI.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|value| LogFormat::parse(&value))
                .unwrap_or(defaults.format),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            ..defaults
        }
    }

    /// Override the level (e.g. `-v` on the command line)
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the env filter: the configured level for everything, and the
    /// same level for the workspace crates so a broad `RUST_LOG` still
    /// surfaces engine events
    ///
    /// # Errors
    ///
    /// Returns a config error if the level is not a valid filter directive
    pub fn env_filter(&self) -> AppResult<EnvFilter> {
        let mut filter = EnvFilter::try_new(&self.level)
            .map_err(|e| AppError::config(format!("Invalid log filter '{}': {e}", self.level)))?;
        if !self.level.contains('=') {
            for target in ["bullpen", "bullpen_core", "bullpen_intelligence"] {
                let directive = format!("{target}={}", self.level)
                    .parse()
                    .map_err(|e| AppError::config(format!("Invalid log directive: {e}")))?;
                filter = filter.add_directive(directive);
            }
        }
        Ok(filter)
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter is invalid or a subscriber is already set
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter()?);

        let result = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr)
                        .with_span_events(FmtSpan::NONE)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_thread_ids(self.include_thread)
                        .with_thread_names(self.include_thread)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_file(false)
                        .with_line_number(false)
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .try_init(),
        };
        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> AppResult<()> {
    LoggingConfig::from_env().init()
}
