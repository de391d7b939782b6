// ABOUTME: Loads pitch records, session summaries and session history from JSON files
// ABOUTME: Also parses the date/time bounds accepted on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use tracing::debug;

use bullpen_core::errors::{AppError, AppResult, ErrorCode};
use bullpen_core::models::{PitchRecord, SessionSummary};
use bullpen_intelligence::reporting::SessionRecords;

/// Read and deserialize a JSON file
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, or
/// `SerializationError` if its content does not match `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let value = serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!("Invalid JSON in {}: {e}", path.display()))
            .with_source(e)
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "Loaded input file");
    Ok(value)
}

/// Pitch records of one session, in capture order
///
/// # Errors
///
/// See [`read_json`]
pub fn load_pitch_records(path: &Path) -> AppResult<Vec<PitchRecord>> {
    read_json(path)
}

/// Session summaries for the rest engine
///
/// # Errors
///
/// See [`read_json`]
pub fn load_session_summaries(path: &Path) -> AppResult<Vec<SessionSummary>> {
    read_json(path)
}

/// Sessions with their records for reporting
///
/// # Errors
///
/// See [`read_json`]
pub fn load_session_history(path: &Path) -> AppResult<Vec<SessionRecords>> {
    read_json(path)
}

/// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC)
///
/// # Errors
///
/// Returns `InvalidFormat` when the value is neither
pub fn parse_time_bound(value: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| {
            AppError::new(
                ErrorCode::InvalidFormat,
                format!("'{trimmed}' is not an RFC 3339 timestamp or YYYY-MM-DD date"),
            )
        })
}
