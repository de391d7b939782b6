// ABOUTME: Rest command for bullpen-cli
// ABOUTME: Folds session summaries into a rest recommendation at a given time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use std::path::Path;

use bullpen::errors::AppResult;
use bullpen::input::{load_session_summaries, parse_time_bound};
use bullpen::intelligence::{AnalyticsConfig, WorkloadRestEngine};
use chrono::Utc;
use tracing::info;

use crate::helpers::display::print_json;

/// Compute and print rest status
pub fn run(
    input: &Path,
    now: Option<&str>,
    rest_hours_per_pitch: Option<f64>,
    pretty: bool,
) -> AppResult<()> {
    let sessions = load_session_summaries(input)?;
    let now = now.map(parse_time_bound).transpose()?.unwrap_or_else(Utc::now);

    let mut config = AnalyticsConfig::global().workload.clone();
    if let Some(rate) = rest_hours_per_pitch {
        config.rest_hours_per_pitch = rate;
    }
    config.validate()?;

    let status = WorkloadRestEngine::new(config).compute(&sessions, now);
    info!(
        sessions = sessions.len(),
        status = ?status.status,
        "Computed rest status"
    );

    print_json(&status, pretty)
}
