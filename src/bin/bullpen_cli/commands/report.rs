// ABOUTME: Report command for bullpen-cli
// ABOUTME: Reruns session analytics over completed sessions started within a date range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use std::path::Path;

use bullpen::errors::AppResult;
use bullpen::input::{load_session_history, parse_time_bound};
use bullpen::intelligence::{
    AnalyticsConfig, DateRange, PitchAnalyticsEngine, PitchReportBuilder, StrikePolicy,
};
use bullpen::models::PitcherHandedness;
use tracing::info;

use crate::helpers::display::print_json;

/// Build and print a date-filtered report
pub fn run(
    input: &Path,
    from: Option<&str>,
    to: Option<&str>,
    hand: PitcherHandedness,
    include_in_play: bool,
    pretty: bool,
) -> AppResult<()> {
    let range = DateRange::new(
        from.map(parse_time_bound).transpose()?,
        to.map(parse_time_bound).transpose()?,
    )?;
    let history = load_session_history(input)?;

    let mut config = AnalyticsConfig::global().command.clone();
    if include_in_play {
        config.strike_policy = StrikePolicy::IncludeInPlay;
    }

    let report = PitchReportBuilder::new(PitchAnalyticsEngine::from_config(&config))
        .range(range)
        .hand(hand)
        .build(&history);
    info!(
        sessions = report.session_count,
        pitches = report.analytics.total_pitches,
        "Built pitch report"
    );

    print_json(&report, pretty)
}
