// ABOUTME: Analyze command for bullpen-cli
// ABOUTME: Loads one session's pitch records and prints its command analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use std::path::Path;

use bullpen::errors::AppResult;
use bullpen::input::load_pitch_records;
use bullpen::intelligence::{AnalyticsConfig, PitchAnalyticsEngine, StrikePolicy};
use bullpen::models::PitcherHandedness;
use tracing::info;

use crate::helpers::display::print_json;

/// Compute and print session analytics
pub fn run(
    input: &Path,
    hand: PitcherHandedness,
    include_in_play: bool,
    pretty: bool,
) -> AppResult<()> {
    let records = load_pitch_records(input)?;

    let mut config = AnalyticsConfig::global().command.clone();
    if include_in_play {
        config.strike_policy = StrikePolicy::IncludeInPlay;
    }

    let analytics = PitchAnalyticsEngine::from_config(&config).compute(&records, hand);
    info!(
        pitches = analytics.total_pitches,
        command_score = analytics.command_score,
        strike_policy = %config.strike_policy,
        "Analyzed session"
    );

    print_json(&analytics, pretty)
}
