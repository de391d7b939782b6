// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors
// ABOUTME: Output formatting helpers for bullpen-cli
// ABOUTME: Provides consistent JSON and zone lookup output on stdout

use bullpen::errors::AppResult;
use bullpen::models::{PitcherHandedness, ZoneId};
use serde::Serialize;

/// Print a value as JSON on stdout
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Print a zone lookup result
pub fn display_zone(x: f64, y: f64, hand: PitcherHandedness, zone: &ZoneId) {
    println!("{zone}");
    if zone.is_unrecognized() {
        eprintln!("Point ({x}, {y}) could not be mapped for a {hand:?}-handed pitcher");
    }
}
