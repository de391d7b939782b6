// ABOUTME: Zone command for bullpen-cli
// ABOUTME: Maps a normalized point to one of the 13 strike-zone categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use bullpen::intelligence::ZoneMapper;
use bullpen::models::PitcherHandedness;

use crate::helpers::display::display_zone;

/// Print the zone label for a point
pub fn run(x: f64, y: f64, hand: PitcherHandedness) {
    let zone = ZoneMapper::coords_to_zone(x, y, hand);
    display_zone(x, y, hand, &zone);
}
