// ABOUTME: Geometry, scoring and coaching thresholds for pitch command analytics
// ABOUTME: Grouped by engine so every magic number used by the analyzers has one home
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Command analytics constants
//!
//! Normalized strike-zone space runs from 0 to 1 on both axes. The tracker's
//! location picker is a 90x90 canvas with the strike zone drawn from 15 to 75,
//! which is where the grid bounds come from.

/// Strike-zone grid geometry in normalized space
pub mod zone_grid {
    /// Canvas size of the location picker the grid was laid out on
    pub const CANVAS_SIZE: f64 = 90.0;

    /// Lower (left/bottom) bound of the interior grid
    pub const GRID_START: f64 = 15.0 / CANVAS_SIZE;

    /// Upper (right/top) bound of the interior grid
    pub const GRID_END: f64 = 75.0 / CANVAS_SIZE;

    /// Points within this distance outside the grid still classify as interior
    pub const EDGE_MARGIN: f64 = 0.05;

    /// Cells per grid side, as a float for the rescale arithmetic
    pub const CELLS_PER_SIDE: f64 = 3.0;
}

/// Exponential proximity model
pub mod proximity {
    /// Distance at which the proximity score falls to 1/e
    pub const CHARACTERISTIC_DISTANCE: f64 = 0.15;

    /// Decay rate of the proximity score per unit of normalized distance
    pub const DECAY_RATE: f64 = 1.0 / CHARACTERISTIC_DISTANCE;
}

/// Miss classification
pub mod miss {
    /// Offsets smaller than this on both axes are not counted as misses
    pub const MISS_TOLERANCE: f64 = 0.05;
}

/// Early/late trend windows
pub mod trend {
    /// Pitches in each of the early and late windows
    pub const WINDOW_SIZE: usize = 10;
}

/// Composite command score
pub mod command_score {
    /// Points available for strike rate
    pub const STRIKE_WEIGHT: f64 = 40.0;

    /// Points available for average proximity
    pub const PROXIMITY_WEIGHT: f64 = 40.0;

    /// Points available for small misses
    pub const MISS_WEIGHT: f64 = 20.0;

    /// Average miss distance that zeroes the miss component
    pub const MISS_NORMALIZATION: f64 = 0.5;

    /// Maximum score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Per pitch-type command rating weights (all terms in percent units)
pub mod command_rating {
    /// Weight of target-hit percentage
    pub const TARGET_HIT_WEIGHT: f64 = 0.4;

    /// Weight of competitive-strike percentage
    pub const COMPETITIVE_WEIGHT: f64 = 0.3;

    /// Weight of strike percentage
    pub const STRIKE_WEIGHT: f64 = 0.2;

    /// Penalty per percent of pitches left middle-middle
    pub const MIDDLE_MIDDLE_PENALTY: f64 = 0.5;
}

/// Coaching insight thresholds
pub mod insight_thresholds {
    /// Minimum pitch types before naming a most consistent pitch
    pub const MIN_PITCH_TYPES_FOR_COMPARISON: usize = 2;

    /// Strike percentage that makes a pitch type "most consistent"
    pub const CONSISTENT_PITCH_STRIKE_PCT: u8 = 60;

    /// Share of misses (percent) above which one direction is called out
    pub const DOMINANT_MISS_SHARE_PCT: f64 = 40.0;

    /// Minimum pitches before comparing early and late windows
    pub const MIN_PITCHES_FOR_TREND: usize = 20;

    /// Proximity change between windows that counts as a real trend
    pub const TREND_CHANGE_THRESHOLD: f64 = 0.1;

    /// Strike percentage praised as excellent
    pub const HIGH_STRIKE_PCT: u8 = 70;

    /// Strike percentage below which strikes need focus
    pub const LOW_STRIKE_PCT: u8 = 50;

    /// Hit rate praised as precise
    pub const HIGH_HIT_RATE: u8 = 50;

    /// Hit rate below which zone targeting needs practice
    pub const LOW_HIT_RATE: u8 = 30;
}

/// Workload rest model
pub mod workload {
    /// Default hours of rest owed per pitch thrown
    pub const DEFAULT_REST_HOURS_PER_PITCH: f64 = 1.0;

    /// Hours per day
    pub const HOURS_PER_DAY: f64 = 24.0;

    /// Remaining rest (days) at or below which status is only "borderline"
    pub const BORDERLINE_REST_DAYS: f64 = 1.0;
}
