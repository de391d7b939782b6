// ABOUTME: Individually logged pitch events and the game situation they were thrown in
// ABOUTME: Defines PitchRecord, outcomes, count, base runners, handedness and a record builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::limits::{MAX_BALLS, MAX_OUTS, MAX_STRIKES};
use crate::errors::{AppError, AppResult};

use super::ZoneId;

/// Throwing hand of the pitcher
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitcherHandedness {
    /// Right-handed pitcher
    #[default]
    Right,
    /// Left-handed pitcher
    Left,
}

impl PitcherHandedness {
    /// The other hand
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Side of the plate the batter stood on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatterSide {
    /// Left-handed batter
    Left,
    /// Right-handed batter
    #[default]
    Right,
}

/// Result of a single pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchOutcome {
    /// Taken outside the zone
    Ball,
    /// Taken for a strike
    CalledStrike,
    /// Swung on and missed
    SwingingStrike,
    /// Fouled off
    Foul,
    /// Put in play
    InPlay,
}

impl PitchOutcome {
    /// Called, swinging and foul strikes; `InPlay` is deliberately excluded
    /// and left to the caller's strike policy
    #[must_use]
    pub const fn is_strike_call(self) -> bool {
        matches!(self, Self::CalledStrike | Self::SwingingStrike | Self::Foul)
    }
}

/// Ball-strike count before the pitch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Count {
    /// Balls (0-3)
    pub balls: u8,
    /// Strikes (0-2)
    pub strikes: u8,
}

impl Count {
    /// Create a count, validating the ranges
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if balls > 3 or strikes > 2
    pub fn new(balls: u8, strikes: u8) -> AppResult<Self> {
        if balls > MAX_BALLS || strikes > MAX_STRIKES {
            return Err(AppError::out_of_range(format!(
                "Count {balls}-{strikes} is not a valid ball-strike count"
            )));
        }
        Ok(Self { balls, strikes })
    }

    /// 0-0 count
    #[must_use]
    pub const fn is_first_pitch(self) -> bool {
        self.balls == 0 && self.strikes == 0
    }

    /// More balls than strikes
    #[must_use]
    pub const fn is_pitcher_behind(self) -> bool {
        self.balls > self.strikes
    }

    /// More strikes than balls
    #[must_use]
    pub const fn is_pitcher_ahead(self) -> bool {
        self.strikes > self.balls
    }

    /// Two strikes on the batter
    #[must_use]
    pub const fn is_two_strike(self) -> bool {
        self.strikes == MAX_STRIKES
    }
}

bitflags! {
    /// Occupied bases at the time of the pitch
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BaseRunners: u8 {
        /// Runner on first
        const FIRST = 0b001;
        /// Runner on second
        const SECOND = 0b010;
        /// Runner on third
        const THIRD = 0b100;
    }
}

impl BaseRunners {
    /// Runner on second or third
    #[must_use]
    pub const fn in_scoring_position(self) -> bool {
        self.intersects(Self::SECOND.union(Self::THIRD))
    }
}

/// A point in normalized strike-zone space
///
/// x: 0 = left, 1 = right from the catcher's view; y: 0 = bottom, 1 = top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
}

impl NormalizedPoint {
    /// Centre of the strike-zone space
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates lie within [0, 1]
    #[must_use]
    pub fn is_within_bounds(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// A single logged pitch
///
/// Immutable once created. Normalized coordinates are optional; when
/// present they are expected to lie in [0, 1], which this type does not enforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchRecord {
    /// Session this pitch belongs to
    pub session_id: Uuid,
    /// Monotonic position within the session
    pub sequence_index: u32,
    /// Pitch type identifier (fastball, slider, ...)
    pub pitch_type_id: String,
    /// Batter side
    #[serde(default)]
    pub batter_side: BatterSide,
    /// Ball-strike count before the pitch
    #[serde(default)]
    pub count: Count,
    /// Occupied bases
    #[serde(default)]
    pub base_runners: BaseRunners,
    /// Outs (0-2)
    #[serde(default)]
    pub outs: u8,
    /// Intended location
    pub target_zone: ZoneId,
    /// Observed location
    pub actual_zone: ZoneId,
    /// Intended horizontal position
    #[serde(default)]
    pub target_x_norm: Option<f64>,
    /// Intended vertical position
    #[serde(default)]
    pub target_y_norm: Option<f64>,
    /// Observed horizontal position
    #[serde(default)]
    pub actual_x_norm: Option<f64>,
    /// Observed vertical position
    #[serde(default)]
    pub actual_y_norm: Option<f64>,
    /// Result of the pitch
    pub outcome: PitchOutcome,
    /// Measured miss distance from target, in inches
    #[serde(default)]
    pub miss_distance_inches: Option<f64>,
    /// Release velocity
    #[serde(default)]
    pub velocity_mph: Option<f64>,
}

impl PitchRecord {
    /// Intended location, if both coordinates were captured
    #[must_use]
    pub fn target_point(&self) -> Option<NormalizedPoint> {
        Some(NormalizedPoint::new(self.target_x_norm?, self.target_y_norm?))
    }

    /// Observed location, if both coordinates were captured
    #[must_use]
    pub fn actual_point(&self) -> Option<NormalizedPoint> {
        Some(NormalizedPoint::new(self.actual_x_norm?, self.actual_y_norm?))
    }

    /// Target and actual points, only when all four coordinates are present
    #[must_use]
    pub fn coordinate_pair(&self) -> Option<(NormalizedPoint, NormalizedPoint)> {
        Some((self.target_point()?, self.actual_point()?))
    }

    /// The pitch landed in the zone it was aimed at
    #[must_use]
    pub fn hit_target(&self) -> bool {
        self.actual_zone == self.target_zone
    }
}

/// Builder for `PitchRecord`
#[derive(Debug, Clone)]
pub struct PitchRecordBuilder {
    record: PitchRecord,
}

impl PitchRecordBuilder {
    /// Start a record with the required fields
    #[must_use]
    pub fn new(
        session_id: Uuid,
        sequence_index: u32,
        pitch_type_id: impl Into<String>,
        target_zone: ZoneId,
        actual_zone: ZoneId,
        outcome: PitchOutcome,
    ) -> Self {
        Self {
            record: PitchRecord {
                session_id,
                sequence_index,
                pitch_type_id: pitch_type_id.into(),
                batter_side: BatterSide::default(),
                count: Count::default(),
                base_runners: BaseRunners::empty(),
                outs: 0,
                target_zone,
                actual_zone,
                target_x_norm: None,
                target_y_norm: None,
                actual_x_norm: None,
                actual_y_norm: None,
                outcome,
                miss_distance_inches: None,
                velocity_mph: None,
            },
        }
    }

    /// Set the batter side
    #[must_use]
    pub const fn batter_side(mut self, side: BatterSide) -> Self {
        self.record.batter_side = side;
        self
    }

    /// Set the count before the pitch
    #[must_use]
    pub const fn count(mut self, count: Count) -> Self {
        self.record.count = count;
        self
    }

    /// Set the occupied bases
    #[must_use]
    pub const fn base_runners(mut self, runners: BaseRunners) -> Self {
        self.record.base_runners = runners;
        self
    }

    /// Set the outs, validating 0-2
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for more than two outs
    pub fn outs(mut self, outs: u8) -> AppResult<Self> {
        if outs > MAX_OUTS {
            return Err(AppError::out_of_range(format!(
                "{outs} outs is not a valid game state"
            )));
        }
        self.record.outs = outs;
        Ok(self)
    }

    /// Set the intended point
    #[must_use]
    pub const fn target_point(mut self, point: NormalizedPoint) -> Self {
        self.record.target_x_norm = Some(point.x);
        self.record.target_y_norm = Some(point.y);
        self
    }

    /// Set the observed point
    #[must_use]
    pub const fn actual_point(mut self, point: NormalizedPoint) -> Self {
        self.record.actual_x_norm = Some(point.x);
        self.record.actual_y_norm = Some(point.y);
        self
    }

    /// Set the measured miss distance
    #[must_use]
    pub const fn miss_distance_inches(mut self, inches: f64) -> Self {
        self.record.miss_distance_inches = Some(inches);
        self
    }

    /// Set the release velocity
    #[must_use]
    pub const fn velocity_mph(mut self, mph: f64) -> Self {
        self.record.velocity_mph = Some(mph);
        self
    }

    /// Finish the record
    #[must_use]
    pub fn build(self) -> PitchRecord {
        self.record
    }
}
