// ABOUTME: Classifies each missed location into arm-side, glove-side, up or down
// ABOUTME: Aggregates direction shares over misses and the average miss distance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Miss-direction analysis
//!
//! The zone mapper mirrors arm and glove side by pitcher handedness, while
//! the classic miss classification treats +x (catcher's right) as arm side
//! for everyone. Both readings are available through
//! [`MissDirectionConvention`]; `CatcherView` is the default.

use std::fmt;
use std::str::FromStr;

use bullpen_core::models::{NormalizedPoint, PitchRecord, PitcherHandedness};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command_constants::miss::MISS_TOLERANCE;
use crate::config::ConfigError;
use crate::proximity::ProximityModel;
use crate::statistics::{round_to_tenths, share};

/// Direction of a missed location relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissDirection {
    /// Toward the pitcher's arm side
    ArmSide,
    /// Toward the pitcher's glove side
    GloveSide,
    /// Above the target
    Up,
    /// Below the target
    Down,
}

impl MissDirection {
    /// Tie-break order used when shares are equal
    pub const PRIORITY: [Self; 4] = [Self::ArmSide, Self::GloveSide, Self::Up, Self::Down];

    /// Human-readable name
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::ArmSide => "arm side",
            Self::GloveSide => "glove side",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for MissDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// How horizontal misses map onto arm and glove side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissDirectionConvention {
    /// +x from the catcher's view is always arm side, whatever the hand
    #[default]
    CatcherView,
    /// Arm side is the side the zone mapper puts `EDGE_ARM` on for the hand:
    /// catcher's left for a right-hander, catcher's right for a left-hander
    PitcherRelative,
}

impl MissDirectionConvention {
    /// Config/env label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CatcherView => "catcher_view",
            Self::PitcherRelative => "pitcher_relative",
        }
    }

    /// Whether a positive horizontal offset is arm side under this convention
    const fn positive_x_is_arm_side(self, hand: PitcherHandedness) -> bool {
        match self {
            Self::CatcherView => true,
            Self::PitcherRelative => matches!(hand, PitcherHandedness::Left),
        }
    }
}

impl fmt::Display for MissDirectionConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissDirectionConvention {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "catcher_view" | "catcher" => Ok(Self::CatcherView),
            "pitcher_relative" | "pitcher" => Ok(Self::PitcherRelative),
            other => Err(ConfigError::Parse(format!(
                "unknown miss direction convention '{other}'"
            ))),
        }
    }
}

/// Per-direction miss tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissCounts {
    /// Arm-side misses
    pub arm_side: usize,
    /// Glove-side misses
    pub glove_side: usize,
    /// Misses above the target
    pub up: usize,
    /// Misses below the target
    pub down: usize,
}

impl MissCounts {
    /// Count for one direction
    #[must_use]
    pub const fn of(&self, direction: MissDirection) -> usize {
        match direction {
            MissDirection::ArmSide => self.arm_side,
            MissDirection::GloveSide => self.glove_side,
            MissDirection::Up => self.up,
            MissDirection::Down => self.down,
        }
    }

    /// Add one miss in `direction`
    pub fn record(&mut self, direction: MissDirection) {
        match direction {
            MissDirection::ArmSide => self.arm_side += 1,
            MissDirection::GloveSide => self.glove_side += 1,
            MissDirection::Up => self.up += 1,
            MissDirection::Down => self.down += 1,
        }
    }

    /// All misses
    #[must_use]
    pub const fn total(&self) -> usize {
        self.arm_side + self.glove_side + self.up + self.down
    }
}

/// Direction shares over missed pitches
///
/// Shares are percentages of misses, not of all pitches, and are all 0 when
/// nothing missed. The `*_pct` fields are rounded for display; thresholds
/// are checked against [`MissPattern::exact_share`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissPattern {
    /// Arm-side share, 1 dp
    pub arm_side_pct: f64,
    /// Glove-side share, 1 dp
    pub glove_side_pct: f64,
    /// Up share, 1 dp
    pub up_pct: f64,
    /// Down share, 1 dp
    pub down_pct: f64,
    /// Coordinate-bearing records outside the miss tolerance
    pub miss_count: usize,
    /// Misses per direction
    #[serde(default)]
    pub counts: MissCounts,
    /// Mean normalized distance over misses
    pub avg_miss_distance: f64,
}

impl MissPattern {
    /// Pattern from direction tallies and the mean miss distance
    #[must_use]
    pub fn from_counts(counts: MissCounts, avg_miss_distance: f64) -> Self {
        let miss_count = counts.total();
        if miss_count == 0 {
            return Self::default();
        }
        let pct = |direction| round_to_tenths(share(counts.of(direction), miss_count));
        Self {
            arm_side_pct: pct(MissDirection::ArmSide),
            glove_side_pct: pct(MissDirection::GloveSide),
            up_pct: pct(MissDirection::Up),
            down_pct: pct(MissDirection::Down),
            miss_count,
            counts,
            avg_miss_distance,
        }
    }

    /// Rounded share of misses in the given direction
    #[must_use]
    pub const fn share_of(&self, direction: MissDirection) -> f64 {
        match direction {
            MissDirection::ArmSide => self.arm_side_pct,
            MissDirection::GloveSide => self.glove_side_pct,
            MissDirection::Up => self.up_pct,
            MissDirection::Down => self.down_pct,
        }
    }

    /// Unrounded `100 * count / miss_count` for the given direction
    #[must_use]
    pub fn exact_share(&self, direction: MissDirection) -> f64 {
        share(self.counts.of(direction), self.miss_count)
    }

    /// Direction with the most misses and its rounded share, first in
    /// [`MissDirection::PRIORITY`] on ties; `None` when there were no misses
    #[must_use]
    pub fn dominant(&self) -> Option<(MissDirection, f64)> {
        if self.miss_count == 0 {
            return None;
        }
        MissDirection::PRIORITY
            .into_iter()
            .reduce(|best, candidate| {
                if self.counts.of(candidate) > self.counts.of(best) {
                    candidate
                } else {
                    best
                }
            })
            .map(|direction| (direction, self.share_of(direction)))
    }
}

/// Builds a [`MissPattern`] from a session's records
#[derive(Debug, Clone, Copy, Default)]
pub struct MissPatternAnalyzer {
    convention: MissDirectionConvention,
}

impl MissPatternAnalyzer {
    /// Analyzer with the given horizontal convention
    #[must_use]
    pub const fn new(convention: MissDirectionConvention) -> Self {
        Self { convention }
    }

    /// Convention in use
    #[must_use]
    pub const fn convention(&self) -> MissDirectionConvention {
        self.convention
    }

    /// Direction of a single miss, `None` when within tolerance on both axes
    #[must_use]
    pub fn classify(
        &self,
        target: NormalizedPoint,
        actual: NormalizedPoint,
        hand: PitcherHandedness,
    ) -> Option<MissDirection> {
        let dx = actual.x - target.x;
        let dy = actual.y - target.y;

        if dx.abs() < MISS_TOLERANCE && dy.abs() < MISS_TOLERANCE {
            return None;
        }

        if dy.abs() > dx.abs() {
            return Some(if dy > 0.0 {
                MissDirection::Up
            } else {
                MissDirection::Down
            });
        }

        let toward_positive_x = dx > 0.0;
        if toward_positive_x == self.convention.positive_x_is_arm_side(hand) {
            Some(MissDirection::ArmSide)
        } else {
            Some(MissDirection::GloveSide)
        }
    }

    /// Aggregate misses over the coordinate-bearing records
    #[must_use]
    pub fn analyze(&self, records: &[PitchRecord], hand: PitcherHandedness) -> MissPattern {
        let mut counts = MissCounts::default();
        let mut total_distance = 0.0;

        for (target, actual) in records.iter().filter_map(PitchRecord::coordinate_pair) {
            if let Some(direction) = self.classify(target, actual, hand) {
                counts.record(direction);
                total_distance += ProximityModel::distance(target, actual);
            }
        }

        let miss_count = counts.total();
        if miss_count == 0 {
            return MissPattern::default();
        }

        let pattern = MissPattern::from_counts(counts, total_distance / miss_count as f64);
        debug!(
            misses = miss_count,
            convention = %self.convention,
            ?hand,
            "Analyzed miss pattern"
        );
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_box_is_not_a_miss() {
        let analyzer = MissPatternAnalyzer::default();
        let target = NormalizedPoint::CENTER;
        let actual = NormalizedPoint::new(0.54, 0.46);
        assert_eq!(
            analyzer.classify(target, actual, PitcherHandedness::Right),
            None
        );
    }

    #[test]
    fn test_diagonal_tie_goes_horizontal() {
        let analyzer = MissPatternAnalyzer::default();
        let direction = analyzer.classify(
            NormalizedPoint::CENTER,
            NormalizedPoint::new(0.6, 0.6),
            PitcherHandedness::Right,
        );
        assert_eq!(direction, Some(MissDirection::ArmSide));
    }

    #[test]
    fn test_dominant_prefers_priority_on_ties() {
        let counts = MissCounts {
            glove_side: 1,
            up: 1,
            ..MissCounts::default()
        };
        let pattern = MissPattern::from_counts(counts, 0.2);
        assert_eq!(pattern.dominant(), Some((MissDirection::GloveSide, 50.0)));
        assert_eq!(MissPattern::default().dominant(), None);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_dominant_compares_counts_not_rounded_shares() {
        // 1001 and 1000 of 4000 both display as 25.0
        let counts = MissCounts {
            arm_side: 1000,
            glove_side: 1001,
            up: 1000,
            down: 999,
        };
        let pattern = MissPattern::from_counts(counts, 0.2);
        assert_eq!(pattern.arm_side_pct, pattern.glove_side_pct);
        assert_eq!(pattern.dominant().map(|(d, _)| d), Some(MissDirection::GloveSide));
    }
}
