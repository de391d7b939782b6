// ABOUTME: Strike-zone location identifiers: 9 interior grid cells plus 4 edge categories
// ABOUTME: Tagged ZoneId variant with strict parsing and lenient deserialization of store labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ZoneParseError;

/// Number of rows (and columns) in the interior strike-zone grid
pub const GRID_DIMENSION: u8 = 3;

/// One cell of the 3x3 interior grid, 1-indexed with row 1 at the top
///
/// Fields are private so a cell outside the grid cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    row: u8,
    col: u8,
}

impl GridCell {
    /// Centre cell of the grid (`Z22`)
    pub const CENTER: Self = Self { row: 2, col: 2 };

    /// Create a cell from 1-indexed row/column, `None` when outside the grid
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= 1 && row <= GRID_DIMENSION && col >= 1 && col <= GRID_DIMENSION {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Create a cell, clamping row/column into 1..=3
    #[must_use]
    pub const fn clamped(row: u8, col: u8) -> Self {
        const fn clamp(index: u8) -> u8 {
            if index < 1 {
                1
            } else if index > GRID_DIMENSION {
                GRID_DIMENSION
            } else {
                index
            }
        }
        Self {
            row: clamp(row),
            col: clamp(col),
        }
    }

    /// Row index, 1 = top
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index, 1 = left in catcher's view
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// All nine cells in reading order (Z11, Z12, ... Z33)
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=GRID_DIMENSION)
            .flat_map(|row| (1..=GRID_DIMENSION).map(move |col| Self { row, col }))
    }
}

/// Out-of-zone ("ball") categories around the grid
///
/// Arm and glove side are relative to the pitcher, so which horizontal edge
/// they occupy depends on handedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Above the zone
    High,
    /// Below the zone
    Low,
    /// Pitcher's arm side
    Arm,
    /// Pitcher's glove side
    Glove,
}

impl EdgeDirection {
    /// All edge categories in label order
    pub const ALL: [Self; 4] = [Self::High, Self::Low, Self::Arm, Self::Glove];

    /// Store label (`EDGE_HIGH`, ...)
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "EDGE_HIGH",
            Self::Low => "EDGE_LOW",
            Self::Arm => "EDGE_ARM",
            Self::Glove => "EDGE_GLOVE",
        }
    }
}

/// Location category a pitch was aimed at or landed in
///
/// Serialized as the store's string label (`Z11`..`Z33`, `EDGE_*`). Labels the
/// engine does not know deserialize into [`ZoneId::Unrecognized`] instead of
/// failing, so a bad record still counts toward strike and hit-rate totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ZoneId {
    /// Inside the 3x3 strike-zone grid
    Interior(GridCell),
    /// Outside the grid
    Edge(EdgeDirection),
    /// Label read from the store that matches none of the 13 zones
    Unrecognized(String),
}

impl ZoneId {
    /// Centre cell (`Z22`), the "middle-middle" location
    pub const CENTER: Self = Self::Interior(GridCell::CENTER);

    /// Build an interior zone from 1-indexed row/column
    #[must_use]
    pub fn interior(row: u8, col: u8) -> Option<Self> {
        GridCell::new(row, col).map(Self::Interior)
    }

    /// Build an edge zone
    #[must_use]
    pub const fn edge(direction: EdgeDirection) -> Self {
        Self::Edge(direction)
    }

    /// Strictly parse a store label
    ///
    /// # Errors
    ///
    /// Returns `ZoneParseError` if the label is not one of the 13 known zones
    pub fn parse(label: &str) -> Result<Self, ZoneParseError> {
        let trimmed = label.trim();
        if let Some(direction) = EdgeDirection::ALL
            .into_iter()
            .find(|edge| edge.label().eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self::Edge(direction));
        }

        let digits = trimmed
            .strip_prefix('Z')
            .or_else(|| trimmed.strip_prefix('z'))
            .ok_or_else(|| ZoneParseError::unknown(trimmed))?;
        let bytes = digits.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ZoneParseError::unknown(trimmed));
        }

        let row = bytes[0] - b'0';
        let col = bytes[1] - b'0';
        Self::interior(row, col).ok_or(ZoneParseError::OutOfGrid { row, col })
    }

    /// Store label for this zone
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Interior(cell) => format!("Z{}{}", cell.row, cell.col),
            Self::Edge(direction) => direction.label().to_owned(),
            Self::Unrecognized(raw) => raw.clone(),
        }
    }

    /// Whether this is one of the four edge categories
    #[must_use]
    pub const fn is_edge(&self) -> bool {
        matches!(self, Self::Edge(_))
    }

    /// Whether this is the centre cell
    #[must_use]
    pub fn is_center(&self) -> bool {
        *self == Self::CENTER
    }

    /// Whether the label was not recognized when read
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }

    /// Ordering key used for stable zone listings: grid cells, then edges, then unknown labels
    #[must_use]
    pub fn sort_key(&self) -> (u8, u8, String) {
        match self {
            Self::Interior(cell) => (0, cell.row * GRID_DIMENSION + cell.col, String::new()),
            Self::Edge(direction) => (1, *direction as u8, String::new()),
            Self::Unrecognized(raw) => (2, 0, raw.clone()),
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for ZoneId {
    type Err = ZoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<String> for ZoneId {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or_else(|err| {
            warn!(label = %raw, error = %err, "Unrecognized zone label, keeping as-is");
            Self::Unrecognized(raw)
        })
    }
}

impl From<ZoneId> for String {
    fn from(zone: ZoneId) -> Self {
        zone.label()
    }
}
