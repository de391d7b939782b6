// ABOUTME: Error type for strict parsing of strike-zone labels
// ABOUTME: Distinguishes unknown labels from interior cells outside the 3x3 grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use thiserror::Error;

/// Errors produced by `ZoneId::parse`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneParseError {
    /// Label is neither `Z{row}{col}` nor an `EDGE_*` category
    #[error("Unknown zone label '{label}'")]
    UnknownLabel {
        /// The label as given
        label: String,
    },

    /// Interior label with a row or column outside 1..=3
    #[error("Zone Z{row}{col} is outside the 3x3 grid")]
    OutOfGrid {
        /// Parsed row digit
        row: u8,
        /// Parsed column digit
        col: u8,
    },
}

impl ZoneParseError {
    pub(crate) fn unknown(label: &str) -> Self {
        Self::UnknownLabel {
            label: label.to_owned(),
        }
    }
}
