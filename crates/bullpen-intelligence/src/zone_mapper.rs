// ABOUTME: Maps normalized click/point coordinates onto the 13 strike-zone location categories
// ABOUTME: Handedness-aware edge classification with a tolerance margin around the 3x3 grid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Zone mapping
//!
//! The interior grid spans `[GRID_START, GRID_END]` on both axes. A point up
//! to `EDGE_MARGIN` outside the grid is still treated as touching it and is
//! snapped onto the nearest interior cell; anything further out becomes an
//! edge category. The checks run high, low, left, right, so a corner point
//! beyond the margin on both axes is reported as high or low.

use bullpen_core::models::{
    EdgeDirection, GridCell, NormalizedPoint, PitcherHandedness, ZoneId,
};

use crate::command_constants::zone_grid::{CELLS_PER_SIDE, EDGE_MARGIN, GRID_END, GRID_START};

/// Label given to a point whose coordinates are not numbers
pub const UNMAPPABLE_ZONE_LABEL: &str = "UNMAPPABLE";

/// Width of the interior grid in normalized units
const GRID_SPAN: f64 = GRID_END - GRID_START;

/// Converts between normalized coordinates and `ZoneId`s
pub struct ZoneMapper;

impl ZoneMapper {
    /// Classify a normalized point into one of the 13 zones
    ///
    /// x: 0 = left, 1 = right (catcher's view); y: 0 = bottom, 1 = top.
    /// Handedness only matters outside the grid, where the left edge is arm
    /// side for a right-hander and glove side for a left-hander.
    #[must_use]
    pub fn coords_to_zone(x: f64, y: f64, hand: PitcherHandedness) -> ZoneId {
        if x.is_nan() || y.is_nan() {
            return ZoneId::Unrecognized(UNMAPPABLE_ZONE_LABEL.to_owned());
        }

        let outer_low = GRID_START - EDGE_MARGIN;
        let outer_high = GRID_END + EDGE_MARGIN;

        if y > outer_high {
            return ZoneId::Edge(EdgeDirection::High);
        }
        if y < outer_low {
            return ZoneId::Edge(EdgeDirection::Low);
        }
        if x < outer_low {
            return ZoneId::Edge(Self::left_edge(hand));
        }
        if x > outer_high {
            return ZoneId::Edge(Self::left_edge(hand.mirrored()));
        }

        let grid_x = (x.clamp(GRID_START, GRID_END) - GRID_START) / GRID_SPAN;
        let grid_y = (y.clamp(GRID_START, GRID_END) - GRID_START) / GRID_SPAN;

        let col = Self::cell_index(grid_x);
        // y = 1 is the top of the zone, row 0 is the top row
        let row = Self::cell_index(1.0 - grid_y);

        ZoneId::Interior(GridCell::clamped(row + 1, col + 1))
    }

    /// Classify a `NormalizedPoint`
    #[must_use]
    pub fn point_to_zone(point: NormalizedPoint, hand: PitcherHandedness) -> ZoneId {
        Self::coords_to_zone(point.x, point.y, hand)
    }

    /// Representative point for a zone, the inverse of `coords_to_zone`
    ///
    /// Interior cells map to their centre. Edge zones map to a point midway
    /// between the grid and the border of the normalized space on the
    /// matching side. Unrecognized zones have no location.
    #[must_use]
    pub fn zone_center(zone: &ZoneId, hand: PitcherHandedness) -> Option<NormalizedPoint> {
        let beyond_low = GRID_START / 2.0;
        let beyond_high = (GRID_END + 1.0) / 2.0;

        match zone {
            ZoneId::Interior(cell) => {
                let col_offset = (f64::from(cell.col()) - 0.5) / CELLS_PER_SIDE;
                let row_offset = (f64::from(cell.row()) - 0.5) / CELLS_PER_SIDE;
                Some(NormalizedPoint::new(
                    GRID_START + col_offset * GRID_SPAN,
                    GRID_END - row_offset * GRID_SPAN,
                ))
            }
            ZoneId::Edge(EdgeDirection::High) => Some(NormalizedPoint::new(0.5, beyond_high)),
            ZoneId::Edge(EdgeDirection::Low) => Some(NormalizedPoint::new(0.5, beyond_low)),
            ZoneId::Edge(side) => {
                let x = if *side == Self::left_edge(hand) {
                    beyond_low
                } else {
                    beyond_high
                };
                Some(NormalizedPoint::new(x, 0.5))
            }
            ZoneId::Unrecognized(_) => None,
        }
    }

    /// Edge category on the catcher's left for the given pitcher
    const fn left_edge(hand: PitcherHandedness) -> EdgeDirection {
        match hand {
            PitcherHandedness::Right => EdgeDirection::Arm,
            PitcherHandedness::Left => EdgeDirection::Glove,
        }
    }

    /// Cell index 0..=2 for a position rescaled into [0, 1]
    fn cell_index(position: f64) -> u8 {
        (position * CELLS_PER_SIDE)
            .floor()
            .clamp(0.0, CELLS_PER_SIDE - 1.0) as u8
    }
}
