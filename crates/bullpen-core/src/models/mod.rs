// ABOUTME: Core data models for pitch tracking
// ABOUTME: Re-exports pitch records, strike-zone identifiers and session types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! # Data Models
//!
//! - `PitchRecord`: one logged pitch with its situation and locations
//! - `ZoneId`: where a pitch was aimed or landed
//! - `PitchSession` / `SessionSummary`: the session a pitch belongs to

mod pitch;
mod session;
mod zone;

pub use pitch::{
    BaseRunners, BatterSide, Count, NormalizedPoint, PitchOutcome, PitchRecord,
    PitchRecordBuilder, PitcherHandedness,
};
pub use session::{PitchSession, SessionStatus, SessionSummary};
pub use zone::{EdgeDirection, GridCell, ZoneId, GRID_DIMENSION};
