// ABOUTME: Benchmark fixtures for generating realistic bullpen sessions
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Benchmark fixtures.
//!
//! Locations and outcomes are derived from the pitch index so every run
//! measures the same data.

use bullpen::intelligence::ZoneMapper;
use bullpen::models::{
    BaseRunners, Count, NormalizedPoint, PitchOutcome, PitchRecord, PitchRecordBuilder,
    PitcherHandedness, SessionSummary,
};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Predefined session sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SessionSize {
    /// Short side session
    Short,
    /// Typical bullpen
    Bullpen,
    /// Long outing
    Outing,
}

impl SessionSize {
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Short => 15,
            Self::Bullpen => 40,
            Self::Outing => 110,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Bullpen => "bullpen",
            Self::Outing => "outing",
        }
    }
}

const PITCH_TYPES: [&str; 4] = ["fastball", "slider", "changeup", "curveball"];

const OUTCOMES: [PitchOutcome; 5] = [
    PitchOutcome::CalledStrike,
    PitchOutcome::Ball,
    PitchOutcome::Foul,
    PitchOutcome::SwingingStrike,
    PitchOutcome::InPlay,
];

/// Generate one session of `count` pitches
#[must_use]
pub fn generate_session(count: u32) -> Vec<PitchRecord> {
    let session_id = Uuid::new_v4();
    let hand = PitcherHandedness::Right;
    (0..count)
        .map(|index| {
            let i = f64::from(index);
            let target = NormalizedPoint::new(0.3 + f64::from(index % 5) * 0.1, 0.7 - f64::from(index % 3) * 0.2);
            let actual = NormalizedPoint::new(
                (target.x + (i * 0.37).sin() * 0.12).clamp(0.0, 1.0),
                (target.y + (i * 0.53).cos() * 0.12).clamp(0.0, 1.0),
            );
            let count = Count::new((index % 4) as u8, (index % 3) as u8).unwrap_or_default();
            PitchRecordBuilder::new(
                session_id,
                index,
                PITCH_TYPES[index as usize % PITCH_TYPES.len()],
                ZoneMapper::point_to_zone(target, hand),
                ZoneMapper::point_to_zone(actual, hand),
                OUTCOMES[index as usize % OUTCOMES.len()],
            )
            .count(count)
            .base_runners(BaseRunners::from_bits_truncate((index % 8) as u8))
            .target_point(target)
            .actual_point(actual)
            .velocity_mph(84.0 + f64::from(index % 9))
            .build()
        })
        .collect()
}

/// Generate a season of sessions, one every few days, ending at `end`
#[must_use]
pub fn generate_history(sessions: u32, end: DateTime<Utc>) -> Vec<SessionSummary> {
    (0..sessions)
        .map(|index| {
            let started_at = end - Duration::hours(i64::from(index) * 70 + 3);
            SessionSummary::new(
                started_at,
                Some(started_at + Duration::minutes(45)),
                20 + (index * 13) % 80,
            )
        })
        .collect()
}
