// ABOUTME: Shared helpers for the Bullpen integration tests
// ABOUTME: Record builders and seeded synthetic session generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod synthetic_pitches;

use bullpen::intelligence::command_constants::proximity::CHARACTERISTIC_DISTANCE;
use bullpen::models::{
    Count, NormalizedPoint, PitchOutcome, PitchRecord, PitchRecordBuilder, ZoneId,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

/// Fixed reference instant so time-based tests are reproducible
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap()
}

/// Reference time shifted by whole hours
pub fn hours_after(hours: i64) -> DateTime<Utc> {
    reference_time() + Duration::hours(hours)
}

/// Parse a zone label, panicking on typos in test data
pub fn zone(label: &str) -> ZoneId {
    ZoneId::parse(label).unwrap()
}

/// Record aimed and landing at given zones with no coordinates
pub fn zoned_pitch(
    sequence_index: u32,
    pitch_type: &str,
    target: &str,
    actual: &str,
    outcome: PitchOutcome,
) -> PitchRecord {
    PitchRecordBuilder::new(
        Uuid::nil(),
        sequence_index,
        pitch_type,
        zone(target),
        zone(actual),
        outcome,
    )
    .build()
}

/// Record with target and actual coordinates; zones are taken from the
/// labels given so hit/miss can be controlled independently
pub fn located_pitch(
    sequence_index: u32,
    target: (f64, f64),
    actual: (f64, f64),
    outcome: PitchOutcome,
) -> PitchRecord {
    PitchRecordBuilder::new(
        Uuid::nil(),
        sequence_index,
        "fastball",
        ZoneId::CENTER,
        ZoneId::CENTER,
        outcome,
    )
    .target_point(NormalizedPoint::new(target.0, target.1))
    .actual_point(NormalizedPoint::new(actual.0, actual.1))
    .build()
}

/// Ball thrown straight arm side of a centred target, far enough off to
/// have the given proximity score
pub fn pitch_scoring(sequence_index: u32, score: f64) -> PitchRecord {
    let offset = -CHARACTERISTIC_DISTANCE * score.ln();
    located_pitch(
        sequence_index,
        (0.5, 0.5),
        (0.5 + offset, 0.5),
        PitchOutcome::Ball,
    )
}

/// Twenty records: ten scoring `early`, then ten scoring `late`
pub fn two_window_session(early: f64, late: f64) -> Vec<PitchRecord> {
    (0..10)
        .map(|i| pitch_scoring(i, early))
        .chain((10..20).map(|i| pitch_scoring(i, late)))
        .collect()
}

/// Record thrown at a given count
pub fn pitch_at_count(
    sequence_index: u32,
    balls: u8,
    strikes: u8,
    outcome: PitchOutcome,
    hit: bool,
) -> PitchRecord {
    let actual = if hit { "Z22" } else { "Z11" };
    PitchRecordBuilder::new(
        Uuid::nil(),
        sequence_index,
        "fastball",
        zone("Z22"),
        zone(actual),
        outcome,
    )
    .count(Count::new(balls, strikes).unwrap())
    .build()
}

/// A pitch thrown exactly at the centre of the zone and called a strike
pub fn perfect_pitch(sequence_index: u32) -> PitchRecord {
    located_pitch(
        sequence_index,
        (0.5, 0.5),
        (0.5, 0.5),
        PitchOutcome::CalledStrike,
    )
}
