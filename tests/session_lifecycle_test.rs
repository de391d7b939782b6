// ABOUTME: Integration tests for the pitching session lifecycle and record validation
// ABOUTME: Covers in-progress, completed and discarded transitions plus count and outs checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use bullpen::errors::ErrorCode;
use bullpen::models::{
    Count, PitchOutcome, PitchRecord, PitchRecordBuilder, PitchSession, SessionStatus, ZoneId,
};
use helpers::{hours_after, reference_time, zone};
use uuid::Uuid;

type Session = PitchSession<String>;

fn open_session() -> Session {
    PitchSession::start(Uuid::new_v4(), Uuid::new_v4(), reference_time())
}

#[test]
fn test_new_session_is_in_progress() {
    let session = open_session();
    assert_eq!(session.status, SessionStatus::InProgress);
    assert_eq!(session.total_pitches, 0);
    assert!(session.ended_at.is_none());
    assert!(session.analytics.is_none());
    assert_eq!(session.effective_time(), reference_time());
}

#[test]
fn test_record_pitch_hands_out_sequence_indexes() {
    let mut session = open_session();
    let indexes: Vec<u32> = (0..3).map(|_| session.record_pitch().unwrap()).collect();
    assert_eq!(indexes, [0, 1, 2]);
    assert_eq!(session.total_pitches, 3);
}

#[test]
fn test_completed_session_is_frozen() {
    let mut session = open_session();
    session.record_pitch().unwrap();
    session.finalize("done".to_owned(), hours_after(2)).unwrap();

    assert_eq!(session.status, SessionStatus::Completed);
    assert_eq!(session.effective_time(), hours_after(2));
    assert_eq!(session.record_pitch().unwrap_err().code, ErrorCode::InvalidState);
    assert_eq!(session.discard().unwrap_err().code, ErrorCode::InvalidState);
    assert_eq!(session.analytics.as_deref(), Some("done"));
}

#[test]
fn test_discarded_session_drops_analytics() {
    let mut session = open_session();
    session.record_pitch().unwrap();
    session.discard().unwrap();
    assert_eq!(session.status, SessionStatus::Discarded);
    assert!(session.analytics.is_none());
    assert_eq!(
        session.finalize("late".to_owned(), hours_after(1)).unwrap_err().code,
        ErrorCode::InvalidState
    );
}

#[test]
fn test_summary_carries_workload_fields() {
    let mut session = open_session();
    for _ in 0..25 {
        session.record_pitch().unwrap();
    }
    session.finalize(String::new(), hours_after(1)).unwrap();
    let summary = session.summary();
    assert_eq!(summary.total_pitches, 25);
    assert_eq!(summary.started_at, reference_time());
    assert_eq!(summary.effective_time(), hours_after(1));
}

#[test]
fn test_count_and_outs_are_validated() {
    assert!(Count::new(3, 2).is_ok());
    assert_eq!(Count::new(4, 0).unwrap_err().code, ErrorCode::ValueOutOfRange);
    assert_eq!(Count::new(0, 3).unwrap_err().code, ErrorCode::ValueOutOfRange);

    let builder = PitchRecordBuilder::new(
        Uuid::nil(),
        0,
        "fastball",
        ZoneId::CENTER,
        ZoneId::CENTER,
        PitchOutcome::CalledStrike,
    );
    assert_eq!(builder.clone().outs(2).unwrap().build().outs, 2);
    assert_eq!(builder.outs(3).unwrap_err().code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_record_reads_store_json() {
    let raw = r#"{
        "sessionId": "00000000-0000-0000-0000-000000000000",
        "sequenceIndex": 4,
        "pitchTypeId": "slider",
        "count": { "balls": 2, "strikes": 1 },
        "targetZone": "Z13",
        "actualZone": "EDGE_GLOVE",
        "targetXNorm": 0.7,
        "targetYNorm": 0.7,
        "actualXNorm": 0.95,
        "actualYNorm": 0.6,
        "outcome": "swinging_strike",
        "velocityMph": 82.5
    }"#;
    let record: PitchRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.sequence_index, 4);
    assert_eq!(record.target_zone, zone("Z13"));
    assert!(record.actual_zone.is_edge());
    assert!(record.count.is_pitcher_behind());
    assert!(record.coordinate_pair().is_some());
    assert!(!record.hit_target());
    assert!(record.base_runners.is_empty());
}

#[test]
fn test_unknown_zone_label_is_kept() {
    let raw = r#"{
        "sessionId": "00000000-0000-0000-0000-000000000000",
        "sequenceIndex": 0,
        "pitchTypeId": "fastball",
        "targetZone": "Z22",
        "actualZone": "OFF_PLATE",
        "outcome": "ball"
    }"#;
    let record: PitchRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.actual_zone, ZoneId::Unrecognized("OFF_PLATE".to_owned()));
    assert_eq!(record.actual_zone.label(), "OFF_PLATE");
    assert!(record.actual_point().is_none());
}

#[test]
fn test_lifecycle_errors_map_to_usage_exit_code() {
    let mut session = open_session();
    session.discard().unwrap();
    let err = session.record_pitch().unwrap_err();
    assert_eq!(err.code.exit_code(), 2);
    assert_eq!(ErrorCode::StorageError.exit_code(), 3);
    assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 4);
    assert_eq!(ErrorCode::InternalError.exit_code(), 1);
}
