// ABOUTME: Seeded synthetic pitch session generator for reproducible analytics tests
// ABOUTME: Produces sessions with controllable command quality and fatigue drift
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use bullpen::intelligence::ZoneMapper;
use bullpen::models::{
    BaseRunners, Count, NormalizedPoint, PitchOutcome, PitchRecord, PitchRecordBuilder,
    PitcherHandedness, ZoneId,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Pitch types a generated session cycles through
pub const PITCH_TYPES: [&str; 3] = ["fastball", "slider", "changeup"];

/// How well the synthetic pitcher locates
#[derive(Debug, Clone, Copy)]
pub enum CommandProfile {
    /// Small scatter around the target
    Sharp,
    /// Moderate scatter
    Average,
    /// Large scatter
    Wild,
    /// Starts sharp and scatters more with every pitch
    Fatiguing,
}

impl CommandProfile {
    fn scatter(self, sequence_index: u32, total: u32) -> f64 {
        match self {
            Self::Sharp => 0.02,
            Self::Average => 0.08,
            Self::Wild => 0.25,
            Self::Fatiguing => 0.01 + 0.3 * f64::from(sequence_index) / f64::from(total.max(1)),
        }
    }
}

/// Seeded generator for synthetic bullpen sessions
pub struct SyntheticPitchGenerator {
    rng: ChaCha8Rng,
    hand: PitcherHandedness,
}

impl SyntheticPitchGenerator {
    /// Create a generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            hand: PitcherHandedness::Right,
        }
    }

    /// Generate pitches for a left-hander instead
    pub fn left_handed(mut self) -> Self {
        self.hand = PitcherHandedness::Left;
        self
    }

    /// Handedness used for zone mapping
    pub const fn hand(&self) -> PitcherHandedness {
        self.hand
    }

    /// Generate one session of `count` pitches
    pub fn session(&mut self, count: u32, profile: CommandProfile) -> Vec<PitchRecord> {
        let session_id = Uuid::new_v4();
        let mut balls = 0_u8;
        let mut strikes = 0_u8;

        (0..count)
            .map(|index| {
                let record = self.pitch(session_id, index, count, profile, balls, strikes);
                (balls, strikes) = advance_count(balls, strikes, record.outcome);
                record
            })
            .collect()
    }

    fn pitch(
        &mut self,
        session_id: Uuid,
        index: u32,
        total: u32,
        profile: CommandProfile,
        balls: u8,
        strikes: u8,
    ) -> PitchRecord {
        let target = NormalizedPoint::new(
            self.rng.gen_range(0.25..=0.75),
            self.rng.gen_range(0.25..=0.75),
        );
        let scatter = profile.scatter(index, total);
        let actual = NormalizedPoint::new(
            (target.x + self.rng.gen_range(-scatter..=scatter)).clamp(0.0, 1.0),
            (target.y + self.rng.gen_range(-scatter..=scatter)).clamp(0.0, 1.0),
        );

        let target_zone = ZoneMapper::point_to_zone(target, self.hand);
        let actual_zone = ZoneMapper::point_to_zone(actual, self.hand);
        let outcome = self.outcome_for(&actual_zone);
        let pitch_type = PITCH_TYPES[index as usize % PITCH_TYPES.len()];

        let velocity = match pitch_type {
            "fastball" => self.rng.gen_range(86.0..=92.0),
            "slider" => self.rng.gen_range(78.0..=83.0),
            _ => self.rng.gen_range(76.0..=80.0),
        };

        let runners = BaseRunners::from_bits_truncate(self.rng.gen_range(0..=7));

        PitchRecordBuilder::new(session_id, index, pitch_type, target_zone, actual_zone, outcome)
            .count(Count::new(balls, strikes).unwrap())
            .base_runners(runners)
            .target_point(target)
            .actual_point(actual)
            .velocity_mph(velocity)
            .build()
    }

    fn outcome_for(&mut self, actual_zone: &ZoneId) -> PitchOutcome {
        if actual_zone.is_edge() {
            return if self.rng.gen_bool(0.8) {
                PitchOutcome::Ball
            } else {
                PitchOutcome::SwingingStrike
            };
        }
        match self.rng.gen_range(0..10) {
            0..=3 => PitchOutcome::CalledStrike,
            4..=5 => PitchOutcome::SwingingStrike,
            6..=7 => PitchOutcome::Foul,
            8 => PitchOutcome::InPlay,
            _ => PitchOutcome::Ball,
        }
    }
}

/// Count after a pitch; resets when the plate appearance ends
fn advance_count(balls: u8, strikes: u8, outcome: PitchOutcome) -> (u8, u8) {
    match outcome {
        PitchOutcome::Ball if balls < 3 => (balls + 1, strikes),
        PitchOutcome::CalledStrike | PitchOutcome::SwingingStrike if strikes < 2 => {
            (balls, strikes + 1)
        }
        PitchOutcome::Foul if strikes < 2 => (balls, strikes + 1),
        PitchOutcome::Foul => (balls, strikes),
        _ => (0, 0),
    }
}
