// ABOUTME: Leaky-bucket pitching workload model producing a green/yellow/red rest recommendation
// ABOUTME: Folds chronologically sorted session summaries into rest debt that decays hour by hour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Workload rest engine
//!
//! Each pitch adds `rest_hours_per_pitch` hours of rest debt. Debt bleeds off
//! one hour per elapsed wall-clock hour and never goes below zero. The
//! history is folded oldest first with a [`RestDebt`] accumulator, then
//! decayed once more up to the evaluation time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bullpen_core::models::SessionSummary;

use crate::command_constants::workload::HOURS_PER_DAY;
use crate::config::WorkloadConfig;
use crate::statistics::round_to_tenths;

/// Label used when there is no session history
pub const NO_DATA_LABEL: &str = "No pitching data yet";

/// Traffic-light rest recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestLevel {
    /// Fully rested
    Green,
    /// Some rest owed, within the borderline band
    Yellow,
    /// More rest owed than the borderline band allows
    Red,
}

impl RestLevel {
    /// Short label shown next to the status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Good to go",
            Self::Yellow => "Borderline",
            Self::Red => "Not enough rest",
        }
    }
}

/// Rest recommendation at a point in time
///
/// Numeric fields are `None` only when the pitcher has no session history,
/// which is distinct from a fully rested pitcher (green with zero rest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestStatus {
    /// Time of the most recent session
    pub last_session_date: Option<DateTime<Utc>>,
    /// Pitches thrown in the most recent session
    pub last_session_pitch_count: Option<u32>,
    /// Rest still owed, in days
    pub required_rest_days: Option<f64>,
    /// Days since the most recent session, 1 dp
    pub days_since_last_session: Option<f64>,
    /// Traffic-light status
    pub status: RestLevel,
    /// Short status label
    pub label: String,
    /// Longer explanation
    pub message: String,
    /// Rest rule used
    pub rest_hours_per_pitch: f64,
}

impl RestStatus {
    /// Sentinel for a pitcher with no session history
    #[must_use]
    pub fn no_history(rest_hours_per_pitch: f64) -> Self {
        Self {
            last_session_date: None,
            last_session_pitch_count: None,
            required_rest_days: None,
            days_since_last_session: None,
            status: RestLevel::Green,
            label: NO_DATA_LABEL.to_owned(),
            message: "Log a bullpen session to start tracking rest.".to_owned(),
            rest_hours_per_pitch,
        }
    }

    /// Whether this is the no-history sentinel
    #[must_use]
    pub const fn is_no_history(&self) -> bool {
        self.last_session_date.is_none()
    }
}

/// Fold accumulator: outstanding debt and the time it was last updated
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RestDebt {
    /// Outstanding rest debt in hours, never negative
    pub debt_hours: f64,
    /// Time of the last session folded in
    pub last_time: Option<DateTime<Utc>>,
}

impl RestDebt {
    /// Decay debt by the hours elapsed since `last_time`
    ///
    /// Negative elapsed time (a timestamp before `last_time`) decays nothing.
    #[must_use]
    pub fn decay_to(self, at: DateTime<Utc>) -> Self {
        let debt_hours = self.last_time.map_or(self.debt_hours, |last| {
            (self.debt_hours - elapsed_hours(last, at)).max(0.0)
        });
        Self {
            debt_hours,
            last_time: self.last_time,
        }
    }

    /// Decay up to the session, add its pitches and move the clock forward
    #[must_use]
    pub fn accrue(self, session: &SessionSummary, rest_hours_per_pitch: f64) -> Self {
        let at = session.effective_time();
        let decayed = self.decay_to(at);
        Self {
            debt_hours: decayed.debt_hours + f64::from(session.total_pitches) * rest_hours_per_pitch,
            last_time: Some(at),
        }
    }
}

/// Hours from `from` to `to`, floored at zero
fn elapsed_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds();
    (millis as f64 / 3_600_000.0).max(0.0)
}

/// Computes rest status under a workload configuration
#[derive(Debug, Clone, Default)]
pub struct WorkloadRestEngine {
    config: WorkloadConfig,
}

impl WorkloadRestEngine {
    /// Engine using the given rest rule
    #[must_use]
    pub const fn new(config: WorkloadConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &WorkloadConfig {
        &self.config
    }

    /// Rest status for a session history evaluated at `now`
    #[must_use]
    pub fn compute(&self, sessions: &[SessionSummary], now: DateTime<Utc>) -> RestStatus {
        let rate = sanitize_rate(self.config.rest_hours_per_pitch);
        if sessions.is_empty() {
            return RestStatus::no_history(rate);
        }

        let mut ordered: Vec<&SessionSummary> = sessions.iter().collect();
        ordered.sort_by_key(|session| session.effective_time());

        let folded = ordered.iter().fold(RestDebt::default(), |debt, session| {
            let next = debt.accrue(session, rate);
            debug!(
                pitches = session.total_pitches,
                debt_hours = next.debt_hours,
                "Folded session into rest debt"
            );
            next
        });
        let remaining = folded.decay_to(now);
        let required_rest_days = remaining.debt_hours / HOURS_PER_DAY;

        let status = if required_rest_days <= 0.0 {
            RestLevel::Green
        } else if required_rest_days <= self.config.yellow_threshold_days {
            RestLevel::Yellow
        } else {
            RestLevel::Red
        };

        let latest = ordered.last().copied();
        let last_time = folded.last_time;

        RestStatus {
            last_session_date: last_time,
            last_session_pitch_count: latest.map(|session| session.total_pitches),
            required_rest_days: Some(required_rest_days),
            days_since_last_session: last_time
                .map(|last| round_to_tenths(elapsed_hours(last, now) / HOURS_PER_DAY)),
            status,
            label: status.label().to_owned(),
            message: rest_message(status, required_rest_days),
            rest_hours_per_pitch: rate,
        }
    }
}

fn rest_message(status: RestLevel, required_rest_days: f64) -> String {
    match status {
        RestLevel::Green => "Fully rested and cleared to throw.".to_owned(),
        RestLevel::Yellow => format!(
            "About {required_rest_days:.1} days of rest remaining. Keep the next session light."
        ),
        RestLevel::Red => format!(
            "{required_rest_days:.1} days of rest remaining before the next outing."
        ),
    }
}

fn sanitize_rate(rest_hours_per_pitch: f64) -> f64 {
    if rest_hours_per_pitch.is_finite() && rest_hours_per_pitch >= 0.0 {
        rest_hours_per_pitch
    } else {
        warn!(
            rest_hours_per_pitch,
            "Invalid rest hours per pitch, accruing no debt"
        );
        0.0
    }
}

/// Rest status for a session history with an explicit rest rule
///
/// Uses the default borderline band; build a [`WorkloadRestEngine`] to
/// change it.
#[must_use]
pub fn compute_pitch_rest_status(
    sessions: &[SessionSummary],
    now: DateTime<Utc>,
    rest_hours_per_pitch: f64,
) -> RestStatus {
    WorkloadRestEngine::new(WorkloadConfig {
        rest_hours_per_pitch,
        ..WorkloadConfig::default()
    })
    .compute(sessions, now)
}
