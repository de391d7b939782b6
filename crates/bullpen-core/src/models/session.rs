// ABOUTME: Pitching session records owned by the external store, plus rest-engine summaries
// ABOUTME: Models the in_progress -> completed/discarded lifecycle and attached analytics payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Lifecycle state of a pitching session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Pitches are still being logged
    InProgress,
    /// Finalized with analytics attached
    Completed,
    /// Thrown away by the user
    Discarded,
}

/// A pitching session as stored by the tracker
///
/// The analytics payload is generic so this crate does not depend on the
/// analytics engine; `bullpen-intelligence` stores `PitchSessionAnalytics` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchSession<A> {
    /// Session identifier
    pub id: Uuid,
    /// Pitcher who threw the session
    pub pitcher_id: Uuid,
    /// Team the session belongs to
    pub team_id: Uuid,
    /// When logging started
    pub started_at: DateTime<Utc>,
    /// When the session was finalized
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Running total of logged pitches
    pub total_pitches: u32,
    /// Lifecycle state
    pub status: SessionStatus,
    /// Analytics computed at finalize time
    #[serde(default)]
    pub analytics: Option<A>,
}

impl<A> PitchSession<A> {
    /// Open a new in-progress session
    #[must_use]
    pub fn start(pitcher_id: Uuid, team_id: Uuid, started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            pitcher_id,
            team_id,
            started_at,
            ended_at: None,
            total_pitches: 0,
            status: SessionStatus::InProgress,
            analytics: None,
        }
    }

    /// Count one more logged pitch and return its sequence index
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` unless the session is in progress
    pub fn record_pitch(&mut self) -> AppResult<u32> {
        self.ensure_in_progress("record a pitch")?;
        let sequence_index = self.total_pitches;
        self.total_pitches = self.total_pitches.saturating_add(1);
        Ok(sequence_index)
    }

    /// Attach analytics, stamp the end time and mark the session completed
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` unless the session is in progress, or
    /// `InvalidInput` if `ended_at` precedes the start
    pub fn finalize(&mut self, analytics: A, ended_at: DateTime<Utc>) -> AppResult<()> {
        self.ensure_in_progress("finalize")?;
        if ended_at < self.started_at {
            return Err(AppError::invalid_input(format!(
                "Session {} cannot end before it started",
                self.id
            )));
        }
        self.ended_at = Some(ended_at);
        self.analytics = Some(analytics);
        self.status = SessionStatus::Completed;
        Ok(())
    }

    /// Mark the session discarded and drop any analytics
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the session was already completed
    pub fn discard(&mut self) -> AppResult<()> {
        if self.status == SessionStatus::Completed {
            return Err(AppError::invalid_state(format!(
                "Session {} is completed and cannot be discarded",
                self.id
            )));
        }
        self.status = SessionStatus::Discarded;
        self.analytics = None;
        Ok(())
    }

    /// Timestamp used to order sessions chronologically
    #[must_use]
    pub fn effective_time(&self) -> DateTime<Utc> {
        self.ended_at.unwrap_or(self.started_at)
    }

    /// Workload summary for the rest engine
    #[must_use]
    pub const fn summary(&self) -> SessionSummary {
        SessionSummary {
            started_at: self.started_at,
            ended_at: self.ended_at,
            total_pitches: self.total_pitches,
        }
    }

    fn ensure_in_progress(&self, action: &str) -> AppResult<()> {
        if self.status == SessionStatus::InProgress {
            Ok(())
        } else {
            Err(AppError::invalid_state(format!(
                "Cannot {action}: session {} is {:?}",
                self.id, self.status
            )))
        }
    }
}

/// Minimal session view consumed by the workload rest engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Session start
    pub started_at: DateTime<Utc>,
    /// Session end, if recorded
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Pitches thrown
    pub total_pitches: u32,
}

impl SessionSummary {
    /// Create a summary
    #[must_use]
    pub const fn new(
        started_at: DateTime<Utc>,
        ended_at: Option<DateTime<Utc>>,
        total_pitches: u32,
    ) -> Self {
        Self {
            started_at,
            ended_at,
            total_pitches,
        }
    }

    /// End time when known, otherwise start time
    #[must_use]
    pub fn effective_time(&self) -> DateTime<Utc> {
        self.ended_at.unwrap_or(self.started_at)
    }
}
