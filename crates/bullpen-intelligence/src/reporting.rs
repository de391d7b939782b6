// ABOUTME: Date-filtered reporting over historical completed sessions
// ABOUTME: Reruns the analytics pipeline over the concatenated records of sessions in range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use bullpen_core::errors::{AppError, AppResult};
use bullpen_core::models::{PitchRecord, PitchSession, PitcherHandedness, SessionStatus};

use crate::analytics::{PitchAnalyticsEngine, PitchSessionAnalytics};

/// Half-open time range `[start, end)`; a missing bound is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// Inclusive lower bound
    pub start: Option<DateTime<Utc>>,
    /// Exclusive upper bound
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Range covering all time
    #[must_use]
    pub const fn all() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Range with optional bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when both bounds are set and `start > end`
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> AppResult<Self> {
        if let (Some(from), Some(to)) = (start, end) {
            if from > to {
                return Err(AppError::invalid_input(format!(
                    "Report range starts at {from} after it ends at {to}"
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Whether `at` falls in the range
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| at >= start) && self.end.is_none_or(|end| at < end)
    }
}

/// A stored session together with its pitch records
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecords {
    /// Session record
    pub session: PitchSession<PitchSessionAnalytics>,
    /// Records in capture order
    #[serde(default)]
    pub records: Vec<PitchRecord>,
}

/// Report output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchReport {
    /// Range the report covers
    pub range: DateRange,
    /// Sessions included
    pub session_count: usize,
    /// Analytics over every included record
    pub analytics: PitchSessionAnalytics,
}

/// Builds a [`PitchReport`] from session history
#[derive(Debug, Clone, Default)]
pub struct PitchReportBuilder {
    engine: PitchAnalyticsEngine,
    range: DateRange,
    hand: PitcherHandedness,
    pitcher_id: Option<Uuid>,
}

impl PitchReportBuilder {
    /// Builder over all time using the given engine
    #[must_use]
    pub fn new(engine: PitchAnalyticsEngine) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }

    /// Restrict to sessions started within `range`
    #[must_use]
    pub const fn range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Pitcher handedness used for miss classification
    #[must_use]
    pub const fn hand(mut self, hand: PitcherHandedness) -> Self {
        self.hand = hand;
        self
    }

    /// Restrict to one pitcher's sessions
    #[must_use]
    pub const fn pitcher(mut self, pitcher_id: Uuid) -> Self {
        self.pitcher_id = Some(pitcher_id);
        self
    }

    /// Analyze the completed, in-range sessions in chronological order
    #[must_use]
    pub fn build(&self, history: &[SessionRecords]) -> PitchReport {
        let mut included: Vec<&SessionRecords> = history
            .iter()
            .filter(|entry| entry.session.status == SessionStatus::Completed)
            .filter(|entry| self.range.contains(entry.session.started_at))
            .filter(|entry| {
                self.pitcher_id
                    .is_none_or(|pitcher| entry.session.pitcher_id == pitcher)
            })
            .collect();
        included.sort_by_key(|entry| entry.session.started_at);

        let records: Vec<PitchRecord> = included
            .iter()
            .flat_map(|entry| entry.records.iter().cloned())
            .collect();

        debug!(
            sessions = included.len(),
            pitches = records.len(),
            "Building pitch report"
        );

        PitchReport {
            range: self.range,
            session_count: included.len(),
            analytics: self.engine.compute(&records, self.hand),
        }
    }
}
