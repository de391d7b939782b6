// ABOUTME: Pitch command analytics and workload rest engines for the Bullpen workspace
// ABOUTME: Pure deterministic functions from pitch records and session history to derived analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![deny(unsafe_code)]

//! # Bullpen Intelligence
//!
//! Pipeline, leaves first:
//!
//! - **`zone_mapper`**: normalized point to one of 13 zones, handedness-aware
//! - **`proximity`**: distance and exponential proximity score
//! - **`metrics`** / **`situational`**: strike, hit-rate and proximity statistics
//! - **`miss_pattern`**: direction shares over missed pitches
//! - **`trend`**: early versus late accuracy
//! - **`command_score`**: composite 0-100 score
//! - **`insights`**: rule-based coaching remarks
//! - **`analytics`**: the combined pipeline, batch and finalize entry points
//! - **`reporting`**: date-filtered reports over session history
//! - **`workload`**: rest-debt fold and traffic-light recommendation
//!
//! Every engine is stateless between calls and safe to invoke concurrently.

/// Session analytics pipeline
pub mod analytics;
/// Geometry, scoring and threshold constants
pub mod command_constants;
/// Composite command score
pub mod command_score;
/// Analytics configuration with env overrides
pub mod config;
/// Coaching insight rules
pub mod insights;
/// Rate statistics and strike policy
pub mod metrics;
/// Miss-direction analysis
pub mod miss_pattern;
/// Distance and proximity score
pub mod proximity;
/// Date-filtered reporting
pub mod reporting;
/// Count and base-state splits
pub mod situational;
/// Shared descriptive statistics
pub mod statistics;
/// Early/late trend windows
pub mod trend;
/// Workload rest engine
pub mod workload;
/// Coordinate to zone mapping
pub mod zone_mapper;

pub use analytics::{PitchAnalyticsEngine, PitchSessionAnalytics};
pub use command_score::CommandScoreCalculator;
pub use config::{AnalyticsConfig, ConfigError};
pub use insights::{InsightContext, InsightGenerator, InsightRuleId};
pub use metrics::{PitchMetrics, PitchMetricsAggregator, PitchTypeMetrics, StrikePolicy};
pub use miss_pattern::{
    MissCounts, MissDirection, MissDirectionConvention, MissPattern, MissPatternAnalyzer,
};
pub use proximity::ProximityModel;
pub use reporting::{DateRange, PitchReport, PitchReportBuilder, SessionRecords};
pub use situational::SituationalMetrics;
pub use trend::{TrendAnalyzer, TrendMetrics};
pub use workload::{compute_pitch_rest_status, RestDebt, RestLevel, RestStatus, WorkloadRestEngine};
pub use zone_mapper::ZoneMapper;
