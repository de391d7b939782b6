// ABOUTME: Main library entry point for the Bullpen pitch analytics workspace
// ABOUTME: Re-exports the core model and engines, plus logging and JSON input loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![deny(unsafe_code)]

//! # Bullpen
//!
//! Pitch command analytics and workload rest recommendations.
//!
//! ## Architecture
//!
//! - **`bullpen-core`**: pitch records, zones, sessions, errors
//! - **`bullpen-intelligence`**: the analytics and rest engines
//! - **this crate**: logging setup, JSON input loading and the `bullpen-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use bullpen::intelligence::{PitchAnalyticsEngine, ZoneMapper};
//! use bullpen::models::{PitchOutcome, PitchRecordBuilder, PitcherHandedness, ZoneId};
//! use uuid::Uuid;
//!
//! let zone = ZoneMapper::coords_to_zone(0.5, 0.5, PitcherHandedness::Right);
//! assert_eq!(zone, ZoneId::CENTER);
//!
//! let record = PitchRecordBuilder::new(
//!     Uuid::new_v4(),
//!     0,
//!     "FB",
//!     ZoneId::CENTER,
//!     zone,
//!     PitchOutcome::CalledStrike,
//! )
//! .build();
//! let analytics = PitchAnalyticsEngine::new().compute(&[record], PitcherHandedness::Right);
//! assert_eq!(analytics.strike_pct, 100);
//! ```

/// JSON input loading for the command-line tools
pub mod input;

/// Structured logging setup
pub mod logging;

pub use bullpen_core::{constants, errors, models};
pub use bullpen_intelligence as intelligence;
