// ABOUTME: Core types for the Bullpen pitch analytics workspace
// ABOUTME: Foundation crate with the pitch/session data model, error handling and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

#![deny(unsafe_code)]

//! # Bullpen Core
//!
//! Foundation crate providing shared types for the Bullpen pitch analytics
//! workspace. The engines and the command-line front end build on this
//! data model.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and zone parse errors
//! - **constants**: Game-state limits and service names
//! - **models**: Pitch records, strike-zone identifiers and sessions

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`PitchRecord`, `ZoneId`, `PitchSession`, ...)
pub mod models;
