// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Game-state limits and service identifiers shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace. Analytics thresholds live with the engines in
//! `bullpen-intelligence`.

/// Baseball game-state limits
pub mod limits {
    /// Maximum balls in a count before the pitch
    pub const MAX_BALLS: u8 = 3;
    /// Maximum strikes in a count before the pitch
    pub const MAX_STRIKES: u8 = 2;
    /// Maximum outs before the pitch
    pub const MAX_OUTS: u8 = 2;
}

/// Service names used in structured logs
pub mod service_names {
    /// Command-line front end
    pub const BULLPEN_CLI: &str = "bullpen-cli";
}
