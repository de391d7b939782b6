// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors
// ABOUTME: Re-exports command modules for bullpen-cli
// ABOUTME: Provides access to analyze, rest, report and zone commands

pub mod analyze;
pub mod report;
pub mod rest;
pub mod zone;
