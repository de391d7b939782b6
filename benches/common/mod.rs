// ABOUTME: Shared benchmark utilities
// ABOUTME: Deterministic pitch and session fixtures for the analytics benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors

pub mod fixtures;
