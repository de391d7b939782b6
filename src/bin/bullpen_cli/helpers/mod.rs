// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors
// ABOUTME: Re-exports helper modules for bullpen-cli
// ABOUTME: Provides access to output formatting utilities

pub mod display;
