// ABOUTME: Bullpen CLI - runs the pitch analytics, rest and reporting engines over JSON files
// ABOUTME: Prints analytics, rest status, reports and zone lookups for scripting and inspection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bullpen Contributors
//!
//! Usage:
//! ```bash
//! # Analyze one session's pitch records
//! bullpen-cli analyze --input session.json --hand left --pretty
//!
//! # Count balls in play as strikes
//! bullpen-cli analyze --input session.json --include-in-play
//!
//! # Rest status from session summaries, evaluated now
//! bullpen-cli rest --input history.json
//!
//! # Rest status at a fixed time with a custom rule
//! bullpen-cli rest --input history.json --now 2025-06-01T12:00:00Z --rest-hours-per-pitch 0.75
//!
//! # Report over completed sessions in May
//! bullpen-cli report --input sessions.json --from 2025-05-01 --to 2025-06-01
//!
//! # Zone lookup for a normalized point
//! bullpen-cli zone --x 0.1 --y 0.5 --hand left
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use bullpen::errors::AppResult;
use bullpen::logging::LoggingConfig;
use bullpen::models::PitcherHandedness;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;

#[derive(Parser)]
#[command(
    name = "bullpen-cli",
    about = "Bullpen pitch command analytics CLI",
    long_about = "Runs the pitch command analytics, workload rest and reporting engines over JSON input files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Pitcher throwing hand
#[derive(Debug, Clone, Copy, ValueEnum)]
enum HandArg {
    /// Right-handed pitcher
    Right,
    /// Left-handed pitcher
    Left,
}

impl From<HandArg> for PitcherHandedness {
    fn from(hand: HandArg) -> Self {
        match hand {
            HandArg::Right => Self::Right,
            HandArg::Left => Self::Left,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute session analytics from a JSON array of pitch records
    Analyze {
        /// Pitch records file
        #[arg(long)]
        input: PathBuf,

        /// Pitcher throwing hand
        #[arg(long, value_enum, default_value_t = HandArg::Right)]
        hand: HandArg,

        /// Count balls put in play as strikes
        #[arg(long)]
        include_in_play: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Compute rest status from a JSON array of session summaries
    Rest {
        /// Session summaries file
        #[arg(long)]
        input: PathBuf,

        /// Evaluation time (RFC 3339 or YYYY-MM-DD, default: now)
        #[arg(long)]
        now: Option<String>,

        /// Hours of rest owed per pitch (default from config)
        #[arg(long)]
        rest_hours_per_pitch: Option<f64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Report over completed sessions started within a date range
    Report {
        /// Sessions-with-records file
        #[arg(long)]
        input: PathBuf,

        /// Inclusive start (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Exclusive end (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Pitcher throwing hand
        #[arg(long, value_enum, default_value_t = HandArg::Right)]
        hand: HandArg,

        /// Count balls put in play as strikes
        #[arg(long)]
        include_in_play: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Map a normalized point to its zone label
    Zone {
        /// Horizontal position, 0 = left from the catcher's view
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Vertical position, 0 = bottom
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Pitcher throwing hand
        #[arg(long, value_enum, default_value_t = HandArg::Right)]
        hand: HandArg,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Warning: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "Command failed: {}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    match command {
        Command::Analyze {
            input,
            hand,
            include_in_play,
            pretty,
        } => commands::analyze::run(&input, hand.into(), include_in_play, pretty),
        Command::Rest {
            input,
            now,
            rest_hours_per_pitch,
            pretty,
        } => commands::rest::run(&input, now.as_deref(), rest_hours_per_pitch, pretty),
        Command::Report {
            input,
            from,
            to,
            hand,
            include_in_play,
            pretty,
        } => commands::report::run(
            &input,
            from.as_deref(),
            to.as_deref(),
            hand.into(),
            include_in_play,
            pretty,
        ),
        Command::Zone { x, y, hand } => {
            commands::zone::run(x, y, hand.into());
            Ok(())
        }
    }
}
