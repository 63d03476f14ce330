// ABOUTME: PrepCoach CLI - run the nutrition engine against JSON input files
// ABOUTME: Prints suggestions, weight trajectories, and the effective engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach
//!
//! Usage:
//! ```bash
//! # Compute a suggestion from an engine input document
//! prepcoach-cli suggest --input client.json --now 2025-03-01
//!
//! # Project a weight series out to a date, one point per week
//! prepcoach-cli trajectory --samples weights.json --until 2025-06-01 --step 7
//!
//! # Print the effective engine configuration (defaults plus PREPCOACH_* overrides)
//! prepcoach-cli config
//! ```

mod commands;

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use prepcoach::errors::{AppError, AppResult};
use prepcoach::intelligence::IntelligenceConfig;
use prepcoach::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "prepcoach-cli",
    about = "PrepCoach nutrition engine CLI",
    long_about = "Run the nutrition auto-adjustment engine against JSON files and print the result as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference date used as "today" (defaults to the current UTC date)
    #[arg(long, global = true)]
    now: Option<NaiveDate>,

    /// Pretty-print JSON output
    #[arg(long, short = 'p', global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute a nutrition suggestion from an engine input document
    Suggest {
        /// Path to the camelCase engine input JSON
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Project a weight series forward from its trailing moving average
    Trajectory {
        /// Path to a JSON array of `{ "date": ..., "weight": ... }` samples
        #[arg(long, short = 's')]
        samples: PathBuf,

        /// Last date to project to
        #[arg(long)]
        until: NaiveDate,

        /// Days between projected points
        #[arg(long, default_value = "7")]
        step: u32,
    },

    /// Print the effective engine configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let config = IntelligenceConfig::load()?;
    let now = cli.now.unwrap_or_else(|| Utc::now().date_naive());
    debug!(%now, "PrepCoach CLI started");

    let output = match cli.command {
        Command::Suggest { input } => commands::suggest::run(&input, now, config).await?,
        Command::Trajectory {
            samples,
            until,
            step,
        } => commands::trajectory::run(&samples, now, until, step, &config).await?,
        Command::Config => commands::to_json_value(&config)?,
    };

    commands::print_json(&output, cli.pretty)
}
