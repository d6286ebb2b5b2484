// ABOUTME: Body fat CLI - command-line front end for the body-composition estimator
// ABOUTME: Validates measurement arguments, estimates body fat, and prints a JSON or text report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate for a man (hip is not read)
//! bodyfat-cli calculate --sex male --weight 80 --height 180 --waist 85 --neck 38 --age 30
//!
//! # Estimate for a woman, text output
//! bodyfat-cli calculate --sex female --weight 65 --height 165 --waist 75 --neck 32 \
//!     --hip 95 --age 28 --format text
//!
//! # Show the formula variants
//! bodyfat-cli formula
//! ```
//!
//! Exit status is 0 when an estimate is produced, 2 for rejected input, 3 for an
//! invalid configuration and 1 for internal failures.

mod commands;

use bodyfat_calculator::{
    config::EstimatorConfig,
    errors::{AppError, AppResult, ErrorResponse},
    logging::LoggingConfig,
};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::error;

use commands::calculate::MeasurementArgs;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "bodyfat-cli",
    about = "Body fat percentage estimator",
    long_about = "Estimates body fat percentage from height and body circumferences using the U.S. Navy circumference method."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Validate measurements and estimate body fat percentage
    Calculate {
        /// Sex category: male or female (m/f accepted)
        #[arg(long, default_value = "male")]
        sex: String,

        #[command(flatten)]
        measurements: MeasurementArgs,

        /// Output format: json or text
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Show the formula variant for one or both sex categories
    Formula {
        /// Sex category (shows both if omitted)
        #[arg(long)]
        sex: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        return report_error(AppError::from(e));
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => report_error(e),
    }
}

fn run(command: Command) -> Result<ExitCode> {
    let config = EstimatorConfig::load()?;

    match command {
        Command::Calculate {
            sex,
            measurements,
            format,
        } => commands::calculate::run(&sex, measurements, &format, &config),
        Command::Formula { sex } => {
            commands::formula::show(sex.as_deref(), &config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn report_error(e: AppError) -> ExitCode {
    error!(code = ?e.code, "{}", e.message);
    let exit_code = e.exit_code();
    match serde_json::to_string_pretty(&ErrorResponse::from(e)) {
        Ok(json) => eprintln!("{json}"),
        Err(serialization_error) => eprintln!("{serialization_error}"),
    }
    ExitCode::from(exit_code)
}
