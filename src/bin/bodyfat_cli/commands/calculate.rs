// ABOUTME: Calculate command for bodyfat-cli
// ABOUTME: Maps measurement arguments onto raw input, runs the estimator, and prints the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bodyfat_calculator::{
    config::EstimatorConfig,
    errors::{AppError, AppResult},
    formatters::{format_report, CalculationReport, OutputFormat},
    intelligence::calculate_body_fat,
};
use bodyfat_core::{RawMeasurementInput, SexCategory};
use clap::Args;
use std::process::ExitCode;
use tracing::info;

type Result<T> = AppResult<T>;

/// The six measurement fields, passed through as raw text
///
/// Missing arguments become empty text so they are reported by the validator
/// like an empty form field.
#[derive(Args, Debug, Default)]
pub struct MeasurementArgs {
    /// Weight in kilograms
    #[arg(long, allow_hyphen_values = true)]
    weight: Option<String>,

    /// Height in centimeters
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Waist circumference in centimeters
    #[arg(long, allow_hyphen_values = true)]
    waist: Option<String>,

    /// Neck circumference in centimeters
    #[arg(long, allow_hyphen_values = true)]
    neck: Option<String>,

    /// Hip circumference in centimeters (female only)
    #[arg(long, allow_hyphen_values = true)]
    hip: Option<String>,

    /// Age in years
    #[arg(long, allow_hyphen_values = true)]
    age: Option<String>,
}

impl From<MeasurementArgs> for RawMeasurementInput {
    fn from(args: MeasurementArgs) -> Self {
        Self {
            weight: args.weight.unwrap_or_default(),
            height: args.height.unwrap_or_default(),
            waist: args.waist.unwrap_or_default(),
            neck: args.neck.unwrap_or_default(),
            hip: args.hip.unwrap_or_default(),
            age: args.age.unwrap_or_default(),
        }
    }
}

/// Run one calculation and print its report to stdout
///
/// A rejected measurement is a normal outcome: the report is printed and the
/// exit status reflects the error category.
pub fn run(
    sex: &str,
    measurements: MeasurementArgs,
    format: &str,
    config: &EstimatorConfig,
) -> Result<ExitCode> {
    let sex: SexCategory = sex.parse()?;
    let format = OutputFormat::from_str_param(format);
    let input = RawMeasurementInput::from(measurements);

    let outcome = calculate_body_fat(&input, sex, config);
    let report = CalculationReport::new(sex, &outcome);
    let output = format_report(&report, format)?;
    println!("{}", output.data);

    match outcome {
        Ok(estimate) => {
            info!(sex = %sex, percentage = estimate.percentage, "Calculation succeeded");
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => Ok(ExitCode::from(AppError::from(failure.error).exit_code())),
    }
}
