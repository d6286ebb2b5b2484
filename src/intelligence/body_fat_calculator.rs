// ABOUTME: Body-fat percentage estimation using the U.S. Navy circumference method
// ABOUTME: Sex-specific formula variants with threshold and denominator guards before clamping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Fat Calculator Module
//!
//! Estimates body-fat percentage from height and body circumferences. Weight and age
//! are collected with the measurements but do not enter the formula.
//!
//! Each call is a linear sequence of guarded steps that stops at the first failure:
//!
//! 1. convert height and circumferences from centimeters to inches
//! 2. circumference guard: the logarithm argument must exceed the threshold
//! 3. denominator guard: the denominator must be finite and non-zero
//! 4. clamp the estimate into `[0, 100]`
//!
//! # Scientific References
//!
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for U.S. Navy men
//!   from body circumferences and height. *Naval Health Research Center*, Report 84-11.
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for U.S. Navy women
//!   from body circumferences and height. *Naval Health Research Center*, Report 84-29.
//! - Siri, W.E. (1961). Body composition from fluid spaces and density.
//!   *Techniques for Measuring Body Composition*, 223-244.

use super::input_validator::validate_inputs;
use crate::config::EstimatorConfig;
use bodyfat_core::constants::status;
use bodyfat_core::constants::units::CM_TO_INCHES;
use bodyfat_core::{
    clamp_percentage, BodyFatEstimate, EstimationError, EstimationFailure, EstimationResult,
    RawMeasurementInput, SexCategory, StatusMessage, ValidatedMeasurements,
};
use tracing::debug;

/// Estimate body-fat percentage with the built-in configuration
///
/// # Errors
///
/// Returns an [`EstimationFailure`] when the circumference guard or the denominator
/// guard trips, or when the female variant is requested without a hip value.
pub fn estimate(measurements: &ValidatedMeasurements, sex: SexCategory) -> EstimationResult {
    estimate_with_config(measurements, sex, &EstimatorConfig::defaults())
}

/// Estimate body-fat percentage with an explicit configuration
///
/// Formula (all lengths in inches):
/// - Men: `495 / (1.0324 - 0.19077 x log10(waist - neck) + 0.15456 x log10(height)) - 450`
/// - Women: `495 / (1.29579 - 0.35004 x log10(waist + hip - neck) + 0.22100 x log10(height)) - 450`
///
/// # Errors
///
/// - `InvalidHip` if `sex` is female and `measurements` carries no hip value
/// - `MaleCircumferenceIssue` / `FemaleCircumferenceIssue` if the logarithm argument
///   does not exceed `config.log_argument_threshold`
/// - `DegenerateDenominator` if the denominator is zero or not finite, or the division
///   does not produce a finite number
pub fn estimate_with_config(
    measurements: &ValidatedMeasurements,
    sex: SexCategory,
    config: &EstimatorConfig,
) -> EstimationResult {
    let to_inches = |cm: f64| cm * CM_TO_INCHES;
    let height_in = to_inches(measurements.height_cm());
    let waist_in = to_inches(measurements.waist_cm());
    let neck_in = to_inches(measurements.neck_cm());

    let (log_argument, circumference_failure) = match sex {
        SexCategory::Male => (
            waist_in - neck_in,
            (EstimationError::MaleCircumferenceIssue, status::CHECK_WAIST_NECK),
        ),
        SexCategory::Female => {
            let Some(hip_cm) = measurements.hip_cm() else {
                debug!(sex = %sex, "Hip measurement missing for female formula");
                return Err(EstimationFailure::new(
                    EstimationError::InvalidHip,
                    status::HIP_MISSING,
                ));
            };
            (
                waist_in + to_inches(hip_cm) - neck_in,
                (
                    EstimationError::FemaleCircumferenceIssue,
                    status::CHECK_WAIST_HIP_NECK,
                ),
            )
        }
    };

    if log_argument <= config.log_argument_threshold {
        debug!(sex = %sex, log_argument, "Circumference guard tripped");
        let (error, status_text) = circumference_failure;
        return Err(EstimationFailure::new(error, status_text));
    }

    let coefficients = config.coefficients(sex);
    let denominator = check_denominator(coefficients.denominator(log_argument, height_in))?;
    let raw_estimate = coefficients.estimate(denominator);
    if !raw_estimate.is_finite() {
        debug!(sex = %sex, denominator, "Estimate overflowed");
        return Err(degenerate_denominator());
    }

    let percentage = clamp_percentage(raw_estimate);
    debug!(sex = %sex, raw_estimate, percentage, "Estimated body fat percentage");

    Ok(BodyFatEstimate {
        sex,
        percentage,
        raw_estimate,
        status: StatusMessage::neutral(status::SUCCESS),
    })
}

/// Denominator guard: reject zero, NaN and infinities
///
/// An infinite denominator comes from `log10(0)` when a length underflows to zero
/// inches.
///
/// # Errors
///
/// Returns a `DegenerateDenominator` failure when `denominator` is zero or not finite.
pub fn check_denominator(denominator: f64) -> Result<f64, EstimationFailure> {
    if !denominator.is_finite() || denominator == 0.0 {
        debug!(denominator, "Denominator guard tripped");
        return Err(degenerate_denominator());
    }
    Ok(denominator)
}

fn degenerate_denominator() -> EstimationFailure {
    EstimationFailure::new(
        EstimationError::DegenerateDenominator,
        status::DEGENERATE_DENOMINATOR,
    )
}

/// Validate raw text input and estimate in one step
///
/// Validation errors short-circuit before any arithmetic; their status line is the
/// error message itself.
///
/// # Errors
///
/// Returns the first validation error, or any estimation failure from [`estimate_with_config`].
pub fn calculate_body_fat(
    input: &RawMeasurementInput,
    sex: SexCategory,
    config: &EstimatorConfig,
) -> EstimationResult {
    let measurements = validate_inputs(input, sex)?;
    estimate_with_config(&measurements, sex, config)
}
