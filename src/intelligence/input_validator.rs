// ABOUTME: Parses and sanitizes the six raw measurement texts into validated numbers
// ABOUTME: Fails fast on the first invalid field in a fixed evaluation order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation for body-fat estimation.
//!
//! Fields are evaluated in a fixed order: weight, height, waist, neck, age, then hip
//! (only when the sex category requires it). The first failing field decides the
//! reported error, so a user always fixes inputs top to bottom.

use bodyfat_core::{
    EstimationError, MeasurementField, RawMeasurementInput, SexCategory, ValidatedMeasurements,
};
use tracing::debug;

/// Safe numeric parse of one field
///
/// Trims surrounding whitespace, rejects empty or non-numeric text, rejects NaN and
/// infinities, then applies the field's sign policy: strictly positive for weight,
/// height, waist, neck and hip; zero or greater for age.
///
/// # Errors
///
/// Returns the field's invalid-input variant (e.g. `InvalidWaist`) on any failure.
pub fn parse_measurement(raw: &str, field: MeasurementField) -> Result<f64, EstimationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(field.invalid_error());
    }

    let value: f64 = trimmed.parse().map_err(|_| field.invalid_error())?;
    if !field.policy().admits(value) {
        return Err(field.invalid_error());
    }

    Ok(value)
}

/// Validate all inputs and return parsed values or the first field-specific error
///
/// The hip text is neither read nor validated for categories that do not require it.
///
/// # Errors
///
/// Returns exactly one invalid-input variant, for the first field (in evaluation
/// order) whose text fails [`parse_measurement`].
pub fn validate_inputs(
    input: &RawMeasurementInput,
    sex: SexCategory,
) -> Result<ValidatedMeasurements, EstimationError> {
    parse_in_order(input, sex).inspect_err(|error| {
        debug!(sex = %sex, field = ?error.field(), code = error.code(), "Rejected measurement input");
    })
}

fn parse_in_order(
    input: &RawMeasurementInput,
    sex: SexCategory,
) -> Result<ValidatedMeasurements, EstimationError> {
    let parse = |field| parse_measurement(input.get(field), field);

    let weight = parse(MeasurementField::Weight)?;
    let height = parse(MeasurementField::Height)?;
    let waist = parse(MeasurementField::Waist)?;
    let neck = parse(MeasurementField::Neck)?;
    let age = parse(MeasurementField::Age)?;
    let hip = if sex.requires_hip() {
        Some(parse(MeasurementField::Hip)?)
    } else {
        None
    };

    ValidatedMeasurements::new(weight, height, waist, neck, hip, age, sex)
}
