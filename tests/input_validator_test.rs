// ABOUTME: Integration tests for measurement text parsing and fixed-order validation
// ABOUTME: Covers empty, non-numeric, zero, and negative values for every field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Input validator tests
//!
//! Every field is checked against empty, non-numeric, zero and negative text, and the
//! evaluation order (weight, height, waist, neck, age, hip) is pinned down.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bodyfat_calculator::intelligence::{parse_measurement, validate_inputs};
use bodyfat_core::{EstimationError, MeasurementField, RawMeasurementInput, SexCategory};

mod common;

const POSITIVE_FIELDS: [MeasurementField; 4] = [
    MeasurementField::Weight,
    MeasurementField::Height,
    MeasurementField::Waist,
    MeasurementField::Neck,
];

// ============================================================================
// SUCCESSFUL VALIDATION
// ============================================================================

#[test]
fn test_valid_male_input_parses_all_fields() {
    common::init_test_logging();
    let validated = validate_inputs(&common::male_input(), SexCategory::Male).unwrap();

    assert!((validated.weight_kg() - 80.0).abs() < f64::EPSILON);
    assert!((validated.height_cm() - 180.0).abs() < f64::EPSILON);
    assert!((validated.waist_cm() - 85.0).abs() < f64::EPSILON);
    assert!((validated.neck_cm() - 38.0).abs() < f64::EPSILON);
    assert!((validated.age_years() - 30.0).abs() < f64::EPSILON);
    assert_eq!(validated.hip_cm(), None);
}

#[test]
fn test_valid_female_input_includes_hip() {
    common::init_test_logging();
    let validated = validate_inputs(&common::female_input(), SexCategory::Female).unwrap();

    assert_eq!(validated.hip_cm(), Some(95.0));
}

#[test]
fn test_male_ignores_garbage_hip_text() {
    let input = common::male_input().with(MeasurementField::Hip, "not a number");

    let validated = validate_inputs(&input, SexCategory::Male).unwrap();
    assert_eq!(validated.hip_cm(), None);
}

#[test]
fn test_zero_age_is_accepted() {
    let input = common::male_input().with(MeasurementField::Age, "0");

    let validated = validate_inputs(&input, SexCategory::Male).unwrap();
    assert!(validated.age_years().abs() < f64::EPSILON);
}

#[test]
fn test_surrounding_whitespace_is_trimmed() {
    let input = common::male_input()
        .with(MeasurementField::Waist, "  85.5 ")
        .with(MeasurementField::Neck, "\t38\n");

    let validated = validate_inputs(&input, SexCategory::Male).unwrap();
    assert!((validated.waist_cm() - 85.5).abs() < f64::EPSILON);
    assert!((validated.neck_cm() - 38.0).abs() < f64::EPSILON);
}

// ============================================================================
// PER-FIELD REJECTION
// ============================================================================

#[test]
fn test_positive_fields_reject_empty_text_zero_and_negative() {
    common::init_test_logging();
    for field in POSITIVE_FIELDS {
        for text in ["", "   ", "abc", "0", "-3", "12kg"] {
            let input = common::male_input().with(field, text);
            assert_eq!(
                validate_inputs(&input, SexCategory::Male),
                Err(field.invalid_error()),
                "{field} = {text:?} should be rejected"
            );
        }
    }
}

#[test]
fn test_age_rejects_negative_and_non_numeric() {
    for text in ["-1", "", "thirty"] {
        let input = common::male_input().with(MeasurementField::Age, text);
        assert_eq!(
            validate_inputs(&input, SexCategory::Male),
            Err(EstimationError::InvalidAge)
        );
    }
}

#[test]
fn test_female_requires_hip() {
    for text in ["", "0", "-95", "wide"] {
        let input = common::female_input().with(MeasurementField::Hip, text);
        assert_eq!(
            validate_inputs(&input, SexCategory::Female),
            Err(EstimationError::InvalidHip)
        );
    }
}

#[test]
fn test_parse_measurement_rejects_non_finite_text() {
    for text in ["NaN", "inf", "infinity", "-inf"] {
        assert_eq!(
            parse_measurement(text, MeasurementField::Waist),
            Err(EstimationError::InvalidWaist)
        );
    }
}

// ============================================================================
// EVALUATION ORDER
// ============================================================================

#[test]
fn test_all_empty_reports_weight_first() {
    let input = RawMeasurementInput::default();

    assert_eq!(
        validate_inputs(&input, SexCategory::Female),
        Err(EstimationError::InvalidWeight)
    );
}

#[test]
fn test_first_failing_field_wins() {
    let input = common::male_input()
        .with(MeasurementField::Height, "0")
        .with(MeasurementField::Waist, "-1");

    assert_eq!(
        validate_inputs(&input, SexCategory::Male),
        Err(EstimationError::InvalidHeight)
    );
}

#[test]
fn test_age_is_checked_before_hip() {
    let input = common::female_input()
        .with(MeasurementField::Age, "-1")
        .with(MeasurementField::Hip, "");

    assert_eq!(
        validate_inputs(&input, SexCategory::Female),
        Err(EstimationError::InvalidAge)
    );
}

#[test]
fn test_validation_order_constant_matches_behavior() {
    let mut input = RawMeasurementInput::default();
    for field in MeasurementField::VALIDATION_ORDER {
        assert_eq!(
            validate_inputs(&input, SexCategory::Female),
            Err(field.invalid_error())
        );
        *input.get_mut(field) = "1".to_owned();
    }
    assert!(validate_inputs(&input, SexCategory::Female).is_ok());
}

#[test]
fn test_validation_errors_map_to_their_field() {
    for field in MeasurementField::VALIDATION_ORDER {
        assert_eq!(field.invalid_error().field(), Some(field));
        assert!(field.invalid_error().is_field_error());
    }
}
