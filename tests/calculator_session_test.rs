// ABOUTME: Integration tests for the caller-owned calculator session
// ABOUTME: Covers result panel updates, field highlighting, sex switching, and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bodyfat_calculator::intelligence::CalculatorSession;
use bodyfat_core::constants::status;
use bodyfat_core::{
    EstimationError, MeasurementField, RawMeasurementInput, SexCategory, StatusTone,
};

mod common;

fn session_with_male_input() -> CalculatorSession {
    let mut session = CalculatorSession::default();
    session.input = common::male_input();
    session
}

#[test]
fn test_new_session_is_idle() {
    let session = CalculatorSession::default();

    assert_eq!(session.sex(), SexCategory::Male);
    assert_eq!(session.display_percentage(), "0.0");
    assert_eq!(session.status().text, status::IDLE);
    assert_eq!(session.status().tone, StatusTone::Neutral);
    assert_eq!(session.active_error(), None);
    assert!(session.error_fields().is_empty());
}

#[test]
fn test_successful_calculation_updates_display() {
    common::init_test_logging();
    let mut session = session_with_male_input();

    let result = session.calculate().unwrap();

    assert_eq!(session.display_percentage(), result.display_percentage());
    assert_eq!(session.status().text, status::SUCCESS);
    assert_eq!(session.active_error(), None);
}

#[test]
fn test_field_error_highlights_only_that_field() {
    let mut session = session_with_male_input();
    session.input.neck = "abc".to_owned();

    let failure = session.calculate().unwrap_err();

    assert_eq!(failure.error, EstimationError::InvalidNeck);
    assert_eq!(session.active_error(), Some(EstimationError::InvalidNeck));
    assert!(session.is_field_highlighted(MeasurementField::Neck));
    assert_eq!(session.error_fields().len(), 1);
    assert_eq!(session.display_percentage(), "0.0");
    assert_eq!(session.status().tone, StatusTone::Failure);
    assert_eq!(
        session.status().text,
        EstimationError::InvalidNeck.to_string()
    );
}

#[test]
fn test_circumference_error_highlights_nothing() {
    let mut session = session_with_male_input();
    session.input.waist = "38".to_owned();

    session.calculate().unwrap_err();

    assert_eq!(
        session.active_error(),
        Some(EstimationError::MaleCircumferenceIssue)
    );
    assert!(session.error_fields().is_empty());
    assert_eq!(session.status().text, status::CHECK_WAIST_NECK);
}

#[test]
fn test_recalculation_clears_previous_error() {
    let mut session = session_with_male_input();
    session.input.weight = String::new();
    session.calculate().unwrap_err();
    assert!(session.is_field_highlighted(MeasurementField::Weight));

    session.input.weight = "80".to_owned();
    session.calculate().unwrap();

    assert!(!session.is_field_highlighted(MeasurementField::Weight));
    assert_eq!(session.active_error(), None);
    assert_ne!(session.display_percentage(), "0.0");
}

#[test]
fn test_switching_to_male_clears_hip_only() {
    let mut session = CalculatorSession::default();
    session.select_sex(SexCategory::Female);
    session.input = common::female_input();
    session.calculate().unwrap();

    session.select_sex(SexCategory::Male);

    assert_eq!(session.sex(), SexCategory::Male);
    assert!(session.input.hip.is_empty());
    assert_eq!(session.input.waist, "75");
    assert_eq!(session.display_percentage(), "0.0");
    assert_eq!(session.status().text, status::IDLE);
}

#[test]
fn test_switching_to_female_keeps_texts_and_requires_hip() {
    let mut session = session_with_male_input();
    session.calculate().unwrap();

    session.select_sex(SexCategory::Female);
    assert_eq!(session.display_percentage(), "0.0");
    assert_eq!(session.input.waist, "85");

    let failure = session.calculate().unwrap_err();
    assert_eq!(failure.error, EstimationError::InvalidHip);
    assert!(session.is_field_highlighted(MeasurementField::Hip));
}

#[test]
fn test_selecting_same_sex_keeps_result() {
    let mut session = session_with_male_input();
    let result = session.calculate().unwrap();

    session.select_sex(SexCategory::Male);

    assert_eq!(session.display_percentage(), result.display_percentage());
}

#[test]
fn test_reset_restores_idle_state() {
    let mut session = CalculatorSession::default();
    session.select_sex(SexCategory::Female);
    session.input = common::female_input();
    session.input.age = "-4".to_owned();
    session.calculate().unwrap_err();

    session.reset();

    assert_eq!(session.sex(), SexCategory::Male);
    assert_eq!(session.input, RawMeasurementInput::default());
    assert_eq!(session.display_percentage(), "0.0");
    assert_eq!(session.status().text, status::IDLE);
    assert_eq!(session.active_error(), None);
    assert!(session.error_fields().is_empty());
}
