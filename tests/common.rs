// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and realistic measurement inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::suboptimal_flops,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `bodyfat_calculator`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use bodyfat_core::constants::navy_formula::{self, female, male};
use bodyfat_core::constants::units::CM_TO_INCHES;
use bodyfat_core::{MeasurementField, RawMeasurementInput};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Typical adult male: 80 kg, 180 cm, waist 85, neck 38, age 30
pub fn male_input() -> RawMeasurementInput {
    RawMeasurementInput::default()
        .with(MeasurementField::Weight, "80")
        .with(MeasurementField::Height, "180")
        .with(MeasurementField::Waist, "85")
        .with(MeasurementField::Neck, "38")
        .with(MeasurementField::Age, "30")
}

/// Typical adult female: 65 kg, 165 cm, waist 75, neck 32, hip 95, age 28
pub fn female_input() -> RawMeasurementInput {
    RawMeasurementInput::default()
        .with(MeasurementField::Weight, "65")
        .with(MeasurementField::Height, "165")
        .with(MeasurementField::Waist, "75")
        .with(MeasurementField::Neck, "32")
        .with(MeasurementField::Hip, "95")
        .with(MeasurementField::Age, "28")
}

/// Male formula evaluated directly from centimeter inputs
pub fn male_reference(waist_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    let log_argument = (waist_cm - neck_cm) * CM_TO_INCHES;
    let height_in = height_cm * CM_TO_INCHES;
    navy_formula::NUMERATOR
        / (male::CONSTANT - male::LOG_CIRCUMFERENCE_FACTOR * log_argument.log10()
            + male::LOG_HEIGHT_FACTOR * height_in.log10())
        - navy_formula::SUBTRACT
}

/// Female formula evaluated directly from centimeter inputs
pub fn female_reference(waist_cm: f64, hip_cm: f64, neck_cm: f64, height_cm: f64) -> f64 {
    let log_argument = (waist_cm + hip_cm - neck_cm) * CM_TO_INCHES;
    let height_in = height_cm * CM_TO_INCHES;
    navy_formula::NUMERATOR
        / (female::CONSTANT - female::LOG_CIRCUMFERENCE_FACTOR * log_argument.log10()
            + female::LOG_HEIGHT_FACTOR * height_in.log10())
        - navy_formula::SUBTRACT
}
