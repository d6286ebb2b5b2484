// ABOUTME: Main library entry point for the body-composition estimator
// ABOUTME: Validates raw measurement text and estimates body-fat percentage with the Navy method
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Body Fat Calculator
//!
//! Estimates body-fat percentage from height and body circumferences using the
//! U.S. Navy circumference method, with a sex-specific formula variant.
//!
//! ## Features
//!
//! - **Input validation**: six free-text fields parsed in a fixed order, first failure wins
//! - **Degenerate-case guards**: circumference threshold and denominator checks before division
//! - **Field-level errors**: every input failure names the field a UI should highlight
//! - **Clamped output**: estimates are reported in `[0, 100]` with one decimal digit
//!
//! ## Architecture
//!
//! - **Core** (`bodyfat-core`): error taxonomy, measurement models, formula constants
//! - **Intelligence**: input validator, estimator, and an optional calculator session
//! - **Config**: estimator configuration with environment overrides
//! - **Formatters**: JSON and text rendering of calculation reports
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bodyfat_calculator::config::EstimatorConfig;
//! use bodyfat_calculator::errors::AppResult;
//! use bodyfat_calculator::intelligence::calculate_body_fat;
//! use bodyfat_core::{MeasurementField, RawMeasurementInput, SexCategory};
//!
//! fn main() -> AppResult<()> {
//!     let config = EstimatorConfig::load()?;
//!     let input = RawMeasurementInput::default()
//!         .with(MeasurementField::Weight, "80")
//!         .with(MeasurementField::Height, "180")
//!         .with(MeasurementField::Waist, "85")
//!         .with(MeasurementField::Neck, "38")
//!         .with(MeasurementField::Age, "30");
//!
//!     match calculate_body_fat(&input, SexCategory::Male, &config) {
//!         Ok(estimate) => println!("{}%", estimate.display_percentage()),
//!         Err(failure) => println!("{}", failure.status.text),
//!     }
//!     Ok(())
//! }
//! ```

/// Estimator configuration and environment overrides
pub mod config;

/// Application error codes and conversions for the CLI surface
pub mod errors;

/// JSON and text rendering of calculation reports
pub mod formatters;

/// Input validation, body-fat estimation, and calculator session state
pub mod intelligence;

/// Structured logging setup
pub mod logging;
