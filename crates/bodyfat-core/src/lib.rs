// ABOUTME: Core types and constants for the body-composition estimator
// ABOUTME: Foundation crate with the error taxonomy, measurement models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Body Fat Core
//!
//! Foundation crate providing shared types and constants for circumference-based
//! body-fat estimation. It carries no logic beyond construction-time invariants,
//! so the engine crate can depend on it without pulling in I/O concerns.
//!
//! ## Modules
//!
//! - **errors**: The closed `EstimationError` taxonomy with per-field identity
//! - **constants**: Unit conversions, formula coefficients, and status texts
//! - **models**: Sex category, raw/validated measurements, and estimation outcomes

/// Closed error taxonomy for validation and estimation failures
pub mod errors;

/// Unit conversion factors, formula coefficients, and status message texts
pub mod constants;

/// Measurement models, sex category, and estimation outcome types
pub mod models;

pub use errors::{EstimationError, MeasurementField};
pub use models::{
    clamp_percentage, format_percentage, BodyFatEstimate, EstimationFailure, EstimationResult,
    RawMeasurementInput, SexCategory, StatusMessage, StatusTone, ValidatedMeasurements,
    ValuePolicy,
};
