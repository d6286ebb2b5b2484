// ABOUTME: Core data models for body-fat estimation requests and outcomes
// ABOUTME: Sex category, raw and validated measurements, estimates and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw text input and validated numeric measurements
mod measurements;
/// Estimation outcome and status line types
mod outcome;
/// Sex category selecting the formula variant
mod sex;

pub use measurements::{RawMeasurementInput, ValidatedMeasurements, ValuePolicy};
pub use outcome::{
    clamp_percentage, format_percentage, BodyFatEstimate, EstimationFailure, EstimationResult,
    StatusMessage, StatusTone,
};
pub use sex::{ParseSexCategoryError, SexCategory};
