// ABOUTME: Closed error taxonomy for measurement validation and body-fat estimation
// ABOUTME: Every variant carries a user-facing message and an optional offending field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Estimation Error Types
//!
//! Provides the closed set of failures the engine can report:
//! - six per-field invalid-input variants
//! - two sex-specific circumference relationship violations
//! - a degenerate-denominator variant for undefined arithmetic
//! - a generic variant reserved for forward compatibility
//!
//! Every failure is an expected outcome of bad input, never a defect.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifies one of the six user-entered input fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    /// Body weight in kilograms
    Weight,
    /// Standing height in centimeters
    Height,
    /// Waist circumference in centimeters
    Waist,
    /// Neck circumference in centimeters
    Neck,
    /// Hip circumference in centimeters (female branch only)
    Hip,
    /// Age in years
    Age,
}

impl MeasurementField {
    /// Fixed evaluation order used by the validator (hip last, conditionally)
    pub const VALIDATION_ORDER: [Self; 6] = [
        Self::Weight,
        Self::Height,
        Self::Waist,
        Self::Neck,
        Self::Age,
        Self::Hip,
    ];

    /// Stable identifier used by UIs to highlight the field
    #[must_use]
    pub const fn field_id(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Waist => "waist",
            Self::Neck => "neck",
            Self::Hip => "hip",
            Self::Age => "age",
        }
    }

    /// Human-readable label including the input unit
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Weight (kg)",
            Self::Height => "Height (cm)",
            Self::Waist => "Waist (cm)",
            Self::Neck => "Neck (cm)",
            Self::Hip => "Hip (cm)",
            Self::Age => "Age (years)",
        }
    }

    /// The invalid-input error reported for this field
    #[must_use]
    pub const fn invalid_error(&self) -> EstimationError {
        match self {
            Self::Weight => EstimationError::InvalidWeight,
            Self::Height => EstimationError::InvalidHeight,
            Self::Waist => EstimationError::InvalidWaist,
            Self::Neck => EstimationError::InvalidNeck,
            Self::Hip => EstimationError::InvalidHip,
            Self::Age => EstimationError::InvalidAge,
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_id())
    }
}

/// Every failure the validator or estimator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimationError {
    /// Weight empty, non-numeric, or not strictly positive
    #[error("Please enter a valid, positive number for your Weight (kg).")]
    InvalidWeight,

    /// Height empty, non-numeric, or not strictly positive
    #[error("Please enter a valid, positive number for your Height (cm).")]
    InvalidHeight,

    /// Waist empty, non-numeric, or not strictly positive
    #[error("Please enter a valid, positive number for your Waist circumference (cm).")]
    InvalidWaist,

    /// Neck empty, non-numeric, or not strictly positive
    #[error("Please enter a valid, positive number for your Neck circumference (cm).")]
    InvalidNeck,

    /// Hip required but empty, non-numeric, or not strictly positive
    #[error("For females, please enter a valid, positive number for your Hip circumference (cm).")]
    InvalidHip,

    /// Age empty, non-numeric, or negative
    #[error("Please enter a valid, non-negative number for your Age (years).")]
    InvalidAge,

    /// Male branch: waist not meaningfully larger than neck
    #[error("For men, your waist measurement must be significantly larger than your neck measurement for an accurate calculation. Please re-check these values.")]
    MaleCircumferenceIssue,

    /// Female branch: waist plus hip not meaningfully larger than neck
    #[error("For women, the combined waist and hip measurements must be significantly larger than your neck measurement for an accurate calculation. Please re-check these values.")]
    FemaleCircumferenceIssue,

    /// Formula denominator evaluated to zero or NaN
    #[error("A calculation error occurred (division by zero). Please ensure your measurements are realistic and try again.")]
    DegenerateDenominator,

    /// Catch-all, not produced by the current entry points
    #[error("Please ensure all fields are filled with valid numeric values.")]
    GenericInvalidInput,
}

impl EstimationError {
    /// The input field at fault, if the error is attributable to one
    #[must_use]
    pub const fn field(&self) -> Option<MeasurementField> {
        match self {
            Self::InvalidWeight => Some(MeasurementField::Weight),
            Self::InvalidHeight => Some(MeasurementField::Height),
            Self::InvalidWaist => Some(MeasurementField::Waist),
            Self::InvalidNeck => Some(MeasurementField::Neck),
            Self::InvalidHip => Some(MeasurementField::Hip),
            Self::InvalidAge => Some(MeasurementField::Age),
            Self::MaleCircumferenceIssue
            | Self::FemaleCircumferenceIssue
            | Self::DegenerateDenominator
            | Self::GenericInvalidInput => None,
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidWeight => "INVALID_WEIGHT",
            Self::InvalidHeight => "INVALID_HEIGHT",
            Self::InvalidWaist => "INVALID_WAIST",
            Self::InvalidNeck => "INVALID_NECK",
            Self::InvalidHip => "INVALID_HIP",
            Self::InvalidAge => "INVALID_AGE",
            Self::MaleCircumferenceIssue => "MALE_CIRCUMFERENCE_ISSUE",
            Self::FemaleCircumferenceIssue => "FEMALE_CIRCUMFERENCE_ISSUE",
            Self::DegenerateDenominator => "DEGENERATE_DENOMINATOR",
            Self::GenericInvalidInput => "GENERIC_INVALID_INPUT",
        }
    }

    /// Whether the error was raised while parsing a single field
    #[must_use]
    pub const fn is_field_error(&self) -> bool {
        self.field().is_some()
    }
}
