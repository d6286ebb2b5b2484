// ABOUTME: Raw text measurement input and the validated numeric measurement set
// ABOUTME: ValidatedMeasurements enforces per-field domain constraints at construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::sex::SexCategory;
use crate::errors::{EstimationError, MeasurementField};
use serde::{Deserialize, Serialize};

/// Sign constraint applied to a parsed field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePolicy {
    /// Strictly greater than zero
    Positive,
    /// Zero or greater
    NonNegative,
}

impl ValuePolicy {
    /// Whether `value` is finite and satisfies the sign constraint
    #[must_use]
    pub fn admits(&self, value: f64) -> bool {
        value.is_finite()
            && match self {
                Self::Positive => value > 0.0,
                Self::NonNegative => value >= 0.0,
            }
    }
}

impl MeasurementField {
    /// Sign constraint for this field (age alone accepts zero)
    #[must_use]
    pub const fn policy(&self) -> ValuePolicy {
        match self {
            Self::Age => ValuePolicy::NonNegative,
            Self::Weight | Self::Height | Self::Waist | Self::Neck | Self::Hip => {
                ValuePolicy::Positive
            }
        }
    }
}

/// The six free-text fields as typed by the user
///
/// Owned by the caller; the engine only reads it during a single validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeasurementInput {
    /// Weight in kilograms
    pub weight: String,
    /// Height in centimeters
    pub height: String,
    /// Waist circumference in centimeters
    pub waist: String,
    /// Neck circumference in centimeters
    pub neck: String,
    /// Hip circumference in centimeters, read only when the category requires it
    pub hip: String,
    /// Age in years
    pub age: String,
}

impl RawMeasurementInput {
    /// Text currently entered for `field`
    #[must_use]
    pub fn get(&self, field: MeasurementField) -> &str {
        match field {
            MeasurementField::Weight => &self.weight,
            MeasurementField::Height => &self.height,
            MeasurementField::Waist => &self.waist,
            MeasurementField::Neck => &self.neck,
            MeasurementField::Hip => &self.hip,
            MeasurementField::Age => &self.age,
        }
    }

    /// Mutable text buffer for `field`
    pub fn get_mut(&mut self, field: MeasurementField) -> &mut String {
        match field {
            MeasurementField::Weight => &mut self.weight,
            MeasurementField::Height => &mut self.height,
            MeasurementField::Waist => &mut self.waist,
            MeasurementField::Neck => &mut self.neck,
            MeasurementField::Hip => &mut self.hip,
            MeasurementField::Age => &mut self.age,
        }
    }

    /// Builder-style setter
    #[must_use]
    pub fn with(mut self, field: MeasurementField, value: impl Into<String>) -> Self {
        *self.get_mut(field) = value.into();
        self
    }

    /// Clear every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Measurements that passed validation
///
/// Every present value satisfies its field's [`ValuePolicy`], and `hip_cm` is
/// present exactly when the category used at construction requires it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedMeasurements {
    weight_kg: f64,
    height_cm: f64,
    waist_cm: f64,
    neck_cm: f64,
    hip_cm: Option<f64>,
    age_years: f64,
}

impl ValidatedMeasurements {
    /// Check every value against its field policy, in validation order
    ///
    /// `hip_cm` is ignored for categories that do not require it.
    ///
    /// # Errors
    ///
    /// Returns the invalid-input error of the first field that violates its policy,
    /// or `InvalidHip` when the category requires a hip value and none is given.
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        waist_cm: f64,
        neck_cm: f64,
        hip_cm: Option<f64>,
        age_years: f64,
        sex: SexCategory,
    ) -> Result<Self, EstimationError> {
        let checked = [
            (MeasurementField::Weight, weight_kg),
            (MeasurementField::Height, height_cm),
            (MeasurementField::Waist, waist_cm),
            (MeasurementField::Neck, neck_cm),
            (MeasurementField::Age, age_years),
        ];
        for (field, value) in checked {
            if !field.policy().admits(value) {
                return Err(field.invalid_error());
            }
        }

        let hip_cm = if sex.requires_hip() {
            match hip_cm {
                Some(hip) if MeasurementField::Hip.policy().admits(hip) => Some(hip),
                _ => return Err(EstimationError::InvalidHip),
            }
        } else {
            None
        };

        Ok(Self {
            weight_kg,
            height_cm,
            waist_cm,
            neck_cm,
            hip_cm,
            age_years,
        })
    }

    /// Weight in kilograms (collected, not used by the formula)
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Waist circumference in centimeters
    #[must_use]
    pub const fn waist_cm(&self) -> f64 {
        self.waist_cm
    }

    /// Neck circumference in centimeters
    #[must_use]
    pub const fn neck_cm(&self) -> f64 {
        self.neck_cm
    }

    /// Hip circumference in centimeters, present only for categories requiring it
    #[must_use]
    pub const fn hip_cm(&self) -> Option<f64> {
        self.hip_cm
    }

    /// Age in years (collected, not used by the formula)
    #[must_use]
    pub const fn age_years(&self) -> f64 {
        self.age_years
    }
}
