// ABOUTME: Caller-owned calculator form state driving validate-then-estimate on demand
// ABOUTME: Tracks the displayed result, status line, active error, and highlighted fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator session state for form-style front ends.
//!
//! The engine itself is stateless. A UI that keeps text buffers, a sex picker, and a
//! result panel can own a [`CalculatorSession`] and call [`CalculatorSession::calculate`]
//! on each "calculate" action and [`CalculatorSession::reset`] on "reset".

use super::body_fat_calculator::calculate_body_fat;
use crate::config::EstimatorConfig;
use bodyfat_core::constants::percentage;
use bodyfat_core::{
    EstimationError, EstimationResult, MeasurementField, RawMeasurementInput, SexCategory,
    StatusMessage,
};
use std::collections::BTreeSet;
use tracing::debug;

/// Form state for one calculator screen
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    /// Raw text buffers, edited by the caller
    pub input: RawMeasurementInput,
    sex: SexCategory,
    display_percentage: String,
    status: StatusMessage,
    active_error: Option<EstimationError>,
    error_fields: BTreeSet<MeasurementField>,
    config: EstimatorConfig,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(EstimatorConfig::defaults())
    }
}

impl CalculatorSession {
    /// Idle session using `config` for every calculation
    #[must_use]
    pub fn new(config: EstimatorConfig) -> Self {
        Self {
            input: RawMeasurementInput::default(),
            sex: SexCategory::default(),
            display_percentage: percentage::IDLE_DISPLAY.to_owned(),
            status: StatusMessage::idle(),
            active_error: None,
            error_fields: BTreeSet::new(),
            config,
        }
    }

    /// Currently selected sex category
    #[must_use]
    pub const fn sex(&self) -> SexCategory {
        self.sex
    }

    /// Result text, `"0.0"` until a calculation succeeds
    #[must_use]
    pub fn display_percentage(&self) -> &str {
        &self.display_percentage
    }

    /// Status line beneath the result
    #[must_use]
    pub const fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Error from the last calculation, if it failed
    #[must_use]
    pub const fn active_error(&self) -> Option<EstimationError> {
        self.active_error
    }

    /// Fields flagged by the last failed calculation
    #[must_use]
    pub const fn error_fields(&self) -> &BTreeSet<MeasurementField> {
        &self.error_fields
    }

    /// Whether `field` should be drawn with an error border
    #[must_use]
    pub fn is_field_highlighted(&self, field: MeasurementField) -> bool {
        self.error_fields.contains(&field)
    }

    /// Change the sex category
    ///
    /// Switching to male clears the hip text. Any change resets the result panel and
    /// highlights; other texts are kept.
    pub fn select_sex(&mut self, sex: SexCategory) {
        if sex == self.sex {
            return;
        }
        self.sex = sex;
        if !sex.requires_hip() {
            self.input.hip.clear();
        }
        self.reset_calculation_display();
        self.clear_error_highlights();
    }

    /// Validate and estimate from the current buffers, updating the result panel
    pub fn calculate(&mut self) -> EstimationResult {
        self.clear_error_highlights();
        self.reset_calculation_display();

        let outcome = calculate_body_fat(&self.input, self.sex, &self.config);
        match &outcome {
            Ok(estimate) => {
                self.display_percentage = estimate.display_percentage();
                self.status = estimate.status.clone();
            }
            Err(failure) => {
                self.active_error = Some(failure.error);
                self.status = failure.status.clone();
                if let Some(field) = failure.error.field() {
                    self.error_fields.insert(field);
                }
                debug!(code = failure.error.code(), "Calculation failed");
            }
        }
        outcome
    }

    /// Clear all six texts, restore the default category, and idle the result panel
    pub fn reset(&mut self) {
        self.input.clear();
        self.sex = SexCategory::default();
        self.reset_calculation_display();
        self.clear_error_highlights();
    }

    fn reset_calculation_display(&mut self) {
        percentage::IDLE_DISPLAY.clone_into(&mut self.display_percentage);
        self.status = StatusMessage::idle();
        self.active_error = None;
    }

    fn clear_error_highlights(&mut self) {
        self.error_fields.clear();
    }
}
