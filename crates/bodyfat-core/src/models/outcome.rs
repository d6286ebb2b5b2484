// ABOUTME: Terminal outcome of one calculation attempt with its status line
// ABOUTME: Pairs a clamped percentage or an EstimationError with a toned status message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::sex::SexCategory;
use crate::constants::{percentage, status};
use crate::errors::EstimationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Visual tone of a status line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    /// Informational (secondary color)
    #[default]
    Neutral,
    /// Failure (error color)
    Failure,
}

/// Status line shown beneath the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Text to display
    pub text: String,
    /// Tone to render it with
    pub tone: StatusTone,
}

impl StatusMessage {
    /// Neutral status line
    #[must_use]
    pub fn neutral(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Neutral,
        }
    }

    /// Failure status line
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: StatusTone::Failure,
        }
    }

    /// Status shown before any calculation
    #[must_use]
    pub fn idle() -> Self {
        Self::neutral(status::IDLE)
    }
}

impl Default for StatusMessage {
    fn default() -> Self {
        Self::idle()
    }
}

/// Successful body-fat estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyFatEstimate {
    /// Category whose formula variant produced the estimate
    pub sex: SexCategory,
    /// Estimate clamped into `[0, 100]`
    pub percentage: f64,
    /// Formula output before clamping
    pub raw_estimate: f64,
    /// Neutral status line
    pub status: StatusMessage,
}

impl BodyFatEstimate {
    /// Percentage rendered with one decimal digit
    #[must_use]
    pub fn display_percentage(&self) -> String {
        format_percentage(self.percentage)
    }
}

/// Clamp a raw formula output into the reportable `[0, 100]` range
#[must_use]
pub fn clamp_percentage(raw_estimate: f64) -> f64 {
    raw_estimate.clamp(percentage::MIN_PERCENT, percentage::MAX_PERCENT)
}

/// Render a percentage with one decimal digit
#[must_use]
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}")
}

/// Failed calculation attempt
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{error}")]
pub struct EstimationFailure {
    /// What went wrong
    #[source]
    pub error: EstimationError,
    /// Failure status line
    pub status: StatusMessage,
}

impl EstimationFailure {
    /// Failure with an explicit status text
    #[must_use]
    pub fn new(error: EstimationError, status_text: impl Into<String>) -> Self {
        Self {
            error,
            status: StatusMessage::failure(status_text),
        }
    }
}

impl From<EstimationError> for EstimationFailure {
    /// Validation failures show the error message itself as the status line
    fn from(error: EstimationError) -> Self {
        Self::new(error, error.to_string())
    }
}

/// Outcome of one calculation attempt
pub type EstimationResult = Result<BodyFatEstimate, EstimationFailure>;
