// ABOUTME: Output format abstraction for calculation reports
// ABOUTME: Supports JSON (default, machine-readable) and plain text (human-readable)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! A [`CalculationReport`] flattens one calculation outcome into a serializable value.
//! It is rendered as JSON for scripts or as a short text block for terminals.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bodyfat_calculator::config::EstimatorConfig;
//! use bodyfat_calculator::formatters::{format_report, CalculationReport, OutputFormat};
//! use bodyfat_calculator::intelligence::calculate_body_fat;
//! use bodyfat_core::{RawMeasurementInput, SexCategory};
//!
//! let input = RawMeasurementInput::default();
//! let outcome = calculate_body_fat(&input, SexCategory::Male, &EstimatorConfig::defaults());
//! let report = CalculationReport::new(SexCategory::Male, &outcome);
//! if let Ok(output) = format_report(&report, OutputFormat::Text) {
//!     println!("{}", output.data);
//! }
//! ```

use bodyfat_core::{EstimationResult, MeasurementField, SexCategory, StatusTone};
use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use std::fmt::Write as _;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default) - pretty-printed
    #[default]
    Json,
    /// Plain text for terminals
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl StdError for FormatError {}

/// Flattened, serializable view of one calculation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationReport {
    /// Category used for the calculation
    pub sex: SexCategory,
    /// Whether an estimate was produced
    pub success: bool,
    /// Estimate with one decimal digit, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<String>,
    /// Machine-readable error code, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    /// User-facing error message, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Field to highlight, when the failure is attributable to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_field: Option<MeasurementField>,
    /// Status line text
    pub status_message: String,
    /// Status line tone
    pub status_tone: StatusTone,
}

impl CalculationReport {
    /// Build a report from a calculation outcome
    #[must_use]
    pub fn new(sex: SexCategory, outcome: &EstimationResult) -> Self {
        match outcome {
            Ok(estimate) => Self {
                sex,
                success: true,
                body_fat_percentage: Some(estimate.display_percentage()),
                error_code: None,
                error_message: None,
                error_field: None,
                status_message: estimate.status.text.clone(),
                status_tone: estimate.status.tone,
            },
            Err(failure) => Self {
                sex,
                success: false,
                body_fat_percentage: None,
                error_code: Some(failure.error.code()),
                error_message: Some(failure.error.to_string()),
                error_field: failure.error.field(),
                status_message: failure.status.text.clone(),
                status_tone: failure.status.tone,
            },
        }
    }

    fn to_text(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "Sex: {}", self.sex.label())?;
        if let Some(percentage) = &self.body_fat_percentage {
            writeln!(out, "Estimated Body Fat: {percentage}%")?;
        }
        if let (Some(code), Some(message)) = (self.error_code, &self.error_message) {
            match self.error_field {
                Some(field) => writeln!(out, "Input Error [{code}] ({}): {message}", field.label())?,
                None => writeln!(out, "Input Error [{code}]: {message}")?,
            }
        }
        write!(out, "{}", self.status_message)?;
        Ok(out)
    }
}

/// Format a calculation report in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization or text rendering fails
pub fn format_report(
    report: &CalculationReport,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => report.to_text().map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput { data, format })
}
