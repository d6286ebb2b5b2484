// ABOUTME: Configuration management for the body-fat estimation engine
// ABOUTME: Formula coefficients, guard thresholds, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the body-fat calculator
//!
//! - **Estimator**: guard threshold and per-sex formula coefficients,
//!   defaulted from `bodyfat-core` constants and overridable through the environment
//! - **Errors**: validation failures of loaded configuration

/// Configuration error types
pub mod error;
/// Estimator configuration with environment overrides
pub mod estimator_config;

pub use error::ConfigError;
pub use estimator_config::{EstimatorConfig, NavyFormulaCoefficients};
