// ABOUTME: Body-composition intelligence - input validation and body-fat estimation
// ABOUTME: Pure validate/estimate functions plus an optional caller-owned calculator session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Data flow: raw strings + sex category → [`input_validator`] → validated numbers or
//! an error → [`body_fat_calculator`] → clamped percentage or an error. Both stages are
//! pure; [`calculator_session`] layers form state on top for interactive front ends.

/// U.S. Navy circumference formula with degenerate-case guards
pub mod body_fat_calculator;
/// Form-style state: result panel, status line, highlighted fields
pub mod calculator_session;
/// Safe numeric parsing and fixed-order field validation
pub mod input_validator;

pub use body_fat_calculator::{
    calculate_body_fat, check_denominator, estimate, estimate_with_config,
};
pub use calculator_session::CalculatorSession;
pub use input_validator::{parse_measurement, validate_inputs};
