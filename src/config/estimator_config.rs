// ABOUTME: Estimator configuration - guard threshold and formula coefficients
// ABOUTME: Defaults come from bodyfat-core constants, the environment may only tighten the guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use bodyfat_core::constants::navy_formula;
use bodyfat_core::SexCategory;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Environment variable overriding the logarithm argument threshold
pub const ENV_LOG_ARGUMENT_THRESHOLD: &str = "BODYFAT_LOG_ARGUMENT_THRESHOLD";

/// Coefficients of one circumference formula variant
///
/// Reference: Hodgdon, J.A. & Beckett, M.B. (1984). Naval Health Research Center
/// Reports 84-11 (men) and 84-29 (women).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavyFormulaCoefficients {
    /// Density equation constant term
    pub constant: f64,
    /// Coefficient of `log10(circumference argument)`, subtracted
    pub log_circumference_factor: f64,
    /// Coefficient of `log10(height)`, added
    pub log_height_factor: f64,
    /// Siri equation numerator (495)
    pub numerator: f64,
    /// Siri equation offset (450)
    pub subtract: f64,
}

impl NavyFormulaCoefficients {
    /// Male variant: `log10(waist - neck)`
    #[must_use]
    pub const fn male() -> Self {
        Self {
            constant: navy_formula::male::CONSTANT,
            log_circumference_factor: navy_formula::male::LOG_CIRCUMFERENCE_FACTOR,
            log_height_factor: navy_formula::male::LOG_HEIGHT_FACTOR,
            numerator: navy_formula::NUMERATOR,
            subtract: navy_formula::SUBTRACT,
        }
    }

    /// Female variant: `log10(waist + hip - neck)`
    #[must_use]
    pub const fn female() -> Self {
        Self {
            constant: navy_formula::female::CONSTANT,
            log_circumference_factor: navy_formula::female::LOG_CIRCUMFERENCE_FACTOR,
            log_height_factor: navy_formula::female::LOG_HEIGHT_FACTOR,
            numerator: navy_formula::NUMERATOR,
            subtract: navy_formula::SUBTRACT,
        }
    }

    /// `constant - a * log10(log_argument) + b * log10(height_in)`
    ///
    /// Callers must have checked `log_argument` against the threshold.
    #[must_use]
    pub fn denominator(&self, log_argument: f64, height_in: f64) -> f64 {
        self.log_height_factor.mul_add(
            height_in.log10(),
            self.log_circumference_factor
                .mul_add(-log_argument.log10(), self.constant),
        )
    }

    /// `numerator / denominator - subtract`
    #[must_use]
    pub fn estimate(&self, denominator: f64) -> f64 {
        self.numerator / denominator - self.subtract
    }

    fn is_finite(&self) -> bool {
        [
            self.constant,
            self.log_circumference_factor,
            self.log_height_factor,
            self.numerator,
            self.subtract,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Configuration consumed by the estimator
///
/// The centimeter-to-inch factor is fixed (`bodyfat_core::constants::units`) and
/// is not part of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Minimum logarithm argument (inches); never below the built-in 0.1
    pub log_argument_threshold: f64,
    /// Male formula variant
    pub male: NavyFormulaCoefficients,
    /// Female formula variant
    pub female: NavyFormulaCoefficients,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl EstimatorConfig {
    /// Built-in configuration
    #[must_use]
    pub const fn defaults() -> Self {
        Self {
            log_argument_threshold: navy_formula::LOG_ARGUMENT_THRESHOLD,
            male: NavyFormulaCoefficients::male(),
            female: NavyFormulaCoefficients::female(),
        }
    }

    /// Formula variant for `sex`
    #[must_use]
    pub const fn coefficients(&self, sex: SexCategory) -> &NavyFormulaCoefficients {
        match sex {
            SexCategory::Male => &self.male,
            SexCategory::Female => &self.female,
        }
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::defaults().apply_env_overrides()?;
        config.validate()?;
        debug!(
            log_argument_threshold = config.log_argument_threshold,
            "Loaded estimator configuration"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a value is not finite, the threshold is looser than the
    /// built-in minimum, or a numerator is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.log_argument_threshold.is_finite() {
            return Err(ConfigError::NotFinite("log_argument_threshold"));
        }
        if self.log_argument_threshold < navy_formula::LOG_ARGUMENT_THRESHOLD {
            return Err(ConfigError::InvalidRange(
                "log_argument_threshold must be >= 0.1",
            ));
        }

        for (name, coefficients) in [("male", &self.male), ("female", &self.female)] {
            if !coefficients.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
            if coefficients.numerator == 0.0 {
                return Err(ConfigError::InvalidRange("formula numerator must be non-zero"));
            }
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_LOG_ARGUMENT_THRESHOLD, &mut self.log_argument_threshold)?;
        Ok(self)
    }
}
