// ABOUTME: Named constants for unit conversion, the circumference formula, and status texts
// ABOUTME: Eliminates magic numbers from the validation and estimation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants used by the body-fat estimation engine.
//!
//! The formula coefficients come from the U.S. Navy circumference method:
//!
//! - Hodgdon, J.A. & Beckett, M.B. (1984). "Prediction of percent body fat for U.S. Navy
//!   men and women from body circumferences and height." *Naval Health Research Center*,
//!   Reports 84-11 and 84-29.

/// Unit conversion factors
pub mod units {
    /// Centimeters to inches conversion factor
    pub const CM_TO_INCHES: f64 = 0.393_701;
}

/// Circumference-based (U.S. Navy) formula coefficients
///
/// Both variants share the shape `numerator / denominator - subtract` where
/// `denominator = constant - log_circumference_factor * log10(circumference) + log_height_factor * log10(height)`.
pub mod navy_formula {
    /// Minimum circumference difference (inches) accepted as a logarithm argument
    ///
    /// Below this the estimate is dominated by measurement noise.
    pub const LOG_ARGUMENT_THRESHOLD: f64 = 0.1;

    /// Siri equation numerator shared by both variants
    pub const NUMERATOR: f64 = 495.0;

    /// Siri equation offset shared by both variants
    pub const SUBTRACT: f64 = 450.0;

    /// Male variant: `log10(waist - neck)`
    pub mod male {
        /// Density equation constant term
        pub const CONSTANT: f64 = 1.0324;
        /// Coefficient of `log10(waist - neck)`
        pub const LOG_CIRCUMFERENCE_FACTOR: f64 = 0.190_77;
        /// Coefficient of `log10(height)`
        pub const LOG_HEIGHT_FACTOR: f64 = 0.154_56;
    }

    /// Female variant: `log10(waist + hip - neck)`
    pub mod female {
        /// Density equation constant term
        pub const CONSTANT: f64 = 1.295_79;
        /// Coefficient of `log10(waist + hip - neck)`
        pub const LOG_CIRCUMFERENCE_FACTOR: f64 = 0.350_04;
        /// Coefficient of `log10(height)`
        pub const LOG_HEIGHT_FACTOR: f64 = 0.221_00;
    }
}

/// Reported percentage bounds
pub mod percentage {
    /// Lowest reportable body-fat percentage
    pub const MIN_PERCENT: f64 = 0.0;
    /// Highest reportable body-fat percentage
    pub const MAX_PERCENT: f64 = 100.0;
    /// Text shown before any successful calculation
    pub const IDLE_DISPLAY: &str = "0.0";
}

/// Status line texts shown beneath the result
pub mod status {
    /// Idle state, before a calculation or after reset
    pub const IDLE: &str = "Enter your measurements to get started!";
    /// Successful estimate
    pub const SUCCESS: &str = "Your estimated body fat percentage.";
    /// Male branch circumference guard tripped
    pub const CHECK_WAIST_NECK: &str = "Check waist/neck input.";
    /// Female branch circumference guard tripped
    pub const CHECK_WAIST_HIP_NECK: &str = "Check waist/hip/neck input.";
    /// Denominator evaluated to zero or NaN
    pub const DEGENERATE_DENOMINATOR: &str =
        "Calculation error. Values might be unrealistic or lead to NaN.";
    /// Female branch reached without a hip value
    pub const HIP_MISSING: &str = "Hip measurement is unexpectedly missing.";
}
