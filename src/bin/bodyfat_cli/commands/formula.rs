// ABOUTME: Formula command for bodyfat-cli
// ABOUTME: Prints each circumference formula variant with the active conversion settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use bodyfat_calculator::{config::EstimatorConfig, errors::AppResult};
use bodyfat_core::constants::units::CM_TO_INCHES;
use bodyfat_core::SexCategory;

type Result<T> = AppResult<T>;

/// Print the formula for `sex`, or for every category when `None`
pub fn show(sex: Option<&str>, config: &EstimatorConfig) -> Result<()> {
    let categories = match sex {
        Some(text) => vec![text.parse::<SexCategory>()?],
        None => SexCategory::ALL.to_vec(),
    };

    for category in categories {
        println!("{}: {}", category.label(), category.description());
        println!("  %BF = {}", category.formula());
    }
    println!("Lengths are entered in cm and multiplied by {CM_TO_INCHES} to get inches.");
    println!(
        "The logarithm argument must exceed {} in.",
        config.log_argument_threshold
    );
    Ok(())
}
