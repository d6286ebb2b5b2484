// ABOUTME: Biological sex category selecting the formula variant and required fields
// ABOUTME: Parses user text and describes each circumference formula variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sex category for the circumference formula
///
/// The category decides two things:
///
/// - `Male`: `log10(waist - neck)` variant, hip is not read
/// - `Female`: `log10(waist + hip - neck)` variant, hip is required
///
/// # Scientific References
///
/// - Hodgdon, J.A. & Beckett, M.B. (1984). *Naval Health Research Center* Report 84-11 (men).
/// - Hodgdon, J.A. & Beckett, M.B. (1984). *Naval Health Research Center* Report 84-29 (women).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SexCategory {
    /// Male variant, waist and neck only
    #[default]
    Male,
    /// Female variant, waist, hip and neck
    Female,
}

impl SexCategory {
    /// All categories in picker order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Whether the hip circumference is required (and read) for this category
    #[must_use]
    pub const fn requires_hip(&self) -> bool {
        matches!(self, Self::Female)
    }

    /// Category name for logging and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Display label as shown in a picker
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// The formula as a string (circumferences and height in inches)
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Male => {
                "495 / (1.0324 - 0.19077 x log10(waist - neck) + 0.15456 x log10(height)) - 450"
            }
            Self::Female => {
                "495 / (1.29579 - 0.35004 x log10(waist + hip - neck) + 0.22100 x log10(height)) - 450"
            }
        }
    }

    /// Short description of the variant and its inputs
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Male => "Navy method (men): waist, neck and height",
            Self::Female => "Navy method (women): waist, hip, neck and height",
        }
    }
}

impl fmt::Display for SexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized sex category text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sex category: '{0}'. Valid options: male, female")]
pub struct ParseSexCategoryError(pub String);

impl FromStr for SexCategory {
    type Err = ParseSexCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(ParseSexCategoryError(other.to_owned())),
        }
    }
}
