// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for bodyfat-cli binary
// ABOUTME: Tests calculate and formula commands, output formats, and exit statuses

//! Integration tests for the bodyfat-cli binary.
//!
//! These tests verify CLI command structure, report output, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::process::Command;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_bodyfat-cli"))
        .args(args)
        .env_remove("BODYFAT_LOG_ARGUMENT_THRESHOLD")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    (exit_code, stdout, stderr)
}

const MALE_ARGS: [&str; 12] = [
    "--weight", "80", "--height", "180", "--waist", "85", "--neck", "38", "--age", "30", "--sex",
    "male",
];

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    assert!(stdout.contains("calculate"));
    assert!(stdout.contains("formula"));
}

#[test]
fn test_calculate_help_lists_measurements() {
    let (exit_code, stdout, _stderr) = run_cli(&["calculate", "--help"]);

    assert_eq!(exit_code, 0);
    for flag in ["--weight", "--height", "--waist", "--neck", "--hip", "--age"] {
        assert!(stdout.contains(flag), "help should list {flag}");
    }
}

#[test]
fn test_calculate_male_json() {
    let mut args = vec!["calculate"];
    args.extend(MALE_ARGS);
    let (exit_code, stdout, _stderr) = run_cli(&args);

    assert_eq!(exit_code, 0);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["body_fat_percentage"], "9.8");
}

#[test]
fn test_calculate_female_text() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "calculate", "--sex", "f", "--weight", "65", "--height", "165", "--waist", "75",
        "--neck", "32", "--hip", "95", "--age", "28", "--format", "text",
    ]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Estimated Body Fat: 4.5%"));
}

#[test]
fn test_calculate_missing_field_reports_error() {
    let (exit_code, stdout, _stderr) = run_cli(&["calculate", "--height", "180"]);

    assert_eq!(exit_code, 2, "Rejected input should exit with 2");
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error_code"], "INVALID_WEIGHT");
    assert_eq!(json["error_field"], "weight");
}

#[test]
fn test_calculate_negative_value_is_passed_through() {
    let (exit_code, stdout, _stderr) = run_cli(&[
        "calculate", "--weight", "80", "--height", "180", "--waist", "85", "--neck", "-38",
        "--age", "30",
    ]);

    assert_eq!(exit_code, 2);
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["error_code"], "INVALID_NECK");
}

#[test]
fn test_unknown_sex_is_rejected() {
    let (exit_code, stdout, stderr) = run_cli(&["calculate", "--sex", "other"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("INVALID_FORMAT"));
}

#[test]
fn test_formula_shows_both_variants() {
    let (exit_code, stdout, _stderr) = run_cli(&["formula"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("log10(waist - neck)"));
    assert!(stdout.contains("log10(waist + hip - neck)"));
}

#[test]
fn test_formula_single_variant() {
    let (exit_code, stdout, _stderr) = run_cli(&["formula", "--sex", "female"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("Female"));
    assert!(!stdout.contains("log10(waist - neck)"));
}
