// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for bodyfat-cli
// ABOUTME: Provides the calculate and formula commands

pub mod calculate;
pub mod formula;
