// ABOUTME: Configuration module for naba-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

/// Formula coefficients and thresholds for every pipeline stage
pub mod intelligence;

pub use intelligence::{ConfigError, IntelligenceConfig};
