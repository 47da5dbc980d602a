// ABOUTME: Benchmark fixtures for generating realistic biometric inputs
// ABOUTME: Provides deterministic input generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Benchmark fixtures for generating biometric inputs.
//!
//! Values sweep the accepted input ranges deterministically so every run
//! measures the same mix of sleep bands, penalties, and recommendation sets.

use naba::models::{ConditionFlag, ConditionFlags, Inputs, Sex};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum InputBatchSize {
    /// Small batch (10 records) - quick benchmarks
    Small,
    /// Medium batch (1,000 records) - a clinic's daily intake
    Medium,
    /// Large batch (100,000 records) - population screening
    Large,
}

impl InputBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1_000,
            Self::Large => 100_000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Generate one deterministic input record
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_input(index: usize) -> Inputs {
    let flags = ConditionFlag::ALL
        .iter()
        .enumerate()
        .filter(|(bit, _)| (index >> bit) & 1 == 1)
        .map(|(_, flag)| *flag)
        .collect::<ConditionFlags>();

    Inputs {
        age: 14 + (index % 87) as u32,
        sex: if index % 2 == 0 { Sex::Male } else { Sex::Female },
        height_cm: 120.0 + (index % 91) as f64,
        weight_kg: 35.0 + (index % 166) as f64,
        steps: ((index * 137) % 40_001) as u32,
        sleep_hours: (index % 57) as f64 * 0.25,
        calories_intake: 500.0 + ((index * 53) % 5_501) as f64,
        muscle_percent: 5.0 + (index % 56) as f64,
        bp_systolic: 80.0 + (index % 141) as f64,
        fasting_glucose: 60.0 + ((index * 7) % 241) as f64,
        sodium_mg: ((index * 97) % 8_001) as f64,
        flags,
    }
}

/// Generate a batch of deterministic input records
#[must_use]
pub fn generate_inputs(size: InputBatchSize) -> Vec<Inputs> {
    (0..size.count()).map(generate_input).collect()
}
