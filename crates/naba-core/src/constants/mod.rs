// ABOUTME: Application constants for input validation and result display
// ABOUTME: Accepted biometric input ranges and risk band cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Constants shared by front-ends and the formula layer.
//!
//! The scoring functions never consult these ranges. They describe the
//! domain the formulas were authored for and are enforced only by
//! [`Inputs::validate`](crate::models::Inputs::validate).

/// Accepted ranges for each biometric input, as `(min, max)` inclusive
pub mod input_ranges {
    /// Age in years
    pub const AGE_YEARS: (u32, u32) = (14, 100);

    /// Height in centimeters
    pub const HEIGHT_CM: (f64, f64) = (120.0, 210.0);

    /// Body weight in kilograms
    pub const WEIGHT_KG: (f64, f64) = (35.0, 200.0);

    /// Daily step count
    pub const STEPS: (u32, u32) = (0, 40_000);

    /// Nightly sleep in hours
    pub const SLEEP_HOURS: (f64, f64) = (0.0, 14.0);

    /// Daily energy intake in kcal
    pub const CALORIES_INTAKE: (f64, f64) = (500.0, 6000.0);

    /// Skeletal muscle percentage
    pub const MUSCLE_PERCENT: (f64, f64) = (5.0, 60.0);

    /// Systolic blood pressure in mmHg
    pub const BP_SYSTOLIC: (f64, f64) = (80.0, 220.0);

    /// Fasting plasma glucose in mg/dL
    pub const FASTING_GLUCOSE: (f64, f64) = (60.0, 300.0);

    /// Daily sodium intake in mg
    pub const SODIUM_MG: (f64, f64) = (0.0, 8000.0);
}

/// Risk probability cut-offs for display banding
pub mod risk_bands {
    /// Probabilities strictly below this are `Low`
    pub const LOW_UPPER: f64 = 0.33;

    /// Probabilities strictly below this (and not `Low`) are `Moderate`
    pub const MODERATE_UPPER: f64 = 0.66;
}
