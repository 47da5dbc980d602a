// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and canonical biometric input records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `naba`
//!
//! This module provides common fixtures to reduce duplication across
//! integration tests.

use naba::models::{ConditionFlag, ConditionFlags, Inputs, Sex};
use naba::MetabolicEngine;
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Engine with the reference coefficients
pub fn default_engine() -> MetabolicEngine {
    init_test_logging();
    MetabolicEngine::default()
}

/// 41-year-old male with four diagnosed conditions, long sleep, low steps
pub fn scenario_inputs() -> Inputs {
    Inputs {
        age: 41,
        sex: Sex::Male,
        height_cm: 175.0,
        weight_kg: 95.0,
        steps: 3000,
        sleep_hours: 10.0,
        calories_intake: 3000.0,
        muscle_percent: 20.0,
        bp_systolic: 142.0,
        fasting_glucose: 110.0,
        sodium_mg: 3500.0,
        flags: [
            ConditionFlag::Diabetes,
            ConditionFlag::Hypertension,
            ConditionFlag::Dyslipidemia,
            ConditionFlag::Obesity,
        ]
        .into_iter()
        .collect(),
    }
}

/// Active 30-year-old female with no conditions
pub fn healthy_inputs() -> Inputs {
    Inputs {
        age: 30,
        sex: Sex::Female,
        height_cm: 165.0,
        weight_kg: 60.0,
        steps: 10_000,
        sleep_hours: 7.5,
        calories_intake: 2000.0,
        muscle_percent: 32.0,
        bp_systolic: 115.0,
        fasting_glucose: 85.0,
        sodium_mg: 1800.0,
        flags: ConditionFlags::none(),
    }
}

/// Every penalty triggered: all flags, low steps, short sleep, low muscle
pub fn worst_case_inputs() -> Inputs {
    Inputs {
        age: 70,
        sex: Sex::Male,
        height_cm: 170.0,
        weight_kg: 120.0,
        steps: 1000,
        sleep_hours: 4.0,
        calories_intake: 5000.0,
        muscle_percent: 15.0,
        bp_systolic: 190.0,
        fasting_glucose: 250.0,
        sodium_mg: 7000.0,
        flags: ConditionFlags::all(),
    }
}

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
