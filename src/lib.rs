// ABOUTME: Main library entry point for the NABA metabolic efficiency engine
// ABOUTME: Re-exports the core models and formula layer, plus logging and environment config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

#![deny(unsafe_code)]

//! # NABA
//!
//! Computes a Metabolic Efficiency Score (MES) and two disease
//! susceptibility probabilities from biometric and lifestyle inputs, and
//! derives rule-based advice from them.
//!
//! ## Architecture
//!
//! - **`naba_core`**: Errors, input and result models, input ranges
//! - **`naba_intelligence`**: Energy model, scorer, risk predictor,
//!   recommendation engine, and the `MetabolicEngine` pipeline
//! - **config**: Environment settings and configuration file loading
//! - **logging**: Structured logging setup
//!
//! ## Example Usage
//!
//! ```rust
//! use naba::models::{ConditionFlags, Inputs, Sex};
//! use naba::MetabolicEngine;
//!
//! let inputs = Inputs {
//!     age: 35,
//!     sex: Sex::from_code("F"),
//!     height_cm: 168.0,
//!     weight_kg: 64.0,
//!     steps: 9000,
//!     sleep_hours: 7.5,
//!     calories_intake: 2100.0,
//!     muscle_percent: 30.0,
//!     bp_systolic: 118.0,
//!     fasting_glucose: 90.0,
//!     sodium_mg: 2200.0,
//!     flags: ConditionFlags::none(),
//! };
//!
//! let assessment = MetabolicEngine::default().evaluate(&inputs);
//! assert!((0.0..=100.0).contains(&assessment.mes));
//! ```

/// Environment settings and intelligence configuration loading
pub mod config;

/// Structured logging configuration
pub mod logging;

pub use naba_core::{constants, errors, models, AppError, AppResult, ErrorCode};
pub use naba_intelligence::{
    efficiency_scorer, energy_model, recommendation_engine, risk_predictor, ConfigError,
    IntelligenceConfig, MetabolicEngine,
};
