// ABOUTME: Formula layer for metabolic efficiency scoring and disease susceptibility
// ABOUTME: Energy model, efficiency scorer, risk predictor, recommendation engine, and pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

#![deny(unsafe_code)]

//! # NABA Intelligence
//!
//! Pure, synchronous functions from `naba_core::models::Inputs` to a score,
//! two risk probabilities, and textual advice. No I/O and no global state.
//!
//! ## Modules
//!
//! - **config**: Every coefficient and threshold, with validation
//! - **energy_model**: BMI, basal rate, TDEE
//! - **efficiency_scorer**: Metabolic Efficiency Score
//! - **risk_predictor**: Hypertension and type-2 diabetes probabilities
//! - **recommendation_engine**: Rule-based advice
//! - **engine**: `MetabolicEngine` running the whole pipeline

/// Configuration for every pipeline stage
pub mod config;

/// Energy expenditure model (Mifflin-St Jeor, TDEE)
pub mod energy_model;

/// Metabolic Efficiency Score computation
pub mod efficiency_scorer;

/// Logistic disease susceptibility models
pub mod risk_predictor;

/// Rule-based recommendations
pub mod recommendation_engine;

/// Pipeline bundling configuration and stages
pub mod engine;

pub use config::{ConfigError, IntelligenceConfig};
pub use efficiency_scorer::{compute_mes, condition_penalty, lifestyle_penalty};
pub use energy_model::{
    activity_kcal, basal_rate, bmi, energy_balance, sleep_modifier, tdee, EnergyBalance,
};
pub use engine::MetabolicEngine;
pub use recommendation_engine::{protein_target, recommendations};
pub use risk_predictor::{diabetes_logit, hypertension_logit, logistic, predict_dsi};
