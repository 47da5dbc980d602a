// ABOUTME: Disease susceptibility probabilities for hypertension and type-2 diabetes
// ABOUTME: Fixed linear logits passed through the logistic function and clamped to [0, 1]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

use crate::config::intelligence::{DiabetesLogit, HypertensionLogit, RiskModelConfig};
use naba_core::models::{Inputs, RiskPrediction};
use tracing::trace;

/// Standard logistic function `1 / (1 + e^-z)`
#[must_use]
pub fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Hypertension logit before the logistic transform
#[must_use]
pub fn hypertension_logit(inputs: &Inputs, mes: f64, coef: &HypertensionLogit) -> f64 {
    coef.intercept
        + coef.sodium_coef * inputs.sodium_mg
        + coef.mes_coef * (coef.mes_reference - mes)
        + coef.bp_coef * (coef.bp_reference - inputs.bp_systolic).max(0.0)
        + coef.steps_coef * f64::from(inputs.steps)
}

/// Type-2 diabetes logit before the logistic transform
#[must_use]
pub fn diabetes_logit(inputs: &Inputs, mes: f64, coef: &DiabetesLogit) -> f64 {
    coef.intercept
        + coef.glucose_coef * (inputs.fasting_glucose - coef.glucose_reference).max(0.0)
        + coef.mes_coef * (coef.mes_reference - mes)
        + coef.steps_coef * f64::from(inputs.steps)
}

/// Predict both disease probabilities for one set of inputs and its MES
#[must_use]
pub fn predict_dsi(inputs: &Inputs, mes: f64, config: &RiskModelConfig) -> RiskPrediction {
    let htn_z = hypertension_logit(inputs, mes, &config.hypertension);
    let t2d_z = diabetes_logit(inputs, mes, &config.diabetes_t2);
    trace!(htn_z, t2d_z, "Computed risk logits");

    RiskPrediction {
        hypertension: clamp_probability(logistic(htn_z)),
        diabetes_t2: clamp_probability(logistic(t2d_z)),
    }
}

// f64::clamp propagates NaN
fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    p.clamp(0.0, 1.0)
}
