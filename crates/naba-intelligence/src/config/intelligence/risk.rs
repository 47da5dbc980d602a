// ABOUTME: Risk model configuration for hypertension and type-2 diabetes probabilities
// ABOUTME: Fixed logistic coefficients; nothing here is ever fitted or updated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Risk Model Configuration
//!
//! Both models are hand-tuned linear logits passed through the logistic
//! function. The coefficients are not calibrated against any cohort.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Risk Model Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskModelConfig {
    /// Hypertension logit coefficients
    pub hypertension: HypertensionLogit,
    /// Type-2 diabetes logit coefficients
    pub diabetes_t2: DiabetesLogit,
}

/// Hypertension logit:
/// `intercept + sodium_coef·sodium + mes_coef·(mes_reference − mes)
///  + bp_coef·max(0, bp_reference − bp) + steps_coef·steps`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypertensionLogit {
    /// Intercept: -2.0
    pub intercept: f64,
    /// Per mg sodium: 0.0005
    pub sodium_coef: f64,
    /// Per MES point below the reference: 0.02
    pub mes_coef: f64,
    /// MES reference: 140
    pub mes_reference: f64,
    /// Per mmHg below the systolic reference: 0.002
    pub bp_coef: f64,
    /// Systolic reference: 140 mmHg
    pub bp_reference: f64,
    /// Per step: -0.0002
    pub steps_coef: f64,
}

/// Type-2 diabetes logit:
/// `intercept + glucose_coef·max(0, glucose − glucose_reference)
///  + mes_coef·(mes_reference − mes) + steps_coef·steps`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiabetesLogit {
    /// Intercept: -1.6
    pub intercept: f64,
    /// Per mg/dL above the glucose reference: 0.01
    pub glucose_coef: f64,
    /// Fasting glucose reference: 100 mg/dL
    pub glucose_reference: f64,
    /// Per MES point below the reference: 0.02
    pub mes_coef: f64,
    /// MES reference: 90
    pub mes_reference: f64,
    /// Per step: -0.00015
    pub steps_coef: f64,
}

impl RiskModelConfig {
    /// Validate coefficient signs
    ///
    /// The monotonicity guarantees (more sodium or glucose never lowers risk,
    /// more steps never raises it) depend on these signs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when a coefficient has the wrong sign.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let htn = &self.hypertension;
        if htn.sodium_coef < 0.0 || htn.steps_coef > 0.0 {
            return Err(ConfigError::InvalidWeights(
                "Hypertension sodium coefficient must be >= 0 and steps coefficient <= 0",
            ));
        }
        let dm = &self.diabetes_t2;
        if dm.glucose_coef < 0.0 || dm.steps_coef > 0.0 {
            return Err(ConfigError::InvalidWeights(
                "Diabetes glucose coefficient must be >= 0 and steps coefficient <= 0",
            ));
        }
        Ok(())
    }
}

impl Default for HypertensionLogit {
    fn default() -> Self {
        Self {
            intercept: -2.0,
            sodium_coef: 0.0005,
            mes_coef: 0.02,
            mes_reference: 140.0,
            bp_coef: 0.002,
            bp_reference: 140.0,
            steps_coef: -0.0002,
        }
    }
}

impl Default for DiabetesLogit {
    fn default() -> Self {
        Self {
            intercept: -1.6,
            glucose_coef: 0.01,
            glucose_reference: 100.0,
            mes_coef: 0.02,
            mes_reference: 90.0,
            steps_coef: -0.00015,
        }
    }
}
