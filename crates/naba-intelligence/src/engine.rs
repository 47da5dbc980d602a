// ABOUTME: Metabolic engine bundling a configuration with the four pipeline stages
// ABOUTME: Single and parallel batch evaluation from Inputs to a full Assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

use crate::config::intelligence::IntelligenceConfig;
use crate::efficiency_scorer::compute_mes;
use crate::energy_model::{self, EnergyBalance};
use crate::recommendation_engine;
use crate::risk_predictor::predict_dsi;
use naba_core::models::{Assessment, Inputs, Recommendations, RiskPrediction, ScoreDetails};
use rayon::prelude::*;
use tracing::debug;

/// Metabolic scoring engine
///
/// Holds no state besides its configuration; every method is a pure function
/// of its arguments and the engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct MetabolicEngine {
    config: IntelligenceConfig,
}

impl MetabolicEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Total daily energy expenditure
    #[must_use]
    pub fn tdee(&self, inputs: &Inputs) -> f64 {
        energy_model::tdee(inputs, &self.config.energy)
    }

    /// Energy breakdown including intake ratio
    #[must_use]
    pub fn energy_balance(&self, inputs: &Inputs) -> EnergyBalance {
        energy_model::energy_balance(inputs, &self.config.energy)
    }

    /// Metabolic Efficiency Score with details
    #[must_use]
    pub fn compute_mes(&self, inputs: &Inputs) -> (f64, ScoreDetails) {
        compute_mes(inputs, &self.config.energy, &self.config.scoring)
    }

    /// Disease susceptibility probabilities
    #[must_use]
    pub fn predict_dsi(&self, inputs: &Inputs, mes: f64) -> RiskPrediction {
        predict_dsi(inputs, mes, &self.config.risk)
    }

    /// Advice map for an evaluation
    #[must_use]
    pub fn recommendations(
        &self,
        inputs: &Inputs,
        mes: f64,
        risk: &RiskPrediction,
    ) -> Recommendations {
        recommendation_engine::recommendations(
            inputs,
            mes,
            risk,
            &self.config.energy,
            &self.config.recommendation,
        )
    }

    /// Run the full pipeline for one set of inputs
    #[must_use]
    pub fn evaluate(&self, inputs: &Inputs) -> Assessment {
        let (mes, details) = self.compute_mes(inputs);
        let risk = self.predict_dsi(inputs, mes);
        let recommendations = self.recommendations(inputs, mes, &risk);
        let bmi = energy_model::bmi(inputs.weight_kg, inputs.height_cm);

        debug!(
            mes,
            hypertension = risk.hypertension,
            diabetes_t2 = risk.diabetes_t2,
            categories = recommendations.len(),
            "Evaluated metabolic assessment"
        );

        Assessment {
            mes,
            details,
            risk,
            recommendations,
            bmi,
        }
    }

    /// Evaluate many independent inputs in parallel, preserving order
    #[must_use]
    pub fn evaluate_batch(&self, batch: &[Inputs]) -> Vec<Assessment> {
        debug!(count = batch.len(), "Evaluating assessment batch");
        batch.par_iter().map(|inputs| self.evaluate(inputs)).collect()
    }
}
