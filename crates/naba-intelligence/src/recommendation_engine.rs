// ABOUTME: Rule-based advice derived from energy balance, risk, steps, and sleep
// ABOUTME: Produces an ordered category-to-message map; Protein and Summary always present
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Recommendation Engine
//!
//! Each category is decided independently from fixed thresholds. The intake
//! ratio is recomputed from the energy model rather than taken from the
//! scorer, which yields the identical value.

use crate::config::intelligence::{EnergyModelConfig, ProteinTargetConfig, RecommendationConfig};
use crate::energy_model::tdee;
use naba_core::models::{Inputs, RecommendationCategory, Recommendations, RiskPrediction};

/// Daily protein target in grams
///
/// `max(1.2 x weight, 1.6 x weight x muscle% / 100)`. Muscle percent is used
/// directly as the lean fraction.
#[must_use]
pub fn protein_target(weight_kg: f64, muscle_percent: f64, config: &ProteinTargetConfig) -> f64 {
    let by_weight = config.body_weight_g_per_kg * weight_kg;
    let by_muscle = config.muscle_mass_g_per_kg * weight_kg * muscle_percent / 100.0;
    by_weight.max(by_muscle)
}

/// Build the advice map for one evaluation
#[must_use]
pub fn recommendations(
    inputs: &Inputs,
    mes: f64,
    risk: &RiskPrediction,
    energy: &EnergyModelConfig,
    config: &RecommendationConfig,
) -> Recommendations {
    let thresholds = &config.thresholds;
    let messages = &config.messages;
    let mut advice = Recommendations::new();

    let ratio = inputs.calories_intake / tdee(inputs, energy);
    let energy_message = if ratio > thresholds.surplus_ratio {
        &messages.energy_surplus
    } else if ratio < thresholds.deficit_ratio {
        &messages.energy_deficit
    } else {
        &messages.energy_balanced
    };
    advice.insert(RecommendationCategory::Energy, energy_message.clone());

    let protein = protein_target(inputs.weight_kg, inputs.muscle_percent, &config.protein);
    advice.insert(
        RecommendationCategory::Protein,
        format!("Target protein ≈ {protein:.0} g/day."),
    );

    if risk.hypertension >= thresholds.sodium_risk {
        advice.insert(RecommendationCategory::Sodium, messages.sodium.clone());
    }

    if risk.diabetes_t2 >= thresholds.timing_risk || inputs.flags.diabetes {
        advice.insert(RecommendationCategory::Timing, messages.timing.clone());
    }

    if inputs.steps < thresholds.low_steps {
        advice.insert(RecommendationCategory::Activity, messages.activity.clone());
    }

    if inputs.sleep_hours >= thresholds.long_sleep_from
        || inputs.sleep_hours < thresholds.short_sleep_below
    {
        advice.insert(RecommendationCategory::Sleep, messages.sleep.clone());
    }

    advice.insert(
        RecommendationCategory::Summary,
        format!(
            "MES={mes:.0}/100, HTN risk={:.2}, T2D risk={:.2}.",
            risk.hypertension, risk.diabetes_t2
        ),
    );

    advice
}
