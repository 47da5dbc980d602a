// ABOUTME: Metabolic Efficiency Score computation from energy balance and penalties
// ABOUTME: Energy subscore capped at 60 lost points, minus additive condition and lifestyle penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Efficiency Scorer
//!
//! `MES = clamp(100 - min(|1 - ratio| x 100, 60) - penalty, 0, 100)` where
//! `ratio` is intake over TDEE and `penalty` sums fixed points per condition
//! flag and per lifestyle threshold crossed.

use crate::config::intelligence::{
    ConditionPenaltyWeights, EnergyModelConfig, LifestylePenaltyConfig, ScoringConfig,
};
use crate::energy_model::energy_balance;
use naba_core::models::{ConditionFlag, ConditionFlags, Inputs, ScoreDetails};
use tracing::trace;

/// Compute the Metabolic Efficiency Score and its audit details
#[must_use]
pub fn compute_mes(
    inputs: &Inputs,
    energy: &EnergyModelConfig,
    scoring: &ScoringConfig,
) -> (f64, ScoreDetails) {
    let balance = energy_balance(inputs, energy);

    let deviation_points = ((1.0 - balance.intake_ratio).abs() * 100.0)
        .min(scoring.energy.max_energy_deviation_points);
    let base_score = scoring.energy.max_score - deviation_points;

    let penalty = condition_penalty(&inputs.flags, &scoring.condition_penalties)
        + lifestyle_penalty(inputs, &scoring.lifestyle_penalties);

    let score = clamp_score(base_score - penalty, scoring.energy.max_score);
    trace!(
        ratio = balance.intake_ratio,
        base_score,
        penalty,
        score,
        "Computed metabolic efficiency score"
    );

    (
        score,
        ScoreDetails {
            basal_rate: balance.basal_rate,
            tdee: balance.tdee,
            intake_ratio: balance.intake_ratio,
            base_score,
            penalty,
        },
    )
}

/// Sum of fixed penalty points for each condition flag that is set
#[must_use]
pub fn condition_penalty(flags: &ConditionFlags, weights: &ConditionPenaltyWeights) -> f64 {
    flags
        .active()
        .map(|flag| match flag {
            ConditionFlag::Diabetes => weights.diabetes,
            ConditionFlag::Hypertension => weights.hypertension,
            ConditionFlag::Dyslipidemia => weights.dyslipidemia,
            ConditionFlag::Obesity => weights.obesity,
            ConditionFlag::CortisolHigh => weights.cortisol_high,
            ConditionFlag::Insulin => weights.insulin,
        })
        .sum()
}

/// Penalty points for low steps, short or long sleep, and low muscle
#[must_use]
pub fn lifestyle_penalty(inputs: &Inputs, config: &LifestylePenaltyConfig) -> f64 {
    let mut penalty = 0.0;
    if inputs.steps < config.low_steps_threshold {
        penalty += config.low_steps_penalty;
    }
    if inputs.sleep_hours >= config.long_sleep_from || inputs.sleep_hours < config.short_sleep_below
    {
        penalty += config.irregular_sleep_penalty;
    }
    if inputs.muscle_percent < config.low_muscle_threshold_percent {
        penalty += config.low_muscle_penalty;
    }
    penalty
}

/// Clamp into `[0, max]`; NaN maps to 0
fn clamp_score(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}
