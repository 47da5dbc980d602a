// ABOUTME: Energy expenditure model using the Mifflin-St Jeor equation
// ABOUTME: BMI, basal rate, step energy, sleep and muscle modifiers, and TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Energy Model
//!
//! Estimates how much energy a person spends per day from body size, age,
//! sex, step count, sleep duration and muscle composition.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::intelligence::{
    BmrConfig, EnergyModelConfig, ExpenditureConfig, SleepModifierConfig,
};
use naba_core::models::{Inputs, Sex};
use serde::{Deserialize, Serialize};

/// Every intermediate of one energy expenditure estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyBalance {
    /// Basal metabolic rate (kcal/day)
    pub basal_rate: f64,
    /// Energy spent walking (kcal/day)
    pub activity_kcal: f64,
    /// Sleep multiplier applied to expenditure
    pub sleep_modifier: f64,
    /// Total daily energy expenditure (kcal/day), never below the configured floor
    pub tdee: f64,
    /// Intake divided by TDEE
    pub intake_ratio: f64,
}

/// Body mass index in kg/m²
///
/// Returns 0 for a non-positive height instead of dividing by zero.
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Basal metabolic rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// No range checks and no floor: the raw equation is returned.
#[must_use]
pub fn basal_rate(sex: Sex, weight_kg: f64, height_cm: f64, age: u32, config: &BmrConfig) -> f64 {
    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    config.msj_weight_coef * weight_kg + config.msj_height_coef * height_cm
        + config.msj_age_coef * f64::from(age)
        + sex_constant
}

/// Expenditure multiplier for a night's sleep
///
/// Short sleep depresses expenditure the most; 7 to 8 hours inclusive is
/// neutral. Boundaries: 6.0 falls in `[6, 7)`, 8.0 in `[7, 8]`, 9.0 in
/// `(8, 9]` and 10.0 in `(9, 10]`.
#[must_use]
pub fn sleep_modifier(sleep_hours: f64, config: &SleepModifierConfig) -> f64 {
    if sleep_hours < config.short_sleep_below {
        config.short
    } else if sleep_hours < config.adequate_from {
        config.below_optimal
    } else if sleep_hours <= config.optimal_max {
        config.optimal
    } else if sleep_hours <= config.long_max {
        config.long
    } else if sleep_hours <= config.very_long_max {
        config.very_long
    } else {
        config.excessive
    }
}

/// Energy spent walking, from step count alone
///
/// `weight_kg` is accepted for signature parity with weight-aware step
/// models but does not enter the estimate.
#[must_use]
pub fn activity_kcal(steps: u32, _weight_kg: f64, config: &ExpenditureConfig) -> f64 {
    (config.kcal_per_step * f64::from(steps)).max(0.0)
}

/// Total Daily Energy Expenditure
///
/// Formula: TDEE = (BMR x 1.2 + step kcal) x sleep modifier, then x 0.97 for
/// males under 30% muscle. Floored at 1 kcal so intake ratios stay finite.
#[must_use]
pub fn tdee(inputs: &Inputs, config: &EnergyModelConfig) -> f64 {
    let bmr = basal_rate(
        inputs.sex,
        inputs.weight_kg,
        inputs.height_cm,
        inputs.age,
        &config.bmr,
    );
    let steps_kcal = activity_kcal(inputs.steps, inputs.weight_kg, &config.expenditure);
    expenditure_from_parts(inputs, bmr, steps_kcal, config)
}

/// Full energy breakdown including the intake ratio
#[must_use]
pub fn energy_balance(inputs: &Inputs, config: &EnergyModelConfig) -> EnergyBalance {
    let basal = basal_rate(
        inputs.sex,
        inputs.weight_kg,
        inputs.height_cm,
        inputs.age,
        &config.bmr,
    );
    let steps_kcal = activity_kcal(inputs.steps, inputs.weight_kg, &config.expenditure);
    let expenditure = expenditure_from_parts(inputs, basal, steps_kcal, config);

    EnergyBalance {
        basal_rate: basal,
        activity_kcal: steps_kcal,
        sleep_modifier: sleep_modifier(inputs.sleep_hours, &config.sleep),
        tdee: expenditure,
        intake_ratio: inputs.calories_intake / expenditure,
    }
}

fn expenditure_from_parts(
    inputs: &Inputs,
    bmr: f64,
    steps_kcal: f64,
    config: &EnergyModelConfig,
) -> f64 {
    let expenditure = &config.expenditure;

    let mut total = bmr * expenditure.sedentary_factor + steps_kcal;
    total *= sleep_modifier(inputs.sleep_hours, &config.sleep);
    if inputs.sex == Sex::Male && inputs.muscle_percent < expenditure.low_muscle_threshold_percent
    {
        total *= expenditure.low_muscle_male_factor;
    }

    total.max(expenditure.min_tdee_kcal)
}
