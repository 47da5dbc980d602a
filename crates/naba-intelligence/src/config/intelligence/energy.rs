// ABOUTME: Energy model configuration for basal rate and daily expenditure estimates
// ABOUTME: Configures Mifflin-St Jeor coefficients, activity, sleep, and muscle modifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Energy Model Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Sedentary activity factor: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Energy Model Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyModelConfig {
    /// Basal metabolic rate coefficients
    pub bmr: BmrConfig,
    /// Activity and body-composition adjustments applied to BMR
    pub expenditure: ExpenditureConfig,
    /// Sleep duration multipliers
    pub sleep: SleepModifierConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Adjustments turning BMR into total daily energy expenditure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenditureConfig {
    /// Baseline activity multiplier applied to BMR (sedentary: 1.2)
    pub sedentary_factor: f64,
    /// Energy cost per step (kcal): 0.045
    pub kcal_per_step: f64,
    /// Multiplier for males below the muscle threshold: 0.97
    pub low_muscle_male_factor: f64,
    /// Muscle percentage below which the male factor applies: 30
    pub low_muscle_threshold_percent: f64,
    /// Floor for TDEE so intake ratios never divide by zero (kcal): 1.0
    pub min_tdee_kcal: f64,
}

/// Piecewise sleep multipliers
///
/// Bands are evaluated top to bottom:
/// - `hours < short_sleep_below` gives `short`
/// - `hours < adequate_from` gives `below_optimal`
/// - `hours <= optimal_max` gives `optimal`
/// - `hours <= long_max` gives `long`
/// - `hours <= very_long_max` gives `very_long`
/// - otherwise `excessive`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepModifierConfig {
    /// Upper (exclusive) bound of short sleep: 6.0 h
    pub short_sleep_below: f64,
    /// Lower (inclusive) bound of the optimal band: 7.0 h
    pub adequate_from: f64,
    /// Upper (inclusive) bound of the optimal band: 8.0 h
    pub optimal_max: f64,
    /// Upper (inclusive) bound of long sleep: 9.0 h
    pub long_max: f64,
    /// Upper (inclusive) bound of very long sleep: 10.0 h
    pub very_long_max: f64,
    /// Multiplier below 6 h: 0.92
    pub short: f64,
    /// Multiplier for [6, 7) h: 0.97
    pub below_optimal: f64,
    /// Multiplier for [7, 8] h: 1.00
    pub optimal: f64,
    /// Multiplier for (8, 9] h: 0.98
    pub long: f64,
    /// Multiplier for (9, 10] h: 0.96
    pub very_long: f64,
    /// Multiplier above 10 h: 0.95
    pub excessive: f64,
}

impl EnergyModelConfig {
    /// Validate energy model coefficients
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if BMR coefficients have the wrong sign, if the
    /// TDEE floor is not positive, or if sleep bands are not strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.expenditure.sedentary_factor < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Sedentary activity factor must be at least 1.0",
            ));
        }
        if self.expenditure.kcal_per_step < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Energy cost per step must not be negative",
            ));
        }
        if self.expenditure.min_tdee_kcal <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum TDEE must be positive",
            ));
        }
        self.sleep.validate()
    }
}

impl SleepModifierConfig {
    /// Validate band ordering and multiplier signs
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if band bounds are not strictly
    /// ascending, or `ConfigError::ValueOutOfRange` if a multiplier is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [
            self.short_sleep_below,
            self.adequate_from,
            self.optimal_max,
            self.long_max,
            self.very_long_max,
        ];
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Sleep band bounds must be strictly ascending",
            ));
        }

        let multipliers = [
            self.short,
            self.below_optimal,
            self.optimal,
            self.long,
            self.very_long,
            self.excessive,
        ];
        if multipliers.iter().any(|m| *m <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Sleep multipliers must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ExpenditureConfig {
    fn default() -> Self {
        Self {
            sedentary_factor: 1.2,
            kcal_per_step: 0.045,
            low_muscle_male_factor: 0.97,
            low_muscle_threshold_percent: 30.0,
            min_tdee_kcal: 1.0,
        }
    }
}

impl Default for SleepModifierConfig {
    fn default() -> Self {
        Self {
            short_sleep_below: 6.0,
            adequate_from: 7.0,
            optimal_max: 8.0,
            long_max: 9.0,
            very_long_max: 10.0,
            short: 0.92,
            below_optimal: 0.97,
            optimal: 1.00,
            long: 0.98,
            very_long: 0.96,
            excessive: 0.95,
        }
    }
}
