// ABOUTME: Efficiency scorer configuration for the Metabolic Efficiency Score
// ABOUTME: Configures energy deviation cap, condition penalty weights, and lifestyle thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Efficiency Scorer Configuration
//!
//! The score starts at `max_score`, loses up to `max_energy_deviation_points`
//! for distance from energy balance, then loses fixed penalty points per
//! condition and per lifestyle threshold crossed.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Efficiency Scorer Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Energy-balance component
    pub energy: EnergyScoreConfig,
    /// Penalty points per pre-existing condition
    pub condition_penalties: ConditionPenaltyWeights,
    /// Penalty points and thresholds for lifestyle factors
    pub lifestyle_penalties: LifestylePenaltyConfig,
}

/// Energy-balance subscore settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyScoreConfig {
    /// Score for perfect energy balance: 100
    pub max_score: f64,
    /// Upper bound of points lost to energy imbalance: 60
    pub max_energy_deviation_points: f64,
}

/// Penalty points per condition flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionPenaltyWeights {
    /// Diabetes: 6
    pub diabetes: f64,
    /// Obesity: 4
    pub obesity: f64,
    /// Hypertension: 3
    pub hypertension: f64,
    /// Dyslipidemia: 3
    pub dyslipidemia: f64,
    /// Insulin therapy: 2
    pub insulin: f64,
    /// Elevated cortisol: 2
    pub cortisol_high: f64,
}

/// Lifestyle penalty thresholds and weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestylePenaltyConfig {
    /// Steps below this are penalized: 5000
    pub low_steps_threshold: u32,
    /// Penalty for low steps: 3
    pub low_steps_penalty: f64,
    /// Sleep below this is penalized: 6.0 h
    pub short_sleep_below: f64,
    /// Sleep at or above this is penalized: 9.5 h
    pub long_sleep_from: f64,
    /// Penalty for short or long sleep: 1
    pub irregular_sleep_penalty: f64,
    /// Muscle percentage below this is penalized: 25
    pub low_muscle_threshold_percent: f64,
    /// Penalty for low muscle: 2
    pub low_muscle_penalty: f64,
}

impl ScoringConfig {
    /// Largest penalty the configuration can produce
    #[must_use]
    pub fn max_penalty(&self) -> f64 {
        let c = &self.condition_penalties;
        let l = &self.lifestyle_penalties;
        c.diabetes
            + c.obesity
            + c.hypertension
            + c.dyslipidemia
            + c.insulin
            + c.cortisol_high
            + l.low_steps_penalty
            + l.irregular_sleep_penalty
            + l.low_muscle_penalty
    }

    /// Validate scorer settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any penalty weight is negative, the deviation
    /// cap exceeds the maximum score, or the sleep thresholds are inverted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.energy.max_score <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("max_score must be positive"));
        }
        if !(0.0..=self.energy.max_score).contains(&self.energy.max_energy_deviation_points) {
            return Err(ConfigError::ValueOutOfRange(
                "max_energy_deviation_points must be between 0 and max_score",
            ));
        }

        let c = &self.condition_penalties;
        let l = &self.lifestyle_penalties;
        let weights = [
            c.diabetes,
            c.obesity,
            c.hypertension,
            c.dyslipidemia,
            c.insulin,
            c.cortisol_high,
            l.low_steps_penalty,
            l.irregular_sleep_penalty,
            l.low_muscle_penalty,
        ];
        if weights.iter().any(|w| *w < 0.0) {
            return Err(ConfigError::InvalidWeights(
                "Penalty weights must not be negative",
            ));
        }

        if l.short_sleep_below >= l.long_sleep_from {
            return Err(ConfigError::InvalidRange(
                "short_sleep_below must be < long_sleep_from",
            ));
        }
        Ok(())
    }
}

impl Default for EnergyScoreConfig {
    fn default() -> Self {
        Self {
            max_score: 100.0,
            max_energy_deviation_points: 60.0,
        }
    }
}

impl Default for ConditionPenaltyWeights {
    fn default() -> Self {
        Self {
            diabetes: 6.0,
            obesity: 4.0,
            hypertension: 3.0,
            dyslipidemia: 3.0,
            insulin: 2.0,
            cortisol_high: 2.0,
        }
    }
}

impl Default for LifestylePenaltyConfig {
    fn default() -> Self {
        Self {
            low_steps_threshold: 5000,
            low_steps_penalty: 3.0,
            short_sleep_below: 6.0,
            long_sleep_from: 9.5,
            irregular_sleep_penalty: 1.0,
            low_muscle_threshold_percent: 25.0,
            low_muscle_penalty: 2.0,
        }
    }
}
