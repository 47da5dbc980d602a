// ABOUTME: Recommendation engine configuration for metabolic advice
// ABOUTME: Configures trigger thresholds, protein factors, and message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Recommendation Engine Configuration
//!
//! Provides the thresholds that decide which advisory categories appear and
//! the fixed message texts for each.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Threshold values for triggering recommendations
    pub thresholds: RecommendationThresholds,
    /// Protein target factors
    pub protein: ProteinTargetConfig,
    /// Template messages for recommendations
    pub messages: RecommendationMessages,
}

/// Thresholds for triggering recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationThresholds {
    /// Intake ratio above which intake should drop: 1.1
    pub surplus_ratio: f64,
    /// Intake ratio below which intake should rise: 0.9
    pub deficit_ratio: f64,
    /// Hypertension probability that triggers sodium advice: 0.5
    pub sodium_risk: f64,
    /// Diabetes probability that triggers meal timing advice: 0.5
    pub timing_risk: f64,
    /// Steps below this trigger activity advice: 7000
    pub low_steps: u32,
    /// Sleep below this triggers sleep advice: 6.0 h
    pub short_sleep_below: f64,
    /// Sleep at or above this triggers sleep advice: 9.5 h
    pub long_sleep_from: f64,
}

/// Daily protein target factors
///
/// Reference: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProteinTargetConfig {
    /// Grams per kg of body weight: 1.2
    pub body_weight_g_per_kg: f64,
    /// Grams per kg of muscle mass: 1.6
    pub muscle_mass_g_per_kg: f64,
}

/// Template messages for each advisory category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationMessages {
    /// Intake well above expenditure
    pub energy_surplus: String,
    /// Intake well below expenditure
    pub energy_deficit: String,
    /// Intake within the balance window
    pub energy_balanced: String,
    /// High hypertension risk
    pub sodium: String,
    /// High diabetes risk or diagnosed diabetes
    pub timing: String,
    /// Low daily steps
    pub activity: String,
    /// Short or long sleep
    pub sleep: String,
}

impl RecommendationConfig {
    /// Validate threshold ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the deficit ratio is not below
    /// the surplus ratio or the sleep thresholds are inverted, and
    /// `ConfigError::ValueOutOfRange` for risk thresholds outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.deficit_ratio >= t.surplus_ratio {
            return Err(ConfigError::InvalidRange(
                "deficit_ratio must be < surplus_ratio",
            ));
        }
        if !(0.0..=1.0).contains(&t.sodium_risk) || !(0.0..=1.0).contains(&t.timing_risk) {
            return Err(ConfigError::ValueOutOfRange(
                "Risk thresholds must be between 0.0 and 1.0",
            ));
        }
        if t.short_sleep_below >= t.long_sleep_from {
            return Err(ConfigError::InvalidRange(
                "short_sleep_below must be < long_sleep_from",
            ));
        }
        Ok(())
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            surplus_ratio: 1.1,
            deficit_ratio: 0.9,
            sodium_risk: 0.5,
            timing_risk: 0.5,
            low_steps: 7000,
            short_sleep_below: 6.0,
            long_sleep_from: 9.5,
        }
    }
}

impl Default for ProteinTargetConfig {
    fn default() -> Self {
        Self {
            body_weight_g_per_kg: 1.2,
            muscle_mass_g_per_kg: 1.6,
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            energy_surplus: "Reduce energy intake by 10–15% or add 2–3k steps/day.".into(),
            energy_deficit: "Increase intake ~10% with nutrient-dense foods.".into(),
            energy_balanced: "Energy balance near optimal window.".into(),
            sodium: "Keep sodium < 2 g/day; increase potassium (leafy greens, legumes).".into(),
            timing: "Front-load carbs earlier; last meal ≥4h before sleep; prioritize protein/veg at dinner."
                .to_owned(),
            activity: "Add 10–15 min post-meal walks (2–3x/day); aim ≥7,000–8,500 steps/day."
                .to_owned(),
            sleep: "Consolidate to 7–8 h/night with fixed wake time.".into(),
        }
    }
}
