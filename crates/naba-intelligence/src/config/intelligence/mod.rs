// ABOUTME: Intelligence module configuration for metabolic scoring and risk prediction
// ABOUTME: Orchestrates stage-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Intelligence Configuration Module
//!
//! Every coefficient used by the pipeline lives here. `Default` reproduces the
//! reference formulas exactly; overrides come from the environment or from a
//! JSON document and are validated before use.
//!
//! # Module Structure
//!
//! - `energy` - BMR coefficients, activity, sleep and muscle modifiers
//! - `scoring` - Energy deviation cap and penalty table
//! - `risk` - Hypertension and diabetes logit coefficients
//! - `recommendation` - Advice thresholds, protein factors, messages

pub mod energy;
pub mod error;
pub mod recommendation;
pub mod risk;
pub mod scoring;

pub use energy::{BmrConfig, EnergyModelConfig, ExpenditureConfig, SleepModifierConfig};
pub use error::ConfigError;
pub use recommendation::{
    ProteinTargetConfig, RecommendationConfig, RecommendationMessages, RecommendationThresholds,
};
pub use risk::{DiabetesLogit, HypertensionLogit, RiskModelConfig};
pub use scoring::{
    ConditionPenaltyWeights, EnergyScoreConfig, LifestylePenaltyConfig, ScoringConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Energy model (BMR, TDEE) configuration
    pub energy: EnergyModelConfig,
    /// Efficiency scorer configuration
    pub scoring: ScoringConfig,
    /// Risk predictor configuration
    pub risk: RiskModelConfig,
    /// Recommendation engine configuration
    pub recommendation: RecommendationConfig,
}

impl IntelligenceConfig {
    /// Parse a JSON document; missing sections keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON, or a validation error
    /// if the resulting configuration is inconsistent
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by any stage configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.validate()?;
        self.scoring.validate()?;
        self.risk.validate()?;
        self.recommendation.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            debug!(variable = env_var_name, "Applied intelligence config override");
        }
        Ok(())
    }

    /// Apply `NABA_*` environment variable overrides on top of this configuration
    ///
    /// The result is not validated; call [`Self::validate`] afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a variable is set but does not parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy model overrides
        Self::apply_env_var(
            "NABA_ENERGY_KCAL_PER_STEP",
            &mut self.energy.expenditure.kcal_per_step,
        )?;
        Self::apply_env_var(
            "NABA_ENERGY_MIN_TDEE_KCAL",
            &mut self.energy.expenditure.min_tdee_kcal,
        )?;

        // Scorer overrides
        Self::apply_env_var(
            "NABA_SCORING_MAX_ENERGY_DEVIATION",
            &mut self.scoring.energy.max_energy_deviation_points,
        )?;
        Self::apply_env_var(
            "NABA_SCORING_LOW_STEPS_THRESHOLD",
            &mut self.scoring.lifestyle_penalties.low_steps_threshold,
        )?;

        // Recommendation overrides
        Self::apply_env_var(
            "NABA_RECOMMENDATION_LOW_STEPS",
            &mut self.recommendation.thresholds.low_steps,
        )?;
        Self::apply_env_var(
            "NABA_RECOMMENDATION_SODIUM_RISK",
            &mut self.recommendation.thresholds.sodium_risk,
        )?;
        Self::apply_env_var(
            "NABA_RECOMMENDATION_TIMING_RISK",
            &mut self.recommendation.thresholds.timing_risk,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_max_penalty_sums_weight_table() {
        // 6 + 4 + 3 + 3 + 2 + 2 for conditions, 3 + 1 + 2 for lifestyle
        let config = IntelligenceConfig::default();
        assert!((config.scoring.max_penalty() - 26.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = IntelligenceConfig::from_json_str(
            r#"{"recommendation": {"thresholds": {"low_steps": 8000}}}"#,
        )
        .unwrap();

        assert_eq!(config.recommendation.thresholds.low_steps, 8000);
        assert_eq!(config.energy, EnergyModelConfig::default());
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let error = IntelligenceConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(error, ConfigError::Parse(_)));
    }

    #[test]
    fn test_inverted_sleep_bands_rejected() {
        let mut config = IntelligenceConfig::default();
        config.energy.sleep.optimal_max = 6.5;

        let error = config.validate().unwrap_err();
        assert!(matches!(error, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_negative_penalty_rejected() {
        let mut config = IntelligenceConfig::default();
        config.scoring.condition_penalties.obesity = -1.0;

        let error = config.validate().unwrap_err();
        assert!(matches!(error, ConfigError::InvalidWeights(_)));
    }

    #[test]
    fn test_positive_steps_coefficient_rejected() {
        let mut config = IntelligenceConfig::default();
        config.risk.hypertension.steps_coef = 0.001;

        assert!(config.validate().is_err());
    }
}
