// ABOUTME: Result models produced by the scoring pipeline
// ABOUTME: Score details, risk prediction and bands, recommendations, and the storage record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

use super::biometrics::{ConditionFlags, Inputs, Sex};
use crate::constants::risk_bands;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Intermediate quantities behind a Metabolic Efficiency Score
///
/// Informational only; later stages recompute what they need.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    /// Basal metabolic rate (kcal/day)
    pub basal_rate: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Intake divided by TDEE
    pub intake_ratio: f64,
    /// Energy-balance subscore before penalties
    pub base_score: f64,
    /// Sum of condition and lifestyle penalties
    pub penalty: f64,
}

impl ScoreDetails {
    /// Display form: kcal values and base to 1 decimal, ratio to 2 decimals
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            basal_rate: round_to(self.basal_rate, 1),
            tdee: round_to(self.tdee, 1),
            intake_ratio: round_to(self.intake_ratio, 2),
            base_score: round_to(self.base_score, 1),
            penalty: self.penalty,
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Display classification of a risk probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Below 0.33
    Low,
    /// 0.33 up to 0.66
    Moderate,
    /// 0.66 and above
    High,
}

impl RiskBand {
    /// Classify a probability
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < risk_bands::LOW_UPPER {
            Self::Low
        } else if probability < risk_bands::MODERATE_UPPER {
            Self::Moderate
        } else {
            Self::High
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        })
    }
}

/// Disease susceptibility probabilities, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    /// Hypertension probability
    pub hypertension: f64,
    /// Type-2 diabetes probability
    pub diabetes_t2: f64,
}

impl RiskPrediction {
    /// Bands for `(hypertension, diabetes_t2)`
    #[must_use]
    pub fn bands(&self) -> (RiskBand, RiskBand) {
        (
            RiskBand::from_probability(self.hypertension),
            RiskBand::from_probability(self.diabetes_t2),
        )
    }
}

/// Advisory category, ordered as recommendations are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecommendationCategory {
    /// Energy balance advice (always present)
    Energy,
    /// Daily protein target (always present)
    Protein,
    /// Sodium reduction (high hypertension risk)
    Sodium,
    /// Meal timing (high diabetes risk or diagnosed diabetes)
    Timing,
    /// Step count (low activity)
    Activity,
    /// Sleep consolidation (short or long sleep)
    Sleep,
    /// One-line recap of the score and risks (always present)
    Summary,
}

impl RecommendationCategory {
    /// Category name as shown to users
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Protein => "Protein",
            Self::Sodium => "Sodium",
            Self::Timing => "Timing",
            Self::Activity => "Activity",
            Self::Sleep => "Sleep",
            Self::Summary => "Summary",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory strings keyed by category, iterated in category order
pub type Recommendations = BTreeMap<RecommendationCategory, String>;

/// Complete result of one pipeline evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Metabolic Efficiency Score in `[0, 100]`
    pub mes: f64,
    /// Scorer breakdown
    pub details: ScoreDetails,
    /// Disease susceptibility probabilities
    pub risk: RiskPrediction,
    /// Rule-based advice
    pub recommendations: Recommendations,
    /// Body mass index (0 when height is not positive)
    pub bmi: f64,
}

impl Assessment {
    /// Build the row a record store persists for this evaluation
    #[must_use]
    pub fn to_record(&self, inputs: &Inputs, timestamp: DateTime<Utc>) -> AssessmentRecord {
        AssessmentRecord {
            timestamp,
            age: inputs.age,
            sex: inputs.sex,
            height_cm: inputs.height_cm,
            weight_kg: inputs.weight_kg,
            steps: inputs.steps,
            sleep_hours: inputs.sleep_hours,
            calories_intake: inputs.calories_intake,
            muscle_percent: inputs.muscle_percent,
            bp_systolic: inputs.bp_systolic,
            fasting_glucose: inputs.fasting_glucose,
            sodium_mg: inputs.sodium_mg,
            flags: inputs.flags,
            mes: self.mes,
            hypertension: self.risk.hypertension,
            diabetes_t2: self.risk.diabetes_t2,
        }
    }
}

/// Row handed to a record store
///
/// The store assigns the auto-incrementing identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// When the evaluation was made
    pub timestamp: DateTime<Utc>,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Daily step count
    pub steps: u32,
    /// Nightly sleep in hours
    pub sleep_hours: f64,
    /// Daily energy intake in kcal
    pub calories_intake: f64,
    /// Skeletal muscle percentage
    pub muscle_percent: f64,
    /// Systolic blood pressure in mmHg
    pub bp_systolic: f64,
    /// Fasting plasma glucose in mg/dL
    pub fasting_glucose: f64,
    /// Daily sodium intake in mg
    pub sodium_mg: f64,
    /// Pre-existing conditions
    pub flags: ConditionFlags,
    /// Metabolic Efficiency Score
    pub mes: f64,
    /// Hypertension probability
    pub hypertension: f64,
    /// Type-2 diabetes probability
    pub diabetes_t2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(RiskBand::from_probability(0.0), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.329), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(0.33), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(0.659), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(0.66), RiskBand::High);
        assert_eq!(RiskBand::from_probability(1.0), RiskBand::High);
    }

    #[test]
    fn test_score_details_rounding() {
        let details = ScoreDetails {
            basal_rate: 1843.75,
            tdee: 2_185.992,
            intake_ratio: 1.372_399,
            base_score: 62.760_1,
            penalty: 22.0,
        };

        let rounded = details.rounded();
        assert!((rounded.basal_rate - 1843.8).abs() < 1e-9);
        assert!((rounded.tdee - 2186.0).abs() < 1e-9);
        assert!((rounded.intake_ratio - 1.37).abs() < 1e-9);
        assert!((rounded.base_score - 62.8).abs() < 1e-9);
        assert!((rounded.penalty - 22.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_recommendation_categories_enumerate_in_fixed_order() {
        let mut recommendations = Recommendations::new();
        recommendations.insert(RecommendationCategory::Summary, String::new());
        recommendations.insert(RecommendationCategory::Energy, String::new());
        recommendations.insert(RecommendationCategory::Sleep, String::new());

        let order: Vec<_> = recommendations.keys().map(|c| c.as_str()).collect();
        assert_eq!(order, vec!["Energy", "Sleep", "Summary"]);
    }
}
