// ABOUTME: Core data models for the NABA engine
// ABOUTME: Re-exports biometric inputs and evaluation result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

/// Evaluation results and the storage record contract
pub mod assessment;

/// Biometric inputs, sex, and condition flags
pub mod biometrics;

pub use assessment::{
    Assessment, AssessmentRecord, RecommendationCategory, Recommendations, RiskBand,
    RiskPrediction, ScoreDetails,
};
pub use biometrics::{ConditionFlag, ConditionFlags, Inputs, Sex};
