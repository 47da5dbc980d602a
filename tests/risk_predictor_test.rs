// ABOUTME: Integration tests for hypertension and type-2 diabetes risk probabilities
// ABOUTME: Covers reference values, monotonicity, bounds at extremes, and risk bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use naba::models::{Inputs, RiskBand, RiskPrediction};
use naba::risk_predictor::{diabetes_logit, hypertension_logit, logistic, predict_dsi};
use naba::IntelligenceConfig;

mod common;

use common::{assert_close, healthy_inputs, scenario_inputs};

const SCENARIO_MES: f64 = 40.762_535_270_028_42;

fn predict(inputs: &Inputs, mes: f64) -> RiskPrediction {
    predict_dsi(inputs, mes, &IntelligenceConfig::default().risk)
}

// ============================================================================
// REFERENCE VALUES
// ============================================================================

#[test]
fn test_scenario_logits() {
    let config = IntelligenceConfig::default().risk;
    let inputs = scenario_inputs();

    // -2 + 1.75 + 0.02*(140 - mes) + 0 - 0.6
    assert_close(
        hypertension_logit(&inputs, SCENARIO_MES, &config.hypertension),
        1.134_749_29,
        1e-7,
    );
    // -1.6 + 0.1 + 0.02*(90 - mes) - 0.45
    assert_close(
        diabetes_logit(&inputs, SCENARIO_MES, &config.diabetes_t2),
        -0.965_250_71,
        1e-7,
    );
}

#[test]
fn test_scenario_probabilities() {
    let risk = predict(&scenario_inputs(), SCENARIO_MES);

    assert_close(risk.hypertension, 0.756_714_3, 1e-6);
    assert_close(risk.diabetes_t2, 0.275_828_1, 1e-6);
    assert_eq!(risk.bands(), (RiskBand::High, RiskBand::Low));
}

#[test]
fn test_blood_pressure_only_counts_below_reference() {
    let config = IntelligenceConfig::default().risk;
    let high_bp = Inputs {
        bp_systolic: 180.0,
        ..scenario_inputs()
    };
    let at_reference = Inputs {
        bp_systolic: 140.0,
        ..scenario_inputs()
    };

    let a = hypertension_logit(&high_bp, 50.0, &config.hypertension);
    let b = hypertension_logit(&at_reference, 50.0, &config.hypertension);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn test_glucose_below_reference_contributes_nothing() {
    let config = IntelligenceConfig::default().risk;
    let low = Inputs {
        fasting_glucose: 70.0,
        ..healthy_inputs()
    };
    let at_reference = Inputs {
        fasting_glucose: 100.0,
        ..healthy_inputs()
    };

    let a = diabetes_logit(&low, 80.0, &config.diabetes_t2);
    let b = diabetes_logit(&at_reference, 80.0, &config.diabetes_t2);
    assert_eq!(a.to_bits(), b.to_bits());
}

// ============================================================================
// MONOTONICITY
// ============================================================================

#[test]
fn test_sodium_never_lowers_hypertension_risk() {
    let mut previous = 0.0;
    for sodium in (0..=8000).step_by(250) {
        let inputs = Inputs {
            sodium_mg: f64::from(sodium),
            ..scenario_inputs()
        };
        let risk = predict(&inputs, 60.0).hypertension;
        assert!(risk >= previous, "sodium {sodium}: {risk} < {previous}");
        previous = risk;
    }
}

#[test]
fn test_glucose_never_lowers_diabetes_risk() {
    let mut previous = 0.0;
    for glucose in (100..=300).step_by(10) {
        let inputs = Inputs {
            fasting_glucose: f64::from(glucose),
            ..scenario_inputs()
        };
        let risk = predict(&inputs, 60.0).diabetes_t2;
        assert!(risk >= previous, "glucose {glucose}: {risk} < {previous}");
        previous = risk;
    }
}

#[test]
fn test_steps_never_raise_either_risk() {
    let mut previous = predict(&Inputs { steps: 0, ..scenario_inputs() }, 60.0);
    for steps in (1000..=40_000).step_by(1000) {
        let risk = predict(&Inputs { steps, ..scenario_inputs() }, 60.0);
        assert!(risk.hypertension <= previous.hypertension, "steps {steps}");
        assert!(risk.diabetes_t2 <= previous.diabetes_t2, "steps {steps}");
        previous = risk;
    }
}

// ============================================================================
// BOUNDS
// ============================================================================

#[test]
fn test_probabilities_bounded_at_extremes() {
    let extreme_high = Inputs {
        sodium_mg: 1.0e9,
        fasting_glucose: 1.0e9,
        steps: 0,
        ..scenario_inputs()
    };
    let extreme_low = Inputs {
        sodium_mg: 0.0,
        fasting_glucose: 0.0,
        steps: u32::MAX,
        bp_systolic: 1.0e9,
        ..healthy_inputs()
    };

    for (inputs, mes) in [(extreme_high, 0.0), (extreme_low, 100.0)] {
        let risk = predict(&inputs, mes);
        assert!((0.0..=1.0).contains(&risk.hypertension));
        assert!((0.0..=1.0).contains(&risk.diabetes_t2));
    }
}

#[test]
fn test_logistic_overflow_stays_in_range() {
    assert_eq!(logistic(f64::INFINITY).to_bits(), 1.0_f64.to_bits());
    assert_eq!(logistic(f64::NEG_INFINITY).to_bits(), 0.0_f64.to_bits());
    assert_eq!(logistic(-800.0).to_bits(), 0.0_f64.to_bits());
}

#[test]
fn test_nan_mes_clamps_to_zero() {
    let risk = predict(&scenario_inputs(), f64::NAN);
    assert_eq!(risk.hypertension.to_bits(), 0.0_f64.to_bits());
    assert_eq!(risk.diabetes_t2.to_bits(), 0.0_f64.to_bits());
}

// ============================================================================
// RISK BANDS
// ============================================================================

#[test]
fn test_risk_band_cut_offs() {
    assert_eq!(RiskBand::from_probability(0.0), RiskBand::Low);
    assert_eq!(RiskBand::from_probability(0.329), RiskBand::Low);
    assert_eq!(RiskBand::from_probability(0.33), RiskBand::Moderate);
    assert_eq!(RiskBand::from_probability(0.659), RiskBand::Moderate);
    assert_eq!(RiskBand::from_probability(0.66), RiskBand::High);
    assert_eq!(RiskBand::from_probability(1.0), RiskBand::High);
}
