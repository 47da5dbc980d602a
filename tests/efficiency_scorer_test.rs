// ABOUTME: Integration tests for the Metabolic Efficiency Score
// ABOUTME: Covers the energy subscore, penalty table, clamping, and score details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use naba::efficiency_scorer::{compute_mes, condition_penalty, lifestyle_penalty};
use naba::models::{ConditionFlag, ConditionFlags, Inputs};
use naba::IntelligenceConfig;

mod common;

use common::{assert_close, healthy_inputs, scenario_inputs, worst_case_inputs};

fn score(inputs: &Inputs) -> (f64, naba::models::ScoreDetails) {
    let config = IntelligenceConfig::default();
    compute_mes(inputs, &config.energy, &config.scoring)
}

// ============================================================================
// ENERGY SUBSCORE
// ============================================================================

#[test]
fn test_scenario_details() {
    let (mes, details) = score(&scenario_inputs());

    assert_close(details.basal_rate, 1843.75, 1e-9);
    assert_close(details.tdee, 2185.992, 1e-6);
    assert_close(details.intake_ratio, 1.372_374_647, 1e-8);
    assert_close(details.base_score, 62.762_535, 1e-5);
    assert_close(details.penalty, 22.0, 1e-12);
    assert_close(mes, 40.762_535, 1e-5);
    assert_eq!(format!("{mes:.0}"), "41");
}

#[test]
fn test_energy_subscore_never_below_forty() {
    for calories in [500.0, 6000.0, 20_000.0] {
        let inputs = Inputs {
            calories_intake: calories,
            ..healthy_inputs()
        };
        let (_, details) = score(&inputs);
        assert!(details.base_score >= 40.0, "calories {calories}");
    }
}

#[test]
fn test_deficit_and_surplus_symmetric() {
    // TDEE for healthy_inputs is 2034.3; 10% either side loses 10 points
    let under = Inputs {
        calories_intake: 2034.3 * 0.9,
        ..healthy_inputs()
    };
    let over = Inputs {
        calories_intake: 2034.3 * 1.1,
        ..healthy_inputs()
    };

    assert_close(score(&under).1.base_score, 90.0, 1e-9);
    assert_close(score(&over).1.base_score, 90.0, 1e-9);
}

// ============================================================================
// PENALTY TABLE
// ============================================================================

#[test]
fn test_each_condition_weight() {
    let weights = IntelligenceConfig::default().scoring.condition_penalties;
    let expected = [
        (ConditionFlag::Diabetes, 6.0),
        (ConditionFlag::Hypertension, 3.0),
        (ConditionFlag::Dyslipidemia, 3.0),
        (ConditionFlag::Obesity, 4.0),
        (ConditionFlag::CortisolHigh, 2.0),
        (ConditionFlag::Insulin, 2.0),
    ];

    for (flag, weight) in expected {
        let flags = ConditionFlags::none().with(flag);
        assert_close(condition_penalty(&flags, &weights), weight, 1e-12);
    }
    assert_close(condition_penalty(&ConditionFlags::none(), &weights), 0.0, 1e-12);
}

#[test]
fn test_lifestyle_thresholds() {
    let config = IntelligenceConfig::default().scoring.lifestyle_penalties;
    let base = healthy_inputs();

    let cases = [
        (Inputs { steps: 4999, ..base }, 3.0),
        (Inputs { steps: 5000, ..base }, 0.0),
        (Inputs { sleep_hours: 5.99, ..base }, 1.0),
        (Inputs { sleep_hours: 9.5, ..base }, 1.0),
        (Inputs { sleep_hours: 9.49, ..base }, 0.0),
        (Inputs { muscle_percent: 24.99, ..base }, 2.0),
        (Inputs { muscle_percent: 25.0, ..base }, 0.0),
    ];

    for (inputs, expected) in cases {
        assert_close(lifestyle_penalty(&inputs, &config), expected, 1e-12);
    }
}

#[test]
fn test_penalty_ceiling_with_every_trigger() {
    // 20 from conditions plus 3 + 1 + 2 from lifestyle
    let (mes, details) = score(&worst_case_inputs());

    assert_close(details.penalty, 26.0, 1e-12);
    assert_close(details.penalty, IntelligenceConfig::default().scoring.max_penalty(), 1e-12);
    assert_close(details.base_score, 40.0, 1e-12);
    assert_close(mes, 14.0, 1e-12);
}

// ============================================================================
// CLAMPING
// ============================================================================

#[test]
fn test_score_clamped_at_zero() {
    let mut config = IntelligenceConfig::default();
    config.scoring.condition_penalties.diabetes = 80.0;

    let (mes, details) =
        compute_mes(&worst_case_inputs(), &config.energy, &config.scoring);
    assert!(details.base_score - details.penalty < 0.0);
    assert_eq!(mes.to_bits(), 0.0_f64.to_bits());
}

#[test]
fn test_score_bounds_across_inputs() {
    for inputs in [healthy_inputs(), scenario_inputs(), worst_case_inputs()] {
        let (mes, _) = score(&inputs);
        assert!((0.0..=100.0).contains(&mes), "mes {mes} out of range");
    }
}

#[test]
fn test_rounded_details() {
    let (_, details) = score(&scenario_inputs());
    let rounded = details.rounded();

    assert_close(rounded.basal_rate, 1843.8, 1e-9);
    assert_close(rounded.tdee, 2186.0, 1e-9);
    assert_close(rounded.intake_ratio, 1.37, 1e-9);
    assert_close(rounded.base_score, 62.8, 1e-9);
    assert_close(rounded.penalty, 22.0, 1e-12);
}
