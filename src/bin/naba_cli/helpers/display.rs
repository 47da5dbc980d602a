// ABOUTME: Output formatting helpers for naba-cli
// ABOUTME: Renders an assessment as a human-readable report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

use naba::models::Assessment;

/// Print a human-readable assessment report
pub fn display_assessment(assessment: &Assessment) {
    let (htn_band, t2d_band) = assessment.risk.bands();
    let details = assessment.details.rounded();

    println!("\nMetabolic Assessment");
    println!("{}", "=".repeat(50));
    println!("   MES: {:.0}/100", assessment.mes);
    println!(
        "   Hypertension risk: {:.2} ({htn_band})",
        assessment.risk.hypertension
    );
    println!(
        "   Type-2 diabetes risk: {:.2} ({t2d_band})",
        assessment.risk.diabetes_t2
    );
    println!("   BMI: {:.1}", assessment.bmi);

    println!("\nDetails:");
    println!("   Basal rate: {} kcal/day", details.basal_rate);
    println!("   TDEE: {} kcal/day", details.tdee);
    println!("   Intake ratio: {}", details.intake_ratio);
    println!("   Energy subscore: {}", details.base_score);
    println!("   Penalty: {}", details.penalty);

    println!("\nRecommendations:");
    for (category, advice) in &assessment.recommendations {
        println!("   {category}: {advice}");
    }
}
