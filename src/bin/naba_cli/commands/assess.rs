// ABOUTME: Assess command for naba-cli
// ABOUTME: Evaluates inputs and prints the assessment as text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

use anyhow::Result;
use naba::config::EngineSettings;
use naba::models::Inputs;

use crate::helpers::display::display_assessment;
use crate::OutputFormat;

/// Evaluate and print an assessment
pub fn run(
    settings: &EngineSettings,
    inputs: &Inputs,
    format: OutputFormat,
    validate: bool,
) -> Result<()> {
    let assessment = super::evaluate(settings, inputs, validate)?;

    match format {
        OutputFormat::Text => display_assessment(&assessment),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
    }

    Ok(())
}
