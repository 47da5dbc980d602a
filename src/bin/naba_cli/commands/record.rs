// ABOUTME: Record command for naba-cli
// ABOUTME: Evaluates inputs and prints the timestamped storage record as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

use anyhow::Result;
use chrono::Utc;
use naba::config::EngineSettings;
use naba::models::Inputs;
use tracing::info;

/// Evaluate and print the record a store would persist
pub fn run(settings: &EngineSettings, inputs: &Inputs, validate: bool) -> Result<()> {
    let assessment = super::evaluate(settings, inputs, validate)?;
    let record = assessment.to_record(inputs, Utc::now());

    info!(timestamp = %record.timestamp, "Built assessment record");
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
