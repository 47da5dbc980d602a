// ABOUTME: Re-exports command modules for naba-cli
// ABOUTME: Provides access to the assess and record commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

pub mod assess;
pub mod record;

use anyhow::Result;
use naba::config::EngineSettings;
use naba::logging::AppLogger;
use naba::models::{Assessment, Inputs};
use naba::MetabolicEngine;

/// Validate (when requested) and evaluate one set of inputs
fn evaluate(settings: &EngineSettings, inputs: &Inputs, validate: bool) -> Result<Assessment> {
    if validate {
        if let Err(e) = inputs.validate() {
            AppLogger::log_rejected_inputs(inputs, &e.message);
            return Err(e.into());
        }
    }

    let engine = MetabolicEngine::new(settings.intelligence.clone());
    let assessment = engine.evaluate(inputs);
    AppLogger::log_assessment(&assessment, "naba-cli");
    Ok(assessment)
}
