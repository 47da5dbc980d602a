// ABOUTME: NABA CLI - command-line front-end for the metabolic efficiency engine
// ABOUTME: Parses biometric inputs, evaluates them, and prints an assessment or storage record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA
//!
//! Usage:
//! ```bash
//! # Human-readable assessment
//! naba-cli assess --age 41 --sex M --height-cm 175 --weight-kg 95 --steps 3000 \
//!     --sleep-hours 10 --calories-intake 3000 --muscle-percent 20 --bp-systolic 142 \
//!     --fasting-glucose 110 --sodium-mg 3500 --diabetes --hypertension --dyslipidemia --obesity
//!
//! # Full assessment as JSON
//! naba-cli assess ... --format json
//!
//! # Record row for a storage collaborator
//! naba-cli record ...
//!
//! # Custom coefficients
//! naba-cli --config naba.json assess ...
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use naba::config::EngineSettings;
use naba::logging::{AppLogger, LoggingConfig};
use naba::models::{ConditionFlags, Inputs, Sex};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "naba-cli",
    version,
    about = "NABA Metabolic Efficiency Score CLI",
    long_about = "Computes the Metabolic Efficiency Score, hypertension and type-2 diabetes risk, and recommendations from biometric inputs."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON intelligence configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Evaluate inputs and print the assessment
    Assess {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Skip input range validation
        #[arg(long)]
        no_validate: bool,
    },

    /// Evaluate inputs and print the storage record as JSON
    Record {
        #[command(flatten)]
        inputs: InputArgs,

        /// Skip input range validation
        #[arg(long)]
        no_validate: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full assessment as JSON
    Json,
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Age in years (14-100)
    #[arg(long)]
    age: u32,

    /// Sex code: M for male, anything else is treated as female
    #[arg(long)]
    sex: String,

    /// Height in centimeters
    #[arg(long)]
    height_cm: f64,

    /// Weight in kilograms
    #[arg(long)]
    weight_kg: f64,

    /// Daily step count
    #[arg(long)]
    steps: u32,

    /// Sleep per night in hours
    #[arg(long)]
    sleep_hours: f64,

    /// Daily energy intake in kcal
    #[arg(long)]
    calories_intake: f64,

    /// Muscle mass percentage
    #[arg(long)]
    muscle_percent: f64,

    /// Systolic blood pressure in mmHg
    #[arg(long)]
    bp_systolic: f64,

    /// Fasting glucose in mg/dL
    #[arg(long)]
    fasting_glucose: f64,

    /// Daily sodium in mg
    #[arg(long)]
    sodium_mg: f64,

    /// Diagnosed diabetes
    #[arg(long)]
    diabetes: bool,

    /// Diagnosed hypertension
    #[arg(long)]
    hypertension: bool,

    /// Dyslipidemia
    #[arg(long)]
    dyslipidemia: bool,

    /// Obesity
    #[arg(long)]
    obesity: bool,

    /// Elevated cortisol
    #[arg(long)]
    cortisol_high: bool,

    /// On insulin therapy
    #[arg(long)]
    insulin: bool,
}

impl InputArgs {
    fn to_inputs(&self) -> Inputs {
        Inputs {
            age: self.age,
            sex: Sex::from_code(&self.sex),
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            steps: self.steps,
            sleep_hours: self.sleep_hours,
            calories_intake: self.calories_intake,
            muscle_percent: self.muscle_percent,
            bp_systolic: self.bp_systolic,
            fasting_glucose: self.fasting_glucose,
            sodium_mg: self.sodium_mg,
            flags: ConditionFlags {
                diabetes: self.diabetes,
                hypertension: self.hypertension,
                dyslipidemia: self.dyslipidemia,
                obesity: self.obesity,
                cortisol_high: self.cortisol_high,
                insulin: self.insulin,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env().with_level(log_level).init()?;

    let settings = EngineSettings::from_env_with_config_path(cli.config)?;
    AppLogger::log_config_source(&settings.summary());

    match cli.command {
        Command::Assess {
            inputs,
            format,
            no_validate,
        } => {
            let inputs = inputs.to_inputs();
            let validate = settings.validate_inputs && !no_validate;
            debug!(?format, validate, "Running assess command");
            commands::assess::run(&settings, &inputs, format, validate)?;
        }
        Command::Record {
            inputs,
            no_validate,
        } => {
            let inputs = inputs.to_inputs();
            let validate = settings.validate_inputs && !no_validate;
            debug!(validate, "Running record command");
            commands::record::run(&settings, &inputs, validate)?;
        }
    }

    Ok(())
}
