// ABOUTME: Environment configuration for the NABA engine front-ends
// ABOUTME: Resolves deployment environment, config file location, and intelligence settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Environment-based configuration

use anyhow::{Context, Result};
use naba_intelligence::IntelligenceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Variable naming a JSON intelligence configuration file
pub const CONFIG_PATH_VAR: &str = "NABA_CONFIG_PATH";

/// Variable controlling input range validation in front-ends
pub const VALIDATE_INPUTS_VAR: &str = "NABA_VALIDATE_INPUTS";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Settings shared by every front-end
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Deployment environment
    pub environment: Environment,
    /// JSON intelligence configuration file, if any
    pub config_path: Option<PathBuf>,
    /// Reject inputs outside the accepted ranges before evaluating
    pub validate_inputs: bool,
    /// Coefficients and thresholds for the pipeline
    pub intelligence: IntelligenceConfig,
}

impl EngineSettings {
    /// Load settings from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value or the
    /// intelligence configuration cannot be loaded
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config_path(None)
    }

    /// Load settings from environment variables, with an explicit config
    /// file taking precedence over `NABA_CONFIG_PATH`
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value or the
    /// intelligence configuration cannot be loaded
    pub fn from_env_with_config_path(config_path: Option<PathBuf>) -> Result<Self> {
        let environment = env::var("ENVIRONMENT")
            .map_or_else(|_| Environment::default(), |v| Environment::from_str_or_default(&v));
        let config_path =
            config_path.or_else(|| env::var(CONFIG_PATH_VAR).ok().map(PathBuf::from));
        let validate_inputs = env_var_or(VALIDATE_INPUTS_VAR, "true")
            .parse()
            .with_context(|| format!("Invalid {VALIDATE_INPUTS_VAR} value"))?;

        let intelligence = load_intelligence_config(config_path.as_deref())?;

        Ok(Self {
            environment,
            config_path,
            validate_inputs,
            intelligence,
        })
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "environment={}, config={}, validate_inputs={}",
            self.environment,
            self.config_path
                .as_ref()
                .map_or_else(|| "defaults".to_owned(), |p| p.display().to_string()),
            self.validate_inputs
        )
    }
}

/// Load intelligence configuration from a JSON file or from defaults,
/// then apply `NABA_*` environment overrides and validate
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, an override
/// is malformed, or the result fails validation
pub fn load_intelligence_config(path: Option<&Path>) -> Result<IntelligenceConfig> {
    let base = match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let config = IntelligenceConfig::from_json_str(&json)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            info!(path = %path.display(), "Loaded intelligence configuration file");
            config
        }
        None => IntelligenceConfig::default(),
    };

    let config = base
        .apply_env_overrides()
        .context("Invalid intelligence environment override")?;
    config
        .validate()
        .context("Intelligence configuration failed validation")?;
    Ok(config)
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
