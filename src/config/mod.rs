// ABOUTME: Configuration management for NABA front-ends
// ABOUTME: Environment settings and intelligence configuration loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

/// Environment and engine settings
pub mod environment;

pub use environment::{load_intelligence_config, EngineSettings, Environment};
