// ABOUTME: Core types and constants for the NABA metabolic efficiency engine
// ABOUTME: Foundation crate with error handling, biometric models, and input ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

#![deny(unsafe_code)]

//! # NABA Core
//!
//! Foundation crate providing shared types and constants for the NABA
//! metabolic efficiency engine. Nothing here performs any scoring; the
//! formula layer lives in `naba-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Accepted input ranges and risk band cut-offs
//! - **models**: Biometric inputs, condition flags, and evaluation results

/// Unified error handling system with standard error codes
pub mod errors;

/// Input ranges and display cut-offs organized by domain
pub mod constants;

/// Core data models (`Inputs`, `ConditionFlags`, `Assessment`, etc.)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
