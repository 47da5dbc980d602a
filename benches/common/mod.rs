// ABOUTME: Common benchmark utilities and input fixtures for performance testing
// ABOUTME: Provides deterministic biometric input generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NABA

//! Common benchmark utilities and input fixtures.

pub mod fixtures;
