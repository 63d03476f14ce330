// ABOUTME: Configuration error types for engine coefficient validation
// ABOUTME: Defines error variants for invalid ranges, bad orderings, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Configuration error types for engine coefficient validation.

use prepcoach_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds that must be ordered are not (e.g., aggressive >= extreme)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Peak-week table does not follow the fixed phase order
    #[error("Invalid peak-week table: {0}")]
    InvalidPeakWeek(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
