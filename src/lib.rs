// ABOUTME: Main library entry point for the PrepCoach nutrition service
// ABOUTME: Wires the pure engine to storage, logging, and the body-composition write path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

#![deny(unsafe_code)]

//! # PrepCoach
//!
//! Caller side of the nutrition auto-adjustment engine. The engine itself
//! lives in `prepcoach-intelligence` and is pure; this crate fetches client
//! history, invokes it, and conditionally writes new targets back.
//!
//! ## Architecture
//!
//! - **Intelligence**: the engine (re-exported from `prepcoach-intelligence`)
//! - **Database**: `ClientRepository` trait and an in-memory implementation
//! - **Services**: body-composition write path and on-demand suggestions
//! - **Logging**: `tracing-subscriber` setup from the environment
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use prepcoach::intelligence::{NutritionEngine, NutritionInput};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input: NutritionInput = serde_json::from_str(r#"{
//!     "gender": "male", "bodyWeight": 80.0, "goalType": "cut",
//!     "weeklyWeights": [{"week": 1, "avgWeight": 80.8}, {"week": 0, "avgWeight": 80.0}],
//!     "nutritionCompliance": 70, "avgDailyCalories": 2200, "trainingDaysPerWeek": 4
//! }"#)?;
//! let now = NaiveDate::from_ymd_opt(2025, 3, 1).ok_or("bad date")?;
//! let suggestion = NutritionEngine::default().suggest(&input, now)?;
//! println!("{}", suggestion.status_label);
//! # Ok(())
//! # }
//! ```

/// Client storage behind a repository interface
pub mod database;

/// Logging configuration and structured log events
pub mod logging;

/// Domain services around the engine
pub mod services;

/// Unified error handling (re-exported from `prepcoach-core`)
pub use prepcoach_core::errors;

/// Domain models (re-exported from `prepcoach-core`)
pub use prepcoach_core::models;

/// Application constants (re-exported from `prepcoach-core`)
pub use prepcoach_core::constants;

/// The nutrition engine (re-exported from `prepcoach-intelligence`)
pub use prepcoach_intelligence as intelligence;
