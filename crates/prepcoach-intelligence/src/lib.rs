// ABOUTME: Nutrition auto-adjustment and competition-prep engine
// ABOUTME: Pure, deterministic analysis from weight trend and compliance to macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

#![deny(unsafe_code)]

//! # PrepCoach Intelligence
//!
//! The engine takes already-fetched weight, compliance, and goal data and
//! returns a macro prescription, a goal-deadline assessment, and for
//! competitors a peak-week protocol. It has no database handle, performs no
//! I/O, and takes "now" as a parameter.
//!
//! ## Modules
//!
//! - **`trend_analysis`**: weekly bucketing, least-squares rate, projection
//! - **`tdee_estimator`**: energy-balance TDEE back-solve
//! - **`status_classifier`**: on track / plateau / off track banding
//! - **`macro_adjuster`**: calorie and macro targets, carb cycling, auto-apply
//! - **`deadline_planner`**: required deficit, safety level, cardio top-up
//! - **`peak_week`**: seven-day competition protocol
//! - **`nutrition_engine`**: the orchestrator
//! - **`config`**: engine coefficients with environment overrides

/// Engine configuration
pub mod config;

/// Physiological constants behind the configuration defaults
pub mod physiological_constants;

/// Weight trend analysis shared by the engine and chart callers
pub mod trend_analysis;

/// TDEE estimation from intake and trend
pub mod tdee_estimator;

/// Trend status classification
pub mod status_classifier;

/// Macro target adjustment and carb cycling
pub mod macro_adjuster;

/// Goal-deadline planning
pub mod deadline_planner;

/// Peak-week protocol generation
pub mod peak_week;

/// Suggestion orchestrator
pub mod nutrition_engine;

pub use config::IntelligenceConfig;
pub use deadline_planner::{DeadlineInfo, ProjectionVerdict, SafetyLevel};
pub use nutrition_engine::{
    generate_nutrition_suggestion, NutritionEngine, NutritionInput, Suggestion,
};
pub use peak_week::{PeakWeekDay, PeakWeekPhase};
pub use status_classifier::{NutritionStatus, OffTrackReason};
pub use trend_analysis::{TrajectoryPoint, TrendLine, WeeklyAverage};
