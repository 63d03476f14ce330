// ABOUTME: Goal-deadline planner configuration
// ABOUTME: Safety bands for required deficits, diet deficit cap, and cardio/step conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Goal-Deadline Planner Configuration
//!
//! Thresholds for classifying how aggressive a required daily deficit is and
//! constants for converting an energy shortfall into cardio minutes or steps.

use crate::physiological_constants::deadline;
use serde::{Deserialize, Serialize};

/// Goal-deadline planner configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalPlannerConfig {
    /// Safety banding of the required daily deficit
    pub safety: SafetyBandsConfig,
    /// Conversion of an energy shortfall into activity
    pub activity: ActivityPrescriptionConfig,
    /// Distance from target still counted as on target (kg): 0.5
    pub projection_tolerance_kg: f64,
}

/// Safety banding of the required daily deficit (kcal/day, by magnitude)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SafetyBandsConfig {
    /// Deficit at which a plan is aggressive: 500
    pub aggressive_deficit_kcal: f64,
    /// Deficit at which a plan is extreme: 750
    pub extreme_deficit_kcal: f64,
    /// Largest deficit diet alone should carry, percent of TDEE: 25
    pub max_diet_deficit_percent: f64,
}

/// Conversion of an energy shortfall into cardio minutes and daily steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityPrescriptionConfig {
    /// Moderate cardio burn (kcal/min): 8
    pub cardio_kcal_per_minute: f64,
    /// Cap on prescribed cardio (minutes/day): 90
    pub max_cardio_minutes: u32,
    /// Walking burn per step (kcal): 0.04
    pub kcal_per_step: f64,
    /// Step baseline extra steps are added to: 8000
    pub baseline_daily_steps: u32,
}

impl Default for SafetyBandsConfig {
    fn default() -> Self {
        Self {
            aggressive_deficit_kcal: deadline::AGGRESSIVE_DEFICIT_KCAL,
            extreme_deficit_kcal: deadline::EXTREME_DEFICIT_KCAL,
            max_diet_deficit_percent: deadline::MAX_DIET_DEFICIT_PERCENT,
        }
    }
}

impl Default for ActivityPrescriptionConfig {
    fn default() -> Self {
        Self {
            cardio_kcal_per_minute: deadline::CARDIO_KCAL_PER_MINUTE,
            max_cardio_minutes: deadline::MAX_CARDIO_MINUTES,
            kcal_per_step: deadline::KCAL_PER_STEP,
            baseline_daily_steps: deadline::BASELINE_DAILY_STEPS,
        }
    }
}

impl Default for GoalPlannerConfig {
    fn default() -> Self {
        Self {
            safety: SafetyBandsConfig::default(),
            activity: ActivityPrescriptionConfig::default(),
            projection_tolerance_kg: deadline::PROJECTION_TOLERANCE_KG,
        }
    }
}
