// ABOUTME: Nutrition goal enums shared across the engine and caller
// ABOUTME: Gender for calorie floors and GoalType for trend direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use serde::{Deserialize, Serialize};

/// Gender, used for minimum safe calorie floors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (higher calorie floor)
    Male,
    /// Female (lower calorie floor)
    Female,
}

impl Gender {
    /// Parse gender from a loosely formatted string, defaulting to female
    ///
    /// The lower calorie floor is the conservative choice when unknown.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "man" => Self::Male,
            _ => Self::Female,
        }
    }
}

/// Body-weight goal of the current diet phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Lose weight (caloric deficit)
    #[serde(alias = "fat_loss", alias = "lose", alias = "weight_loss")]
    Cut,
    /// Gain weight (caloric surplus)
    #[serde(alias = "gain", alias = "muscle_gain")]
    Bulk,
    /// Hold weight steady
    #[serde(alias = "maintenance")]
    Maintain,
}

impl GoalType {
    /// Parse goal type from string, defaulting to maintenance
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cut" | "fat_loss" | "lose" | "weight_loss" => Self::Cut,
            "bulk" | "gain" | "muscle_gain" => Self::Bulk,
            _ => Self::Maintain,
        }
    }

    /// Sign of the intended weekly weight change (-1 cut, +1 bulk, 0 maintain)
    #[must_use]
    pub const fn direction(self) -> f64 {
        match self {
            Self::Cut => -1.0,
            Self::Bulk => 1.0,
            Self::Maintain => 0.0,
        }
    }
}
