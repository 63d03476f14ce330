// ABOUTME: Raw log records the caller persists before invoking the engine
// ABOUTME: Weigh-ins, daily nutrition entries, training sessions, body-composition records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single dated body-weight measurement.
///
/// Samples may be sparse. Missing days are absent, never zero-filled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightSample {
    /// Day of the weigh-in
    pub date: NaiveDate,
    /// Body weight (kg)
    pub weight: f64,
}

impl WeightSample {
    /// Create a new sample
    #[must_use]
    pub const fn new(date: NaiveDate, weight: f64) -> Self {
        Self { date, weight }
    }
}

/// One logged nutrition day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLog {
    /// Day the log covers
    pub date: NaiveDate,
    /// Calories eaten, when the client logged them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Whether the coach or client marked the day as on-plan
    pub compliant: bool,
}

/// One logged training session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainingSession {
    /// Day of the session
    pub date: NaiveDate,
}

/// A body-composition entry written by the client or coach
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionRecord {
    /// Record identifier, assigned on save
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Client the record belongs to
    pub client_id: Uuid,
    /// Measurement day
    pub date: NaiveDate,
    /// Body weight (kg), when measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Body fat percentage, when measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BodyCompositionRecord {
    /// The weigh-in carried by this record, if a weight was provided
    #[must_use]
    pub fn weight_sample(&self) -> Option<WeightSample> {
        self.weight.map(|weight| WeightSample::new(self.date, weight))
    }
}
