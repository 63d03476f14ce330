// ABOUTME: Client goal profile and nutrition targets with partial-update semantics
// ABOUTME: TargetUpdate carries only the fields the engine decided to change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use super::{Field, Gender, GoalType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A client's diet goal and current prescription, as stored by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Client identifier
    pub client_id: Uuid,
    /// Gender, for calorie floors
    pub gender: Gender,
    /// Most recent body weight on the profile (kg)
    pub body_weight: f64,
    /// Goal of the current diet phase
    pub goal_type: GoalType,
    /// First day of the current diet phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_start_date: Option<NaiveDate>,
    /// Goal body weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    /// Goal date, also the competition date for competitors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Current nutrition targets
    #[serde(default)]
    pub targets: NutritionTargets,
}

/// Current daily nutrition targets; each one independently may be unset
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargets {
    /// Daily calories (kcal)
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub calories: Field<f64>,
    /// Daily protein (g)
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub protein: Field<f64>,
    /// Daily carbohydrates (g)
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub carbs: Field<f64>,
    /// Daily fat (g)
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub fat: Field<f64>,
    /// Carbohydrates on training days (g)
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub carbs_training_day: Field<f64>,
    /// Carbohydrates on rest days (g)
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub carbs_rest_day: Field<f64>,
}

impl NutritionTargets {
    /// Carb cycling is on iff both day-type carb targets are set
    #[must_use]
    pub const fn carbs_cycling_enabled(&self) -> bool {
        self.carbs_training_day.is_set() && self.carbs_rest_day.is_set()
    }

    /// Overwrite only the fields present in `update`, returning what changed
    pub fn apply(&mut self, update: &TargetUpdate) -> Vec<TargetField> {
        let mut applied = Vec::new();
        for (field, value) in update.present_fields() {
            *self.slot_mut(field) = Field::Value(value);
            applied.push(field);
        }
        applied
    }

    fn slot_mut(&mut self, field: TargetField) -> &mut Field<f64> {
        match field {
            TargetField::Calories => &mut self.calories,
            TargetField::Protein => &mut self.protein,
            TargetField::Carbs => &mut self.carbs,
            TargetField::Fat => &mut self.fat,
            TargetField::CarbsTrainingDay => &mut self.carbs_training_day,
            TargetField::CarbsRestDay => &mut self.carbs_rest_day,
        }
    }
}

/// Names of the individually writable target fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TargetField {
    /// Daily calories
    Calories,
    /// Daily protein
    Protein,
    /// Daily carbohydrates
    Carbs,
    /// Daily fat
    Fat,
    /// Training-day carbohydrates
    CarbsTrainingDay,
    /// Rest-day carbohydrates
    CarbsRestDay,
}

impl TargetField {
    /// Field name as used in the JSON contract
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::CarbsTrainingDay => "carbsTrainingDay",
            Self::CarbsRestDay => "carbsRestDay",
        }
    }
}

impl fmt::Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A partial update of nutrition targets; `None` means "leave as is"
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetUpdate {
    /// New daily calories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// New daily protein
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// New daily carbohydrates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// New daily fat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// New training-day carbohydrates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_training_day: Option<f64>,
    /// New rest-day carbohydrates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_rest_day: Option<f64>,
}

impl TargetUpdate {
    /// Fields carrying a value, in contract order
    #[must_use]
    pub fn present_fields(&self) -> Vec<(TargetField, f64)> {
        [
            (TargetField::Calories, self.calories),
            (TargetField::Protein, self.protein),
            (TargetField::Carbs, self.carbs),
            (TargetField::Fat, self.fat),
            (TargetField::CarbsTrainingDay, self.carbs_training_day),
            (TargetField::CarbsRestDay, self.carbs_rest_day),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    /// True when no field would be written
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
            && self.carbs_training_day.is_none()
            && self.carbs_rest_day.is_none()
    }
}
