// ABOUTME: Pure orchestrator that turns the nutrition input contract into a suggestion
// ABOUTME: Validates input, then runs trend, TDEE, status, macros, deadline, and peak week in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Nutrition Suggestion Engine
//!
//! `generate_nutrition_suggestion` performs no I/O and never reads the clock;
//! "now" is a parameter. Missing data is reported through the status and
//! warnings. Only malformed input returns an error.
//!
//! ```text
//! weekly weights -> trend -> (< 2 weeks: insufficient_data)
//!                         -> TDEE -> status -> macros -> deadline -> peak week
//! ```

use crate::config::intelligence::IntelligenceConfig;
use crate::deadline_planner::{plan_deadline, DeadlineContext, DeadlineInfo};
use crate::macro_adjuster::{adjust_macros, CalorieAction, MacroContext};
use crate::peak_week::{generate_peak_week, PeakWeekDay};
use crate::status_classifier::{
    classify_status, NutritionStatus, OffTrackReason, StatusAssessment,
};
use crate::tdee_estimator::estimate_tdee;
use crate::trend_analysis::{TrendLine, WeeklyAverage};
use chrono::NaiveDate;
use prepcoach_core::constants::limits::{
    MAX_PERCENT, MAX_PLAUSIBLE_WEIGHT_KG, MAX_TRAINING_DAYS_PER_WEEK,
};
use prepcoach_core::errors::{AppError, AppResult};
use prepcoach_core::models::{Field, Gender, GoalType, NutritionTargets, TargetUpdate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Input contract, assembled by the caller from already-persisted logs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInput {
    /// Gender, for calorie floors
    pub gender: Gender,
    /// Current body weight (kg)
    pub body_weight: f64,
    /// Goal of the current phase
    pub goal_type: GoalType,
    /// First day of the current diet phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_start_date: Option<NaiveDate>,
    /// Goal body weight (kg)
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub target_weight: Field<f64>,
    /// Goal date, also the competition date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Current calorie target
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub current_calories: Field<f64>,
    /// Current protein target
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub current_protein: Field<f64>,
    /// Current carbohydrate target
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub current_carbs: Field<f64>,
    /// Current fat target
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub current_fat: Field<f64>,
    /// Current training-day carbohydrate target
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub current_carbs_training_day: Field<f64>,
    /// Current rest-day carbohydrate target
    #[serde(default, skip_serializing_if = "Field::is_unknown")]
    pub current_carbs_rest_day: Field<f64>,
    /// Explicit carb cycling flag; derived from the day targets when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_cycling_enabled: Option<bool>,
    /// Weekly average weights, any order
    #[serde(default)]
    pub weekly_weights: Vec<WeeklyAverage>,
    /// 14-day compliance (0-100), absent when nothing was logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_compliance: Option<f64>,
    /// 14-day average logged calories
    #[serde(default)]
    pub avg_daily_calories: Option<f64>,
    /// Training days per week
    #[serde(default)]
    pub training_days_per_week: f64,
}

impl NutritionInput {
    /// Current targets as a profile-shaped value
    #[must_use]
    pub const fn current_targets(&self) -> NutritionTargets {
        NutritionTargets {
            calories: self.current_calories,
            protein: self.current_protein,
            carbs: self.current_carbs,
            fat: self.current_fat,
            carbs_training_day: self.current_carbs_training_day,
            carbs_rest_day: self.current_carbs_rest_day,
        }
    }

    /// Carb cycling is on when flagged, or when both day targets are set
    #[must_use]
    pub fn cycling_enabled(&self) -> bool {
        self.carbs_cycling_enabled
            .unwrap_or_else(|| self.current_targets().carbs_cycling_enabled())
    }

    /// Reject input that indicates an upstream data bug
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for impossible weights, percentages, or
    /// training days, and `InvalidInput` for duplicate weeks or a target date
    /// before the diet start.
    pub fn validate(&self) -> AppResult<()> {
        check_weight("bodyWeight", self.body_weight)?;
        if let Some(target) = self.target_weight.get() {
            check_weight("targetWeight", target)?;
        }

        let mut seen = HashSet::new();
        for entry in &self.weekly_weights {
            check_weight("weeklyWeights.avgWeight", entry.avg_weight)?;
            if !seen.insert(entry.week) {
                return Err(AppError::invalid_input(format!(
                    "weeklyWeights contains week {} more than once",
                    entry.week
                )));
            }
        }

        if let Some(compliance) = self.nutrition_compliance {
            if !compliance.is_finite() || !(0.0..=MAX_PERCENT).contains(&compliance) {
                return Err(AppError::value_out_of_range(format!(
                    "nutritionCompliance must be between 0 and 100, got {compliance}"
                )));
            }
        }
        if !self.training_days_per_week.is_finite()
            || !(0.0..=MAX_TRAINING_DAYS_PER_WEEK).contains(&self.training_days_per_week)
        {
            return Err(AppError::value_out_of_range(format!(
                "trainingDaysPerWeek must be between 0 and 7, got {}",
                self.training_days_per_week
            )));
        }
        if let Some(calories) = self.avg_daily_calories {
            check_non_negative("avgDailyCalories", calories)?;
        }

        let targets = self.current_targets();
        for (name, field) in [
            ("currentCalories", targets.calories),
            ("currentProtein", targets.protein),
            ("currentCarbs", targets.carbs),
            ("currentFat", targets.fat),
            ("currentCarbsTrainingDay", targets.carbs_training_day),
            ("currentCarbsRestDay", targets.carbs_rest_day),
        ] {
            if let Some(value) = field.get() {
                check_non_negative(name, value)?;
            }
        }

        if let (Some(start), Some(target)) = (self.diet_start_date, self.target_date) {
            if target < start {
                return Err(AppError::invalid_input(format!(
                    "targetDate {target} is before dietStartDate {start}"
                )));
            }
        }
        Ok(())
    }
}

fn check_weight(name: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 || value > MAX_PLAUSIBLE_WEIGHT_KG {
        return Err(AppError::value_out_of_range(format!(
            "{name} must be a positive weight up to {MAX_PLAUSIBLE_WEIGHT_KG} kg, got {value}"
        )));
    }
    Ok(())
}

fn check_non_negative(name: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::value_out_of_range(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Engine output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Trajectory status
    pub status: NutritionStatus,
    /// Fixed emoji for the status
    pub status_emoji: String,
    /// Fixed label for the status
    pub status_label: String,
    /// Human-readable explanation
    pub message: String,
    /// Reason when off track
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_track_reason: Option<OffTrackReason>,
    /// Whether the caller may write the suggested fields without review
    pub auto_apply: bool,
    /// Estimated TDEE (kcal/day)
    #[serde(rename = "estimatedTDEE")]
    pub estimated_tdee: Option<f64>,
    /// Weekly weight change (kg/week, signed)
    pub weekly_weight_change_rate: Option<f64>,
    /// New calorie target, or null to leave unchanged
    pub suggested_calories: Option<f64>,
    /// New protein target, or null to leave unchanged
    pub suggested_protein: Option<f64>,
    /// New carbohydrate target, or null to leave unchanged
    pub suggested_carbs: Option<f64>,
    /// New fat target, or null to leave unchanged
    pub suggested_fat: Option<f64>,
    /// New training-day carbohydrate target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_carbs_training_day: Option<f64>,
    /// New rest-day carbohydrate target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_carbs_rest_day: Option<f64>,
    /// Warnings for the coach
    pub warnings: Vec<String>,
    /// Goal-deadline assessment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_info: Option<DeadlineInfo>,
    /// Peak-week plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_week_plan: Option<Vec<PeakWeekDay>>,
}

impl Suggestion {
    fn with_status(status: NutritionStatus, message: String) -> Self {
        Self {
            status,
            status_emoji: status.emoji().to_owned(),
            status_label: status.label().to_owned(),
            message,
            off_track_reason: None,
            auto_apply: false,
            estimated_tdee: None,
            weekly_weight_change_rate: None,
            suggested_calories: None,
            suggested_protein: None,
            suggested_carbs: None,
            suggested_fat: None,
            suggested_carbs_training_day: None,
            suggested_carbs_rest_day: None,
            warnings: Vec::new(),
            deadline_info: None,
            peak_week_plan: None,
        }
    }

    /// Whether any target field carries a value
    #[must_use]
    pub const fn has_suggested_fields(&self) -> bool {
        self.suggested_calories.is_some()
            || self.suggested_protein.is_some()
            || self.suggested_carbs.is_some()
            || self.suggested_fat.is_some()
            || self.suggested_carbs_training_day.is_some()
            || self.suggested_carbs_rest_day.is_some()
    }

    /// The suggested fields as a partial target update
    #[must_use]
    pub const fn target_update(&self) -> TargetUpdate {
        TargetUpdate {
            calories: self.suggested_calories,
            protein: self.suggested_protein,
            carbs: self.suggested_carbs,
            fat: self.suggested_fat,
            carbs_training_day: self.suggested_carbs_training_day,
            carbs_rest_day: self.suggested_carbs_rest_day,
        }
    }
}

/// Generate a nutrition suggestion
///
/// # Errors
///
/// Returns an error only for malformed input (see [`NutritionInput::validate`]).
pub fn generate_nutrition_suggestion(
    input: &NutritionInput,
    now: NaiveDate,
    config: &IntelligenceConfig,
) -> AppResult<Suggestion> {
    input.validate()?;

    // Step 1: Trend over weekly averages
    let Some(trend) = TrendLine::from_weekly(&input.weekly_weights) else {
        return Ok(Suggestion::with_status(
            NutritionStatus::InsufficientData,
            "Log weigh-ins across at least two different weeks to unlock trend-based adjustments"
                .to_owned(),
        ));
    };
    let rate = trend.slope_per_week;
    let mut warnings = Vec::new();

    // Step 2: TDEE
    let tdee_estimate = estimate_tdee(input.avg_daily_calories, rate, &config.nutrition.energy);
    let tdee = tdee_estimate.value();
    warnings.extend(tdee_estimate.warning());

    // Step 3: Status
    let assessment = classify_status(
        input.goal_type,
        rate,
        input.body_weight,
        &config.nutrition.status_bands,
    );

    // Step 4: Macros
    let current = input.current_targets();
    let macros = adjust_macros(
        &MacroContext {
            goal: input.goal_type,
            gender: input.gender,
            body_weight: input.body_weight,
            assessment: &assessment,
            tdee,
            compliance: input.nutrition_compliance,
            training_days_per_week: input.training_days_per_week,
            carbs_cycling_enabled: input.cycling_enabled(),
            current: &current,
        },
        &config.nutrition,
    );
    if input.nutrition_compliance.is_none() {
        warnings.push("No nutrition logs in the last 14 days; compliance unknown".to_owned());
    }
    warnings.extend(macros.warnings);
    let update = macros.update;

    // Step 5: Goal deadline against the calorie target the client will follow
    let prescribed_calories = update
        .calories
        .or_else(|| current.calories.get())
        .or(input.avg_daily_calories);
    let deadline_info = match (input.target_weight.get(), input.target_date) {
        (Some(target_weight), Some(target_date)) => {
            let plan = plan_deadline(
                &DeadlineContext {
                    current_weight: input.body_weight,
                    target_weight,
                    target_date,
                    today: now,
                    tdee,
                    current_calories: current.calories.get(),
                    prescribed_calories,
                    calorie_floor: config.nutrition.calorie_floors.for_gender(input.gender),
                    trend: Some(&trend),
                },
                &config.goals,
                config.nutrition.energy.kcal_per_kg,
            );
            warnings.extend(plan.warnings);
            Some(plan.info)
        }
        _ => None,
    };

    // Step 6: Peak week
    let peak_week_plan = input.target_date.and_then(|target_date| {
        generate_peak_week(target_date, now, input.body_weight, &config.peak_week)
    });

    debug!(
        status = %assessment.status,
        rate,
        ?tdee,
        auto_apply = macros.auto_apply,
        goal_driven = deadline_info.is_some(),
        peak_week = peak_week_plan.is_some(),
        "Nutrition suggestion generated"
    );

    let mut suggestion = Suggestion::with_status(
        assessment.status,
        status_message(input.goal_type, &assessment, rate, macros.calorie_action),
    );
    suggestion.off_track_reason = assessment.reason;
    suggestion.auto_apply = macros.auto_apply;
    suggestion.estimated_tdee = tdee.map(f64::round);
    suggestion.weekly_weight_change_rate = Some((rate * 100.0).round() / 100.0);
    suggestion.suggested_calories = update.calories;
    suggestion.suggested_protein = update.protein;
    suggestion.suggested_carbs = update.carbs;
    suggestion.suggested_fat = update.fat;
    suggestion.suggested_carbs_training_day = update.carbs_training_day;
    suggestion.suggested_carbs_rest_day = update.carbs_rest_day;
    suggestion.warnings = warnings;
    suggestion.deadline_info = deadline_info;
    suggestion.peak_week_plan = peak_week_plan;
    Ok(suggestion)
}

fn status_message(
    goal: GoalType,
    assessment: &StatusAssessment,
    rate: f64,
    action: CalorieAction,
) -> String {
    let pace = format!(
        "{:+.2} kg/week ({:+.2}% of body weight)",
        rate, assessment.percent_per_week
    );
    let too_fast = assessment.reason == Some(OffTrackReason::TooFast);
    let observation = match (assessment.status, assessment.reason) {
        (NutritionStatus::InsufficientData, _) => {
            return "Not enough weigh-ins to judge the trend yet".to_owned();
        }
        (NutritionStatus::OnTrack, _) => {
            return match goal {
                GoalType::Cut => {
                    format!("Losing at a healthy pace: {pace}. Keep the current plan.")
                }
                GoalType::Bulk => {
                    format!("Gaining at a lean pace: {pace}. Keep the current plan.")
                }
                GoalType::Maintain => {
                    format!("Weight is stable: {pace}. Keep the current plan.")
                }
            };
        }
        (NutritionStatus::Plateau, _) => format!("Weight has stalled at {pace}."),
        (NutritionStatus::OffTrack, Some(OffTrackReason::WrongDirection)) => {
            format!("Weight is moving away from the goal: {pace}.")
        }
        (NutritionStatus::OffTrack, Some(OffTrackReason::TooSlow)) => {
            format!("Progress is slower than planned: {pace}.")
        }
        (NutritionStatus::OffTrack, Some(OffTrackReason::TooFast)) if goal == GoalType::Cut => {
            format!("Losing too fast to protect lean mass: {pace}.")
        }
        (NutritionStatus::OffTrack, Some(OffTrackReason::TooFast)) => {
            format!("Gaining faster than lean gains allow: {pace}.")
        }
        (NutritionStatus::OffTrack, _) => format!("Weight is drifting from maintenance: {pace}."),
    };

    let outcome = match action {
        CalorieAction::AdjustedFromTdee => match goal {
            GoalType::Cut if too_fast => "Calories raised for safety.",
            GoalType::Bulk if too_fast => "Surplus reduced.",
            GoalType::Maintain => "Calories reset to TDEE.",
            _ if assessment.status == NutritionStatus::Plateau => {
                "Calories adjusted to restart progress."
            }
            _ => "Calories adjusted.",
        },
        CalorieAction::AdjustedFromCurrent => {
            "Calorie target nudged from the current one; log intake for a TDEE-based adjustment."
        }
        CalorieAction::WithinTolerance => {
            "The recalculated calorie target matches the current one, so calories stay put."
        }
        CalorieAction::HeldForCompliance => "Calories are held until compliance improves.",
        CalorieAction::Unavailable => {
            "No calorie change is possible without a TDEE estimate or a current calorie target."
        }
        CalorieAction::NotNeeded => "Keep the current plan.",
    };
    format!("{observation} {outcome}")
}

/// Engine bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct NutritionEngine {
    config: IntelligenceConfig,
}

impl NutritionEngine {
    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn new(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Create an engine with the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(IntelligenceConfig::global().clone())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Generate a suggestion with this engine's configuration
    ///
    /// # Errors
    ///
    /// Returns an error only for malformed input.
    pub fn suggest(&self, input: &NutritionInput, now: NaiveDate) -> AppResult<Suggestion> {
        generate_nutrition_suggestion(input, now, &self.config)
    }
}
