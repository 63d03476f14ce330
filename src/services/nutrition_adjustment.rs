// ABOUTME: Caller-side nutrition adjustment: body-composition write path and on-demand suggestions
// ABOUTME: Builds the engine input from stored logs and applies auto-apply updates as partial writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Nutrition adjustment service
//!
//! The weigh-in is committed before the engine runs. Anything that fails
//! after that point is logged and reported as `adjusted: false`; it never
//! undoes or fails the save.

use crate::database::ClientRepository;
use crate::logging::NutritionLogger;
use chrono::{Duration, NaiveDate};
use prepcoach_core::errors::{AppError, AppResult};
use prepcoach_core::models::{
    BodyCompositionRecord, ClientProfile, NutritionLog, TargetField, TrainingSession,
    WeightSample,
};
use prepcoach_intelligence::config::IntelligenceConfig;
use prepcoach_intelligence::nutrition_engine::{NutritionEngine, NutritionInput, Suggestion};
use prepcoach_intelligence::trend_analysis::{
    project_trajectory, weekly_averages, TrajectoryPoint,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Days of history fetched before invoking the engine
pub const HISTORY_WINDOW_DAYS: i64 = 30;

/// Trailing window for compliance, intake, and training frequency
pub const COMPLIANCE_WINDOW_DAYS: i64 = 14;

/// Outcome of the conditional target write
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAdjusted {
    /// Whether any target was written
    pub adjusted: bool,
    /// Fields written, in contract order
    pub applied_fields: Vec<TargetField>,
}

/// Response of the body-composition write path
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BodyCompositionResponse {
    /// The saved record
    pub record: BodyCompositionRecord,
    /// Full suggestion, present whenever the engine ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// What was written to the profile
    pub nutrition_adjusted: NutritionAdjusted,
    /// Why auto-apply did or did not happen
    pub debug: String,
}

/// Metadata echoed with on-demand suggestions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionMeta {
    /// Goal body weight on the profile
    pub target_weight: Option<f64>,
}

/// Response of the on-demand read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSuggestionsResponse {
    /// Freshly computed suggestion
    pub suggestion: Suggestion,
    /// Profile metadata
    pub meta: SuggestionMeta,
}

/// Assemble the engine input contract from a profile and raw logs
///
/// Weekly averages use the configured window ending on `now`. Compliance,
/// average intake, and training frequency use the trailing 14 days; training
/// days per week is the 14-day session count halved.
#[must_use]
pub fn build_nutrition_input(
    profile: &ClientProfile,
    weights: &[WeightSample],
    nutrition_logs: &[NutritionLog],
    training_sessions: &[TrainingSession],
    now: NaiveDate,
    config: &IntelligenceConfig,
) -> NutritionInput {
    let in_window =
        |date: NaiveDate| (0..COMPLIANCE_WINDOW_DAYS).contains(&(now - date).num_days());

    let recent_logs: Vec<&NutritionLog> = nutrition_logs
        .iter()
        .filter(|log| in_window(log.date))
        .collect();
    let nutrition_compliance = (!recent_logs.is_empty()).then(|| {
        let compliant = recent_logs.iter().filter(|log| log.compliant).count();
        (compliant as f64 / recent_logs.len() as f64 * 100.0).round()
    });

    let calories: Vec<f64> = recent_logs.iter().filter_map(|log| log.calories).collect();
    let avg_daily_calories =
        (!calories.is_empty()).then(|| calories.iter().sum::<f64>() / calories.len() as f64);

    let sessions = training_sessions
        .iter()
        .filter(|session| in_window(session.date))
        .count();
    let training_days_per_week = (sessions as f64 / 2.0).min(7.0);

    let body_weight = weights
        .iter()
        .filter(|w| w.date <= now)
        .max_by_key(|w| w.date)
        .map_or(profile.body_weight, |w| w.weight);

    let targets = profile.targets;
    NutritionInput {
        gender: profile.gender,
        body_weight,
        goal_type: profile.goal_type,
        diet_start_date: profile.diet_start_date,
        target_weight: profile.target_weight.into(),
        target_date: profile.target_date,
        current_calories: targets.calories,
        current_protein: targets.protein,
        current_carbs: targets.carbs,
        current_fat: targets.fat,
        current_carbs_training_day: targets.carbs_training_day,
        current_carbs_rest_day: targets.carbs_rest_day,
        carbs_cycling_enabled: Some(targets.carbs_cycling_enabled()),
        weekly_weights: weekly_averages(weights, now, config.nutrition.trend.weeks_in_window),
        nutrition_compliance,
        avg_daily_calories,
        training_days_per_week,
    }
}

/// Nutrition adjustment service over a client repository
pub struct NutritionAdjustmentService<R: ClientRepository> {
    repository: Arc<R>,
    engine: NutritionEngine,
}

impl<R: ClientRepository> NutritionAdjustmentService<R> {
    /// Create a service with an explicit engine
    #[must_use]
    pub const fn new(repository: Arc<R>, engine: NutritionEngine) -> Self {
        Self { repository, engine }
    }

    /// Repository handle
    #[must_use]
    pub const fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Save a body-composition record, then run the engine and conditionally apply
    ///
    /// # Errors
    ///
    /// Returns an error only when the record itself cannot be saved.
    pub async fn record_body_composition(
        &self,
        record: BodyCompositionRecord,
        now: NaiveDate,
    ) -> AppResult<BodyCompositionResponse> {
        let client_id = record.client_id;
        let saved = self.repository.save_body_composition(record).await?;

        if saved.weight.is_none() {
            return Ok(BodyCompositionResponse {
                record: saved,
                suggestion: None,
                nutrition_adjusted: NutritionAdjusted::default(),
                debug: "No weight on the record; nutrition engine not run".to_owned(),
            });
        }

        let suggestion = match self.compute(client_id, now).await {
            Ok((_, suggestion)) => suggestion,
            Err(e) => {
                NutritionLogger::log_absorbed_failure(client_id, "suggestion", &e);
                return Ok(BodyCompositionResponse {
                    record: saved,
                    suggestion: None,
                    nutrition_adjusted: NutritionAdjusted::default(),
                    debug: format!("Nutrition engine failed: {e}"),
                });
            }
        };

        let (nutrition_adjusted, debug) = self.apply_if_allowed(client_id, &suggestion).await;
        Ok(BodyCompositionResponse {
            record: saved,
            suggestion: Some(suggestion),
            nutrition_adjusted,
            debug,
        })
    }

    /// Recompute the suggestion for a client without persisting anything
    ///
    /// # Errors
    ///
    /// Returns an error if the client does not exist, storage fails, or the
    /// stored data is malformed.
    pub async fn nutrition_suggestions(
        &self,
        client_id: Uuid,
        now: NaiveDate,
    ) -> AppResult<NutritionSuggestionsResponse> {
        let (profile, suggestion) = self.compute(client_id, now).await?;
        Ok(NutritionSuggestionsResponse {
            suggestion,
            meta: SuggestionMeta {
                target_weight: profile.target_weight,
            },
        })
    }

    /// Projected weight series for chart callers, from the shared trend analyzer
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails or `step_days` is zero.
    pub async fn weight_trajectory(
        &self,
        client_id: Uuid,
        now: NaiveDate,
        until: NaiveDate,
        step_days: u32,
    ) -> AppResult<Vec<TrajectoryPoint>> {
        let since = now - Duration::days(HISTORY_WINDOW_DAYS);
        let weights = self.repository.list_weights(client_id, since).await?;
        let trend = &self.engine.config().nutrition.trend;
        project_trajectory(
            &weights,
            now,
            until,
            step_days,
            trend.moving_average_window,
            trend.projection_points,
        )
    }

    /// Fetch the history window, build the input, and run the engine
    async fn compute(
        &self,
        client_id: Uuid,
        now: NaiveDate,
    ) -> AppResult<(ClientProfile, Suggestion)> {
        let profile = self
            .repository
            .get_profile(client_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("client profile {client_id}")))?;

        let since = now - Duration::days(HISTORY_WINDOW_DAYS);
        let weights = self.repository.list_weights(client_id, since).await?;
        let nutrition_logs = self.repository.list_nutrition_logs(client_id, since).await?;
        let training_sessions = self
            .repository
            .list_training_sessions(client_id, since)
            .await?;

        let input = build_nutrition_input(
            &profile,
            &weights,
            &nutrition_logs,
            &training_sessions,
            now,
            self.engine.config(),
        );
        let suggestion = self.engine.suggest(&input, now)?;
        Ok((profile, suggestion))
    }

    /// Write the suggested fields when the engine allows it
    async fn apply_if_allowed(
        &self,
        client_id: Uuid,
        suggestion: &Suggestion,
    ) -> (NutritionAdjusted, String) {
        let status = suggestion.status.as_str();
        let reason = if !suggestion.auto_apply {
            format!("autoApply=false (status={status}); suggestion surfaced for review only")
        } else if !suggestion.has_suggested_fields() {
            format!("autoApply=true (status={status}) but no field changed enough to write")
        } else {
            match self
                .repository
                .update_targets(client_id, &suggestion.target_update())
                .await
            {
                Ok(applied) => {
                    let names: Vec<String> = applied.iter().map(ToString::to_string).collect();
                    let debug = format!(
                        "autoApply=true (status={status}); applied {}",
                        names.join(", ")
                    );
                    NutritionLogger::log_auto_apply_decision(
                        client_id, status, true, &names, &debug,
                    );
                    return (
                        NutritionAdjusted {
                            adjusted: !applied.is_empty(),
                            applied_fields: applied,
                        },
                        debug,
                    );
                }
                Err(e) => {
                    NutritionLogger::log_absorbed_failure(client_id, "apply", &e);
                    format!("autoApply=true (status={status}) but writing targets failed: {e}")
                }
            }
        };

        NutritionLogger::log_auto_apply_decision(
            client_id,
            status,
            suggestion.auto_apply,
            &[],
            &reason,
        );
        (NutritionAdjusted::default(), reason)
    }
}
