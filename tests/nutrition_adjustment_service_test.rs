// ABOUTME: Integration tests for the body-composition write path and on-demand suggestions
// ABOUTME: Covers input assembly, conditional target writes, and absorption of downstream failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{
    cut_profile, days_from_today, init_test_logging, plateau_repository, today, weigh_in,
};
use prepcoach::database::{ClientRepository, DatabaseError, InMemoryClientRepository};
use prepcoach::errors::ErrorCode;
use prepcoach::intelligence::{IntelligenceConfig, NutritionEngine, NutritionStatus};
use prepcoach::models::{
    BodyCompositionRecord, ClientProfile, Field, NutritionLog, TargetField, TargetUpdate,
    TrainingSession, WeightSample,
};
use prepcoach::services::{build_nutrition_input, NutritionAdjustmentService};
use std::sync::Arc;
use uuid::Uuid;

fn service<R: ClientRepository>(repository: Arc<R>) -> NutritionAdjustmentService<R> {
    NutritionAdjustmentService::new(repository, NutritionEngine::default())
}

/// Delegates to an in-memory store but fails selected operations
struct FlakyRepository {
    inner: InMemoryClientRepository,
    fail_reads: bool,
    fail_target_writes: bool,
}

impl FlakyRepository {
    fn failure(operation: &str) -> DatabaseError {
        DatabaseError::QueryError {
            context: format!("{operation}: connection reset"),
        }
    }
}

#[async_trait]
impl ClientRepository for FlakyRepository {
    async fn upsert_profile(&self, profile: ClientProfile) -> Result<(), DatabaseError> {
        self.inner.upsert_profile(profile).await
    }

    async fn get_profile(&self, client_id: Uuid) -> Result<Option<ClientProfile>, DatabaseError> {
        self.inner.get_profile(client_id).await
    }

    async fn update_targets(
        &self,
        client_id: Uuid,
        update: &TargetUpdate,
    ) -> Result<Vec<TargetField>, DatabaseError> {
        if self.fail_target_writes {
            return Err(Self::failure("update_targets"));
        }
        self.inner.update_targets(client_id, update).await
    }

    async fn save_body_composition(
        &self,
        record: BodyCompositionRecord,
    ) -> Result<BodyCompositionRecord, DatabaseError> {
        self.inner.save_body_composition(record).await
    }

    async fn list_weights(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<WeightSample>, DatabaseError> {
        if self.fail_reads {
            return Err(Self::failure("list_weights"));
        }
        self.inner.list_weights(client_id, since).await
    }

    async fn save_nutrition_log(
        &self,
        client_id: Uuid,
        log: NutritionLog,
    ) -> Result<(), DatabaseError> {
        self.inner.save_nutrition_log(client_id, log).await
    }

    async fn list_nutrition_logs(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<NutritionLog>, DatabaseError> {
        self.inner.list_nutrition_logs(client_id, since).await
    }

    async fn save_training_session(
        &self,
        client_id: Uuid,
        session: TrainingSession,
    ) -> Result<(), DatabaseError> {
        self.inner.save_training_session(client_id, session).await
    }

    async fn list_training_sessions(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<TrainingSession>, DatabaseError> {
        self.inner.list_training_sessions(client_id, since).await
    }
}

async fn flaky_repository(fail_reads: bool, fail_target_writes: bool) -> (Uuid, FlakyRepository) {
    let client_id = Uuid::new_v4();
    let inner = InMemoryClientRepository::new();
    inner.upsert_profile(cut_profile(client_id)).await.unwrap();
    for days_ago in 1..=13 {
        inner
            .save_body_composition(weigh_in(client_id, days_from_today(-days_ago), 80.0))
            .await
            .unwrap();
    }
    for days_ago in 0..14 {
        inner
            .save_nutrition_log(
                client_id,
                NutritionLog {
                    date: days_from_today(-days_ago),
                    calories: Some(2300.0),
                    compliant: true,
                },
            )
            .await
            .unwrap();
    }
    (
        client_id,
        FlakyRepository {
            inner,
            fail_reads,
            fail_target_writes,
        },
    )
}

// === Input assembly ===

#[test]
fn test_build_input_from_raw_logs() {
    let client_id = Uuid::new_v4();
    let profile = cut_profile(client_id);
    let weights = vec![
        WeightSample::new(days_from_today(-8), 81.0),
        WeightSample::new(days_from_today(-1), 80.2),
        WeightSample::new(days_from_today(-3), 80.4),
    ];
    let logs = vec![
        NutritionLog {
            date: days_from_today(-1),
            calories: Some(2000.0),
            compliant: true,
        },
        NutritionLog {
            date: days_from_today(-2),
            calories: None,
            compliant: true,
        },
        NutritionLog {
            date: days_from_today(-3),
            calories: Some(2400.0),
            compliant: false,
        },
        NutritionLog {
            date: days_from_today(-20),
            calories: Some(5000.0),
            compliant: false,
        },
    ];
    let sessions: Vec<TrainingSession> = [1, 2, 4, 6, 9, 11, 13, 20]
        .iter()
        .map(|&d| TrainingSession {
            date: days_from_today(-d),
        })
        .collect();

    let input = build_nutrition_input(
        &profile,
        &weights,
        &logs,
        &sessions,
        today(),
        &IntelligenceConfig::default(),
    );

    assert_eq!(input.nutrition_compliance, Some(67.0));
    assert_eq!(input.avg_daily_calories, Some(2200.0));
    assert!((input.training_days_per_week - 3.5).abs() < f64::EPSILON);
    assert!((input.body_weight - 80.2).abs() < f64::EPSILON);
    assert_eq!(input.weekly_weights.len(), 2);
    assert_eq!(input.current_calories, Field::Value(2300.0));
    assert_eq!(input.carbs_cycling_enabled, Some(false));
}

#[test]
fn test_build_input_without_logs() {
    let profile = cut_profile(Uuid::new_v4());

    let input = build_nutrition_input(
        &profile,
        &[],
        &[],
        &[],
        today(),
        &IntelligenceConfig::default(),
    );

    assert!(input.nutrition_compliance.is_none());
    assert!(input.avg_daily_calories.is_none());
    assert!(input.training_days_per_week.abs() < f64::EPSILON);
    assert!((input.body_weight - 80.0).abs() < f64::EPSILON);
    assert!(input.weekly_weights.is_empty());
}

// === Write path ===

#[tokio::test]
async fn test_plateau_weigh_in_applies_targets() {
    init_test_logging();
    let client_id = Uuid::new_v4();
    let repository = plateau_repository(client_id).await;
    let service = service(Arc::clone(&repository));

    let response = service
        .record_body_composition(weigh_in(client_id, today(), 80.0), today())
        .await
        .unwrap();

    let suggestion = response.suggestion.unwrap();
    assert_eq!(suggestion.status, NutritionStatus::Plateau);
    assert!(suggestion.auto_apply);
    assert!(response.nutrition_adjusted.adjusted);
    assert_eq!(
        response.nutrition_adjusted.applied_fields,
        vec![TargetField::Calories, TargetField::Carbs, TargetField::Fat]
    );
    assert!(response.debug.contains("applied calories, carbs, fat"));

    let profile = repository.get_profile(client_id).await.unwrap().unwrap();
    assert_eq!(profile.targets.calories, Field::Value(1840.0));
    assert_eq!(profile.targets.protein, Field::Value(176.0));
    assert_eq!(profile.targets.fat, Field::Value(51.0));
    assert_eq!(profile.targets.carbs, Field::Value(169.0));
    assert_eq!(repository.body_composition_records(client_id).await.len(), 14);
}

#[tokio::test]
async fn test_on_track_weigh_in_only_surfaces_suggestion() {
    init_test_logging();
    let client_id = Uuid::new_v4();
    let repository = plateau_repository(client_id).await;
    // Lighter weigh-ins this week turn the flat trend into a healthy loss
    for days_ago in 1..=6 {
        repository
            .save_body_composition(weigh_in(client_id, days_from_today(-days_ago), 79.2))
            .await
            .unwrap();
    }
    let service = service(Arc::clone(&repository));

    let response = service
        .record_body_composition(weigh_in(client_id, today(), 79.2), today())
        .await
        .unwrap();

    assert!(!response.nutrition_adjusted.adjusted);
    assert!(response.debug.starts_with("autoApply=false"));
    let profile = repository.get_profile(client_id).await.unwrap().unwrap();
    assert_eq!(profile.targets.calories, Field::Value(2300.0));
}

#[tokio::test]
async fn test_record_without_weight_skips_engine() {
    let client_id = Uuid::new_v4();
    let repository = plateau_repository(client_id).await;
    let service = service(Arc::clone(&repository));
    let record = BodyCompositionRecord {
        weight: None,
        body_fat_percent: Some(14.5),
        ..weigh_in(client_id, today(), 0.0)
    };

    let response = service.record_body_composition(record, today()).await.unwrap();

    assert!(response.suggestion.is_none());
    assert!(!response.nutrition_adjusted.adjusted);
    assert_eq!(repository.body_composition_records(client_id).await.len(), 14);
}

#[tokio::test]
async fn test_unknown_client_cannot_save() {
    let repository = Arc::new(InMemoryClientRepository::new());
    let service = service(repository);

    let err = service
        .record_body_composition(weigh_in(Uuid::new_v4(), today(), 80.0), today())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_read_failure_is_absorbed_after_save() {
    init_test_logging();
    let (client_id, repository) = flaky_repository(true, false).await;
    let repository = Arc::new(repository);
    let service = service(Arc::clone(&repository));

    let response = service
        .record_body_composition(weigh_in(client_id, today(), 80.0), today())
        .await
        .unwrap();

    assert!(response.suggestion.is_none());
    assert!(!response.nutrition_adjusted.adjusted);
    assert!(response.debug.contains("Nutrition engine failed"));
    assert_eq!(
        repository.inner.body_composition_records(client_id).await.len(),
        14
    );
}

#[tokio::test]
async fn test_target_write_failure_is_absorbed() {
    init_test_logging();
    let (client_id, repository) = flaky_repository(false, true).await;
    let repository = Arc::new(repository);
    let service = service(Arc::clone(&repository));

    let response = service
        .record_body_composition(weigh_in(client_id, today(), 80.0), today())
        .await
        .unwrap();

    let suggestion = response.suggestion.unwrap();
    assert!(suggestion.auto_apply);
    assert!(!response.nutrition_adjusted.adjusted);
    assert!(response.debug.contains("writing targets failed"));
    let profile = repository.get_profile(client_id).await.unwrap().unwrap();
    assert_eq!(profile.targets.calories, Field::Value(2300.0));
}

// === On-demand read ===

#[tokio::test]
async fn test_suggestions_do_not_persist() {
    let client_id = Uuid::new_v4();
    let repository = plateau_repository(client_id).await;
    repository
        .save_body_composition(weigh_in(client_id, today(), 80.0))
        .await
        .unwrap();
    let service = service(Arc::clone(&repository));

    let response = service.nutrition_suggestions(client_id, today()).await.unwrap();

    assert!(response.suggestion.auto_apply);
    assert!(response.meta.target_weight.is_none());
    let profile = repository.get_profile(client_id).await.unwrap().unwrap();
    assert_eq!(profile.targets.calories, Field::Value(2300.0));
}

#[tokio::test]
async fn test_suggestions_for_unknown_client() {
    let service = service(Arc::new(InMemoryClientRepository::new()));

    let err = service
        .nutrition_suggestions(Uuid::new_v4(), today())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_response_json_shape() {
    let client_id = Uuid::new_v4();
    let repository = plateau_repository(client_id).await;
    let service = service(repository);

    let response = service
        .record_body_composition(weigh_in(client_id, today(), 80.0), today())
        .await
        .unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["nutritionAdjusted"]["adjusted"], true);
    assert_eq!(json["nutritionAdjusted"]["appliedFields"][0], "calories");
    assert_eq!(json["suggestion"]["status"], "plateau");
    assert!(json["debug"].is_string());
}

// === Trajectory ===

#[tokio::test]
async fn test_weight_trajectory() {
    let client_id = Uuid::new_v4();
    let repository = plateau_repository(client_id).await;
    let service = service(repository);

    let points = service
        .weight_trajectory(client_id, today(), days_from_today(28), 7)
        .await
        .unwrap();
    assert_eq!(points.len(), 5);
    assert!(points.iter().all(|p| (p.weight - 80.0).abs() < 1e-6));

    let err = service
        .weight_trajectory(client_id, today(), days_from_today(28), 0)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
