// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, fixed dates, engine inputs, and seeded client repositories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `prepcoach`

use chrono::{Duration, NaiveDate};
use prepcoach::database::{ClientRepository, InMemoryClientRepository};
use prepcoach::intelligence::{NutritionInput, WeeklyAverage};
use prepcoach::models::{
    BodyCompositionRecord, ClientProfile, Field, Gender, GoalType, NutritionLog,
    NutritionTargets, TrainingSession,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed "now" shared by every scenario
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
}

/// Date `days` after `today()` (negative for the past)
pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

/// Weekly averages from `(week, avg_weight)` pairs
pub fn weekly(pairs: &[(u32, f64)]) -> Vec<WeeklyAverage> {
    pairs
        .iter()
        .map(|&(week, avg_weight)| WeeklyAverage { week, avg_weight })
        .collect()
}

/// 80 kg man cutting at 0.8 kg/week with good compliance and no targets yet
pub fn cut_input() -> NutritionInput {
    NutritionInput {
        gender: Gender::Male,
        body_weight: 80.0,
        goal_type: GoalType::Cut,
        diet_start_date: Some(days_from_today(-42)),
        target_weight: Field::Unknown,
        target_date: None,
        current_calories: Field::Unknown,
        current_protein: Field::Unknown,
        current_carbs: Field::Unknown,
        current_fat: Field::Unknown,
        current_carbs_training_day: Field::Unknown,
        current_carbs_rest_day: Field::Unknown,
        carbs_cycling_enabled: None,
        weekly_weights: weekly(&[(0, 80.0), (1, 80.8)]),
        nutrition_compliance: Some(85.0),
        avg_daily_calories: Some(2200.0),
        training_days_per_week: 4.0,
    }
}

/// Same client, but the weight has stalled for two weeks
pub fn plateau_input() -> NutritionInput {
    NutritionInput {
        weekly_weights: weekly(&[(0, 80.0), (1, 80.02)]),
        avg_daily_calories: Some(2300.0),
        ..cut_input()
    }
}

/// A cutting client profile with a full set of current targets
pub fn cut_profile(client_id: Uuid) -> ClientProfile {
    ClientProfile {
        client_id,
        gender: Gender::Male,
        body_weight: 80.0,
        goal_type: GoalType::Cut,
        diet_start_date: Some(days_from_today(-60)),
        target_weight: None,
        target_date: None,
        targets: NutritionTargets {
            calories: Field::Value(2300.0),
            protein: Field::Value(176.0),
            carbs: Field::Value(233.0),
            fat: Field::Value(64.0),
            carbs_training_day: Field::Unknown,
            carbs_rest_day: Field::Unknown,
        },
    }
}

/// A weigh-in record for `client_id`
pub fn weigh_in(client_id: Uuid, date: NaiveDate, weight: f64) -> BodyCompositionRecord {
    BodyCompositionRecord {
        id: Uuid::new_v4(),
        client_id,
        date,
        weight: Some(weight),
        body_fat_percent: None,
        notes: None,
    }
}

/// Repository holding a plateaued client: flat weight for 13 days before
/// today, fully compliant 2300 kcal logs, and three sessions a week
pub async fn plateau_repository(client_id: Uuid) -> Arc<InMemoryClientRepository> {
    let repository = Arc::new(InMemoryClientRepository::new());
    repository
        .upsert_profile(cut_profile(client_id))
        .await
        .unwrap();

    for days_ago in 1..=13 {
        repository
            .save_body_composition(weigh_in(client_id, days_from_today(-days_ago), 80.0))
            .await
            .unwrap();
    }
    for days_ago in 0..14 {
        repository
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
    for days_ago in [1, 3, 5, 8, 10, 12] {
        repository
            .save_training_session(
                client_id,
                TrainingSession {
                    date: days_from_today(-days_ago),
                },
            )
            .await
            .unwrap();
    }
    repository
}
