// ABOUTME: Repository trait for client profiles, weigh-ins, and nutrition/training logs
// ABOUTME: Services depend on the trait so storage can be swapped without touching the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

/// In-memory implementation of `ClientRepository`
pub mod client_repository;

pub use client_repository::InMemoryClientRepository;

use super::DatabaseError;
use async_trait::async_trait;
use chrono::NaiveDate;
use prepcoach_core::models::{
    BodyCompositionRecord, ClientProfile, NutritionLog, TargetField, TargetUpdate,
    TrainingSession, WeightSample,
};
use uuid::Uuid;

/// Client profile and raw-log storage
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert or replace a client profile
    async fn upsert_profile(&self, profile: ClientProfile) -> Result<(), DatabaseError>;

    /// Fetch a client profile
    async fn get_profile(&self, client_id: Uuid) -> Result<Option<ClientProfile>, DatabaseError>;

    /// Overwrite only the fields present in `update`, returning the fields written
    async fn update_targets(
        &self,
        client_id: Uuid,
        update: &TargetUpdate,
    ) -> Result<Vec<TargetField>, DatabaseError>;

    /// Persist a body-composition record
    async fn save_body_composition(
        &self,
        record: BodyCompositionRecord,
    ) -> Result<BodyCompositionRecord, DatabaseError>;

    /// Weigh-ins on or after `since`, oldest first
    async fn list_weights(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<WeightSample>, DatabaseError>;

    /// Persist a nutrition log day
    async fn save_nutrition_log(&self, client_id: Uuid, log: NutritionLog)
        -> Result<(), DatabaseError>;

    /// Nutrition logs on or after `since`, oldest first
    async fn list_nutrition_logs(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<NutritionLog>, DatabaseError>;

    /// Persist a training session
    async fn save_training_session(
        &self,
        client_id: Uuid,
        session: TrainingSession,
    ) -> Result<(), DatabaseError>;

    /// Training sessions on or after `since`, oldest first
    async fn list_training_sessions(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<TrainingSession>, DatabaseError>;
}
