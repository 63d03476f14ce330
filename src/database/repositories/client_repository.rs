// ABOUTME: In-memory client repository guarded by an async RwLock
// ABOUTME: Used by the CLI, tests, and benchmarks; target updates are last-writer-wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use super::ClientRepository;
use crate::database::DatabaseError;
use async_trait::async_trait;
use chrono::NaiveDate;
use prepcoach_core::models::{
    BodyCompositionRecord, ClientProfile, NutritionLog, TargetField, TargetUpdate,
    TrainingSession, WeightSample,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct Store {
    profiles: HashMap<Uuid, ClientProfile>,
    body_composition: HashMap<Uuid, Vec<BodyCompositionRecord>>,
    nutrition_logs: HashMap<Uuid, Vec<NutritionLog>>,
    training_sessions: HashMap<Uuid, Vec<TrainingSession>>,
}

/// Process-local implementation of `ClientRepository`
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    store: RwLock<Store>,
}

impl InMemoryClientRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Body-composition records of a client, in save order
    pub async fn body_composition_records(&self, client_id: Uuid) -> Vec<BodyCompositionRecord> {
        self.store
            .read()
            .await
            .body_composition
            .get(&client_id)
            .cloned()
            .unwrap_or_default()
    }
}

/// Items dated on or after `since`, oldest first
fn since_sorted<T: Clone>(
    items: Option<&Vec<T>>,
    date_of: impl Fn(&T) -> NaiveDate,
    since: NaiveDate,
) -> Vec<T> {
    let mut out: Vec<T> = items.map_or_else(Vec::new, |v| {
        v.iter().filter(|item| date_of(item) >= since).cloned().collect()
    });
    out.sort_by_key(|item| date_of(item));
    out
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn upsert_profile(&self, profile: ClientProfile) -> Result<(), DatabaseError> {
        self.store
            .write()
            .await
            .profiles
            .insert(profile.client_id, profile);
        Ok(())
    }

    async fn get_profile(&self, client_id: Uuid) -> Result<Option<ClientProfile>, DatabaseError> {
        Ok(self.store.read().await.profiles.get(&client_id).cloned())
    }

    async fn update_targets(
        &self,
        client_id: Uuid,
        update: &TargetUpdate,
    ) -> Result<Vec<TargetField>, DatabaseError> {
        let mut store = self.store.write().await;
        let profile = store
            .profiles
            .get_mut(&client_id)
            .ok_or_else(|| DatabaseError::NotFound {
                entity: "client profile",
                id: client_id.to_string(),
            })?;
        Ok(profile.targets.apply(update))
    }

    async fn save_body_composition(
        &self,
        record: BodyCompositionRecord,
    ) -> Result<BodyCompositionRecord, DatabaseError> {
        let mut store = self.store.write().await;
        if !store.profiles.contains_key(&record.client_id) {
            return Err(DatabaseError::NotFound {
                entity: "client profile",
                id: record.client_id.to_string(),
            });
        }
        if let Some(weight) = record.weight {
            if let Some(profile) = store.profiles.get_mut(&record.client_id) {
                profile.body_weight = weight;
            }
        }
        store
            .body_composition
            .entry(record.client_id)
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn list_weights(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<WeightSample>, DatabaseError> {
        let store = self.store.read().await;
        let records = since_sorted(store.body_composition.get(&client_id), |r| r.date, since);
        Ok(records
            .iter()
            .filter_map(BodyCompositionRecord::weight_sample)
            .collect())
    }

    async fn save_nutrition_log(
        &self,
        client_id: Uuid,
        log: NutritionLog,
    ) -> Result<(), DatabaseError> {
        let mut store = self.store.write().await;
        let logs = store.nutrition_logs.entry(client_id).or_default();
        // One log per day; a second save for the same day replaces the first
        logs.retain(|existing| existing.date != log.date);
        logs.push(log);
        Ok(())
    }

    async fn list_nutrition_logs(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<NutritionLog>, DatabaseError> {
        let store = self.store.read().await;
        Ok(since_sorted(store.nutrition_logs.get(&client_id), |l| l.date, since))
    }

    async fn save_training_session(
        &self,
        client_id: Uuid,
        session: TrainingSession,
    ) -> Result<(), DatabaseError> {
        self.store
            .write()
            .await
            .training_sessions
            .entry(client_id)
            .or_default()
            .push(session);
        Ok(())
    }

    async fn list_training_sessions(
        &self,
        client_id: Uuid,
        since: NaiveDate,
    ) -> Result<Vec<TrainingSession>, DatabaseError> {
        let store = self.store.read().await;
        Ok(since_sorted(store.training_sessions.get(&client_id), |s| s.date, since))
    }
}
