// ABOUTME: Core data models shared by the nutrition engine and its callers
// ABOUTME: Re-exports client profile, targets, log records, and the three-state Field type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! # Data Models
//!
//! Raw records the caller persists (weigh-ins, nutrition days, training
//! sessions) and the client profile whose targets the engine may rewrite.
//! The engine never stores any of these; it only reads already-fetched data.

mod client;
mod field;
mod logs;
mod nutrition;

pub use client::{ClientProfile, NutritionTargets, TargetField, TargetUpdate};
pub use field::Field;
pub use logs::{BodyCompositionRecord, NutritionLog, TrainingSession, WeightSample};
pub use nutrition::{Gender, GoalType};
