// ABOUTME: Client data storage behind a repository interface
// ABOUTME: The nutrition engine never sees this layer; only services do
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Storage for client profiles and the raw logs the engine is fed from.

/// Storage error types
pub mod errors;

/// Repository traits and implementations
pub mod repositories;

pub use errors::DatabaseError;
pub use repositories::{ClientRepository, InMemoryClientRepository};
