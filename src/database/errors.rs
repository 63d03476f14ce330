// ABOUTME: Structured error types for client data storage operations
// ABOUTME: Converts storage failures into AppError for service callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use prepcoach_core::errors::AppError;
use thiserror::Error;

/// Storage errors with context
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Requested entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of entity
        entity: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// Query or write failed
    #[error("Query failed: {context}")]
    QueryError {
        /// What went wrong
        context: String,
    },
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        match &error {
            DatabaseError::NotFound { entity, id } => {
                Self::not_found(format!("{entity} {id}")).with_resource_id(id.clone())
            }
            DatabaseError::QueryError { context } => Self::database(context.clone()),
        }
    }
}
