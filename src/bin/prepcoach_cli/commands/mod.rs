// ABOUTME: Command modules and shared JSON input/output helpers for prepcoach-cli
// ABOUTME: Reads input documents from disk and prints results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

pub mod suggest;
pub mod trajectory;

use prepcoach::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Read and parse a JSON document
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&text).map_err(|e| {
        AppError::invalid_format(format!("Invalid JSON in {}: {e}", path.display())).with_source(e)
    })
}

/// Convert a result into a JSON value for printing
pub fn to_json_value<T: Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("Failed to serialize output: {e}")).with_source(e))
}

/// Print a JSON value on stdout
pub fn print_json(value: &Value, pretty: bool) -> AppResult<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| AppError::internal(format!("Failed to serialize output: {e}")).with_source(e))?;
    println!("{text}");
    Ok(())
}
