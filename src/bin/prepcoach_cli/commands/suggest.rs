// ABOUTME: Suggest command for prepcoach-cli
// ABOUTME: Runs the nutrition engine on one input document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use super::{read_json, to_json_value};
use chrono::NaiveDate;
use prepcoach::errors::AppResult;
use prepcoach::intelligence::{IntelligenceConfig, NutritionEngine, NutritionInput};
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Compute the suggestion for the input at `path`
pub async fn run(path: &Path, now: NaiveDate, config: IntelligenceConfig) -> AppResult<Value> {
    let input: NutritionInput = read_json(path).await?;
    let suggestion = NutritionEngine::new(config).suggest(&input, now)?;
    info!(
        status = suggestion.status.as_str(),
        auto_apply = suggestion.auto_apply,
        warnings = suggestion.warnings.len(),
        "Suggestion computed"
    );
    to_json_value(&suggestion)
}
