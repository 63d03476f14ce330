// ABOUTME: Trajectory command for prepcoach-cli
// ABOUTME: Projects a weight series with the same trend analyzer the engine uses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

use super::{read_json, to_json_value};
use chrono::NaiveDate;
use prepcoach::errors::AppResult;
use prepcoach::intelligence::trend_analysis::{moving_average, project_trajectory};
use prepcoach::intelligence::IntelligenceConfig;
use prepcoach::models::WeightSample;
use serde_json::{json, Value};
use std::path::Path;

/// Smoothed history plus the projected series
pub async fn run(
    path: &Path,
    now: NaiveDate,
    until: NaiveDate,
    step_days: u32,
    config: &IntelligenceConfig,
) -> AppResult<Value> {
    let samples: Vec<WeightSample> = read_json(path).await?;
    let trend = &config.nutrition.trend;

    let smoothed = moving_average(&samples, trend.moving_average_window);
    let projected = project_trajectory(
        &samples,
        now,
        until,
        step_days,
        trend.moving_average_window,
        trend.projection_points,
    )?;

    Ok(json!({
        "movingAverage": to_json_value(&smoothed)?,
        "projection": to_json_value(&projected)?,
    }))
}
