// ABOUTME: Weight trend analysis: weekly bucketing, least-squares rate, and projection
// ABOUTME: Single shared regression used by the engine and by chart trajectory callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are tiny compared to f64 mantissa

//! Trend Analyzer
//!
//! Samples are bucketed into trailing seven-day windows anchored on "today".
//! Empty weeks are dropped, so the weekly series may skip indices. The fitted
//! line uses ordinal position as the independent variable, not elapsed time:
//! a gap between two non-empty weeks does not stretch the slope.

use chrono::{Duration, NaiveDate};
use prepcoach_core::constants::units::DAYS_PER_WEEK;
use prepcoach_core::errors::{AppError, AppResult};
use prepcoach_core::models::WeightSample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Average body weight for one trailing seven-day bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAverage {
    /// Bucket index, 0 = the seven days ending today
    pub week: u32,
    /// Mean of the samples in the bucket (kg)
    pub avg_weight: f64,
}

/// A point on a projected weight trajectory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Projected body weight (kg)
    pub weight: f64,
}

/// Least-squares trend line over an ordinal series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrendLine {
    /// Signed rate of change (kg/week)
    pub slope_per_week: f64,
    /// Fitted value at the most recent point (kg)
    pub latest_fitted: f64,
    /// Coefficient of determination (0-1)
    pub r_squared: f64,
    /// Number of points the line was fitted on
    pub points: usize,
}

/// Raw ordinary least-squares fit over index positions
struct OrdinalFit {
    slope: f64,
    intercept: f64,
    r_squared: f64,
}

/// Fit `y = slope * index + intercept` with index 0 for the first value
fn ordinal_regression(values: &[f64]) -> Option<OrdinalFit> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let (sum_x, sum_y, sum_xx, sum_xy, sum_yy) = values.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxx, sxy, syy), (i, &y)| {
            let x = i as f64;
            (sx + x, sy + y, x.mul_add(x, sxx), x.mul_add(y, sxy), y.mul_add(y, syy))
        },
    );

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let numerator = (n * mean_x).mul_add(-mean_y, sum_xy);
    let slope = numerator / denominator;
    let intercept = slope.mul_add(-mean_x, mean_y);

    let variance_y = (n * mean_y).mul_add(-mean_y, sum_yy);
    let r_squared = if variance_y.abs() < f64::EPSILON {
        // A perfectly flat series is perfectly explained by a flat line
        1.0
    } else {
        ((numerator * numerator) / (denominator * variance_y)).clamp(0.0, 1.0)
    };

    Some(OrdinalFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Bucket samples into trailing seven-day weeks ending on `today`
///
/// A sample `d` days before `today` falls in week `d / 7`. Samples dated
/// after `today` or older than `weeks` buckets are ignored. Empty weeks are
/// dropped. Output is ordered most recent first.
#[must_use]
pub fn weekly_averages(
    samples: &[WeightSample],
    today: NaiveDate,
    weeks: u32,
) -> Vec<WeeklyAverage> {
    let window_days = i64::from(weeks) * 7;
    let mut buckets: BTreeMap<u32, (f64, u32)> = BTreeMap::new();

    for sample in samples {
        let days_ago = (today - sample.date).num_days();
        if !(0..window_days).contains(&days_ago) {
            continue;
        }
        let Ok(week) = u32::try_from(days_ago / 7) else {
            continue;
        };
        let entry = buckets.entry(week).or_insert((0.0, 0));
        entry.0 += sample.weight;
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(week, (sum, count))| WeeklyAverage {
            week,
            avg_weight: sum / f64::from(count),
        })
        .collect()
}

/// Trailing moving average over date-sorted samples
///
/// The first `window - 1` points average whatever samples precede them.
#[must_use]
pub fn moving_average(samples: &[WeightSample], window: usize) -> Vec<TrajectoryPoint> {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|s| s.date);

    let window = window.max(1);
    (0..sorted.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let slice = &sorted[start..=i];
            let mean = slice.iter().map(|s| s.weight).sum::<f64>() / slice.len() as f64;
            TrajectoryPoint {
                date: sorted[i].date,
                weight: mean,
            }
        })
        .collect()
}

impl TrendLine {
    /// Fit a line over weekly averages, oldest week first
    ///
    /// Input order does not matter. Returns `None` with fewer than two weeks.
    #[must_use]
    pub fn from_weekly(weekly: &[WeeklyAverage]) -> Option<Self> {
        let mut ordered = weekly.to_vec();
        ordered.sort_by(|a, b| b.week.cmp(&a.week));
        let values: Vec<f64> = ordered.iter().map(|w| w.avg_weight).collect();

        let fit = ordinal_regression(&values)?;
        let last_index = (values.len() - 1) as f64;
        Some(Self {
            slope_per_week: fit.slope,
            latest_fitted: fit.slope.mul_add(last_index, fit.intercept),
            r_squared: fit.r_squared,
            points: values.len(),
        })
    }

    /// Fit a line over the most recent points of a daily moving average
    ///
    /// Each index step is treated as one day, so the slope is scaled by seven.
    #[must_use]
    pub fn from_daily_moving_average(
        samples: &[WeightSample],
        window: usize,
        max_points: usize,
    ) -> Option<Self> {
        let smoothed = moving_average(samples, window);
        let skip = smoothed.len().saturating_sub(max_points);
        let values: Vec<f64> = smoothed.iter().skip(skip).map(|p| p.weight).collect();

        let fit = ordinal_regression(&values)?;
        let last_index = (values.len() - 1) as f64;
        Some(Self {
            slope_per_week: fit.slope * DAYS_PER_WEEK,
            latest_fitted: fit.slope.mul_add(last_index, fit.intercept),
            r_squared: fit.r_squared,
            points: values.len(),
        })
    }

    /// Predicted weight `days_ahead` days after the most recent point
    #[must_use]
    pub fn project(&self, days_ahead: i64) -> f64 {
        (self.slope_per_week * days_ahead as f64).mul_add(1.0 / DAYS_PER_WEEK, self.latest_fitted)
    }
}

/// Projected chart series from the daily trend, from `today` to `until`
///
/// Points are spaced `step_days` apart and measured from the latest sample
/// date, so a stale last weigh-in still projects forward correctly. Returns an
/// empty series when fewer than two samples exist or `until` precedes `today`.
///
/// # Errors
///
/// Returns `AppError::invalid_input` when `step_days` is zero.
pub fn project_trajectory(
    samples: &[WeightSample],
    today: NaiveDate,
    until: NaiveDate,
    step_days: u32,
    window: usize,
    max_points: usize,
) -> AppResult<Vec<TrajectoryPoint>> {
    if step_days == 0 {
        return Err(AppError::invalid_input(
            "Trajectory step must be at least one day",
        ));
    }

    let Some(anchor) = samples.iter().map(|s| s.date).max() else {
        return Ok(Vec::new());
    };
    let Some(trend) = TrendLine::from_daily_moving_average(samples, window, max_points) else {
        return Ok(Vec::new());
    };

    let step = Duration::days(i64::from(step_days));
    let mut points = Vec::new();
    let mut date = today;
    while date <= until {
        points.push(TrajectoryPoint {
            date,
            weight: trend.project((date - anchor).num_days()),
        });
        date += step;
    }
    Ok(points)
}
