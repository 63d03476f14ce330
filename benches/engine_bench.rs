// ABOUTME: Criterion benchmarks for the nutrition engine and trend analysis
// ABOUTME: Measures suggestion generation, weekly bucketing, and trajectory projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Criterion benchmarks for the nutrition engine.
//!
//! The engine runs on every weigh-in, so the full suggestion path and the
//! trend helpers it shares with chart callers are measured here.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prepcoach::intelligence::trend_analysis::{project_trajectory, weekly_averages};
use prepcoach::intelligence::{generate_nutrition_suggestion, IntelligenceConfig, NutritionInput};
use prepcoach::models::{Field, Gender, GoalType, WeightSample};

fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or_default()
}

/// Daily weigh-ins losing roughly 0.1 kg/day with a little noise
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
fn generate_samples(count: usize) -> Vec<WeightSample> {
    let today = bench_today();
    (0..count)
        .map(|index| {
            let noise = ((index * 37) % 7) as f64 / 10.0 - 0.3;
            WeightSample::new(
                today - Duration::days(index as i64),
                (index as f64).mul_add(0.1, 80.0) + noise,
            )
        })
        .collect()
}

fn competitor_input(config: &IntelligenceConfig) -> NutritionInput {
    let today = bench_today();
    let samples = generate_samples(30);
    NutritionInput {
        gender: Gender::Male,
        body_weight: 80.0,
        goal_type: GoalType::Cut,
        diet_start_date: Some(today - Duration::days(60)),
        target_weight: Field::Value(75.0),
        target_date: Some(today + Duration::days(5)),
        current_calories: Field::Value(2400.0),
        current_protein: Field::Value(180.0),
        current_carbs: Field::Value(240.0),
        current_fat: Field::Value(67.0),
        current_carbs_training_day: Field::Value(280.0),
        current_carbs_rest_day: Field::Value(190.0),
        carbs_cycling_enabled: None,
        weekly_weights: weekly_averages(&samples, today, config.nutrition.trend.weeks_in_window),
        nutrition_compliance: Some(86.0),
        avg_daily_calories: Some(2350.0),
        training_days_per_week: 4.0,
    }
}

/// Benchmark the full suggestion path including deadline and peak week
fn bench_suggestion(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let input = competitor_input(&config);
    let today = bench_today();

    c.bench_function("generate_nutrition_suggestion", |b| {
        b.iter(|| generate_nutrition_suggestion(black_box(&input), black_box(today), &config));
    });
}

/// Benchmark weekly bucketing and trajectory projection over growing histories
fn bench_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_analysis");
    let today = bench_today();
    let until = today + Duration::days(84);

    for count in [14_usize, 30, 365] {
        let samples = generate_samples(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("weekly_averages", count),
            &samples,
            |b, samples| b.iter(|| weekly_averages(black_box(samples), today, 4)),
        );
        group.bench_with_input(
            BenchmarkId::new("project_trajectory", count),
            &samples,
            |b, samples| {
                b.iter(|| project_trajectory(black_box(samples), today, until, 7, 7, 14));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_suggestion, bench_trend);
criterion_main!(benches);
