// ABOUTME: Integration tests for the peak-week protocol generator
// ABOUTME: Validates activation window, phase order, date anchoring, and per-kg scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{days_from_today, today};
use prepcoach::intelligence::config::intelligence::PeakWeekConfig;
use prepcoach::intelligence::peak_week::{days_out, generate_peak_week, is_active};
use prepcoach::intelligence::PeakWeekPhase;

#[test]
fn test_plan_inside_activation_window() {
    let show = days_from_today(3);

    let plan = generate_peak_week(show, today(), 80.0, &PeakWeekConfig::default()).unwrap();

    assert_eq!(plan.len(), 7);
    let countdown: Vec<u8> = plan.iter().map(|d| d.days_out).collect();
    assert_eq!(countdown, vec![6, 5, 4, 3, 2, 1, 0]);
    assert_eq!(plan[6].date, show);
    assert_eq!(plan[0].date, days_from_today(-3));
}

#[test]
fn test_phases_follow_fixed_order() {
    let plan =
        generate_peak_week(days_from_today(5), today(), 80.0, &PeakWeekConfig::default()).unwrap();

    let mut phases: Vec<PeakWeekPhase> = plan.iter().map(|d| d.phase).collect();
    phases.dedup();
    assert_eq!(
        phases,
        vec![
            PeakWeekPhase::Depletion,
            PeakWeekPhase::FatLoad,
            PeakWeekPhase::CarbLoad,
            PeakWeekPhase::Taper,
            PeakWeekPhase::ShowDay,
        ]
    );
    assert_eq!(
        plan.iter()
            .filter(|d| d.phase == PeakWeekPhase::ShowDay)
            .count(),
        1
    );
}

#[test]
fn test_activation_window_edges() {
    let config = PeakWeekConfig::default();

    assert!(generate_peak_week(days_from_today(7), today(), 80.0, &config).is_some());
    assert!(generate_peak_week(today(), today(), 80.0, &config).is_some());
    assert!(generate_peak_week(days_from_today(8), today(), 80.0, &config).is_none());
    assert!(generate_peak_week(days_from_today(-1), today(), 80.0, &config).is_none());
}

#[test]
fn test_days_out_and_activity() {
    let config = PeakWeekConfig::default();

    assert_eq!(days_out(today(), days_from_today(4)), 4);
    assert_eq!(days_out(today(), days_from_today(-2)), -2);
    assert!(is_active(today(), days_from_today(4), &config));
    assert!(!is_active(today(), days_from_today(30), &config));
}

#[test]
fn test_macros_scale_with_body_weight() {
    let plan =
        generate_peak_week(days_from_today(2), today(), 80.0, &PeakWeekConfig::default()).unwrap();

    let carb_load = plan.iter().find(|d| d.days_out == 3).unwrap();
    assert_eq!(carb_load.phase, PeakWeekPhase::CarbLoad);
    assert!((carb_load.carbs - 480.0).abs() < f64::EPSILON);

    let show_day = plan.last().unwrap();
    assert!((show_day.carbs - 160.0).abs() < f64::EPSILON);
    assert!((show_day.protein - 160.0).abs() < f64::EPSILON);
    assert!((show_day.fat - 64.0).abs() < f64::EPSILON);
    assert!((show_day.calories - 1856.0).abs() < f64::EPSILON);
    assert!((show_day.water - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_day_labels_and_notes() {
    let plan =
        generate_peak_week(days_from_today(1), today(), 80.0, &PeakWeekConfig::default()).unwrap();

    assert_eq!(plan[0].label, "6 days out");
    assert_eq!(plan[5].label, "1 day out");
    assert_eq!(plan[6].label, "Show day");
    assert!(plan.iter().all(|d| !d.sodium_note.is_empty()
        && !d.fiber_note.is_empty()
        && !d.training_note.is_empty()));
    assert_eq!(plan[3].fiber_note, PeakWeekPhase::CarbLoad.fiber_note());
}

#[test]
fn test_plan_serializes_camel_case() {
    let plan =
        generate_peak_week(days_from_today(1), today(), 80.0, &PeakWeekConfig::default()).unwrap();

    let json = serde_json::to_value(&plan[0]).unwrap();
    assert_eq!(json["daysOut"], 6);
    assert_eq!(json["phase"], "depletion");
    assert!(json.get("sodiumNote").is_some());
}

#[test]
fn test_default_table_validates() {
    assert!(PeakWeekConfig::default().validate().is_ok());
}

#[test]
fn test_out_of_order_table_is_rejected() {
    let mut config = PeakWeekConfig::default();
    config.days[2].phase = PeakWeekPhase::Taper;

    assert!(config.validate().is_err());
}
