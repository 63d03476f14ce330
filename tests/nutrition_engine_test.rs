// ABOUTME: Integration tests for the nutrition suggestion orchestrator
// ABOUTME: End-to-end scenarios, insufficient data, input validation, determinism, and JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{cut_input, days_from_today, plateau_input, today, weekly};
use prepcoach::errors::ErrorCode;
use prepcoach::intelligence::{
    generate_nutrition_suggestion, IntelligenceConfig, NutritionEngine, NutritionInput,
    NutritionStatus, OffTrackReason, PeakWeekPhase, ProjectionVerdict, SafetyLevel, Suggestion,
};
use prepcoach::models::{Field, GoalType};

fn suggest(input: &NutritionInput) -> Suggestion {
    generate_nutrition_suggestion(input, today(), &IntelligenceConfig::default()).unwrap()
}

// === Scenarios ===

#[test]
fn test_on_track_cut_holds_calories() {
    let suggestion = suggest(&cut_input());

    assert_eq!(suggestion.status, NutritionStatus::OnTrack);
    assert_eq!(suggestion.status_emoji, "✅");
    assert_eq!(suggestion.estimated_tdee, Some(3080.0));
    assert_eq!(suggestion.weekly_weight_change_rate, Some(-0.8));
    assert!(suggestion.suggested_calories.is_none());
    assert_eq!(suggestion.suggested_protein, Some(176.0));
    assert!(!suggestion.auto_apply);
    assert!(suggestion.deadline_info.is_none());
    assert!(suggestion.peak_week_plan.is_none());
    assert!(suggestion.message.contains("healthy pace"));
}

#[test]
fn test_goal_driven_cut_reports_deadline() {
    let input = NutritionInput {
        target_weight: Field::Value(75.0),
        target_date: Some(days_from_today(60)),
        ..cut_input()
    };

    let suggestion = suggest(&input);
    let info = suggestion.deadline_info.unwrap();

    assert!((info.weight_to_lose - 5.0).abs() < 1e-9);
    assert_eq!(info.days_left, 60);
    assert!((info.required_daily_deficit - 642.0).abs() < 1e-9);
    assert_eq!(info.safety_level, SafetyLevel::Aggressive);
    // Calories are held, so the 2200 kcal actually eaten sets the diet's share
    assert!((info.diet_deficit_per_day - 770.0).abs() < 1e-9);
    assert!(!info.extra_cardio_needed);
    assert_eq!(info.predicted_comp_weight, Some(73.14));
    assert_eq!(info.projection_verdict, Some(ProjectionVerdict::AheadOfTarget));
    assert!(suggestion.peak_week_plan.is_none());
}

#[test]
fn test_competitor_in_peak_week() {
    let input = NutritionInput {
        target_weight: Field::Value(78.0),
        target_date: Some(days_from_today(3)),
        ..cut_input()
    };

    let suggestion = suggest(&input);

    let plan = suggestion.peak_week_plan.unwrap();
    assert_eq!(plan.len(), 7);
    assert_eq!(plan[6].phase, PeakWeekPhase::ShowDay);
    assert_eq!(plan[6].date, days_from_today(3));

    let info = suggestion.deadline_info.unwrap();
    assert_eq!(info.days_left, 3);
    assert_eq!(info.safety_level, SafetyLevel::Extreme);
    assert!(info.extra_cardio_needed);
}

#[test]
fn test_peak_week_without_target_weight() {
    let input = NutritionInput {
        target_date: Some(days_from_today(6)),
        ..cut_input()
    };

    let suggestion = suggest(&input);

    assert!(suggestion.deadline_info.is_none());
    assert!(suggestion.peak_week_plan.is_some());
}

#[test]
fn test_plateau_auto_applies_new_targets() {
    let suggestion = suggest(&plateau_input());

    assert_eq!(suggestion.status, NutritionStatus::Plateau);
    assert_eq!(suggestion.estimated_tdee, Some(2322.0));
    assert_eq!(suggestion.suggested_calories, Some(1858.0));
    assert!(suggestion.auto_apply);
    assert!(suggestion.has_suggested_fields());
    assert_eq!(suggestion.target_update().calories, Some(1858.0));
}

#[test]
fn test_plateau_cut_short_of_deadline_adds_cardio() {
    let input = NutritionInput {
        target_weight: Field::Value(76.1),
        target_date: Some(days_from_today(60)),
        ..plateau_input()
    };

    let suggestion = suggest(&input);
    assert_eq!(suggestion.suggested_calories, Some(1858.0));
    let info = suggestion.deadline_info.unwrap();

    // 3.9 kg in 60 days needs ~501 kcal/day; 2322 - 1858 only delivers 464
    assert!((info.required_daily_deficit - 501.0).abs() < 1e-9);
    assert!((info.diet_deficit_per_day - 464.0).abs() < 1e-9);
    assert!(info.extra_cardio_needed);
    assert!((36.0..=37.0).contains(&info.extra_burn_per_day));
    assert!(info.suggested_cardio_minutes > 0);
}

#[test]
fn test_low_compliance_plateau_message_matches_held_calories() {
    let input = NutritionInput {
        nutrition_compliance: Some(50.0),
        ..plateau_input()
    };

    let suggestion = suggest(&input);

    assert_eq!(suggestion.status, NutritionStatus::Plateau);
    assert!(suggestion.suggested_calories.is_none());
    assert!(suggestion.message.contains("held until compliance improves"));
    assert!(!suggestion.message.contains("adjusted"));
}

#[test]
fn test_plateau_message_when_target_already_matches() {
    let input = NutritionInput {
        current_calories: Field::Value(1850.0),
        ..plateau_input()
    };

    let suggestion = suggest(&input);

    assert!(suggestion.suggested_calories.is_none());
    assert!(suggestion.message.contains("stay put"));
}

#[test]
fn test_drifting_without_tdee_does_not_claim_tdee_reset() {
    let input = NutritionInput {
        goal_type: GoalType::Maintain,
        weekly_weights: weekly(&[(0, 81.0), (1, 80.0)]),
        avg_daily_calories: None,
        current_calories: Field::Value(2500.0),
        ..cut_input()
    };

    let suggestion = suggest(&input);

    assert_eq!(suggestion.off_track_reason, Some(OffTrackReason::Drifting));
    assert_eq!(suggestion.suggested_calories, Some(2375.0));
    assert!(suggestion.message.contains("nudged from the current one"));
    assert!(!suggestion.message.contains("reset to TDEE"));
}

#[test]
fn test_wrong_direction_is_off_track() {
    let input = NutritionInput {
        weekly_weights: weekly(&[(0, 80.5), (1, 80.0)]),
        ..cut_input()
    };

    let suggestion = suggest(&input);

    assert_eq!(suggestion.status, NutritionStatus::OffTrack);
    assert_eq!(suggestion.off_track_reason, Some(OffTrackReason::WrongDirection));
    assert!(suggestion.message.contains("away from the goal"));
    assert!(suggestion.message.contains("Calories adjusted."));
    assert!(suggestion.auto_apply);
}

#[test]
fn test_bulk_gaining_too_fast() {
    let input = NutritionInput {
        goal_type: GoalType::Bulk,
        weekly_weights: weekly(&[(0, 80.6), (1, 80.0)]),
        avg_daily_calories: Some(3500.0),
        ..cut_input()
    };

    let suggestion = suggest(&input);

    assert_eq!(suggestion.off_track_reason, Some(OffTrackReason::TooFast));
    // TDEE 3500 - 660 = 2840, eased surplus of 5%
    assert_eq!(suggestion.suggested_calories, Some(2982.0));
}

// === Missing data ===

#[test]
fn test_single_week_is_insufficient_data() {
    let input = NutritionInput {
        weekly_weights: weekly(&[(0, 80.0)]),
        ..cut_input()
    };

    let suggestion = suggest(&input);

    assert_eq!(suggestion.status, NutritionStatus::InsufficientData);
    assert_eq!(suggestion.status_label, "Not enough data");
    assert!(suggestion.estimated_tdee.is_none());
    assert!(suggestion.weekly_weight_change_rate.is_none());
    assert!(!suggestion.has_suggested_fields());
    assert!(!suggestion.auto_apply);
}

#[test]
fn test_no_calorie_logs_warns_and_blocks_auto_apply() {
    let input = NutritionInput {
        avg_daily_calories: None,
        current_calories: Field::Value(2300.0),
        ..plateau_input()
    };

    let suggestion = suggest(&input);

    assert!(suggestion.estimated_tdee.is_none());
    assert_eq!(suggestion.suggested_calories, Some(2185.0));
    assert!(!suggestion.auto_apply);
    assert!(suggestion.warnings.iter().any(|w| w.contains("No calorie logs")));
}

#[test]
fn test_unknown_compliance_warns() {
    let input = NutritionInput {
        nutrition_compliance: None,
        ..plateau_input()
    };

    let suggestion = suggest(&input);

    assert!(!suggestion.auto_apply);
    assert!(suggestion
        .warnings
        .iter()
        .any(|w| w.contains("compliance unknown")));
}

// === Validation ===

#[test]
fn test_invalid_inputs_are_rejected() {
    let cases = [
        NutritionInput {
            body_weight: -5.0,
            ..cut_input()
        },
        NutritionInput {
            nutrition_compliance: Some(150.0),
            ..cut_input()
        },
        NutritionInput {
            training_days_per_week: 8.0,
            ..cut_input()
        },
        NutritionInput {
            current_calories: Field::Value(-100.0),
            ..cut_input()
        },
        NutritionInput {
            avg_daily_calories: Some(f64::NAN),
            ..cut_input()
        },
    ];

    for input in &cases {
        let err = generate_nutrition_suggestion(input, today(), &IntelligenceConfig::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange, "{err}");
    }
}

#[test]
fn test_duplicate_weeks_are_rejected() {
    let input = NutritionInput {
        weekly_weights: weekly(&[(0, 80.0), (0, 80.5)]),
        ..cut_input()
    };

    let err = generate_nutrition_suggestion(&input, today(), &IntelligenceConfig::default())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_target_date_before_diet_start_is_rejected() {
    let input = NutritionInput {
        diet_start_date: Some(days_from_today(10)),
        target_date: Some(days_from_today(5)),
        ..cut_input()
    };

    let err = generate_nutrition_suggestion(&input, today(), &IntelligenceConfig::default())
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// === Determinism and wire shape ===

#[test]
fn test_identical_inputs_give_identical_output() {
    let input = NutritionInput {
        target_weight: Field::Value(78.0),
        target_date: Some(days_from_today(3)),
        ..plateau_input()
    };
    let engine = NutritionEngine::default();

    let first = serde_json::to_string(&engine.suggest(&input, today()).unwrap()).unwrap();
    let second = serde_json::to_string(&engine.suggest(&input, today()).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_weekly_weights_order_does_not_matter() {
    let forward = NutritionInput {
        weekly_weights: weekly(&[(0, 79.0), (1, 79.5), (2, 80.3)]),
        ..cut_input()
    };
    let reversed = NutritionInput {
        weekly_weights: weekly(&[(2, 80.3), (1, 79.5), (0, 79.0)]),
        ..cut_input()
    };

    assert_eq!(suggest(&forward), suggest(&reversed));
}

#[test]
fn test_suggestion_json_contract() {
    let json = serde_json::to_value(suggest(&cut_input())).unwrap();

    assert_eq!(json["status"], "on_track");
    assert_eq!(json["estimatedTDEE"], 3080.0);
    assert!(json["suggestedCalories"].is_null());
    assert_eq!(json["suggestedProtein"], 176.0);
    assert!(json.get("deadlineInfo").is_none());
    assert!(json.get("peakWeekPlan").is_none());
    assert!(json.get("offTrackReason").is_none());
    assert!(json["warnings"].is_array());
}

#[test]
fn test_input_json_distinguishes_null_from_absent() {
    let input: NutritionInput = serde_json::from_str(
        r#"{
            "gender": "female",
            "bodyWeight": 62.0,
            "goalType": "fat_loss",
            "currentCalories": null,
            "currentProtein": 120,
            "weeklyWeights": [{"week": 0, "avgWeight": 62.0}, {"week": 1, "avgWeight": 62.5}],
            "nutritionCompliance": 90,
            "avgDailyCalories": 1800,
            "trainingDaysPerWeek": 3
        }"#,
    )
    .unwrap();

    assert_eq!(input.goal_type, GoalType::Cut);
    assert_eq!(input.current_calories, Field::Cleared);
    assert_eq!(input.current_fat, Field::Unknown);
    assert_eq!(input.current_protein, Field::Value(120.0));
    assert!(generate_nutrition_suggestion(&input, today(), &IntelligenceConfig::default()).is_ok());
}
