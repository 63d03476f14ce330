// ABOUTME: Goal-deadline planner: required daily deficit, safety banding, and cardio/step top-up
// ABOUTME: Projects the weight trend to the target date for an on-target or will-miss verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)] // Safe: day counts, minutes, and steps are small and clamped non-negative

//! Goal-Deadline Planner
//!
//! Active only when both a target weight and a target date are set.
//! `weight_to_lose` keeps its sign, so a bulk goal has a negative value and
//! a negative "deficit" (a surplus). Safety banding uses the magnitude.
//!
//! The diet's share of the deficit is the gap between the energy base (TDEE,
//! or the current target without one) and the calorie target actually
//! prescribed, capped so intake never drops under the floor or below the
//! configured share of the base. Activity covers whatever is left.

use crate::config::intelligence::{GoalPlannerConfig, SafetyBandsConfig};
use crate::trend_analysis::TrendLine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How aggressive the required daily deficit is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SafetyLevel {
    /// Sustainable
    Normal,
    /// Achievable with close monitoring
    Aggressive,
    /// Likely to cost lean mass or adherence
    Extreme,
}

/// Where the projected trend lands relative to the target on the deadline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionVerdict {
    /// Within tolerance of the target
    OnTarget,
    /// Past the target in the goal direction
    AheadOfTarget,
    /// Short of the target
    WillMiss,
}

/// Goal-deadline assessment surfaced to the coach
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineInfo {
    /// Always true when present
    pub is_goal_driven: bool,
    /// Current weight minus target weight (kg, signed)
    pub weight_to_lose: f64,
    /// Days until the target date, never negative
    pub days_left: i64,
    /// True once the target date is today or earlier
    pub deadline_passed: bool,
    /// Daily energy deficit needed to arrive on time (kcal, signed)
    pub required_daily_deficit: f64,
    /// Banding of `|required_daily_deficit|`
    pub safety_level: SafetyLevel,
    /// Daily cardio to cover what diet alone cannot (minutes)
    pub suggested_cardio_minutes: u32,
    /// Daily step target including the baseline
    pub suggested_daily_steps: u32,
    /// Whether diet alone falls short
    pub extra_cardio_needed: bool,
    /// Daily deficit the prescribed calorie target delivers (kcal)
    pub diet_deficit_per_day: f64,
    /// Energy activity must cover each day (kcal)
    pub extra_burn_per_day: f64,
    /// Qualitative guidance on the activity prescription
    pub cardio_note: String,
    /// Weight the current trend reaches on the target date (kg)
    pub predicted_comp_weight: Option<f64>,
    /// Verdict of the projection against the target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_verdict: Option<ProjectionVerdict>,
}

/// Inputs to the deadline planner
#[derive(Debug, Clone, Copy)]
pub struct DeadlineContext<'a> {
    /// Current body weight (kg)
    pub current_weight: f64,
    /// Goal body weight (kg)
    pub target_weight: f64,
    /// Goal date
    pub target_date: NaiveDate,
    /// Injected "now"
    pub today: NaiveDate,
    /// Estimated TDEE, when available
    pub tdee: Option<f64>,
    /// Current calorie target, used as the energy base without a TDEE
    pub current_calories: Option<f64>,
    /// Calorie target the client will eat to: the new suggestion, or the
    /// target that stays in place
    pub prescribed_calories: Option<f64>,
    /// Calorie floor for the client's gender
    pub calorie_floor: f64,
    /// Weekly trend, when there are enough weeks
    pub trend: Option<&'a TrendLine>,
}

/// Deadline planner output
#[derive(Debug, Clone, PartialEq)]
pub struct DeadlinePlan {
    /// Assessment
    pub info: DeadlineInfo,
    /// Warnings for the coach
    pub warnings: Vec<String>,
}

/// Band a daily deficit by magnitude
#[must_use]
pub fn classify_safety(required_daily_deficit: f64, bands: &SafetyBandsConfig) -> SafetyLevel {
    let magnitude = required_daily_deficit.abs();
    if magnitude < bands.aggressive_deficit_kcal {
        SafetyLevel::Normal
    } else if magnitude < bands.extreme_deficit_kcal {
        SafetyLevel::Aggressive
    } else {
        SafetyLevel::Extreme
    }
}

/// Deficit a prescribed intake delivers against an energy base
///
/// Never negative, and never more than [`max_diet_deficit`] allows.
#[must_use]
pub fn diet_deficit(
    energy_base: f64,
    prescribed_calories: f64,
    calorie_floor: f64,
    bands: &SafetyBandsConfig,
) -> f64 {
    let cap = max_diet_deficit(energy_base, calorie_floor, bands);
    (energy_base - prescribed_calories).clamp(0.0, cap)
}

/// Largest daily deficit diet alone should carry from an energy base
///
/// Bounded both by the calorie floor and by a share of the base.
#[must_use]
pub fn max_diet_deficit(energy_base: f64, calorie_floor: f64, bands: &SafetyBandsConfig) -> f64 {
    let to_floor = energy_base - calorie_floor;
    let by_share = energy_base * bands.max_diet_deficit_percent / 100.0;
    to_floor.min(by_share).max(0.0)
}

/// Compare a projected weight with the target in the goal direction
#[must_use]
pub fn projection_verdict(
    predicted: f64,
    target: f64,
    weight_to_lose: f64,
    tolerance_kg: f64,
) -> ProjectionVerdict {
    // Positive gap means the projection stops short of the target
    let gap = if weight_to_lose >= 0.0 {
        predicted - target
    } else {
        target - predicted
    };
    if gap.abs() <= tolerance_kg {
        ProjectionVerdict::OnTarget
    } else if gap < 0.0 {
        ProjectionVerdict::AheadOfTarget
    } else {
        ProjectionVerdict::WillMiss
    }
}

/// Build the deadline assessment
#[must_use]
pub fn plan_deadline(
    ctx: &DeadlineContext<'_>,
    config: &GoalPlannerConfig,
    kcal_per_kg: f64,
) -> DeadlinePlan {
    let mut warnings = Vec::new();
    let weight_to_lose = ((ctx.current_weight - ctx.target_weight) * 100.0).round() / 100.0;
    let raw_days_left = (ctx.target_date - ctx.today).num_days();
    let baseline_steps = config.activity.baseline_daily_steps;

    let predicted_comp_weight = ctx
        .trend
        .map(|t| (t.project(raw_days_left.max(0)) * 100.0).round() / 100.0);
    let verdict = predicted_comp_weight.map(|predicted| {
        projection_verdict(
            predicted,
            ctx.target_weight,
            weight_to_lose,
            config.projection_tolerance_kg,
        )
    });

    if raw_days_left <= 0 {
        warnings.push(format!(
            "Target date {} has passed; set a new target date to resume deadline planning",
            ctx.target_date
        ));
        return DeadlinePlan {
            info: DeadlineInfo {
                is_goal_driven: true,
                weight_to_lose,
                days_left: 0,
                deadline_passed: true,
                required_daily_deficit: 0.0,
                safety_level: SafetyLevel::Normal,
                suggested_cardio_minutes: 0,
                suggested_daily_steps: baseline_steps,
                extra_cardio_needed: false,
                diet_deficit_per_day: 0.0,
                extra_burn_per_day: 0.0,
                cardio_note: "Deadline passed; no activity prescription".to_owned(),
                predicted_comp_weight,
                projection_verdict: verdict,
            },
            warnings,
        };
    }

    let required_daily_deficit = weight_to_lose * kcal_per_kg / raw_days_left as f64;
    let safety_level = classify_safety(required_daily_deficit, &config.safety);
    if safety_level == SafetyLevel::Extreme {
        warnings.push(format!(
            "Reaching {:.1} kg by {} needs {:.0} kcal/day; consider moving the target date",
            ctx.target_weight,
            ctx.target_date,
            required_daily_deficit.abs()
        ));
    }

    // The diet's share only matters when there is weight to lose
    let mut diet_deficit_per_day = 0.0;
    let mut extra_burn_per_day = 0.0;
    let cardio_note = if weight_to_lose <= 0.0 {
        "No cardio needed for a weight-gain or already-reached goal".to_owned()
    } else if let Some(base) = ctx.tdee.or(ctx.current_calories) {
        // Without any calorie target the client is assumed to eat at the base
        let prescribed = ctx.prescribed_calories.unwrap_or(base);
        let delivered = diet_deficit(base, prescribed, ctx.calorie_floor, &config.safety);
        diet_deficit_per_day = delivered.round();
        if required_daily_deficit > delivered {
            extra_burn_per_day = (required_daily_deficit - delivered).round();
        }
        cardio_note_for(extra_burn_per_day).to_owned()
    } else {
        warnings.push(
            "No TDEE or calorie target; cannot tell how much of the deficit diet can carry"
                .to_owned(),
        );
        "Diet capacity unknown; log calories to get an activity prescription".to_owned()
    };

    let extra_cardio_needed = extra_burn_per_day > 0.0;
    let (suggested_cardio_minutes, suggested_daily_steps) = if extra_cardio_needed {
        let activity = &config.activity;
        let minutes = (extra_burn_per_day / activity.cardio_kcal_per_minute)
            .ceil()
            .min(f64::from(activity.max_cardio_minutes)) as u32;
        let extra_steps = ((extra_burn_per_day / activity.kcal_per_step) / 100.0).round() * 100.0;
        (minutes, baseline_steps.saturating_add(extra_steps as u32))
    } else {
        (0, baseline_steps)
    };

    debug!(
        weight_to_lose,
        days_left = raw_days_left,
        required_daily_deficit,
        ?safety_level,
        diet_deficit_per_day,
        extra_burn_per_day,
        "Deadline plan computed"
    );

    DeadlinePlan {
        info: DeadlineInfo {
            is_goal_driven: true,
            weight_to_lose,
            days_left: raw_days_left,
            deadline_passed: false,
            required_daily_deficit: required_daily_deficit.round(),
            safety_level,
            suggested_cardio_minutes,
            suggested_daily_steps,
            extra_cardio_needed,
            diet_deficit_per_day,
            extra_burn_per_day,
            cardio_note,
            predicted_comp_weight,
            projection_verdict: verdict,
        },
        warnings,
    }
}

fn cardio_note_for(extra_burn: f64) -> &'static str {
    if extra_burn <= 0.0 {
        "Diet alone can close the gap; keep daily steps at baseline"
    } else if extra_burn <= 200.0 {
        "Light top-up: a brisk daily walk or short cardio session covers it"
    } else if extra_burn <= 400.0 {
        "Moderate top-up: daily steady-state cardio needed"
    } else {
        "Heavy top-up: long daily cardio; consider a later target date"
    }
}
