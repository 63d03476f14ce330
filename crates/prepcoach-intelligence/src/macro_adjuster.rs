// ABOUTME: Converts TDEE, goal, and status into calorie and macro targets with carb cycling
// ABOUTME: Emits only the fields worth changing and decides whether the update may auto-apply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Macro Target Adjuster
//!
//! Protein follows body weight. Calories move off TDEE by a goal- and
//! status-dependent percentage, never below the calorie floor. Fat takes a
//! fixed share of calories and carbohydrates take the remainder.
//!
//! The output is a partial update: a field within tolerance of its current
//! value is left out, and a field that was never set is always included.
//!
//! # Scientific References
//!
//! - Helms et al. (2014) DOI: 10.1186/1550-2783-11-20
//! - Aragon et al. (2017) ISSN position stand: diets and body composition,
//!   DOI: 10.1186/s12970-017-0174-y

use crate::config::intelligence::NutritionEngineConfig;
use crate::status_classifier::{OffTrackReason, StatusAssessment};
use prepcoach_core::constants::units::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use prepcoach_core::models::{Field, Gender, GoalType, NutritionTargets, TargetUpdate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the adjuster needs about the client and the trend
#[derive(Debug, Clone, Copy)]
pub struct MacroContext<'a> {
    /// Goal of the current phase
    pub goal: GoalType,
    /// Gender, for the calorie floor
    pub gender: Gender,
    /// Current body weight (kg)
    pub body_weight: f64,
    /// Classifier output
    pub assessment: &'a StatusAssessment,
    /// Estimated TDEE, when intake data allowed one
    pub tdee: Option<f64>,
    /// 14-day compliance (percent), when logs exist
    pub compliance: Option<f64>,
    /// Training days per week, for carb cycling
    pub training_days_per_week: f64,
    /// Whether day-type carb targets are in use
    pub carbs_cycling_enabled: bool,
    /// Targets currently on the profile
    pub current: &'a NutritionTargets,
}

/// What happened to the calorie target
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalorieAction {
    /// The status does not call for a calorie change
    #[default]
    NotNeeded,
    /// New target derived from the TDEE estimate
    AdjustedFromTdee,
    /// New target nudged off the current target for lack of a TDEE
    AdjustedFromCurrent,
    /// The recalculated target is within tolerance of the current one
    WithinTolerance,
    /// Compliance is too low to trust the trend
    HeldForCompliance,
    /// Neither a TDEE nor a current target to work from
    Unavailable,
}

/// Adjuster output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacroSuggestion {
    /// Fields to overwrite; absent fields are unchanged
    pub update: TargetUpdate,
    /// Outcome for the calorie target
    pub calorie_action: CalorieAction,
    /// Whether the update may be written without a coach reviewing it
    pub auto_apply: bool,
    /// Warnings for the coach
    pub warnings: Vec<String>,
}

/// Training-day and rest-day carbohydrate targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarbSplit {
    /// Carbohydrates on training days (g)
    pub training_day: f64,
    /// Carbohydrates on rest days (g)
    pub rest_day: f64,
}

/// Direction of a relative calorie nudge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nudge {
    Decrease,
    Increase,
    Hold,
}

/// Split a daily carb target into training-day and rest-day values
///
/// Rest days lose `shift_percent` of the base; training days gain the same
/// weekly total spread over `training_days` days, so the weekly average equals
/// `base`. With no training days or every day training, both values equal base.
#[must_use]
pub fn split_carbs(base: f64, training_days: f64, shift_percent: f64) -> CarbSplit {
    let td = training_days.clamp(0.0, 7.0);
    if td <= 0.0 || td >= 7.0 {
        return CarbSplit {
            training_day: base,
            rest_day: base,
        };
    }

    let shift = shift_percent / 100.0;
    let rest_days = 7.0 - td;
    CarbSplit {
        training_day: (shift * base * rest_days / td) + base,
        rest_day: base * (1.0 - shift),
    }
}

/// Compute new targets and the auto-apply decision
#[must_use]
pub fn adjust_macros(ctx: &MacroContext<'_>, config: &NutritionEngineConfig) -> MacroSuggestion {
    let macros = &config.macros;
    let mut warnings = Vec::new();
    let mut update = TargetUpdate::default();

    // Step 1: Protein follows body weight
    let protein = (ctx.body_weight * macros.protein_g_per_kg(ctx.goal)).round();
    update.protein = changed(protein, ctx.current.protein, macros.macro_tolerance_g);

    // Step 2: Calorie target
    let compliance_ok = ctx
        .compliance
        .is_some_and(|c| c >= macros.min_compliance_percent);
    let low_compliance = ctx
        .compliance
        .is_some_and(|c| c < macros.min_compliance_percent);

    let new_calories = if low_compliance {
        warnings.push(format!(
            "Compliance is below {:.0}%: the trend reflects adherence, not the plan, so calories are held",
            macros.min_compliance_percent
        ));
        None
    } else {
        target_calories(ctx, config, &mut warnings)
    };
    if let Some(calories) = new_calories {
        update.calories = changed(calories, ctx.current.calories, macros.calorie_tolerance_kcal);
    }
    let calorie_action = if !ctx.assessment.status.is_actionable() {
        CalorieAction::NotNeeded
    } else if low_compliance {
        CalorieAction::HeldForCompliance
    } else if new_calories.is_none() {
        CalorieAction::Unavailable
    } else if update.calories.is_none() {
        CalorieAction::WithinTolerance
    } else if ctx.tdee.is_some() {
        CalorieAction::AdjustedFromTdee
    } else {
        CalorieAction::AdjustedFromCurrent
    };

    // Step 3: Fat floor, carbs take the remainder
    let budget = new_calories.or_else(|| ctx.current.calories.get());
    let mut carbs = None;
    if let Some(calories) = budget {
        let fat = (calories * macros.fat_floor_percent / 100.0 / KCAL_PER_G_FAT).round();
        let remaining =
            fat.mul_add(-KCAL_PER_G_FAT, protein.mul_add(-KCAL_PER_G_PROTEIN, calories));
        if remaining < 0.0 {
            warnings.push(
                "Protein and fat use the whole calorie budget; carbohydrates set to 0 g".to_owned(),
            );
        }
        let daily_carbs = (remaining.max(0.0) / KCAL_PER_G_CARBS).round();
        update.fat = changed(fat, ctx.current.fat, macros.macro_tolerance_g);
        update.carbs = changed(daily_carbs, ctx.current.carbs, macros.macro_tolerance_g);
        carbs = Some(daily_carbs);
    }

    // Step 4: Carb cycling
    if ctx.carbs_cycling_enabled {
        if let Some(base) = carbs.or_else(|| ctx.current.carbs.get()) {
            let split = split_carbs(
                base,
                ctx.training_days_per_week,
                config.carb_cycling.training_shift_percent,
            );
            update.carbs_training_day = changed(
                split.training_day.round(),
                ctx.current.carbs_training_day,
                macros.macro_tolerance_g,
            );
            update.carbs_rest_day = changed(
                split.rest_day.round(),
                ctx.current.carbs_rest_day,
                macros.macro_tolerance_g,
            );
        }
    }

    // Step 5: Auto-apply only on a clear, trustworthy signal
    let auto_apply = ctx.assessment.status.is_actionable()
        && ctx.tdee.is_some()
        && compliance_ok
        && !update.is_empty();

    debug!(
        status = %ctx.assessment.status,
        ?new_calories,
        ?calorie_action,
        protein,
        auto_apply,
        "Macro adjustment computed"
    );

    MacroSuggestion {
        update,
        calorie_action,
        auto_apply,
        warnings,
    }
}

/// New daily calorie target, clamped to the floor, or `None` to hold
fn target_calories(
    ctx: &MacroContext<'_>,
    config: &NutritionEngineConfig,
    warnings: &mut Vec<String>,
) -> Option<f64> {
    let nudge = nudge_for(ctx.goal, ctx.assessment);
    if nudge == Nudge::Hold {
        return None;
    }

    let raw = if let Some(tdee) = ctx.tdee {
        tdee * tdee_factor(ctx.goal, ctx.assessment, config)
    } else if let Some(current) = ctx.current.calories.get() {
        let step = config.macros.fallback_adjust_percent / 100.0;
        match nudge {
            Nudge::Decrease => current * (1.0 - step),
            Nudge::Increase => current * (1.0 + step),
            Nudge::Hold => current,
        }
    } else {
        warnings.push(
            "No TDEE estimate and no current calorie target; calorie suggestion unavailable"
                .to_owned(),
        );
        return None;
    };

    let floor = config.calorie_floors.for_gender(ctx.gender);
    if raw < floor {
        warnings.push(format!(
            "Calorie target raised from {raw:.0} to the {floor:.0} kcal minimum"
        ));
        return Some(floor);
    }
    Some(raw.round())
}

/// Which way calories should move for a status
fn nudge_for(goal: GoalType, assessment: &StatusAssessment) -> Nudge {
    if !assessment.status.is_actionable() {
        return Nudge::Hold;
    }
    let too_fast = assessment.reason == Some(OffTrackReason::TooFast);
    match goal {
        GoalType::Cut if too_fast => Nudge::Increase,
        GoalType::Cut => Nudge::Decrease,
        GoalType::Bulk if too_fast => Nudge::Decrease,
        GoalType::Bulk => Nudge::Increase,
        GoalType::Maintain if assessment.percent_per_week > 0.0 => Nudge::Decrease,
        GoalType::Maintain => Nudge::Increase,
    }
}

/// Multiplier applied to TDEE for a status
fn tdee_factor(
    goal: GoalType,
    assessment: &StatusAssessment,
    config: &NutritionEngineConfig,
) -> f64 {
    let macros = &config.macros;
    let too_fast = assessment.reason == Some(OffTrackReason::TooFast);
    match goal {
        GoalType::Cut if too_fast => 1.0 - macros.cut_eased_deficit_percent / 100.0,
        GoalType::Cut => 1.0 - macros.cut_deficit_percent / 100.0,
        GoalType::Bulk if too_fast => 1.0 + macros.bulk_eased_surplus_percent / 100.0,
        GoalType::Bulk => 1.0 + macros.bulk_surplus_percent / 100.0,
        GoalType::Maintain => 1.0,
    }
}

/// `Some(new)` when the current value is unset or differs by more than `tolerance`
fn changed(new: f64, current: Field<f64>, tolerance: f64) -> Option<f64> {
    match current.get() {
        Some(current) if (new - current).abs() <= tolerance => None,
        _ => Some(new),
    }
}
