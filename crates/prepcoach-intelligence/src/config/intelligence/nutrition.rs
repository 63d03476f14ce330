// ABOUTME: Nutrition engine configuration for trend, status, and macro adjustment
// ABOUTME: Energy density, rate bands, macro ratios, calorie floors, and carb cycling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Nutrition Engine Configuration
//!
//! Coefficients used by the trend analyzer, TDEE estimator, status
//! classifier, and macro target adjuster.
//!
//! # Scientific References
//!
//! - Energy density: Hall (2008) DOI: 10.1038/sj.ijo.0803720
//! - Rate bands: Helms et al. (2014) DOI: 10.1186/1550-2783-11-20
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use crate::physiological_constants::{
    adherence, calorie_floors, energy_balance, macro_ratios, rate_bands, trend_windows,
};
use prepcoach_core::models::{Gender, GoalType};
use serde::{Deserialize, Serialize};

/// Nutrition Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionEngineConfig {
    /// Energy balance constants
    pub energy: EnergyBalanceConfig,
    /// Trend window sizes
    pub trend: TrendWindowConfig,
    /// Weekly rate bands for status classification
    pub status_bands: StatusBandsConfig,
    /// Macro target adjustment rules
    pub macros: MacroAdjustmentConfig,
    /// Minimum safe calorie intake
    pub calorie_floors: CalorieFloorConfig,
    /// Carb cycling split
    pub carb_cycling: CarbCyclingConfig,
}

/// Energy balance constants
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyBalanceConfig {
    /// Energy density of body-mass change (kcal/kg): 7700
    pub kcal_per_kg: f64,
}

/// Trend analysis window sizes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendWindowConfig {
    /// Weeks bucketed into weekly averages: 4
    pub weeks_in_window: u32,
    /// Trailing moving-average window (samples): 7
    pub moving_average_window: usize,
    /// Moving-average points used for short-horizon projection: 14
    pub projection_points: usize,
}

/// Weekly rate-of-change bands, in percent of body weight per week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusBandsConfig {
    /// Flat-trend threshold: 0.10
    pub plateau_percent: f64,
    /// Slowest acceptable loss on a cut: 0.25
    pub cut_min_loss_percent: f64,
    /// Fastest acceptable loss on a cut: 1.25
    pub cut_max_loss_percent: f64,
    /// Slowest acceptable gain on a bulk: 0.10
    pub bulk_min_gain_percent: f64,
    /// Fastest acceptable gain on a bulk: 0.50
    pub bulk_max_gain_percent: f64,
    /// Allowed drift while maintaining: 0.25
    pub maintain_tolerance_percent: f64,
}

/// Macro target adjustment rules
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroAdjustmentConfig {
    /// Protein on a cut (g/kg): 2.2
    pub protein_cut_g_per_kg: f64,
    /// Protein at maintenance (g/kg): 1.8
    pub protein_maintain_g_per_kg: f64,
    /// Protein on a bulk (g/kg): 2.0
    pub protein_bulk_g_per_kg: f64,
    /// Fat floor as percent of calories: 25
    pub fat_floor_percent: f64,
    /// Deficit off TDEE for a stalled or reversing cut (percent): 20
    pub cut_deficit_percent: f64,
    /// Deficit off TDEE for a cut losing too fast (percent): 10
    pub cut_eased_deficit_percent: f64,
    /// Surplus over TDEE for a stalled or reversing bulk (percent): 10
    pub bulk_surplus_percent: f64,
    /// Surplus over TDEE for a bulk gaining too fast (percent): 5
    pub bulk_eased_surplus_percent: f64,
    /// Relative nudge of the current calorie target without TDEE (percent): 5
    pub fallback_adjust_percent: f64,
    /// Compliance below which calories are held (percent): 70
    pub min_compliance_percent: f64,
    /// Calorie change below which the field is left unchanged (kcal): 25
    pub calorie_tolerance_kcal: f64,
    /// Macro change below which the field is left unchanged (g): 3
    pub macro_tolerance_g: f64,
}

/// Minimum safe calorie intake
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieFloorConfig {
    /// Men (kcal/day): 1500
    pub male: f64,
    /// Women (kcal/day): 1200
    pub female: f64,
}

/// Carb cycling split
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarbCyclingConfig {
    /// Share of base carbs removed from each rest day and moved to training days (percent): 20
    pub training_shift_percent: f64,
}

impl MacroAdjustmentConfig {
    /// Protein factor for a goal (g/kg)
    #[must_use]
    pub const fn protein_g_per_kg(&self, goal: GoalType) -> f64 {
        match goal {
            GoalType::Cut => self.protein_cut_g_per_kg,
            GoalType::Maintain => self.protein_maintain_g_per_kg,
            GoalType::Bulk => self.protein_bulk_g_per_kg,
        }
    }
}

impl CalorieFloorConfig {
    /// Floor for a gender (kcal/day)
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
        }
    }
}

impl Default for EnergyBalanceConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: energy_balance::KCAL_PER_KG_BODY_MASS,
        }
    }
}

impl Default for TrendWindowConfig {
    fn default() -> Self {
        Self {
            weeks_in_window: trend_windows::WEEKS_IN_WINDOW,
            moving_average_window: trend_windows::MOVING_AVERAGE_WINDOW,
            projection_points: trend_windows::PROJECTION_POINTS,
        }
    }
}

impl Default for StatusBandsConfig {
    fn default() -> Self {
        Self {
            plateau_percent: rate_bands::PLATEAU_PERCENT,
            cut_min_loss_percent: rate_bands::CUT_MIN_LOSS_PERCENT,
            cut_max_loss_percent: rate_bands::CUT_MAX_LOSS_PERCENT,
            bulk_min_gain_percent: rate_bands::BULK_MIN_GAIN_PERCENT,
            bulk_max_gain_percent: rate_bands::BULK_MAX_GAIN_PERCENT,
            maintain_tolerance_percent: rate_bands::MAINTAIN_TOLERANCE_PERCENT,
        }
    }
}

impl Default for MacroAdjustmentConfig {
    fn default() -> Self {
        Self {
            protein_cut_g_per_kg: macro_ratios::PROTEIN_CUT_G_PER_KG,
            protein_maintain_g_per_kg: macro_ratios::PROTEIN_MAINTAIN_G_PER_KG,
            protein_bulk_g_per_kg: macro_ratios::PROTEIN_BULK_G_PER_KG,
            fat_floor_percent: macro_ratios::FAT_FLOOR_PERCENT,
            cut_deficit_percent: macro_ratios::CUT_DEFICIT_PERCENT,
            cut_eased_deficit_percent: macro_ratios::CUT_EASED_DEFICIT_PERCENT,
            bulk_surplus_percent: macro_ratios::BULK_SURPLUS_PERCENT,
            bulk_eased_surplus_percent: macro_ratios::BULK_EASED_SURPLUS_PERCENT,
            fallback_adjust_percent: macro_ratios::FALLBACK_ADJUST_PERCENT,
            min_compliance_percent: adherence::MIN_COMPLIANCE_PERCENT,
            calorie_tolerance_kcal: adherence::CALORIE_TOLERANCE_KCAL,
            macro_tolerance_g: adherence::MACRO_TOLERANCE_G,
        }
    }
}

impl Default for CalorieFloorConfig {
    fn default() -> Self {
        Self {
            male: calorie_floors::MIN_CALORIES_MALE,
            female: calorie_floors::MIN_CALORIES_FEMALE,
        }
    }
}

impl Default for CarbCyclingConfig {
    fn default() -> Self {
        Self {
            training_shift_percent: macro_ratios::CARB_CYCLING_SHIFT_PERCENT,
        }
    }
}
