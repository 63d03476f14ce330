// ABOUTME: Engine configuration for nutrition adjustment, deadline planning, and peak week
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Intelligence Configuration Module
//!
//! Type-safe configuration for every coefficient the engine uses. Defaults
//! come from `physiological_constants`; deployments override individual values
//! through environment variables, and the result is validated before use.
//!
//! # Module Structure
//!
//! - `nutrition` - Energy balance, trend windows, status bands, macro rules
//! - `goals` - Goal-deadline safety bands and activity conversion
//! - `peak_week` - Peak-week activation and per-day table

pub mod error;
pub mod goals;
pub mod nutrition;
pub mod peak_week;

pub use error::ConfigError;
pub use goals::{ActivityPrescriptionConfig, GoalPlannerConfig, SafetyBandsConfig};
pub use nutrition::{
    CalorieFloorConfig, CarbCyclingConfig, EnergyBalanceConfig, MacroAdjustmentConfig,
    NutritionEngineConfig, StatusBandsConfig, TrendWindowConfig,
};
pub use peak_week::{PeakWeekConfig, PeakWeekDayTemplate};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntelligenceConfig {
    /// Trend, TDEE, status, and macro adjustment coefficients
    pub nutrition: NutritionEngineConfig,
    /// Goal-deadline planner coefficients
    pub goals: GoalPlannerConfig,
    /// Peak-week protocol table
    pub peak_week: PeakWeekConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a coefficient is out of range or ordered thresholds are not ordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_nutrition()?;
        self.validate_goals()?;
        self.peak_week.validate()
    }

    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if !(3000.0..=10000.0).contains(&nutr.energy.kcal_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Energy density must be between 3000 and 10000 kcal/kg",
            ));
        }

        if nutr.trend.weeks_in_window < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "Trend window must cover at least 2 weeks",
            ));
        }
        if nutr.trend.moving_average_window == 0 || nutr.trend.projection_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "Moving-average window must be positive and projection needs 2+ points",
            ));
        }

        let bands = &nutr.status_bands;
        if bands.plateau_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Plateau threshold must be positive",
            ));
        }
        if bands.plateau_percent >= bands.cut_min_loss_percent
            || bands.cut_min_loss_percent >= bands.cut_max_loss_percent
        {
            return Err(ConfigError::InvalidRange(
                "Cut bands must satisfy plateau < min loss < max loss",
            ));
        }
        if bands.plateau_percent > bands.bulk_min_gain_percent
            || bands.bulk_min_gain_percent >= bands.bulk_max_gain_percent
        {
            return Err(ConfigError::InvalidRange(
                "Bulk bands must satisfy plateau <= min gain < max gain",
            ));
        }
        if bands.maintain_tolerance_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Maintenance tolerance must be positive",
            ));
        }

        let macros = &nutr.macros;
        if macros.protein_maintain_g_per_kg < 0.8 || macros.protein_cut_g_per_kg > 3.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein factors must be between 0.8 and 3.5 g/kg",
            ));
        }
        if !(10.0..=50.0).contains(&macros.fat_floor_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat floor must be between 10% and 50% of calories",
            ));
        }
        for pct in [
            macros.cut_deficit_percent,
            macros.cut_eased_deficit_percent,
            macros.bulk_surplus_percent,
            macros.bulk_eased_surplus_percent,
            macros.fallback_adjust_percent,
        ] {
            if !(0.0..=40.0).contains(&pct) {
                return Err(ConfigError::ValueOutOfRange(
                    "Calorie adjustments must be between 0% and 40%",
                ));
            }
        }
        if macros.cut_eased_deficit_percent > macros.cut_deficit_percent
            || macros.bulk_eased_surplus_percent > macros.bulk_surplus_percent
        {
            return Err(ConfigError::InvalidRange(
                "Eased adjustments must not exceed the full adjustment",
            ));
        }
        if !(0.0..=100.0).contains(&macros.min_compliance_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "Minimum compliance must be between 0 and 100",
            ));
        }
        if macros.calorie_tolerance_kcal < 0.0 || macros.macro_tolerance_g < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Change tolerances must not be negative",
            ));
        }

        if nutr.calorie_floors.male < 800.0 || nutr.calorie_floors.female < 800.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie floors must be at least 800 kcal",
            ));
        }
        if !(0.0..100.0).contains(&nutr.carb_cycling.training_shift_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "Carb cycling shift must be between 0% and 100%",
            ));
        }

        Ok(())
    }

    fn validate_goals(&self) -> Result<(), ConfigError> {
        let goals = &self.goals;
        if goals.safety.aggressive_deficit_kcal <= 0.0
            || goals.safety.aggressive_deficit_kcal >= goals.safety.extreme_deficit_kcal
        {
            return Err(ConfigError::InvalidRange(
                "Safety thresholds must satisfy 0 < aggressive < extreme",
            ));
        }
        if !(0.0..=50.0).contains(&goals.safety.max_diet_deficit_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "Diet deficit cap must be between 0% and 50% of TDEE",
            ));
        }
        if goals.activity.cardio_kcal_per_minute <= 0.0 || goals.activity.kcal_per_step <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Cardio and step burn rates must be positive",
            ));
        }
        if goals.projection_tolerance_kg < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Projection tolerance must not be negative",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "PREPCOACH_KCAL_PER_KG",
            &mut self.nutrition.energy.kcal_per_kg,
        )?;

        // Status bands
        Self::apply_env_var(
            "PREPCOACH_PLATEAU_PERCENT",
            &mut self.nutrition.status_bands.plateau_percent,
        )?;
        Self::apply_env_var(
            "PREPCOACH_CUT_MAX_LOSS_PERCENT",
            &mut self.nutrition.status_bands.cut_max_loss_percent,
        )?;

        // Macro rules
        Self::apply_env_var(
            "PREPCOACH_FAT_FLOOR_PERCENT",
            &mut self.nutrition.macros.fat_floor_percent,
        )?;
        Self::apply_env_var(
            "PREPCOACH_MIN_COMPLIANCE",
            &mut self.nutrition.macros.min_compliance_percent,
        )?;
        Self::apply_env_var(
            "PREPCOACH_CARB_CYCLING_SHIFT_PERCENT",
            &mut self.nutrition.carb_cycling.training_shift_percent,
        )?;
        Self::apply_env_var(
            "PREPCOACH_MIN_CALORIES_MALE",
            &mut self.nutrition.calorie_floors.male,
        )?;
        Self::apply_env_var(
            "PREPCOACH_MIN_CALORIES_FEMALE",
            &mut self.nutrition.calorie_floors.female,
        )?;

        // Goal deadlines
        Self::apply_env_var(
            "PREPCOACH_SAFETY_AGGRESSIVE_KCAL",
            &mut self.goals.safety.aggressive_deficit_kcal,
        )?;
        Self::apply_env_var(
            "PREPCOACH_SAFETY_EXTREME_KCAL",
            &mut self.goals.safety.extreme_deficit_kcal,
        )?;
        Self::apply_env_var(
            "PREPCOACH_PROJECTION_TOLERANCE_KG",
            &mut self.goals.projection_tolerance_kg,
        )?;

        Ok(self)
    }
}
