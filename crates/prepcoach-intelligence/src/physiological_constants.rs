// ABOUTME: Physiological constants behind the nutrition engine defaults
// ABOUTME: Energy density, weight-change bands, macro ratios, calorie floors, peak-week table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Physiological constants based on sports nutrition research
//!
//! These are the default values of the engine configuration. Runtime code
//! reads them through `IntelligenceConfig` so deployments can override them.

/// Energy balance constants
///
/// References:
/// - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
///   *American Journal of Clinical Nutrition*, 6(5), 542-546.
/// - Hall, K.D. (2008). What is the required energy deficit per unit weight loss?
///   *International Journal of Obesity*, 32(3), 573-576.
pub mod energy_balance {
    /// Energy density of body-mass change (kcal/kg)
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;
}

/// Trend window sizes
pub mod trend_windows {
    /// Weeks of history bucketed into weekly averages
    pub const WEEKS_IN_WINDOW: u32 = 4;
    /// Trailing window of the daily moving average (samples)
    pub const MOVING_AVERAGE_WINDOW: usize = 7;
    /// Most recent moving-average points used for short-horizon projection
    pub const PROJECTION_POINTS: usize = 14;
}

/// Weekly rate bands, as percent of body weight per week
///
/// Reference: Helms, E.R., Aragon, A.A., & Fitschen, P.J. (2014). Evidence-based
/// recommendations for natural bodybuilding contest preparation.
/// *Journal of the International Society of Sports Nutrition*, 11, 20.
pub mod rate_bands {
    /// Below this magnitude the trend is flat
    pub const PLATEAU_PERCENT: f64 = 0.10;
    /// Slowest loss still counted as progressing on a cut
    pub const CUT_MIN_LOSS_PERCENT: f64 = 0.25;
    /// Fastest loss before lean-mass retention is at risk
    pub const CUT_MAX_LOSS_PERCENT: f64 = 1.25;
    /// Slowest gain counted as progressing on a bulk
    pub const BULK_MIN_GAIN_PERCENT: f64 = 0.10;
    /// Fastest gain before surplus turns mostly into fat
    pub const BULK_MAX_GAIN_PERCENT: f64 = 0.50;
    /// Allowed drift either way while maintaining
    pub const MAINTAIN_TOLERANCE_PERCENT: f64 = 0.25;
}

/// Macronutrient prescription ratios
///
/// References:
/// - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
///   DOI: 10.1080/02640414.2011.619204
/// - DRI (Dietary Reference Intakes) - Institute of Medicine, fat 20-35% of energy
pub mod macro_ratios {
    /// Protein while in a deficit (g/kg)
    pub const PROTEIN_CUT_G_PER_KG: f64 = 2.2;
    /// Protein at maintenance (g/kg)
    pub const PROTEIN_MAINTAIN_G_PER_KG: f64 = 1.8;
    /// Protein while in a surplus (g/kg)
    pub const PROTEIN_BULK_G_PER_KG: f64 = 2.0;
    /// Fat floor as percent of calories
    pub const FAT_FLOOR_PERCENT: f64 = 25.0;
    /// Deficit off TDEE when a cut stalls or drifts the wrong way (percent)
    pub const CUT_DEFICIT_PERCENT: f64 = 20.0;
    /// Deficit off TDEE when a cut is losing too fast (percent)
    pub const CUT_EASED_DEFICIT_PERCENT: f64 = 10.0;
    /// Surplus over TDEE when a bulk stalls (percent)
    pub const BULK_SURPLUS_PERCENT: f64 = 10.0;
    /// Surplus over TDEE when a bulk is gaining too fast (percent)
    pub const BULK_EASED_SURPLUS_PERCENT: f64 = 5.0;
    /// Relative nudge of the current target when TDEE is unknown (percent)
    pub const FALLBACK_ADJUST_PERCENT: f64 = 5.0;
    /// Share of base carbs moved from rest days to training days (percent)
    pub const CARB_CYCLING_SHIFT_PERCENT: f64 = 20.0;
}

/// Minimum safe daily energy intake without medical supervision
pub mod calorie_floors {
    /// Floor for men (kcal/day)
    pub const MIN_CALORIES_MALE: f64 = 1500.0;
    /// Floor for women (kcal/day)
    pub const MIN_CALORIES_FEMALE: f64 = 1200.0;
}

/// Adherence and change-detection thresholds
pub mod adherence {
    /// Below this compliance the trend says more about adherence than the plan (percent)
    pub const MIN_COMPLIANCE_PERCENT: f64 = 70.0;
    /// Calorie changes smaller than this are not worth rewriting (kcal)
    pub const CALORIE_TOLERANCE_KCAL: f64 = 25.0;
    /// Macro changes smaller than this are not worth rewriting (g)
    pub const MACRO_TOLERANCE_G: f64 = 3.0;
}

/// Goal-deadline safety bands and activity conversion
pub mod deadline {
    /// Daily deficit at which a plan becomes aggressive (kcal)
    pub const AGGRESSIVE_DEFICIT_KCAL: f64 = 500.0;
    /// Daily deficit at which a plan becomes extreme (kcal)
    pub const EXTREME_DEFICIT_KCAL: f64 = 750.0;
    /// Largest deficit diet alone should carry, as percent of TDEE
    pub const MAX_DIET_DEFICIT_PERCENT: f64 = 25.0;
    /// Moderate steady-state cardio burn (kcal/min)
    pub const CARDIO_KCAL_PER_MINUTE: f64 = 8.0;
    /// Cap on prescribed daily cardio (minutes)
    pub const MAX_CARDIO_MINUTES: u32 = 90;
    /// Walking burn per step (kcal)
    pub const KCAL_PER_STEP: f64 = 0.04;
    /// Daily step baseline the extra steps are added to
    pub const BASELINE_DAILY_STEPS: u32 = 8000;
    /// Distance from target still counted as on target at the deadline (kg)
    pub const PROJECTION_TOLERANCE_KG: f64 = 0.5;
}

/// Peak-week activation window
///
/// Reference: Escalante, G., et al. (2021). Peak week recommendations for
/// bodybuilders: an evidence based approach. *BMC Sports Science, Medicine and
/// Rehabilitation*, 13, 68.
pub mod peak_week {
    /// Plan is produced only when the show is at most this many days away
    pub const ACTIVATION_DAYS_OUT: i64 = 7;
    /// Number of days in the emitted plan
    pub const PLAN_LENGTH: usize = 7;
}
