// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identifiers and energy/unit conversion constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable engine coefficients live in
//! the intelligence crate configuration, not here.

/// Service names used for structured logging
pub mod service_names {
    /// Main service identifier
    pub const PREPCOACH: &str = "prepcoach";
    /// Command-line tool identifier
    pub const PREPCOACH_CLI: &str = "prepcoach-cli";
}

/// Unit conversion and macronutrient energy constants
pub mod units {
    /// Energy in one gram of protein (kcal)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Energy in one gram of carbohydrate (kcal)
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Energy in one gram of fat (kcal)
    pub const KCAL_PER_G_FAT: f64 = 9.0;
    /// Days in a week, as a float for rate conversions
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Limits used when validating caller-supplied input
pub mod limits {
    /// Heaviest body weight accepted as plausible input (kg)
    pub const MAX_PLAUSIBLE_WEIGHT_KG: f64 = 400.0;
    /// Upper bound of a percentage field
    pub const MAX_PERCENT: f64 = 100.0;
    /// Training days in a week cannot exceed this
    pub const MAX_TRAINING_DAYS_PER_WEEK: f64 = 7.0;
}
