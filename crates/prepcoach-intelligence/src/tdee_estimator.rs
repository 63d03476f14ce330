// ABOUTME: TDEE back-solve from logged intake and the observed weight trend
// ABOUTME: Returns an explicit outcome so missing intake data is never a silent guess
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! TDEE Estimator
//!
//! Energy balance: whatever the client ate beyond what they burned shows up as
//! body-mass change at roughly 7700 kcal/kg.
//!
//! `TDEE = avg_daily_calories - weekly_rate_kg * kcal_per_kg / 7`

use crate::config::intelligence::EnergyBalanceConfig;
use prepcoach_core::constants::units::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of a TDEE estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TdeeEstimate {
    /// A usable estimate (kcal/day)
    Estimated {
        /// Estimated total daily energy expenditure
        tdee: f64,
    },
    /// No calorie logs in the window
    NoIntakeData,
    /// The back-solve produced a non-positive value
    Implausible {
        /// The rejected raw value
        raw: f64,
    },
}

impl TdeeEstimate {
    /// The estimate, if usable
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Estimated { tdee } => Some(*tdee),
            Self::NoIntakeData | Self::Implausible { .. } => None,
        }
    }

    /// Warning to surface when no usable estimate exists
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Estimated { .. } => None,
            Self::NoIntakeData => Some(
                "No calorie logs in the last 14 days; calorie target adjusted relative to the current target"
                    .to_owned(),
            ),
            Self::Implausible { raw } => Some(format!(
                "TDEE estimate of {raw:.0} kcal is not plausible; check calorie logs and weigh-ins"
            )),
        }
    }
}

/// Back-solve TDEE from average intake and weekly weight change
#[must_use]
pub fn estimate_tdee(
    avg_daily_calories: Option<f64>,
    weekly_rate_kg: f64,
    config: &EnergyBalanceConfig,
) -> TdeeEstimate {
    let Some(intake) = avg_daily_calories else {
        return TdeeEstimate::NoIntakeData;
    };

    let daily_balance = weekly_rate_kg * config.kcal_per_kg / DAYS_PER_WEEK;
    let tdee = intake - daily_balance;
    debug!(intake, weekly_rate_kg, daily_balance, tdee, "Estimated TDEE");

    if tdee > 0.0 {
        TdeeEstimate::Estimated { tdee }
    } else {
        TdeeEstimate::Implausible { raw: tdee }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_loss_raises_tdee_above_intake() {
        let estimate = estimate_tdee(Some(2000.0), -0.5, &EnergyBalanceConfig::default());
        assert_eq!(estimate, TdeeEstimate::Estimated { tdee: 2550.0 });
        assert!(estimate.warning().is_none());
    }

    #[test]
    fn test_missing_intake_has_warning() {
        let estimate = estimate_tdee(None, -0.5, &EnergyBalanceConfig::default());
        assert_eq!(estimate.value(), None);
        assert!(estimate.warning().is_some_and(|w| w.contains("No calorie logs")));
    }
}
