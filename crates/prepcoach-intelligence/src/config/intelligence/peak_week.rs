// ABOUTME: Peak-week protocol configuration
// ABOUTME: Activation window and the per-day carb/protein/fat/water table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Peak-Week Protocol Configuration
//!
//! The protocol is a fixed seven-day table keyed by days out from the show.
//! Macros are per kilogram of body weight; water is absolute.
//!
//! Reference: Escalante et al. (2021) DOI: 10.1186/s13102-021-00296-y

use super::error::ConfigError;
use crate::peak_week::PeakWeekPhase;
use crate::physiological_constants::peak_week;
use serde::{Deserialize, Serialize};

/// Peak-week protocol configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeakWeekConfig {
    /// Plan is produced only when the show is at most this many days out: 7
    pub activation_days_out: i64,
    /// One template per day, from 6 days out down to show day
    pub days: [PeakWeekDayTemplate; peak_week::PLAN_LENGTH],
}

/// Prescription for one day of peak week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PeakWeekDayTemplate {
    /// Days before the show (0 = show day)
    pub days_out: u8,
    /// Protocol phase
    pub phase: PeakWeekPhase,
    /// Carbohydrates (g/kg)
    pub carbs_g_per_kg: f64,
    /// Protein (g/kg)
    pub protein_g_per_kg: f64,
    /// Fat (g/kg)
    pub fat_g_per_kg: f64,
    /// Water (liters)
    pub water_liters: f64,
}

const fn day(
    days_out: u8,
    phase: PeakWeekPhase,
    carbs_g_per_kg: f64,
    protein_g_per_kg: f64,
    fat_g_per_kg: f64,
    water_liters: f64,
) -> PeakWeekDayTemplate {
    PeakWeekDayTemplate {
        days_out,
        phase,
        carbs_g_per_kg,
        protein_g_per_kg,
        fat_g_per_kg,
        water_liters,
    }
}

impl Default for PeakWeekConfig {
    fn default() -> Self {
        Self {
            activation_days_out: peak_week::ACTIVATION_DAYS_OUT,
            days: [
                day(6, PeakWeekPhase::Depletion, 1.0, 2.5, 1.0, 5.0),
                day(5, PeakWeekPhase::Depletion, 1.0, 2.5, 1.0, 6.0),
                day(4, PeakWeekPhase::FatLoad, 1.5, 2.5, 1.5, 6.0),
                day(3, PeakWeekPhase::CarbLoad, 6.0, 2.3, 0.5, 5.0),
                day(2, PeakWeekPhase::CarbLoad, 6.0, 2.3, 0.5, 4.0),
                day(1, PeakWeekPhase::Taper, 3.0, 2.2, 0.6, 2.0),
                day(0, PeakWeekPhase::ShowDay, 2.0, 2.0, 0.8, 0.5),
            ],
        }
    }
}

impl PeakWeekConfig {
    /// Check the table covers every day in order and walks the phases without skipping
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPeakWeek` if days are out of order, a phase
    /// is skipped or revisited, or the table does not end on show day, and
    /// `ConfigError::ValueOutOfRange` for negative amounts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=14).contains(&self.activation_days_out) {
            return Err(ConfigError::ValueOutOfRange(
                "Peak-week activation must be between 1 and 14 days out",
            ));
        }

        let last = self.days.len() - 1;
        let mut previous: Option<PeakWeekPhase> = None;
        for (index, template) in self.days.iter().enumerate() {
            if usize::from(template.days_out) != last - index {
                return Err(ConfigError::InvalidPeakWeek(
                    "days_out must count down to 0 one day at a time",
                ));
            }
            if template.carbs_g_per_kg < 0.0
                || template.protein_g_per_kg < 0.0
                || template.fat_g_per_kg < 0.0
                || template.water_liters < 0.0
            {
                return Err(ConfigError::ValueOutOfRange(
                    "Peak-week amounts must not be negative",
                ));
            }
            match previous {
                None if template.phase != PeakWeekPhase::Depletion => {
                    return Err(ConfigError::InvalidPeakWeek(
                        "peak week must start with depletion",
                    ));
                }
                Some(prev)
                    if template.phase != prev && Some(template.phase) != prev.next() =>
                {
                    return Err(ConfigError::InvalidPeakWeek(
                        "phases must follow depletion, fat_load, carb_load, taper, show_day",
                    ));
                }
                _ => {}
            }
            previous = Some(template.phase);
        }

        if previous != Some(PeakWeekPhase::ShowDay)
            || self.days.iter().filter(|d| d.phase == PeakWeekPhase::ShowDay).count() != 1
        {
            return Err(ConfigError::InvalidPeakWeek(
                "peak week must end with exactly one show day",
            ));
        }
        Ok(())
    }
}
