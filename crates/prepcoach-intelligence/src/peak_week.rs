// ABOUTME: Peak-week protocol generator for the final seven days before a competition
// ABOUTME: Emits a fixed, phase-ordered daily carb/protein/fat/water schedule anchored on show day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Peak-Week Protocol Generator
//!
//! Inside the activation window the plan always covers the full seven days
//! from six days out down to show day, even when some of those days are
//! already in the past, so the schedule reads the same on every day of the week.

use crate::config::intelligence::{PeakWeekConfig, PeakWeekDayTemplate};
use chrono::{Duration, NaiveDate};
use prepcoach_core::constants::units::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Phases of peak week, in the only order they may appear
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PeakWeekPhase {
    /// Low carb, higher fat, high-rep training to empty glycogen
    Depletion,
    /// Short fat-forward bridge before the load
    FatLoad,
    /// High carb to supercompensate glycogen
    CarbLoad,
    /// Pull back carbs and water to dry out
    Taper,
    /// Competition day
    ShowDay,
}

impl PeakWeekPhase {
    /// The phase allowed to follow this one
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Depletion => Some(Self::FatLoad),
            Self::FatLoad => Some(Self::CarbLoad),
            Self::CarbLoad => Some(Self::Taper),
            Self::Taper => Some(Self::ShowDay),
            Self::ShowDay => None,
        }
    }

    /// Human-readable phase name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Depletion => "Depletion",
            Self::FatLoad => "Fat Load",
            Self::CarbLoad => "Carb Load",
            Self::Taper => "Taper",
            Self::ShowDay => "Show Day",
        }
    }

    /// Sodium guidance for the phase
    #[must_use]
    pub const fn sodium_note(self) -> &'static str {
        match self {
            Self::Depletion | Self::FatLoad => "Normal sodium intake",
            Self::CarbLoad => "Keep sodium steady; do not cut it",
            Self::Taper => "Slightly lower sodium, no drastic cuts",
            Self::ShowDay => "Small salty snack before pump-up if flat",
        }
    }

    /// Fiber guidance for the phase
    #[must_use]
    pub const fn fiber_note(self) -> &'static str {
        match self {
            Self::Depletion => "Normal fiber with plenty of green vegetables",
            Self::FatLoad => "Moderate fiber",
            Self::CarbLoad => "Low fiber to limit bloating",
            Self::Taper | Self::ShowDay => "Minimal fiber, familiar foods only",
        }
    }

    /// Training guidance for the phase
    #[must_use]
    pub const fn training_note(self) -> &'static str {
        match self {
            Self::Depletion => "Full-body depletion sessions, high reps, short rest",
            Self::FatLoad => "Light pump session, reduced volume",
            Self::CarbLoad => "No heavy training; light posing practice",
            Self::Taper => "Posing practice only",
            Self::ShowDay => "Pump-up backstage only",
        }
    }
}

/// One day of the peak-week plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeakWeekDay {
    /// Days before the show (0 = show day)
    pub days_out: u8,
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Display label, e.g. "3 days out"
    pub label: String,
    /// Protocol phase
    pub phase: PeakWeekPhase,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Energy from the three macros (kcal)
    pub calories: f64,
    /// Water (liters)
    pub water: f64,
    /// Sodium guidance
    pub sodium_note: String,
    /// Fiber guidance
    pub fiber_note: String,
    /// Training guidance
    pub training_note: String,
}

/// Days from `today` until `target_date` (negative once the date has passed)
#[must_use]
pub fn days_out(today: NaiveDate, target_date: NaiveDate) -> i64 {
    (target_date - today).num_days()
}

/// Whether the show is close enough for the peak-week plan to apply
#[must_use]
pub fn is_active(today: NaiveDate, target_date: NaiveDate, config: &PeakWeekConfig) -> bool {
    (0..=config.activation_days_out).contains(&days_out(today, target_date))
}

/// Build the peak-week plan when `target_date` is inside the activation window
///
/// Returns `None` outside the window. Inside it, every template day is
/// emitted in table order with dates counted back from `target_date`.
#[must_use]
pub fn generate_peak_week(
    target_date: NaiveDate,
    today: NaiveDate,
    body_weight: f64,
    config: &PeakWeekConfig,
) -> Option<Vec<PeakWeekDay>> {
    if !is_active(today, target_date, config) {
        return None;
    }

    debug!(
        days_out = days_out(today, target_date),
        body_weight, "Generating peak-week plan"
    );

    Some(
        config
            .days
            .iter()
            .map(|template| build_day(template, target_date, body_weight))
            .collect(),
    )
}

fn build_day(
    template: &PeakWeekDayTemplate,
    target_date: NaiveDate,
    body_weight: f64,
) -> PeakWeekDay {
    let carbs = (template.carbs_g_per_kg * body_weight).round();
    let protein = (template.protein_g_per_kg * body_weight).round();
    let fat = (template.fat_g_per_kg * body_weight).round();
    let calories = fat.mul_add(
        KCAL_PER_G_FAT,
        carbs.mul_add(KCAL_PER_G_CARBS, protein * KCAL_PER_G_PROTEIN),
    );

    PeakWeekDay {
        days_out: template.days_out,
        date: target_date - Duration::days(i64::from(template.days_out)),
        label: day_label(template.days_out),
        phase: template.phase,
        carbs,
        protein,
        fat,
        calories,
        water: template.water_liters,
        sodium_note: template.phase.sodium_note().to_owned(),
        fiber_note: template.phase.fiber_note().to_owned(),
        training_note: template.phase.training_note().to_owned(),
    }
}

fn day_label(days_out: u8) -> String {
    match days_out {
        0 => "Show day".to_owned(),
        1 => "1 day out".to_owned(),
        n => format!("{n} days out"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_chain_ends_on_show_day() {
        let mut phase = PeakWeekPhase::Depletion;
        let mut steps = 0;
        while let Some(next) = phase.next() {
            phase = next;
            steps += 1;
        }
        assert_eq!(phase, PeakWeekPhase::ShowDay);
        assert_eq!(steps, 4);
    }
}
