// ABOUTME: Classifies the weight trend against the goal as on track, plateau, or off track
// ABOUTME: Rates are compared as percent of body weight per week against configured bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Status Classifier
//!
//! Recomputed from scratch on every call; no transition history is kept.

use crate::config::intelligence::StatusBandsConfig;
use prepcoach_core::models::GoalType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trajectory status relative to the goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NutritionStatus {
    /// Fewer than two weekly averages
    InsufficientData,
    /// Moving the right way at an acceptable pace
    OnTrack,
    /// Weight flat despite an intended deficit or surplus
    Plateau,
    /// Wrong direction, or outside the acceptable pace
    OffTrack,
}

impl NutritionStatus {
    /// Fixed status emoji
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::InsufficientData => "📊",
            Self::OnTrack => "✅",
            Self::Plateau => "⏸️",
            Self::OffTrack => "⚠️",
        }
    }

    /// Fixed status label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InsufficientData => "Not enough data",
            Self::OnTrack => "On track",
            Self::Plateau => "Plateau",
            Self::OffTrack => "Off track",
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InsufficientData => "insufficient_data",
            Self::OnTrack => "on_track",
            Self::Plateau => "plateau",
            Self::OffTrack => "off_track",
        }
    }

    /// Whether the status is a signal the engine may act on by itself
    #[must_use]
    pub const fn is_actionable(self) -> bool {
        matches!(self, Self::Plateau | Self::OffTrack)
    }
}

impl fmt::Display for NutritionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a trend is off track
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OffTrackReason {
    /// Moving away from the goal
    WrongDirection,
    /// Right direction, below the minimum pace
    TooSlow,
    /// Right direction, above the safe pace
    TooFast,
    /// Maintenance drifted outside tolerance
    Drifting,
}

/// Classifier output
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatusAssessment {
    /// Status
    pub status: NutritionStatus,
    /// Reason, only for `OffTrack`
    pub reason: Option<OffTrackReason>,
    /// Weekly change as percent of body weight (signed)
    pub percent_per_week: f64,
}

impl StatusAssessment {
    /// Assessment for a series too short to classify
    #[must_use]
    pub const fn insufficient() -> Self {
        Self {
            status: NutritionStatus::InsufficientData,
            reason: None,
            percent_per_week: 0.0,
        }
    }

    const fn new(status: NutritionStatus, reason: Option<OffTrackReason>, pct: f64) -> Self {
        Self {
            status,
            reason,
            percent_per_week: pct,
        }
    }

    const fn off_track(reason: OffTrackReason, pct: f64) -> Self {
        Self::new(NutritionStatus::OffTrack, Some(reason), pct)
    }
}

/// Classify a weekly rate for a goal
///
/// `body_weight` must be positive; the caller validates input first.
#[must_use]
pub fn classify_status(
    goal: GoalType,
    weekly_rate_kg: f64,
    body_weight: f64,
    bands: &StatusBandsConfig,
) -> StatusAssessment {
    let pct = weekly_rate_kg / body_weight * 100.0;

    match goal {
        GoalType::Cut => {
            if pct.abs() < bands.plateau_percent {
                StatusAssessment::new(NutritionStatus::Plateau, None, pct)
            } else if pct > 0.0 {
                StatusAssessment::off_track(OffTrackReason::WrongDirection, pct)
            } else if pct < -bands.cut_max_loss_percent {
                StatusAssessment::off_track(OffTrackReason::TooFast, pct)
            } else if pct <= -bands.cut_min_loss_percent {
                StatusAssessment::new(NutritionStatus::OnTrack, None, pct)
            } else {
                StatusAssessment::off_track(OffTrackReason::TooSlow, pct)
            }
        }
        GoalType::Bulk => {
            if pct.abs() < bands.plateau_percent {
                StatusAssessment::new(NutritionStatus::Plateau, None, pct)
            } else if pct < 0.0 {
                StatusAssessment::off_track(OffTrackReason::WrongDirection, pct)
            } else if pct > bands.bulk_max_gain_percent {
                StatusAssessment::off_track(OffTrackReason::TooFast, pct)
            } else if pct >= bands.bulk_min_gain_percent {
                StatusAssessment::new(NutritionStatus::OnTrack, None, pct)
            } else {
                StatusAssessment::off_track(OffTrackReason::TooSlow, pct)
            }
        }
        GoalType::Maintain => {
            if pct.abs() <= bands.maintain_tolerance_percent {
                StatusAssessment::new(NutritionStatus::OnTrack, None, pct)
            } else {
                StatusAssessment::off_track(OffTrackReason::Drifting, pct)
            }
        }
    }
}
