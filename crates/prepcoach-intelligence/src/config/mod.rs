// ABOUTME: Configuration module for the prepcoach-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

/// Engine coefficients (energy balance, rate bands, macros, deadlines, peak week)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
