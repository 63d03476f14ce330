// ABOUTME: Domain service layer around the nutrition engine
// ABOUTME: Protocol-agnostic operations reusable from HTTP handlers, jobs, or the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

//! Domain service layer
//!
//! Services fetch data through repositories, call the pure engine, and own
//! every side effect. No routing lives here.

/// Body-composition write path, on-demand suggestions, and trajectory charts
pub mod nutrition_adjustment;

pub use nutrition_adjustment::{
    build_nutrition_input, BodyCompositionResponse, NutritionAdjusted,
    NutritionAdjustmentService, NutritionSuggestionsResponse, SuggestionMeta,
};
