// ABOUTME: Tests for engine coefficient validation and environment overrides
// ABOUTME: Covers default validity, override parsing, ordering checks, and logging configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use prepcoach::errors::{AppError, ErrorCode};
use prepcoach::intelligence::IntelligenceConfig;
use prepcoach::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

#[test]
fn test_default_config_validation() {
    let config = IntelligenceConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_coefficients() {
    let config = IntelligenceConfig::default();

    assert!((config.nutrition.energy.kcal_per_kg - 7700.0).abs() < f64::EPSILON);
    assert!((config.nutrition.calorie_floors.male - 1500.0).abs() < f64::EPSILON);
    assert!((config.nutrition.calorie_floors.female - 1200.0).abs() < f64::EPSILON);
    assert!((config.goals.safety.aggressive_deficit_kcal - 500.0).abs() < f64::EPSILON);
    assert!((config.goals.safety.extreme_deficit_kcal - 750.0).abs() < f64::EPSILON);
}

#[test]
fn test_safety_thresholds_must_be_ordered() {
    let mut config = IntelligenceConfig::default();
    config.goals.safety.aggressive_deficit_kcal = 800.0;

    assert!(config.validate().is_err());
}

#[test]
fn test_cut_bands_must_be_ordered() {
    let mut config = IntelligenceConfig::default();
    config.nutrition.status_bands.plateau_percent = 0.3;

    assert!(config.validate().is_err());
}

#[test]
fn test_eased_adjustment_cannot_exceed_full() {
    let mut config = IntelligenceConfig::default();
    config.nutrition.macros.cut_eased_deficit_percent = 25.0;

    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    env::set_var("PREPCOACH_KCAL_PER_KG", "7000");
    env::set_var("PREPCOACH_MIN_CALORIES_FEMALE", "1300");

    let config = IntelligenceConfig::load().unwrap();

    assert!((config.nutrition.energy.kcal_per_kg - 7000.0).abs() < 0.001);
    assert!((config.nutrition.calorie_floors.female - 1300.0).abs() < 0.001);

    env::remove_var("PREPCOACH_KCAL_PER_KG");
    env::remove_var("PREPCOACH_MIN_CALORIES_FEMALE");
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    env::set_var("PREPCOACH_MIN_COMPLIANCE", "seventy");

    let err = IntelligenceConfig::load().unwrap_err();
    env::remove_var("PREPCOACH_MIN_COMPLIANCE");

    assert!(err.to_string().contains("PREPCOACH_MIN_COMPLIANCE"));
    let app_error: AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_override_that_breaks_ordering_is_rejected() {
    env::set_var("PREPCOACH_SAFETY_EXTREME_KCAL", "400");

    let result = IntelligenceConfig::load();
    env::remove_var("PREPCOACH_SAFETY_EXTREME_KCAL");

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "compact");
    env::set_var("ENVIRONMENT", "staging");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.environment, "staging");

    env::set_var("ENVIRONMENT", "production");
    let production = LoggingConfig::from_env();
    assert_eq!(production.format, LogFormat::Json);
    assert!(production.include_location);

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
}
