// ABOUTME: Core types and constants for the PrepCoach nutrition engine
// ABOUTME: Foundation crate with error handling, three-state fields, and client models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PrepCoach

#![deny(unsafe_code)]

//! # PrepCoach Core
//!
//! Foundation crate providing shared types for the nutrition auto-adjustment
//! engine and its callers. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Service names and unit conversion constants
//! - **models**: Client profile, weight/nutrition logs, and the three-state `Field<T>`

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (client profile, logs, targets)
pub mod models;
