// ABOUTME: Core types and constants for the Ricettario recipe nutrition platform
// ABOUTME: Foundation crate with error handling, recipe/catalog models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ricettario Core
//!
//! Foundation crate providing shared types and constants for the Ricettario
//! recipe nutrition platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   domain-specific `NutritionError`
//! - **constants**: Egg conversion factors, quantity placeholder markers, canonical names
//! - **models**: Recipe records, ingredient inputs, reference catalog entries, nutrient totals

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (recipes, ingredients, catalog entries, nutrient totals)
pub mod models;
