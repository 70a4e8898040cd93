// ABOUTME: Recipe nutrition engine: ingredient normalization, catalog matching, aggregation
// ABOUTME: Pure synchronous algorithms split from the main crate for parallel compilation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ricettario Engine
//!
//! Turns a recipe's free-text ingredient map into nutritional totals.
//!
//! ```text
//! ingredient map -> normalizer -> matcher (catalog) -> aggregator -> NutritionReport
//! ```
//!
//! - **normalizer**: raw name and quantity to a canonical name and grams, with
//!   ordered egg substance rules; placeholders ("q.b.") are excluded
//! - **matcher**: best catalog entry by exact name/synonym, then fuzzy score
//! - **aggregator**: per-100 g values scaled by grams, summed, divided by servings
//!
//! Nothing here performs I/O. The catalog is supplied already loaded.
//!
//! ## Example
//!
//! ```rust
//! use ricettario_core::models::{Ingredient, ReferenceEntry};
//! use ricettario_engine::NutritionEngine;
//!
//! let catalog = vec![ReferenceEntry::new("chicken breast").with_nutrient("calories", 165.0)];
//! let ingredients = vec![Ingredient::new("Chicken breast", 200.0)];
//!
//! let report = NutritionEngine::default()
//!     .analyze(&ingredients, 2, &catalog)
//!     .map_err(|e| e.to_string())?;
//! assert!((report.totals.calories - 330.0).abs() < 1e-9);
//! # Ok::<(), String>(())
//! ```

/// Nutrient aggregation
pub mod aggregator;
/// Engine configuration (thresholds, parallelism)
pub mod config;
/// Unit annotation parsing and gram conversion
pub mod conversion;
/// End-to-end pipeline
pub mod engine;
/// Reference catalog matching
pub mod matcher;
/// Ingredient normalization and substance rules
pub mod normalizer;
/// String similarity scoring
pub mod similarity;

pub use aggregator::{aggregate, Aggregation, IngredientContribution, MatchedIngredient};
pub use config::{ConfigError, EngineConfig, MatchingConfig};
pub use conversion::{convert_to_grams, parse_quantity_text, ConversionError, QuantityUnit};
pub use engine::{NutritionEngine, NutritionReport};
pub use matcher::{match_ingredient, CatalogMatch, MatchKind, MatchResult, ReferenceMatcher};
pub use normalizer::{
    canonical_name, normalize, ExcludedIngredient, ExclusionReason, NormalizeOutcome,
    NormalizedIngredient, SubstanceRule,
};
pub use similarity::{SimilarityScorer, TokenLevenshteinScorer};
