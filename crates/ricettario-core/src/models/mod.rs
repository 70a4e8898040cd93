// ABOUTME: Core data models shared across the Ricettario workspace
// ABOUTME: Re-exports ingredient, recipe, catalog and nutrient model types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient input as found in a recipe's ingredient map
pub mod ingredient;
/// Recipe documents from the `ricette` collection
pub mod recipe;
/// Reference catalog entries from the `alimenti` collection
pub mod catalog;
/// Tracked nutrients and nutrient totals
pub mod nutrition;

pub use catalog::ReferenceEntry;
pub use ingredient::{parse_ingredient_map, Ingredient, RawQuantity};
pub use nutrition::{Nutrient, NutritionTotals};
pub use recipe::RecipeRecord;
