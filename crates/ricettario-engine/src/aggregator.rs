// ABOUTME: Nutrition aggregation from matched ingredients to recipe and per-serving totals
// ABOUTME: Scales per-100g catalog values by grams, sums contributions, collects unmatched names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ricettario_core::constants::quantity::REFERENCE_GRAMS;
use ricettario_core::errors::NutritionError;
use ricettario_core::models::{Nutrient, NutritionTotals, ReferenceEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalizer::NormalizedIngredient;

/// A normalized ingredient paired with its catalog entry, if any
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedIngredient<'a> {
    /// Normalized ingredient
    pub ingredient: NormalizedIngredient,
    /// Matched catalog entry, `None` when unmatched
    pub entry: Option<&'a ReferenceEntry>,
}

impl<'a> MatchedIngredient<'a> {
    /// Pair an ingredient with its match outcome
    #[must_use]
    pub const fn new(ingredient: NormalizedIngredient, entry: Option<&'a ReferenceEntry>) -> Self {
        Self { ingredient, entry }
    }
}

/// Nutrients contributed by one matched ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientContribution {
    /// Ingredient name as written in the recipe
    pub display_name: String,
    /// Catalog entry the values come from
    pub entry_name: String,
    /// Grams used for scaling
    pub quantity_grams: f64,
    /// Scaled nutrient amounts
    pub nutrients: NutritionTotals,
}

/// Aggregated recipe nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Whole-recipe totals
    pub totals: NutritionTotals,
    /// Totals divided by the serving count
    pub per_serving: NutritionTotals,
    /// Unmatched ingredient names, in input order
    pub unmatched_names: Vec<String>,
    /// One row per matched ingredient, in input order
    pub contributions: Vec<IngredientContribution>,
    /// Sum of matched ingredient grams
    pub total_grams: f64,
}

impl Aggregation {
    /// Calories per 100 g of matched recipe mass, `None` when no grams matched
    #[must_use]
    pub fn calories_per_100g(&self) -> Option<f64> {
        (self.total_grams > 0.0)
            .then(|| self.totals.get(Nutrient::Calories) / self.total_grams * REFERENCE_GRAMS)
    }
}

/// Nutrients of `entry` scaled to `grams`
#[must_use]
pub fn scale_entry(entry: &ReferenceEntry, grams: f64) -> NutritionTotals {
    entry.per_100g().scaled(grams / REFERENCE_GRAMS)
}

/// Sum matched ingredients into totals and per-serving values
///
/// Each matched ingredient contributes `per_100g * grams / 100` for every
/// nutrient; unmatched ones contribute nothing and are reported by name.
/// Values keep full precision.
///
/// # Errors
///
/// Returns `NutritionError::InvalidServings` when `servings` is zero.
pub fn aggregate(
    matched: &[MatchedIngredient<'_>],
    servings: u32,
) -> Result<Aggregation, NutritionError> {
    if servings == 0 {
        return Err(NutritionError::invalid_servings("0"));
    }

    let mut totals = NutritionTotals::zero();
    let mut unmatched_names = Vec::new();
    let mut contributions = Vec::with_capacity(matched.len());
    let mut total_grams = 0.0;

    for item in matched {
        let Some(entry) = item.entry else {
            unmatched_names.push(item.ingredient.display_name.clone());
            continue;
        };

        let nutrients = scale_entry(entry, item.ingredient.quantity_grams);
        totals = totals.merged(&nutrients);
        total_grams += item.ingredient.quantity_grams;

        debug!(
            ingredient = %item.ingredient.display_name,
            entry = %entry.name,
            grams = item.ingredient.quantity_grams,
            calories = nutrients.calories,
            "Ingredient contribution"
        );

        contributions.push(IngredientContribution {
            display_name: item.ingredient.display_name.clone(),
            entry_name: entry.name.clone(),
            quantity_grams: item.ingredient.quantity_grams,
            nutrients,
        });
    }

    let divisor = f64::from(servings);
    let mut per_serving = NutritionTotals::zero();
    for (nutrient, amount) in totals.iter() {
        per_serving.add(nutrient, amount / divisor);
    }

    Ok(Aggregation {
        totals,
        per_serving,
        unmatched_names,
        contributions,
        total_grams,
    })
}
