// ABOUTME: Nutrition engine facade running normalization, matching and aggregation end to end
// ABOUTME: Produces a NutritionReport with totals, unmatched/excluded names and a match trace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rayon::prelude::*;
use ricettario_core::errors::NutritionError;
use ricettario_core::models::{Ingredient, NutritionTotals, RecipeRecord, ReferenceEntry};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::aggregator::{aggregate, IngredientContribution, MatchedIngredient};
use crate::config::EngineConfig;
use crate::matcher::{MatchResult, ReferenceMatcher};
use crate::normalizer::{normalize_ingredient, ExcludedIngredient, NormalizeOutcome};
use crate::similarity::{SimilarityScorer, TokenLevenshteinScorer};

/// Full nutrition analysis of one recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Serving count used for `per_serving`
    pub servings: u32,
    /// Whole-recipe totals
    pub totals: NutritionTotals,
    /// Totals divided by `servings`
    pub per_serving: NutritionTotals,
    /// Ingredients with no catalog entry above the threshold, in input order
    pub unmatched_names: Vec<String>,
    /// Ingredients dropped before matching, in input order
    pub excluded: Vec<ExcludedIngredient>,
    /// One entry per normalized ingredient, in input order
    pub trace: Vec<MatchResult>,
    /// One row per matched ingredient, in input order
    pub contributions: Vec<IngredientContribution>,
    /// Sum of matched ingredient grams
    pub total_grams: f64,
    /// Calories per 100 g of matched mass
    pub calories_per_100g: Option<f64>,
}

impl NutritionReport {
    /// Names of excluded ingredients, in input order
    #[must_use]
    pub fn excluded_names(&self) -> Vec<&str> {
        self.excluded
            .iter()
            .map(|excluded| excluded.display_name.as_str())
            .collect()
    }

    /// Number of ingredients that matched a catalog entry
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.contributions.len()
    }
}

/// Per-ingredient pipeline outcome
enum Resolved<'a> {
    Excluded(ExcludedIngredient),
    Normalized(MatchedIngredient<'a>, MatchResult),
}

/// Recipe nutrition engine
///
/// Pure and synchronous: the catalog is supplied already loaded and nothing
/// is cached between calls, so one engine can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct NutritionEngine<S = TokenLevenshteinScorer> {
    matcher: ReferenceMatcher<S>,
    parallel_min_ingredients: usize,
}

impl Default for NutritionEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl NutritionEngine {
    /// Create an engine with the default scorer
    #[must_use]
    pub const fn new(config: &EngineConfig) -> Self {
        Self {
            matcher: ReferenceMatcher::new(&config.matching),
            parallel_min_ingredients: config.parallel_min_ingredients,
        }
    }

    /// Create an engine from the process-wide configuration
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::new(EngineConfig::global())
    }
}

impl<S: SimilarityScorer> NutritionEngine<S> {
    /// Create an engine around a custom matcher
    #[must_use]
    pub const fn with_matcher(matcher: ReferenceMatcher<S>, parallel_min_ingredients: usize) -> Self {
        Self {
            matcher,
            parallel_min_ingredients,
        }
    }

    /// The reference matcher used by this engine
    #[must_use]
    pub const fn matcher(&self) -> &ReferenceMatcher<S> {
        &self.matcher
    }

    /// Normalize, match and aggregate an ingredient list
    ///
    /// Ingredients are processed on the rayon pool once the list reaches
    /// the configured size; report order always follows input order.
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::InvalidServings` when `servings` is zero.
    pub fn analyze(
        &self,
        ingredients: &[Ingredient],
        servings: u32,
        catalog: &[ReferenceEntry],
    ) -> Result<NutritionReport, NutritionError> {
        if servings == 0 {
            return Err(NutritionError::invalid_servings("0"));
        }

        let resolved: Vec<Resolved<'_>> = if ingredients.len() >= self.parallel_min_ingredients {
            debug!(count = ingredients.len(), "Resolving ingredients in parallel");
            ingredients
                .par_iter()
                .map(|ingredient| self.resolve(ingredient, catalog))
                .collect()
        } else {
            ingredients
                .iter()
                .map(|ingredient| self.resolve(ingredient, catalog))
                .collect()
        };

        let mut excluded = Vec::new();
        let mut matched = Vec::with_capacity(resolved.len());
        let mut trace = Vec::with_capacity(resolved.len());
        for outcome in resolved {
            match outcome {
                Resolved::Excluded(item) => excluded.push(item),
                Resolved::Normalized(item, result) => {
                    matched.push(item);
                    trace.push(result);
                }
            }
        }

        let aggregation = aggregate(&matched, servings)?;
        let calories_per_100g = aggregation.calories_per_100g();

        info!(
            ingredients = ingredients.len(),
            matched = aggregation.contributions.len(),
            unmatched = aggregation.unmatched_names.len(),
            excluded = excluded.len(),
            calories = aggregation.totals.calories,
            servings,
            "Recipe nutrition computed"
        );

        Ok(NutritionReport {
            servings,
            totals: aggregation.totals,
            per_serving: aggregation.per_serving,
            unmatched_names: aggregation.unmatched_names,
            excluded,
            trace,
            contributions: aggregation.contributions,
            total_grams: aggregation.total_grams,
            calories_per_100g,
        })
    }

    /// Analyze a stored recipe
    ///
    /// Servings are validated before the ingredient data is decoded.
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::InvalidServings` for a missing, zero,
    /// negative or non-integer serving count, and
    /// `NutritionError::MalformedIngredients` when the ingredient data cannot
    /// be decoded. No partial report is produced.
    pub fn analyze_record(
        &self,
        recipe: &RecipeRecord,
        catalog: &[ReferenceEntry],
    ) -> Result<NutritionReport, NutritionError> {
        let servings = recipe.servings()?;
        let ingredients = recipe.ingredient_list()?;
        debug!(recipe_id = %recipe.id, count = ingredients.len(), "Analyzing recipe");
        self.analyze(&ingredients, servings, catalog)
    }

    fn resolve<'a>(&self, ingredient: &Ingredient, catalog: &'a [ReferenceEntry]) -> Resolved<'a> {
        let normalized = match normalize_ingredient(ingredient) {
            NormalizeOutcome::Excluded(excluded) => return Resolved::Excluded(excluded),
            NormalizeOutcome::Normalized(normalized) => normalized,
        };

        let best = self
            .matcher
            .best_candidate(&normalized.canonical_name, catalog);
        let accepted = best
            .as_ref()
            .is_some_and(|candidate| self.matcher.accepts(candidate));

        let result = MatchResult::new(
            normalized.display_name.as_str(),
            normalized.canonical_name.as_str(),
            best.as_ref(),
            accepted,
        );
        let entry = best
            .filter(|_| accepted)
            .map(|candidate| candidate.entry);

        debug!(
            ingredient = %normalized.display_name,
            entry = ?result.matched_entry,
            score = result.score,
            "Ingredient matched"
        );

        Resolved::Normalized(MatchedIngredient::new(normalized, entry), result)
    }
}
