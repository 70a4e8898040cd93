// ABOUTME: Nutrition service wiring document sources to the nutrition engine
// ABOUTME: Fetches recipe and catalog, runs the engine on the blocking pool, probes single matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Service
//!
//! Application-level entry point used by the CLI. Each call is independent:
//! a failing recipe never affects another analysis.

use chrono::{DateTime, Utc};
use ricettario_core::errors::{AppError, AppResult};
use ricettario_core::models::{RecipeRecord, ReferenceEntry};
use ricettario_engine::{
    canonical_name, MatchResult, NutritionEngine, NutritionReport, SubstanceRule,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::task;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::logging::AppLogger;
use crate::sources::{CatalogSource, JsonFileCatalog, JsonFileRecipes, RecipeSource};

/// Nutrition analysis of one stored recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeAnalysis {
    /// Unique id of this analysis run
    pub request_id: Uuid,
    /// When the analysis finished
    pub computed_at: DateTime<Utc>,
    /// Recipe document id
    pub recipe_id: String,
    /// Recipe title
    pub title: String,
    /// Serving count used
    pub servings: u32,
    /// Calories per serving declared by the recipe author, for comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_calories_per_serving: Option<f64>,
    /// Computed nutrition
    pub report: NutritionReport,
}

/// How one free-text ingredient name resolves against the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchProbe {
    /// Name as given
    pub query: String,
    /// Name used for matching after substance rules
    pub canonical_name: String,
    /// Substance rule that rewrote the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<SubstanceRule>,
    /// Acceptance outcome
    pub result: MatchResult,
    /// Best-scoring entry, even below the acceptance threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_name: Option<String>,
    /// Minimum score for acceptance
    pub threshold: f64,
}

/// Recipe nutrition service
#[derive(Clone)]
pub struct NutritionService {
    catalog: Arc<dyn CatalogSource>,
    recipes: Arc<dyn RecipeSource>,
    engine: Arc<NutritionEngine>,
}

impl NutritionService {
    /// Create a service over explicit sources
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        recipes: Arc<dyn RecipeSource>,
        engine: NutritionEngine,
    ) -> Self {
        Self {
            catalog,
            recipes,
            engine: Arc::new(engine),
        }
    }

    /// Create a service reading the JSON exports named in the configuration
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(JsonFileCatalog::new(&config.catalog_path)),
            Arc::new(JsonFileRecipes::new(&config.recipes_path)),
            NutritionEngine::new(&config.engine),
        )
    }

    /// List every recipe
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe collection cannot be read
    pub async fn list_recipes(&self) -> AppResult<Vec<RecipeRecord>> {
        self.recipes.list_recipes().await
    }

    /// Fetch one recipe
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, or a storage error
    pub async fn get_recipe(&self, recipe_id: &str) -> AppResult<RecipeRecord> {
        self.recipes.get_recipe(recipe_id).await
    }

    /// Analyze a stored recipe by id
    ///
    /// # Errors
    ///
    /// Returns an error if the recipe or catalog cannot be loaded, or if the
    /// recipe has invalid servings or malformed ingredient data
    #[instrument(skip(self), fields(source = self.recipes.name()))]
    pub async fn analyze(&self, recipe_id: &str) -> AppResult<RecipeAnalysis> {
        let recipe = self.recipes.get_recipe(recipe_id).await?;
        self.analyze_record(recipe).await
    }

    /// Analyze a recipe that is already in hand
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, or if the recipe has
    /// invalid servings or malformed ingredient data
    pub async fn analyze_record(&self, recipe: RecipeRecord) -> AppResult<RecipeAnalysis> {
        let request_id = Uuid::new_v4();
        let start = Instant::now();
        let catalog = self.catalog.load_catalog().await?;
        debug!(%request_id, recipe_id = %recipe.id, entries = catalog.len(), "Catalog ready");

        let engine = Arc::clone(&self.engine);
        let (recipe, outcome) = task::spawn_blocking(move || {
            let outcome = engine.analyze_record(&recipe, &catalog);
            (recipe, outcome)
        })
        .await
        .map_err(|e| {
            AppError::internal(format!("Nutrition computation task failed: {e}"))
                .with_request_id(request_id.to_string())
        })?;

        let report = outcome.map_err(|e| {
            AppError::from(e)
                .with_request_id(request_id.to_string())
                .with_resource_id(recipe.id.clone())
        })?;

        AppLogger::log_recipe_analysis(
            &recipe.id,
            report.matched_count(),
            report.unmatched_names.len(),
            report.excluded.len(),
            u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(RecipeAnalysis {
            request_id,
            computed_at: Utc::now(),
            servings: report.servings,
            recipe_id: recipe.id,
            title: recipe.title,
            declared_calories_per_serving: recipe.declared_calories_per_serving,
            report,
        })
    }

    /// Show how a single ingredient name resolves against the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded
    pub async fn probe_match(&self, name: &str) -> AppResult<MatchProbe> {
        let catalog = self.catalog.load_catalog().await?;
        Ok(probe(&self.engine, name, &catalog))
    }
}

fn probe(engine: &NutritionEngine, name: &str, catalog: &[ReferenceEntry]) -> MatchProbe {
    let (canonical, rule) = canonical_name(name);
    let matcher = engine.matcher();
    let best = matcher.best_candidate(&canonical, catalog);
    let accepted = best
        .as_ref()
        .is_some_and(|candidate| matcher.accepts(candidate));

    MatchProbe {
        query: name.trim().to_owned(),
        result: MatchResult::new(name.trim(), canonical.as_str(), best.as_ref(), accepted),
        candidate_name: best.map(|candidate| candidate.entry.name.clone()),
        canonical_name: canonical,
        rule,
        threshold: matcher.acceptance_threshold(),
    }
}
