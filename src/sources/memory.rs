// ABOUTME: In-memory catalog and recipe sources for tests, benchmarks and embedding
// ABOUTME: Holds already-decoded documents; loads never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use ricettario_core::errors::{AppError, AppResult};
use ricettario_core::models::{RecipeRecord, ReferenceEntry};
use std::sync::Arc;

use super::{CatalogSource, RecipeSource};

const SOURCE_NAME: &str = "memory";

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: Arc<Vec<ReferenceEntry>>,
}

impl InMemoryCatalog {
    /// Wrap a list of entries
    #[must_use]
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn load_catalog(&self) -> AppResult<Arc<Vec<ReferenceEntry>>> {
        Ok(Arc::clone(&self.entries))
    }
}

/// Recipe collection held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipes {
    recipes: Vec<RecipeRecord>,
}

impl InMemoryRecipes {
    /// Wrap a list of recipes
    #[must_use]
    pub const fn new(recipes: Vec<RecipeRecord>) -> Self {
        Self { recipes }
    }
}

#[async_trait]
impl RecipeSource for InMemoryRecipes {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn list_recipes(&self) -> AppResult<Vec<RecipeRecord>> {
        Ok(self.recipes.clone())
    }

    async fn get_recipe(&self, id: &str) -> AppResult<RecipeRecord> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")).with_resource_id(id))
    }
}
