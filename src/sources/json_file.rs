// ABOUTME: File-backed catalog and recipe sources reading exported JSON collections
// ABOUTME: Catalog is read once and cached behind an async RwLock; recipes are re-read per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use ricettario_core::errors::{AppError, AppResult};
use ricettario_core::models::{RecipeRecord, ReferenceEntry};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::{collection_documents, with_string_id, CatalogSource, RecipeSource};
use crate::logging::AppLogger;

const SOURCE_NAME: &str = "json_file";

/// Read and decode an exported collection file
async fn read_collection(path: &Path) -> AppResult<Vec<(Option<String>, Value)>> {
    let text = fs::read_to_string(path).await.map_err(|e| {
        AppError::from(e).with_resource_id(path.display().to_string())
    })?;
    let root: Value = serde_json::from_str(&text)
        .map_err(|e| AppError::from(e).with_resource_id(path.display().to_string()))?;

    collection_documents(root).ok_or_else(|| {
        AppError::storage(format!(
            "{} must contain a JSON array or an object keyed by id",
            path.display()
        ))
        .with_resource_id(path.display().to_string())
    })
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Reference catalog exported as a JSON file
///
/// Malformed documents are skipped with a warning; the rest of the catalog
/// stays usable.
pub struct JsonFileCatalog {
    path: PathBuf,
    cache: Arc<RwLock<Option<Arc<Vec<ReferenceEntry>>>>>,
}

impl JsonFileCatalog {
    /// Create a catalog source for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Path of the catalog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drop the cached catalog so the next load re-reads the file
    pub async fn invalidate(&self) {
        self.cache.write().await.take();
    }

    async fn read_entries(&self) -> AppResult<Vec<ReferenceEntry>> {
        let documents = read_collection(&self.path).await?;
        let total = documents.len();

        let entries: Vec<ReferenceEntry> = documents
            .into_iter()
            .enumerate()
            .filter_map(|(index, (_, document))| {
                match ReferenceEntry::from_document(index, &document) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!(path = %self.path.display(), error = %e, "Skipping catalog document");
                        None
                    }
                }
            })
            .collect();

        if entries.len() < total {
            warn!(
                path = %self.path.display(),
                skipped = total - entries.len(),
                "Catalog loaded with malformed documents"
            );
        }
        Ok(entries)
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn load_catalog(&self) -> AppResult<Arc<Vec<ReferenceEntry>>> {
        // Check cache first
        {
            let cache = self.cache.read().await;
            if let Some(entries) = cache.as_ref() {
                debug!(entries = entries.len(), "Catalog cache hit");
                return Ok(Arc::clone(entries));
            }
        }

        let start = Instant::now();
        let entries = Arc::new(self.read_entries().await?);
        AppLogger::log_source_load(
            "catalog",
            &self.path.display().to_string(),
            entries.len(),
            elapsed_ms(start),
        );

        // Store in cache; a concurrent load may have won the race
        let mut cache = self.cache.write().await;
        Ok(Arc::clone(cache.get_or_insert(entries)))
    }
}

/// Recipe collection exported as a JSON file
///
/// The file is re-read on every call so edits show up without a restart.
pub struct JsonFileRecipes {
    path: PathBuf,
}

impl JsonFileRecipes {
    /// Create a recipe source for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the recipe file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecipeSource for JsonFileRecipes {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn list_recipes(&self) -> AppResult<Vec<RecipeRecord>> {
        let start = Instant::now();
        let documents = read_collection(&self.path).await?;

        let recipes: Vec<RecipeRecord> = documents
            .into_iter()
            .filter_map(|(key, document)| {
                let Value::Object(fields) = document else {
                    warn!(path = %self.path.display(), key = ?key, "Skipping non-object recipe document");
                    return None;
                };
                match serde_json::from_value(Value::Object(with_string_id(key, fields))) {
                    Ok(recipe) => Some(recipe),
                    Err(e) => {
                        warn!(path = %self.path.display(), error = %e, "Skipping recipe document");
                        None
                    }
                }
            })
            .collect();

        AppLogger::log_source_load(
            "recipes",
            &self.path.display().to_string(),
            recipes.len(),
            elapsed_ms(start),
        );
        Ok(recipes)
    }

    async fn get_recipe(&self, id: &str) -> AppResult<RecipeRecord> {
        self.list_recipes()
            .await?
            .into_iter()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")).with_resource_id(id))
    }
}
