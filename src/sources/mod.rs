// ABOUTME: Data-access traits for the reference catalog and the recipe collection
// ABOUTME: Async seams so the service can run over exported JSON files or in-memory fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Document Sources
//!
//! The nutrition engine never performs I/O. Everything it consumes arrives
//! through these traits:
//!
//! - [`CatalogSource`]: the whole reference catalog, fetched in bulk
//! - [`RecipeSource`]: recipe listing and lookup by id
//!
//! Both collections are exported as JSON, either an array of documents or an
//! object keyed by document id. See [`json_file`] for the file-backed
//! implementations and [`memory`] for fixtures.

use async_trait::async_trait;
use ricettario_core::errors::AppResult;
use ricettario_core::models::{RecipeRecord, ReferenceEntry};
use serde_json::{Map, Value};
use std::sync::Arc;

/// JSON export files
pub mod json_file;
/// In-memory collections
pub mod memory;

pub use json_file::{JsonFileCatalog, JsonFileRecipes};
pub use memory::{InMemoryCatalog, InMemoryRecipes};

/// Bulk access to the nutrition reference catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Source name for logs ("json_file", "memory")
    fn name(&self) -> &'static str;

    /// Load every catalog entry
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying collection cannot be read or decoded
    async fn load_catalog(&self) -> AppResult<Arc<Vec<ReferenceEntry>>>;
}

/// Access to the recipe collection
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Source name for logs
    fn name(&self) -> &'static str;

    /// List every recipe, in collection order
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying collection cannot be read or decoded
    async fn list_recipes(&self) -> AppResult<Vec<RecipeRecord>>;

    /// Fetch one recipe by id
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no recipe has this id
    async fn get_recipe(&self, id: &str) -> AppResult<RecipeRecord>;
}

/// Split an exported collection into `(key, document)` pairs
///
/// An array yields no keys; an object keyed by document id yields its keys.
/// Any other top-level value is not a collection.
pub(crate) fn collection_documents(root: Value) -> Option<Vec<(Option<String>, Value)>> {
    match root {
        Value::Array(items) => Some(items.into_iter().map(|doc| (None, doc)).collect()),
        Value::Object(map) => Some(
            map.into_iter()
                .map(|(key, doc)| (Some(key), doc))
                .collect(),
        ),
        _ => None,
    }
}

/// Fill in a recipe document's string `id`
///
/// A numeric `id`/`ID` is rendered as text; a document with no id takes the
/// collection key.
pub(crate) fn with_string_id(
    key: Option<String>,
    mut document: Map<String, Value>,
) -> Map<String, Value> {
    let existing = document.remove("id").or_else(|| document.remove("ID"));
    let id = match existing {
        Some(Value::String(id)) if !id.trim().is_empty() => Some(id),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => key,
    };
    if let Some(id) = id {
        document.insert("id".to_owned(), Value::String(id));
    }
    document
}
