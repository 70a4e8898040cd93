// ABOUTME: Reference catalog entry model with per-100g nutrient values and synonyms
// ABOUTME: Decodes structured entries and flat documents exported from the food table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

use super::nutrition::{Nutrient, NutritionTotals};
use crate::errors::NutritionError;

/// Keys that may hold the entry name in a catalog document
const NAME_KEYS: &[&str] = &["name", "Nome", "nome", "description"];
/// Keys that may hold synonyms in a catalog document
const SYNONYM_KEYS: &[&str] = &["synonyms", "Sinonimi", "sinonimi", "aliases"];
/// Keys that may hold a nested nutrient map
const NUTRIENT_KEYS: &[&str] = &["nutrients_per_100g", "nutrients"];
/// Numeric document fields that are identifiers, not nutrients
const NON_NUTRIENT_KEYS: &[&str] = &["id", "ID", "Codice", "code", "fdc_id"];

/// One food in the nutrition reference table
///
/// Read-only: the engine never mutates catalog entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Canonical food name
    pub name: String,
    /// Alternate names used to widen fuzzy matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    /// Nutrient amounts per 100 g, keyed by nutrient label
    #[serde(default)]
    pub nutrients_per_100g: BTreeMap<String, f64>,
}

impl ReferenceEntry {
    /// Create an entry without synonyms or nutrients
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            synonyms: Vec::new(),
            nutrients_per_100g: BTreeMap::new(),
        }
    }

    /// Add a synonym
    #[must_use]
    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonyms.push(synonym.into());
        self
    }

    /// Set a nutrient value per 100 g
    #[must_use]
    pub fn with_nutrient(mut self, key: impl Into<String>, per_100g: f64) -> Self {
        self.nutrients_per_100g.insert(key.into(), per_100g);
        self
    }

    /// Tracked nutrients per 100 g
    ///
    /// Keys are resolved through [`Nutrient::from_key`]; when two keys resolve
    /// to the same nutrient the first one (in key order) wins. Unknown keys
    /// are ignored.
    #[must_use]
    pub fn per_100g(&self) -> NutritionTotals {
        let mut totals = NutritionTotals::zero();
        let mut seen = [false; Nutrient::ALL.len()];

        for (key, &value) in &self.nutrients_per_100g {
            let Some(nutrient) = Nutrient::from_key(key) else {
                continue;
            };
            if seen[nutrient.index()] {
                continue;
            }
            seen[nutrient.index()] = true;
            totals.add(nutrient, value);
        }

        totals
    }

    /// Decode a catalog document
    ///
    /// Two shapes are accepted:
    /// - structured: `{"name": ..., "synonyms": [...], "nutrients_per_100g": {...}}`
    /// - flat: `{"Nome": ..., "Energia, calorie (kcal)": 52, ...}` where every
    ///   numeric top-level field is a per-100 g nutrient
    ///
    /// Synonyms may be an array of strings or a comma/semicolon separated string.
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::MalformedCatalogEntry` when the document is
    /// not an object or has no usable name.
    pub fn from_document(index: usize, document: &Value) -> Result<Self, NutritionError> {
        let Value::Object(fields) = document else {
            return Err(NutritionError::malformed_catalog_entry(
                index,
                "document must be a JSON object",
            ));
        };

        let name = NAME_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| NutritionError::malformed_catalog_entry(index, "missing entry name"))?
            .to_owned();

        let synonyms = SYNONYM_KEYS
            .iter()
            .find_map(|key| fields.get(*key))
            .map(parse_synonyms)
            .unwrap_or_default();

        let nutrients_per_100g = NUTRIENT_KEYS
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_object))
            .map_or_else(|| flat_nutrients(fields), numeric_fields);

        Ok(Self {
            name,
            synonyms,
            nutrients_per_100g,
        })
    }
}

fn parse_synonyms(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        Value::String(text) => text
            .split([',', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

fn numeric_fields(fields: &Map<String, Value>) -> BTreeMap<String, f64> {
    fields
        .iter()
        .filter_map(|(key, value)| match value.as_f64() {
            Some(number) => Some((key.clone(), number)),
            None => {
                debug!(nutrient = %key, "Skipping non-numeric nutrient value");
                None
            }
        })
        .collect()
}

fn flat_nutrients(fields: &Map<String, Value>) -> BTreeMap<String, f64> {
    fields
        .iter()
        .filter(|(key, _)| {
            !NAME_KEYS.contains(&key.as_str())
                && !SYNONYM_KEYS.contains(&key.as_str())
                && !NON_NUTRIENT_KEYS.contains(&key.as_str())
        })
        .filter_map(|(key, value)| value.as_f64().map(|number| (key.clone(), number)))
        .collect()
}
