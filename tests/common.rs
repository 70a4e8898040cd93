// ABOUTME: Shared test fixtures for integration tests
// ABOUTME: Provides a small reference catalog, sample recipes and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_lines
)]
//! Shared test utilities for `ricettario`
//!
//! Catalog values are per 100 g and rounded; they only need to be stable.

use ricettario_core::models::{RecipeRecord, ReferenceEntry};
use serde_json::{json, Value};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Reference entry with the four macro figures
pub fn entry(name: &str, calories: f64, proteins: f64, carbs: f64, fats: f64) -> ReferenceEntry {
    ReferenceEntry::new(name)
        .with_nutrient("calories", calories)
        .with_nutrient("proteins", proteins)
        .with_nutrient("carbs", carbs)
        .with_nutrient("fats", fats)
}

/// Small catalog covering the sample recipes
///
/// A cooked egg entry precedes the raw one so that the exact-name shortcut
/// is what selects the raw entry.
pub fn sample_catalog() -> Vec<ReferenceEntry> {
    vec![
        entry("chicken breast", 165.0, 31.0, 0.0, 3.6).with_synonym("petto di pollo"),
        entry("hen egg, whole, hard-boiled", 155.0, 12.6, 1.1, 10.6),
        entry("whole raw hen egg", 143.0, 12.6, 0.7, 9.5).with_synonym("uovo intero"),
        entry("raw hen egg yolk", 322.0, 15.9, 3.6, 26.5).with_synonym("tuorlo d'uovo"),
        entry("raw hen egg white", 52.0, 10.9, 0.7, 0.2).with_synonym("albume d'uovo"),
        entry("wheat flour, type 00", 340.0, 11.0, 72.0, 1.0).with_synonym("farina 00"),
        entry("sugar", 387.0, 0.0, 100.0, 0.0).with_synonym("zucchero"),
        entry("whole milk", 64.0, 3.3, 4.9, 3.6).with_synonym("latte intero"),
        entry("extra virgin olive oil", 884.0, 0.0, 0.0, 100.0)
            .with_synonym("olio extravergine d'oliva"),
        entry("butter", 717.0, 0.9, 0.1, 81.0).with_synonym("burro"),
        entry("tomato", 18.0, 0.9, 3.9, 0.2).with_synonym("pomodoro"),
        entry("pasta, spaghetti, dry", 371.0, 13.0, 75.0, 1.5),
    ]
}

/// Recipe with matched, unmatched and placeholder ingredients
pub fn pancake_recipe() -> RecipeRecord {
    let mut recipe = RecipeRecord::new("12", "Pancake della domenica", 4)
        .with_ingredients_json(
            r#"{"Farina 00": 200, "Latte intero": "250 ml", "Eggs (2)": "q.b.", "Zucchero": 30, "Sale": "q.b.", "Lievito magico": 8}"#,
        );
    recipe.declared_calories_per_serving = Some(310.0);
    recipe.difficulty = Some("Facile".to_owned());
    recipe
}

/// Recipe whose serving count is invalid
pub fn broken_servings_recipe() -> RecipeRecord {
    let mut recipe = RecipeRecord::new("99", "Ricetta senza dosi", 1)
        .with_ingredients([("chicken breast", 100.0)]);
    recipe.servings = json!(0);
    recipe
}

/// Catalog export as stored by the food table (flat documents, Italian keys)
pub fn catalog_export() -> Value {
    json!({
        "a1": {
            "Nome": "Chicken breast",
            "Sinonimi": "petto di pollo; pollo",
            "Energia (kcal)": 165,
            "Proteine (g)": 31,
            "Lipidi (g)": 3.6
        },
        "a2": {
            "Nome": "Sugar",
            "Energia (kcal)": 387,
            "Carboidrati disponibili (g)": 100
        },
        "a3": { "Sinonimi": "no name here" },
        "a4": {
            "name": "whole raw hen egg",
            "nutrients_per_100g": { "calories": 143, "proteins": 12.6 }
        }
    })
}

/// Recipe collection export (array form, numeric ids, Italian keys)
pub fn recipes_export() -> Value {
    json!([
        {
            "ID": 12,
            "Titolo": "Pollo al limone",
            "Dosi_per": "2",
            "Calorie_per_porzione": 280,
            "Ingredienti_JSON": "{\"Petto di pollo\": 300, \"Sale\": \"q.b.\"}"
        },
        {
            "ID": 13,
            "Titolo": "Frittata",
            "Dosi_per": 2,
            "Ingredienti_JSON": "{\"Uova medie (4)\": null, \"Zucchero\": 5}"
        },
        "not a recipe"
    ])
}
