// ABOUTME: Benchmark fixtures generating deterministic catalogs and ingredient lists
// ABOUTME: Provides synthetic reference tables and recipes of configurable size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for the nutrition engine.
//!
//! Generated data is deterministic so runs are comparable.

use ricettario::models::{Ingredient, RecipeRecord, ReferenceEntry};

const BASE_FOODS: [&str; 12] = [
    "chicken breast",
    "whole raw hen egg",
    "raw hen egg yolk",
    "raw hen egg white",
    "wheat flour, type 00",
    "sugar",
    "whole milk",
    "extra virgin olive oil",
    "butter",
    "tomato",
    "pasta, spaghetti, dry",
    "parmigiano reggiano",
];

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Hand-sized table (100 entries)
    Small,
    /// Typical exported food table (1000 entries)
    Medium,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 100,
            Self::Medium => 1_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "100_entries",
            Self::Medium => "1000_entries",
        }
    }
}

/// Generate a catalog whose real foods sit at the end, so every lookup scans it all
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<ReferenceEntry> {
    let filler = size.count().saturating_sub(BASE_FOODS.len());
    let mut catalog: Vec<ReferenceEntry> = (0..filler)
        .map(|i| {
            ReferenceEntry::new(format!("food item {i:04} variety {}", i % 7))
                .with_synonym(format!("alimento {i:04}"))
                .with_nutrient("calories", (i % 500) as f64)
                .with_nutrient("proteins", (i % 30) as f64)
        })
        .collect();

    catalog.extend(BASE_FOODS.iter().enumerate().map(|(i, name)| {
        ReferenceEntry::new(*name)
            .with_nutrient("calories", 50.0 + (i * 60) as f64)
            .with_nutrient("fats", (i * 5) as f64)
    }));
    catalog
}

/// Generate an ingredient list mixing exact, fuzzy, egg-rule and placeholder entries
#[must_use]
pub fn generate_ingredients(count: usize) -> Vec<Ingredient> {
    const NAMES: [&str; 8] = [
        "Chicken breast",
        "Eggs (2)",
        "Tuorli",
        "Tomatoes",
        "Sugar",
        "Spaghetti pasta",
        "Sale",
        "Burro chiarificato",
    ];

    (0..count)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            if name == "Sale" {
                Ingredient::new(format!("{name} {i}"), "q.b.")
            } else {
                Ingredient::new(format!("{name} {i}"), "120 g")
            }
        })
        .collect()
}

/// Recipe wrapping a generated ingredient list
#[must_use]
pub fn generate_recipe(count: usize) -> RecipeRecord {
    RecipeRecord::new("bench", "Benchmark recipe", 4).with_ingredients(
        generate_ingredients(count)
            .into_iter()
            .map(|ingredient| (ingredient.name, ingredient.raw_quantity)),
    )
}
