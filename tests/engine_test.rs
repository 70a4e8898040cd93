// ABOUTME: End-to-end tests for the nutrition engine pipeline
// ABOUTME: Tests order independence, exclusions, egg rules, servings validation and parallel path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use ricettario_core::constants::eggs::{RAW_HEN_EGG_YOLK, WHOLE_RAW_HEN_EGG};
use ricettario_core::errors::NutritionError;
use ricettario_core::models::{Ingredient, NutritionTotals, RawQuantity, RecipeRecord};
use ricettario_engine::{EngineConfig, ExclusionReason, NutritionEngine};
use serde_json::json;

fn assert_totals_close(a: &NutritionTotals, b: &NutritionTotals) {
    for ((nutrient, left), (_, right)) in a.iter().zip(b.iter()) {
        assert!((left - right).abs() < 1e-6, "{nutrient}: {left} vs {right}");
    }
}

// ============================================================================
// Core Properties
// ============================================================================

#[test]
fn test_chicken_breast_200g() {
    common::init_test_logging();
    let catalog = common::sample_catalog();
    let report = NutritionEngine::default()
        .analyze(&[Ingredient::new("Chicken breast", 200.0)], 2, &catalog)
        .unwrap();

    assert!((report.totals.calories - 330.0).abs() < 1e-9);
    assert!((report.per_serving.calories - 165.0).abs() < 1e-9);
    assert!(report.unmatched_names.is_empty());
    assert_eq!(report.matched_count(), 1);
    assert_eq!(report.trace[0].matched_entry.as_deref(), Some("chicken breast"));
}

#[test]
fn test_order_independence() {
    let catalog = common::sample_catalog();
    let engine = NutritionEngine::default();
    let forward = vec![
        Ingredient::new("Farina 00", 200.0),
        Ingredient::new("Zucchero", 50.0),
        Ingredient::new("Burro", "80 g"),
        Ingredient::new("Tuorli", 40.0),
        Ingredient::new("Ingrediente fantasma", 10.0),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = engine.analyze(&forward, 4, &catalog).unwrap();
    let b = engine.analyze(&reversed, 4, &catalog).unwrap();

    assert_totals_close(&a.totals, &b.totals);
    assert_totals_close(&a.per_serving, &b.per_serving);
    assert_eq!(a.unmatched_names, b.unmatched_names);
}

#[test]
fn test_placeholder_is_excluded_not_unmatched() {
    let catalog = common::sample_catalog();
    let report = NutritionEngine::default()
        .analyze(
            &[
                Ingredient::new("Sale", "q.b."),
                Ingredient::new("Pepe", RawQuantity::Missing),
                Ingredient::new("Zucchero", 100.0),
            ],
            1,
            &catalog,
        )
        .unwrap();

    assert_eq!(report.excluded_names(), vec!["Sale", "Pepe"]);
    assert!(report
        .excluded
        .iter()
        .all(|item| item.reason == ExclusionReason::Placeholder));
    assert!(report.unmatched_names.is_empty());
    assert_eq!(report.trace.len(), 1);
    assert!((report.totals.calories - 387.0).abs() < 1e-9);
}

#[test]
fn test_counted_eggs_become_grams() {
    let catalog = common::sample_catalog();
    let report = NutritionEngine::default()
        .analyze(&[Ingredient::new("eggs (3)", "q.b.")], 1, &catalog)
        .unwrap();

    assert_eq!(report.contributions.len(), 1);
    let contribution = &report.contributions[0];
    assert_eq!(contribution.entry_name, WHOLE_RAW_HEN_EGG);
    assert!((contribution.quantity_grams - 150.0).abs() < 1e-9);
    assert!((report.totals.calories - 214.5).abs() < 1e-9);
}

#[test]
fn test_fresh_eggs_use_exact_raw_entry() {
    let catalog = common::sample_catalog();
    let report = NutritionEngine::default()
        .analyze(&[Ingredient::new("Uova fresche", 100.0)], 1, &catalog)
        .unwrap();

    // The hard-boiled entry comes first in the catalog but is never chosen
    assert_eq!(report.trace[0].canonical_name, WHOLE_RAW_HEN_EGG);
    assert_eq!(report.trace[0].matched_entry.as_deref(), Some(WHOLE_RAW_HEN_EGG));
    assert!((report.trace[0].score - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_egg_yolks_use_exact_raw_entry_over_closer_fuzzy_candidate() {
    // "egg yolks, dried" is the closer spelling of "egg yolks" and comes first
    let mut catalog = vec![common::entry("egg yolks, dried", 661.0, 34.2, 1.8, 55.8)];
    catalog.extend(common::sample_catalog());

    let report = NutritionEngine::default()
        .analyze(&[Ingredient::new("Egg yolks", 40.0)], 2, &catalog)
        .unwrap();

    assert_eq!(report.trace[0].canonical_name, RAW_HEN_EGG_YOLK);
    assert_eq!(report.trace[0].matched_entry.as_deref(), Some(RAW_HEN_EGG_YOLK));
    assert!((report.totals.calories - 322.0 * 0.4).abs() < 1e-9);
    assert!((report.per_serving.calories - 64.4).abs() < 1e-9);
}

#[test]
fn test_random_string_is_reported_unmatched() {
    let catalog = common::sample_catalog();
    let report = NutritionEngine::default()
        .analyze(&[Ingredient::new("Qwzxv Plorkt", 100.0)], 1, &catalog)
        .unwrap();

    assert_eq!(report.unmatched_names, vec!["Qwzxv Plorkt".to_owned()]);
    assert!(report.totals.calories.abs() < f64::EPSILON);
    assert!(!report.trace[0].is_matched());
    assert_eq!(report.calories_per_100g, None);
}

#[test]
fn test_zero_servings_is_rejected() {
    let catalog = common::sample_catalog();
    let result =
        NutritionEngine::default().analyze(&[Ingredient::new("Zucchero", 10.0)], 0, &catalog);
    assert!(matches!(result, Err(NutritionError::InvalidServings { .. })));
}

#[test]
fn test_empty_catalog_and_empty_list() {
    let engine = NutritionEngine::default();

    let report = engine.analyze(&[], 2, &common::sample_catalog()).unwrap();
    assert!(report.totals.calories.abs() < f64::EPSILON);
    assert!(report.unmatched_names.is_empty());

    let report = engine
        .analyze(
            &[Ingredient::new("Zucchero", 10.0), Ingredient::new("Burro", 10.0)],
            1,
            &[],
        )
        .unwrap();
    assert_eq!(report.unmatched_names, vec!["Zucchero", "Burro"]);
}

#[test]
fn test_analysis_is_idempotent() {
    let catalog = common::sample_catalog();
    let engine = NutritionEngine::default();
    let ingredients = vec![
        Ingredient::new("Fresh eggs", 120.0),
        Ingredient::new("Latte intero", "1 cup"),
    ];
    let first = engine.analyze(&ingredients, 2, &catalog).unwrap();
    let second = engine.analyze(&ingredients, 2, &catalog).unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Records and Parallelism
// ============================================================================

#[test]
fn test_analyze_record() {
    let catalog = common::sample_catalog();
    let report = NutritionEngine::default()
        .analyze_record(&common::pancake_recipe(), &catalog)
        .unwrap();

    assert_eq!(report.servings, 4);
    assert_eq!(report.excluded_names(), vec!["Sale"]);
    assert_eq!(report.unmatched_names, vec!["Lievito magico"]);
    assert_eq!(report.matched_count(), 4);

    // flour 200 g, milk 250 ml at 1.03, two eggs, sugar 30 g
    let expected = 680.0 + 64.0 * 2.575 + 143.0 + 387.0 * 0.3;
    assert!((report.totals.calories - expected).abs() < 1e-6);
}

#[test]
fn test_record_servings_validated_before_ingredients() {
    let catalog = common::sample_catalog();
    let mut recipe = common::broken_servings_recipe();
    recipe.ingredients = json!("not json at all");

    let result = NutritionEngine::default().analyze_record(&recipe, &catalog);
    assert!(matches!(result, Err(NutritionError::InvalidServings { .. })));
}

#[test]
fn test_malformed_ingredients_fail_whole_recipe() {
    let catalog = common::sample_catalog();
    let recipe = RecipeRecord::new("1", "Rotta", 2)
        .with_ingredients_json(r#"{"Zucchero": 10, "Burro": true}"#);

    let result = NutritionEngine::default().analyze_record(&recipe, &catalog);
    assert!(matches!(
        result,
        Err(NutritionError::MalformedIngredients { .. })
    ));
}

#[test]
fn test_parallel_path_keeps_input_order() {
    let catalog = common::sample_catalog();
    let parallel = NutritionEngine::new(&EngineConfig {
        parallel_min_ingredients: 1,
        ..EngineConfig::default()
    });
    let sequential = NutritionEngine::new(&EngineConfig {
        parallel_min_ingredients: usize::MAX,
        ..EngineConfig::default()
    });

    let ingredients: Vec<Ingredient> = (0..40)
        .map(|i| match i % 4 {
            0 => Ingredient::new(format!("Zucchero {i}"), 10.0),
            1 => Ingredient::new("Sale", "q.b."),
            2 => Ingredient::new(format!("Mistero {i}"), 5.0),
            _ => Ingredient::new("Burro", 20.0),
        })
        .collect();

    let a = parallel.analyze(&ingredients, 4, &catalog).unwrap();
    let b = sequential.analyze(&ingredients, 4, &catalog).unwrap();
    assert_eq!(a, b);
}
