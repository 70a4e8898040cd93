// ABOUTME: Integration tests for recipe, ingredient and catalog models
// ABOUTME: Tests ingredient map decoding, servings validation and catalog document parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ricettario_core::errors::NutritionError;
use ricettario_core::models::{
    parse_ingredient_map, Nutrient, RawQuantity, RecipeRecord, ReferenceEntry,
};
use serde_json::json;

// ============================================================================
// Ingredient Maps
// ============================================================================

#[test]
fn test_ingredient_map_keeps_order_and_types() {
    let ingredients =
        parse_ingredient_map(r#"{"Zucchero": 100, "Latte": "250 ml", "Sale": null}"#).unwrap();

    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Zucchero", "Latte", "Sale"]);
    assert_eq!(ingredients[0].raw_quantity, RawQuantity::Number(100.0));
    assert_eq!(ingredients[1].raw_quantity, RawQuantity::Text("250 ml".to_owned()));
    assert_eq!(ingredients[2].raw_quantity, RawQuantity::Missing);
}

#[test]
fn test_malformed_ingredient_maps() {
    for text in ["[1, 2]", "not json", r#"{"Uova": [1]}"#, r#"{"Burro": {"g": 5}}"#] {
        assert!(
            matches!(
                parse_ingredient_map(text),
                Err(NutritionError::MalformedIngredients { .. })
            ),
            "{text}"
        );
    }
}

#[test]
fn test_recipe_ingredients_as_object_or_null() {
    let recipe = RecipeRecord::new("1", "Test", 2).with_ingredients([("Burro", 10.0)]);
    assert_eq!(recipe.ingredient_list().unwrap().len(), 1);

    let recipe = RecipeRecord::new("2", "Vuota", 2);
    assert!(recipe.ingredient_list().unwrap().is_empty());
}

// ============================================================================
// Servings
// ============================================================================

#[test]
fn test_servings_validation() {
    let mut recipe = RecipeRecord::new("1", "Test", 4);
    assert_eq!(recipe.servings().unwrap(), 4);

    recipe.servings = json!("6");
    assert_eq!(recipe.servings().unwrap(), 6);

    recipe.servings = json!(2.0);
    assert_eq!(recipe.servings().unwrap(), 2);

    for invalid in [json!(0), json!(-2), json!(2.5), json!("due"), json!(null)] {
        recipe.servings = invalid.clone();
        assert!(
            matches!(recipe.servings(), Err(NutritionError::InvalidServings { .. })),
            "{invalid}"
        );
    }
}

#[test]
fn test_recipe_document_with_italian_keys() {
    let recipe: RecipeRecord = serde_json::from_value(json!({
        "id": "7",
        "Titolo": "Frittata",
        "Dosi_per": 2,
        "Ingredienti_JSON": "{\"Uova\": 200}",
        "Calorie_per_porzione": 250,
        "Difficolta": "Facile"
    }))
    .unwrap();

    assert_eq!(recipe.title, "Frittata");
    assert_eq!(recipe.servings().unwrap(), 2);
    assert_eq!(recipe.declared_calories_per_serving, Some(250.0));
    assert_eq!(recipe.difficulty.as_deref(), Some("Facile"));
}

#[test]
fn test_display_fields_accept_numeric_strings() {
    let recipe: RecipeRecord = serde_json::from_value(json!({
        "id": "8",
        "Titolo": "Minestrone",
        "Dosi_per": "4",
        "Calorie_per_porzione": "180,5",
        "Tempo_preparazione_totale": " 45 "
    }))
    .unwrap();

    assert_eq!(recipe.declared_calories_per_serving, Some(180.5));
    assert_eq!(recipe.total_time_mins, Some(45));
}

#[test]
fn test_unreadable_display_fields_do_not_reject_the_recipe() {
    let recipe: RecipeRecord = serde_json::from_value(json!({
        "id": "9",
        "title": "Pane",
        "servings": 1,
        "Calorie_per_porzione": "n.d.",
        "Tempo_preparazione_totale": "1h 30",
        "Difficolta": "Media"
    }))
    .unwrap();

    assert_eq!(recipe.declared_calories_per_serving, None);
    assert_eq!(recipe.total_time_mins, None);
    assert_eq!(recipe.difficulty.as_deref(), Some("Media"));

    let recipe: RecipeRecord = serde_json::from_value(json!({
        "id": "10",
        "title": "Torta",
        "Calorie_per_porzione": null,
        "Tempo_preparazione_totale": 12.5
    }))
    .unwrap();
    assert_eq!(recipe.declared_calories_per_serving, None);
    assert_eq!(recipe.total_time_mins, None);
}

// ============================================================================
// Catalog Documents
// ============================================================================

#[test]
fn test_nutrient_aliases() {
    assert_eq!(Nutrient::from_key("Energia (kcal)"), Some(Nutrient::Calories));
    assert_eq!(Nutrient::from_key("protein"), Some(Nutrient::Proteins));
    assert_eq!(Nutrient::from_key("Fibre"), Some(Nutrient::Fiber));
    assert_eq!(Nutrient::from_key("vitamin_c"), Some(Nutrient::VitaminC));
    assert_eq!(Nutrient::from_key("caffeine"), None);
}

#[test]
fn test_flat_catalog_document() {
    let entry = ReferenceEntry::from_document(
        0,
        &json!({
            "ID": 42,
            "Nome": "Petto di pollo",
            "Sinonimi": "chicken breast, pollo",
            "Energia (kcal)": 110,
            "Proteine (g)": 23.3,
            "Note": "crudo"
        }),
    )
    .unwrap();

    assert_eq!(entry.name, "Petto di pollo");
    assert_eq!(entry.synonyms, vec!["chicken breast", "pollo"]);
    let per_100g = entry.per_100g();
    assert!((per_100g.calories - 110.0).abs() < f64::EPSILON);
    assert!((per_100g.proteins - 23.3).abs() < f64::EPSILON);
    // Identifiers are not nutrients
    assert!(!entry.nutrients_per_100g.contains_key("ID"));
}

#[test]
fn test_structured_catalog_document() {
    let entry = ReferenceEntry::from_document(
        3,
        &json!({
            "name": "sugar",
            "synonyms": ["zucchero", ""],
            "nutrients_per_100g": { "calories": 387, "carbohydrates": 100, "note": "x" }
        }),
    )
    .unwrap();

    assert_eq!(entry.synonyms, vec!["zucchero"]);
    let per_100g = entry.per_100g();
    assert!((per_100g.carbs - 100.0).abs() < f64::EPSILON);
    assert!(per_100g.fats.abs() < f64::EPSILON);
}

#[test]
fn test_malformed_catalog_documents() {
    let missing_name = ReferenceEntry::from_document(5, &json!({ "calories": 10 }));
    assert!(matches!(
        missing_name,
        Err(NutritionError::MalformedCatalogEntry { index: 5, .. })
    ));
    assert!(ReferenceEntry::from_document(6, &json!("sugar")).is_err());
}
