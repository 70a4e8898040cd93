// ABOUTME: Recipe document model for the recipe collection
// ABOUTME: Accepts English and original Italian document keys, validates servings and ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::ingredient::{parse_ingredient_map, Ingredient, RawQuantity};
use crate::errors::NutritionError;

/// A recipe as stored in the recipe collection
///
/// Only `servings` and `ingredients` feed the nutrition engine; everything
/// else is descriptive metadata for listing and detail views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Document identifier
    #[serde(default, alias = "ID")]
    pub id: String,
    /// Recipe title
    #[serde(alias = "Titolo")]
    pub title: String,
    /// Number of servings, as stored (number or numeric string)
    #[serde(default, alias = "Dosi_per")]
    pub servings: Value,
    /// Ingredient map, usually serialized JSON text, possibly `null`
    #[serde(default, alias = "Ingredienti_JSON")]
    pub ingredients: Value,
    /// Calories per serving declared by the recipe author
    #[serde(
        default,
        alias = "Calorie_per_porzione",
        deserialize_with = "deserialize_lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub declared_calories_per_serving: Option<f64>,
    /// Picture of the dish
    #[serde(default, alias = "Immagine_URL", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Total preparation time in minutes
    #[serde(
        default,
        alias = "Tempo_preparazione_totale",
        deserialize_with = "deserialize_lenient_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_time_mins: Option<u32>,
    /// Difficulty label
    #[serde(default, alias = "Difficolta", skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Cost label
    #[serde(default, alias = "Costo", skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    /// Cooking method
    #[serde(default, alias = "Cottura", skip_serializing_if = "Option::is_none")]
    pub cooking: Option<String>,
    /// Diet type label
    #[serde(default, alias = "Tipologia_dieta", skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    /// Short presentation text
    #[serde(default, alias = "Presentazione", skip_serializing_if = "Option::is_none")]
    pub presentation: Option<String>,
    /// Link to the full recipe
    #[serde(default, alias = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Number stored as a JSON number or numeric string ("30", "280,5")
fn numeric_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(text) => text.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Display-only number; anything unreadable becomes `None` instead of
/// rejecting the whole recipe document
fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(numeric_value))
}

/// Display-only whole minutes, same leniency as [`deserialize_lenient_f64`]
fn deserialize_lenient_minutes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(numeric_value)
        .filter(|minutes| *minutes >= 0.0 && minutes.fract() == 0.0)
        .filter(|minutes| *minutes <= f64::from(u32::MAX))
        .map(|minutes| minutes as u32))
}

impl RecipeRecord {
    /// Create a recipe with the fields the nutrition engine needs
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, servings: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            servings: Value::from(servings),
            ingredients: Value::Null,
            declared_calories_per_serving: None,
            image_url: None,
            total_time_mins: None,
            difficulty: None,
            cost: None,
            cooking: None,
            diet_type: None,
            presentation: None,
            url: None,
        }
    }

    /// Set the ingredient map from serialized JSON text
    #[must_use]
    pub fn with_ingredients_json(mut self, json_text: impl Into<String>) -> Self {
        self.ingredients = Value::String(json_text.into());
        self
    }

    /// Set the ingredient map from name/quantity pairs
    #[must_use]
    pub fn with_ingredients<I, N, Q>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = (N, Q)>,
        N: Into<String>,
        Q: Into<RawQuantity>,
    {
        let map = ingredients
            .into_iter()
            .map(|(name, quantity)| {
                let value = match quantity.into() {
                    RawQuantity::Number(n) => Value::from(n),
                    RawQuantity::Text(s) => Value::String(s),
                    RawQuantity::Missing => Value::Null,
                };
                (name.into(), value)
            })
            .collect();
        self.ingredients = Value::Object(map);
        self
    }

    /// Validated serving count
    ///
    /// Accepts a positive integer, an integral float (`4.0`) or a numeric string.
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::InvalidServings` for anything else, including zero.
    pub fn servings(&self) -> Result<u32, NutritionError> {
        let invalid = || NutritionError::invalid_servings(self.servings.to_string());

        let as_float = match &self.servings {
            Value::Number(n) => n.as_f64().ok_or_else(invalid)?,
            Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        if !as_float.is_finite() || as_float < 1.0 || as_float.fract() != 0.0 {
            return Err(invalid());
        }
        if as_float > f64::from(u32::MAX) {
            return Err(invalid());
        }
        Ok(as_float as u32)
    }

    /// Decoded ingredient list, in recipe order
    ///
    /// `null` or a missing field yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::MalformedIngredients` when the stored data
    /// cannot be decoded.
    pub fn ingredient_list(&self) -> Result<Vec<Ingredient>, NutritionError> {
        match &self.ingredients {
            Value::Null => Ok(Vec::new()),
            Value::String(text) => parse_ingredient_map(text),
            Value::Object(map) => map
                .iter()
                .map(|(name, quantity)| {
                    Ok(Ingredient {
                        name: name.clone(),
                        raw_quantity: RawQuantity::from_value(name, quantity)?,
                    })
                })
                .collect(),
            Value::Bool(_) | Value::Number(_) | Value::Array(_) => Err(
                NutritionError::malformed_ingredients("ingredient data must be a JSON object or JSON text"),
            ),
        }
    }
}
