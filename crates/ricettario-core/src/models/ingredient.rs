// ABOUTME: Ingredient input model and decoding of serialized ingredient maps
// ABOUTME: Defines Ingredient, RawQuantity and parse_ingredient_map for recipe JSON text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::errors::NutritionError;

/// Quantity exactly as written in the recipe's ingredient map
///
/// Numbers are grams. Strings may carry a unit (`"200 g"`, `"2 cucchiai"`)
/// or be a placeholder such as `"q.b."`. `null` means no quantity was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuantity {
    /// Numeric quantity in grams
    Number(f64),
    /// Free-text quantity
    Text(String),
    /// Explicit `null`
    Missing,
}

impl RawQuantity {
    /// Decode a JSON value, rejecting booleans, arrays and objects
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::MalformedIngredients` for unsupported value types.
    pub fn from_value(ingredient: &str, value: &Value) -> Result<Self, NutritionError> {
        match value {
            Value::Number(n) => n.as_f64().map(Self::Number).ok_or_else(|| {
                NutritionError::malformed_ingredients(format!(
                    "quantity of '{ingredient}' is not representable as a number"
                ))
            }),
            Value::String(s) => Ok(Self::Text(s.clone())),
            Value::Null => Ok(Self::Missing),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Err(NutritionError::malformed_ingredients(format!(
                    "quantity of '{ingredient}' must be a number or a string"
                )))
            }
        }
    }
}

impl From<f64> for RawQuantity {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawQuantity {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl fmt::Display for RawQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Missing => write!(f, "null"),
        }
    }
}

/// Single recipe ingredient before normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name as written in the recipe
    pub name: String,
    /// Quantity as written in the recipe
    pub raw_quantity: RawQuantity,
}

impl Ingredient {
    /// Create an ingredient from a name and any raw quantity form
    #[must_use]
    pub fn new(name: impl Into<String>, raw_quantity: impl Into<RawQuantity>) -> Self {
        Self {
            name: name.into(),
            raw_quantity: raw_quantity.into(),
        }
    }
}

/// Decode a serialized ingredient map (`{"name": quantity, ...}`)
///
/// Entry order is preserved. The whole map is rejected when any value has an
/// unsupported type; no partial list is ever returned.
///
/// # Errors
///
/// Returns `NutritionError::MalformedIngredients` when the text is not JSON,
/// is not an object, or contains an unsupported quantity type.
pub fn parse_ingredient_map(json_text: &str) -> Result<Vec<Ingredient>, NutritionError> {
    let value: Value = serde_json::from_str(json_text)
        .map_err(|e| NutritionError::malformed_ingredients(format!("invalid JSON: {e}")))?;

    let Value::Object(map) = value else {
        return Err(NutritionError::malformed_ingredients(
            "ingredient data must be a JSON object of name to quantity",
        ));
    };

    map.iter()
        .map(|(name, quantity)| {
            Ok(Ingredient {
                name: name.clone(),
                raw_quantity: RawQuantity::from_value(name, quantity)?,
            })
        })
        .collect()
}
