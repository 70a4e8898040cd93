// ABOUTME: Unit annotation parsing and gram conversion for recipe quantities
// ABOUTME: Converts weight, volume and count units to grams using ingredient-specific densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Conversion error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Density not known for the ingredient
    #[error("Density not found for ingredient")]
    DensityNotFound,
    /// Negative or non-finite amount
    #[error("Invalid amount (must be a finite non-negative number)")]
    InvalidAmount,
    /// Unit not supported for this ingredient (e.g. pieces of flour)
    #[error("Unit {0:?} not supported for this ingredient")]
    UnsupportedUnit(QuantityUnit),
}

/// Unit found in a quantity annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityUnit {
    /// Weight in grams (base unit, also used when no unit is written)
    Grams,
    /// Weight in kilograms
    Kilograms,
    /// Weight in ounces (28.35 g)
    Ounces,
    /// Weight in pounds (453.6 g)
    Pounds,
    /// Volume in milliliters
    Milliliters,
    /// Volume in centiliters
    Centiliters,
    /// Volume in liters
    Liters,
    /// Cups (240 ml)
    Cups,
    /// Tablespoons / cucchiai (15 ml)
    Tablespoons,
    /// Teaspoons / cucchiaini (5 ml)
    Teaspoons,
    /// Count of whole items (pezzi, spicchi)
    Pieces,
}

impl QuantityUnit {
    /// Resolve a written unit label (English or Italian, case-insensitive)
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().trim_end_matches('.').to_lowercase();
        let unit = match label.as_str() {
            "g" | "gr" | "grammi" | "grammo" | "gram" | "grams" => Self::Grams,
            "kg" | "chilo" | "chili" | "kilogram" | "kilograms" => Self::Kilograms,
            "oz" | "ounce" | "ounces" => Self::Ounces,
            "lb" | "lbs" | "pound" | "pounds" => Self::Pounds,
            "ml" | "millilitri" | "milliliter" | "milliliters" => Self::Milliliters,
            "cl" | "centilitri" => Self::Centiliters,
            "l" | "lt" | "litro" | "litri" | "liter" | "liters" | "litre" | "litres" => {
                Self::Liters
            }
            "cup" | "cups" | "tazza" | "tazze" => Self::Cups,
            "tbsp" | "tablespoon" | "tablespoons" | "cucchiaio" | "cucchiai" => Self::Tablespoons,
            "tsp" | "teaspoon" | "teaspoons" | "cucchiaino" | "cucchiaini" => Self::Teaspoons,
            "pz" | "pezzo" | "pezzi" | "pc" | "pcs" | "piece" | "pieces" | "spicchio"
            | "spicchi" => Self::Pieces,
            _ => return None,
        };
        Some(unit)
    }

    /// Grams per unit for weight units
    const fn grams_factor(self) -> Option<f64> {
        match self {
            Self::Grams => Some(1.0),
            Self::Kilograms => Some(GRAMS_PER_KG),
            Self::Ounces => Some(GRAMS_PER_OZ),
            Self::Pounds => Some(GRAMS_PER_LB),
            _ => None,
        }
    }

    /// Milliliters per unit for volume units
    const fn milliliters_factor(self) -> Option<f64> {
        match self {
            Self::Milliliters => Some(1.0),
            Self::Centiliters => Some(ML_PER_CL),
            Self::Liters => Some(ML_PER_LITER),
            Self::Cups => Some(ML_PER_CUP),
            Self::Tablespoons => Some(ML_PER_TBSP),
            Self::Teaspoons => Some(ML_PER_TSP),
            _ => None,
        }
    }

    /// Check if this unit is a weight measurement
    #[must_use]
    pub const fn is_weight(self) -> bool {
        self.grams_factor().is_some()
    }
}

/// Density information for an ingredient
///
/// Grams per milliliter for liquids and powders, grams per piece for
/// countable items.
#[derive(Debug, Clone, Copy)]
pub struct IngredientDensity {
    /// Grams per milliliter (for volume conversions)
    pub grams_per_ml: Option<f64>,
    /// Grams per piece (for count conversions)
    pub grams_per_piece: Option<f64>,
    /// Other names (Italian and English, singular and plural)
    pub aliases: &'static [&'static str],
}

impl IngredientDensity {
    const fn liquid(grams_per_ml: f64) -> Self {
        Self {
            grams_per_ml: Some(grams_per_ml),
            grams_per_piece: None,
            aliases: &[],
        }
    }

    const fn countable(grams_per_piece: f64) -> Self {
        Self {
            grams_per_ml: None,
            grams_per_piece: Some(grams_per_piece),
            aliases: &[],
        }
    }

    const fn both(grams_per_ml: f64, grams_per_piece: f64) -> Self {
        Self {
            grams_per_ml: Some(grams_per_ml),
            grams_per_piece: Some(grams_per_piece),
            aliases: &[],
        }
    }

    const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

const ML_PER_CUP: f64 = 240.0;
const ML_PER_TBSP: f64 = 15.0;
const ML_PER_TSP: f64 = 5.0;
const ML_PER_CL: f64 = 10.0;
const ML_PER_LITER: f64 = 1000.0;

const GRAMS_PER_OZ: f64 = 28.35;
const GRAMS_PER_LB: f64 = 453.6;
const GRAMS_PER_KG: f64 = 1000.0;

/// Common ingredient densities, most specific names first
///
/// Densities are approximate kitchen averages. Partial lookups walk this
/// table in order, so "olio di semi" must precede "olio".
static INGREDIENT_DENSITIES: &[(&str, IngredientDensity)] = &[
    // === Eggs (canonical names produced by the substance rules) ===
    (
        "raw hen egg yolk",
        IngredientDensity::countable(18.0).with_aliases(&["tuorlo", "tuorli", "egg yolk", "yolk"]),
    ),
    (
        "raw hen egg white",
        IngredientDensity::both(1.03, 33.0).with_aliases(&["albume", "albumi", "egg white"]),
    ),
    (
        "whole raw hen egg",
        IngredientDensity::countable(50.0).with_aliases(&["uovo", "uova", "egg", "eggs"]),
    ),
    // === Liquids ===
    (
        "olio di semi",
        IngredientDensity::liquid(0.92).with_aliases(&["seed oil", "sunflower oil"]),
    ),
    (
        "olio extravergine d'oliva",
        IngredientDensity::liquid(0.92).with_aliases(&["olio", "olive oil", "oil", "evo"]),
    ),
    ("latte", IngredientDensity::liquid(1.03).with_aliases(&["milk"])),
    ("panna", IngredientDensity::liquid(1.01).with_aliases(&["cream", "panna fresca"])),
    ("acqua", IngredientDensity::liquid(1.0).with_aliases(&["water"])),
    ("vino", IngredientDensity::liquid(0.99).with_aliases(&["wine", "vino bianco", "vino rosso"])),
    ("brodo", IngredientDensity::liquid(1.0).with_aliases(&["broth", "stock"])),
    ("aceto", IngredientDensity::liquid(1.01).with_aliases(&["vinegar"])),
    ("miele", IngredientDensity::liquid(1.42).with_aliases(&["honey"])),
    ("yogurt", IngredientDensity::liquid(1.05).with_aliases(&["yogurt greco", "greek yogurt"])),
    // === Powders & fats ===
    ("farina", IngredientDensity::liquid(0.53).with_aliases(&["flour", "farina 00"])),
    ("zucchero", IngredientDensity::liquid(0.85).with_aliases(&["sugar"])),
    ("sale", IngredientDensity::liquid(1.2).with_aliases(&["salt", "sale fino"])),
    ("riso", IngredientDensity::liquid(0.77).with_aliases(&["rice"])),
    ("burro", IngredientDensity::liquid(0.96).with_aliases(&["butter"])),
    (
        "parmigiano reggiano",
        IngredientDensity::liquid(0.42).with_aliases(&["parmigiano", "parmesan", "grana"]),
    ),
    // === Countable produce ===
    (
        "aglio",
        IngredientDensity::countable(5.0).with_aliases(&["garlic", "spicchio d'aglio", "garlic clove"]),
    ),
    ("cipolla", IngredientDensity::countable(110.0).with_aliases(&["cipolle", "onion", "onions"])),
    ("limone", IngredientDensity::countable(120.0).with_aliases(&["limoni", "lemon", "lemons"])),
    ("patata", IngredientDensity::countable(170.0).with_aliases(&["patate", "potato", "potatoes"])),
    (
        "pomodoro",
        IngredientDensity::countable(120.0).with_aliases(&["pomodori", "tomato", "tomatoes"]),
    ),
    ("carota", IngredientDensity::countable(60.0).with_aliases(&["carote", "carrot", "carrots"])),
    ("mela", IngredientDensity::countable(180.0).with_aliases(&["mele", "apple", "apples"])),
    ("banana", IngredientDensity::countable(120.0).with_aliases(&["banane", "bananas"])),
];

/// `[whole ]number[/denominator][ unit]`, on lower-cased trimmed text
static QUANTITY_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 200, 200g, 1,5 kg, 1/2 cup, 1 1/2 tazze, 2 cucchiai
    Regex::new(
        r"^(?:(?P<whole>\d+)\s+)?(?P<num>\d+(?:[.,]\d+)?)(?:\s*/\s*(?P<den>\d+))?\s*(?P<unit>\p{L}[\p{L}.']*)?$",
    )
    .ok()
});

/// Parse a quantity annotation into an amount and unit
///
/// A bare number is grams. Returns `None` when the text is not a single
/// amount followed by a known unit.
#[must_use]
pub fn parse_quantity_text(text: &str) -> Option<(f64, QuantityUnit)> {
    let normalized = text.trim().to_lowercase();
    let caps = QUANTITY_PATTERN.as_ref()?.captures(&normalized)?;

    let mut amount: f64 = caps.name("num")?.as_str().replace(',', ".").parse().ok()?;
    if let Some(den) = caps.name("den") {
        let den: f64 = den.as_str().parse().ok()?;
        if den == 0.0 {
            return None;
        }
        amount /= den;
    }
    if let Some(whole) = caps.name("whole") {
        // "1 1/2" is a mixed fraction; "1 2" is not a quantity
        caps.name("den")?;
        amount += whole.as_str().parse::<f64>().ok()?;
    }

    let unit = match caps.name("unit") {
        Some(label) => QuantityUnit::from_label(label.as_str())?,
        None => QuantityUnit::Grams,
    };

    Some((amount, unit))
}

/// True when `needle` occurs in `haystack` as whole words
fn contains_words(haystack: &str, needle: &str) -> bool {
    format!(" {haystack} ").contains(&format!(" {needle} "))
}

/// Look up density for an ingredient
///
/// Case-insensitive: direct name, then aliases, then the first known name
/// or alias that occurs in the ingredient name as whole words.
fn lookup_density(ingredient_name: &str) -> Option<&'static IngredientDensity> {
    let normalized = ingredient_name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

    if let Some((_, density)) = INGREDIENT_DENSITIES.iter().find(|(key, _)| *key == normalized) {
        return Some(density);
    }

    if let Some((_, density)) = INGREDIENT_DENSITIES
        .iter()
        .find(|(_, density)| density.aliases.contains(&normalized.as_str()))
    {
        return Some(density);
    }

    INGREDIENT_DENSITIES
        .iter()
        .find(|(key, density)| {
            contains_words(&normalized, key)
                || density.aliases.iter().any(|alias| contains_words(&normalized, alias))
        })
        .map(|(_, density)| density)
}

/// Convert an ingredient amount to grams
///
/// Weight units convert directly; volume and count units need a known
/// density for the ingredient.
///
/// # Errors
///
/// Returns `ConversionError::InvalidAmount` if amount is negative or not finite.
/// Returns `ConversionError::DensityNotFound` if ingredient density is unknown (for volume/count units).
/// Returns `ConversionError::UnsupportedUnit` if the unit is incompatible with the ingredient.
pub fn convert_to_grams(
    ingredient_name: &str,
    amount: f64,
    unit: QuantityUnit,
) -> Result<f64, ConversionError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ConversionError::InvalidAmount);
    }

    if let Some(factor) = unit.grams_factor() {
        return Ok(amount * factor);
    }

    let density = lookup_density(ingredient_name).ok_or(ConversionError::DensityNotFound)?;

    if let Some(ml_per_unit) = unit.milliliters_factor() {
        let grams_per_ml = density
            .grams_per_ml
            .ok_or(ConversionError::UnsupportedUnit(unit))?;
        return Ok(amount * ml_per_unit * grams_per_ml);
    }

    let grams_per_piece = density
        .grams_per_piece
        .ok_or(ConversionError::UnsupportedUnit(unit))?;
    Ok(amount * grams_per_piece)
}
