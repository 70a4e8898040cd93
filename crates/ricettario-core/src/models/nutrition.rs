// ABOUTME: Tracked nutrients and accumulated nutrient totals for recipes
// ABOUTME: Nutrient key resolution (English and Italian labels) and NutritionTotals arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutrient tracked by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy (kcal)
    Calories,
    /// Protein (g)
    Proteins,
    /// Available carbohydrates (g)
    Carbs,
    /// Total fat (g)
    Fats,
    /// Saturated fatty acids (g)
    SaturatedFats,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sodium (mg)
    Sodium,
    /// Potassium (mg)
    Potassium,
    /// Dietary fiber (g)
    Fiber,
    /// Soluble sugars (g)
    Sugar,
    /// Vitamin A (retinol equivalents, µg)
    VitaminA,
    /// Vitamin C (mg)
    VitaminC,
}

impl Nutrient {
    /// Every tracked nutrient, in display order
    pub const ALL: [Self; 12] = [
        Self::Calories,
        Self::Proteins,
        Self::Carbs,
        Self::Fats,
        Self::SaturatedFats,
        Self::Cholesterol,
        Self::Sodium,
        Self::Potassium,
        Self::Fiber,
        Self::Sugar,
        Self::VitaminA,
        Self::VitaminC,
    ];

    /// Position in [`Nutrient::ALL`]
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Canonical snake_case key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::Proteins => "proteins",
            Self::Carbs => "carbs",
            Self::Fats => "fats",
            Self::SaturatedFats => "saturated_fats",
            Self::Cholesterol => "cholesterol",
            Self::Sodium => "sodium",
            Self::Potassium => "potassium",
            Self::Fiber => "fiber",
            Self::Sugar => "sugar",
            Self::VitaminA => "vitamin_a",
            Self::VitaminC => "vitamin_c",
        }
    }

    /// Display unit
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Proteins
            | Self::Carbs
            | Self::Fats
            | Self::SaturatedFats
            | Self::Fiber
            | Self::Sugar => "g",
            Self::Cholesterol | Self::Sodium | Self::Potassium | Self::VitaminC => "mg",
            Self::VitaminA => "µg",
        }
    }

    /// Short human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Proteins => "Proteins",
            Self::Carbs => "Carbs",
            Self::Fats => "Fats",
            Self::SaturatedFats => "Sat. fats",
            Self::Cholesterol => "Cholest.",
            Self::Sodium => "Sodium",
            Self::Potassium => "Potassium",
            Self::Fiber => "Fiber",
            Self::Sugar => "Sugar",
            Self::VitaminA => "Vit. A",
            Self::VitaminC => "Vit. C",
        }
    }

    /// Alternate keys found in catalog documents
    const fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Calories => &[
                "energy",
                "energy_kcal",
                "kcal",
                "calorie",
                "energia, calorie (kcal)",
                "energia (kcal)",
            ],
            Self::Proteins => &["protein", "protein_g", "proteine", "proteine (g)"],
            Self::Carbs => &[
                "carbohydrates",
                "carbohydrate",
                "carbs_g",
                "glucidi, disponibili (g)",
                "carboidrati disponibili (g)",
            ],
            Self::Fats => &["fat", "fat_g", "lipids", "lipidi, totali (g)", "lipidi (g)"],
            Self::SaturatedFats => &[
                "saturated_fat",
                "saturated_fat_g",
                "acidi grassi, saturi (g)",
                "acidi grassi saturi (g)",
            ],
            Self::Cholesterol => &["cholesterol_mg", "colesterolo (mg)"],
            Self::Sodium => &["sodium_mg", "sodio", "sodio (na) (mg)"],
            Self::Potassium => &["potassium_mg", "potassio", "potassio (k) (mg)"],
            Self::Fiber => &["fibre", "fiber_g", "fibra alimentare (g)", "fibra totale (g)"],
            Self::Sugar => &[
                "sugars",
                "sugar_g",
                "zuccheri",
                "zuccheri solubili (g)",
                "zuccheri, solubili (g)",
            ],
            Self::VitaminA => &[
                "vitamin a",
                "vitamina a",
                "vitamina a, retinolo eq. (µg)",
                "vitamina a retinolo eq. (µg)",
            ],
            Self::VitaminC => &["vitamin c", "vitamina c", "vitamina c (mg)"],
        }
    }

    /// Resolve a catalog nutrient key (case-insensitive)
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|nutrient| {
            nutrient.key() == normalized || nutrient.aliases().contains(&normalized.as_str())
        })
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Accumulated nutrient amounts
///
/// Values are full precision; rounding belongs to the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub proteins: f64,
    /// Available carbohydrates (g)
    pub carbs: f64,
    /// Total fat (g)
    pub fats: f64,
    /// Saturated fatty acids (g)
    pub saturated_fats: f64,
    /// Cholesterol (mg)
    pub cholesterol: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Dietary fiber (g)
    pub fiber: f64,
    /// Soluble sugars (g)
    pub sugar: f64,
    /// Vitamin A (µg)
    pub vitamin_a: f64,
    /// Vitamin C (mg)
    pub vitamin_c: f64,
}

impl NutritionTotals {
    /// All nutrients at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            calories: 0.0,
            proteins: 0.0,
            carbs: 0.0,
            fats: 0.0,
            saturated_fats: 0.0,
            cholesterol: 0.0,
            sodium: 0.0,
            potassium: 0.0,
            fiber: 0.0,
            sugar: 0.0,
            vitamin_a: 0.0,
            vitamin_c: 0.0,
        }
    }

    /// Amount of a single nutrient
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Proteins => self.proteins,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
            Nutrient::SaturatedFats => self.saturated_fats,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::Sodium => self.sodium,
            Nutrient::Potassium => self.potassium,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
        }
    }

    fn slot(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Proteins => &mut self.proteins,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fats => &mut self.fats,
            Nutrient::SaturatedFats => &mut self.saturated_fats,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Potassium => &mut self.potassium,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminC => &mut self.vitamin_c,
        }
    }

    /// Add an amount to one nutrient
    ///
    /// Negative and non-finite amounts are ignored so totals stay non-negative.
    pub fn add(&mut self, nutrient: Nutrient, amount: f64) {
        if amount.is_finite() && amount > 0.0 {
            *self.slot(nutrient) += amount;
        }
    }

    /// Element-wise sum of two totals
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        for nutrient in Nutrient::ALL {
            self.add(nutrient, other.get(nutrient));
        }
        self
    }

    /// Every nutrient multiplied by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let mut scaled = Self::zero();
        for nutrient in Nutrient::ALL {
            scaled.add(nutrient, self.get(nutrient) * factor);
        }
        scaled
    }

    /// `(nutrient, amount)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL.into_iter().map(|n| (n, self.get(n)))
    }
}
