// ABOUTME: Ingredient normalization from raw recipe entries to canonical name and grams
// ABOUTME: Ordered egg substance rules, placeholder detection, and unit-annotated quantity parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Normalizer
//!
//! Turns a raw `(name, quantity)` pair into a [`NormalizedIngredient`] or an
//! [`ExcludedIngredient`]. Substance rules are an ordered table; the first
//! rule whose predicate fires rewrites the name (and possibly the quantity)
//! and no later rule is consulted.
//!
//! Normalization is pure: feeding a canonical name back in yields the same
//! canonical name and quantity.

use regex::Regex;
use ricettario_core::constants::eggs::{
    GRAMS_PER_MEDIUM_EGG, RAW_HEN_EGG_WHITE, RAW_HEN_EGG_YOLK, WHOLE_RAW_HEN_EGG,
};
use ricettario_core::constants::quantity::PLACEHOLDER_MARKERS;
use ricettario_core::models::{Ingredient, RawQuantity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use crate::conversion::{convert_to_grams, parse_quantity_text, ConversionError};
use crate::similarity::normalize_text;

/// Special-case substance rule that rewrote an ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstanceRule {
    /// "fresh egg(s)", "uovo fresco", "uova fresche"
    FreshEgg,
    /// "yolk(s)", "tuorlo", "tuorli"
    EggYolk,
    /// "egg white(s)", "whites", "albume", "albumi"
    EggWhite,
    /// "eggs (N)", "uova medie (N)": N medium eggs
    CountedEggs,
}

impl fmt::Display for SubstanceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FreshEgg => "fresh egg",
            Self::EggYolk => "egg yolk",
            Self::EggWhite => "egg white",
            Self::CountedEggs => "counted eggs",
        };
        f.write_str(label)
    }
}

/// Why an ingredient was dropped before matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// "q.b.", "to taste", empty string or `null`
    Placeholder,
    /// Text that is not a number with an optional known unit
    Unparseable,
    /// Negative number
    NegativeQuantity,
    /// Volume or count unit with no known density for the ingredient
    UnconvertibleUnit,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Placeholder => "placeholder quantity",
            Self::Unparseable => "unparseable quantity",
            Self::NegativeQuantity => "negative quantity",
            Self::UnconvertibleUnit => "unconvertible unit",
        };
        f.write_str(label)
    }
}

/// Ingredient ready for matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedIngredient {
    /// Name as written in the recipe (trimmed, original casing)
    pub display_name: String,
    /// Lower-cased, whitespace-collapsed name used for matching
    pub canonical_name: String,
    /// Finite, non-negative quantity in grams
    pub quantity_grams: f64,
    /// Substance rule that fired, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<SubstanceRule>,
}

/// Ingredient dropped before matching; contributes nothing and is not "unmatched"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedIngredient {
    /// Name as written in the recipe
    pub display_name: String,
    /// Why it was dropped
    pub reason: ExclusionReason,
}

/// Outcome of normalizing one ingredient
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizeOutcome {
    /// Ready for matching
    Normalized(NormalizedIngredient),
    /// Dropped
    Excluded(ExcludedIngredient),
}

impl NormalizeOutcome {
    /// The normalized ingredient, if not excluded
    #[must_use]
    pub const fn as_normalized(&self) -> Option<&NormalizedIngredient> {
        match self {
            Self::Normalized(ingredient) => Some(ingredient),
            Self::Excluded(_) => None,
        }
    }

    /// Whether the ingredient was dropped
    #[must_use]
    pub const fn is_excluded(&self) -> bool {
        matches!(self, Self::Excluded(_))
    }
}

/// Name rewrite produced by a substance rule
struct Rewrite {
    canonical_name: &'static str,
    quantity_override: Option<f64>,
}

/// One row of the ordered rule table
struct RuleEntry {
    rule: SubstanceRule,
    apply: fn(&str) -> Option<Rewrite>,
}

static FRESH_EGG_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: fresh egg, fresh eggs, uovo fresco, uova fresche
    Regex::new(r"\b(?:fresh\s+eggs?|uov[oa]\s+fresc(?:o|a|he|hi))\b").ok()
});

static YOLK_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: yolk, egg yolks, tuorlo, tuorli
    Regex::new(r"\b(?:yolks?|tuorl[oi])\b").ok()
});

static WHITE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: egg white, egg whites, whites, albume, albumi
    // A lone "white" only counts as the whole name (see apply_egg_white)
    Regex::new(r"\b(?:egg\s+whites?|whites|album[ei])\b").ok()
});

static COUNTED_EGGS_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: eggs (3), egg (1), uova (2), uova medie (4), eggs (2 medium)
    // Only a size qualifier may sit between the egg word and the count
    Regex::new(
        r"\b(?:eggs?|uov[ao])(?:\s+(?:half|medium|medi[eo]))?\s*\(\s*(\d+)\s*(?:half|medium|medi[eo])?\s*\)",
    )
    .ok()
});

fn pattern_matches(pattern: &LazyLock<Option<Regex>>, name: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(name))
}

fn apply_fresh_egg(name: &str) -> Option<Rewrite> {
    pattern_matches(&FRESH_EGG_PATTERN, name).then_some(Rewrite {
        canonical_name: WHOLE_RAW_HEN_EGG,
        quantity_override: None,
    })
}

fn apply_egg_yolk(name: &str) -> Option<Rewrite> {
    pattern_matches(&YOLK_PATTERN, name).then_some(Rewrite {
        canonical_name: RAW_HEN_EGG_YOLK,
        quantity_override: None,
    })
}

fn apply_egg_white(name: &str) -> Option<Rewrite> {
    (name == "white" || pattern_matches(&WHITE_PATTERN, name)).then_some(Rewrite {
        canonical_name: RAW_HEN_EGG_WHITE,
        quantity_override: None,
    })
}

fn apply_counted_eggs(name: &str) -> Option<Rewrite> {
    let count: u32 = COUNTED_EGGS_PATTERN
        .as_ref()?
        .captures(name)?
        .get(1)?
        .as_str()
        .parse()
        .ok()?;
    Some(Rewrite {
        canonical_name: WHOLE_RAW_HEN_EGG,
        quantity_override: Some(f64::from(count) * GRAMS_PER_MEDIUM_EGG),
    })
}

/// Substance rules in precedence order; first match wins
static SUBSTANCE_RULES: [RuleEntry; 4] = [
    RuleEntry {
        rule: SubstanceRule::FreshEgg,
        apply: apply_fresh_egg,
    },
    RuleEntry {
        rule: SubstanceRule::EggYolk,
        apply: apply_egg_yolk,
    },
    RuleEntry {
        rule: SubstanceRule::EggWhite,
        apply: apply_egg_white,
    },
    RuleEntry {
        rule: SubstanceRule::CountedEggs,
        apply: apply_counted_eggs,
    },
];

/// First substance rule that fires for an already lower-cased name
fn first_rule(name: &str) -> Option<(SubstanceRule, Rewrite)> {
    SUBSTANCE_RULES
        .iter()
        .find_map(|entry| (entry.apply)(name).map(|rewrite| (entry.rule, rewrite)))
}

/// Whether a quantity string means "not quantifiable"
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    let normalized = normalize_text(text);
    PLACEHOLDER_MARKERS.contains(&normalized.as_str())
}

/// Resolve a raw quantity to grams for the given canonical name
fn quantity_in_grams(canonical_name: &str, raw: &RawQuantity) -> Result<f64, ExclusionReason> {
    match raw {
        RawQuantity::Missing => Err(ExclusionReason::Placeholder),
        RawQuantity::Number(n) if !n.is_finite() => Err(ExclusionReason::Unparseable),
        RawQuantity::Number(n) if *n < 0.0 => Err(ExclusionReason::NegativeQuantity),
        RawQuantity::Number(n) => Ok(*n),
        RawQuantity::Text(text) if is_placeholder(text) => Err(ExclusionReason::Placeholder),
        RawQuantity::Text(text) => {
            let (amount, unit) =
                parse_quantity_text(text).ok_or(ExclusionReason::Unparseable)?;
            convert_to_grams(canonical_name, amount, unit).map_err(|e| match e {
                ConversionError::InvalidAmount => ExclusionReason::NegativeQuantity,
                ConversionError::DensityNotFound | ConversionError::UnsupportedUnit(_) => {
                    ExclusionReason::UnconvertibleUnit
                }
            })
        }
    }
}

/// Canonical name, fired rule and quantity override for a raw name
fn rewrite_name(name: &str) -> (String, Option<SubstanceRule>, Option<f64>) {
    let lowered = normalize_text(name);
    match first_rule(&lowered) {
        Some((rule, rewrite)) => (
            rewrite.canonical_name.to_owned(),
            Some(rule),
            rewrite.quantity_override,
        ),
        None => (lowered, None, None),
    }
}

/// Canonical matching name for a raw ingredient name, ignoring quantity
///
/// Returns the substance rule that fired, if any.
#[must_use]
pub fn canonical_name(name: &str) -> (String, Option<SubstanceRule>) {
    let (canonical, rule, _) = rewrite_name(name);
    (canonical, rule)
}

/// Normalize one raw ingredient entry
///
/// The display name keeps the recipe's casing; the canonical name is
/// lower-cased and whitespace-collapsed, then rewritten by the first
/// substance rule that fires. A counted-eggs rule overrides the raw quantity,
/// even a placeholder.
#[must_use]
pub fn normalize(name: &str, raw_quantity: &RawQuantity) -> NormalizeOutcome {
    let display_name = name.trim().to_owned();
    let (canonical_name, rule, quantity_override) = rewrite_name(name);

    let quantity = quantity_override.map_or_else(
        || quantity_in_grams(&canonical_name, raw_quantity),
        Ok,
    );

    match quantity {
        Ok(quantity_grams) => {
            debug!(
                ingredient = %display_name,
                canonical = %canonical_name,
                grams = quantity_grams,
                rule = ?rule,
                "Ingredient normalized"
            );
            NormalizeOutcome::Normalized(NormalizedIngredient {
                display_name,
                canonical_name,
                quantity_grams,
                rule,
            })
        }
        Err(reason) => {
            debug!(
                ingredient = %display_name,
                quantity = %raw_quantity,
                %reason,
                "Ingredient excluded"
            );
            NormalizeOutcome::Excluded(ExcludedIngredient {
                display_name,
                reason,
            })
        }
    }
}

/// Normalize an [`Ingredient`]
#[must_use]
pub fn normalize_ingredient(ingredient: &Ingredient) -> NormalizeOutcome {
    normalize(&ingredient.name, &ingredient.raw_quantity)
}
