// ABOUTME: Plain-text rendering of nutrition analyses, recipe listings and match probes
// ABOUTME: Summary boxes, per-ingredient nutrient table with totals, and not-found warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ricettario_core::models::{Nutrient, NutritionTotals, RecipeRecord};
use ricettario_engine::IngredientContribution;
use serde_json::Value;

use super::round_to_one_decimal;
use crate::service::{MatchProbe, RecipeAnalysis};

const RULE_WIDTH: usize = 80;
const NAME_WIDTH: usize = 24;
const NUMBER_WIDTH: usize = 10;

/// Types that have a terminal rendering
pub trait TextReport {
    /// Render as plain text, one decimal per figure
    fn render_text(&self) -> String;
}

fn separator() -> String {
    "=".repeat(RULE_WIDTH)
}

fn fixed_width(name: &str, width: usize) -> String {
    let count = name.chars().count();
    if count <= width {
        format!("{name:<width$}")
    } else {
        let truncated: String = name.chars().take(width.saturating_sub(1)).collect();
        format!("{truncated}~")
    }
}

fn one_decimal(value: f64) -> String {
    format!("{:.1}", round_to_one_decimal(value))
}

fn nutrient_header() -> String {
    let mut header = format!("{} {:>8}", fixed_width("Ingredient", NAME_WIDTH), "Grams");
    for nutrient in Nutrient::ALL {
        let label = format!("{} ({})", nutrient.label(), nutrient.unit());
        header.push_str(&format!(" {label:>NUMBER_WIDTH$}"));
    }
    header
}

fn nutrient_row(name: &str, grams: f64, nutrients: &NutritionTotals) -> String {
    let mut row = format!("{} {:>8}", fixed_width(name, NAME_WIDTH), one_decimal(grams));
    for (_, value) in nutrients.iter() {
        row.push_str(&format!(" {:>NUMBER_WIDTH$}", one_decimal(value)));
    }
    row
}

fn contribution_table(contributions: &[IngredientContribution], totals: &NutritionTotals, grams: f64) -> Vec<String> {
    let mut lines = vec![nutrient_header()];
    lines.extend(contributions.iter().map(|row| {
        nutrient_row(&row.display_name, row.quantity_grams, &row.nutrients)
    }));
    lines.push(nutrient_row("Totals", grams, totals));
    lines
}

impl TextReport for RecipeAnalysis {
    fn render_text(&self) -> String {
        let report = &self.report;
        let mut lines = vec![
            separator(),
            format!("{} (recipe {})", self.title, self.recipe_id),
            separator(),
            format!(
                "Per 100g:        {}",
                report
                    .calories_per_100g
                    .map_or_else(|| "n/a".to_owned(), |kcal| format!("{} kcal", one_decimal(kcal)))
            ),
            format!("Total calories:  {} kcal", one_decimal(report.totals.calories)),
            format!(
                "Per serving:     {} kcal ({} servings)",
                one_decimal(report.per_serving.calories),
                self.servings
            ),
        ];
        if let Some(declared) = self.declared_calories_per_serving {
            lines.push(format!("Declared:        {} kcal per serving", one_decimal(declared)));
        }

        lines.push(String::new());
        if report.contributions.is_empty() {
            lines.push("No ingredient matched the catalog.".to_owned());
        } else {
            lines.extend(contribution_table(
                &report.contributions,
                &report.totals,
                report.total_grams,
            ));
        }

        if !report.unmatched_names.is_empty() {
            lines.push(String::new());
            lines.extend(
                report
                    .unmatched_names
                    .iter()
                    .map(|name| format!("WARNING: not found in catalog: {name}")),
            );
        }

        if !report.excluded.is_empty() {
            lines.push(String::new());
            lines.push("Excluded from the computation:".to_owned());
            lines.extend(
                report
                    .excluded
                    .iter()
                    .map(|item| format!("  - {} ({})", item.display_name, item.reason)),
            );
        }

        lines.push(separator());
        lines.join("\n")
    }
}

fn servings_label(servings: &Value) -> String {
    match servings {
        Value::Null => "-".to_owned(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

impl TextReport for [RecipeRecord] {
    fn render_text(&self) -> String {
        let mut lines = vec![
            format!("{:<8} {} {:>8} {:>12}", "ID", fixed_width("Title", 48), "Servings", "kcal/serv."),
            "-".repeat(RULE_WIDTH),
        ];
        lines.extend(self.iter().map(|recipe| {
            format!(
                "{:<8} {} {:>8} {:>12}",
                recipe.id,
                fixed_width(&recipe.title, 48),
                servings_label(&recipe.servings),
                recipe
                    .declared_calories_per_serving
                    .map_or_else(|| "-".to_owned(), one_decimal)
            )
        }));
        lines.push(format!("{} recipes", self.len()));
        lines.join("\n")
    }
}

impl TextReport for Vec<RecipeRecord> {
    fn render_text(&self) -> String {
        self.as_slice().render_text()
    }
}

fn optional_line(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        lines.push(format!("{label:<14}{value}"));
    }
}

impl TextReport for RecipeRecord {
    fn render_text(&self) -> String {
        let mut lines = vec![
            separator(),
            format!("{} (recipe {})", self.title, self.id),
            separator(),
            format!("{:<14}{}", "Servings:", servings_label(&self.servings)),
        ];
        if let Some(kcal) = self.declared_calories_per_serving {
            lines.push(format!("{:<14}{} kcal", "Declared:", one_decimal(kcal)));
        }
        if let Some(minutes) = self.total_time_mins {
            lines.push(format!("{:<14}{minutes} min", "Time:"));
        }
        optional_line(&mut lines, "Difficulty:", self.difficulty.as_deref());
        optional_line(&mut lines, "Cost:", self.cost.as_deref());
        optional_line(&mut lines, "Cooking:", self.cooking.as_deref());
        optional_line(&mut lines, "Diet:", self.diet_type.as_deref());
        optional_line(&mut lines, "URL:", self.url.as_deref());

        lines.push(String::new());
        lines.push("Ingredients:".to_owned());
        match self.ingredient_list() {
            Ok(ingredients) if ingredients.is_empty() => lines.push("  (none)".to_owned()),
            Ok(ingredients) => lines.extend(
                ingredients
                    .iter()
                    .map(|item| format!("  - {}: {}", item.name, item.raw_quantity)),
            ),
            Err(e) => lines.push(format!("  ({e})")),
        }

        if let Some(text) = self.presentation.as_deref().filter(|t| !t.trim().is_empty()) {
            lines.push(String::new());
            lines.push(text.trim().to_owned());
        }
        lines.push(separator());
        lines.join("\n")
    }
}

impl TextReport for MatchProbe {
    fn render_text(&self) -> String {
        let mut lines = vec![
            format!("Query:          {}", self.query),
            format!("Canonical name: {}", self.canonical_name),
        ];
        if let Some(rule) = self.rule {
            lines.push(format!("Rule:           {rule}"));
        }
        match (&self.result.matched_entry, &self.candidate_name) {
            (Some(entry), _) => {
                let kind = self
                    .result
                    .kind
                    .map_or_else(String::new, |kind| format!(", {kind}"));
                lines.push(format!(
                    "Match:          {entry} (score {:.3}{kind})",
                    self.result.score
                ));
            }
            (None, Some(candidate)) => lines.push(format!(
                "No match:       best candidate {candidate} scored {:.3}, below {:.2}",
                self.result.score, self.threshold
            )),
            (None, None) => lines.push("No match:       no candidate in catalog".to_owned()),
        }
        lines.join("\n")
    }
}
