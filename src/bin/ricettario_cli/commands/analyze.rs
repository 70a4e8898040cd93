// ABOUTME: Nutrition analysis command for the ricettario CLI
// ABOUTME: Runs the engine for one recipe and prints summary boxes and the nutrient table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ricettario::errors::AppResult;
use ricettario::service::NutritionService;
use tracing::warn;

use super::print_report;

/// Analyze one recipe
pub async fn analyze(service: &NutritionService, id: &str, format: &str) -> AppResult<()> {
    let analysis = service.analyze(id).await?;

    if !analysis.report.unmatched_names.is_empty() {
        warn!(
            recipe_id = %analysis.recipe_id,
            unmatched = ?analysis.report.unmatched_names,
            "Some ingredients were not found in the catalog"
        );
    }

    print_report(&analysis, format)
}
