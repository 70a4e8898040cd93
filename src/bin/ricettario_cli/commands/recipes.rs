// ABOUTME: Recipe browsing commands for the ricettario CLI
// ABOUTME: Lists the recipe collection and shows a single recipe with its ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ricettario::errors::AppResult;
use ricettario::service::NutritionService;
use tracing::info;

use super::print_report;

/// List every recipe
pub async fn list(service: &NutritionService, format: &str) -> AppResult<()> {
    let recipes = service.list_recipes().await?;
    info!(count = recipes.len(), "Listing recipes");
    print_report(&recipes, format)
}

/// Show one recipe
pub async fn show(service: &NutritionService, id: &str, format: &str) -> AppResult<()> {
    let recipe = service.get_recipe(id).await?;
    print_report(&recipe, format)
}
