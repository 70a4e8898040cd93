// ABOUTME: Catalog match probe command for the ricettario CLI
// ABOUTME: Shows canonical name, substance rule and best catalog candidate for one name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ricettario::errors::{AppError, AppResult};
use ricettario::service::NutritionService;

use super::print_report;

/// Probe one ingredient name
pub async fn probe(service: &NutritionService, name: &str, format: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("Ingredient name must not be empty"));
    }
    let probe = service.probe_match(name).await?;
    print_report(&probe, format)
}
