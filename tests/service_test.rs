// ABOUTME: Integration tests for the nutrition service over file and in-memory sources
// ABOUTME: Tests end-to-end recipe analysis, error isolation between calls and match probing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use ricettario::config::AppConfig;
use ricettario::engine::{EngineConfig, MatchKind, NutritionEngine, SubstanceRule};
use ricettario::errors::ErrorCode;
use ricettario::service::NutritionService;
use ricettario::sources::{InMemoryCatalog, InMemoryRecipes};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn file_service(dir: &TempDir) -> NutritionService {
    let catalog_path = dir.path().join("alimenti.json");
    let recipes_path = dir.path().join("ricette.json");
    fs::write(&catalog_path, common::catalog_export().to_string()).unwrap();
    fs::write(&recipes_path, common::recipes_export().to_string()).unwrap();

    let config = AppConfig::default()
        .with_catalog_path(catalog_path)
        .with_recipes_path(recipes_path);
    NutritionService::from_config(&config)
}

fn memory_service() -> NutritionService {
    NutritionService::new(
        Arc::new(InMemoryCatalog::new(common::sample_catalog())),
        Arc::new(InMemoryRecipes::new(vec![
            common::pancake_recipe(),
            common::broken_servings_recipe(),
        ])),
        NutritionEngine::new(&EngineConfig::default()),
    )
}

// ============================================================================
// Analysis From Exported Files
// ============================================================================

#[tokio::test]
async fn test_analyze_recipe_from_files() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let service = file_service(&dir);

    let analysis = service.analyze("12").await.unwrap();
    assert_eq!(analysis.recipe_id, "12");
    assert_eq!(analysis.title, "Pollo al limone");
    assert_eq!(analysis.servings, 2);
    assert_eq!(analysis.declared_calories_per_serving, Some(280.0));

    let report = &analysis.report;
    assert!((report.totals.calories - 495.0).abs() < 1e-9);
    assert!((report.per_serving.calories - 247.5).abs() < 1e-9);
    assert!((report.totals.proteins - 93.0).abs() < 1e-9);
    assert_eq!(report.excluded_names(), vec!["Sale"]);
    assert!(report.unmatched_names.is_empty());
    assert_eq!(report.trace[0].kind, Some(MatchKind::ExactSynonym));
}

#[tokio::test]
async fn test_counted_eggs_from_files() {
    let dir = TempDir::new().unwrap();
    let service = file_service(&dir);

    let analysis = service.analyze("13").await.unwrap();
    let eggs = analysis
        .report
        .contributions
        .iter()
        .find(|c| c.display_name == "Uova medie (4)")
        .unwrap();
    assert_eq!(eggs.entry_name, "whole raw hen egg");
    assert!((eggs.quantity_grams - 200.0).abs() < 1e-9);
    assert!((eggs.nutrients.calories - 286.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_list_and_get_recipes() {
    let dir = TempDir::new().unwrap();
    let service = file_service(&dir);

    assert_eq!(service.list_recipes().await.unwrap().len(), 2);
    assert_eq!(service.get_recipe("13").await.unwrap().title, "Frittata");
}

#[tokio::test]
async fn test_unknown_recipe_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = file_service(&dir).analyze("77").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_missing_catalog_fails_analysis() {
    let dir = TempDir::new().unwrap();
    let recipes_path = dir.path().join("ricette.json");
    fs::write(&recipes_path, common::recipes_export().to_string()).unwrap();

    let config = AppConfig::default()
        .with_catalog_path(dir.path().join("absent.json"))
        .with_recipes_path(recipes_path);
    let service = NutritionService::from_config(&config);

    assert!(service.analyze("12").await.is_err());
}

// ============================================================================
// Error Isolation
// ============================================================================

#[tokio::test]
async fn test_invalid_servings_does_not_affect_other_calls() {
    let service = memory_service();

    let err = service.analyze("99").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    assert_eq!(err.context.resource_id.as_deref(), Some("99"));
    assert!(err.context.request_id.is_some());

    let analysis = service.analyze("12").await.unwrap();
    assert_eq!(analysis.report.unmatched_names, vec!["Lievito magico"]);
    assert_eq!(analysis.report.matched_count(), 4);
}

#[tokio::test]
async fn test_concurrent_analyses_agree() {
    let service = memory_service();

    let (first, second) = tokio::join!(service.analyze("12"), service.analyze("12"));
    let (first, second) = (first.unwrap(), second.unwrap());
    assert_ne!(first.request_id, second.request_id);
    assert_eq!(first.report, second.report);
}

// ============================================================================
// Match Probing
// ============================================================================

#[tokio::test]
async fn test_probe_applies_substance_rules() {
    let probe = memory_service().probe_match("Uova fresche").await.unwrap();

    assert_eq!(probe.query, "Uova fresche");
    assert_eq!(probe.canonical_name, "whole raw hen egg");
    assert_eq!(probe.rule, Some(SubstanceRule::FreshEgg));
    assert_eq!(probe.result.matched_entry.as_deref(), Some("whole raw hen egg"));
    assert_eq!(probe.result.kind, Some(MatchKind::ExactName));
    assert!((probe.threshold - 0.6).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_probe_reports_rejected_candidate() {
    let probe = memory_service().probe_match("xqzwv").await.unwrap();

    assert!(!probe.result.is_matched());
    assert!(probe.rule.is_none());
    assert!(probe.result.score < probe.threshold);
}
