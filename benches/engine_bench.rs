// ABOUTME: Criterion benchmarks for the nutrition engine pipeline
// ABOUTME: Measures matching and full recipe analysis across catalog and recipe sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition engine.
//!
//! Covers single-ingredient matching, sequential versus rayon-parallel
//! analysis, and the async service path over in-memory sources.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

mod common;

use common::fixtures::{generate_catalog, generate_ingredients, generate_recipe, CatalogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ricettario::engine::{match_ingredient, EngineConfig, NutritionEngine};
use ricettario::service::NutritionService;
use ricettario::sources::{InMemoryCatalog, InMemoryRecipes};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Benchmark matching one ingredient name against catalogs of different sizes
fn bench_match_ingredient(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_ingredient");
    for size in [CatalogSize::Small, CatalogSize::Medium] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size.count() as u64));

        group.bench_with_input(BenchmarkId::new("exact", size.name()), &catalog, |b, catalog| {
            b.iter(|| match_ingredient(black_box("tomato"), catalog));
        });
        group.bench_with_input(BenchmarkId::new("fuzzy", size.name()), &catalog, |b, catalog| {
            b.iter(|| match_ingredient(black_box("spaghetti pasta"), catalog));
        });
    }

    group.finish();
}

/// Benchmark full analysis, sequential versus the rayon pool
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let catalog = generate_catalog(CatalogSize::Medium);

    let sequential = NutritionEngine::new(&EngineConfig {
        parallel_min_ingredients: usize::MAX,
        ..EngineConfig::default()
    });
    let parallel = NutritionEngine::new(&EngineConfig {
        parallel_min_ingredients: 1,
        ..EngineConfig::default()
    });

    for count in [8_usize, 32, 128] {
        let ingredients = generate_ingredients(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &ingredients,
            |b, ingredients| {
                b.iter(|| sequential.analyze(black_box(ingredients), 4, &catalog).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &ingredients,
            |b, ingredients| {
                b.iter(|| parallel.analyze(black_box(ingredients), 4, &catalog).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark the service path: source fetch, blocking-pool hop, report assembly
fn bench_service_analyze(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("service_analyze");

    let service = NutritionService::new(
        Arc::new(InMemoryCatalog::new(generate_catalog(CatalogSize::Medium))),
        Arc::new(InMemoryRecipes::new(vec![generate_recipe(16)])),
        NutritionEngine::new(&EngineConfig::default()),
    );

    group.bench_function("memory_16_ingredients", |b| {
        b.iter(|| rt.block_on(async { service.analyze(black_box("bench")).await.unwrap() }));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_match_ingredient,
    bench_analyze,
    bench_service_analyze
);
criterion_main!(benches);
