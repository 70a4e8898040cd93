// ABOUTME: Main library entry point for the Ricettario recipe nutrition tools
// ABOUTME: Wires document sources, the nutrition engine, formatters and logging for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Ricettario
//!
//! Computes calories and nutrients for recipes stored as free-text ingredient
//! maps, by matching every ingredient against a nutrition reference table.
//!
//! ## Architecture
//!
//! - **`ricettario-core`**: models, constants, unified error handling
//! - **`ricettario-engine`**: normalization, matching, aggregation (pure, sync)
//! - **Sources**: async access to the exported catalog and recipe collections
//! - **Service**: fetches documents and runs the engine on the blocking pool
//! - **Formatters**: text and JSON rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ricettario::config::AppConfig;
//! use ricettario::errors::AppResult;
//! use ricettario::service::NutritionService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let service = NutritionService::from_config(&config);
//!
//!     let analysis = service.analyze("12").await?;
//!     println!("{} kcal per serving", analysis.report.per_serving.calories);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Text and JSON output
pub mod formatters;

/// Production logging and structured output
pub mod logging;

/// Recipe analysis service
pub mod service;

/// Catalog and recipe document sources
pub mod sources;

pub use ricettario_core::{constants, errors, models};
pub use ricettario_engine as engine;
