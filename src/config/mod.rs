// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Document collection paths, engine thresholds, and logging settings for the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Ricettario
//!
//! Environment-only configuration:
//!
//! - `RICETTARIO_CATALOG_PATH`, `RICETTARIO_RECIPES_PATH`: exported collections
//! - `RICETTARIO_MATCH_THRESHOLD`, `RICETTARIO_TOKEN_MATCH_FLOOR`,
//!   `RICETTARIO_PARALLEL_MIN_INGREDIENTS`: engine settings
//! - `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION`, `LOG_INCLUDE_THREAD`,
//!   `ENVIRONMENT`: logging
//!
//! Command-line flags override the paths.

use ricettario_core::constants::{env_vars, paths};
use ricettario_core::errors::{AppError, AppResult};
use ricettario_engine::EngineConfig;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::logging::LoggingConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Reference catalog export
    pub catalog_path: PathBuf,
    /// Recipe collection export
    pub recipes_path: PathBuf,
    /// Nutrition engine settings
    pub engine: EngineConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(paths::DEFAULT_CATALOG_PATH),
            recipes_path: PathBuf::from(paths::DEFAULT_RECIPES_PATH),
            engine: EngineConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when an engine variable is set to an
    /// unparseable or out-of-range value
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let engine = EngineConfig::load().map_err(|e| {
            AppError::config(format!("Invalid engine configuration: {e}")).with_source(e)
        })?;

        let config = Self {
            catalog_path: path_from_env(env_vars::CATALOG_PATH, paths::DEFAULT_CATALOG_PATH),
            recipes_path: path_from_env(env_vars::RECIPES_PATH, paths::DEFAULT_RECIPES_PATH),
            engine,
            logging: LoggingConfig::from_env(),
        };

        debug!(
            catalog = %config.catalog_path.display(),
            recipes = %config.recipes_path.display(),
            threshold = config.engine.matching.acceptance_threshold,
            "Configuration resolved"
        );

        Ok(config)
    }

    /// Override the catalog path
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl AsRef<Path>) -> Self {
        self.catalog_path = path.as_ref().to_path_buf();
        self
    }

    /// Override the recipes path
    #[must_use]
    pub fn with_recipes_path(mut self, path: impl AsRef<Path>) -> Self {
        self.recipes_path = path.as_ref().to_path_buf();
        self
    }
}

fn path_from_env(var: &str, default: &str) -> PathBuf {
    env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}
