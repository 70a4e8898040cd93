// ABOUTME: Engine configuration loaded from defaults and environment overrides
// ABOUTME: Process-wide EngineConfig singleton with validation of matching and parallelism settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine configuration
//!
//! Environment-only: there are no configuration files. Every value has a
//! default; `RICETTARIO_*` variables override them and the result is validated
//! before use.

/// Configuration error types
pub mod error;
/// Matching thresholds
pub mod matching;

pub use error::ConfigError;
pub use matching::MatchingConfig;

use ricettario_core::constants::{env_vars, matching::DEFAULT_PARALLEL_MIN_INGREDIENTS};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Nutrition engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Reference matcher thresholds
    pub matching: MatchingConfig,
    /// Ingredient count from which normalization and matching use the rayon pool
    pub parallel_min_ingredients: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            matching: MatchingConfig::default(),
            parallel_min_ingredients: DEFAULT_PARALLEL_MIN_INGREDIENTS,
        }
    }
}

impl EngineConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; falls back to defaults with a warning
    /// when the environment holds invalid values.
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a threshold lies outside (0.0, 1.0] or the
    /// parallelism cutoff is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.matching.acceptance_threshold;
        if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "acceptance_threshold must be in (0.0, 1.0]",
            ));
        }

        let floor = self.matching.token_match_floor;
        if !floor.is_finite() || floor <= 0.0 || floor > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "token_match_floor must be in (0.0, 1.0]",
            ));
        }

        if self.parallel_min_ingredients == 0 {
            return Err(ConfigError::InvalidRange(
                "parallel_min_ingredients must be at least 1",
            ));
        }

        Ok(())
    }

    /// Parse and apply a single environment variable, if set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(ConfigError::from(e)),
        }
    }

    /// Apply environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable cannot be parsed
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_vars::MATCH_THRESHOLD,
            &mut self.matching.acceptance_threshold,
        )?;
        Self::apply_env_var(
            env_vars::TOKEN_MATCH_FLOOR,
            &mut self.matching.token_match_floor,
        )?;
        Self::apply_env_var(
            env_vars::PARALLEL_MIN_INGREDIENTS,
            &mut self.parallel_min_ingredients,
        )?;
        Ok(self)
    }
}
