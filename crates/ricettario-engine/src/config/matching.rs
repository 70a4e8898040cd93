// ABOUTME: Approximate matching configuration for the reference matcher
// ABOUTME: Acceptance threshold and per-token similarity floor with their defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ricettario_core::constants::matching::{
    DEFAULT_ACCEPTANCE_THRESHOLD, DEFAULT_TOKEN_MATCH_FLOOR,
};
use serde::{Deserialize, Serialize};

/// Reference matcher configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum combined score (0.0-1.0] for a catalog entry to be accepted
    pub acceptance_threshold: f64,
    /// Minimum similarity (0.0-1.0] for two words to count as the same word
    pub token_match_floor: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
            token_match_floor: DEFAULT_TOKEN_MATCH_FLOOR,
        }
    }
}
