// ABOUTME: Domain error types for recipe ingredient data and catalog documents
// ABOUTME: Structured failures that convert into the unified AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Error Types
//!
//! Failures that make a whole nutrition computation impossible. An ingredient
//! that finds no catalog entry is *not* an error and never appears here.

use thiserror::Error;

use super::ErrorCode;

/// Errors raised while interpreting a recipe or a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    /// The ingredient map could not be decoded
    #[error("Malformed ingredient data: {reason}")]
    MalformedIngredients {
        /// What was wrong with the data
        reason: String,
    },

    /// Serving count is missing, non-numeric, fractional or not positive
    #[error("Invalid servings: {value} (must be a positive integer)")]
    InvalidServings {
        /// The offending value as received
        value: String,
    },

    /// A catalog document could not be turned into a reference entry
    #[error("Malformed catalog entry at index {index}: {reason}")]
    MalformedCatalogEntry {
        /// Position of the document in the catalog collection
        index: usize,
        /// What was wrong with the document
        reason: String,
    },
}

impl NutritionError {
    /// Create a "malformed ingredients" error
    #[must_use]
    pub fn malformed_ingredients(reason: impl Into<String>) -> Self {
        Self::MalformedIngredients {
            reason: reason.into(),
        }
    }

    /// Create an "invalid servings" error
    #[must_use]
    pub fn invalid_servings(value: impl Into<String>) -> Self {
        Self::InvalidServings {
            value: value.into(),
        }
    }

    /// Create a "malformed catalog entry" error
    #[must_use]
    pub fn malformed_catalog_entry(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedCatalogEntry {
            index,
            reason: reason.into(),
        }
    }

    /// Error code used when converted into an `AppError`
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedIngredients { .. } | Self::MalformedCatalogEntry { .. } => {
                ErrorCode::InvalidFormat
            }
            Self::InvalidServings { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}
