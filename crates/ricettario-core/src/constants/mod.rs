// ABOUTME: Application constants for ingredient normalization and catalog matching
// ABOUTME: Canonical egg names, placeholder quantity markers, and default matching thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by the normalizer, matcher and presentation layers.

/// Canonical names produced by the egg substance rules
pub mod eggs {
    /// Whole egg (shell removed), raw
    pub const WHOLE_RAW_HEN_EGG: &str = "whole raw hen egg";

    /// Yolk only, raw
    pub const RAW_HEN_EGG_YOLK: &str = "raw hen egg yolk";

    /// White only, raw
    pub const RAW_HEN_EGG_WHITE: &str = "raw hen egg white";

    /// Edible weight of one medium egg in grams
    pub const GRAMS_PER_MEDIUM_EGG: f64 = 50.0;
}

/// Quantity markers meaning "not quantifiable"
pub mod quantity {
    /// Placeholder strings (compared after lower-casing and trimming)
    ///
    /// `q.b.` is the Italian "quanto basta", the most common marker in the
    /// recipe collection.
    pub const PLACEHOLDER_MARKERS: &[&str] = &[
        "",
        "q.b.",
        "q.b",
        "qb",
        "q. b.",
        "quanto basta",
        "a piacere",
        "q.s.",
        "to taste",
        "as needed",
        "as required",
        "pinch",
        "a pinch",
    ];

    /// Reference mass for nutrient values in the catalog
    pub const REFERENCE_GRAMS: f64 = 100.0;
}

/// Default approximate-matching parameters
pub mod matching {
    /// Minimum score for a catalog entry to count as a match
    pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.6;

    /// Minimum token similarity for two words to count as the same word
    pub const DEFAULT_TOKEN_MATCH_FLOOR: f64 = 0.75;

    /// Ingredient count from which normalization and matching run on the rayon pool
    pub const DEFAULT_PARALLEL_MIN_INGREDIENTS: usize = 16;
}

/// Environment variable names
pub mod env_vars {
    /// Acceptance threshold override
    pub const MATCH_THRESHOLD: &str = "RICETTARIO_MATCH_THRESHOLD";
    /// Token match floor override
    pub const TOKEN_MATCH_FLOOR: &str = "RICETTARIO_TOKEN_MATCH_FLOOR";
    /// Parallelism cutoff override
    pub const PARALLEL_MIN_INGREDIENTS: &str = "RICETTARIO_PARALLEL_MIN_INGREDIENTS";
    /// Path of the exported reference catalog
    pub const CATALOG_PATH: &str = "RICETTARIO_CATALOG_PATH";
    /// Path of the exported recipe collection
    pub const RECIPES_PATH: &str = "RICETTARIO_RECIPES_PATH";
}

/// Default locations of the exported document collections
pub mod paths {
    /// Reference catalog export (`alimenti` collection)
    pub const DEFAULT_CATALOG_PATH: &str = "data/alimenti.json";
    /// Recipe export (`ricette` collection)
    pub const DEFAULT_RECIPES_PATH: &str = "data/ricette.json";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Main service name
    pub const RICETTARIO: &str = "ricettario";
}
