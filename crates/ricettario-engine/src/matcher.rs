// ABOUTME: Reference matcher resolving canonical ingredient names to catalog entries
// ABOUTME: Exact name/synonym shortcut, then best fuzzy score over names and synonyms with a threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ricettario_core::models::ReferenceEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::MatchingConfig;
use crate::similarity::{normalize_text, SimilarityScorer, TokenLevenshteinScorer};

/// How a catalog entry was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Entry name equals the ingredient name
    ExactName,
    /// One of the entry's synonyms equals the ingredient name
    ExactSynonym,
    /// Best approximate score came from the entry name
    FuzzyName,
    /// Best approximate score came from a synonym
    FuzzySynonym,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ExactName => "exact name",
            Self::ExactSynonym => "exact synonym",
            Self::FuzzyName => "fuzzy name",
            Self::FuzzySynonym => "fuzzy synonym",
        };
        f.write_str(label)
    }
}

/// Best catalog candidate for an ingredient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogMatch<'a> {
    /// Selected entry
    pub entry: &'a ReferenceEntry,
    /// Position of the entry in the catalog
    pub index: usize,
    /// Similarity score in `[0.0, 1.0]`
    pub score: f64,
    /// How the entry was selected
    pub kind: MatchKind,
    /// The entry name or synonym that produced the score
    pub matched_on: &'a str,
}

/// Per-ingredient match trace entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Ingredient name as written in the recipe
    pub ingredient: String,
    /// Canonical name used for matching
    pub canonical_name: String,
    /// Catalog entry name, `None` when no entry reached the threshold
    pub matched_entry: Option<String>,
    /// Score of the best candidate, accepted or not
    pub score: f64,
    /// How the entry was selected, `None` when unmatched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MatchKind>,
}

impl MatchResult {
    /// Build a trace entry from the best candidate and the acceptance outcome
    #[must_use]
    pub fn new(
        ingredient: impl Into<String>,
        canonical_name: impl Into<String>,
        best: Option<&CatalogMatch<'_>>,
        accepted: bool,
    ) -> Self {
        Self {
            ingredient: ingredient.into(),
            canonical_name: canonical_name.into(),
            matched_entry: best
                .filter(|_| accepted)
                .map(|candidate| candidate.entry.name.clone()),
            score: best.map_or(0.0, |candidate| candidate.score),
            kind: best.filter(|_| accepted).map(|candidate| candidate.kind),
        }
    }

    /// Whether a catalog entry was accepted
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.matched_entry.is_some()
    }
}

/// Resolves canonical ingredient names against a reference catalog
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone)]
pub struct ReferenceMatcher<S = TokenLevenshteinScorer> {
    scorer: S,
    acceptance_threshold: f64,
}

impl Default for ReferenceMatcher {
    fn default() -> Self {
        Self::new(&MatchingConfig::default())
    }
}

impl ReferenceMatcher {
    /// Create a matcher with the default scorer
    #[must_use]
    pub const fn new(config: &MatchingConfig) -> Self {
        Self {
            scorer: TokenLevenshteinScorer::from_config(config),
            acceptance_threshold: config.acceptance_threshold,
        }
    }
}

impl<S: SimilarityScorer> ReferenceMatcher<S> {
    /// Create a matcher with a custom scorer
    #[must_use]
    pub const fn with_scorer(scorer: S, acceptance_threshold: f64) -> Self {
        Self {
            scorer,
            acceptance_threshold,
        }
    }

    /// Minimum score for a candidate to be accepted
    #[must_use]
    pub const fn acceptance_threshold(&self) -> f64 {
        self.acceptance_threshold
    }

    /// Best-matching entry at or above the acceptance threshold
    #[must_use]
    pub fn find_match<'a>(
        &self,
        canonical_name: &str,
        catalog: &'a [ReferenceEntry],
    ) -> Option<CatalogMatch<'a>> {
        self.best_candidate(canonical_name, catalog)
            .filter(|candidate| self.accepts(candidate))
    }

    /// Whether a candidate clears the acceptance threshold
    #[must_use]
    pub fn accepts(&self, candidate: &CatalogMatch<'_>) -> bool {
        candidate.score >= self.acceptance_threshold
    }

    /// Best candidate regardless of the acceptance threshold
    ///
    /// An entry whose name equals the query (case-insensitive,
    /// whitespace-collapsed) wins immediately, then an exact synonym.
    /// Otherwise every entry is scored by the maximum over its name and
    /// synonyms; on equal scores the earliest entry in catalog order wins.
    #[must_use]
    pub fn best_candidate<'a>(
        &self,
        canonical_name: &str,
        catalog: &'a [ReferenceEntry],
    ) -> Option<CatalogMatch<'a>> {
        let query = normalize_text(canonical_name);
        if query.is_empty() {
            return None;
        }

        exact_match(&query, catalog).or_else(|| self.fuzzy_match(&query, catalog))
    }

    fn fuzzy_match<'a>(&self, query: &str, catalog: &'a [ReferenceEntry]) -> Option<CatalogMatch<'a>> {
        let mut best: Option<CatalogMatch<'a>> = None;

        for (index, entry) in catalog.iter().enumerate() {
            let mut entry_best = CatalogMatch {
                entry,
                index,
                score: self.scorer.score(query, &entry.name),
                kind: MatchKind::FuzzyName,
                matched_on: entry.name.as_str(),
            };
            for synonym in &entry.synonyms {
                let score = self.scorer.score(query, synonym);
                if score > entry_best.score {
                    entry_best.score = score;
                    entry_best.kind = MatchKind::FuzzySynonym;
                    entry_best.matched_on = synonym.as_str();
                }
            }

            // Strictly greater: the earliest entry keeps a tie
            let replace = match &best {
                Some(current) => entry_best.score > current.score,
                None => true,
            };
            if replace {
                best = Some(entry_best);
            }
        }

        best
    }
}

fn exact_match<'a>(query: &str, catalog: &'a [ReferenceEntry]) -> Option<CatalogMatch<'a>> {
    let by_name = catalog.iter().enumerate().find_map(|(index, entry)| {
        (normalize_text(&entry.name) == query).then_some(CatalogMatch {
            entry,
            index,
            score: 1.0,
            kind: MatchKind::ExactName,
            matched_on: entry.name.as_str(),
        })
    });

    by_name.or_else(|| {
        catalog.iter().enumerate().find_map(|(index, entry)| {
            entry
                .synonyms
                .iter()
                .find(|synonym| normalize_text(synonym) == query)
                .map(|synonym| CatalogMatch {
                    entry,
                    index,
                    score: 1.0,
                    kind: MatchKind::ExactSynonym,
                    matched_on: synonym.as_str(),
                })
        })
    })
}

/// Match one canonical name against a catalog with default settings
#[must_use]
pub fn match_ingredient<'a>(
    canonical_name: &str,
    catalog: &'a [ReferenceEntry],
) -> Option<&'a ReferenceEntry> {
    ReferenceMatcher::default()
        .find_match(canonical_name, catalog)
        .map(|candidate| candidate.entry)
}
