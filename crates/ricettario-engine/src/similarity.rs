// ABOUTME: Approximate string similarity for ingredient names against catalog names
// ABOUTME: SimilarityScorer trait with a Levenshtein-based token and whole-string default scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Similarity scoring
//!
//! Scores are in `[0.0, 1.0]`, where `1.0` means identical after
//! normalization. The matcher only depends on [`SimilarityScorer`], so the
//! default scorer can be swapped without touching matching or tie-breaking.

use ricettario_core::constants::matching::DEFAULT_TOKEN_MATCH_FLOOR;
use std::mem;

use crate::config::MatchingConfig;

/// Similarity between an ingredient name and a catalog name or synonym
pub trait SimilarityScorer: Send + Sync {
    /// Score `query` against `candidate`, in `[0.0, 1.0]`
    fn score(&self, query: &str, candidate: &str) -> f64;
}

/// Lower-case and collapse internal whitespace
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Levenshtein edit distance, counted in characters
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// `1 - distance / longer length`; two empty strings are identical
#[must_use]
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

fn tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Default scorer: the better of whole-string and token-overlap similarity
///
/// Token overlap credits each word with its normalized Levenshtein similarity
/// to the closest word on the other side, once that similarity reaches
/// `token_match_floor`. "spaghetti" still finds "pasta, spaghetti, dry" and
/// "pomodori" finds "pomodoro", while a one-letter-off word ("malt" for
/// "salt") scores below an entry that contains the word itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenLevenshteinScorer {
    token_match_floor: f64,
}

impl Default for TokenLevenshteinScorer {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_MATCH_FLOOR)
    }
}

impl TokenLevenshteinScorer {
    /// Create a scorer with an explicit per-token floor
    #[must_use]
    pub const fn new(token_match_floor: f64) -> Self {
        Self { token_match_floor }
    }

    /// Create a scorer from matching configuration
    #[must_use]
    pub const fn from_config(config: &MatchingConfig) -> Self {
        Self::new(config.token_match_floor)
    }

    /// Per-token similarity floor
    #[must_use]
    pub const fn token_match_floor(&self) -> f64 {
        self.token_match_floor
    }

    /// Summed similarity of each token in `from` to its closest token in `to`
    ///
    /// A token whose closest counterpart stays below the floor adds nothing,
    /// so only identical words earn full credit.
    fn matched_weight(&self, from: &[&str], to: &[&str]) -> f64 {
        from.iter()
            .map(|token| {
                to.iter()
                    .map(|other| normalized_similarity(token, other))
                    .fold(0.0, f64::max)
            })
            .filter(|best| *best >= self.token_match_floor)
            .sum()
    }

    /// Mean of query containment and Dice overlap, weighted by token similarity
    fn token_score(&self, query: &str, candidate: &str) -> f64 {
        let query_tokens = tokens(query);
        let candidate_tokens = tokens(candidate);
        if query_tokens.is_empty() || candidate_tokens.is_empty() {
            return 0.0;
        }

        let matched_query = self.matched_weight(&query_tokens, &candidate_tokens);
        let matched_candidate = self.matched_weight(&candidate_tokens, &query_tokens);

        let containment = matched_query / query_tokens.len() as f64;
        let dice = (matched_query + matched_candidate)
            / (query_tokens.len() + candidate_tokens.len()) as f64;

        (containment + dice) / 2.0
    }
}

impl SimilarityScorer for TokenLevenshteinScorer {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        let query = normalize_text(query);
        let candidate = normalize_text(candidate);
        if query.is_empty() || candidate.is_empty() {
            return 0.0;
        }

        let whole = normalized_similarity(&query, &candidate);
        let token = self.token_score(&query, &candidate);
        whole.max(token).clamp(0.0, 1.0)
    }
}
