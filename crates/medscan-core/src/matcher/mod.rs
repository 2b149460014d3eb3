//! Medicine matcher: maps recognized text to ranked catalog candidates.
//!
//! Field weights:
//! - Name: proportional, weight 40
//! - Generic name: proportional, weight 30
//! - Composition: proportional, weight 20
//! - Kind: flat 10 if any token matches

mod fuzzy;

pub use fuzzy::*;

use tracing::debug;

use crate::models::{FieldScores, MatchResult, MatchStrength, MedicineRecord};

/// Weight for the name field (proportional).
const NAME_WEIGHT: f64 = 40.0;

/// Weight for the generic name field (proportional).
const GENERIC_WEIGHT: f64 = 30.0;

/// Weight for the composition field (proportional).
const COMPOSITION_WEIGHT: f64 = 20.0;

/// Flat contribution when any kind token matches.
const KIND_WEIGHT: f64 = 10.0;

/// A record becomes a candidate only when its raw score exceeds this
/// (strictly; exactly 20 is excluded).
const ACCEPT_THRESHOLD: f64 = 20.0;

/// Matches recognized text against a medicine catalog.
///
/// Stateless and side-effect free; the catalog is read-only during a pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchEngine;

impl MatchEngine {
    /// Create a new match engine.
    pub fn new() -> Self {
        Self
    }

    /// Find ranked candidate matches for the recognized text.
    ///
    /// The text is whitespace-tokenized (empty tokens discarded). Results
    /// are sorted by score descending; ties keep catalog order (stable
    /// sort). Empty text, empty catalog, or no record above the acceptance
    /// threshold all yield an empty vec, which callers treat as a distinct
    /// no-match state rather than an error.
    pub fn find_matches<'a>(
        &self,
        text: &str,
        catalog: &'a [MedicineRecord],
    ) -> Vec<MatchResult<'a>> {
        let query: Vec<String> = text
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for record in catalog {
            let mut keywords: Vec<String> = Vec::new();

            let breakdown = FieldScores {
                name: proportional_score(&record.name, &query, NAME_WEIGHT, &mut keywords),
                generic_name: proportional_score(
                    &record.generic_name,
                    &query,
                    GENERIC_WEIGHT,
                    &mut keywords,
                ),
                composition: proportional_score(
                    &record.composition,
                    &query,
                    COMPOSITION_WEIGHT,
                    &mut keywords,
                ),
                kind: flat_score(&record.kind, &query, KIND_WEIGHT, &mut keywords),
            };

            let raw = breakdown.raw_total();
            if raw > ACCEPT_THRESHOLD {
                // Raw score is rounded to nearest, then capped at 100; it is
                // never negative since all weights are non-negative.
                let score = raw.round().min(100.0) as u8;
                results.push(MatchResult {
                    record,
                    score,
                    matched_keywords: dedup_preserve_order(keywords),
                    breakdown,
                    strength: MatchStrength::from_score(score),
                });
            }
        }

        results.sort_by(|a, b| b.score.cmp(&a.score));

        debug!(
            candidates = results.len(),
            query_tokens = query.len(),
            "matched recognized text against catalog"
        );

        results
    }
}

/// Proportional field score: `weight * matched_tokens / total_tokens`.
///
/// Matched field tokens are appended to `keywords`. An empty field has no
/// tokens and contributes zero.
fn proportional_score(
    field: &str,
    query: &[String],
    weight: f64,
    keywords: &mut Vec<String>,
) -> f64 {
    let tokens: Vec<String> = field.split_whitespace().map(|t| t.to_lowercase()).collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let total = tokens.len();
    let matched: Vec<String> = tokens
        .into_iter()
        .filter(|token| query.iter().any(|q| fuzzy_match(q, token)))
        .collect();

    if matched.is_empty() {
        return 0.0;
    }

    let score = (matched.len() as f64 / total as f64) * weight;
    keywords.extend(matched);
    score
}

/// Flat field score: the full `weight` if any field token matches.
fn flat_score(field: &str, query: &[String], weight: f64, keywords: &mut Vec<String>) -> f64 {
    let matched: Vec<String> = field
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .filter(|token| query.iter().any(|q| fuzzy_match(q, token)))
        .collect();

    if matched.is_empty() {
        return 0.0;
    }

    keywords.extend(matched);
    weight
}

/// Deduplicate keywords, keeping first-seen order.
fn dedup_preserve_order(keywords: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    keywords
        .into_iter()
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
