//! Prefix-bucketed index for search-as-you-type over first names.

use super::normalize::normalize;
use crate::record::NameRecord;
use ahash::AHashMap;
use rapidfuzz::distance::jaro_winkler;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

/// Default number of search results.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Minimum Jaro-Winkler similarity for a name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of name suggestions.
const MAX_SUGGESTIONS: usize = 5;

/// A searchable index over one version of the corpus.
///
/// Every record is bucketed under its normalized first character and, when the
/// name is long enough, its first two characters. A query only scans the bucket
/// sharing its leading characters, so names containing the query mid-word but
/// starting elsewhere are not found. That trade-off suits prefix-style typing.
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    records: Arc<[NameRecord]>,
    /// Normalized first names, parallel to `records`
    normalized: Vec<String>,
    /// Map from 1- or 2-character prefix to record positions, in corpus order
    buckets: AHashMap<String, Vec<usize>>,
}

/// A name suggestion with its fuzzy-match score.
#[derive(Debug, Clone, PartialEq)]
pub struct NameSuggestion<'a> {
    pub record: &'a NameRecord,
    pub score: f64,
}

impl PrefixIndex {
    /// Build the index for a corpus.
    pub fn build(records: impl Into<Arc<[NameRecord]>>) -> Self {
        let start = Instant::now();
        let records = records.into();
        let normalized: Vec<String> = records.iter().map(|r| normalize(&r.firstname)).collect();

        let mut buckets: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (position, name) in normalized.iter().enumerate() {
            let mut chars = name.chars();
            let Some(first) = chars.next() else {
                continue;
            };
            buckets.entry(first.to_string()).or_default().push(position);

            if let Some(second) = chars.next() {
                buckets
                    .entry([first, second].iter().collect())
                    .or_default()
                    .push(position);
            }
        }

        tracing::debug!(
            "Built prefix index: {} names, {} buckets in {:?}",
            records.len(),
            buckets.len(),
            start.elapsed()
        );

        Self {
            records,
            normalized,
            buckets,
        }
    }

    /// Search for names containing `term`.
    ///
    /// Names starting with the term come first; within each group, more frequent
    /// names come first. A blank term yields no results.
    pub fn search(&self, term: &str, max_results: usize) -> Vec<&NameRecord> {
        let term = normalize(term.trim());
        let Some(bucket) = self.bucket_for(&term) else {
            return vec![];
        };

        let mut matches: Vec<(usize, bool)> = bucket
            .iter()
            .filter_map(|&position| {
                let name = &self.normalized[position];
                name.contains(&term)
                    .then(|| (position, name.starts_with(&term)))
            })
            .collect();

        matches.sort_by(|&(a, a_prefix), &(b, b_prefix)| match (a_prefix, b_prefix) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => self.records[b].count.cmp(&self.records[a].count),
        });

        matches
            .into_iter()
            .take(max_results)
            .map(|(position, _)| &self.records[position])
            .collect()
    }

    /// Candidate bucket for a normalized, non-empty term.
    fn bucket_for(&self, term: &str) -> Option<&Vec<usize>> {
        let mut chars = term.chars();
        let first = chars.next()?;
        let key: String = match chars.next() {
            Some(second) => [first, second].iter().collect(),
            None => first.to_string(),
        };
        self.buckets.get(&key)
    }

    /// Exact lookup, ignoring case and accents.
    pub fn find_exact(&self, name: &str) -> Option<&NameRecord> {
        let wanted = normalize(name.trim());
        self.normalized
            .iter()
            .position(|candidate| *candidate == wanted)
            .map(|position| &self.records[position])
    }

    /// Names that look like `name`, for "did you mean" hints.
    ///
    /// Returns at most 5 suggestions scoring above 0.8, best first.
    pub fn suggest(&self, name: &str) -> Vec<NameSuggestion<'_>> {
        let wanted = normalize(name.trim());
        if wanted.is_empty() {
            return vec![];
        }

        let mut suggestions: Vec<_> = self
            .normalized
            .iter()
            .zip(self.records.iter())
            .filter_map(|(candidate, record)| {
                let score = jaro_winkler::similarity(wanted.chars(), candidate.chars());
                (score > SUGGESTION_THRESHOLD).then_some(NameSuggestion { record, score })
            })
            .collect();

        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    pub fn records(&self) -> &Arc<[NameRecord]> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
