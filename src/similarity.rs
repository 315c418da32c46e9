//! Nearest-neighbor search over mention-rate profiles.
//!
//! Each record is a point in 5-dimensional space (one axis per mention rate).
//! Similarity is the Euclidean distance rescaled to a percentage, where the
//! largest possible distance between two rate vectors in `[0, 1]^5` is `sqrt(5)`.

use crate::record::NameRecord;
use serde::Serialize;

/// Default number of neighbors returned.
pub const DEFAULT_MAX_RESULTS: usize = 12;

/// Default minimum similarity percentage.
pub const DEFAULT_MIN_SIMILARITY: f64 = 70.0;

/// Options for [`find_similar`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityOptions {
    pub max_results: usize,
    /// Results below this percentage are discarded
    pub min_similarity_pct: f64,
    /// Skip candidates whose name equals the target's
    pub exclude_target: bool,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_similarity_pct: DEFAULT_MIN_SIMILARITY,
            exclude_target: true,
        }
    }
}

/// A neighbor of the target record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult<'a> {
    pub record: &'a NameRecord,
    pub distance: f64,
    /// Percentage in `[0, 100]`, rounded to two decimals
    pub similarity: f64,
}

/// Euclidean distance between two rate vectors.
pub fn euclidean_distance(a: &NameRecord, b: &NameRecord) -> f64 {
    a.rates()
        .iter()
        .zip(b.rates())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Convert a distance into a similarity percentage, rounded to two decimals.
pub fn distance_to_similarity(distance: f64) -> f64 {
    let max_distance = 5f64.sqrt();
    let similarity = (100.0 * (1.0 - distance / max_distance)).max(0.0);
    (similarity * 100.0).round() / 100.0
}

/// Similarity percentage between two records.
pub fn similarity(a: &NameRecord, b: &NameRecord) -> f64 {
    distance_to_similarity(euclidean_distance(a, b))
}

/// Find the records whose profile is closest to `target`.
///
/// Results are ordered by descending similarity; ties keep corpus order.
/// An empty corpus yields an empty result.
pub fn find_similar<'a>(
    target: &NameRecord,
    corpus: &'a [NameRecord],
    options: &SimilarityOptions,
) -> Vec<SimilarityResult<'a>> {
    let mut results: Vec<_> = corpus
        .iter()
        .filter(|candidate| !(options.exclude_target && candidate.firstname == target.firstname))
        .filter_map(|candidate| {
            let distance = euclidean_distance(target, candidate);
            let similarity = distance_to_similarity(distance);
            (similarity >= options.min_similarity_pct).then_some(SimilarityResult {
                record: candidate,
                distance,
                similarity,
            })
        })
        .collect();

    // Stable sort keeps corpus order among equal similarities
    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    results.truncate(options.max_results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::record;
    use assert2::check;
    use rstest::{fixture, rstest};

    #[fixture]
    fn scenario() -> Vec<NameRecord> {
        vec![
            record("a", 1000, [0.35, 0.05, 0.10, 0.20, 0.30]),
            record("b", 50, [1.0, 0.0, 0.0, 0.0, 0.0]),
            record("c", 200, [0.35, 0.05, 0.10, 0.19, 0.31]),
        ]
    }

    #[rstest]
    fn test_find_similar_orders_by_closeness(scenario: Vec<NameRecord>) {
        let options = SimilarityOptions {
            min_similarity_pct: 0.0,
            ..SimilarityOptions::default()
        };
        let results = find_similar(&scenario[0], &scenario, &options);
        let names: Vec<_> = results.iter().map(|r| r.record.firstname.as_str()).collect();
        check!(names == ["c", "b"]);
        check!(results[0].similarity >= 99.0);
        check!(results[0].similarity <= 100.0);
    }

    #[rstest]
    fn test_default_threshold_filters_distant_profiles(scenario: Vec<NameRecord>) {
        let results = find_similar(&scenario[0], &scenario, &SimilarityOptions::default());
        let names: Vec<_> = results.iter().map(|r| r.record.firstname.as_str()).collect();
        check!(names == ["c"]);
    }

    #[rstest]
    fn test_include_target(scenario: Vec<NameRecord>) {
        let options = SimilarityOptions {
            exclude_target: false,
            ..SimilarityOptions::default()
        };
        let results = find_similar(&scenario[0], &scenario, &options);
        check!(results[0].record.firstname == "a");
        check!(results[0].similarity == 100.0);
        check!(results[0].distance == 0.0);
    }

    #[rstest]
    fn test_max_results(scenario: Vec<NameRecord>) {
        let options = SimilarityOptions {
            max_results: 1,
            min_similarity_pct: 0.0,
            exclude_target: true,
        };
        check!(find_similar(&scenario[0], &scenario, &options).len() == 1);
    }

    #[test]
    fn test_empty_corpus() {
        let target = record("a", 10, [0.2; 5]);
        check!(find_similar(&target, &[], &SimilarityOptions::default()).is_empty());
    }

    #[test]
    fn test_ties_keep_corpus_order() {
        let target = record("t", 10, [0.2; 5]);
        let corpus = vec![
            record("first", 10, [0.3, 0.1, 0.2, 0.2, 0.2]),
            record("second", 10, [0.1, 0.3, 0.2, 0.2, 0.2]),
        ];
        let results = find_similar(&target, &corpus, &SimilarityOptions::default());
        let names: Vec<_> = results.iter().map(|r| r.record.firstname.as_str()).collect();
        check!(names == ["first", "second"]);
    }

    #[test]
    fn test_opposite_profiles_score_zero() {
        let low = record("low", 10, [0.0; 5]);
        let high = record("high", 10, [1.0; 5]);
        check!(similarity(&low, &high) == 0.0);
        check!(similarity(&low, &low) == 100.0);
    }
}
