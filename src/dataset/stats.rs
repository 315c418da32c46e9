//! Aggregate statistics and simple lookups over a slice of records.

use crate::record::{Mention, NameRecord};
use serde::Serialize;

/// Summary figures for a set of names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataStats {
    pub total_names: usize,
    pub total_candidates: u64,
    /// Average candidates per name, rounded
    pub avg_count: u64,
    pub min_count: u64,
    pub max_count: u64,
    /// Average "très bien" rate as a rounded percentage
    pub avg_tb_pct: u64,
}

/// Compute [`DataStats`]; an empty slice yields all zeros.
pub fn data_stats(records: &[NameRecord]) -> DataStats {
    if records.is_empty() {
        return DataStats::default();
    }

    let n = records.len() as f64;
    let total: u128 = records.iter().map(|r| u128::from(r.count)).sum();
    let total_candidates = u64::try_from(total).unwrap_or(u64::MAX);
    let min_count = records.iter().map(|r| r.count).min().unwrap_or(0);
    let max_count = records.iter().map(|r| r.count).max().unwrap_or(0);
    let avg_tb = records.iter().map(|r| r.tb).sum::<f64>() / n;

    DataStats {
        total_names: records.len(),
        total_candidates,
        avg_count: (total as f64 / n).round() as u64,
        min_count,
        max_count,
        avg_tb_pct: (avg_tb * 100.0).round() as u64,
    }
}

/// Exact, case-insensitive lookup by first name.
pub fn find_by_name<'a>(records: &'a [NameRecord], firstname: &str) -> Option<&'a NameRecord> {
    let wanted = firstname.trim().to_lowercase();
    records
        .iter()
        .find(|record| record.firstname.to_lowercase() == wanted)
}

/// The `limit` most frequent names.
pub fn top_by_count(records: &[NameRecord], limit: usize) -> Vec<&NameRecord> {
    let mut sorted: Vec<_> = records.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted.truncate(limit);
    sorted
}

/// The `limit` names with the highest rate for `mention`.
pub fn top_by_rate(records: &[NameRecord], mention: Mention, limit: usize) -> Vec<&NameRecord> {
    let mut sorted: Vec<_> = records.iter().collect();
    sorted.sort_by(|a, b| b.rate(mention).total_cmp(&a.rate(mention)));
    sorted.truncate(limit);
    sorted
}

/// Optional criteria for [`filter_records`]. Unset fields don't filter.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub min_count: Option<u64>,
    pub max_count: Option<u64>,
    pub min_rate_tb: Option<f64>,
    pub max_rate_tb: Option<f64>,
    /// Case-insensitive substring of the first name
    pub search_term: Option<String>,
}

pub fn filter_records<'a>(records: &'a [NameRecord], filter: &RecordFilter) -> Vec<&'a NameRecord> {
    let term = filter.search_term.as_ref().map(|t| t.to_lowercase());

    records
        .iter()
        .filter(|r| filter.min_count.is_none_or(|min| r.count >= min))
        .filter(|r| filter.max_count.is_none_or(|max| r.count <= max))
        .filter(|r| filter.min_rate_tb.is_none_or(|min| r.tb >= min))
        .filter(|r| filter.max_rate_tb.is_none_or(|max| r.tb <= max))
        .filter(|r| {
            term.as_ref()
                .is_none_or(|t| r.firstname.to_lowercase().contains(t.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::record;
    use assert2::{check, let_assert};

    fn corpus() -> Vec<NameRecord> {
        vec![
            record("lina", 300, [0.2, 0.2, 0.2, 0.3, 0.1]),
            record("hugo", 1500, [0.4, 0.25, 0.2, 0.1, 0.05]),
            record("ines", 700, [0.1, 0.2, 0.2, 0.3, 0.2]),
        ]
    }

    #[test]
    fn test_data_stats() {
        let stats = data_stats(&corpus());
        check!(stats.total_names == 3);
        check!(stats.total_candidates == 2500);
        check!(stats.avg_count == 833);
        check!(stats.min_count == 300);
        check!(stats.max_count == 1500);
        check!(stats.avg_tb_pct == 23);
    }

    #[test]
    fn test_data_stats_saturates_on_huge_counts() {
        let half = u64::MAX / 2 + 1;
        let records = [
            record("a", half, [0.2; 5]),
            record("b", half, [0.2; 5]),
        ];
        let stats = data_stats(&records);
        check!(stats.total_candidates == u64::MAX);
        check!(stats.max_count == half);
        check!(stats.min_count == half);
        check!(stats.avg_count > 0);
    }

    #[test]
    fn test_data_stats_empty() {
        check!(data_stats(&[]) == DataStats::default());
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let corpus = corpus();
        let_assert!(Some(found) = find_by_name(&corpus, "  HUGO "));
        check!(found.count == 1500);
        check!(find_by_name(&corpus, "hug").is_none());
    }

    #[test]
    fn test_top_by_count_and_rate() {
        let corpus = corpus();
        let top: Vec<_> = top_by_count(&corpus, 2).iter().map(|r| r.firstname.as_str()).collect();
        check!(top == ["hugo", "ines"]);

        let top: Vec<_> = top_by_rate(&corpus, Mention::Fel, 1)
            .iter()
            .map(|r| r.firstname.as_str())
            .collect();
        check!(top == ["ines"]);
    }

    #[test]
    fn test_filter_records() {
        let corpus = corpus();
        let filter = RecordFilter {
            min_count: Some(500),
            search_term: Some("N".to_string()),
            ..RecordFilter::default()
        };
        let names: Vec<_> = filter_records(&corpus, &filter)
            .iter()
            .map(|r| r.firstname.as_str())
            .collect();
        check!(names == ["ines"]);

        let filter = RecordFilter {
            min_rate_tb: Some(0.25),
            max_count: Some(400),
            ..RecordFilter::default()
        };
        let names: Vec<_> = filter_records(&corpus, &filter)
            .iter()
            .map(|r| r.firstname.as_str())
            .collect();
        check!(names == ["lina"]);
    }
}
