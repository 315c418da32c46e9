//! Filtered views over the loaded dataset.

use crate::record::NameRecord;
use std::fmt;

/// Minimum occurrences for a name to be offered by search.
pub const DEFAULT_SEARCH_THRESHOLD: u64 = 10;

/// Minimum occurrences for a name to be drawn on the chart.
pub const DEFAULT_CHART_THRESHOLD: u64 = 100;

/// Which derived view of the dataset is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Low threshold: everything worth suggesting while typing
    Search,
    /// High threshold: names frequent enough to plot
    Chart,
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::Chart => f.write_str("chart"),
        }
    }
}

/// Occurrence thresholds for the two views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewThresholds {
    pub search: u64,
    pub chart: u64,
}

impl Default for ViewThresholds {
    fn default() -> Self {
        Self {
            search: DEFAULT_SEARCH_THRESHOLD,
            chart: DEFAULT_CHART_THRESHOLD,
        }
    }
}

impl ViewThresholds {
    pub const fn for_kind(&self, kind: ViewKind) -> u64 {
        match kind {
            ViewKind::Search => self.search,
            ViewKind::Chart => self.chart,
        }
    }
}

/// Records with at least `min_count` occurrences, in dataset order.
pub fn filter_by_count(records: &[NameRecord], min_count: u64) -> Vec<NameRecord> {
    records
        .iter()
        .filter(|record| record.count >= min_count)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::record;
    use assert2::check;

    fn corpus() -> Vec<NameRecord> {
        vec![
            record("rare", 5, [0.5, 0.2, 0.1, 0.1, 0.1]),
            record("edge", 10, [0.5, 0.2, 0.1, 0.1, 0.1]),
            record("mid", 99, [0.5, 0.2, 0.1, 0.1, 0.1]),
            record("common", 100, [0.5, 0.2, 0.1, 0.1, 0.1]),
            record("huge", 20_000, [0.5, 0.2, 0.1, 0.1, 0.1]),
        ]
    }

    #[test]
    fn test_filter_keeps_order_and_threshold() {
        let thresholds = ViewThresholds::default();
        let search = filter_by_count(&corpus(), thresholds.for_kind(ViewKind::Search));
        let names: Vec<_> = search.iter().map(|r| r.firstname.as_str()).collect();
        check!(names == ["edge", "mid", "common", "huge"]);

        let chart = filter_by_count(&corpus(), thresholds.for_kind(ViewKind::Chart));
        let names: Vec<_> = chart.iter().map(|r| r.firstname.as_str()).collect();
        check!(names == ["common", "huge"]);
    }

    #[test]
    fn test_chart_view_is_subset_of_search_view() {
        let thresholds = ViewThresholds::default();
        let search = filter_by_count(&corpus(), thresholds.search);
        let chart = filter_by_count(&corpus(), thresholds.chart);
        check!(chart.iter().all(|r| search.contains(r)));
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let input = corpus();
        let before = input.clone();
        let _ = filter_by_count(&input, 50);
        check!(input == before);
    }
}
