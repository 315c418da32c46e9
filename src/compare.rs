//! Side-by-side comparison of a few names.
//!
//! Compared names are ranked by score and colored from a fixed palette that
//! depends on how many names are compared: with few names the colors are as
//! distinct as possible rather than a subsampled gradient.

use crate::record::{Mention, NameRecord};
use crate::scoring::score;
use serde::Serialize;
use thiserror::Error;

/// Maximum number of names in one comparison.
pub const MAX_COMPARISONS: usize = 5;

/// Colors used to rank compared names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparisonColor {
    DarkGreen,
    Green,
    Yellow,
    Orange,
    Red,
}

use ComparisonColor::{DarkGreen, Green, Orange, Red, Yellow};

const PAIR: [ComparisonColor; 2] = [Green, Red];
const TRIO: [ComparisonColor; 3] = [Green, Orange, Red];
const QUARTET: [ComparisonColor; 4] = [DarkGreen, Green, Orange, Red];
const GRADIENT: [ComparisonColor; 5] = [DarkGreen, Green, Yellow, Orange, Red];

impl ComparisonColor {
    pub const fn hex(self) -> &'static str {
        match self {
            Self::DarkGreen => "#16a34a",
            Self::Green => "#22c55e",
            Self::Yellow => "#eab308",
            Self::Orange => "#f97316",
            Self::Red => "#ef4444",
        }
    }

    /// Utility class for a background in this color.
    pub const fn bg_class(self) -> &'static str {
        match self {
            Self::DarkGreen => "bg-green-600",
            Self::Green => "bg-green-500",
            Self::Yellow => "bg-yellow-500",
            Self::Orange => "bg-orange-500",
            Self::Red => "bg-red-500",
        }
    }
}

/// Color for the name ranked `rank` (1-based) among `total` compared names.
///
/// Groups of 2, 3 and 4 get dedicated palettes; any other size uses the full
/// five-step gradient. `rank` is clamped to `[1, 5]`, and ranks past the end
/// of a smaller palette get its last color.
pub fn color_for(rank: usize, total: usize) -> ComparisonColor {
    let rank = rank.clamp(1, MAX_COMPARISONS);
    let palette: &[ComparisonColor] = match total {
        2 => &PAIR,
        3 => &TRIO,
        4 => &QUARTET,
        _ => &GRADIENT,
    };
    palette[(rank - 1).min(palette.len() - 1)]
}

/// A compared name with its rank and color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    pub record: &'a NameRecord,
    /// 1-based
    pub rank: usize,
    pub score: f64,
    pub color: ComparisonColor,
}

/// Rank names by score, then by `tb + fel`, then by `fel`, best first.
///
/// Full ties keep input order.
pub fn rank_for_comparison(records: &[NameRecord]) -> Vec<RankedEntry<'_>> {
    let mut scored: Vec<(&NameRecord, f64)> = records.iter().map(|r| (r, score(r))).collect();
    scored.sort_by(|(a, a_score), (b, b_score)| {
        b_score
            .total_cmp(a_score)
            .then_with(|| (b.tb + b.fel).total_cmp(&(a.tb + a.fel)))
            .then_with(|| b.fel.total_cmp(&a.fel))
    });

    let total = scored.len();
    scored
        .into_iter()
        .enumerate()
        .map(|(position, (record, score))| RankedEntry {
            record,
            rank: position + 1,
            score,
            color: color_for(position + 1, total),
        })
        .collect()
}

/// A compared name ranked on its "félicitations" rate alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FelicitationsEntry<'a> {
    pub record: &'a NameRecord,
    pub rank: usize,
    /// Rate in percent
    pub fel_pct: f64,
    pub color: ComparisonColor,
    /// Set on the leader when its rate is above zero
    pub crowned: bool,
}

/// Rank names by descending "félicitations" rate.
pub fn felicitations_ranking(records: &[NameRecord]) -> Vec<FelicitationsEntry<'_>> {
    let mut sorted: Vec<&NameRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.fel.total_cmp(&a.fel));

    let total = sorted.len();
    sorted
        .into_iter()
        .enumerate()
        .map(|(position, record)| FelicitationsEntry {
            record,
            rank: position + 1,
            fel_pct: record.fel * 100.0,
            color: color_for(position + 1, total),
            crowned: position == 0 && record.fel > 0.0,
        })
        .collect()
}

/// One mention rate, side by side for the better and the worse name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateDifference {
    pub mention: Mention,
    pub better: f64,
    pub worse: f64,
}

impl RateDifference {
    /// Whether the better-scored name also wins on this mention.
    ///
    /// A lower rate wins for "sans mention", a higher one for every other mention.
    pub fn favors_better(&self) -> bool {
        match self.mention {
            Mention::Sm => self.better < self.worse,
            _ => self.better > self.worse,
        }
    }
}

/// Head-to-head breakdown of two names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairwiseComparison<'a> {
    pub better: &'a NameRecord,
    pub worse: &'a NameRecord,
    /// Non-negative score difference
    pub score_gap: f64,
    pub differences: Vec<RateDifference>,
}

/// Compare exactly two names; `None` for any other group size.
///
/// The first name counts as the better one on equal scores.
pub fn pairwise_differences(records: &[NameRecord]) -> Option<PairwiseComparison<'_>> {
    let [first, second] = records else {
        return None;
    };
    let gap = score(first) - score(second);
    let (better, worse) = if gap < 0.0 {
        (second, first)
    } else {
        (first, second)
    };

    Some(PairwiseComparison {
        better,
        worse,
        score_gap: gap.abs(),
        differences: Mention::ALL
            .iter()
            .rev()
            .map(|&mention| RateDifference {
                mention,
                better: better.rate(mention),
                worse: worse.rate(mention),
            })
            .collect(),
    })
}

/// Why a name could not join a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("{0} is already being compared")]
    Duplicate(String),

    #[error("at most {MAX_COMPARISONS} names can be compared")]
    Full,
}

/// The set of names being compared, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    records: Vec<NameRecord>,
}

impl Comparison {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: NameRecord) -> Result<(), ComparisonError> {
        if self.contains(&record.firstname) {
            return Err(ComparisonError::Duplicate(record.firstname));
        }
        if self.records.len() >= MAX_COMPARISONS {
            return Err(ComparisonError::Full);
        }
        self.records.push(record);
        Ok(())
    }

    /// Remove a name; returns whether it was present.
    pub fn remove(&mut self, firstname: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.firstname != firstname);
        self.records.len() != before
    }

    pub fn contains(&self, firstname: &str) -> bool {
        self.records.iter().any(|r| r.firstname == firstname)
    }

    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn ranked(&self) -> Vec<RankedEntry<'_>> {
        rank_for_comparison(&self.records)
    }

    /// Color of a compared name, by its score rank within the group.
    pub fn color_of(&self, firstname: &str) -> Option<ComparisonColor> {
        self.ranked()
            .into_iter()
            .find(|entry| entry.record.firstname == firstname)
            .map(|entry| entry.color)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
