//! Core data types: name records, mentions and the dataset file envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A graded honor level awarded alongside a passing exam result.
///
/// Variants are ordered from the lowest outcome to the highest, so
/// `Mention::ALL` iterates in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mention {
    /// Passed without mention
    Sm,
    /// Assez bien
    Ab,
    /// Bien
    B,
    /// Très bien
    Tb,
    /// Très bien avec félicitations du jury
    Fel,
}

impl Mention {
    /// All mentions, worst to best.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Ab, Self::B, Self::Tb, Self::Fel];

    /// Field name of this mention's rate in the dataset file.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Sm => "taux_sm",
            Self::Ab => "taux_ab",
            Self::B => "taux_b",
            Self::Tb => "taux_tb",
            Self::Fel => "taux_fel",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sm => "Sans mention",
            Self::Ab => "Assez bien",
            Self::B => "Bien",
            Self::Tb => "Très bien",
            Self::Fel => "Très bien avec félicitations",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Sm => "SM",
            Self::Ab => "AB",
            Self::B => "B",
            Self::Tb => "TB",
            Self::Fel => "TB+",
        }
    }

    /// Display color used for this mention in charts and badges.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Sm => "#ef4444",
            Self::Ab => "#f97316",
            Self::B => "#eab308",
            Self::Tb => "#22c55e",
            Self::Fel => "#3b82f6",
        }
    }
}

impl fmt::Display for Mention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for mention names that don't match any known mention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mention '{0}' (expected one of: sm, ab, b, tb, fel)")]
pub struct ParseMentionError(String);

impl FromStr for Mention {
    type Err = ParseMentionError;

    /// Accepts the short keys (`fel`), the dataset keys (`taux_fel`) and `tb+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let key = lower.strip_prefix("taux_").unwrap_or(&lower);
        match key {
            "sm" => Ok(Self::Sm),
            "ab" => Ok(Self::Ab),
            "b" => Ok(Self::B),
            "tb" => Ok(Self::Tb),
            "fel" | "tb+" => Ok(Self::Fel),
            _ => Err(ParseMentionError(s.to_string())),
        }
    }
}

/// Exam statistics for one first name.
///
/// Rates are independent proportions of the candidate pool; their sum may be
/// below 1 when some candidates have no recorded outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Lowercase canonical key, unique across the dataset
    pub firstname: String,
    /// Number of candidates with this name
    pub count: u64,
    #[serde(rename = "taux_sm")]
    pub sm: f64,
    #[serde(rename = "taux_ab")]
    pub ab: f64,
    #[serde(rename = "taux_b")]
    pub b: f64,
    #[serde(rename = "taux_tb")]
    pub tb: f64,
    #[serde(rename = "taux_fel")]
    pub fel: f64,
}

impl NameRecord {
    /// Rate for a single mention.
    pub const fn rate(&self, mention: Mention) -> f64 {
        match mention {
            Mention::Sm => self.sm,
            Mention::Ab => self.ab,
            Mention::B => self.b,
            Mention::Tb => self.tb,
            Mention::Fel => self.fel,
        }
    }

    /// The five rates as a vector, in `Mention::ALL` order.
    pub const fn rates(&self) -> [f64; 5] {
        [self.sm, self.ab, self.b, self.tb, self.fel]
    }
}

/// The `metadata` block of the dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatasetMetadata {
    pub generated_at: String,
    pub total_records: u64,
    pub filtered_records: u64,
    pub min_count_threshold: u64,
    pub version: String,
}

/// Top-level shape of the dataset document before per-record validation.
///
/// Records stay as raw JSON values so that one bad row is dropped on its own
/// instead of failing the whole document.
#[derive(Debug, Deserialize)]
pub(crate) struct RawDataset {
    #[serde(default)]
    pub(crate) metadata: Option<DatasetMetadata>,
    pub(crate) data: Vec<serde_json::Value>,
}
