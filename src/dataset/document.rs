//! Parsing the dataset document into a validated [`Dataset`].

use super::validate::{DropReason, validate_record};
use crate::error::LoadError;
use crate::record::{DatasetMetadata, NameRecord, RawDataset};
use std::collections::HashMap;

/// The validated, read-only dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<NameRecord>,
    metadata: Option<DatasetMetadata>,
    dropped: usize,
}

impl Dataset {
    /// Build a dataset from already-validated records.
    pub fn from_records(records: Vec<NameRecord>) -> Self {
        Self {
            records,
            metadata: None,
            dropped: 0,
        }
    }

    /// Records in file order.
    pub fn records(&self) -> &[NameRecord] {
        &self.records
    }

    pub fn metadata(&self) -> Option<&DatasetMetadata> {
        self.metadata.as_ref()
    }

    /// Number of rows excluded during validation.
    pub const fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse and validate a dataset document.
///
/// Individual bad rows are dropped; the whole parse fails only when the
/// document is malformed or nothing survives validation.
pub fn parse_dataset(bytes: &[u8], location: &str) -> Result<Dataset, LoadError> {
    let raw: RawDataset = serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed {
        location: location.to_string(),
        reason: e.to_string(),
    })?;

    let mut records = Vec::with_capacity(raw.data.len());
    let mut reasons: HashMap<DropReason, usize> = HashMap::new();

    for row in &raw.data {
        match validate_record(row) {
            Ok(record) => records.push(record),
            Err(reason) => *reasons.entry(reason).or_insert(0) += 1,
        }
    }

    let dropped: usize = reasons.values().sum();
    for (reason, count) in &reasons {
        tracing::warn!("Dropped {} record(s) from {}: {}", count, location, reason);
    }

    if records.is_empty() {
        return Err(LoadError::Empty {
            location: location.to_string(),
            dropped,
        });
    }

    Ok(Dataset {
        records,
        metadata: raw.metadata,
        dropped,
    })
}
