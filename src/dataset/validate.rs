//! Per-record validation. Bad rows are dropped, never repaired.

use crate::record::{Mention, NameRecord};
use serde_json::Value;
use std::fmt;

/// Why a single raw record was excluded from the loaded set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// Not a JSON object
    NotAnObject,
    /// `firstname` missing, not a string, or blank
    MissingName,
    /// `count` missing, negative, or not an integer
    InvalidCount,
    /// A rate field is missing, not a finite number, or outside `[0, 1]`
    InvalidRate(Mention),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("record is not an object"),
            Self::MissingName => f.write_str("missing firstname"),
            Self::InvalidCount => f.write_str("invalid count"),
            Self::InvalidRate(mention) => write!(f, "invalid {}", mention.key()),
        }
    }
}

/// Turn a raw JSON row into a [`NameRecord`], or say why it was dropped.
pub fn validate_record(raw: &Value) -> Result<NameRecord, DropReason> {
    let obj = raw.as_object().ok_or(DropReason::NotAnObject)?;

    let firstname = obj
        .get("firstname")
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .ok_or(DropReason::MissingName)?;

    let count = obj
        .get("count")
        .and_then(Value::as_u64)
        .ok_or(DropReason::InvalidCount)?;

    let rate = |mention: Mention| -> Result<f64, DropReason> {
        obj.get(mention.key())
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite() && (0.0..=1.0).contains(value))
            .ok_or(DropReason::InvalidRate(mention))
    };

    Ok(NameRecord {
        firstname: firstname.to_string(),
        count,
        sm: rate(Mention::Sm)?,
        ab: rate(Mention::Ab)?,
        b: rate(Mention::B)?,
        tb: rate(Mention::Tb)?,
        fel: rate(Mention::Fel)?,
    })
}
