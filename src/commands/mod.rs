//! Command handlers behind the command-line interface.
//!
//! Each handler reads through the shared [`AppContext`](crate::context::AppContext)
//! and renders either human-readable text or JSON.

pub mod chart;
pub mod compare;
pub mod search;
pub mod show;
pub mod similar;
pub mod stats;

use crate::error::Result;
use anyhow::Context;
use serde::Serialize;

/// How a handler renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Serialize a report as pretty-printed JSON.
pub(crate) fn to_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize output")
}
