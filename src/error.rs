//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for application plumbing (CLI, config).
///
/// Defaults to `anyhow::Error`, with context added via `.context()` and
/// `.with_context()` throughout the command handlers. Library operations name
/// their typed error explicitly.
pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// Error returned when the dataset cannot be loaded.
///
/// Cloneable so that a single in-flight load can hand the same failure to every
/// caller awaiting it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The dataset source could not be reached or read.
    #[error("dataset unreachable at {location}: {reason}")]
    Unreachable { location: String, reason: String },
    /// The document is not valid JSON or lacks the top-level `data` array.
    #[error("invalid dataset format at {location}: {reason}")]
    Malformed { location: String, reason: String },
    /// Every record was dropped during validation.
    #[error("dataset at {location} contains no valid records ({dropped} dropped)")]
    Empty { location: String, dropped: usize },
}

/// Error returned when a configuration file is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
