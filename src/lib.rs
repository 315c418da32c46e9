//! Brevet honor-mention statistics by first name.
//!
//! Loads the per-name dataset once, derives the search and chart views, and
//! provides scoring, profile similarity, accent-insensitive search and the
//! geometry of the scatter chart.

// Module declarations
pub mod chart;
pub mod cli;
pub mod commands;
pub mod compare;
pub mod config;
pub mod context;
pub mod dataset;
pub mod error;
pub mod format;
pub mod record;
pub mod scoring;
pub mod search;
pub mod similarity;
pub mod tracing;

// Public re-exports
pub use chart::{ChartConfig, ChartLayout, CollisionConfig, Viewport, resolve_collisions};
pub use compare::{Comparison, ComparisonColor, color_for};
pub use config::Config;
pub use context::AppContext;
pub use dataset::{Dataset, DatasetLoader, DatasetSource, FileSource, ViewThresholds};
pub use error::{ConfigError, LoadError};
pub use record::{DatasetMetadata, Mention, NameRecord};
pub use scoring::{RankingCategory, score};
pub use search::{PrefixIndex, normalize};
pub use similarity::{SimilarityOptions, find_similar, similarity};
