//! Dataset loading, validation and the derived search/chart views.

// Module declarations
pub mod document;
pub mod loader;
pub mod source;
pub mod stats;
pub mod validate;
pub mod views;

// Public re-exports
pub use document::{Dataset, parse_dataset};
pub use loader::DatasetLoader;
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{DatasetSource, FileSource, StaticSource};
pub use stats::{
    DataStats, RecordFilter, data_stats, filter_records, find_by_name, top_by_count, top_by_rate,
};
pub use validate::DropReason;
pub use views::{ViewKind, ViewThresholds};
