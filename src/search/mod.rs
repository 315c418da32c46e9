//! Accent-insensitive name search.
//!
//! This module provides normalization and a prefix-bucketed index used for
//! search-as-you-type and "did you mean" suggestions.

// Module declarations
pub mod index;
pub mod normalize;

// Public re-exports
pub use index::{NameSuggestion, PrefixIndex};
pub use normalize::normalize;
