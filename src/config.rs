//! Configuration file support.
//!
//! Every setting has a default, so an absent file or an empty one yields the
//! same behavior as the built-in values. Command-line flags override the file.

use crate::chart::ChartConfig;
use crate::dataset::views::{DEFAULT_CHART_THRESHOLD, DEFAULT_SEARCH_THRESHOLD, ViewThresholds};
use crate::error::ConfigError;
use crate::search::index::DEFAULT_MAX_RESULTS as DEFAULT_SEARCH_RESULTS;
use crate::similarity::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_SIMILARITY, SimilarityOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "public/data/dataset.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub views: ViewsConfig,
    pub similarity: SimilarityConfig,
    pub search: SearchConfig,
    pub chart: ChartConfig,
}

/// Where the dataset comes from. A URL, when set, wins over the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub url: Option<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
            url: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewsConfig {
    pub search_threshold: u64,
    pub chart_threshold: u64,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            search_threshold: DEFAULT_SEARCH_THRESHOLD,
            chart_threshold: DEFAULT_CHART_THRESHOLD,
        }
    }
}

impl ViewsConfig {
    pub const fn thresholds(&self) -> ViewThresholds {
        ViewThresholds {
            search: self.search_threshold,
            chart: self.chart_threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimilarityConfig {
    pub max_results: usize,
    pub min_similarity_pct: f64,
    pub exclude_target: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_similarity_pct: DEFAULT_MIN_SIMILARITY,
            exclude_target: true,
        }
    }
}

impl SimilarityConfig {
    pub const fn options(&self) -> SimilarityOptions {
        SimilarityOptions {
            max_results: self.max_results,
            min_similarity_pct: self.min_similarity_pct,
            exclude_target: self.exclude_target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_SEARCH_RESULTS,
        }
    }
}

impl Config {
    /// Parse and validate TOML content. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::parse(&content, path)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, otherwise use the defaults.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::default()),
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| Err(ConfigError::Invalid(message));

        if self.views.search_threshold >= self.views.chart_threshold {
            return invalid(format!(
                "views.search_threshold ({}) must be below views.chart_threshold ({})",
                self.views.search_threshold, self.views.chart_threshold
            ));
        }
        if !(0.0..=100.0).contains(&self.similarity.min_similarity_pct) {
            return invalid(format!(
                "similarity.min_similarity_pct must be within 0..=100, got {}",
                self.similarity.min_similarity_pct
            ));
        }

        let chart = &self.chart;
        for (name, value) in [
            ("chart.plot_width", chart.plot_width),
            ("chart.plot_height", chart.plot_height),
            ("chart.min_distance", chart.min_distance),
            ("chart.repulsion_force", chart.repulsion_force),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return invalid(format!("{name} must be a positive number, got {value}"));
            }
        }
        Ok(())
    }
}
