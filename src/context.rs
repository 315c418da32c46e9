//! Application context shared by the command handlers.

use crate::config::Config;
use crate::dataset::{DatasetLoader, DatasetSource, FileSource};
use crate::error::{LoadError, Result};
use crate::record::NameRecord;
use crate::search::PrefixIndex;
use anyhow::anyhow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Configuration plus the single dataset loader every command reads through.
///
/// The search index is built once per loaded corpus and rebuilt only when the
/// loader hands out a different search view (after `clear_cache`).
#[derive(Debug)]
pub struct AppContext {
    config: Config,
    loader: DatasetLoader,
    index: Mutex<Option<Arc<PrefixIndex>>>,
}

impl AppContext {
    pub fn new(config: Config, source: Arc<dyn DatasetSource>) -> Self {
        let loader = DatasetLoader::with_thresholds(source, config.views.thresholds());
        Self {
            config,
            loader,
            index: Mutex::new(None),
        }
    }

    /// Build the context with the dataset source named by the configuration.
    ///
    /// A configured URL takes precedence over the file path.
    pub fn from_config(config: Config) -> Result<Self> {
        let source = source_for(&config)?;
        tracing::debug!("Dataset source: {}", source.location());
        Ok(Self::new(config, source))
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn loader(&self) -> &DatasetLoader {
        &self.loader
    }

    /// Names offered by search (count at or above the search threshold).
    pub async fn search_view(&self) -> Result<Arc<[NameRecord]>, LoadError> {
        self.loader.names_for_search().await
    }

    /// Names drawn on the chart (count at or above the chart threshold).
    pub async fn chart_view(&self) -> Result<Arc<[NameRecord]>, LoadError> {
        self.loader.names_for_chart().await
    }

    /// Search index over the current search view.
    pub async fn index(&self) -> Result<Arc<PrefixIndex>, LoadError> {
        let view = self.search_view().await?;
        let mut slot = self.index.lock().await;

        if let Some(index) = slot.as_ref()
            && Arc::ptr_eq(index.records(), &view)
        {
            return Ok(Arc::clone(index));
        }

        let index = Arc::new(PrefixIndex::build(view));
        *slot = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Look up a name in the search view, ignoring case and accents.
    ///
    /// The error lists close spellings when any exist.
    pub async fn find_name(&self, name: &str) -> Result<NameRecord> {
        let index = self.index().await?;
        if let Some(record) = index.find_exact(name) {
            return Ok(record.clone());
        }

        let suggestions = index.suggest(name);
        if suggestions.is_empty() {
            Err(anyhow!("Name '{}' not found", name.trim()))
        } else {
            let names: Vec<&str> = suggestions
                .iter()
                .map(|s| s.record.firstname.as_str())
                .collect();
            Err(anyhow!(
                "Name '{}' not found. Did you mean: {}?",
                name.trim(),
                names.join(", ")
            ))
        }
    }
}

#[cfg(feature = "http")]
fn source_for(config: &Config) -> Result<Arc<dyn DatasetSource>> {
    Ok(match &config.dataset.url {
        Some(url) => Arc::new(crate::dataset::HttpSource::new(url.clone())),
        None => Arc::new(FileSource::new(config.dataset.path.clone())),
    })
}

#[cfg(not(feature = "http"))]
fn source_for(config: &Config) -> Result<Arc<dyn DatasetSource>> {
    match &config.dataset.url {
        Some(url) => Err(anyhow!(
            "Cannot fetch {url}: this build has no HTTP support (enable the `http` feature)"
        )),
        None => Ok(Arc::new(FileSource::new(config.dataset.path.clone()))),
    }
}
