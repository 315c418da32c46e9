//! Single-flight dataset loading with memoized views.
//!
//! The loader fetches and validates the dataset at most once per cache
//! lifetime. Callers arriving while a load is running await the same shared
//! future instead of starting their own fetch.

use super::document::{Dataset, parse_dataset};
use super::source::DatasetSource;
use super::views::{ViewKind, ViewThresholds, filter_by_count};
use crate::error::LoadError;
use crate::record::NameRecord;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, RwLock};

/// Type alias for the shared load future.
type SharedLoad = Shared<BoxFuture<'static, Result<Arc<Dataset>, LoadError>>>;

/// Shared state for dataset caching.
///
/// This is the central coordination point for:
/// - Caching the validated dataset
/// - Tracking the in-flight load (shared future)
/// - Memoizing the search and chart views
pub struct DatasetLoader {
    source: Arc<dyn DatasetSource>,
    thresholds: ViewThresholds,

    /// Validated dataset, once a load has succeeded
    cache: RwLock<Option<Arc<Dataset>>>,

    /// In-flight load future (can be awaited by multiple callers)
    in_flight: Mutex<Option<SharedLoad>>,

    /// Filtered views, computed on first request
    views: RwLock<HashMap<ViewKind, Arc<[NameRecord]>>>,
}

impl std::fmt::Debug for DatasetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatasetLoader")
            .field("source", &self.source.location())
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}

impl DatasetLoader {
    /// Create a loader with the default view thresholds.
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self::with_thresholds(source, ViewThresholds::default())
    }

    pub fn with_thresholds(source: Arc<dyn DatasetSource>, thresholds: ViewThresholds) -> Self {
        Self {
            source,
            thresholds,
            cache: RwLock::new(None),
            in_flight: Mutex::new(None),
            views: RwLock::new(HashMap::new()),
        }
    }

    pub const fn thresholds(&self) -> ViewThresholds {
        self.thresholds
    }

    /// Where the dataset is fetched from.
    pub fn source_location(&self) -> String {
        self.source.location()
    }

    /// Get the dataset, waiting for an in-flight load if needed.
    ///
    /// This is the main entry point. It:
    /// 1. Checks the cache
    /// 2. Joins an in-flight load if one exists
    /// 3. Starts a new load otherwise
    pub async fn load(&self) -> Result<Arc<Dataset>, LoadError> {
        // 1. Check cache first
        if let Some(dataset) = self.cache.read().await.as_ref() {
            tracing::debug!("Dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        // 2. Join or start a load while holding the slot, so two callers can't both start one
        let future = {
            let mut in_flight = self.in_flight.lock().await;

            // A load may have settled while we waited for the slot
            if let Some(dataset) = self.cache.read().await.as_ref() {
                return Ok(Arc::clone(dataset));
            }

            if let Some(future) = in_flight.as_ref() {
                tracing::debug!("Awaiting in-flight dataset load");
                future.clone()
            } else {
                let future = self.start_load();
                *in_flight = Some(future.clone());
                future
            }
        };

        // 3. Await the shared result
        let result = future.clone().await;

        // Settle: the first waiter to get here clears the slot and publishes the result.
        // If clear_cache() ran meanwhile the slot no longer holds our future and
        // nothing is published.
        {
            let mut in_flight = self.in_flight.lock().await;
            if in_flight.as_ref().is_some_and(|current| current.ptr_eq(&future)) {
                *in_flight = None;
                if let Ok(dataset) = &result {
                    *self.cache.write().await = Some(Arc::clone(dataset));
                    tracing::debug!("Cached dataset from {}", self.source.location());
                }
            }
        }

        result
    }

    /// Build the fetch, parse and validate pipeline as a shareable future.
    fn start_load(&self) -> SharedLoad {
        let source = Arc::clone(&self.source);
        tracing::info!("Loading dataset from {}", source.location());

        let load: BoxFuture<'static, Result<Arc<Dataset>, LoadError>> = Box::pin(async move {
            let start = Instant::now();
            let location = source.location();
            let bytes = source.fetch().await.inspect_err(|e| {
                tracing::error!("Failed to fetch dataset: {}", e);
            })?;
            let dataset = parse_dataset(&bytes, &location).inspect_err(|e| {
                tracing::error!("Failed to load dataset: {}", e);
            })?;

            tracing::info!(
                "Loaded {} valid names from {} ({} dropped) in {:?}",
                dataset.len(),
                location,
                dataset.dropped(),
                start.elapsed()
            );
            Ok(Arc::new(dataset))
        });

        load.shared()
    }

    /// Names frequent enough for search suggestions.
    pub async fn names_for_search(&self) -> Result<Arc<[NameRecord]>, LoadError> {
        self.view(ViewKind::Search).await
    }

    /// Names frequent enough to be drawn on the chart.
    pub async fn names_for_chart(&self) -> Result<Arc<[NameRecord]>, LoadError> {
        self.view(ViewKind::Chart).await
    }

    /// Get a filtered view, computing it from the cached dataset on first use.
    ///
    /// Views are memoized independently: asking for one never computes the other.
    pub async fn view(&self, kind: ViewKind) -> Result<Arc<[NameRecord]>, LoadError> {
        if let Some(view) = self.views.read().await.get(&kind) {
            return Ok(Arc::clone(view));
        }

        let dataset = self.load().await?;
        let threshold = self.thresholds.for_kind(kind);
        let view: Arc<[NameRecord]> = filter_by_count(dataset.records(), threshold).into();
        tracing::debug!(
            "Computed {} view: {} of {} names with count >= {}",
            kind,
            view.len(),
            dataset.len(),
            threshold
        );

        // Only memoize if the dataset we filtered is still the cached one
        let cache = self.cache.read().await;
        if cache.as_ref().is_some_and(|current| Arc::ptr_eq(current, &dataset)) {
            let mut views = self.views.write().await;
            return Ok(Arc::clone(views.entry(kind).or_insert(view)));
        }

        Ok(view)
    }

    /// Drop the cached dataset, the in-flight slot and all views.
    ///
    /// Callers already holding an `Arc` to the old data keep it.
    pub async fn clear_cache(&self) {
        let mut in_flight = self.in_flight.lock().await;
        *in_flight = None;
        *self.cache.write().await = None;
        self.views.write().await.clear();
        tracing::debug!("Cleared dataset cache");
    }

    /// Check if a dataset is cached.
    pub async fn is_cached(&self) -> bool {
        self.cache.read().await.is_some()
    }

    /// Check if a load is in progress.
    pub async fn is_loading(&self) -> bool {
        self.in_flight.lock().await.is_some()
    }

    /// Get the cached dataset without triggering a load.
    pub async fn get_cached(&self) -> Option<Arc<Dataset>> {
        self.cache.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::source::StaticSource;
    use assert2::{check, let_assert};
    use futures::future::BoxFuture;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    fn document() -> serde_json::Value {
        let row = |name: &str, count: u64| {
            json!({
                "firstname": name, "count": count,
                "taux_sm": 0.3, "taux_ab": 0.3, "taux_b": 0.2, "taux_tb": 0.15, "taux_fel": 0.05
            })
        };
        json!({ "data": [row("emma", 1200), row("noe", 60), row("zoe", 8)] })
    }

    /// Counts fetches and blocks each one until released.
    #[derive(Debug, Default)]
    struct GatedSource {
        fetches: AtomicUsize,
        gate: Notify,
    }

    impl DatasetSource for GatedSource {
        fn location(&self) -> String {
            "gated".to_string()
        }

        fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, LoadError>> {
            Box::pin(async move {
                self.fetches.fetch_add(1, Ordering::SeqCst);
                self.gate.notified().await;
                Ok(document().to_string().into_bytes())
            })
        }
    }

    /// Serves a malformed document on the first fetch, a valid one afterwards.
    #[derive(Debug, Default)]
    struct FlakySource {
        fetches: AtomicUsize,
    }

    impl DatasetSource for FlakySource {
        fn location(&self) -> String {
            "flaky".to_string()
        }

        fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, LoadError>> {
            Box::pin(async move {
                if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(br#"{"metadata": {}}"#.to_vec())
                } else {
                    Ok(document().to_string().into_bytes())
                }
            })
        }
    }

    #[tokio::test]
    async fn test_loader_new() {
        let loader = DatasetLoader::new(Arc::new(StaticSource::from_json("inline", &document())));
        check!(!loader.is_cached().await);
        check!(!loader.is_loading().await);
        check!(loader.get_cached().await.is_none());
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fetch() {
        let source = Arc::new(GatedSource::default());
        let loader = DatasetLoader::new(source.clone());

        let release = async {
            tokio::task::yield_now().await;
            source.gate.notify_one();
        };
        let (a, b, c, ()) = tokio::join!(loader.load(), loader.load(), loader.load(), release);

        let_assert!(Ok(a) = a);
        let_assert!(Ok(b) = b);
        let_assert!(Ok(c) = c);
        check!(Arc::ptr_eq(&a, &b));
        check!(Arc::ptr_eq(&b, &c));
        check!(source.fetches.load(Ordering::SeqCst) == 1);
        check!(loader.is_cached().await);
        check!(!loader.is_loading().await);
    }

    #[tokio::test]
    async fn test_cached_load_does_not_refetch() {
        let source = Arc::new(GatedSource::default());
        let loader = DatasetLoader::new(source.clone());
        source.gate.notify_one();
        let_assert!(Ok(first) = loader.load().await);
        let_assert!(Ok(second) = loader.load().await);
        check!(Arc::ptr_eq(&first, &second));
        check!(source.fetches.load(Ordering::SeqCst) == 1);
    }

    #[tokio::test]
    async fn test_failed_load_does_not_poison_cache() {
        let source = Arc::new(FlakySource::default());
        let loader = DatasetLoader::new(source.clone());

        let_assert!(Err(LoadError::Malformed { .. }) = loader.load().await);
        check!(!loader.is_cached().await);
        check!(!loader.is_loading().await);

        let_assert!(Ok(dataset) = loader.load().await);
        check!(dataset.len() == 3);

        loader.clear_cache().await;
        check!(!loader.is_cached().await);
        let_assert!(Ok(reloaded) = loader.load().await);
        check!(reloaded.len() == 3);
        check!(source.fetches.load(Ordering::SeqCst) == 3);
    }

    #[tokio::test]
    async fn test_views_filter_by_threshold() {
        let loader = DatasetLoader::new(Arc::new(StaticSource::from_json("inline", &document())));

        let_assert!(Ok(search) = loader.names_for_search().await);
        let names: Vec<_> = search.iter().map(|r| r.firstname.as_str()).collect();
        check!(names == ["emma", "noe"]);

        let_assert!(Ok(chart) = loader.names_for_chart().await);
        let names: Vec<_> = chart.iter().map(|r| r.firstname.as_str()).collect();
        check!(names == ["emma"]);
    }

    #[tokio::test]
    async fn test_views_are_memoized_until_cleared() {
        let loader = DatasetLoader::new(Arc::new(StaticSource::from_json("inline", &document())));

        let_assert!(Ok(first) = loader.names_for_chart().await);
        let_assert!(Ok(second) = loader.names_for_chart().await);
        check!(Arc::ptr_eq(&first, &second));

        loader.clear_cache().await;
        let_assert!(Ok(third) = loader.names_for_chart().await);
        check!(!Arc::ptr_eq(&first, &third));
        check!(first == third);
    }

    #[tokio::test]
    async fn test_custom_thresholds() {
        let loader = DatasetLoader::with_thresholds(
            Arc::new(StaticSource::from_json("inline", &document())),
            ViewThresholds { search: 1, chart: 50 },
        );
        let_assert!(Ok(search) = loader.names_for_search().await);
        check!(search.len() == 3);
        let_assert!(Ok(chart) = loader.names_for_chart().await);
        check!(chart.len() == 2);
    }
}
