//! Where dataset bytes come from.

use crate::error::LoadError;
use futures::future::BoxFuture;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A place the dataset document can be fetched from.
///
/// Implementations only move bytes; parsing and validation happen in the loader.
pub trait DatasetSource: Send + Sync + fmt::Debug {
    /// Human-readable location used in logs and errors.
    fn location(&self) -> String;

    /// Fetch the raw document.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, LoadError>>;
}

/// Reads the dataset from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, LoadError>> {
        Box::pin(async move {
            tokio::fs::read(&self.path)
                .await
                .map_err(|e| LoadError::Unreachable {
                    location: self.location(),
                    reason: e.to_string(),
                })
        })
    }
}

/// Serves a dataset held in memory (embedded assets, tests).
#[derive(Clone)]
pub struct StaticSource {
    name: String,
    bytes: Arc<[u8]>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Build from a JSON value, e.g. `serde_json::json!({ "data": [...] })`.
    pub fn from_json(name: impl Into<String>, document: &serde_json::Value) -> Self {
        Self::new(name, document.to_string().into_bytes())
    }
}

impl fmt::Debug for StaticSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSource")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl DatasetSource for StaticSource {
    fn location(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, LoadError>> {
        Box::pin(async move { Ok(self.bytes.to_vec()) })
    }
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use super::{DatasetSource, LoadError};
    use futures::future::BoxFuture;
    use reqwest::Client;
    use reqwest::header::CACHE_CONTROL;

    /// The dataset is a static, versioned asset.
    const CACHE_POLICY: &str = "max-age=31536000, immutable";

    /// Fetches the dataset over HTTP.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        client: Client,
        url: String,
    }

    impl HttpSource {
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                client: Client::new(),
                url: url.into(),
            }
        }
    }

    impl DatasetSource for HttpSource {
        fn location(&self) -> String {
            self.url.clone()
        }

        fn fetch(&self) -> BoxFuture<'_, Result<Vec<u8>, LoadError>> {
            Box::pin(async move {
                let to_error = |e: reqwest::Error| LoadError::Unreachable {
                    location: self.url.clone(),
                    reason: e.to_string(),
                };

                let response = self
                    .client
                    .get(&self.url)
                    .header(CACHE_CONTROL, CACHE_POLICY)
                    .send()
                    .await
                    .map_err(to_error)?
                    .error_for_status()
                    .map_err(to_error)?;

                let body = response.bytes().await.map_err(to_error)?;
                Ok(body.to_vec())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use std::io::Write;

    #[tokio::test]
    async fn test_file_source_reads_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"data": []}"#).unwrap();

        let source = FileSource::new(file.path());
        let_assert!(Ok(bytes) = source.fetch().await);
        check!(bytes == br#"{"data": []}"#.to_vec());
    }

    #[tokio::test]
    async fn test_missing_file_is_unreachable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        let_assert!(Err(LoadError::Unreachable { location, .. }) = source.fetch().await);
        check!(location.ends_with("absent.json"));
    }

    #[tokio::test]
    async fn test_static_source_from_json() {
        let source = StaticSource::from_json("inline", &serde_json::json!({ "data": [] }));
        check!(source.location() == "inline");
        let_assert!(Ok(bytes) = source.fetch().await);
        check!(bytes == br#"{"data":[]}"#.to_vec());
    }
}
