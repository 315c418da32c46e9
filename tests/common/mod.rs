//! Shared fixtures for the integration tests.
//!
//! Every test gets its own temporary directory holding a dataset file, so the
//! loader always starts cold and tests can rewrite the file under it.

use brevet_prenoms::{AppContext, Config};
use rstest::fixture;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build one dataset row.
pub fn row(name: &str, count: u64, [sm, ab, b, tb, fel]: [f64; 5]) -> Value {
    json!({
        "firstname": name,
        "count": count,
        "taux_sm": sm,
        "taux_ab": ab,
        "taux_b": b,
        "taux_tb": tb,
        "taux_fel": fel,
    })
}

/// A dataset document with metadata around the given rows.
pub fn document(rows: Vec<Value>) -> Value {
    json!({
        "metadata": {
            "generatedAt": "2025-07-10T08:00:00Z",
            "totalRecords": rows.len(),
            "filteredRecords": rows.len(),
            "minCountThreshold": 1,
            "version": "1.0.0"
        },
        "data": rows,
    })
}

/// Rows covering both views and one name below them.
pub fn sample_rows() -> Vec<Value> {
    vec![
        row("louise", 4200, [0.10, 0.20, 0.25, 0.30, 0.15]),
        row("hugo", 3900, [0.30, 0.25, 0.20, 0.15, 0.10]),
        row("élodie", 850, [0.11, 0.20, 0.25, 0.29, 0.15]),
        row("anna", 120, [0.20, 0.25, 0.25, 0.20, 0.10]),
        row("annie", 50, [0.25, 0.25, 0.25, 0.15, 0.10]),
        row("marianne", 30, [0.20, 0.20, 0.30, 0.20, 0.10]),
        row("zéphyr", 4, [0.50, 0.25, 0.25, 0.0, 0.0]),
    ]
}

/// A temporary directory holding `dataset.json`.
#[allow(dead_code)] // Not every test crate uses every helper
pub struct DatasetDir {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)]
impl DatasetDir {
    pub fn new(document: &Value) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path = temp.path().join("dataset.json");
        let dir = Self { _temp: temp, path };
        dir.write(document);
        dir
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the dataset file contents.
    pub fn write(&self, document: &Value) {
        let bytes = serde_json::to_vec(document).expect("Failed to serialize dataset");
        std::fs::write(&self.path, bytes).expect("Failed to write dataset");
    }

    pub fn write_raw(&self, contents: &str) {
        std::fs::write(&self.path, contents).expect("Failed to write dataset");
    }

    /// A context reading this file with the default configuration.
    pub fn context(&self) -> AppContext {
        let mut config = Config::default();
        config.dataset.path = self.path.clone();
        AppContext::from_config(config).expect("Failed to build context")
    }
}

/// Dataset directory seeded with [`sample_rows`].
#[fixture]
pub fn dataset_dir() -> DatasetDir {
    DatasetDir::new(&document(sample_rows()))
}
