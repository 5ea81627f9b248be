use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::errors::PortalError;
use crate::store::{Dataset, RecordStore};

/// Reads a dataset document from disk on every load. Read-only.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn load(&self) -> Result<Dataset, PortalError> {
        info!("Reading dataset from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let dataset = Dataset::from_json(&raw)?;
        info!("Loaded {} records", dataset.record_count());
        Ok(dataset)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
