use async_trait::async_trait;
use tracing::info;

use crate::errors::PortalError;
use crate::store::{Dataset, RecordStore};

const SEED_JSON: &str = include_str!("../../data/seed.json");

/// Mock dataset bundled with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedStore;

#[async_trait]
impl RecordStore for SeedStore {
    async fn load(&self) -> Result<Dataset, PortalError> {
        let dataset = Dataset::from_json(SEED_JSON)?;
        info!("Loaded {} seed records", dataset.record_count());
        Ok(dataset)
    }

    fn describe(&self) -> String {
        "embedded seed data".to_string()
    }
}
