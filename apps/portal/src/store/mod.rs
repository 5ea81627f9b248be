//! Record stores: where listing records come from.
//!
//! `SeedStore` serves the mock dataset compiled into the binary;
//! `JsonFileStore` reads the same document from disk. A remote service can
//! be plugged in behind the same trait.

pub mod file;
pub mod seed;

pub use file::JsonFileStore;
pub use seed::SeedStore;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::PortalError;
use crate::filter::Listing;
use crate::models::*;

/// Every record set the portal shows, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub jobs: Vec<JobRecord>,
    pub companies: Vec<CompanyRecord>,
    pub events: Vec<EventRecord>,
    pub courses: Vec<CourseRecord>,
    pub candidates: Vec<CandidateRecord>,
    pub users: Vec<UserRecord>,
    pub appointments: Vec<AppointmentRecord>,
    pub consultations: Vec<ConsultationRecord>,
    pub postings: Vec<PostingRecord>,
    pub contents: Vec<ContentRecord>,
    pub students: Vec<StudentRecord>,
    pub analytics: Vec<AnalyticsSample>,
    pub availability: Vec<AvailabilitySlot>,
}

impl Dataset {
    /// Parses a dataset document and checks id uniqueness per record set.
    pub fn from_json(raw: &str) -> Result<Self, PortalError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        dataset.check_unique_ids()?;
        Ok(dataset)
    }

    pub fn check_unique_ids(&self) -> Result<(), PortalError> {
        check_unique(&self.jobs)?;
        check_unique(&self.companies)?;
        check_unique(&self.events)?;
        check_unique(&self.courses)?;
        check_unique(&self.candidates)?;
        check_unique(&self.users)?;
        check_unique(&self.appointments)?;
        check_unique(&self.consultations)?;
        check_unique(&self.postings)?;
        check_unique(&self.contents)?;
        check_unique(&self.students)?;

        let mut seen = HashSet::new();
        if let Some(dup) = self.availability.iter().find(|s| !seen.insert(s.id.as_str())) {
            return Err(PortalError::DuplicateId {
                listing: "availability",
                id: dup.id.clone(),
            });
        }
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        self.jobs.len()
            + self.companies.len()
            + self.events.len()
            + self.courses.len()
            + self.candidates.len()
            + self.users.len()
            + self.appointments.len()
            + self.consultations.len()
            + self.postings.len()
            + self.contents.len()
            + self.students.len()
            + self.analytics.len()
            + self.availability.len()
    }
}

fn check_unique<R: Listing>(records: &[R]) -> Result<(), PortalError> {
    let mut seen = HashSet::new();
    match records.iter().find(|r| !seen.insert(r.id())) {
        Some(dup) => Err(PortalError::DuplicateId {
            listing: R::KIND.as_str(),
            id: dup.id().to_string(),
        }),
        None => Ok(()),
    }
}

/// Source of listing records. Held as `Arc<dyn RecordStore>` so the backing
/// source can change without touching views.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load(&self) -> Result<Dataset, PortalError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Store for a configured dataset path, falling back to the seed data.
pub fn store_for(path: Option<&Path>) -> Arc<dyn RecordStore> {
    match path {
        Some(path) => Arc::new(JsonFileStore::new(path)),
        None => Arc::new(SeedStore),
    }
}
