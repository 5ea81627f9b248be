use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily platform activity counters shown in the admin analytics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSample {
    pub period: NaiveDate,
    #[serde(default)]
    pub users: u32,
    #[serde(default)]
    pub jobs: u32,
    #[serde(default)]
    pub applications: u32,
    #[serde(default)]
    pub consultations: u32,
}
