use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    JobType {
        FullTime => "full-time",
        PartTime => "part-time",
        Internship => "internship",
        Contract => "contract",
    }
}

closed_enum! {
    /// Lifecycle of a posting on the employer's job management page.
    PostingStatus {
        Active => "active",
        Draft => "draft",
        Closed => "closed",
    }
}

/// Company as embedded in a job listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRef {
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company: CompanyRef,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: Option<String>,
    pub posted_date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub industry: Vec<String>,
    pub location: String,
    pub website: String,
    pub logo: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub open_positions: u32,
}

/// A job as the posting employer sees it, with its application count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostingRecord {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: Option<String>,
    pub status: PostingStatus,
    #[serde(default)]
    pub applications: u32,
    pub posted_date: NaiveDate,
    pub deadline: Option<NaiveDate>,
}
