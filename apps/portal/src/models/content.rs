use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    ContentType {
        Article => "article",
        Course => "course",
        Video => "video",
        Document => "document",
    }
}

closed_enum! {
    ContentCategory {
        CareerGuidance => "career-guidance",
        InterviewPrep => "interview-prep",
        ResumeTips => "resume-tips",
        IndustryInsights => "industry-insights",
        SkillDevelopment => "skill-development",
    }
}

closed_enum! {
    ContentStatus {
        Published => "published",
        Draft => "draft",
        Archived => "archived",
    }
}

/// A resource in the admin content library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub category: ContentCategory,
    pub status: ContentStatus,
    pub author: String,
    pub created_at: NaiveDate,
    pub last_modified: NaiveDate,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub featured: bool,
}
