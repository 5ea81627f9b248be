use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::filter::text;
use crate::metrics::{
    count_where, engagement_rate, percentage, share_of, sum_by, tally, Percentage,
};
use crate::models::{
    AnalyticsSample, ContentRecord, ContentStatus, UserRecord, UserRole, UserStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub total: usize,
    pub active: usize,
    pub students: usize,
    pub employers: usize,
    pub by_role: BTreeMap<String, usize>,
    pub profile_completion: Percentage,
}

pub fn summarize_users(users: &[UserRecord]) -> UserSummary {
    let complete = count_where(users, |u| u.profile_complete);
    UserSummary {
        total: users.len(),
        active: count_where(users, |u| u.status == UserStatus::Active),
        students: count_where(users, |u| u.role == UserRole::Student),
        employers: count_where(users, |u| u.role == UserRole::Employer),
        by_role: tally(users, |u| text(u.role.as_str())),
        profile_completion: percentage(complete as f64, users.len() as f64),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSummary {
    pub total: usize,
    pub published: usize,
    pub total_views: u64,
    pub featured: usize,
    pub by_type: BTreeMap<String, usize>,
}

pub fn summarize_content(contents: &[ContentRecord]) -> ContentSummary {
    ContentSummary {
        total: contents.len(),
        published: count_where(contents, |c| c.status == ContentStatus::Published),
        total_views: sum_by(contents, |c| c.views),
        featured: count_where(contents, |c| c.featured),
        by_type: tally(contents, |c| text(c.content_type.as_str())),
    }
}

/// One row of the analytics table, with bar lengths relative to the
/// busiest period in the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub period: NaiveDate,
    pub users: u32,
    pub jobs: u32,
    pub applications: u32,
    pub consultations: u32,
    pub engagement: Percentage,
    pub users_bar: Percentage,
    pub applications_bar: Percentage,
}

pub fn analytics_table(samples: &[AnalyticsSample]) -> Vec<AnalyticsRow> {
    let max_users = samples.iter().map(|s| s.users).max().unwrap_or(0);
    let max_applications = samples.iter().map(|s| s.applications).max().unwrap_or(0);

    samples
        .iter()
        .map(|s| AnalyticsRow {
            period: s.period,
            users: s.users,
            jobs: s.jobs,
            applications: s.applications,
            consultations: s.consultations,
            engagement: engagement_rate(s.applications, s.users),
            users_bar: share_of(s.users, max_users),
            applications_bar: share_of(s.applications, max_applications),
        })
        .collect()
}
