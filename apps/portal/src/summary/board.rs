use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::{text, texts};
use crate::metrics::{average_by, count_where, distinct_sorted_values, round_to_tenth, sum_by, tally};
use crate::models::{CompanyRecord, CourseRecord, EventRecord, JobRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobBoardSummary {
    pub total: usize,
    pub by_type: BTreeMap<String, usize>,
    pub companies: Vec<String>,
}

pub fn summarize_jobs(jobs: &[JobRecord]) -> JobBoardSummary {
    JobBoardSummary {
        total: jobs.len(),
        by_type: tally(jobs, |j| text(j.job_type.as_str())),
        companies: distinct_sorted_values(jobs, |j| text(&j.company.name)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    pub total: usize,
    pub open_positions: u64,
    pub industries: Vec<String>,
}

pub fn summarize_companies(companies: &[CompanyRecord]) -> CompanySummary {
    CompanySummary {
        total: companies.len(),
        open_positions: sum_by(companies, |c| u64::from(c.open_positions)),
        industries: distinct_sorted_values(companies, |c| texts(&c.industry)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub total: usize,
    pub virtual_events: usize,
    pub total_attendees: u64,
}

pub fn summarize_events(events: &[EventRecord]) -> EventSummary {
    EventSummary {
        total: events.len(),
        virtual_events: count_where(events, |e| e.is_virtual),
        total_attendees: sum_by(events, |e| u64::from(e.attendees)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub total: usize,
    pub enrolled: usize,
    pub free: usize,
    pub total_learners: u64,
    /// Mean rating to one decimal; absent when there are no courses.
    pub average_rating: Option<f64>,
}

pub fn summarize_courses(courses: &[CourseRecord]) -> CourseSummary {
    CourseSummary {
        total: courses.len(),
        enrolled: count_where(courses, |c| c.enrolled),
        free: count_where(courses, |c| c.is_free()),
        total_learners: sum_by(courses, |c| u64::from(c.enrolled_count)),
        average_rating: average_by(courses, |c| c.rating).map(round_to_tenth),
    }
}
