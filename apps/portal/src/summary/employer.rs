use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::text;
use crate::metrics::{
    average_by, count_where, registration_percent, registration_rate, round_to_tenth, sum_by, tally,
    Percentage,
};
use crate::models::{CandidateRecord, EventRecord, EventStatus, PostingRecord, PostingStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostingSummary {
    pub total: usize,
    pub active: usize,
    pub total_applications: u64,
    pub average_applications: Option<f64>,
}

pub fn summarize_postings(postings: &[PostingRecord]) -> PostingSummary {
    PostingSummary {
        total: postings.len(),
        active: count_where(postings, |p| p.status == PostingStatus::Active),
        total_applications: sum_by(postings, |p| u64::from(p.applications)),
        average_applications: average_by(postings, |p| f64::from(p.applications))
            .map(round_to_tenth),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
    pub average_rating: Option<f64>,
}

pub fn summarize_candidates(candidates: &[CandidateRecord]) -> CandidateSummary {
    CandidateSummary {
        total: candidates.len(),
        by_status: tally(candidates, |c| text(c.status.as_str())),
        average_rating: average_by(candidates, |c| c.rating).map(round_to_tenth),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRate {
    pub id: String,
    pub registration_rate: Percentage,
    pub registration_percent: Option<i64>,
}

/// Footer cards of the employer events page plus each event's fill rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerEventSummary {
    pub total: usize,
    pub total_registrations: u64,
    pub upcoming: usize,
    pub virtual_events: usize,
    pub rates: Vec<EventRate>,
}

pub fn summarize_employer_events(events: &[EventRecord]) -> EmployerEventSummary {
    EmployerEventSummary {
        total: events.len(),
        total_registrations: sum_by(events, |e| u64::from(e.registrations.unwrap_or(0))),
        upcoming: count_where(events, |e| e.status == Some(EventStatus::Upcoming)),
        virtual_events: count_where(events, |e| e.is_virtual),
        rates: events
            .iter()
            .map(|e| {
                let registrations = e.registrations.unwrap_or(0);
                let max_attendees = e.max_attendees.unwrap_or(0);
                EventRate {
                    id: e.id.clone(),
                    registration_rate: registration_rate(registrations, max_attendees),
                    registration_percent: registration_percent(registrations, max_attendees),
                }
            })
            .collect(),
    }
}
