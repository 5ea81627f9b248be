use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    EventType {
        CareerFair => "career-fair",
        Workshop => "workshop",
        InfoSession => "info-session",
        Networking => "networking",
        Webinar => "webinar",
    }
}

closed_enum! {
    EventStatus {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

/// A career event. Employer-hosted events also carry a status and
/// registration numbers; student-facing events leave them unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "virtual", default)]
    pub is_virtual: bool,
    pub location: String,
    pub link: Option<String>,
    pub host: String,
    #[serde(default)]
    pub attendees: u32,
    pub description: String,
    pub status: Option<EventStatus>,
    pub registrations: Option<u32>,
    pub max_attendees: Option<u32>,
}
