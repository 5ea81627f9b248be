use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    AppointmentType {
        CareerGuidance => "career-guidance",
        ResumeReview => "resume-review",
        InterviewPrep => "interview-prep",
        General => "general",
    }
}

closed_enum! {
    AppointmentStatus {
        Scheduled => "scheduled",
        Completed => "completed",
        Cancelled => "cancelled",
        NoShow => "no-show",
    }
}

closed_enum! {
    ConsultationCategory {
        CareerGuidance => "career-guidance",
        Academic => "academic",
        PersonalDevelopment => "personal-development",
        JobSearch => "job-search",
    }
}

closed_enum! {
    ConsultationStatus {
        Active => "active",
        Pending => "pending",
        Resolved => "resolved",
    }
}

closed_enum! {
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

closed_enum! {
    Weekday {
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
        Sunday => "sunday",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: String,
    pub student_name: String,
    pub student_email: String,
    pub date: NaiveDate,
    /// Wall-clock start, `HH:MM`.
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRecord {
    pub id: String,
    pub student_name: String,
    pub student_email: String,
    pub topic: String,
    pub category: ConsultationCategory,
    pub status: ConsultationStatus,
    pub priority: Priority,
    pub created_at: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub messages: u32,
}

/// One bookable window in a counselor's weekly availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub id: String,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub is_available: bool,
}
