use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::text;
use crate::metrics::{
    average_daily_hours, count_where, hours_by_day, round_to_tenth, tally, total_available_hours,
};
use crate::models::{
    AppointmentRecord, AppointmentStatus, AvailabilitySlot, ConsultationRecord,
    ConsultationStatus, Priority, StudentRecord, StudentStatus, Weekday,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationSummary {
    pub active: usize,
    pub pending: usize,
    pub resolved: usize,
    pub high_priority: usize,
}

pub fn summarize_consultations(consultations: &[ConsultationRecord]) -> ConsultationSummary {
    let with_status = |status: ConsultationStatus| count_where(consultations, |c| c.status == status);
    ConsultationSummary {
        active: with_status(ConsultationStatus::Active),
        pending: with_status(ConsultationStatus::Pending),
        resolved: with_status(ConsultationStatus::Resolved),
        high_priority: count_where(consultations, |c| c.priority == Priority::High),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub by_type: BTreeMap<String, usize>,
}

pub fn summarize_appointments(appointments: &[AppointmentRecord]) -> AppointmentSummary {
    AppointmentSummary {
        total: appointments.len(),
        scheduled: count_where(appointments, |a| a.status == AppointmentStatus::Scheduled),
        completed: count_where(appointments, |a| a.status == AppointmentStatus::Completed),
        by_type: tally(appointments, |a| text(a.appointment_type.as_str())),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub total: usize,
    pub active: usize,
}

pub fn summarize_students(students: &[StudentRecord]) -> StudentSummary {
    StudentSummary {
        total: students.len(),
        active: count_where(students, |s| s.status == StudentStatus::Active),
    }
}

/// Weekly availability cards of the counselor schedule page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    /// Weekdays with at least one open slot.
    pub available_days: usize,
    pub available_slots: usize,
    pub total_hours: f64,
    pub average_daily_hours: f64,
    pub hours_by_day: BTreeMap<Weekday, f64>,
}

pub fn summarize_availability(slots: &[AvailabilitySlot]) -> AvailabilitySummary {
    let by_day = hours_by_day(slots);
    AvailabilitySummary {
        available_days: Weekday::ALL
            .iter()
            .filter(|day| slots.iter().any(|s| s.day == **day && s.is_available))
            .count(),
        available_slots: count_where(slots, |s| s.is_available),
        total_hours: round_to_tenth(total_available_hours(slots)),
        average_daily_hours: average_daily_hours(slots),
        hours_by_day: by_day,
    }
}
