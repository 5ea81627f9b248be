// Page summaries: the stat cards and tables above each listing.
// Computed from the full record set of a page, like the dashboards they feed.

pub mod admin;
pub mod board;
pub mod counselor;
pub mod employer;

pub use admin::{analytics_table, summarize_content, summarize_users, AnalyticsRow, ContentSummary, UserSummary};
pub use board::{
    summarize_companies, summarize_courses, summarize_events, summarize_jobs, CompanySummary,
    CourseSummary, EventSummary, JobBoardSummary,
};
pub use counselor::{
    summarize_appointments, summarize_availability, summarize_consultations, summarize_students,
    AppointmentSummary, AvailabilitySummary, ConsultationSummary, StudentSummary,
};
pub use employer::{
    summarize_candidates, summarize_employer_events, summarize_postings, CandidateSummary,
    EmployerEventSummary, EventRate, PostingSummary,
};
