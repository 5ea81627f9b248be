//! Flat, read-only records shown on the portal's listing pages.
//!
//! Every enum here is a closed set whose wire form doubles as the
//! categorical filter value and the dropdown option label.

/// Declares a closed string enum with its serde wire names, `as_str`,
/// `Display` and `FromStr`.
macro_rules! closed_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::errors::PortalError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| crate::errors::PortalError::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub mod analytics;
pub mod content;
pub mod counseling;
pub mod course;
pub mod event;
pub mod listing;
pub mod user;

pub use analytics::AnalyticsSample;
pub use content::{ContentCategory, ContentRecord, ContentStatus, ContentType};
pub use counseling::{
    AppointmentRecord, AppointmentStatus, AppointmentType, AvailabilitySlot, ConsultationCategory,
    ConsultationRecord, ConsultationStatus, Priority, Weekday,
};
pub use course::{CourseLevel, CourseRecord};
pub use event::{EventRecord, EventStatus, EventType};
pub use listing::{CompanyRecord, CompanyRef, JobRecord, JobType, PostingRecord, PostingStatus};
pub use user::{
    CandidateRecord, CandidateStatus, StudentRecord, StudentStatus, UserRecord, UserRole,
    UserStatus,
};

closed_enum! {
    /// Every listing page the portal knows how to filter.
    ListingKind {
        Jobs => "jobs",
        Companies => "companies",
        Events => "events",
        Courses => "courses",
        Candidates => "candidates",
        Users => "users",
        Appointments => "appointments",
        Consultations => "consultations",
        Postings => "postings",
        Contents => "contents",
        Students => "students",
    }
}
