use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

closed_enum! {
    UserRole {
        Student => "student",
        Employer => "employer",
        Counselor => "counselor",
        Admin => "admin",
    }
}

closed_enum! {
    UserStatus {
        Active => "active",
        Inactive => "inactive",
        Suspended => "suspended",
    }
}

closed_enum! {
    /// Hiring pipeline stage of an applicant.
    CandidateStatus {
        Applied => "applied",
        Review => "review",
        Interview => "interview",
        Offer => "offer",
        Rejected => "rejected",
    }
}

closed_enum! {
    StudentStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

/// Platform account as listed on the admin user management page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_active: NaiveDate,
    pub joined_date: NaiveDate,
    #[serde(default)]
    pub profile_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub position: String,
    pub location: String,
    pub education: Option<String>,
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub status: CandidateStatus,
    pub applied_date: NaiveDate,
    pub rating: f64,
}

/// A student on a counselor's caseload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub course: String,
    pub year: String,
    pub status: StudentStatus,
    pub last_consultation: Option<NaiveDate>,
}
