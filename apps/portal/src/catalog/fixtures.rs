//! Record builders shared by unit tests.

use chrono::NaiveDate;

use crate::models::*;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

fn email(name: &str) -> String {
    format!("{}@example.com", name.to_lowercase().replace(' ', "."))
}

pub fn job(id: &str, title: &str, company: &str, job_type: JobType) -> JobRecord {
    JobRecord {
        id: id.to_string(),
        title: title.to_string(),
        company: CompanyRef {
            name: company.to_string(),
            logo: None,
            website: None,
        },
        location: "Remote".to_string(),
        job_type,
        salary: None,
        posted_date: date("2024-01-15"),
        description: format!("Join {company} and ship great work."),
        tags: vec![],
    }
}

pub fn company(id: &str, name: &str, industry: &[&str]) -> CompanyRecord {
    CompanyRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} builds things."),
        industry: industry.iter().map(|s| s.to_string()).collect(),
        location: "San Francisco, CA".to_string(),
        website: "https://example.com".to_string(),
        logo: None,
        size: None,
        open_positions: 2,
    }
}

pub fn posting(
    id: &str,
    title: &str,
    department: &str,
    status: PostingStatus,
    applications: u32,
) -> PostingRecord {
    PostingRecord {
        id: id.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        location: "Remote".to_string(),
        job_type: JobType::FullTime,
        salary: None,
        status,
        applications,
        posted_date: date("2024-01-10"),
        deadline: None,
    }
}

pub fn event(
    id: &str,
    title: &str,
    event_type: EventType,
    is_virtual: bool,
    status: Option<EventStatus>,
) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        title: title.to_string(),
        event_type,
        date: date("2024-02-15"),
        start_time: "10:00 AM".to_string(),
        end_time: "4:00 PM".to_string(),
        is_virtual,
        location: "University Center".to_string(),
        link: None,
        host: "Career Services".to_string(),
        attendees: 0,
        description: "Meet recruiters and alumni.".to_string(),
        status,
        registrations: None,
        max_attendees: None,
    }
}

pub fn course(
    id: &str,
    title: &str,
    instructor: &str,
    category: &str,
    level: CourseLevel,
    price: u32,
    enrolled: bool,
) -> CourseRecord {
    CourseRecord {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        category: category.to_string(),
        level,
        duration: "8 weeks".to_string(),
        rating: 4.5,
        enrolled_count: 100,
        price,
        lessons: 20,
        enrolled,
        description: "Hands-on lessons with projects.".to_string(),
    }
}

pub fn user(id: &str, name: &str, role: UserRole, status: UserStatus) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email(name),
        role,
        status,
        last_active: date("2025-06-12"),
        joined_date: date("2025-01-15"),
        profile_complete: true,
    }
}

pub fn candidate(
    id: &str,
    name: &str,
    position: &str,
    skills: &[&str],
    status: CandidateStatus,
) -> CandidateRecord {
    CandidateRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email(name),
        position: position.to_string(),
        location: "New York, NY".to_string(),
        education: None,
        experience: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        status,
        applied_date: date("2024-01-15"),
        rating: 4.0,
    }
}

pub fn student(id: &str, name: &str, course: &str, status: StudentStatus) -> StudentRecord {
    StudentRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email(name),
        phone: None,
        course: course.to_string(),
        year: "3rd Year".to_string(),
        status,
        last_consultation: None,
    }
}

pub fn appointment(
    id: &str,
    student_name: &str,
    on: &str,
    status: AppointmentStatus,
) -> AppointmentRecord {
    AppointmentRecord {
        id: id.to_string(),
        student_name: student_name.to_string(),
        student_email: email(student_name),
        date: date(on),
        time: "10:00".to_string(),
        appointment_type: AppointmentType::CareerGuidance,
        status,
        notes: None,
    }
}

pub fn consultation(
    id: &str,
    student_name: &str,
    topic: &str,
    category: ConsultationCategory,
    status: ConsultationStatus,
    priority: Priority,
) -> ConsultationRecord {
    ConsultationRecord {
        id: id.to_string(),
        student_name: student_name.to_string(),
        student_email: email(student_name),
        topic: topic.to_string(),
        category,
        status,
        priority,
        created_at: date("2025-06-10"),
        last_updated: date("2025-06-12"),
        messages: 3,
    }
}

pub fn content(
    id: &str,
    title: &str,
    content_type: ContentType,
    status: ContentStatus,
    author: &str,
    views: u64,
    featured: bool,
) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        title: title.to_string(),
        content_type,
        category: ContentCategory::CareerGuidance,
        status,
        author: author.to_string(),
        created_at: date("2025-06-01"),
        last_modified: date("2025-06-10"),
        views,
        featured,
    }
}

pub fn sample(period: &str, users: u32, jobs: u32, applications: u32, consultations: u32) -> AnalyticsSample {
    AnalyticsSample {
        period: date(period),
        users,
        jobs,
        applications,
        consultations,
    }
}
