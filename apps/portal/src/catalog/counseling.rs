use crate::filter::{owned, text, FilterConfig, Listing};
use crate::models::{AppointmentRecord, ConsultationRecord, ListingKind};

impl Listing for AppointmentRecord {
    const KIND: ListingKind = ListingKind::Appointments;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("student", |a| text(&a.student_name))
            .search("email", |a| text(&a.student_email))
            .category("status", |a| text(a.status.as_str()))
            .category("type", |a| text(a.appointment_type.as_str()))
            .category("date", |a| owned(a.date))
            .build()
    }
}

impl Listing for ConsultationRecord {
    const KIND: ListingKind = ListingKind::Consultations;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("student", |c| text(&c.student_name))
            .search("topic", |c| text(&c.topic))
            .category("status", |c| text(c.status.as_str()))
            .category("category", |c| text(c.category.as_str()))
            .category("priority", |c| text(c.priority.as_str()))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{appointment, consultation};
    use crate::filter::ListingQuery;
    use crate::models::{AppointmentStatus, ConsultationCategory, ConsultationStatus, Priority};

    #[test]
    fn test_appointment_date_selection() {
        let records = vec![
            appointment("1", "Alice Johnson", "2025-06-15", AppointmentStatus::Scheduled),
            appointment("2", "Bob Smith", "2025-06-15", AppointmentStatus::Scheduled),
            appointment("3", "Carol Davis", "2025-06-14", AppointmentStatus::Completed),
        ];
        let cfg = AppointmentRecord::filter_config();
        let q = ListingQuery::new().with_selection("date", "2025-06-15");
        assert_eq!(cfg.apply(&records, &q).len(), 2);

        let q = ListingQuery::new()
            .with_selection("date", "2025-06-15")
            .with_text("BOB");
        let found = cfg.apply(&records, &q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");

        assert_eq!(cfg.options(&records, "date"), vec!["2025-06-14", "2025-06-15"]);
    }

    #[test]
    fn test_consultation_status_and_category() {
        let records = vec![
            consultation("1", "Alice Johnson", "Career transition to Data Science", ConsultationCategory::CareerGuidance, ConsultationStatus::Active, Priority::High),
            consultation("2", "Bob Smith", "Resume optimization", ConsultationCategory::JobSearch, ConsultationStatus::Pending, Priority::Medium),
            consultation("3", "Carol Davis", "Course selection", ConsultationCategory::Academic, ConsultationStatus::Resolved, Priority::Low),
        ];
        let cfg = ConsultationRecord::filter_config();
        let q = ListingQuery::new()
            .with_selection("status", "pending")
            .with_selection("category", "job-search");
        assert_eq!(cfg.apply(&records, &q).len(), 1);

        let q = ListingQuery::new().with_text("data science");
        assert_eq!(cfg.apply(&records, &q)[0].id, "1");
    }
}
