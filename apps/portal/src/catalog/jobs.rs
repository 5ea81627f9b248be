use crate::filter::{text, texts, FilterConfig, Listing};
use crate::models::{CompanyRecord, JobRecord, ListingKind, PostingRecord};

impl Listing for JobRecord {
    const KIND: ListingKind = ListingKind::Jobs;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("title", |j| text(&j.title))
            .search("company", |j| text(&j.company.name))
            .search("description", |j| text(&j.description))
            .category("type", |j| text(j.job_type.as_str()))
            .category("company", |j| text(&j.company.name))
            .category("location", |j| text(&j.location))
            .category("tag", |j| texts(&j.tags))
            .build()
    }
}

impl Listing for CompanyRecord {
    const KIND: ListingKind = ListingKind::Companies;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("name", |c| text(&c.name))
            .search("description", |c| text(&c.description))
            .category("industry", |c| texts(&c.industry))
            .category("location", |c| text(&c.location))
            .build()
    }
}

impl Listing for PostingRecord {
    const KIND: ListingKind = ListingKind::Postings;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("title", |p| text(&p.title))
            .search("department", |p| text(&p.department))
            .category("status", |p| text(p.status.as_str()))
            .category("type", |p| text(p.job_type.as_str()))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{company, job, posting};
    use crate::filter::ListingQuery;
    use crate::models::{JobType, PostingStatus};

    fn jobs() -> Vec<JobRecord> {
        vec![
            job("1", "Software Developer", "TechVision", JobType::FullTime),
            job("2", "Product Manager", "InnovateCorp", JobType::FullTime),
            job("3", "junior engineer", "DataFlow", JobType::Internship),
            job("4", "UX Designer", "TechVision", JobType::Contract),
            job("5", "PLATFORM ENGINEER", "CloudNine", JobType::PartTime),
        ]
    }

    fn found_ids(records: &[JobRecord], query: &ListingQuery) -> Vec<String> {
        JobRecord::filter_config()
            .apply(records, query)
            .into_iter()
            .map(|j| j.id.clone())
            .collect()
    }

    #[test]
    fn test_engineer_search_keeps_case_variants_in_order() {
        let q = ListingQuery::new().with_text("engineer");
        assert_eq!(found_ids(&jobs(), &q), vec!["3", "5"]);
    }

    #[test]
    fn test_search_matches_company_name() {
        let q = ListingQuery::new().with_text("techvision");
        assert_eq!(found_ids(&jobs(), &q), vec!["1", "4"]);
    }

    #[test]
    fn test_type_and_company_dropdowns() {
        let q = ListingQuery::new()
            .with_selection("type", "full-time")
            .with_selection("company", "TechVision");
        assert_eq!(found_ids(&jobs(), &q), vec!["1"]);
    }

    #[test]
    fn test_job_type_options() {
        let options = JobRecord::filter_config().options(&jobs(), "type");
        assert_eq!(options, vec!["contract", "full-time", "internship", "part-time"]);
    }

    #[test]
    fn test_company_industry_options_dedup() {
        let records = vec![
            company("1", "TechVision", &["Tech"]),
            company("2", "Ledger & Co", &["Finance"]),
            company("3", "CloudNine", &["Tech"]),
        ];
        let options = CompanyRecord::filter_config().options(&records, "industry");
        assert_eq!(options, vec!["Finance", "Tech"]);
    }

    #[test]
    fn test_company_industry_selection_is_membership() {
        let records = vec![
            company("1", "TechVision", &["Tech", "AI"]),
            company("2", "Ledger & Co", &["Finance"]),
        ];
        let q = ListingQuery::new().with_selection("industry", "AI");
        let found = CompanyRecord::filter_config().apply(&records, &q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), "1");
    }

    #[test]
    fn test_posting_status_filter() {
        let records = vec![
            posting("1", "Senior Software Engineer", "Engineering", PostingStatus::Active, 45),
            posting("2", "Product Manager", "Product", PostingStatus::Active, 32),
            posting("3", "Marketing Intern", "Marketing", PostingStatus::Draft, 0),
        ];
        let q = ListingQuery::new().with_selection("status", "draft");
        let found = PostingRecord::filter_config().apply(&records, &q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Marketing Intern");

        let q = ListingQuery::new().with_text("engineering");
        assert_eq!(PostingRecord::filter_config().apply(&records, &q).len(), 1);
    }
}
