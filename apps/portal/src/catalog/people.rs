use crate::filter::{text, texts, FilterConfig, Listing};
use crate::models::{CandidateRecord, ListingKind, StudentRecord, UserRecord};

impl Listing for UserRecord {
    const KIND: ListingKind = ListingKind::Users;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("name", |u| text(&u.name))
            .search("email", |u| text(&u.email))
            .category("role", |u| text(u.role.as_str()))
            .category("status", |u| text(u.status.as_str()))
            .flag("profile-complete", |u| u.profile_complete)
            .build()
    }
}

impl Listing for CandidateRecord {
    const KIND: ListingKind = ListingKind::Candidates;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("name", |c| text(&c.name))
            .search("position", |c| text(&c.position))
            .search("skills", |c| texts(&c.skills))
            .category("status", |c| text(c.status.as_str()))
            .category("skill", |c| texts(&c.skills))
            .build()
    }
}

impl Listing for StudentRecord {
    const KIND: ListingKind = ListingKind::Students;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("name", |s| text(&s.name))
            .search("email", |s| text(&s.email))
            .search("course", |s| text(&s.course))
            .category("status", |s| text(s.status.as_str()))
            .category("year", |s| text(&s.year))
            .build()
    }
}
