use crate::filter::{text, FilterConfig, Listing};
use crate::models::{CourseRecord, ListingKind};

impl Listing for CourseRecord {
    const KIND: ListingKind = ListingKind::Courses;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("title", |c| text(&c.title))
            .search("instructor", |c| text(&c.instructor))
            .search("description", |c| text(&c.description))
            .category("category", |c| text(&c.category))
            .category("level", |c| text(c.level.as_str()))
            .flag("enrolled", |c| c.enrolled)
            .flag("free", |c| c.is_free())
            .build()
    }
}
