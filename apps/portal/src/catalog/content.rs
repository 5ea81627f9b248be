use crate::filter::{text, FilterConfig, Listing};
use crate::models::{ContentRecord, ListingKind};

impl Listing for ContentRecord {
    const KIND: ListingKind = ListingKind::Contents;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("title", |c| text(&c.title))
            .search("author", |c| text(&c.author))
            .category("type", |c| text(c.content_type.as_str()))
            .category("status", |c| text(c.status.as_str()))
            .category("category", |c| text(c.category.as_str()))
            .flag("featured", |c| c.featured)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::content;
    use crate::filter::ListingQuery;
    use crate::models::{ContentStatus, ContentType};

    #[test]
    fn test_author_search_with_status() {
        let records = vec![
            content("1", "Writing a Winning Resume", ContentType::Article, ContentStatus::Published, "Dr. Carol Davis", 1247, true),
            content("2", "Mastering Job Interviews", ContentType::Video, ContentStatus::Published, "John Smith", 892, false),
            content("3", "Tech Career Paths", ContentType::Course, ContentStatus::Draft, "Dr. Carol Davis", 0, false),
        ];
        let cfg = ContentRecord::filter_config();
        let q = ListingQuery::new().with_text("carol").with_selection("status", "published");
        let found = cfg.apply(&records, &q);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "1");

        let q = ListingQuery::new().with_flag("featured");
        assert_eq!(cfg.apply(&records, &q).len(), 1);
    }
}
