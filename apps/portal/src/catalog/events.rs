use crate::filter::{maybe_text, text, FilterConfig, Listing};
use crate::models::{EventRecord, ListingKind};

impl Listing for EventRecord {
    const KIND: ListingKind = ListingKind::Events;

    fn id(&self) -> &str {
        &self.id
    }

    fn filter_config() -> FilterConfig<Self> {
        FilterConfig::<Self>::builder(Self::KIND.as_str())
            .search("title", |e| text(&e.title))
            .search("description", |e| text(&e.description))
            .search("host", |e| text(&e.host))
            .category("type", |e| text(e.event_type.as_str()))
            .category("status", |e| maybe_text(e.status.map(|s| s.as_str())))
            .flag("virtual", |e| e.is_virtual)
            .build()
    }
}
