use std::sync::Arc;

use tracing::debug;

use crate::filter::{FilterConfig, Listing, ListingQuery};

/// View-owned state of one listing page: the records it shows, the page's
/// filter configuration, and the query the user is editing.
///
/// Records are shared, never mutated. Every read of `visible` rescans the
/// full record set.
pub struct ListingView<R: Listing> {
    records: Arc<[R]>,
    config: FilterConfig<R>,
    query: ListingQuery,
}

impl<R: Listing> ListingView<R> {
    pub fn new(records: impl Into<Arc<[R]>>) -> Self {
        Self::with_config(records, R::filter_config())
    }

    pub fn with_config(records: impl Into<Arc<[R]>>, config: FilterConfig<R>) -> Self {
        Self {
            records: records.into(),
            config,
            query: ListingQuery::default(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn config(&self) -> &FilterConfig<R> {
        &self.config
    }

    pub fn query(&self) -> &ListingQuery {
        &self.query
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.set_text(text);
    }

    pub fn select(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.query.select(field, value);
    }

    pub fn toggle(&mut self, flag: impl Into<String>, on: bool) {
        self.query.set_flag(flag, on);
    }

    pub fn replace_query(&mut self, query: ListingQuery) {
        self.query = query;
    }

    pub fn reset(&mut self) {
        self.query.clear();
    }

    /// Records passing the current query, in source order.
    pub fn visible(&self) -> Vec<&R> {
        let visible = self.config.apply(&self.records, &self.query);
        debug!(
            listing = self.config.listing(),
            total = self.records.len(),
            visible = visible.len(),
            "listing recomputed"
        );
        visible
    }

    /// True when filters hide every record of a non-empty listing
    /// ("try adjusting your search filters").
    pub fn is_filtered_out(&self) -> bool {
        !self.records.is_empty() && self.visible().is_empty()
    }

    pub fn options(&self, field: &str) -> Vec<String> {
        self.config.options(&self.records, field)
    }
}
