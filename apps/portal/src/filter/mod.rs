// Listing filter engine.
// One configurable, shape-agnostic filter shared by every listing page.
// Pure and synchronous: callers rescan the full record set on each change.

pub mod config;
pub mod query;

pub use config::{FieldValues, FilterConfig, FilterConfigBuilder, FlagAccessor, ValueAccessor};
pub use query::{is_wildcard, ListingQuery, WILDCARD};

use std::borrow::Cow;

use crate::models::ListingKind;

/// A record kind that can be shown on a filterable listing page.
pub trait Listing: Sized {
    const KIND: ListingKind;

    fn id(&self) -> &str;

    /// Searchable, categorical and flag fields of this record kind.
    fn filter_config() -> FilterConfig<Self>;
}

/// Single borrowed value.
pub fn text(value: &str) -> FieldValues<'_> {
    vec![Cow::Borrowed(value)]
}

/// Optional value; `None` yields no values and so never matches.
pub fn maybe_text(value: Option<&str>) -> FieldValues<'_> {
    value.map(text).unwrap_or_default()
}

/// Multi-valued field (tags, skills, industries).
pub fn texts(values: &[String]) -> FieldValues<'_> {
    values.iter().map(|v| Cow::Borrowed(v.as_str())).collect()
}

/// Value that has to be rendered first, e.g. a date.
pub fn owned(value: impl ToString) -> FieldValues<'static> {
    vec![Cow::Owned(value.to_string())]
}
