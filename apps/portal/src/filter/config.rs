use std::borrow::Cow;
use std::fmt;

use crate::errors::PortalError;
use crate::filter::query::{is_wildcard, ListingQuery};
use crate::metrics::distinct_sorted_values;

/// Values a record exposes for one field. Empty means the field is absent.
pub type FieldValues<'a> = Vec<Cow<'a, str>>;

pub type ValueAccessor<R> = for<'a> fn(&'a R) -> FieldValues<'a>;
pub type FlagAccessor<R> = fn(&R) -> bool;

struct NamedField<A> {
    name: &'static str,
    accessor: A,
}

/// Per-kind filter configuration: which fields the search box scans,
/// which fields have dropdowns, and which boolean toggles exist.
///
/// `apply` is total. Matching rules:
/// - search text: case-insensitive substring, OR'd across searchable fields
/// - selection: exact match, any value of a multi-valued field may match
/// - flag: the record's flag must be set
/// - all active predicates are ANDed; order of input is preserved
pub struct FilterConfig<R> {
    listing: &'static str,
    searchable: Vec<NamedField<ValueAccessor<R>>>,
    categories: Vec<NamedField<ValueAccessor<R>>>,
    flags: Vec<NamedField<FlagAccessor<R>>>,
}

pub struct FilterConfigBuilder<R> {
    config: FilterConfig<R>,
}

impl<R> FilterConfig<R> {
    pub fn builder(listing: &'static str) -> FilterConfigBuilder<R> {
        FilterConfigBuilder {
            config: FilterConfig {
                listing,
                searchable: Vec::new(),
                categories: Vec::new(),
                flags: Vec::new(),
            },
        }
    }

    pub fn listing(&self) -> &'static str {
        self.listing
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.searchable.iter().map(|f| f.name)
    }

    pub fn category_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|f| f.name)
    }

    pub fn flag_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.flags.iter().map(|f| f.name)
    }

    /// Stable filter over `records`. Never clones or mutates a record.
    pub fn apply<'a>(&self, records: &'a [R], query: &ListingQuery) -> Vec<&'a R> {
        if query.is_identity() {
            return records.iter().collect();
        }
        let needle = query.text.to_lowercase();
        records
            .iter()
            .filter(|r| self.matches_lowered(r, &needle, query))
            .collect()
    }

    pub fn matches(&self, record: &R, query: &ListingQuery) -> bool {
        self.matches_lowered(record, &query.text.to_lowercase(), query)
    }

    fn matches_lowered(&self, record: &R, needle: &str, query: &ListingQuery) -> bool {
        self.matches_text(record, needle)
            && query
                .selections
                .iter()
                .all(|(field, value)| self.matches_selection(record, field, value))
            && query.flags.iter().all(|flag| self.matches_flag(record, flag))
    }

    fn matches_text(&self, record: &R, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.searchable.iter().any(|field| {
            (field.accessor)(record)
                .iter()
                .any(|v| v.to_lowercase().contains(needle))
        })
    }

    // An undeclared field cannot be evaluated, so it matches nothing.
    fn matches_selection(&self, record: &R, field: &str, value: &str) -> bool {
        if is_wildcard(value) {
            return true;
        }
        match self.category(field) {
            Some(accessor) => accessor(record).iter().any(|v| v == value),
            None => false,
        }
    }

    fn matches_flag(&self, record: &R, flag: &str) -> bool {
        self.flags
            .iter()
            .find(|f| f.name == flag)
            .map(|f| (f.accessor)(record))
            .unwrap_or(false)
    }

    fn category(&self, field: &str) -> Option<ValueAccessor<R>> {
        self.categories
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.accessor)
    }

    /// Dropdown options for a categorical field: distinct values, ascending.
    /// Undeclared fields have no options.
    pub fn options(&self, records: &[R], field: &str) -> Vec<String> {
        match self.category(field) {
            Some(accessor) => distinct_sorted_values(records, accessor),
            None => Vec::new(),
        }
    }

    /// Checks that `query` only names fields this listing declares.
    pub fn validate(&self, query: &ListingQuery) -> Result<(), PortalError> {
        if !query.text.is_empty() && self.searchable.is_empty() {
            return Err(PortalError::NotSearchable(self.listing));
        }
        for field in query.selections.keys() {
            if self.category(field).is_none() {
                return Err(PortalError::UndeclaredField {
                    listing: self.listing,
                    field: field.clone(),
                });
            }
        }
        for flag in &query.flags {
            if !self.flags.iter().any(|f| f.name == flag.as_str()) {
                return Err(PortalError::UndeclaredField {
                    listing: self.listing,
                    field: flag.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<R> fmt::Debug for FilterConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterConfig")
            .field("listing", &self.listing)
            .field("searchable", &self.searchable_fields().collect::<Vec<_>>())
            .field("categories", &self.category_fields().collect::<Vec<_>>())
            .field("flags", &self.flag_fields().collect::<Vec<_>>())
            .finish()
    }
}

impl<R> FilterConfigBuilder<R> {
    /// Adds a field scanned by the free-text search.
    pub fn search(mut self, name: &'static str, accessor: ValueAccessor<R>) -> Self {
        self.config.searchable.push(NamedField { name, accessor });
        self
    }

    /// Adds a dropdown field matched by exact equality.
    pub fn category(mut self, name: &'static str, accessor: ValueAccessor<R>) -> Self {
        self.config.categories.push(NamedField { name, accessor });
        self
    }

    /// Adds a boolean toggle; when switched on only records with the flag pass.
    pub fn flag(mut self, name: &'static str, accessor: FlagAccessor<R>) -> Self {
        self.config.flags.push(NamedField { name, accessor });
        self
    }

    pub fn build(self) -> FilterConfig<R> {
        self.config
    }
}
