use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Dropdown value meaning "no restriction". An empty value means the same.
pub const WILDCARD: &str = "all";

pub fn is_wildcard(value: &str) -> bool {
    value.is_empty() || value == WILDCARD
}

/// Search text, categorical selections and flag toggles of one listing view.
///
/// Wildcard selections and cleared flags are dropped rather than stored, so
/// an untouched query and a reset query compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingQuery {
    pub text: String,
    pub selections: BTreeMap<String, String>,
    pub flags: BTreeSet<String>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_selection(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.select(field, value);
        self
    }

    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.set_flag(flag, true);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn select(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        if is_wildcard(&value) {
            self.selections.remove(&field);
        } else {
            self.selections.insert(field, value);
        }
    }

    pub fn set_flag(&mut self, flag: impl Into<String>, on: bool) {
        let flag = flag.into();
        if on {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no predicate is active and filtering returns its input.
    pub fn is_identity(&self) -> bool {
        self.text.is_empty()
            && self.selections.values().all(|v| is_wildcard(v))
            && self.flags.is_empty()
    }
}
