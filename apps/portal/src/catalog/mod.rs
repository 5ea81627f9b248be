// Listing configurations, one per record kind.
// Each mirrors the search box, dropdowns and toggles of its page.

pub mod content;
pub mod counseling;
pub mod courses;
pub mod events;
pub mod jobs;
pub mod people;

#[cfg(test)]
pub(crate) mod fixtures;
