//! Filtering and derived metrics for the career portal's listing pages.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod filter;
pub mod metrics;
pub mod models;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod summary;
