use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::filter::ListingQuery;
use crate::models::ListingKind;

/// Snapshot configuration loaded from environment variables.
/// Every variable is optional; defaults render the full job board from seed data.
#[derive(Debug, Clone)]
pub struct Config {
    /// Dataset document on disk; the embedded seed data when unset.
    pub dataset_path: Option<PathBuf>,
    pub listing: ListingKind,
    pub query: ListingQuery,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listing = lookup("PORTAL_LISTING")
            .unwrap_or_else(|| "jobs".to_string())
            .parse::<ListingKind>()
            .context("PORTAL_LISTING must name a known listing")?;

        let mut query = ListingQuery::new().with_text(lookup("PORTAL_QUERY").unwrap_or_default());
        if let Some(raw) = lookup("PORTAL_FILTERS") {
            for (field, value) in parse_selections(&raw)? {
                query.select(field, value);
            }
        }
        if let Some(raw) = lookup("PORTAL_FLAGS") {
            for flag in split_list(&raw) {
                query.set_flag(flag, true);
            }
        }

        Ok(Config {
            dataset_path: lookup("PORTAL_DATASET")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            listing,
            query,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Parses `field=value,field=value`.
fn parse_selections(raw: &str) -> Result<Vec<(String, String)>> {
    split_list(raw)
        .map(|pair| {
            let (field, value) = pair
                .split_once('=')
                .with_context(|| format!("PORTAL_FILTERS entry '{pair}' must be field=value"))?;
            Ok((field.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listing, ListingKind::Jobs);
        assert!(config.query.is_identity());
        assert!(config.dataset_path.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_full_query_from_env() {
        let config = config_from(&[
            ("PORTAL_LISTING", "events"),
            ("PORTAL_QUERY", "fair"),
            ("PORTAL_FILTERS", "type=career-fair, status = upcoming"),
            ("PORTAL_FLAGS", "virtual,"),
            ("PORTAL_DATASET", "/tmp/portal.json"),
        ])
        .unwrap();
        assert_eq!(config.listing, ListingKind::Events);
        assert_eq!(config.query.text, "fair");
        assert_eq!(config.query.selections["type"], "career-fair");
        assert_eq!(config.query.selections["status"], "upcoming");
        assert!(config.query.flags.contains("virtual"));
        assert_eq!(config.dataset_path, Some(PathBuf::from("/tmp/portal.json")));
    }

    #[test]
    fn test_wildcard_filter_is_dropped() {
        let config = config_from(&[("PORTAL_FILTERS", "status=all")]).unwrap();
        assert!(config.query.selections.is_empty());
    }

    #[test]
    fn test_unknown_listing_is_an_error() {
        let err = config_from(&[("PORTAL_LISTING", "podcasts")]).unwrap_err();
        assert!(err.to_string().contains("PORTAL_LISTING"));
    }

    #[test]
    fn test_malformed_filter_is_an_error() {
        assert!(config_from(&[("PORTAL_FILTERS", "status")]).is_err());
    }

    #[test]
    fn test_blank_dataset_path_means_seed() {
        let config = config_from(&[("PORTAL_DATASET", "  ")]).unwrap();
        assert!(config.dataset_path.is_none());
    }
}
