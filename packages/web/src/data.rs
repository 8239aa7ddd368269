//! Embedded catalog datasets.
//!
//! The site ships its inventory inside the binary: the JSON files under
//! `data/` are parsed once on first access and cached for the life of
//! the process. A malformed dataset is a packaging defect, not a user
//! error — it is logged and the affected list renders empty rather than
//! taking the site down.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::types::{Category, DomainRecord, Insight};

const DOMAINS_JSON: &str = include_str!("../data/domains.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const INSIGHTS_JSON: &str = include_str!("../data/insights.json");

/// Error raised when an embedded dataset fails to parse.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("malformed embedded dataset `{name}`: {source}")]
    Malformed {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn parse<T: DeserializeOwned>(raw: &str, name: &'static str) -> Result<Vec<T>, DataError> {
    serde_json::from_str(raw).map_err(|source| DataError::Malformed { name, source })
}

fn load<T: DeserializeOwned>(raw: &str, name: &'static str) -> Vec<T> {
    match parse(raw, name) {
        Ok(records) => {
            tracing::debug!(dataset = name, count = records.len(), "dataset loaded");
            records
        }
        Err(err) => {
            tracing::error!(dataset = name, error = %err, "dataset failed to parse");
            Vec::new()
        }
    }
}

/// The full domain inventory, in curated source order.
pub fn domains() -> &'static [DomainRecord] {
    static DOMAINS: OnceLock<Vec<DomainRecord>> = OnceLock::new();
    DOMAINS.get_or_init(|| load(DOMAINS_JSON, "domains"))
}

/// Category descriptors for filter options and category pages.
pub fn categories() -> &'static [Category] {
    static CATEGORIES: OnceLock<Vec<Category>> = OnceLock::new();
    CATEGORIES.get_or_init(|| load(CATEGORIES_JSON, "categories"))
}

/// Editorial articles for the insights section.
pub fn insights() -> &'static [Insight] {
    static INSIGHTS: OnceLock<Vec<Insight>> = OnceLock::new();
    INSIGHTS.get_or_init(|| load(INSIGHTS_JSON, "insights"))
}

pub fn domain_by_slug(slug: &str) -> Option<&'static DomainRecord> {
    domains().iter().find(|d| d.slug == slug)
}

pub fn category_by_slug(slug: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.slug == slug)
}

pub fn insight_by_slug(slug: &str) -> Option<&'static Insight> {
    insights().iter().find(|i| i.slug == slug)
}

/// Unique TLDs present in the inventory, sorted, for the TLD filter
/// options.
pub fn tld_options() -> Vec<String> {
    domains()
        .iter()
        .map(|d| d.tld.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Domains belonging to the given category, in source order.
pub fn domains_in_category(slug: &str) -> Vec<&'static DomainRecord> {
    domains()
        .iter()
        .filter(|d| d.categories.iter().any(|c| c == slug))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_datasets_parse() {
        assert!(parse::<DomainRecord>(DOMAINS_JSON, "domains").is_ok());
        assert!(parse::<Category>(CATEGORIES_JSON, "categories").is_ok());
        assert!(parse::<Insight>(INSIGHTS_JSON, "insights").is_ok());
        assert!(!domains().is_empty());
        assert!(!categories().is_empty());
        assert!(!insights().is_empty());
    }

    #[test]
    fn slugs_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for d in domains() {
            assert!(seen.insert(&d.slug), "duplicate domain slug {}", d.slug);
        }
    }

    #[test]
    fn length_matches_the_label() {
        for d in domains() {
            let label = d.name.split('.').next().unwrap_or_default();
            assert_eq!(
                d.length as usize,
                label.chars().count(),
                "length mismatch for {}",
                d.name
            );
            assert!(
                d.name.ends_with(&d.tld),
                "tld mismatch for {}",
                d.name
            );
        }
    }

    #[test]
    fn record_categories_resolve() {
        for d in domains() {
            for slug in &d.categories {
                assert!(
                    category_by_slug(slug).is_some(),
                    "{} references unknown category {}",
                    d.name,
                    slug
                );
            }
        }
    }

    #[test]
    fn tld_options_are_sorted_and_unique() {
        let options = tld_options();
        let mut sorted = options.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(options, sorted);
        assert!(options.contains(&".com".to_string()));
    }

    #[test]
    fn malformed_json_surfaces_as_data_error() {
        let err = parse::<DomainRecord>("[{\"slug\": 1}]", "domains").unwrap_err();
        assert!(err.to_string().contains("domains"));
    }
}
