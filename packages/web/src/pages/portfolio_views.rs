//! Saved portfolio views: curated slices of the inventory with stable
//! URLs, linked from the home page and marketing material.

use dioxus::prelude::*;

use crate::components::DomainCard;
use crate::data;
use crate::types::{DomainRecord, Price};

/// Ultra-short names: label of six characters or fewer.
pub fn short_picks() -> Vec<&'static DomainRecord> {
    data::domains().iter().filter(|d| d.length <= 6).collect()
}

/// High-value names: fixed price or range low of $7,000+. Undisclosed
/// prices do not qualify.
pub fn premium_picks() -> Vec<&'static DomainRecord> {
    data::domains()
        .iter()
        .filter(|d| match d.price {
            Price::Fixed(value) => value >= 7000,
            Price::Range(low, _) => low >= 7000,
            Price::Poa => false,
        })
        .collect()
}

/// Members of the brandable category.
pub fn brandable_picks() -> Vec<&'static DomainRecord> {
    data::domains_in_category("brandable")
}

/// Members of the geo category.
pub fn geo_picks() -> Vec<&'static DomainRecord> {
    data::domains_in_category("geo")
}

#[derive(Props, Clone, PartialEq)]
struct SavedViewProps {
    title: &'static str,
    intro: &'static str,
    domains: Vec<DomainRecord>,
}

#[component]
fn SavedView(props: SavedViewProps) -> Element {
    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{props.title}" }
            p { class: "text-gray-600 mb-6", "{props.intro}" }
            if props.domains.is_empty() {
                p { class: "text-gray-500 py-8", "Nothing in this view right now." }
            } else {
                div {
                    class: "grid gap-6 sm:grid-cols-2 xl:grid-cols-3",
                    for domain in props.domains.iter() {
                        DomainCard { key: "{domain.slug}", domain: domain.clone() }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PortfolioShort() -> Element {
    rsx! {
        SavedView {
            title: "Short Domains",
            intro: "Ultra-short names for maximum impact.",
            domains: short_picks().into_iter().cloned().collect::<Vec<_>>(),
        }
    }
}

#[component]
pub fn PortfolioPremium() -> Element {
    rsx! {
        SavedView {
            title: "Premium Domains",
            intro: "Our highest-value names, available for strategic acquisitions.",
            domains: premium_picks().into_iter().cloned().collect::<Vec<_>>(),
        }
    }
}

#[component]
pub fn PortfolioBrandable() -> Element {
    rsx! {
        SavedView {
            title: "Brandable Domains",
            intro: "Invented, memorable names ready to become brands.",
            domains: brandable_picks().into_iter().cloned().collect::<Vec<_>>(),
        }
    }
}

#[component]
pub fn PortfolioGeo() -> Element {
    rsx! {
        SavedView {
            title: "Geo Domains",
            intro: "City and region names with built-in local intent.",
            domains: geo_picks().into_iter().cloned().collect::<Vec<_>>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_picks_are_six_chars_or_fewer() {
        let picks = short_picks();
        assert!(!picks.is_empty());
        assert!(picks.iter().all(|d| d.length <= 6));
    }

    #[test]
    fn premium_picks_disclose_a_qualifying_price() {
        let picks = premium_picks();
        assert!(!picks.is_empty());
        for d in &picks {
            match d.price {
                Price::Fixed(value) => assert!(value >= 7000),
                Price::Range(low, _) => assert!(low >= 7000),
                Price::Poa => panic!("{} has no disclosed price", d.name),
            }
        }
    }

    #[test]
    fn category_views_only_contain_members() {
        assert!(brandable_picks()
            .iter()
            .all(|d| d.categories.iter().any(|c| c == "brandable")));
        assert!(geo_picks()
            .iter()
            .all(|d| d.categories.iter().any(|c| c == "geo")));
    }
}
