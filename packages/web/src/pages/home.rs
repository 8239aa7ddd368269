//! Home page: hero, search, and curated inventory rails.

use dioxus::prelude::*;

use crate::components::{DomainCard, GlobalSearch};
use crate::data;
use crate::routes::Route;
use crate::types::{Category, DomainRecord};

/// First four listings in curated order.
fn new_arrivals() -> Vec<&'static DomainRecord> {
    data::domains().iter().take(4).collect()
}

/// Short `.com` names, seven characters or fewer.
fn short_coms() -> Vec<&'static DomainRecord> {
    data::domains()
        .iter()
        .filter(|d| d.tld == ".com" && d.length <= 7)
        .take(4)
        .collect()
}

/// One representative listing for each of the first three categories.
fn category_spotlights() -> Vec<(&'static Category, &'static DomainRecord)> {
    data::categories()
        .iter()
        .take(3)
        .filter_map(|cat| {
            data::domains()
                .iter()
                .find(|d| d.categories.iter().any(|c| *c == cat.slug))
                .map(|d| (cat, d))
        })
        .collect()
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            // Hero
            section {
                class: "bg-gradient-to-b from-indigo-50 to-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center",
                    h1 {
                        class: "text-4xl sm:text-5xl font-bold text-gray-900 mb-4",
                        "Unlock Premium Domains for Extraordinary Brands"
                    }
                    p {
                        class: "text-lg text-gray-600 mb-8 max-w-2xl mx-auto",
                        "Hoshi Vault curates the world's finest digital real estate \u{2014} short, memorable names ready to power your next venture."
                    }
                    div {
                        class: "flex items-center justify-center gap-3 flex-wrap",
                        Link {
                            to: Route::Portfolio {},
                            class: "px-6 py-3 bg-indigo-600 text-white rounded-xl font-medium hover:bg-indigo-700 transition-colors",
                            "Explore Portfolio"
                        }
                        Link {
                            to: Route::Leasing {},
                            class: "px-6 py-3 border border-indigo-600 text-indigo-600 rounded-xl font-medium hover:bg-indigo-50 transition-colors",
                            "Lease a Domain"
                        }
                    }
                }
            }

            // Search
            section {
                class: "max-w-3xl mx-auto px-4 py-10",
                h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Search the Vault" }
                GlobalSearch {}
            }

            // New arrivals
            section {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                h2 { class: "text-xl font-semibold text-gray-900 mb-4", "New Arrivals" }
                div {
                    class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                    for domain in new_arrivals() {
                        DomainCard { key: "{domain.slug}", domain: domain.clone() }
                    }
                }
            }

            // Short .coms
            section {
                class: "bg-gray-50 py-8",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                    div {
                        class: "flex items-center justify-between mb-4",
                        h2 { class: "text-xl font-semibold text-gray-900", "Short .coms" }
                        Link {
                            to: Route::PortfolioShort {},
                            class: "text-sm text-indigo-600 hover:text-indigo-700",
                            "View all \u{2192}"
                        }
                    }
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                        for domain in short_coms() {
                            DomainCard { key: "{domain.slug}", domain: domain.clone() }
                        }
                    }
                }
            }

            // Category spotlights
            section {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Category Spotlights" }
                div {
                    class: "grid gap-6 sm:grid-cols-3",
                    for (category, domain) in category_spotlights() {
                        div {
                            key: "{category.slug}",
                            class: "rounded-xl border border-gray-200 p-5",
                            Link {
                                to: Route::CategoryDetail { slug: category.slug.clone() },
                                class: "text-lg font-semibold text-gray-900 hover:text-indigo-600",
                                "{category.name}"
                            }
                            p { class: "text-sm text-gray-500 mt-1 mb-4", "{category.description}" }
                            DomainCard { domain: domain.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rails_respect_their_caps() {
        assert!(new_arrivals().len() <= 4);
        assert!(short_coms().len() <= 4);
        assert!(category_spotlights().len() <= 3);
    }

    #[test]
    fn short_coms_are_short_and_com() {
        for d in short_coms() {
            assert_eq!(d.tld, ".com");
            assert!(d.length <= 7);
        }
    }

    #[test]
    fn spotlights_pair_categories_with_members() {
        for (category, domain) in category_spotlights() {
            assert!(domain.categories.iter().any(|c| *c == category.slug));
        }
    }
}
