//! Domain detail page: pricing, lease calculator, related listings.

use dioxus::prelude::*;

use crate::components::{DomainCard, LeaseCalculator};
use crate::data;
use crate::routes::Route;
use crate::state::use_inquiry;
use crate::types::{DomainRecord, Price};

/// Up to four other listings sharing a category with the given record.
pub fn related_domains(domain: &DomainRecord) -> Vec<&'static DomainRecord> {
    data::domains()
        .iter()
        .filter(|d| {
            d.slug != domain.slug
                && d.categories
                    .iter()
                    .any(|c| domain.categories.iter().any(|dc| dc == c))
        })
        .take(4)
        .collect()
}

#[component]
pub fn DomainDetail(slug: String) -> Element {
    let inquiry = use_inquiry();

    let Some(domain) = data::domain_by_slug(&slug) else {
        return rsx! {
            main {
                class: "max-w-7xl mx-auto px-4 py-16 text-center",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Domain Not Found" }
                p { class: "text-gray-500 mb-4", "The requested domain could not be found in our inventory." }
                Link {
                    to: Route::Portfolio {},
                    class: "text-indigo-600 hover:text-indigo-700",
                    "Return to portfolio"
                }
            }
        };
    };

    let related = related_domains(domain);
    let price_display = domain.price.display();
    let cta_domain = domain.clone();

    rsx! {
        main {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",

            // Breadcrumbs
            nav {
                aria_label: "Breadcrumb",
                class: "mb-6",
                ol {
                    class: "flex items-center gap-2 text-sm text-gray-500",
                    li {
                        Link { to: Route::Home {}, class: "hover:text-gray-900", "Home" }
                    }
                    li { aria_hidden: true, "\u{203a}" }
                    li {
                        Link { to: Route::Portfolio {}, class: "hover:text-gray-900", "Portfolio" }
                    }
                    li { aria_hidden: true, "\u{203a}" }
                    li { class: "text-gray-900", "{domain.name}" }
                }
            }

            header {
                class: "mb-6",
                h1 { class: "text-3xl sm:text-4xl font-bold text-gray-900 mb-2", "{domain.name}" }
                p { class: "text-lg text-gray-600 mb-3", "{domain.thesis_or_default()}" }
                p {
                    class: "text-sm text-gray-500",
                    "Status: "
                    strong { class: "text-gray-900", "{domain.status.label()}" }
                    " \u{00a0}|\u{00a0} Price: "
                    strong { class: "text-gray-900", "{price_display}" }
                }
            }

            div {
                class: "grid gap-8 lg:grid-cols-2",

                // Pricing & CTA
                section {
                    {match domain.price {
                        Price::Fixed(_) => rsx! {
                            button {
                                class: "w-full px-6 py-3 bg-indigo-600 text-white rounded-xl font-semibold hover:bg-indigo-700",
                                onclick: move |_| inquiry.open(cta_domain.clone()),
                                "Buy Now for {price_display}"
                            }
                        },
                        Price::Range(_, _) => rsx! {
                            button {
                                class: "w-full px-6 py-3 bg-indigo-600 text-white rounded-xl font-semibold hover:bg-indigo-700",
                                onclick: move |_| inquiry.open(cta_domain.clone()),
                                "Make an Offer"
                            }
                        },
                        Price::Poa => rsx! {
                            button {
                                class: "w-full px-6 py-3 bg-gray-900 text-white rounded-xl font-semibold hover:bg-gray-800",
                                onclick: move |_| inquiry.open(cta_domain.clone()),
                                "Contact for Pricing"
                            }
                        },
                    }}

                    if let Some(min_offer) = domain.min_offer {
                        p { class: "text-sm text-gray-500 mt-2", "Minimum offer: ${min_offer}" }
                    }

                    if let (Price::Fixed(price), Some(terms)) = (domain.price, domain.lease_terms.clone()) {
                        LeaseCalculator { price, terms }
                    }

                    p {
                        class: "text-xs text-gray-400 mt-4",
                        "All transactions are completed through a licensed escrow service."
                    }
                }

                // Facts
                section {
                    class: "rounded-xl border border-gray-200 p-5",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-3", "At a Glance" }
                    dl {
                        class: "grid grid-cols-2 gap-x-4 gap-y-2 text-sm",
                        dt { class: "text-gray-500", "TLD" }
                        dd { class: "text-gray-900", "{domain.tld}" }
                        dt { class: "text-gray-500", "Length" }
                        dd { class: "text-gray-900", "{domain.length} characters" }
                        if let Some(age) = domain.age {
                            dt { class: "text-gray-500", "Age" }
                            dd { class: "text-gray-900", "{age} years" }
                        }
                        if let Some(traffic) = domain.traffic_estimate.as_deref() {
                            dt { class: "text-gray-500", "Traffic" }
                            dd { class: "text-gray-900", "{traffic}" }
                        }
                    }
                }
            }

            // Related
            if !related.is_empty() {
                section {
                    class: "mt-12",
                    h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Related Domains" }
                    div {
                        class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-4",
                        for d in related {
                            DomainCard { key: "{d.slug}", domain: d.clone() }
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
    fn related_excludes_self_and_caps_at_four() {
        let domain = data::domain_by_slug("lumenpay-com").expect("seed record");
        let related = related_domains(domain);
        assert!(related.len() <= 4);
        assert!(related.iter().all(|d| d.slug != domain.slug));
    }

    #[test]
    fn related_share_a_category() {
        let domain = data::domain_by_slug("denverroofing-com").expect("seed record");
        for d in related_domains(domain) {
            assert!(d
                .categories
                .iter()
                .any(|c| domain.categories.iter().any(|dc| dc == c)));
        }
    }
}
