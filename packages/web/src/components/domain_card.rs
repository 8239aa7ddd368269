//! Domain listing card

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{use_compare, use_inquiry};
use crate::types::{DomainRecord, DomainStatus};

/// Props for DomainCard
#[derive(Props, Clone, PartialEq)]
pub struct DomainCardProps {
    pub domain: DomainRecord,
}

/// Card for one listing: name links to the detail page, metadata row,
/// status pill, Inquire button and a compare checkbox.
#[component]
pub fn DomainCard(props: DomainCardProps) -> Element {
    let domain = props.domain.clone();
    let compare = use_compare();
    let inquiry = use_inquiry();
    let is_selected = compare.is_selected(&domain.slug);
    let status = status_styles(domain.status);

    let compare_domain = domain.clone();
    let inquiry_domain = domain.clone();

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            // Name + status pill
            div {
                class: "flex items-start justify-between gap-2 mb-2",
                h3 {
                    class: "text-lg font-semibold text-gray-900 break-words",
                    Link {
                        to: Route::DomainDetail { slug: domain.slug.clone() },
                        class: "hover:text-indigo-600",
                        "{domain.name}"
                    }
                }
                span {
                    class: "px-2.5 py-1 rounded-full text-xs font-medium whitespace-nowrap {status.bg} {status.text}",
                    "{status.label}"
                }
            }

            // Thesis (clamped)
            p {
                class: "text-gray-600 text-sm mb-3 line-clamp-3 flex-grow",
                "{domain.thesis_or_default()}"
            }

            // Meta row
            div {
                class: "flex items-center gap-2 text-xs text-gray-500 mb-3",
                span { "{domain.tld}" }
                span { aria_hidden: true, "\u{2022}" }
                span { "{domain.length} chars" }
                span { aria_hidden: true, "\u{2022}" }
                span { class: "font-medium text-gray-700", "{domain.price.display()}" }
            }

            // Actions
            div {
                class: "mt-auto flex flex-col gap-2",
                button {
                    class: "w-full px-4 py-2.5 bg-indigo-600 text-white text-sm font-semibold rounded-lg hover:bg-indigo-700 transition-colors",
                    onclick: move |_| inquiry.open(inquiry_domain.clone()),
                    "Inquire"
                }
                label {
                    class: "inline-flex items-center gap-2 text-sm text-gray-600 cursor-pointer select-none min-h-10",
                    input {
                        r#type: "checkbox",
                        checked: is_selected,
                        onchange: move |_| {
                            if compare.is_selected(&compare_domain.slug) {
                                compare.remove(&compare_domain.slug);
                            } else {
                                compare.add(compare_domain.clone());
                            }
                        },
                    }
                    span { "Compare" }
                }
            }
        }
    }
}

struct StatusStyles {
    bg: &'static str,
    text: &'static str,
    label: &'static str,
}

fn status_styles(status: DomainStatus) -> StatusStyles {
    match status {
        DomainStatus::Buy => StatusStyles {
            bg: "bg-blue-100",
            text: "text-blue-700",
            label: "Buy",
        },
        DomainStatus::Lease => StatusStyles {
            bg: "bg-orange-100",
            text: "text-orange-700",
            label: "Lease",
        },
        DomainStatus::MakeOffer => StatusStyles {
            bg: "bg-gray-100",
            text: "text-gray-700",
            label: "Make Offer",
        },
        DomainStatus::InUse => StatusStyles {
            bg: "bg-emerald-100",
            text: "text-emerald-700",
            label: "In Use",
        },
    }
}
