//! Portfolio filter controls.
//!
//! One declarative control set bound to the page's `PortfolioQuery`
//! signal, rendered by two thin adapters: an inline sidebar on wide
//! viewports and an overlay drawer on narrow ones. Only one adapter is
//! mounted at a time, so the controls never duplicate state.

use std::fmt::Display;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::data;
use crate::filters::{PortfolioQuery, SortKey};
use crate::hooks;
use crate::types::DomainStatus;

fn parse_bound<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

fn bound_value<T: Display>(bound: Option<T>) -> String {
    bound.map(|v| v.to_string()).unwrap_or_default()
}

/// The shared control set: optional sort select, TLD and category
/// checkboxes, status radios, and the three range inputs.
#[component]
pub fn FilterControls(
    query: Signal<PortfolioQuery>,
    tld_options: Vec<String>,
    show_sort: bool,
) -> Element {
    let mut query = query;
    let filters = query.read().filters.clone();
    let sort = query.read().sort;

    rsx! {
        div {
            class: "grid gap-6",

            if show_sort {
                section {
                    h3 { class: "text-sm font-semibold text-gray-900 mb-2", "Sort" }
                    select {
                        class: "w-full px-3 py-2 border border-gray-300 rounded-lg text-sm",
                        value: "{sort.as_str()}",
                        onchange: move |e| query.write().set_sort(SortKey::from_param(&e.value())),
                        for key in SortKey::variants() {
                            option { value: "{key.as_str()}", "{key.label()}" }
                        }
                    }
                }
            }

            // TLD
            section {
                h3 { class: "text-sm font-semibold text-gray-900 mb-2", "TLD" }
                div {
                    class: "grid gap-1.5",
                    for tld in tld_options {
                        label {
                            class: "flex items-center gap-2 text-sm text-gray-700 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                checked: filters.tlds.iter().any(|t| *t == tld),
                                onchange: {
                                    let tld = tld.clone();
                                    move |_| query.write().filters.toggle_tld(&tld)
                                },
                            }
                            span { "{tld}" }
                        }
                    }
                }
            }

            // Categories
            section {
                h3 { class: "text-sm font-semibold text-gray-900 mb-2", "Categories" }
                div {
                    class: "grid gap-1.5",
                    for category in data::categories() {
                        label {
                            class: "flex items-center gap-2 text-sm text-gray-700 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                checked: filters.categories.iter().any(|c| *c == category.slug),
                                onchange: move |_| query.write().filters.toggle_category(&category.slug),
                            }
                            span { "{category.name}" }
                        }
                    }
                }
            }

            // Status
            section {
                h3 { class: "text-sm font-semibold text-gray-900 mb-2", "Status" }
                div {
                    class: "grid gap-1.5",
                    for status in DomainStatus::variants() {
                        label {
                            class: "flex items-center gap-2 text-sm text-gray-700 cursor-pointer",
                            input {
                                r#type: "radio",
                                name: "status",
                                checked: filters.status == status.as_str(),
                                onchange: move |_| query.write().filters.set_status(status.as_str()),
                            }
                            span { "{status.label()}" }
                        }
                    }
                    label {
                        class: "flex items-center gap-2 text-sm text-gray-700 cursor-pointer",
                        input {
                            r#type: "radio",
                            name: "status",
                            checked: filters.status.is_empty(),
                            onchange: move |_| query.write().filters.set_status(""),
                        }
                        span { "Any" }
                    }
                }
            }

            // Length
            section {
                h3 { class: "text-sm font-semibold text-gray-900 mb-2", "Length" }
                div {
                    class: "grid grid-cols-2 gap-2",
                    input {
                        r#type: "number",
                        placeholder: "Min",
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                        value: bound_value(filters.length.0),
                        oninput: move |e| {
                            let max = query.peek().filters.length.1;
                            query.write().filters.set_length_range(parse_bound(&e.value()), max);
                        },
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max",
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                        value: bound_value(filters.length.1),
                        oninput: move |e| {
                            let min = query.peek().filters.length.0;
                            query.write().filters.set_length_range(min, parse_bound(&e.value()));
                        },
                    }
                }
            }

            // Price
            section {
                h3 { class: "text-sm font-semibold text-gray-900 mb-2", "Price ($)" }
                div {
                    class: "grid grid-cols-2 gap-2",
                    input {
                        r#type: "number",
                        placeholder: "Min",
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                        value: bound_value(filters.price.0),
                        oninput: move |e| {
                            let max = query.peek().filters.price.1;
                            query.write().filters.set_price_range(parse_bound(&e.value()), max);
                        },
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max",
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                        value: bound_value(filters.price.1),
                        oninput: move |e| {
                            let min = query.peek().filters.price.0;
                            query.write().filters.set_price_range(min, parse_bound(&e.value()));
                        },
                    }
                }
            }

            // Age
            section {
                h3 { class: "text-sm font-semibold text-gray-900 mb-2", "Age (yrs)" }
                div {
                    class: "grid grid-cols-2 gap-2",
                    input {
                        r#type: "number",
                        placeholder: "Min",
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                        value: bound_value(filters.age.0),
                        oninput: move |e| {
                            let max = query.peek().filters.age.1;
                            query.write().filters.set_age_range(parse_bound(&e.value()), max);
                        },
                    }
                    input {
                        r#type: "number",
                        placeholder: "Max",
                        class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                        value: bound_value(filters.age.1),
                        oninput: move |e| {
                            let min = query.peek().filters.age.0;
                            query.write().filters.set_age_range(min, parse_bound(&e.value()));
                        },
                    }
                }
            }
        }
    }
}

/// Inline sidebar for wide viewports. Sort stays in the results toolbar.
#[component]
pub fn FilterSidebar(query: Signal<PortfolioQuery>, tld_options: Vec<String>) -> Element {
    rsx! {
        aside {
            class: "w-64 shrink-0 border-r border-gray-100 pr-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Filters" }
            FilterControls { query, tld_options, show_sort: false }
        }
    }
}

/// Overlay drawer for narrow viewports: backdrop click closes, body
/// scroll locks while open, Reset clears filters without closing and
/// Done closes without clearing.
#[component]
pub fn FilterDrawer(
    query: Signal<PortfolioQuery>,
    open: Signal<bool>,
    tld_options: Vec<String>,
) -> Element {
    let mut query = query;
    let mut open = open;

    use_effect(move || hooks::set_scroll_lock(open()));
    use_drop(|| hooks::set_scroll_lock(false));

    if !open() {
        return rsx! {};
    }

    rsx! {
        // Backdrop
        div {
            class: "fixed inset-0 bg-black/40 z-40",
            onclick: move |_| open.set(false),
        }

        // Panel
        aside {
            role: "dialog",
            aria_modal: "true",
            aria_label: "Filters",
            class: "fixed top-0 left-0 h-full w-80 max-w-[86vw] bg-white shadow-xl z-50 flex flex-col",

            div {
                class: "flex items-center justify-between px-4 py-3 border-b border-gray-100",
                h2 { class: "text-lg font-semibold text-gray-900", "Filters" }
                button {
                    class: "w-8 h-8 rounded-lg border border-gray-200 text-gray-500 hover:text-gray-900",
                    aria_label: "Close filters",
                    onclick: move |_| open.set(false),
                    "\u{00d7}"
                }
            }

            div {
                class: "flex-1 overflow-y-auto px-4 py-4",
                FilterControls { query, tld_options, show_sort: true }
            }

            div {
                class: "grid grid-cols-2 gap-3 px-4 py-3 border-t border-gray-100",
                button {
                    class: "px-4 py-2.5 border border-gray-300 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-50",
                    onclick: move |_| query.write().reset_filters(),
                    "Reset"
                }
                button {
                    class: "px-4 py-2.5 bg-indigo-600 text-white rounded-lg text-sm font-semibold hover:bg-indigo-700",
                    onclick: move |_| open.set(false),
                    "Done"
                }
            }
        }
    }
}
