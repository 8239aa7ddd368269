//! Portfolio page: filterable, sortable inventory with shareable URLs.
//!
//! State lives in one `PortfolioQuery` signal. On mount an effect reads
//! the current query string exactly once; after that, every change is
//! serialized back into the address bar as a shallow history
//! replacement. The derived list recomputes eagerly — it is a linear
//! scan over a small in-memory dataset.

use dioxus::prelude::*;

use crate::components::{DomainCard, FilterDrawer, FilterSidebar};
use crate::data;
use crate::filters::{derive, PortfolioQuery, SortKey};
use crate::hooks::{self, MOBILE_BREAKPOINT};

#[component]
pub fn Portfolio() -> Element {
    let mut query = use_signal(PortfolioQuery::new);
    let drawer_open = use_signal(|| false);
    let width = hooks::use_viewport_width();

    // Read the URL once per page view; runs before any write-back.
    use_effect(move || {
        if !query.peek().is_ready() {
            let raw = hooks::current_query_string();
            query.write().hydrate(&raw);
        }
    });

    // Mirror state into the address bar once hydrated.
    use_effect(move || {
        if let Some(qs) = query.read().query_string() {
            hooks::replace_query_string("/portfolio", &qs);
        }
    });

    let derived = use_memo(move || {
        let q = query.read();
        derive(data::domains(), &q.filters, q.sort)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    });

    let tld_options = data::tld_options();
    let is_mobile = width() < MOBILE_BREAKPOINT;
    let active_count = query.read().filters.active_count();
    let sort = query.read().sort;
    let result_count = derived.read().len();

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 flex gap-8",

            if !is_mobile {
                FilterSidebar { query, tld_options: tld_options.clone() }
            }

            section {
                class: "flex-1 min-w-0",

                // Toolbar
                div {
                    class: "flex items-center justify-between gap-3 mb-6 flex-wrap",
                    h2 {
                        class: "text-xl font-semibold text-gray-900",
                        "Domains ({result_count})"
                    }
                    div {
                        class: "flex items-center gap-3",
                        if is_mobile {
                            {
                                let mut drawer_open = drawer_open;
                                rsx! {
                                    button {
                                        class: "inline-flex items-center gap-2 px-4 py-2 border border-gray-300 rounded-lg text-sm font-medium text-gray-700 hover:bg-gray-50",
                                        onclick: move |_| drawer_open.set(true),
                                        "Filters"
                                        if active_count > 0 {
                                            span {
                                                class: "px-2 py-0.5 rounded-full text-xs bg-indigo-100 text-indigo-700",
                                                "{active_count}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        label { r#for: "sort", class: "text-sm text-gray-600", "Sort:" }
                        select {
                            id: "sort",
                            class: "px-3 py-2 border border-gray-300 rounded-lg text-sm",
                            value: "{sort.as_str()}",
                            onchange: move |e| query.write().set_sort(SortKey::from_param(&e.value())),
                            for key in SortKey::variants() {
                                option { value: "{key.as_str()}", "{key.label()}" }
                            }
                        }
                    }
                }

                // Results
                if derived.read().is_empty() {
                    div {
                        class: "text-center py-16",
                        h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No domains match your filters" }
                        p {
                            class: "text-gray-500 mb-6",
                            "Try widening a range or clearing a few selections."
                        }
                        button {
                            class: "px-4 py-2 bg-indigo-600 text-white rounded-lg text-sm font-semibold hover:bg-indigo-700",
                            onclick: move |_| query.write().reset_filters(),
                            "Reset Filters"
                        }
                    }
                } else {
                    div {
                        class: "grid gap-6 sm:grid-cols-2 xl:grid-cols-3",
                        for domain in derived() {
                            DomainCard { key: "{domain.slug}", domain: domain.clone() }
                        }
                    }
                }
            }

            if is_mobile {
                FilterDrawer { query, open: drawer_open, tld_options }
            }
        }
    }
}
