//! Compare tray: sticky bottom bar plus a comparison table modal.

use dioxus::prelude::*;

use crate::state::use_compare;

/// Renders nothing until at least one domain is selected for
/// comparison. Chips remove individual selections; the modal shows a
/// simple side-by-side table.
#[component]
pub fn CompareTray() -> Element {
    let compare = use_compare();
    let mut is_open = use_signal(|| false);

    let selected = compare.selected.read().clone();
    if selected.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed bottom-0 left-0 right-0 z-30",

            // Bar
            div {
                class: "bg-white border-t border-gray-200 shadow-lg px-4 py-3 flex items-center justify-between gap-3 flex-wrap",
                div {
                    class: "flex items-center gap-2 flex-wrap",
                    for domain in selected.iter() {
                        span {
                            key: "{domain.slug}",
                            class: "inline-flex items-center gap-1 bg-gray-100 px-2.5 py-1 rounded-lg text-sm text-gray-700",
                            "{domain.name}"
                            {
                                let slug = domain.slug.clone();
                                rsx! {
                                    button {
                                        class: "text-gray-400 hover:text-gray-700",
                                        aria_label: "Remove {domain.name} from compare",
                                        onclick: move |_| compare.remove(&slug),
                                        "\u{00d7}"
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    button {
                        class: "px-4 py-2 bg-indigo-600 text-white text-sm font-semibold rounded-lg hover:bg-indigo-700",
                        onclick: move |_| is_open.set(true),
                        "Compare ({selected.len()})"
                    }
                    button {
                        class: "px-4 py-2 border border-gray-300 text-sm text-gray-700 rounded-lg hover:bg-gray-50",
                        onclick: move |_| compare.clear(),
                        "Clear"
                    }
                }
            }

            // Modal
            if is_open() {
                div {
                    role: "dialog",
                    aria_modal: "true",
                    class: "fixed inset-0 bg-black/50 z-40 flex items-center justify-center p-4",
                    div {
                        class: "bg-white rounded-xl p-6 w-full max-w-3xl max-h-[90vh] overflow-y-auto",
                        h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Domain Comparison" }
                        table {
                            class: "w-full text-sm text-left",
                            thead {
                                tr {
                                    class: "border-b border-gray-200 text-gray-500",
                                    th { class: "py-2 pr-4 font-medium", "Domain" }
                                    th { class: "py-2 pr-4 font-medium", "TLD" }
                                    th { class: "py-2 pr-4 font-medium", "Status" }
                                    th { class: "py-2 font-medium", "Price" }
                                }
                            }
                            tbody {
                                for domain in selected.iter() {
                                    tr {
                                        key: "{domain.slug}",
                                        class: "border-b border-gray-100",
                                        td { class: "py-2 pr-4 font-medium text-gray-900", "{domain.name}" }
                                        td { class: "py-2 pr-4 text-gray-600", "{domain.tld}" }
                                        td { class: "py-2 pr-4 text-gray-600", "{domain.status.label()}" }
                                        td { class: "py-2 text-gray-600", "{domain.price.display()}" }
                                    }
                                }
                            }
                        }
                        div {
                            class: "mt-4 text-right",
                            button {
                                class: "px-4 py-2 border border-gray-300 text-sm text-gray-700 rounded-lg hover:bg-gray-50",
                                onclick: move |_| is_open.set(false),
                                "Close"
                            }
                        }
                    }
                }
            }
        }
    }
}
