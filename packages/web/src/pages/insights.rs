//! Insights: editorial articles on domain strategy.

use dioxus::prelude::*;

use crate::data;
use crate::routes::Route;

#[component]
pub fn Insights() -> Element {
    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 sm:px-6 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Insights" }
            p { class: "text-gray-600 mb-8", "Notes from the vault on naming, valuation and dealcraft." }
            div {
                class: "space-y-6",
                for insight in data::insights() {
                    article {
                        key: "{insight.slug}",
                        class: "rounded-xl border border-gray-200 p-5 hover:shadow-md transition-shadow",
                        h2 {
                            class: "text-xl font-semibold text-gray-900 mb-1",
                            Link {
                                to: Route::InsightDetail { slug: insight.slug.clone() },
                                class: "hover:text-indigo-600",
                                "{insight.title}"
                            }
                        }
                        p { class: "text-xs text-gray-400 mb-2", "{insight.display_date()}" }
                        p { class: "text-sm text-gray-600", "{insight.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn InsightDetail(slug: String) -> Element {
    let Some(insight) = data::insight_by_slug(&slug) else {
        return rsx! {
            div {
                class: "max-w-3xl mx-auto px-4 py-16 text-center",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Article Not Found" }
                Link {
                    to: Route::Insights {},
                    class: "text-indigo-600 hover:text-indigo-700",
                    "Back to insights"
                }
            }
        };
    };

    rsx! {
        article {
            class: "max-w-3xl mx-auto px-4 sm:px-6 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{insight.title}" }
            p { class: "text-sm text-gray-400 mb-6", "{insight.display_date()}" }
            div {
                class: "space-y-4",
                for paragraph in insight.body.iter() {
                    p { class: "text-gray-700 leading-relaxed", "{paragraph}" }
                }
            }
        }
    }
}
