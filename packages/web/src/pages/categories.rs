//! Category index and detail pages.

use dioxus::prelude::*;

use crate::components::DomainCard;
use crate::data;
use crate::routes::Route;

#[component]
pub fn Categories() -> Element {
    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Categories" }
            p { class: "text-gray-600 mb-6", "Browse the vault by industry and naming style." }
            div {
                class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for category in data::categories() {
                    {
                        let count = data::domains_in_category(&category.slug).len();
                        rsx! {
                            Link {
                                key: "{category.slug}",
                                to: Route::CategoryDetail { slug: category.slug.clone() },
                                class: "rounded-xl border border-gray-200 p-5 hover:shadow-md transition-shadow block",
                                div {
                                    class: "flex items-center justify-between mb-2",
                                    h2 { class: "text-lg font-semibold text-gray-900", "{category.name}" }
                                    span {
                                        class: "px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-600",
                                        "{count}"
                                    }
                                }
                                p { class: "text-sm text-gray-500", "{category.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CategoryDetail(slug: String) -> Element {
    let Some(category) = data::category_by_slug(&slug) else {
        return rsx! {
            div {
                class: "max-w-7xl mx-auto px-4 py-16 text-center",
                h1 { class: "text-2xl font-bold text-gray-900 mb-2", "Category Not Found" }
                p {
                    class: "text-gray-500",
                    Link { to: Route::Categories {}, class: "text-indigo-600 hover:text-indigo-700", "Browse all categories" }
                }
            }
        };
    };

    let members = data::domains_in_category(&category.slug);

    rsx! {
        div {
            class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
            h1 { class: "text-3xl font-bold text-gray-900 mb-2", "{category.name}" }
            p { class: "text-gray-600 mb-6", "{category.description}" }
            if members.is_empty() {
                p { class: "text-gray-500 py-8", "No listings in this category right now." }
            } else {
                div {
                    class: "grid gap-6 sm:grid-cols-2 xl:grid-cols-3",
                    for domain in members {
                        DomainCard { key: "{domain.slug}", domain: domain.clone() }
                    }
                }
            }
        }
    }
}
