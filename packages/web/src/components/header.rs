//! Top navigation bar

use dioxus::prelude::*;

use crate::routes::Route;

/// Main navigation: Home, Portfolio, Categories, Leasing, Selling,
/// Insights, Contact. The active link is emphasized.
#[component]
pub fn Header() -> Element {
    let current = use_route::<Route>();

    let nav_items = [
        (Route::Home {}, "Home"),
        (Route::Portfolio {}, "Portfolio"),
        (Route::Categories {}, "Categories"),
        (Route::Leasing {}, "Leasing"),
        (Route::Selling {}, "Selling"),
        (Route::Insights {}, "Insights"),
        (Route::Contact {}, "Contact"),
    ];

    rsx! {
        header {
            class: "bg-white border-b border-gray-100",
            nav {
                aria_label: "Main navigation",
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between",
                Link {
                    to: Route::Home {},
                    class: "text-xl font-bold text-gray-900 tracking-tight",
                    "Hoshi Vault"
                }
                ul {
                    class: "flex items-center gap-4 sm:gap-6 overflow-x-auto",
                    for (route, label) in nav_items {
                        li {
                            Link {
                                to: route.clone(),
                                class: if route == current {
                                    "text-sm font-semibold text-indigo-600 whitespace-nowrap"
                                } else {
                                    "text-sm text-gray-600 hover:text-gray-900 whitespace-nowrap"
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
