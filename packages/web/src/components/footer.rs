//! Site footer

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "bg-white border-t border-gray-100 mt-12",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div {
                    class: "flex flex-col sm:flex-row items-center justify-between gap-4",
                    div {
                        h2 { class: "text-lg font-semibold text-gray-900", "Hoshi Vault" }
                        p {
                            class: "text-gray-500 text-sm",
                            "Curated premium domains for lease or sale. Escrow protected."
                        }
                    }
                    ul {
                        class: "flex items-center gap-4 text-sm text-gray-500",
                        li { Link { to: Route::Faqs {}, class: "hover:text-gray-900", "FAQs" } }
                        li { Link { to: Route::Terms {}, class: "hover:text-gray-900", "Terms" } }
                        li { Link { to: Route::Privacy {}, class: "hover:text-gray-900", "Privacy" } }
                    }
                }
            }
        }
    }
}
