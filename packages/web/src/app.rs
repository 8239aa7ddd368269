//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::SiteProvider;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Compare + inquiry contexts wrap the entire app
        SiteProvider {
            Router::<Route> {}
        }
    }
}
