//! Browser glue for the portfolio page.
//!
//! Everything touching `window` lives here behind `feature = "web"`;
//! on the server these helpers fall back to inert defaults so SSR
//! renders the unfiltered page and the client hydrates state after
//! mount.

use dioxus::prelude::*;

/// Below this viewport width the filter controls render in the overlay
/// drawer instead of the inline sidebar.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Width assumed when no window exists (SSR render).
const DEFAULT_VIEWPORT_WIDTH: f64 = 1024.0;

/// The current `location.search` without its leading `?`.
pub fn current_query_string() -> String {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(search) = window.location().search() {
                return search.strip_prefix('?').unwrap_or(&search).to_string();
            }
        }
        String::new()
    }
    #[cfg(not(feature = "web"))]
    {
        String::new()
    }
}

/// Shallow URL update: replace the current history entry so the back
/// button does not step through filter changes.
pub fn replace_query_string(path: &str, query: &str) {
    #[cfg(feature = "web")]
    {
        let url = if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        };
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.replace_state_with_url(
                &web_sys::wasm_bindgen::JsValue::NULL,
                "",
                Some(&url),
            );
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (path, query);
    }
}

/// Toggle the body scroll lock used while the filter drawer is open.
pub fn set_scroll_lock(locked: bool) {
    #[cfg(feature = "web")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let class_list = body.class_list();
            let _ = if locked {
                class_list.add_1("no-scroll")
            } else {
                class_list.remove_1("no-scroll")
            };
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = locked;
    }
}

fn initial_viewport_width() -> f64 {
    #[cfg(feature = "web")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }
    #[cfg(not(feature = "web"))]
    {
        DEFAULT_VIEWPORT_WIDTH
    }
}

/// Track the viewport width across resizes. The resize listener is tied
/// to the calling component's lifetime: dropping the hook removes the
/// DOM listener, so navigating away does not leak handlers.
pub fn use_viewport_width() -> Signal<f64> {
    let width = use_signal(initial_viewport_width);

    #[cfg(feature = "web")]
    {
        use std::rc::Rc;

        let mut width = width;
        use_hook(move || {
            Rc::new(web_sys::window().map(|window| {
                gloo_events::EventListener::new(&window, "resize", move |_event| {
                    if let Some(px) = web_sys::window()
                        .and_then(|w| w.inner_width().ok())
                        .and_then(|v| v.as_f64())
                    {
                        width.set(px);
                    }
                })
            }))
        });
    }

    width
}
