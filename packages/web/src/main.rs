//! Hoshi Vault - Dioxus Fullstack Web Application
//!
//! Marketing and catalog site for the Hoshi Vault domain portfolio.
//! The inventory is a static dataset compiled into the binary; the
//! portfolio page keeps its filter state in the URL so views are
//! shareable.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod data;
mod filters;
mod hooks;
mod pages;
mod routes;
mod state;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
