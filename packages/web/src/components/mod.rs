//! Reusable UI components

mod compare_tray;
mod domain_card;
mod filter_controls;
mod footer;
mod global_search;
mod header;
mod inquiry_drawer;
mod lease_calculator;

pub use compare_tray::*;
pub use domain_card::*;
pub use filter_controls::*;
pub use footer::*;
pub use global_search::*;
pub use header::*;
pub use inquiry_drawer::*;
pub use lease_calculator::*;
