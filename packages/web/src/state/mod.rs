//! Site-wide state containers: the compare tray and the inquiry drawer.

use dioxus::prelude::*;

use crate::types::DomainRecord;

/// The compare tray holds at most this many selections.
pub const COMPARE_LIMIT: usize = 4;

/// Add a record to a compare selection. Duplicates and additions past
/// the cap are silently ignored.
pub fn add_to_selection(selected: &mut Vec<DomainRecord>, domain: DomainRecord) {
    if selected.len() >= COMPARE_LIMIT || selected.iter().any(|d| d.slug == domain.slug) {
        return;
    }
    selected.push(domain);
}

/// Domains selected for side-by-side comparison.
#[derive(Clone, Copy)]
pub struct CompareState {
    pub selected: Signal<Vec<DomainRecord>>,
}

impl CompareState {
    pub fn new() -> Self {
        Self {
            selected: Signal::new(Vec::new()),
        }
    }

    pub fn add(&self, domain: DomainRecord) {
        let mut selected = self.selected;
        let mut list = selected.peek().clone();
        add_to_selection(&mut list, domain);
        selected.set(list);
    }

    pub fn remove(&self, slug: &str) {
        let mut selected = self.selected;
        let mut list = selected.peek().clone();
        list.retain(|d| d.slug != slug);
        selected.set(list);
    }

    pub fn clear(&self) {
        let mut selected = self.selected;
        selected.set(Vec::new());
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected.read().iter().any(|d| d.slug == slug)
    }
}

/// Visibility and subject of the right-side inquiry drawer.
#[derive(Clone, Copy)]
pub struct InquiryState {
    pub is_open: Signal<bool>,
    pub domain: Signal<Option<DomainRecord>>,
}

impl InquiryState {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
            domain: Signal::new(None),
        }
    }

    pub fn open(&self, domain: DomainRecord) {
        let mut subject = self.domain;
        subject.set(Some(domain));
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    pub fn close(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
        let mut subject = self.domain;
        subject.set(None);
    }
}

/// Provides the compare and inquiry contexts to the whole app.
#[component]
pub fn SiteProvider(children: Element) -> Element {
    use_context_provider(CompareState::new);
    use_context_provider(InquiryState::new);
    children
}

/// Hook to access the compare tray state.
pub fn use_compare() -> CompareState {
    use_context::<CompareState>()
}

/// Hook to access the inquiry drawer state.
pub fn use_inquiry() -> InquiryState {
    use_context::<InquiryState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DomainStatus, Price};

    fn record(slug: &str) -> DomainRecord {
        DomainRecord {
            slug: slug.to_string(),
            name: format!("{slug}.com"),
            tld: ".com".to_string(),
            length: slug.len() as u32,
            categories: vec![],
            status: DomainStatus::Buy,
            price: Price::Fixed(1000),
            age: None,
            min_offer: None,
            lease_terms: None,
            thesis: None,
            traffic_estimate: None,
        }
    }

    #[test]
    fn selection_is_capped() {
        let mut selected = Vec::new();
        for slug in ["a", "b", "c", "d", "e"] {
            add_to_selection(&mut selected, record(slug));
        }
        assert_eq!(selected.len(), COMPARE_LIMIT);
        assert!(selected.iter().all(|d| d.slug != "e"));
    }

    #[test]
    fn duplicate_additions_are_ignored() {
        let mut selected = Vec::new();
        add_to_selection(&mut selected, record("a"));
        add_to_selection(&mut selected, record("a"));
        assert_eq!(selected.len(), 1);
    }
}
