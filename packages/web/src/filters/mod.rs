//! Portfolio filter and sort state.
//!
//! `PortfolioQuery` owns everything the visitor has selected on the
//! portfolio page — filters, sort order, and the phase of the URL
//! synchronization protocol. The page holds it in a single signal and
//! passes it down to the filter controls; there is no global state.

mod derive;
mod query;

pub use derive::derive;

/// Sort order for the derived list. `Relevance` preserves the dataset's
/// source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    Shortest,
    Alphabetical,
    Price,
}

impl SortKey {
    /// URL/query form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Shortest => "shortest",
            SortKey::Alphabetical => "alphabetical",
            SortKey::Price => "price",
        }
    }

    /// Parse a query-string value. Unknown values fall back to
    /// `Relevance` rather than erroring.
    pub fn from_param(value: &str) -> SortKey {
        match value {
            "shortest" => SortKey::Shortest,
            "alphabetical" => SortKey::Alphabetical,
            "price" => SortKey::Price,
            _ => SortKey::Relevance,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Shortest => "Shortest",
            SortKey::Alphabetical => "Alphabetical",
            SortKey::Price => "Price",
        }
    }

    pub fn variants() -> &'static [SortKey] {
        &[
            SortKey::Relevance,
            SortKey::Shortest,
            SortKey::Alphabetical,
            SortKey::Price,
        ]
    }
}

/// An inclusive numeric range; `None` on a side means unbounded. A bound
/// of `0` is a real constraint, not "unset".
pub type Range<T> = (Option<T>, Option<T>);

/// Everything the visitor has selected to narrow the portfolio.
///
/// `tlds` and `categories` are empty-means-unrestricted lists; `status`
/// stays a plain string (empty = any) so that values arriving via the
/// URL which no record carries remain representable — they simply match
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub tlds: Vec<String>,
    pub categories: Vec<String>,
    pub status: String,
    pub length: Range<u32>,
    pub price: Range<u64>,
    pub age: Range<u32>,
}

impl FilterState {
    /// Add the TLD if absent, remove it if present.
    pub fn toggle_tld(&mut self, tld: &str) {
        if self.tlds.iter().any(|t| t == tld) {
            self.tlds.retain(|t| t != tld);
        } else {
            self.tlds.push(tld.to_string());
        }
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, slug: &str) {
        if self.categories.iter().any(|c| c == slug) {
            self.categories.retain(|c| c != slug);
        } else {
            self.categories.push(slug.to_string());
        }
    }

    /// Replace the status filter; an empty string clears it.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    pub fn set_length_range(&mut self, min: Option<u32>, max: Option<u32>) {
        self.length = (min, max);
    }

    pub fn set_price_range(&mut self, min: Option<u64>, max: Option<u64>) {
        self.price = (min, max);
    }

    pub fn set_age_range(&mut self, min: Option<u32>, max: Option<u32>) {
        self.age = (min, max);
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Number of filter fields holding a non-default value, shown as the
    /// badge on the mobile filter toggle.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if !self.tlds.is_empty() {
            count += 1;
        }
        if !self.categories.is_empty() {
            count += 1;
        }
        if !self.status.is_empty() {
            count += 1;
        }
        for bounded in [
            self.length.0.is_some() || self.length.1.is_some(),
            self.price.0.is_some() || self.price.1.is_some(),
            self.age.0.is_some() || self.age.1.is_some(),
        ] {
            if bounded {
                count += 1;
            }
        }
        count
    }
}

/// Phase of the URL synchronization protocol: state is written back to
/// the URL only after the initial query string has been read, so an
/// empty first render never clobbers a shared link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Uninitialized,
    Ready,
}

/// Filter/sort state for the portfolio page plus its URL protocol.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PortfolioQuery {
    pub filters: FilterState,
    pub sort: SortKey,
    phase: SyncPhase,
}

impl PortfolioQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate state from the page's raw query string (with or without
    /// the leading `?`) and mark the protocol ready. Runs once per page
    /// view: subsequent calls are no-ops.
    pub fn hydrate(&mut self, raw_query: &str) {
        if self.phase == SyncPhase::Ready {
            return;
        }
        let (filters, sort) = query::parse(raw_query);
        self.filters = filters;
        self.sort = sort;
        self.phase = SyncPhase::Ready;
        tracing::debug!(active = self.filters.active_count(), "portfolio filters hydrated");
    }

    pub fn is_ready(&self) -> bool {
        self.phase == SyncPhase::Ready
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    /// Clear all filters. The sort order is left untouched; both the
    /// empty-state reset and the drawer's Reset button share this
    /// behavior.
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
    }

    /// Serialized non-default state for the address bar, or `None` while
    /// the initial query string has not been read yet. An empty string
    /// means "no query, drop the `?` entirely".
    pub fn query_string(&self) -> Option<String> {
        match self.phase {
            SyncPhase::Uninitialized => None,
            SyncPhase::Ready => Some(query::serialize(&self.filters, self.sort)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_are_symmetric() {
        let mut filters = FilterState::default();
        filters.toggle_tld(".com");
        filters.toggle_tld(".io");
        assert_eq!(filters.tlds, vec![".com", ".io"]);
        filters.toggle_tld(".com");
        assert_eq!(filters.tlds, vec![".io"]);

        filters.toggle_category("geo");
        filters.toggle_category("geo");
        assert!(filters.categories.is_empty());
    }

    #[test]
    fn empty_status_clears_the_filter() {
        let mut filters = FilterState::default();
        filters.set_status("buy");
        assert_eq!(filters.status, "buy");
        filters.set_status("");
        assert!(filters.status.is_empty());
    }

    #[test]
    fn active_count_tracks_non_default_fields() {
        let mut filters = FilterState::default();
        assert_eq!(filters.active_count(), 0);
        filters.toggle_tld(".com");
        filters.set_status("lease");
        filters.set_price_range(Some(1000), None);
        assert_eq!(filters.active_count(), 3);
        // A lone zero bound still counts as an active range.
        filters.set_length_range(Some(0), None);
        assert_eq!(filters.active_count(), 4);
    }

    #[test]
    fn query_string_is_gated_until_hydrated() {
        let mut query = PortfolioQuery::new();
        assert_eq!(query.query_string(), None);

        query.hydrate("tld=.com&sort=price");
        assert!(query.is_ready());
        assert_eq!(query.query_string().as_deref(), Some("tld=.com&sort=price"));
    }

    #[test]
    fn hydrate_runs_only_once() {
        let mut query = PortfolioQuery::new();
        query.hydrate("tld=.com");
        query.hydrate("tld=.io&status=lease");
        assert_eq!(query.filters.tlds, vec![".com"]);
        assert!(query.filters.status.is_empty());
    }

    #[test]
    fn reset_clears_filters_but_keeps_sort() {
        let mut query = PortfolioQuery::new();
        query.hydrate("tld=.com,.io&status=buy&len=4-6&sort=shortest");
        assert_eq!(query.filters.active_count(), 3);

        query.reset_filters();
        assert!(query.filters.is_default());
        assert_eq!(query.sort, SortKey::Shortest);
        assert_eq!(query.query_string().as_deref(), Some("sort=shortest"));
    }

    #[test]
    fn unknown_sort_param_falls_back_to_relevance() {
        assert_eq!(SortKey::from_param("newest"), SortKey::Relevance);
        assert_eq!(SortKey::from_param(""), SortKey::Relevance);
        assert_eq!(SortKey::from_param("price"), SortKey::Price);
    }
}
