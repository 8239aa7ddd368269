//! Pure derivation of the visible listing set.
//!
//! A record is included iff it passes every active predicate (AND
//! across fields, OR within a multi-valued field). Sorting is stable,
//! so ties keep their source order.

use crate::types::DomainRecord;

use super::{FilterState, Range, SortKey};

/// Filter and sort the dataset. Pure: identical inputs always yield the
/// identical sequence.
pub fn derive<'a>(
    records: &'a [DomainRecord],
    filters: &FilterState,
    sort: SortKey,
) -> Vec<&'a DomainRecord> {
    let mut result: Vec<&DomainRecord> = records.iter().filter(|r| matches(r, filters)).collect();

    match sort {
        SortKey::Relevance => {}
        SortKey::Shortest => result.sort_by_key(|r| r.length),
        SortKey::Alphabetical => result.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Price => result.sort_by_key(|r| r.price.sort_value()),
    }

    result
}

fn matches(record: &DomainRecord, filters: &FilterState) -> bool {
    if !filters.tlds.is_empty() && !filters.tlds.iter().any(|t| *t == record.tld) {
        return false;
    }

    if !filters.categories.is_empty()
        && !filters
            .categories
            .iter()
            .any(|c| record.categories.iter().any(|rc| rc == c))
    {
        return false;
    }

    if !filters.status.is_empty() && filters.status != record.status.as_str() {
        return false;
    }

    if !within(Some(record.length), filters.length) {
        return false;
    }

    // Price bounds compare against the record's disclosed range; POA
    // discloses nothing, so any active price bound excludes it.
    if filters.price.0.is_some() || filters.price.1.is_some() {
        let (low, high) = record.price.bounds();
        if let Some(min) = filters.price.0 {
            if low.map_or(true, |l| l < min) {
                return false;
            }
        }
        if let Some(max) = filters.price.1 {
            if high.map_or(true, |h| h > max) {
                return false;
            }
        }
    }

    // A record with no age fails any active age bound.
    if !within(record.age, filters.age) {
        return false;
    }

    true
}

fn within<T: PartialOrd + Copy>(value: Option<T>, (min, max): Range<T>) -> bool {
    if let Some(min) = min {
        if value.map_or(true, |v| v < min) {
            return false;
        }
    }
    if let Some(max) = max {
        if value.map_or(true, |v| v > max) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DomainStatus, Price};

    fn record(slug: &str, tld: &str, length: u32, status: DomainStatus, price: Price, cats: &[&str]) -> DomainRecord {
        DomainRecord {
            slug: slug.to_string(),
            name: format!("{slug}{tld}"),
            tld: tld.to_string(),
            length,
            categories: cats.iter().map(|c| c.to_string()).collect(),
            status,
            price,
            age: None,
            min_offer: None,
            lease_terms: None,
            thesis: None,
            traffic_estimate: None,
        }
    }

    fn dataset() -> Vec<DomainRecord> {
        vec![
            record("a", ".com", 4, DomainStatus::Buy, Price::Fixed(5000), &["geo"]),
            record("b", ".io", 9, DomainStatus::Lease, Price::Range(1000, 3000), &["ai"]),
            record("c", ".com", 6, DomainStatus::Buy, Price::Poa, &["geo"]),
        ]
    }

    fn slugs(result: &[&DomainRecord]) -> Vec<String> {
        result.iter().map(|r| r.slug.clone()).collect()
    }

    #[test]
    fn tld_filter_keeps_source_order() {
        let records = dataset();
        let mut filters = FilterState::default();
        filters.toggle_tld(".com");

        let result = derive(&records, &filters, SortKey::Relevance);
        assert_eq!(slugs(&result), vec!["a", "c"]);
    }

    #[test]
    fn price_bound_excludes_poa() {
        let records = dataset();
        let mut filters = FilterState::default();
        filters.toggle_tld(".com");
        filters.set_price_range(Some(1000), None);

        let result = derive(&records, &filters, SortKey::Relevance);
        assert_eq!(slugs(&result), vec!["a"]);

        // No POA record survives any non-empty price bound.
        for bounds in [(Some(1), None), (None, Some(1_000_000)), (Some(0), Some(0))] {
            let mut filters = FilterState::default();
            filters.set_price_range(bounds.0, bounds.1);
            let result = derive(&records, &filters, SortKey::Relevance);
            assert!(result.iter().all(|r| r.price != Price::Poa));
        }
    }

    #[test]
    fn alphabetical_sort_passes_the_full_set_through() {
        let records = dataset();
        let result = derive(&records, &FilterState::default(), SortKey::Alphabetical);
        assert_eq!(slugs(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn combined_url_filters_match_the_expected_subset() {
        let records = dataset();
        let (filters, sort) = super::super::query::parse("tld=.com,.io&status=buy&len=4-6");
        let result = derive(&records, &filters, sort);
        assert_eq!(slugs(&result), vec!["a", "c"]);
    }

    #[test]
    fn reset_restores_the_full_dataset() {
        let records = dataset();
        let mut query = crate::filters::PortfolioQuery::new();
        query.hydrate("tld=.io&price=500-800&age=3-");
        assert!(derive(&records, &query.filters, query.sort).is_empty());

        query.reset_filters();
        assert!(query.filters.is_default());
        let result = derive(&records, &query.filters, query.sort);
        assert_eq!(slugs(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn derivation_is_idempotent() {
        let records = dataset();
        let mut filters = FilterState::default();
        filters.toggle_category("geo");
        filters.set_length_range(Some(4), Some(8));

        let first = derive(&records, &filters, SortKey::Shortest);
        let second = derive(&records, &filters, SortKey::Shortest);
        assert_eq!(slugs(&first), slugs(&second));
    }

    #[test]
    fn adding_constraints_never_grows_the_result() {
        let records = dataset();
        let mut filters = FilterState::default();
        let baseline = derive(&records, &filters, SortKey::Relevance).len();

        filters.toggle_tld(".com");
        let narrowed = derive(&records, &filters, SortKey::Relevance).len();
        assert!(narrowed <= baseline);

        filters.set_length_range(Some(5), Some(6));
        let narrower = derive(&records, &filters, SortKey::Relevance).len();
        assert!(narrower <= narrowed);
    }

    #[test]
    fn shortest_sort_is_stable_for_equal_lengths() {
        let records = vec![
            record("first", ".com", 5, DomainStatus::Buy, Price::Fixed(100), &[]),
            record("second", ".io", 5, DomainStatus::Buy, Price::Fixed(200), &[]),
            record("third", ".com", 3, DomainStatus::Buy, Price::Fixed(300), &[]),
        ];
        let result = derive(&records, &FilterState::default(), SortKey::Shortest);
        assert_eq!(slugs(&result), vec!["third", "first", "second"]);
    }

    #[test]
    fn price_sort_uses_the_low_bound_and_puts_poa_last() {
        let records = dataset();
        let result = derive(&records, &FilterState::default(), SortKey::Price);
        assert_eq!(slugs(&result), vec!["b", "a", "c"]);
    }

    #[test]
    fn missing_age_fails_active_age_bounds() {
        let mut records = dataset();
        records[0].age = Some(12);

        let mut filters = FilterState::default();
        filters.set_age_range(Some(1), None);
        let result = derive(&records, &filters, SortKey::Relevance);
        assert_eq!(slugs(&result), vec!["a"]);

        let mut filters = FilterState::default();
        filters.set_age_range(None, Some(20));
        let result = derive(&records, &filters, SortKey::Relevance);
        assert_eq!(slugs(&result), vec!["a"]);
    }

    #[test]
    fn zero_is_a_meaningful_bound() {
        let records = dataset();
        let mut filters = FilterState::default();
        filters.set_length_range(Some(0), None);
        // Minimum of zero constrains nothing out, but it is applied.
        assert_eq!(derive(&records, &filters, SortKey::Relevance).len(), 3);

        filters.set_length_range(None, Some(0));
        assert!(derive(&records, &filters, SortKey::Relevance).is_empty());
    }

    #[test]
    fn unknown_filter_values_match_nothing() {
        let records = dataset();
        let mut filters = FilterState::default();
        filters.toggle_tld(".dev");
        assert!(derive(&records, &filters, SortKey::Relevance).is_empty());

        let mut filters = FilterState::default();
        filters.set_status("expired");
        assert!(derive(&records, &filters, SortKey::Relevance).is_empty());

        let mut filters = FilterState::default();
        filters.toggle_category("retired-category");
        assert!(derive(&records, &filters, SortKey::Relevance).is_empty());
    }
}
