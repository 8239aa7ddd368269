//! Query-string codec for the portfolio page.
//!
//! Shareable URLs carry the filter state in `tld`, `cat`, `status`,
//! `len`, `price`, `age` and `sort` params. Parsing is forgiving:
//! malformed numeric segments become unbounded sides and unknown sort
//! values fall back to relevance — a bad link renders the page, it does
//! not break it.

use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;

use super::{FilterState, Range, SortKey};

/// Parse a raw query string (with or without the leading `?`) into
/// filter and sort state. Unrecognized params are ignored.
pub fn parse(raw: &str) -> (FilterState, SortKey) {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let mut filters = FilterState::default();
    let mut sort = SortKey::Relevance;

    for pair in raw.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value: Cow<str> = urlencoding::decode(value).unwrap_or_default();
        match key {
            "tld" => filters.tlds = parse_list(&value),
            "cat" => filters.categories = parse_list(&value),
            "status" => filters.status = value.into_owned(),
            "len" => filters.length = parse_range(&value),
            "price" => filters.price = parse_range(&value),
            "age" => filters.age = parse_range(&value),
            "sort" => sort = SortKey::from_param(&value),
            _ => {}
        }
    }

    (filters, sort)
}

/// Serialize non-default state into a query string. Empty when every
/// field is at its default; the `sort` param is omitted for relevance.
pub fn serialize(filters: &FilterState, sort: SortKey) -> String {
    let mut params: Vec<String> = Vec::new();

    if !filters.tlds.is_empty() {
        params.push(format!("tld={}", encode_list(&filters.tlds)));
    }
    if !filters.categories.is_empty() {
        params.push(format!("cat={}", encode_list(&filters.categories)));
    }
    if !filters.status.is_empty() {
        params.push(format!("status={}", urlencoding::encode(&filters.status)));
    }
    if let Some(encoded) = encode_range(filters.length) {
        params.push(format!("len={encoded}"));
    }
    if let Some(encoded) = encode_range(filters.price) {
        params.push(format!("price={encoded}"));
    }
    if let Some(encoded) = encode_range(filters.age) {
        params.push(format!("age={encoded}"));
    }
    if sort != SortKey::Relevance {
        params.push(format!("sort={}", sort.as_str()));
    }

    params.join("&")
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn encode_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse `"{min}-{max}"` where either side may be blank. A side that is
/// not a number resolves to unbounded rather than erroring; a value
/// with no separator is treated as a lone minimum.
fn parse_range<T: FromStr + Copy>(value: &str) -> Range<T> {
    match value.split_once('-') {
        Some((min, max)) => (min.parse().ok(), max.parse().ok()),
        None => (value.parse().ok(), None),
    }
}

/// `None` when both sides are unbounded (the param is omitted).
fn encode_range<T: Display + Copy>(range: Range<T>) -> Option<String> {
    match range {
        (None, None) => None,
        (min, max) => Some(format!("{}-{}", opt_to_string(min), opt_to_string(max))),
    }
}

fn opt_to_string<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_param_set() {
        let (filters, sort) =
            parse("?tld=.com,.io&cat=geo,ai&status=buy&len=4-6&price=1000-&age=-10&sort=shortest");
        assert_eq!(filters.tlds, vec![".com", ".io"]);
        assert_eq!(filters.categories, vec!["geo", "ai"]);
        assert_eq!(filters.status, "buy");
        assert_eq!(filters.length, (Some(4), Some(6)));
        assert_eq!(filters.price, (Some(1000), None));
        assert_eq!(filters.age, (None, Some(10)));
        assert_eq!(sort, SortKey::Shortest);
    }

    #[test]
    fn absent_params_take_defaults() {
        let (filters, sort) = parse("");
        assert!(filters.is_default());
        assert_eq!(sort, SortKey::Relevance);
    }

    #[test]
    fn malformed_numbers_become_unbounded() {
        let (filters, _) = parse("len=abc-6&price=x-y&age=3-");
        assert_eq!(filters.length, (None, Some(6)));
        assert_eq!(filters.price, (None, None));
        assert_eq!(filters.age, (Some(3), None));
    }

    #[test]
    fn lone_value_is_a_minimum() {
        let (filters, _) = parse("len=4");
        assert_eq!(filters.length, (Some(4), None));
    }

    #[test]
    fn unknown_params_are_ignored() {
        let (filters, sort) = parse("utm_source=newsletter&sort=bogus");
        assert!(filters.is_default());
        assert_eq!(sort, SortKey::Relevance);
    }

    #[test]
    fn serializes_only_non_default_fields() {
        let mut filters = FilterState::default();
        assert_eq!(serialize(&filters, SortKey::Relevance), "");

        filters.toggle_tld(".com");
        filters.set_price_range(None, Some(5000));
        assert_eq!(
            serialize(&filters, SortKey::Price),
            "tld=.com&price=-5000&sort=price"
        );
    }

    #[test]
    fn round_trips_through_the_url() {
        let mut filters = FilterState::default();
        filters.toggle_tld(".com");
        filters.toggle_tld(".ai");
        filters.toggle_category("fintech");
        filters.set_status("make-offer");
        filters.set_length_range(Some(3), Some(8));
        filters.set_age_range(Some(2), None);

        let encoded = serialize(&filters, SortKey::Alphabetical);
        let (parsed, sort) = parse(&encoded);
        assert_eq!(parsed, filters);
        assert_eq!(sort, SortKey::Alphabetical);
    }

    #[test]
    fn zero_bounds_survive_the_round_trip() {
        let mut filters = FilterState::default();
        filters.set_length_range(Some(0), None);

        let encoded = serialize(&filters, SortKey::Relevance);
        assert_eq!(encoded, "len=0-");
        let (parsed, _) = parse(&encoded);
        assert_eq!(parsed.length, (Some(0), None));
    }

    #[test]
    fn encoded_values_decode() {
        let (filters, _) = parse("status=make%2Doffer&cat=ai");
        assert_eq!(filters.status, "make-offer");
        assert_eq!(filters.categories, vec!["ai"]);
    }
}
