//! Serde models for the embedded catalog datasets

use serde::{Deserialize, Serialize};

/// Commercial state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DomainStatus {
    Buy,
    Lease,
    MakeOffer,
    InUse,
}

impl DomainStatus {
    /// Wire/URL form, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStatus::Buy => "buy",
            DomainStatus::Lease => "lease",
            DomainStatus::MakeOffer => "make-offer",
            DomainStatus::InUse => "in-use",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DomainStatus::Buy => "Buy",
            DomainStatus::Lease => "Lease",
            DomainStatus::MakeOffer => "Make Offer",
            DomainStatus::InUse => "In Use",
        }
    }

    pub fn variants() -> &'static [DomainStatus] {
        &[
            DomainStatus::Buy,
            DomainStatus::Lease,
            DomainStatus::MakeOffer,
            DomainStatus::InUse,
        ]
    }
}

/// Pricing of a listing. Adjacently tagged over the `price_type` /
/// `price_value` key pair so the value shape always matches the type:
/// `fixed` carries one number, `range` a `[low, high]` pair, `POA`
/// nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "price_type", content = "price_value", rename_all = "lowercase")]
pub enum Price {
    Fixed(u64),
    Range(u64, u64),
    #[serde(rename = "POA")]
    Poa,
}

impl Price {
    /// Comparable `(low, high)` pair. POA has no disclosed price and
    /// yields `(None, None)`.
    pub fn bounds(&self) -> (Option<u64>, Option<u64>) {
        match *self {
            Price::Fixed(value) => (Some(value), Some(value)),
            Price::Range(low, high) => (Some(low), Some(high)),
            Price::Poa => (None, None),
        }
    }

    /// Effective scalar used for price sorting; undisclosed prices sort
    /// after everything else.
    pub fn sort_value(&self) -> u64 {
        match *self {
            Price::Fixed(value) => value,
            Price::Range(low, _) => low,
            Price::Poa => u64::MAX,
        }
    }

    pub fn display(&self) -> String {
        match *self {
            Price::Fixed(value) => format!("${value}"),
            Price::Range(low, high) => format!("${low}\u{2013}${high}"),
            Price::Poa => "Price on Application".to_string(),
        }
    }
}

/// One domain listing in the catalog. Immutable for the lifetime of a
/// session; the portfolio page only filters and sorts over the fixed
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainRecord {
    pub slug: String,
    pub name: String,
    pub tld: String,
    pub length: u32,
    pub categories: Vec<String>,
    pub status: DomainStatus,
    #[serde(flatten)]
    pub price: Price,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub min_offer: Option<u64>,
    #[serde(default)]
    pub lease_terms: Option<Vec<u32>>,
    #[serde(default)]
    pub thesis: Option<String>,
    #[serde(default)]
    pub traffic_estimate: Option<String>,
}

impl DomainRecord {
    pub fn thesis_or_default(&self) -> &str {
        self.thesis
            .as_deref()
            .unwrap_or("Premium, memorable and concise domain name for your next venture.")
    }
}

/// Category descriptor used for filter options and category pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub description: String,
}

/// Editorial article in the insights section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub slug: String,
    pub title: String,
    pub publish_date: String,
    pub summary: String,
    pub body: Vec<String>,
}

impl Insight {
    /// Human-readable publish date; falls back to the raw value when the
    /// dataset carries something unparseable.
    pub fn display_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.publish_date, "%Y-%m-%d")
            .map(|d| d.format("%B %d, %Y").to_string())
            .unwrap_or_else(|_| self.publish_date.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_price_record_parses() {
        let record: DomainRecord = serde_json::from_str(
            r#"{
                "slug": "lumenpay-com",
                "name": "lumenpay.com",
                "tld": ".com",
                "length": 8,
                "categories": ["fintech"],
                "status": "buy",
                "price_type": "fixed",
                "price_value": 12500
            }"#,
        )
        .unwrap();
        assert_eq!(record.price, Price::Fixed(12500));
        assert_eq!(record.status, DomainStatus::Buy);
        assert_eq!(record.age, None);
    }

    #[test]
    fn range_price_parses_as_ordered_pair() {
        let record: DomainRecord = serde_json::from_str(
            r#"{
                "slug": "kivo-io",
                "name": "kivo.io",
                "tld": ".io",
                "length": 4,
                "categories": ["brandable"],
                "status": "make-offer",
                "price_type": "range",
                "price_value": [6000, 14000]
            }"#,
        )
        .unwrap();
        assert_eq!(record.price, Price::Range(6000, 14000));
        assert_eq!(record.price.bounds(), (Some(6000), Some(14000)));
    }

    #[test]
    fn poa_parses_without_a_value() {
        let record: DomainRecord = serde_json::from_str(
            r#"{
                "slug": "heliux-ai",
                "name": "heliux.ai",
                "tld": ".ai",
                "length": 6,
                "categories": ["ai"],
                "status": "make-offer",
                "price_type": "POA"
            }"#,
        )
        .unwrap();
        assert_eq!(record.price, Price::Poa);
        assert_eq!(record.price.bounds(), (None, None));
        assert_eq!(record.price.sort_value(), u64::MAX);
    }

    #[test]
    fn mismatched_price_shape_is_rejected() {
        // A range tag with a scalar value must not deserialize.
        let result: Result<DomainRecord, _> = serde_json::from_str(
            r#"{
                "slug": "bad",
                "name": "bad.com",
                "tld": ".com",
                "length": 3,
                "categories": [],
                "status": "buy",
                "price_type": "range",
                "price_value": 5000
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn status_round_trips_kebab_case() {
        for status in DomainStatus::variants() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: DomainStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *status);
        }
    }
}
