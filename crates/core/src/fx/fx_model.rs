use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use showroom_market_data::RateTable;

use crate::constants::STATIC_RATES;

lazy_static! {
    static ref STATIC_RATE_TABLE: RateTable = RateTable::from_rates(STATIC_RATES.iter().copied());
}

/// The built-in table used when neither a live nor a cached table exists.
pub fn static_rate_table() -> &'static RateTable {
    &STATIC_RATE_TABLE
}

/// Rate used to convert USD amounts into `currency`.
///
/// `table[currency]` when present, else the static table's rate, else 1.
/// Tables only hold positive finite rates, so the result is always usable.
pub fn effective_rate(table: &RateTable, currency: &str) -> f64 {
    table
        .get(currency)
        .or_else(|| static_rate_table().get(currency))
        .unwrap_or(1.0)
}

/// Where the active rate table came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateSource {
    Live,
    Cached,
    Static,
}

impl RateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RateSource::Live => "LIVE",
            RateSource::Cached => "CACHED",
            RateSource::Static => "STATIC",
        }
    }
}

/// Immutable view of the rate table in effect at some moment.
///
/// Render functions receive a snapshot and never observe it changing; a
/// newer table is installed by replacing the snapshot as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesSnapshot {
    pub rates: RateTable,
    pub source: RateSource,
    /// When the table was fetched; `None` for the static table
    pub as_of: Option<DateTime<Utc>>,
}

impl RatesSnapshot {
    pub fn new(rates: RateTable, source: RateSource, as_of: Option<DateTime<Utc>>) -> Self {
        Self {
            rates,
            source,
            as_of,
        }
    }

    pub fn static_default() -> Self {
        Self::new(static_rate_table().clone(), RateSource::Static, None)
    }

    pub fn effective_rate(&self, currency: &str) -> f64 {
        effective_rate(&self.rates, currency)
    }

    /// Whether `code` is a currency the site can display.
    pub fn supports(&self, code: &str) -> bool {
        self.rates.contains(code) || static_rate_table().contains(code)
    }
}

/// Persisted form of a live table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedRates {
    pub timestamp: DateTime<Utc>,
    pub rates: RateTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_table_contents() {
        let table = static_rate_table();
        assert_eq!(table.get("USD"), Some(1.0));
        for code in ["EUR", "GBP", "AUD", "NGN", "INR", "CAD", "JPY"] {
            assert!(table.contains(code), "missing {code}");
        }
    }

    #[test]
    fn test_effective_rate_prefers_table() {
        let table = RateTable::from_rates([("EUR", 0.5)]);
        assert_eq!(effective_rate(&table, "EUR"), 0.5);
    }

    #[test]
    fn test_effective_rate_falls_back_to_static() {
        let table = RateTable::base_only();
        assert_eq!(effective_rate(&table, "GBP"), 0.79);
    }

    #[test]
    fn test_effective_rate_unknown_currency_is_one() {
        let table = RateTable::from_rates([("EUR", 0.5)]);
        assert_eq!(effective_rate(&table, "CHF"), 1.0);
        assert_eq!(effective_rate(&table, ""), 1.0);
    }

    #[test]
    fn test_usd_is_always_one() {
        assert_eq!(RatesSnapshot::static_default().effective_rate("USD"), 1.0);
        let table = RateTable::from_rates([("USD", 3.0)]);
        assert_eq!(effective_rate(&table, "USD"), 1.0);
    }

    #[test]
    fn test_supports_checks_both_tables() {
        let snapshot = RatesSnapshot::new(
            RateTable::from_rates([("CHF", 0.88)]),
            RateSource::Live,
            Some(Utc::now()),
        );
        assert!(snapshot.supports("CHF"));
        assert!(snapshot.supports("JPY"));
        assert!(!snapshot.supports("XYZ"));
    }

    #[test]
    fn test_cached_rates_serialization() {
        let cached = CachedRates {
            timestamp: "2024-05-01T10:00:00Z".parse().unwrap(),
            rates: RateTable::from_rates([("EUR", 0.9)]),
        };
        let json = serde_json::to_string(&cached).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"2024-05-01T10:00:00Z","rates":{"EUR":0.9,"USD":1.0}}"#
        );
    }
}
