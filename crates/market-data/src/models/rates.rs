use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::BASE_CURRENCY;

/// Exchange-rate table keyed by ISO 4217 code.
///
/// Each value is the number of units of that currency per 1 USD. The table
/// always contains `USD -> 1`, and every stored rate is positive and finite:
/// entries that are not are dropped on construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Build a normalized table from raw `(code, rate)` pairs.
    ///
    /// Codes are upper-cased; the base currency is forced to 1.
    pub fn from_rates<I, K>(rates: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut normalized: BTreeMap<String, f64> = rates
            .into_iter()
            .filter(|(_, rate)| rate.is_finite() && *rate > 0.0)
            .map(|(code, rate)| (code.as_ref().trim().to_ascii_uppercase(), rate))
            .filter(|(code, _)| !code.is_empty())
            .collect();
        normalized.insert(BASE_CURRENCY.to_string(), 1.0);
        Self { rates: normalized }
    }

    /// A table holding only the base currency.
    pub fn base_only() -> Self {
        Self::from_rates(std::iter::empty::<(&str, f64)>())
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Never true in practice, the base currency is always present.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::base_only()
    }
}

impl From<BTreeMap<String, f64>> for RateTable {
    fn from(rates: BTreeMap<String, f64>) -> Self {
        Self::from_rates(rates)
    }
}

impl From<RateTable> for BTreeMap<String, f64> {
    fn from(table: RateTable) -> Self {
        table.rates
    }
}
