//! Locale resolver - a currency guess from the visitor's BCP-47 locale.
//!
//! Only the region subtag is considered (`en-US` -> `US` -> `USD`). Tags
//! without a region, or with a region we sell in no currency for, yield
//! nothing.

use async_trait::async_trait;

use crate::models::{Currency, RegionContext};

use super::traits::{ResolutionSource, Resolver};

/// Region subtag to currency.
const REGION_CURRENCIES: &[(&str, &str)] = &[
    ("US", "USD"),
    ("GB", "GBP"),
    ("IE", "EUR"),
    ("DE", "EUR"),
    ("FR", "EUR"),
    ("ES", "EUR"),
    ("IT", "EUR"),
    ("NL", "EUR"),
    ("AU", "AUD"),
    ("NG", "NGN"),
    ("IN", "INR"),
    ("CA", "CAD"),
    ("JP", "JPY"),
];

/// Map a locale tag such as `en-GB` or `en_GB.UTF-8` to a currency.
pub fn locale_to_currency(locale: &str) -> Option<Currency> {
    let tag = locale.split(['.', '@']).next()?;
    let region = tag
        .split(['-', '_'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))?
        .to_ascii_uppercase();

    REGION_CURRENCIES
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, currency)| Currency::Borrowed(*currency))
}

pub struct LocaleResolver;

impl LocaleResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for LocaleResolver {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Locale
    }

    async fn resolve(&self, context: &RegionContext) -> Option<Currency> {
        context.locale.as_deref().and_then(locale_to_currency)
    }
}
