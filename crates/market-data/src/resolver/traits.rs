//! Resolution traits for the market data crate.
//!
//! Defines the abstractions for picking a visitor's default currency from an
//! ordered list of strategies.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{Currency, RegionContext};

/// Resolution result containing the currency and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCurrency {
    pub currency: Currency,
    pub source: ResolutionSource,
}

/// Indicates how a currency was resolved.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionSource {
    /// Previously chosen by the visitor.
    Stored,
    /// Inferred from IP geolocation.
    Geolocation,
    /// Inferred from the visitor's locale.
    Locale,
    /// Nothing matched; the base currency.
    Default,
}

/// Individual strategy in the resolution chain.
///
/// Returning `None` means this strategy has no opinion (or failed), and the
/// chain should try the next one. Strategies never surface errors.
#[async_trait]
pub trait Resolver: Send + Sync {
    fn source(&self) -> ResolutionSource;

    async fn resolve(&self, context: &RegionContext) -> Option<Currency>;
}

/// Main currency resolver interface.
///
/// Unlike `Resolver::resolve`, this always yields a currency.
#[async_trait]
pub trait CurrencyResolver: Send + Sync {
    async fn resolve(&self, context: &RegionContext) -> ResolvedCurrency;
}
