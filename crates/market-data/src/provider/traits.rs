//! Provider trait definitions.
//!
//! This module defines the two external data sources the site depends on:
//! an FX rate provider and an IP geolocation provider.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{GeoLocation, RateTable};

/// Trait for FX rate providers.
///
/// Implement this trait to add support for a new exchange-rate source.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use showroom_market_data::provider::RateProvider;
///
/// struct FixedRates;
///
/// #[async_trait]
/// impl RateProvider for FixedRates {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn latest_rates(&self, _symbols: &[&str]) -> Result<RateTable, MarketDataError> {
///         Ok(RateTable::from_rates([("EUR", 0.9)]))
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest USD-based rates for the given currency codes.
    ///
    /// The returned table is normalized: it always contains `USD -> 1`.
    async fn latest_rates(&self, symbols: &[&str]) -> Result<RateTable, MarketDataError>;
}

/// Trait for IP geolocation providers.
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Locate a client.
    ///
    /// With `ip == None` the provider locates the caller's own address.
    async fn locate(&self, ip: Option<IpAddr>) -> Result<GeoLocation, MarketDataError>;
}
