//! Showroom Market Data Crate
//!
//! This crate provides provider-agnostic FX rate and geolocation fetching
//! for the showroom pricing service.
//!
//! # Overview
//!
//! - USD-based exchange-rate tables from exchangerate.host
//! - Visitor geolocation from ipapi.co
//! - A resolver chain that picks a visitor's default currency
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  RegionContext   | --> |  ResolverChain   |  (stored -> geo -> locale -> USD)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   GeoProvider    |  (ipapi.co)
//!                          +------------------+
//!
//! +------------------+     +------------------+
//! |   RateProvider   | --> |    RateTable     |  (units per 1 USD)
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`RateTable`] - Normalized USD-based rate table
//! - [`GeoLocation`] - Provider-reported visitor location
//! - [`RegionContext`] - Inputs for currency resolution
//! - [`ResolvedCurrency`] - Resolution result with its source

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use models::{Currency, GeoLocation, RateTable, RegionContext, BASE_CURRENCY};

pub use resolver::{
    locale_to_currency, CurrencyResolver, GeoResolver, LocaleResolver, ResolutionSource,
    ResolvedCurrency, Resolver, ResolverChain, StoredResolver,
};

pub use provider::exchangerate_host::ExchangeRateHostProvider;
pub use provider::ipapi::IpapiProvider;
pub use provider::{GeoProvider, RateProvider};
