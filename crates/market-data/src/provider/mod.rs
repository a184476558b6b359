//! Provider abstractions and implementations.
//!
//! This module contains:
//! - The `RateProvider` and `GeoProvider` traits
//! - Concrete implementations for exchangerate.host and ipapi.co
//!
//! Providers only translate HTTP payloads into models. Fallback decisions
//! (cache, static table, locale heuristics) belong to the callers.

mod traits;

pub mod exchangerate_host;
pub mod ipapi;

use std::time::Duration;

use reqwest::Client;

pub use traits::{GeoProvider, RateProvider};

/// Default HTTP request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}
