//! Default-currency resolution for visitors.
//!
//! The resolver uses a chain of responsibility pattern:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    ResolverChain                      │
//! │  1. StoredResolver   - visitor's persisted choice     │
//! │                           │ miss                      │
//! │  2. GeoResolver      - IP geolocation currency        │
//! │                           │ miss / failure            │
//! │  3. LocaleResolver   - region subtag of the locale    │
//! │                           │ miss                      │
//! │  4. USD                                              │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The chain does not validate the result against a rate table; the
//! currency selector in the core crate coerces unknown codes to USD.

mod chain;
mod geo_resolver;
mod locale_resolver;
mod stored_resolver;
mod traits;

pub use chain::ResolverChain;
pub use geo_resolver::GeoResolver;
pub use locale_resolver::{locale_to_currency, LocaleResolver};
pub use stored_resolver::StoredResolver;
pub use traits::{CurrencyResolver, ResolutionSource, ResolvedCurrency, Resolver};
