//! FX (Foreign Exchange) module - rate snapshots, cache, and the service that
//! owns the active table.

mod fx_model;
mod fx_service;
mod fx_traits;
mod rate_cache;

pub use fx_model::{effective_rate, static_rate_table, CachedRates, RateSource, RatesSnapshot};
pub use fx_service::FxService;
pub use fx_traits::FxServiceTrait;
pub use rate_cache::RateCache;
