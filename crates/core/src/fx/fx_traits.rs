use std::sync::Arc;

use async_trait::async_trait;
use showroom_market_data::RateTable;

use super::fx_model::{CachedRates, RatesSnapshot};

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    /// Install the best synchronously available table (cache, else static).
    fn initialize(&self) -> Arc<RatesSnapshot>;

    /// The snapshot currently in effect.
    fn snapshot(&self) -> Arc<RatesSnapshot>;

    /// Read the persisted table if it is still fresh.
    fn load_cached_rates(&self) -> Option<CachedRates>;

    /// Fetch a live table, persisting it on success. Never fails; `None`
    /// means the provider was unavailable.
    async fn fetch_rates(&self) -> Option<RateTable>;

    /// Fetch a live table and, on success, make it the active snapshot.
    async fn refresh(&self) -> Option<Arc<RatesSnapshot>>;
}
