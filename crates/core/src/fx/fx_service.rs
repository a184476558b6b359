use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use showroom_market_data::{RateProvider, RateTable};

use super::fx_model::{CachedRates, RateSource, RatesSnapshot};
use super::fx_traits::FxServiceTrait;
use super::rate_cache::RateCache;
use crate::constants::QUOTED_CURRENCIES;
use crate::storage::KeyValueStore;

/// Owns the active rate table.
///
/// Tiers, best first: live fetch, fresh cache, static table. `initialize`
/// installs cache-or-static without touching the network so a first render
/// never waits; `refresh` upgrades to live data when the provider answers.
/// Both write through [`FxService::install`], the only assignment point.
pub struct FxService {
    provider: Arc<dyn RateProvider>,
    cache: RateCache,
    symbols: Vec<String>,
    active: RwLock<Arc<RatesSnapshot>>,
}

impl FxService {
    pub fn new(provider: Arc<dyn RateProvider>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            provider,
            cache: RateCache::new(store),
            symbols: QUOTED_CURRENCIES.iter().map(|s| s.to_string()).collect(),
            active: RwLock::new(Arc::new(RatesSnapshot::static_default())),
        }
    }

    /// Override the currencies requested from the provider.
    pub fn with_symbols(mut self, symbols: Vec<String>) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn with_cache(mut self, cache: RateCache) -> Self {
        self.cache = cache;
        self
    }

    fn install(&self, snapshot: RatesSnapshot) -> Arc<RatesSnapshot> {
        let snapshot = Arc::new(snapshot);
        let mut active = match self.active.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *active = snapshot.clone();
        log::info!(
            "Active FX table: {} ({} currencies)",
            snapshot.source.as_str(),
            snapshot.rates.len()
        );
        snapshot
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    fn initialize(&self) -> Arc<RatesSnapshot> {
        let snapshot = match self.load_cached_rates() {
            Some(cached) => {
                RatesSnapshot::new(cached.rates, RateSource::Cached, Some(cached.timestamp))
            }
            None => RatesSnapshot::static_default(),
        };
        self.install(snapshot)
    }

    fn snapshot(&self) -> Arc<RatesSnapshot> {
        match self.active.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn load_cached_rates(&self) -> Option<CachedRates> {
        self.cache.load(Utc::now())
    }

    async fn fetch_rates(&self) -> Option<RateTable> {
        let symbols: Vec<&str> = self.symbols.iter().map(String::as_str).collect();
        match self.provider.latest_rates(&symbols).await {
            Ok(rates) => {
                if let Err(e) = self.cache.store(&rates, Utc::now()) {
                    log::warn!("Failed to persist FX cache: {}", e);
                }
                Some(rates)
            }
            Err(e) => {
                log::warn!("FX rates unavailable from {}: {}", self.provider.id(), e);
                None
            }
        }
    }

    async fn refresh(&self) -> Option<Arc<RatesSnapshot>> {
        let rates = self.fetch_rates().await?;
        Some(self.install(RatesSnapshot::new(
            rates,
            RateSource::Live,
            Some(Utc::now()),
        )))
    }
}
