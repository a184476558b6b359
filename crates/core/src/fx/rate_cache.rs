use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use showroom_market_data::RateTable;

use super::fx_model::CachedRates;
use crate::constants::{RATE_CACHE_KEY, RATE_CACHE_TTL_HOURS};
use crate::errors::Result;
use crate::storage::KeyValueStore;

/// Time-limited persistence of the last live FX table.
#[derive(Clone)]
pub struct RateCache {
    store: Arc<dyn KeyValueStore>,
    ttl: Duration,
}

impl RateCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            ttl: Duration::hours(RATE_CACHE_TTL_HOURS),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Read the cached table if one exists and is younger than the TTL at `now`.
    ///
    /// Missing, unreadable and expired entries all read as `None`.
    pub fn load(&self, now: DateTime<Utc>) -> Option<CachedRates> {
        let raw = match self.store.get(RATE_CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("Failed to read FX cache: {}", e);
                return None;
            }
        };

        let cached: CachedRates = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                log::warn!("Ignoring unreadable FX cache entry: {}", e);
                return None;
            }
        };

        if now.signed_duration_since(cached.timestamp) >= self.ttl {
            log::debug!("FX cache from {} has expired", cached.timestamp);
            return None;
        }

        Some(cached)
    }

    pub fn store(&self, rates: &RateTable, timestamp: DateTime<Utc>) -> Result<()> {
        let entry = CachedRates {
            timestamp,
            rates: rates.clone(),
        };
        let json = serde_json::to_string(&entry)?;
        self.store.set(RATE_CACHE_KEY, &json)
    }
}
