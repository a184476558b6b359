use std::sync::Arc;

use crate::constants::PREFERRED_CURRENCY_KEY;
use crate::errors::Result;
use crate::storage::KeyValueStore;

/// A visitor's persisted currency choice.
#[derive(Clone)]
pub struct CurrencyPreference {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CurrencyPreference {
    /// Preference scoped to one visitor; without an id the shared key is used.
    pub fn for_visitor(store: Arc<dyn KeyValueStore>, visitor_id: Option<&str>) -> Self {
        let key = match visitor_id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => format!("{}:{}", PREFERRED_CURRENCY_KEY, id),
            None => PREFERRED_CURRENCY_KEY.to_string(),
        };
        Self { store, key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored code, if any. Read failures are logged and read as `None`.
    pub fn load(&self) -> Option<String> {
        match self.store.get(&self.key) {
            Ok(value) => value.filter(|v| !v.trim().is_empty()),
            Err(e) => {
                log::warn!("Failed to read currency preference {}: {}", self.key, e);
                None
            }
        }
    }

    pub fn save(&self, code: &str) -> Result<()> {
        self.store.set(&self.key, code)
    }
}
