//! Stored resolver - the visitor's previously persisted choice.
//!
//! This is the first resolver in the chain. The caller loads the stored
//! preference into [`RegionContext::stored_currency`] before resolving.

use async_trait::async_trait;

use crate::models::{Currency, RegionContext};

use super::traits::{ResolutionSource, Resolver};

pub struct StoredResolver;

impl StoredResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StoredResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Resolver for StoredResolver {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Stored
    }

    async fn resolve(&self, context: &RegionContext) -> Option<Currency> {
        context
            .stored_currency
            .as_ref()
            .filter(|code| !code.trim().is_empty())
            .cloned()
    }
}
