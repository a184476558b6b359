//! Geolocation resolver - the currency of the visitor's IP location.
//!
//! Lookups are best effort: any provider failure is logged and the chain
//! moves on to the next strategy. Without a client address there is nothing
//! to locate, so the resolver declines.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Currency, RegionContext};
use crate::provider::GeoProvider;

use super::traits::{ResolutionSource, Resolver};

pub struct GeoResolver {
    provider: Arc<dyn GeoProvider>,
}

impl GeoResolver {
    pub fn new(provider: Arc<dyn GeoProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Resolver for GeoResolver {
    fn source(&self) -> ResolutionSource {
        ResolutionSource::Geolocation
    }

    async fn resolve(&self, context: &RegionContext) -> Option<Currency> {
        let ip = context.client_ip?;
        match self.provider.locate(Some(ip)).await {
            Ok(location) => {
                if location.currency.is_none() {
                    log::debug!("{} returned no currency for {}", self.provider.id(), ip);
                }
                location.currency
            }
            Err(e) => {
                log::warn!("Geolocation lookup via {} failed: {}", self.provider.id(), e);
                None
            }
        }
    }
}
