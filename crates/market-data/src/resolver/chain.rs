//! Resolver chain - composite resolver that tries strategies in order.
//!
//! The resolver chain is the main entry point for currency resolution. It
//! combines multiple resolvers and returns the first currency any of them
//! produces, falling back to the base currency.

use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{Currency, RegionContext, BASE_CURRENCY};
use crate::provider::GeoProvider;

use super::geo_resolver::GeoResolver;
use super::locale_resolver::LocaleResolver;
use super::stored_resolver::StoredResolver;
use super::traits::{CurrencyResolver, ResolutionSource, ResolvedCurrency, Resolver};

/// Composite resolver that tries multiple resolvers in order.
///
/// The default resolution order is:
/// 1. Stored visitor preference
/// 2. IP geolocation (when a provider is configured)
/// 3. Locale heuristic
///
/// When none of them answers, the base currency (USD) is returned.
///
/// # Example
///
/// ```ignore
/// let chain = ResolverChain::new(Some(Arc::new(IpapiProvider::new())));
/// let context = RegionContext::new().with_locale("en-GB");
///
/// let resolved = chain.resolve(&context).await;
/// // resolved.currency = "GBP" unless geolocation answered first
/// ```
pub struct ResolverChain {
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolverChain {
    /// Create a new ResolverChain with the default resolver order.
    pub fn new(geo_provider: Option<Arc<dyn GeoProvider>>) -> Self {
        let mut chain = Self::empty();
        chain.add_resolver(Box::new(StoredResolver::new()));
        if let Some(provider) = geo_provider {
            chain.add_resolver(Box::new(GeoResolver::new(provider)));
        }
        chain.add_resolver(Box::new(LocaleResolver::new()));
        chain
    }

    /// Create a chain with no strategies; it always answers the base currency.
    pub fn empty() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Append a resolver to the end of the chain.
    pub fn add_resolver(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

#[async_trait]
impl CurrencyResolver for ResolverChain {
    async fn resolve(&self, context: &RegionContext) -> ResolvedCurrency {
        for resolver in &self.resolvers {
            if let Some(currency) = resolver.resolve(context).await {
                return ResolvedCurrency {
                    currency,
                    source: resolver.source(),
                };
            }
        }

        ResolvedCurrency {
            currency: Currency::Borrowed(BASE_CURRENCY),
            source: ResolutionSource::Default,
        }
    }
}
