use std::net::IpAddr;
use std::sync::Arc;

use showroom_market_data::{CurrencyResolver, RegionContext, ResolutionSource, ResolvedCurrency};

use crate::calculators::{
    calculate_finance, calculate_lease, FinanceForm, FinanceInputs, FinanceView, LeaseForm,
    LeaseInputs, LeaseView, ResultFormatter,
};
use crate::currency::{select_currency, CurrencyPreference};
use crate::fx::{FxServiceTrait, RatesSnapshot};
use crate::pricing::{PriceRenderer, RenderedPrice};
use crate::storage::KeyValueStore;

use super::catalog::SiteCatalog;
use super::page::PageView;

/// Who is asking: identity for the stored preference plus the hints the
/// resolver chain uses when nothing is stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visitor {
    pub id: Option<String>,
    pub client_ip: Option<IpAddr>,
    /// BCP-47 tag, e.g. `en-GB`
    pub locale: Option<String>,
}

impl Visitor {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

/// Entry point for everything a visitor can see or change on the page.
pub struct SiteService {
    catalog: Arc<SiteCatalog>,
    renderer: PriceRenderer,
    fx: Arc<dyn FxServiceTrait>,
    resolver: Arc<dyn CurrencyResolver>,
    store: Arc<dyn KeyValueStore>,
}

impl SiteService {
    pub fn new(
        catalog: Arc<SiteCatalog>,
        fx: Arc<dyn FxServiceTrait>,
        resolver: Arc<dyn CurrencyResolver>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            catalog,
            renderer: PriceRenderer::new(),
            fx,
            resolver,
            store,
        }
    }

    pub fn with_renderer(mut self, renderer: PriceRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn catalog(&self) -> &SiteCatalog {
        &self.catalog
    }

    pub fn snapshot(&self) -> Arc<RatesSnapshot> {
        self.fx.snapshot()
    }

    fn preference(&self, visitor: &Visitor) -> CurrencyPreference {
        CurrencyPreference::for_visitor(self.store.clone(), visitor.id.as_deref())
    }

    /// The visitor's display currency.
    ///
    /// Resolution order is stored choice, geolocation, locale, then USD. A
    /// resolved code the rate tables cannot price is reported as the USD
    /// default.
    pub async fn resolve_currency(&self, visitor: &Visitor) -> ResolvedCurrency {
        let mut context = RegionContext::new();
        if let Some(stored) = self.preference(visitor).load() {
            context = context.with_stored_currency(stored);
        }
        if let Some(ip) = visitor.client_ip {
            context = context.with_client_ip(ip);
        }
        if let Some(locale) = &visitor.locale {
            context = context.with_locale(locale.clone());
        }

        let resolved = self.resolver.resolve(&context).await;
        let snapshot = self.fx.snapshot();
        let currency = select_currency(&resolved.currency, &snapshot);
        if currency == resolved.currency {
            resolved
        } else {
            log::debug!(
                "Resolved currency {} is not priced, showing {}",
                resolved.currency,
                currency
            );
            ResolvedCurrency {
                currency: currency.into(),
                source: ResolutionSource::Default,
            }
        }
    }

    /// Full page in the visitor's currency with the catalog's estimator
    /// defaults.
    pub async fn page(&self, visitor: &Visitor) -> PageView {
        let resolved = self.resolve_currency(visitor).await;
        self.build_page(&resolved.currency)
    }

    /// Switch the visitor's currency, persist the choice and re-render.
    ///
    /// Unknown codes fall back to USD; the fallback is what gets stored.
    /// A failed write is logged and the page is still returned.
    pub fn set_currency(&self, visitor: &Visitor, code: &str) -> PageView {
        let snapshot = self.fx.snapshot();
        let currency = select_currency(code, &snapshot);
        match self.preference(visitor).save(&currency) {
            Ok(()) => log::debug!("Stored currency {} for visitor {:?}", currency, visitor.id),
            Err(e) => log::warn!(
                "Failed to persist currency {} for visitor {:?}: {}",
                currency,
                visitor.id,
                e
            ),
        }
        self.build_page(&currency)
    }

    /// Catalog prices rendered in `currency`, or the visitor's resolved
    /// currency when none is given.
    pub async fn prices(
        &self,
        visitor: &Visitor,
        currency: Option<&str>,
    ) -> (String, Vec<RenderedPrice>) {
        let snapshot = self.fx.snapshot();
        let currency = match currency {
            Some(code) => select_currency(code, &snapshot),
            None => self.resolve_currency(visitor).await.currency.into_owned(),
        };
        let prices = self
            .renderer
            .render(&self.catalog.prices, &currency, &snapshot);
        (currency, prices)
    }

    pub async fn finance_estimate(&self, visitor: &Visitor, form: &FinanceForm) -> FinanceView {
        let formatter = self.formatter(visitor).await;
        formatter.finance(&calculate_finance(&FinanceInputs::from(form)))
    }

    pub async fn lease_estimate(&self, visitor: &Visitor, form: &LeaseForm) -> LeaseView {
        let formatter = self.formatter(visitor).await;
        formatter.lease(&calculate_lease(&LeaseInputs::from(form)))
    }

    async fn formatter(&self, visitor: &Visitor) -> ResultFormatter {
        let resolved = self.resolve_currency(visitor).await;
        let rate = self.fx.snapshot().effective_rate(&resolved.currency);
        ResultFormatter::new(resolved.currency.into_owned(), rate)
    }

    fn build_page(&self, currency: &str) -> PageView {
        let snapshot = self.fx.snapshot();
        PageView::build(
            currency,
            &snapshot,
            &self.catalog,
            &self.renderer,
            &FinanceInputs::from(&self.catalog.finance_defaults),
            &LeaseInputs::from(&self.catalog.lease_defaults),
        )
    }
}
