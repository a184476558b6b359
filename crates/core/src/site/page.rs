use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculators::{
    calculate_finance, calculate_lease, FinanceInputs, FinanceView, LeaseInputs, LeaseView,
    ResultFormatter,
};
use crate::currency::{select_currency, toggle_states, CurrencyToggle};
use crate::fx::{RateSource, RatesSnapshot};
use crate::pricing::{PriceRenderer, RenderedPrice};

use super::catalog::SiteCatalog;

/// Everything the page shows for one currency, derived from scratch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub currency: String,
    pub rate: f64,
    pub rate_source: RateSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates_as_of: Option<DateTime<Utc>>,
    pub toggles: Vec<CurrencyToggle>,
    pub prices: Vec<RenderedPrice>,
    pub finance: FinanceView,
    pub lease: LeaseView,
}

impl PageView {
    /// Render the catalog and both estimators in `currency`.
    ///
    /// A currency the snapshot cannot price is shown in USD.
    pub fn build(
        currency: &str,
        snapshot: &RatesSnapshot,
        catalog: &SiteCatalog,
        renderer: &PriceRenderer,
        finance: &FinanceInputs,
        lease: &LeaseInputs,
    ) -> Self {
        let currency = select_currency(currency, snapshot);
        let rate = snapshot.effective_rate(&currency);
        let formatter = ResultFormatter::new(currency.clone(), rate);

        Self {
            rate,
            rate_source: snapshot.source,
            rates_as_of: snapshot.as_of,
            toggles: toggle_states(&catalog.toggles, &currency),
            prices: renderer.render(&catalog.prices, &currency, snapshot),
            finance: formatter.finance(&calculate_finance(finance)),
            lease: formatter.lease(&calculate_lease(lease)),
            currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PriceEntry;

    fn catalog() -> SiteCatalog {
        SiteCatalog {
            prices: vec![PriceEntry::new(1000.0), PriceEntry::new(25.0)],
            toggles: vec!["USD".into(), "EUR".into(), "GBP".into()],
            ..SiteCatalog::default()
        }
    }

    fn build(currency: &str) -> PageView {
        let catalog = catalog();
        PageView::build(
            currency,
            &RatesSnapshot::static_default(),
            &catalog,
            &PriceRenderer::new(),
            &FinanceInputs::from(&catalog.finance_defaults),
            &LeaseInputs::from(&catalog.lease_defaults),
        )
    }

    #[test]
    fn test_build_in_selected_currency() {
        let page = build("GBP");
        assert_eq!(page.currency, "GBP");
        assert_eq!(page.rate, 0.79);
        assert_eq!(page.rate_source, RateSource::Static);
        assert_eq!(page.prices[0].text, "£790");
        assert_eq!(page.prices[1].text, "£19.75");

        let active: Vec<&str> = page
            .toggles
            .iter()
            .filter(|t| t.active)
            .map(|t| t.code.as_str())
            .collect();
        assert_eq!(active, vec!["GBP"]);
    }

    #[test]
    fn test_unknown_currency_renders_usd() {
        let page = build("XYZ");
        assert_eq!(page.currency, "USD");
        assert_eq!(page.rate, 1.0);
        assert!(page.toggles[0].active);
    }

    #[test]
    fn test_empty_estimator_inputs_are_zero() {
        let page = build("USD");
        assert_eq!(page.finance.monthly_payment, "$0");
        assert_eq!(page.lease.monthly_payment, "$0");
    }
}
