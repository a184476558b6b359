use std::path::Path;

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};

use crate::calculators::{parse_number, FinanceForm, LeaseForm};
use crate::currency::normalize_currency_code;
use crate::errors::{Error, Result};
use crate::pricing::{parse_display_amount, PriceEntry, UnitKind};

const PRICE_SELECTOR: &str = "[data-usd], .price";
const TOGGLE_SELECTOR: &str = "[data-currency]";
const INPUT_SELECTOR: &str = "input[id]";

/// Typed view of the page markup, built once at startup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteCatalog {
    pub prices: Vec<PriceEntry>,
    /// Currency codes offered by toggle controls, in page order
    pub toggles: Vec<String>,
    pub finance_defaults: FinanceForm,
    pub lease_defaults: LeaseForm,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Markup(format!("{css}: {e}")))
}

impl SiteCatalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path)?;
        let catalog = Self::from_html(&html)?;
        log::info!(
            "Loaded catalog from {}: {} prices, {} currency toggles",
            path.display(),
            catalog.prices.len(),
            catalog.toggles.len()
        );
        Ok(catalog)
    }

    pub fn from_html(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);

        let prices = document
            .select(&selector(PRICE_SELECTOR)?)
            .map(price_entry)
            .collect();

        let mut toggles: Vec<String> = Vec::new();
        for element in document.select(&selector(TOGGLE_SELECTOR)?) {
            let code = element
                .value()
                .attr("data-currency")
                .map(normalize_currency_code)
                .unwrap_or_default();
            if !code.is_empty() && !toggles.contains(&code) {
                toggles.push(code);
            }
        }

        let mut finance = FinanceForm::default();
        let mut lease = LeaseForm::default();
        for input in document.select(&selector(INPUT_SELECTOR)?) {
            let value = parse_number(input.value().attr("value").unwrap_or_default());
            match input.value().id().unwrap_or_default() {
                "fin-price" => {
                    finance.price = value;
                    lease.msrp = value;
                }
                "fin-down" => finance.down_payment = value,
                "fin-trade" => finance.trade_in = value,
                "fin-term" => finance.term_months = value,
                "fin-apr" => finance.apr = value,
                "lease-residual" => lease.residual_percent = value,
                "lease-mf" => lease.money_factor = value,
                "lease-term" => lease.term_months = value,
                "lease-driveoff" => lease.drive_off = value,
                _ => {}
            }
        }

        Ok(Self {
            prices,
            toggles,
            finance_defaults: finance,
            lease_defaults: lease,
        })
    }
}

/// `data-usd` when it parses, else the digits of the element's text.
fn price_entry(element: ElementRef<'_>) -> PriceEntry {
    let attrs = element.value();
    let usd_amount = attrs
        .attr("data-usd")
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or_else(|| parse_display_amount(&element.text().collect::<String>()));

    let mut entry = PriceEntry::new(usd_amount).with_unit(UnitKind::from_attr(attrs.attr("data-unit")));
    if let Some(id) = attrs.id() {
        entry = entry.with_id(id);
    }
    if let Some(billing) = attrs.attr("data-billing") {
        entry = entry.with_billing(billing.trim());
    }
    entry
}
