use crate::fx::RatesSnapshot;

use super::money_format::format_money;
use super::precision::PrecisionRules;
use super::price_model::{PriceEntry, RenderedPrice};

/// Converts USD price entries into display text for one currency.
///
/// Rendering is a pure function of the entries, currency and snapshot, so
/// rendering the same inputs twice gives identical output.
#[derive(Clone, Debug, Default)]
pub struct PriceRenderer {
    rules: PrecisionRules,
}

impl PriceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: PrecisionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &PrecisionRules {
        &self.rules
    }

    pub fn render(
        &self,
        entries: &[PriceEntry],
        currency: &str,
        snapshot: &RatesSnapshot,
    ) -> Vec<RenderedPrice> {
        let rate = snapshot.effective_rate(currency);
        entries
            .iter()
            .map(|entry| self.render_entry(entry, currency, rate))
            .collect()
    }

    /// Render a single entry at an already resolved rate.
    pub fn render_entry(&self, entry: &PriceEntry, currency: &str, rate: f64) -> RenderedPrice {
        let usd_amount = if entry.usd_amount.is_finite() {
            entry.usd_amount
        } else {
            0.0
        };
        let amount = usd_amount * rate;
        let decimals = self.rules.decimals_for(entry);

        let mut text = format_money(amount, currency, decimals);
        if let Some(billing) = &entry.billing {
            text.push(' ');
            text.push_str(billing);
        }

        RenderedPrice {
            id: entry.id.clone(),
            usd_amount,
            currency: currency.to_string(),
            amount,
            decimals,
            text,
        }
    }
}
