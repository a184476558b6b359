use serde::{Deserialize, Serialize};

use crate::pricing::{format_money, format_number};

use super::finance::FinanceQuote;
use super::lease::LeaseQuote;

/// Estimator results are shown as whole currency units
const RESULT_DECIMALS: u32 = 0;

/// Finance estimate converted and formatted for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceView {
    pub usd: FinanceQuote,
    pub principal: String,
    pub monthly_payment: String,
    pub total_cost: String,
    pub total_interest: String,
}

/// Lease estimate converted and formatted for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseView {
    pub usd: LeaseQuote,
    pub residual_value: String,
    pub depreciation: String,
    pub rent_charge: String,
    pub monthly_payment: String,
    pub due_at_signing: String,
    /// Percent with two decimals, e.g. `6.00%`
    pub equivalent_apr: String,
}

/// Formats USD calculator outputs in one currency at one rate.
#[derive(Clone, Debug)]
pub struct ResultFormatter {
    currency: String,
    rate: f64,
}

impl ResultFormatter {
    pub fn new(currency: impl Into<String>, rate: f64) -> Self {
        let rate = if rate.is_finite() && rate > 0.0 { rate } else { 1.0 };
        Self {
            currency: currency.into(),
            rate,
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Convert a USD amount and format it with no fraction digits.
    pub fn money(&self, usd: f64) -> String {
        format_money(usd * self.rate, &self.currency, RESULT_DECIMALS)
    }

    pub fn finance(&self, quote: &FinanceQuote) -> FinanceView {
        FinanceView {
            usd: *quote,
            principal: self.money(quote.principal),
            monthly_payment: self.money(quote.monthly_payment),
            total_cost: self.money(quote.total_cost),
            total_interest: self.money(quote.total_interest),
        }
    }

    pub fn lease(&self, quote: &LeaseQuote) -> LeaseView {
        LeaseView {
            usd: *quote,
            residual_value: self.money(quote.residual_value),
            depreciation: self.money(quote.depreciation),
            rent_charge: self.money(quote.rent_charge),
            monthly_payment: self.money(quote.monthly_payment),
            due_at_signing: self.money(quote.due_at_signing),
            equivalent_apr: format!("{}%", format_number(quote.equivalent_apr, 2)),
        }
    }
}
