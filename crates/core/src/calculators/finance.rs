use serde::{Deserialize, Serialize};

use super::inputs::FinanceInputs;

/// Loan estimate in USD.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceQuote {
    pub principal: f64,
    pub monthly_payment: f64,
    pub total_cost: f64,
    pub total_interest: f64,
}

/// Standard amortized loan payment.
///
/// With a zero rate the principal is split evenly over the term.
pub fn calculate_finance(inputs: &FinanceInputs) -> FinanceQuote {
    let principal = (inputs.price - inputs.down_payment - inputs.trade_in).max(0.0);
    let term = f64::from(inputs.term_months.max(1));
    let monthly_rate = inputs.apr / 100.0 / 12.0;

    let monthly_payment = if monthly_rate == 0.0 {
        principal / term
    } else {
        // 1 - (1 + r)^-n, computed without cancellation for tiny r
        let discount = -(-term * monthly_rate.ln_1p()).exp_m1();
        let payment = principal * monthly_rate / discount;
        if payment.is_finite() {
            payment
        } else {
            principal / term
        }
    };
    let paid = monthly_payment * term;

    FinanceQuote {
        principal,
        monthly_payment,
        total_cost: paid + inputs.down_payment + inputs.trade_in,
        total_interest: (paid - principal).max(0.0),
    }
}
