use serde::{Deserialize, Serialize};

use super::inputs::LeaseInputs;

/// Converts a money factor to its approximate APR.
const MONEY_FACTOR_TO_APR: f64 = 2400.0;

/// Lease estimate in USD.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseQuote {
    pub residual_value: f64,
    pub depreciation: f64,
    pub rent_charge: f64,
    pub monthly_payment: f64,
    /// Drive-off plus the first monthly payment
    pub due_at_signing: f64,
    pub equivalent_apr: f64,
}

pub fn calculate_lease(inputs: &LeaseInputs) -> LeaseQuote {
    let term = f64::from(inputs.term_months.max(1));
    let residual_value = inputs.msrp * inputs.residual_percent / 100.0;
    // max(0) absorbs rounding when the residual is the full price
    let depreciation = ((inputs.msrp - residual_value) / term).max(0.0);
    let rent_charge = (inputs.msrp + residual_value) * inputs.money_factor;
    let monthly_payment = depreciation + rent_charge;

    LeaseQuote {
        residual_value,
        depreciation,
        rent_charge,
        monthly_payment,
        due_at_signing: inputs.drive_off + monthly_payment,
        equivalent_apr: inputs.money_factor * MONEY_FACTOR_TO_APR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::inputs::LeaseForm;

    #[test]
    fn test_lease_breakdown() {
        let quote = calculate_lease(&LeaseInputs {
            msrp: 40000.0,
            residual_percent: 58.0,
            money_factor: 0.0025,
            term_months: 36,
            drive_off: 0.0,
        });
        assert_eq!(quote.residual_value, 23200.0);
        assert!((quote.depreciation - 466.67).abs() < 0.01);
        assert!((quote.rent_charge - 158.0).abs() < 1e-9);
        assert!((quote.monthly_payment - 624.67).abs() < 0.01);
        assert_eq!(quote.due_at_signing, quote.monthly_payment);
        assert!((quote.equivalent_apr - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_due_at_signing_includes_drive_off() {
        let quote = calculate_lease(&LeaseInputs {
            msrp: 30000.0,
            residual_percent: 50.0,
            money_factor: 0.0,
            term_months: 30,
            drive_off: 2000.0,
        });
        assert_eq!(quote.monthly_payment, 500.0);
        assert_eq!(quote.due_at_signing, 2500.0);
    }

    #[test]
    fn test_full_residual_has_no_depreciation() {
        let quote = calculate_lease(&LeaseInputs {
            msrp: 30000.0,
            residual_percent: 100.0,
            money_factor: 0.001,
            term_months: 24,
            drive_off: 0.0,
        });
        assert_eq!(quote.depreciation, 0.0);
        assert!((quote.monthly_payment - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_huge_msrp_stays_finite() {
        let quote = calculate_lease(&LeaseInputs::from(LeaseForm {
            msrp: 1.0e308,
            residual_percent: 100.0,
            money_factor: 0.0,
            term_months: 36.0,
            drive_off: 0.0,
        }));
        assert_eq!(quote.residual_value, 1.0e12);
        assert_eq!(quote.depreciation, 0.0);
        assert_eq!(quote.rent_charge, 0.0);
        assert_eq!(quote.monthly_payment, 0.0);
    }
}
