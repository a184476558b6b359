use serde::{Deserialize, Serialize};

use super::price_model::{PriceEntry, UnitKind};

/// Decimal places used when displaying a price.
///
/// Defaults: per-watt prices show cents, per-square-foot prices are whole,
/// and other prices show cents only when they are small one-off amounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrecisionRules {
    pub per_watt_decimals: u32,
    pub per_sqft_decimals: u32,
    /// USD amounts below this (without a billing suffix) count as small
    pub small_amount_threshold: f64,
    pub small_amount_decimals: u32,
    pub default_decimals: u32,
}

impl Default for PrecisionRules {
    fn default() -> Self {
        Self {
            per_watt_decimals: 2,
            per_sqft_decimals: 0,
            small_amount_threshold: 100.0,
            small_amount_decimals: 2,
            default_decimals: 0,
        }
    }
}

impl PrecisionRules {
    pub fn decimals_for(&self, entry: &PriceEntry) -> u32 {
        match entry.unit {
            UnitKind::PerWatt => self.per_watt_decimals,
            UnitKind::PerSqft => self.per_sqft_decimals,
            UnitKind::Plain => {
                if entry.usd_amount < self.small_amount_threshold && entry.billing.is_none() {
                    self.small_amount_decimals
                } else {
                    self.default_decimals
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = PrecisionRules::default();
        let watt = PriceEntry::new(2500.0).with_unit(UnitKind::PerWatt);
        let sqft = PriceEntry::new(4.5).with_unit(UnitKind::PerSqft);
        let small = PriceEntry::new(99.99);
        let small_billed = PriceEntry::new(49.0).with_billing("/mo");
        let large = PriceEntry::new(100.0);

        assert_eq!(rules.decimals_for(&watt), 2);
        assert_eq!(rules.decimals_for(&sqft), 0);
        assert_eq!(rules.decimals_for(&small), 2);
        assert_eq!(rules.decimals_for(&small_billed), 0);
        assert_eq!(rules.decimals_for(&large), 0);
    }

    #[test]
    fn test_partial_rules_from_json() {
        let rules: PrecisionRules = serde_json::from_str(r#"{"perSqftDecimals":1}"#).unwrap();
        assert_eq!(rules.per_sqft_decimals, 1);
        assert_eq!(rules.per_watt_decimals, 2);
    }
}
