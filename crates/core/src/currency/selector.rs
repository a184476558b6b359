use serde::{Deserialize, Serialize};
use showroom_market_data::BASE_CURRENCY;

use crate::fx::RatesSnapshot;

/// Trim and upper-case a currency code.
pub fn normalize_currency_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Resolve a requested code against the active and static tables.
///
/// Unknown or empty codes become USD.
pub fn select_currency(raw: &str, snapshot: &RatesSnapshot) -> String {
    let code = normalize_currency_code(raw);
    if !code.is_empty() && snapshot.supports(&code) {
        code
    } else {
        if !code.is_empty() {
            log::debug!("Unsupported currency {:?}, using {}", code, BASE_CURRENCY);
        }
        BASE_CURRENCY.to_string()
    }
}

/// Visual state of one currency toggle control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyToggle {
    pub code: String,
    pub active: bool,
}

/// Pressed state for every toggle: active exactly when its code is `selected`.
///
/// `codes` must be unique (as [`SiteCatalog::from_html`] produces them);
/// duplicates would each be marked active.
///
/// [`SiteCatalog::from_html`]: crate::site::SiteCatalog::from_html
pub fn toggle_states(codes: &[String], selected: &str) -> Vec<CurrencyToggle> {
    codes
        .iter()
        .map(|code| CurrencyToggle {
            code: code.clone(),
            active: normalize_currency_code(code) == selected,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_are_kept() {
        let snapshot = RatesSnapshot::static_default();
        assert_eq!(select_currency("EUR", &snapshot), "EUR");
        assert_eq!(select_currency(" gbp ", &snapshot), "GBP");
    }

    #[test]
    fn test_unknown_codes_become_usd() {
        let snapshot = RatesSnapshot::static_default();
        assert_eq!(select_currency("XYZ", &snapshot), "USD");
        assert_eq!(select_currency("", &snapshot), "USD");
        assert_eq!(select_currency("euro", &snapshot), "USD");
    }

    #[test]
    fn test_toggle_states() {
        let codes = vec!["USD".to_string(), "EUR".to_string(), "GBP".to_string()];
        let toggles = toggle_states(&codes, "EUR");
        let active: Vec<&str> = toggles
            .iter()
            .filter(|t| t.active)
            .map(|t| t.code.as_str())
            .collect();
        assert_eq!(active, vec!["EUR"]);
        assert_eq!(toggles.len(), 3);
    }

    #[test]
    fn test_no_toggle_active_for_unlisted_currency() {
        let codes = vec!["USD".to_string(), "EUR".to_string()];
        assert!(toggle_states(&codes, "JPY").iter().all(|t| !t.active));
    }
}
