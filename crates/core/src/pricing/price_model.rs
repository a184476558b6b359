use serde::{Deserialize, Serialize};

/// What a price is quoted per; drives decimal precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitKind {
    #[default]
    Plain,
    PerWatt,
    PerSqft,
}

impl UnitKind {
    /// Parse a `data-unit` attribute value. Unrecognized values are plain.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("watt" | "w" | "per-watt" | "perwatt") => UnitKind::PerWatt,
            Some("sqft" | "ft2" | "per-sqft" | "persqft") => UnitKind::PerSqft,
            _ => UnitKind::Plain,
        }
    }
}

/// One price-bearing element of the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEntry {
    /// Element id, when the markup gives one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub usd_amount: f64,
    #[serde(default)]
    pub unit: UnitKind,
    /// Billing period suffix such as "/mo"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<String>,
}

impl PriceEntry {
    pub fn new(usd_amount: f64) -> Self {
        Self {
            id: None,
            usd_amount,
            unit: UnitKind::Plain,
            billing: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_unit(mut self, unit: UnitKind) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_billing(mut self, billing: impl Into<String>) -> Self {
        let billing = billing.into();
        self.billing = if billing.trim().is_empty() {
            None
        } else {
            Some(billing)
        };
        self
    }
}

/// A price after conversion, ready for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub usd_amount: f64,
    pub currency: String,
    pub amount: f64,
    pub decimals: u32,
    pub text: String,
}

/// Recover a USD amount from displayed text by dropping every character
/// other than digits and `.`; text that still does not parse gives 0.
pub fn parse_display_amount(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
