use serde::{Deserialize, Serialize};

use super::types::Currency;

/// Best-effort location of a visitor, as reported by a geolocation provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    /// ISO 3166-1 alpha-2 country code, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// ISO 4217 currency of that country, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}
