use std::net::IpAddr;

use super::types::Currency;

/// Request context for currency resolution.
///
/// Every field is optional: a resolver that needs a missing field simply
/// declines and the chain moves on.
#[derive(Clone, Debug, Default)]
pub struct RegionContext {
    /// Currency previously chosen by the visitor
    pub stored_currency: Option<Currency>,

    /// Client address used for IP geolocation
    pub client_ip: Option<IpAddr>,

    /// Preferred locale as a BCP-47 tag (e.g. "en-US")
    pub locale: Option<String>,
}

impl RegionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored_currency(mut self, currency: impl Into<Currency>) -> Self {
        self.stored_currency = Some(currency.into());
        self
    }

    pub fn with_client_ip(mut self, ip: IpAddr) -> Self {
        self.client_ip = Some(ip);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}
