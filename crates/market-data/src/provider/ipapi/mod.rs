//! ipapi.co geolocation provider.
//!
//! `GET {base}/json/` locates the caller; `GET {base}/{ip}/json/` locates a
//! specific client. Failures are reported in-band as
//! `{"error": true, "reason": "..."}`.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::GeoLocation;
use crate::provider::{http_client, GeoProvider, REQUEST_TIMEOUT};

/// Provider ID constant
const PROVIDER_ID: &str = "IPAPI";

/// Public endpoint used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://ipapi.co";

#[derive(Debug, Deserialize)]
struct IpapiResponse {
    #[serde(default)]
    error: bool,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    country_code: Option<String>,
    #[serde(default)]
    currency: Option<String>,
}

/// ipapi.co geolocation provider.
pub struct IpapiProvider {
    client: Client,
    base_url: String,
}

impl IpapiProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: http_client(timeout),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, ip: Option<IpAddr>) -> String {
        match ip {
            Some(ip) => format!("{}/{}/json/", self.base_url, ip),
            None => format!("{}/json/", self.base_url),
        }
    }

    fn parse_response(body: &[u8]) -> Result<GeoLocation, MarketDataError> {
        let response: IpapiResponse = serde_json::from_slice(body)
            .map_err(|e| MarketDataError::malformed(PROVIDER_ID, e.to_string()))?;

        if response.error {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: response
                    .reason
                    .unwrap_or_else(|| "lookup failed".to_string()),
            });
        }

        let currency = response
            .currency
            .map(|c| c.trim().to_ascii_uppercase())
            .filter(|c| c.len() == 3 && c.chars().all(|ch| ch.is_ascii_alphabetic()));

        Ok(GeoLocation {
            country_code: response
                .country_code
                .map(|c| c.trim().to_ascii_uppercase())
                .filter(|c| !c.is_empty()),
            currency: currency.map(Into::into),
        })
    }
}

impl Default for IpapiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeoProvider for IpapiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn locate(&self, ip: Option<IpAddr>) -> Result<GeoLocation, MarketDataError> {
        let response = self
            .client
            .get(self.build_url(ip))
            .send()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MarketDataError::from_transport(PROVIDER_ID, e))?;

        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let provider = IpapiProvider::new();
        assert_eq!(provider.build_url(None), "https://ipapi.co/json/");

        let ip: IpAddr = "203.0.113.9".parse().unwrap();
        assert_eq!(
            provider.build_url(Some(ip)),
            "https://ipapi.co/203.0.113.9/json/"
        );
    }

    #[test]
    fn test_parse_location() {
        let body = br#"{"ip":"203.0.113.9","country_code":"GB","currency":"GBP"}"#;
        let location = IpapiProvider::parse_response(body).unwrap();
        assert_eq!(location.country_code.as_deref(), Some("GB"));
        assert_eq!(location.currency.as_deref(), Some("GBP"));
    }

    #[test]
    fn test_parse_rejects_bad_currency() {
        let body = br#"{"country_code":"GB","currency":"pound"}"#;
        let location = IpapiProvider::parse_response(body).unwrap();
        assert!(location.currency.is_none());
    }

    #[test]
    fn test_parse_reported_error() {
        let body = br#"{"error":true,"reason":"RateLimited"}"#;
        let err = IpapiProvider::parse_response(body).unwrap_err();
        match err {
            MarketDataError::ProviderError { message, .. } => assert_eq!(message, "RateLimited"),
            other => panic!("Expected ProviderError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let err = IpapiProvider::parse_response(b"not json").unwrap_err();
        assert!(matches!(err, MarketDataError::MalformedPayload { .. }));
    }
}
