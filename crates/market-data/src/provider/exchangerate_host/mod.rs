//! exchangerate.host provider for USD-based FX rates.
//!
//! Requests `GET {base}/latest?base=USD&symbols=...`. The classic payload
//! carries a `rates` object keyed by currency code; newer deployments answer
//! with a `quotes` object keyed by `USD<code>` pairs. Both are accepted.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{RateTable, BASE_CURRENCY};
use crate::provider::{http_client, RateProvider, REQUEST_TIMEOUT};

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGERATE_HOST";

/// Public endpoint used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.exchangerate.host";

/// API response from exchangerate.host
#[derive(Debug, Deserialize)]
struct LatestResponse {
    /// Absent on the classic API, `false` on errors from the keyed API
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    rates: Option<HashMap<String, Value>>,
    #[serde(default)]
    quotes: Option<HashMap<String, Value>>,
    #[serde(default)]
    error: Option<Value>,
}

/// exchangerate.host FX provider.
///
/// # Example
///
/// ```ignore
/// use showroom_market_data::ExchangeRateHostProvider;
///
/// let provider = ExchangeRateHostProvider::new(None);
/// let table = provider.latest_rates(&["EUR", "GBP"]).await?;
/// ```
pub struct ExchangeRateHostProvider {
    client: Client,
    base_url: String,
    access_key: Option<String>,
}

impl ExchangeRateHostProvider {
    /// Create a provider against the public endpoint.
    pub fn new(access_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, access_key)
    }

    /// Create a provider against a custom endpoint (mirrors, test doubles).
    pub fn with_base_url(base_url: impl Into<String>, access_key: Option<String>) -> Self {
        Self::with_timeout(base_url, access_key, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        access_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: http_client(timeout),
            base_url,
            access_key: access_key.filter(|k| !k.trim().is_empty()),
        }
    }

    fn build_url(&self, symbols: &[&str]) -> String {
        let mut url = format!(
            "{}/latest?base={}&symbols={}",
            self.base_url,
            BASE_CURRENCY,
            symbols.join(",")
        );
        if let Some(key) = &self.access_key {
            url.push_str("&access_key=");
            url.push_str(&urlencoding::encode(key));
        }
        url
    }

    /// Turn a response body into a normalized table.
    fn parse_response(body: &[u8]) -> Result<RateTable, MarketDataError> {
        let response: LatestResponse = serde_json::from_slice(body)
            .map_err(|e| MarketDataError::malformed(PROVIDER_ID, e.to_string()))?;

        if response.success == Some(false) {
            let message = response
                .error
                .map(|e| match e {
                    Value::Object(map) => map
                        .get("info")
                        .or_else(|| map.get("type"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| "API request failed".to_string()),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| "API request failed".to_string());
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message,
            });
        }

        let raw: Vec<(String, f64)> = match (response.rates, response.quotes) {
            (Some(rates), _) => numeric_entries(rates),
            (None, Some(quotes)) => numeric_entries(quotes)
                .into_iter()
                .filter_map(|(pair, rate)| {
                    pair.strip_prefix(BASE_CURRENCY)
                        .map(|code| (code.to_string(), rate))
                })
                .collect(),
            (None, None) => {
                return Err(MarketDataError::malformed(
                    PROVIDER_ID,
                    "response has no rates object",
                ))
            }
        };

        let table = RateTable::from_rates(raw);
        if table.len() <= 1 {
            return Err(MarketDataError::malformed(
                PROVIDER_ID,
                "response contains no usable rates",
            ));
        }
        Ok(table)
    }
}

fn numeric_entries(map: HashMap<String, Value>) -> Vec<(String, f64)> {
    map.into_iter()
        .filter_map(|(code, value)| value.as_f64().map(|rate| (code, rate)))
        .collect()
}

#[async_trait]
impl RateProvider for ExchangeRateHostProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_rates(&self, symbols: &[&str]) -> Result<RateTable, MarketDataError> {
        let url = self.build_url(symbols);
        log::debug!("Fetching FX rates from {}", self.base_url);

        let response = self
            .client
            .get(&url)
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
