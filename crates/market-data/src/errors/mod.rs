//! Error types for the market data crate.
//!
//! Providers return [`MarketDataError`]; callers in the core crate log these
//! and fall back to the next tier instead of surfacing them to visitors.

use thiserror::Error;

/// Errors that can occur while talking to an FX or geolocation provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-success HTTP status.
    #[error("Provider {provider} returned HTTP {status}")]
    HttpStatus {
        /// The provider that answered
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The provider answered, but the payload could not be used.
    #[error("Malformed payload from {provider}: {message}")]
    MalformedPayload {
        /// The provider that answered
        provider: String,
        /// What was wrong with the payload
        message: String,
    },

    /// The provider reported an error in its payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that reported the error
        provider: String,
        /// The reason reported by the provider
        message: String,
    },

    /// The request timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Wrap a transport error, keeping timeouts distinguishable in logs.
    pub fn from_transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }

    pub fn malformed(provider: &str, message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            provider: provider.to_string(),
            message: message.into(),
        }
    }
}
