//! Core error types for the showroom service.
//!
//! Fallback paths (FX fetch, cache reads, geolocation) never produce these;
//! they log and degrade. Errors are reserved for failures a caller has to
//! act on, such as a store that cannot be written.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to read markup: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid markup selector: {0}")]
    Markup(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
