use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    /// Format: local@domain.tld, no whitespace
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern");
}

/// Loose shape check: something@something.something, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your {0}.")]
    MissingField(&'static str),

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Your message must be at least {min} characters.")]
    MessageTooShort { min: usize },

    #[error("Please choose a vehicle.")]
    MissingVehicle,

    #[error("The selected vehicle has no usable range.")]
    InvalidRange,
}

/// Outcome shown to the visitor after submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormStatus {
    pub ok: bool,
    pub message: String,
    /// Whether the client should clear the form
    pub reset: bool,
}

impl FormStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            reset: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            reset: false,
        }
    }
}

impl From<ValidationError> for FormStatus {
    fn from(err: ValidationError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Trimmed value of a required text field.
pub(crate) fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}
