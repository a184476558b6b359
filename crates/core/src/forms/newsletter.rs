use serde::{Deserialize, Serialize};

use super::validation::{is_valid_email, FormStatus, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterForm {
    pub email: String,
}

pub fn submit_newsletter(form: &NewsletterForm) -> FormStatus {
    if !is_valid_email(&form.email) {
        return ValidationError::InvalidEmail.into();
    }
    log::info!("Newsletter signup for {}", form.email.trim());
    FormStatus::success("You're subscribed. Watch your inbox for launch news.")
}
