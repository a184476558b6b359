use serde::{Deserialize, Serialize};

use super::validation::{is_valid_email, required, FormStatus, ValidationError};

const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        required(&self.name, "name")?;
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
            return Err(ValidationError::MessageTooShort {
                min: MIN_MESSAGE_CHARS,
            });
        }
        Ok(())
    }
}

pub fn submit_contact(form: &ContactForm) -> FormStatus {
    match form.validate() {
        Ok(()) => {
            log::info!("Contact request received from {}", form.email.trim());
            FormStatus::success(format!(
                "Thanks {}, we'll be in touch shortly.",
                form.name.trim()
            ))
        }
        Err(e) => e.into(),
    }
}
