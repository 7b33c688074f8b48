//! Contact-form submission model and validation.

use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FieldError;

/// Raw inbound contact-form body, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated contact submission.
///
/// Lives only for the duration of one request.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    name: String,
    email: EmailAddress,
    message: String,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = Vec<FieldError>;

    /// Validates every field and reports all failures at once.
    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = form.name.trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::new("name", "must not be empty"));
        }

        let email = match EmailAddress::parse_with_options(form.email.trim(), address_rules()) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.push(FieldError::new(
                    "email",
                    format!("not a valid email address: {}", e),
                ));
                None
            }
        };

        match email {
            Some(email) if errors.is_empty() => Ok(Self {
                name,
                email,
                message: form.message,
            }),
            _ => Err(errors),
        }
    }
}

/// Bare `local@domain.tld` addresses only: no display text, no IP literals.
fn address_rules() -> Options {
    Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld()
}

/// Confirmation returned to the caller once the alert is delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactReceipt {
    pub status: String,
    pub transaction_id: Uuid,
    pub message: String,
}

impl ContactReceipt {
    pub fn delivered(transaction_id: Uuid) -> Self {
        Self {
            status: "Delivered to Home Server".to_string(),
            transaction_id,
            message: "Data pipeline clear".to_string(),
        }
    }
}
