//! Contact request/response bodies and their validation.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Address syntax accepted by the contact form: a local part of letters,
    /// digits and `_ ' + - .` that does not end in `'` or `.`, then one or more
    /// dotted domain labels and an alphabetic TLD of at least two letters.
    static ref RE_EMAIL: Regex = Regex::new(
        r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$"
    ).unwrap();
}

/// Response message for a successful relay.
pub const MSG_SENT: &str = "Message sent successfully.";
/// Response message when credentials or sender are missing.
pub const MSG_NOT_CONFIGURED: &str = "Email service is not configured.";
/// Response message when the provider rejected the notification.
pub const MSG_SEND_FAILED: &str = "Failed to send email.";
/// Response message for a payload failing validation.
pub const MSG_INVALID_INPUT: &str = "Invalid input";
/// Response message for a body that is not JSON.
pub const MSG_INVALID_JSON: &str = "Invalid JSON";

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// First name
    pub name: String,
    /// Last name
    pub surname: String,
    /// Reply address of the visitor
    pub email: String,
    /// Free-text message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Check required fields and email syntax.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::InvalidInput("name is required".to_string()));
        }
        if self.surname.is_empty() {
            return Err(Error::InvalidInput("surname is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(Error::InvalidInput(format!("invalid email address: {:?}", self.email)));
        }
        Ok(())
    }

    /// The message, if it contains anything besides whitespace.
    pub fn message_text(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Body of every contact endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    /// Whether the notification was relayed
    pub ok: bool,
    /// Human-readable outcome
    pub message: String,
}

impl ContactResponse {
    /// Successful response.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    /// Failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Email address syntax check.
///
/// Rejects a leading dot and consecutive dots anywhere in the address in
/// addition to the character rules of the address pattern.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && RE_EMAIL.is_match(email)
}

/// Decode and validate a JSON contact payload.
pub fn parse_contact_payload(value: serde_json::Value) -> Result<ContactRequest> {
    let request: ContactRequest =
        serde_json::from_value(value).map_err(|e| Error::InvalidInput(e.to_string()))?;
    request.validate()?;
    Ok(request)
}
