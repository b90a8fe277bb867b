//! Contact page form: field state and the submit round trip.

use super::payload::{ContactRequest, ContactResponse};
use crate::error::{Error, Result};
use crate::i18n::{LanguageContext, Notice};
use std::time::Duration;

/// Where a submission currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing in flight
    #[default]
    Idle,
    /// Request sent; the submit button is disabled
    Submitting,
    /// Server accepted the request
    Succeeded(String),
    /// Transport or server reported a failure
    Failed(String),
}

/// Posts a contact request and returns the HTTP status and decoded body.
pub trait ContactTransport {
    /// Send one request.
    fn post_contact(&self, request: &ContactRequest) -> Result<(u16, ContactResponse)>;
}

/// [`ContactTransport`] posting JSON to `{base_url}/api/contact`.
pub struct HttpContactTransport {
    url: String,
    agent: ureq::Agent,
}

impl HttpContactTransport {
    /// Create a transport for a site at `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(15)))
            .http_status_as_error(false)
            .build();
        Self {
            url: format!("{}/api/contact", base_url.trim_end_matches('/')),
            agent: config.into(),
        }
    }

    /// Full endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContactTransport for HttpContactTransport {
    fn post_contact(&self, request: &ContactRequest) -> Result<(u16, ContactResponse)> {
        let mut response = self
            .agent
            .post(&self.url)
            .send_json(request)
            .map_err(|e| Error::Mail(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_json::<ContactResponse>()
            .map_err(|e| Error::Mail(e.to_string()))?;
        Ok((status, body))
    }
}

/// Fields of the contact form plus its submission state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// First name (required)
    pub name: String,
    /// Last name (required)
    pub surname: String,
    /// Reply address (required)
    pub email: String,
    /// Phone number (shown on the form, not sent)
    pub phone: String,
    /// Free-text message
    pub message: String,
    state: SubmissionState,
}

impl ContactForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current submission state.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Whether the submit button should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Request body built from the fields.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            message: Some(self.message.clone()).filter(|m| !m.is_empty()),
        }
    }

    fn missing_required(&self) -> bool {
        self.name.is_empty() || self.surname.is_empty() || self.email.is_empty()
    }

    fn reset_fields(&mut self) {
        self.name.clear();
        self.surname.clear();
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }

    /// Submit the form and return the notice to show.
    ///
    /// Returns `None` when a submission is already in flight. Missing required
    /// fields produce a notice without contacting the server. On success the
    /// fields are reset.
    pub fn submit(&mut self, transport: &dyn ContactTransport, ctx: &LanguageContext) -> Option<Notice> {
        if self.is_submitting() {
            return None;
        }
        if self.missing_required() {
            return Some(Notice::new(
                ctx.pick("Fehlende Angaben", "Missing information"),
                ctx.pick(
                    "Bitte alle erforderlichen Felder ausfüllen.",
                    "Please fill in all required fields.",
                ),
            ));
        }

        self.state = SubmissionState::Submitting;
        let outcome = match transport.post_contact(&self.to_request()) {
            Ok((status, body)) if (200..300).contains(&status) && body.ok => Ok(body.message),
            Ok((_, body)) if !body.message.is_empty() => Err(body.message),
            Ok(_) => Err("Submission failed".to_string()),
            Err(e) => Err(e.to_string()),
        };

        match outcome {
            Ok(message) => {
                self.reset_fields();
                self.state = SubmissionState::Succeeded(message.clone());
                Some(Notice::new(ctx.pick("Danke!", "Thank you!"), message))
            },
            Err(message) => {
                log::debug!("Contact submission failed: {}", message);
                self.state = SubmissionState::Failed(message.clone());
                Some(Notice::new(
                    ctx.pick("Etwas ist schief gelaufen", "Something went wrong"),
                    message,
                ))
            },
        }
    }
}
