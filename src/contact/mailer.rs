//! Transactional email delivery.

use super::template::EmailMessage;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Resend REST endpoint for sending one email.
pub const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Something that can deliver an [`EmailMessage`].
pub trait EmailSender: Send + Sync {
    /// Deliver one message.
    fn send(&self, message: &EmailMessage) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct SendReceipt {
    id: Option<String>,
}

/// [`EmailSender`] backed by the Resend HTTP API.
pub struct ResendClient {
    api_key: String,
    endpoint: String,
    agent: ureq::Agent,
}

impl ResendClient {
    /// Create a client with a 10 second request timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, Duration::from_secs(10))
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            api_key: api_key.into(),
            endpoint: RESEND_API_URL.to_string(),
            agent: config.into(),
        }
    }

    /// Post to a different endpoint (self-hosted relays, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Endpoint messages are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl EmailSender for ResendClient {
    fn send(&self, message: &EmailMessage) -> Result<()> {
        let mut response = self
            .agent
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(message)
            .map_err(|e| Error::Mail(e.to_string()))?;

        match response.body_mut().read_json::<SendReceipt>() {
            Ok(SendReceipt { id: Some(id) }) => log::debug!("Email accepted by provider as {}", id),
            Ok(_) => log::debug!("Email accepted by provider"),
            Err(e) => log::debug!("Email accepted; unreadable receipt: {}", e),
        }
        Ok(())
    }
}
