//! Contact relay: validated request in, notification (and acknowledgement) out.

use super::mailer::{EmailSender, ResendClient};
use super::payload::{ContactRequest, ContactResponse, MSG_NOT_CONFIGURED, MSG_SEND_FAILED, MSG_SENT};
use super::template::{acknowledgement_email, notification_email};
use crate::config::MailConfig;
use crate::error::{Error, Result};

/// Relays contact requests through an [`EmailSender`].
pub struct ContactService {
    config: MailConfig,
    sender: Option<Box<dyn EmailSender>>,
}

impl ContactService {
    /// Build a service that talks to Resend when `config` is complete.
    pub fn from_config(config: MailConfig) -> Self {
        let sender: Option<Box<dyn EmailSender>> = if config.is_configured() {
            Some(Box::new(ResendClient::new(config.api_key.clone())))
        } else {
            log::warn!("Email service is not configured; contact requests will be rejected");
            None
        };
        Self { config, sender }
    }

    /// Build a service with an explicit sender.
    pub fn with_sender(config: MailConfig, sender: Box<dyn EmailSender>) -> Self {
        Self {
            config,
            sender: Some(sender),
        }
    }

    /// Mail settings in use.
    pub fn config(&self) -> &MailConfig {
        &self.config
    }

    /// Send the operator notification, then a best-effort acknowledgement.
    ///
    /// Fails with [`Error::NotConfigured`] when the API key or sender address
    /// is missing, and with [`Error::Mail`] when the notification is rejected.
    /// A failed acknowledgement is only logged.
    pub fn relay(&self, request: &ContactRequest) -> Result<()> {
        let sender = match &self.sender {
            Some(sender) if self.config.is_configured() => sender,
            _ => return Err(Error::NotConfigured),
        };

        let notification = notification_email(request, &self.config.from, &self.config.to);
        if let Err(e) = sender.send(&notification) {
            log::error!("Contact notification failed: {}", e);
            return Err(e);
        }

        let acknowledgement = acknowledgement_email(request, &self.config.from, &self.config.to);
        if let Err(e) = sender.send(&acknowledgement) {
            log::warn!("Contact acknowledgement failed: {}", e);
        }

        Ok(())
    }

    /// [`relay`](Self::relay) mapped to the endpoint's response body.
    pub fn send_contact_email(&self, request: &ContactRequest) -> ContactResponse {
        match self.relay(request) {
            Ok(()) => ContactResponse::success(MSG_SENT),
            Err(Error::NotConfigured) => ContactResponse::failure(MSG_NOT_CONFIGURED),
            Err(_) => ContactResponse::failure(MSG_SEND_FAILED),
        }
    }
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService")
            .field("from", &self.config.from)
            .field("to", &self.config.to)
            .field("configured", &self.sender.is_some())
            .finish()
    }
}
