//! Contact form relay.
//!
//! A visitor submits `{ name, surname, email, message? }`. The server validates
//! it, emails the operator, and sends the visitor a bilingual acknowledgement.
//! Delivery goes through the [`EmailSender`] trait, and [`ResendClient`] is the
//! production implementation.
//!
//! ## Example
//!
//! ```
//! use numerix_site::config::MailConfig;
//! use numerix_site::contact::{parse_contact_payload, ContactService};
//!
//! let request = parse_contact_payload(serde_json::json!({
//!     "name": "Anna",
//!     "surname": "Muster",
//!     "email": "anna@example.ch"
//! }))?;
//!
//! // Without credentials the relay refuses to send.
//! let service = ContactService::from_config(MailConfig::new());
//! let response = service.send_contact_email(&request);
//! assert!(!response.ok);
//! assert_eq!(response.message, "Email service is not configured.");
//! # Ok::<(), numerix_site::Error>(())
//! ```

mod form;
mod mailer;
mod payload;
mod service;
mod template;

pub use form::{ContactForm, ContactTransport, HttpContactTransport, SubmissionState};
pub use mailer::{EmailSender, ResendClient, RESEND_API_URL};
pub use payload::{
    is_valid_email, parse_contact_payload, ContactRequest, ContactResponse, MSG_INVALID_INPUT,
    MSG_INVALID_JSON, MSG_NOT_CONFIGURED, MSG_SEND_FAILED, MSG_SENT,
};
pub use service::ContactService;
pub use template::{
    acknowledgement_email, notification_email, sanitize_header, EmailMessage, ACK_SUBJECT,
    COMPANY_NAME,
};
