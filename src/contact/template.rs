//! Notification and acknowledgement email bodies.

use super::payload::ContactRequest;
use crate::dom::escape_html;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref RE_LINE_BREAKS: Regex = Regex::new(r"[\r\n]+").unwrap();
}

/// Signature used in acknowledgement emails.
pub const COMPANY_NAME: &str = "Numerix GmbH";

/// Subject of the acknowledgement sent to the visitor.
pub const ACK_SUBJECT: &str = "Wir haben Ihre Nachricht erhalten | We received your message";

/// One outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailMessage {
    /// Sender address
    pub from: String,
    /// Recipients
    pub to: Vec<String>,
    /// Subject line
    pub subject: String,
    /// HTML part
    pub html: String,
    /// Plain-text part
    pub text: String,
    /// Reply-To address
    pub reply_to: String,
}

/// Collapse CR/LF runs to a single space so the value is safe in a header.
pub fn sanitize_header(value: &str) -> String {
    RE_LINE_BREAKS.replace_all(value, " ").trim().to_string()
}

fn html_message(request: &ContactRequest) -> String {
    match request.message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => escape_html(message).replace('\n', "<br />"),
        None => "<em>No message provided.</em>".to_string(),
    }
}

fn text_message<'a>(request: &'a ContactRequest, fallback: &'a str) -> &'a str {
    request.message_text().unwrap_or(fallback)
}

/// Email to the site operator announcing a new contact request.
pub fn notification_email(request: &ContactRequest, from: &str, to: &str) -> EmailMessage {
    let subject = format!(
        "Neue Kontaktanfrage: {} {}",
        sanitize_header(&request.name),
        sanitize_header(&request.surname)
    );
    let html = format!(
        "\n    <h2>Neue Kontaktanfrage</h2>\
         \n    <p><strong>Name:</strong> {} {}</p>\
         \n    <p><strong>E-Mail:</strong> {}</p>\
         \n    <p><strong>Nachricht:</strong><br />{}</p>\n  ",
        escape_html(&request.name),
        escape_html(&request.surname),
        escape_html(&request.email),
        html_message(request),
    );
    let text = [
        "Neue Kontaktanfrage".to_string(),
        format!("Name: {} {}", request.name, request.surname),
        format!("E-Mail: {}", request.email),
        "Nachricht:".to_string(),
        text_message(request, "Keine Nachricht angegeben.").to_string(),
    ]
    .join("\n");

    EmailMessage {
        from: from.to_string(),
        to: vec![to.to_string()],
        subject,
        html,
        text,
        reply_to: request.email.clone(),
    }
}

/// Bilingual acknowledgement to the visitor.
pub fn acknowledgement_email(request: &ContactRequest, from: &str, operator: &str) -> EmailMessage {
    let name = escape_html(&request.name);
    let message = html_message(request);
    let html = format!(
        "\n    <p>Hallo {name},</p>\
         \n    <p>vielen Dank für Ihre Nachricht. Wir haben Ihre Anfrage erhalten und melden uns so schnell wie möglich.</p>\
         \n    <p><strong>Ihre Nachricht:</strong><br />{message}</p>\
         \n    <p>Freundliche Grüsse<br />{company}</p>\
         \n    <hr />\
         \n    <p>Hello {name},</p>\
         \n    <p>Thank you for your message. We have received your request and will get back to you as soon as possible.</p>\
         \n    <p><strong>Your message:</strong><br />{message}</p>\
         \n    <p>Best regards<br />{company}</p>\n  ",
        name = name,
        message = message,
        company = COMPANY_NAME,
    );
    let text = [
        format!("Hallo {},", request.name),
        "vielen Dank für Ihre Nachricht. Wir haben Ihre Anfrage erhalten und melden uns so schnell wie möglich.".to_string(),
        String::new(),
        "Ihre Nachricht:".to_string(),
        text_message(request, "Keine Nachricht angegeben.").to_string(),
        String::new(),
        "Freundliche Grüsse".to_string(),
        COMPANY_NAME.to_string(),
        String::new(),
        "Hello".to_string(),
        "Thank you for your message. We have received your request and will get back to you as soon as possible.".to_string(),
        String::new(),
        "Your message:".to_string(),
        text_message(request, "No message provided.").to_string(),
        String::new(),
        "Best regards".to_string(),
        COMPANY_NAME.to_string(),
    ]
    .join("\n");

    EmailMessage {
        from: from.to_string(),
        to: vec![request.email.clone()],
        subject: ACK_SUBJECT.to_string(),
        html,
        text,
        reply_to: operator.to_string(),
    }
}
