//! Error types for the site library.
//!
//! This module defines all error types that can occur while building and
//! mutating document trees and while relaying contact submissions.

/// Result type alias for site library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the site library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Markup could not be read into a document tree
    #[error("Markup error: {0}")]
    Markup(String),

    /// A structural tree operation was not valid for the given nodes
    #[error("Document tree error: {0}")]
    Dom(String),

    /// Contact payload failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Email credentials or sender address are missing
    #[error("Email service is not configured")]
    NotConfigured,

    /// Email provider rejected the message or could not be reached
    #[error("Email delivery failed: {0}")]
    Mail(String),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
