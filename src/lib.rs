// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # Numerix Site
//!
//! Backend and page tooling for the Numerix GmbH website, a bilingual
//! (German/English) brochure site for a Swiss consulting firm.
//!
//! ## Features
//!
//! - **Document tree**: arena-backed DOM with a lenient HTML parser and
//!   serializer ([`dom`])
//! - **Search highlighting**: case-insensitive in-page search that wraps
//!   matches in `<mark data-search-highlight>` and removes them without a
//!   trace ([`highlight`])
//! - **Search dialog**: header search box behavior with bilingual notices
//!   ([`search`], [`i18n`])
//! - **Contact relay**: validation, email templating, Resend delivery, and the
//!   client-side form state machine ([`contact`])
//! - **HTTP server**: `/api/ping` and `/api/contact` on axum, plus static
//!   asset serving ([`server`])
//!
//! ## Quick Start
//!
//! ```
//! use numerix_site::dom::Document;
//! use numerix_site::highlight::Highlighter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = Document::parse_html(
//!     "<main><h1>Numerix GmbH</h1><script>var numerix = 1;</script></main>",
//! )?;
//! let main = doc.find_first_element(doc.root(), "main");
//!
//! let highlighter = Highlighter::new();
//! assert_eq!(highlighter.highlight(&mut doc, main, "NUMERIX"), 1);
//! println!("{}", doc.to_html(doc.root()));
//!
//! highlighter.clear(&mut doc, main);
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Document tree
pub mod dom;

// In-page search
pub mod highlight;
pub mod search;

// Language selection and notices
pub mod i18n;

// Contact form relay
pub mod contact;

// HTTP surface
pub mod server;

// Re-exports
pub use config::{MailConfig, SiteConfig};
pub use dom::{Document, NodeId};
pub use error::{Error, Result};
pub use highlight::{HighlightOptions, Highlighter};
pub use i18n::{Language, LanguageContext, Notice};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
