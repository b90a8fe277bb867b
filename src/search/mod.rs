//! Site search dialog.
//!
//! Connects the header's search box to the [`highlight`](crate::highlight)
//! module: the page's `<main>` element is the content root, and the visitor
//! gets a bilingual notice with the match count.
//!
//! ## Example
//!
//! ```
//! use numerix_site::dom::Document;
//! use numerix_site::i18n::{Language, LanguageContext};
//! use numerix_site::search::{SearchDialog, SearchOutcome};
//!
//! let mut doc = Document::parse_html("<header>Numerix</header><main><p>Numerix in Zürich</p></main>")?;
//! let ctx = LanguageContext::new(Language::En);
//! let mut dialog = SearchDialog::new();
//! dialog.set_open(&mut doc, true);
//!
//! let outcome = dialog.submit(&mut doc, "zürich", &ctx);
//! assert_eq!(outcome.count(), 1);
//! assert_eq!(outcome.notice().unwrap().description, "1 matches");
//! assert!(!dialog.is_open());
//! # Ok::<(), numerix_site::Error>(())
//! ```

mod dialog;

pub use dialog::{DialogLabels, SearchDialog, SearchOutcome, CONTENT_ROOT_TAG};
