//! In-page search highlighting.
//!
//! Finds every case-insensitive occurrence of a query in the visible text of a
//! content root and wraps each one in a `<mark data-search-highlight>` element.
//! [`Highlighter::clear`] is the exact inverse: it unwraps every marker and
//! merges the split text back together.
//!
//! Matches are confined to a single text node. A query interrupted by inline
//! markup (`Nume<b>rix</b>`) is not found.
//!
//! ## Example
//!
//! ```
//! use numerix_site::dom::Document;
//! use numerix_site::highlight::Highlighter;
//!
//! let mut doc = Document::parse_html("<main><p>Welcome to Numerix. Numerix is great.</p></main>")?;
//! let main = doc.find_first_element(doc.root(), "main");
//!
//! let highlighter = Highlighter::new();
//! assert_eq!(highlighter.highlight(&mut doc, main, "numerix"), 2);
//! assert_eq!(highlighter.markers(&doc, main).len(), 2);
//!
//! highlighter.clear(&mut doc, main);
//! assert!(highlighter.markers(&doc, main).is_empty());
//! # Ok::<(), numerix_site::Error>(())
//! ```

mod highlighter;
mod matcher;

pub use highlighter::{HighlightOptions, Highlighter, HIGHLIGHT_ATTR, MARKER_TAG};
pub use matcher::{find_matches, MatchSpan};
