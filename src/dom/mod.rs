//! Owned document tree for rendered page content.
//!
//! Pages are parsed with html5ever into an arena-backed [`Document`] that
//! supports the small set of DOM operations the search highlighter needs: tree
//! walking, text node splitting, insertion and removal, and `normalize()`.
//!
//! ## Example
//!
//! ```
//! use numerix_site::dom::Document;
//!
//! let doc = Document::parse_html("<main><p>Willkommen bei Numerix</p></main>")?;
//! let main = doc.find_first_element(doc.root(), "main").unwrap();
//! assert_eq!(doc.text_content(main), "Willkommen bei Numerix");
//! assert_eq!(doc.to_html(main), "<main><p>Willkommen bei Numerix</p></main>");
//! # Ok::<(), numerix_site::Error>(())
//! ```

mod document;
mod node;
mod parser;
mod serializer;

pub use document::Document;
pub use node::{Attributes, Node, NodeId, NodeKind};
pub use serializer::escape_html;
