//! Marker insertion and removal over a document tree.

use super::matcher::{find_folded, fold_case, MatchSpan};
use crate::dom::{Document, Node, NodeId};
use crate::error::Result;

/// Reserved attribute identifying search markers.
pub const HIGHLIGHT_ATTR: &str = "data-search-highlight";

/// Tag name of search markers.
pub const MARKER_TAG: &str = "mark";

/// Options controlling how markers are built and which text is searched.
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Tag name of marker elements
    pub marker_tag: String,
    /// Reserved attribute set (empty) on every marker
    pub marker_attribute: String,
    /// Text directly inside these elements is never searched
    pub skipped_parents: Vec<String>,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            marker_tag: MARKER_TAG.to_string(),
            marker_attribute: HIGHLIGHT_ATTR.to_string(),
            skipped_parents: vec!["script".to_string(), "style".to_string()],
        }
    }
}

impl HighlightOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different marker tag.
    pub fn with_marker_tag(mut self, tag: &str) -> Self {
        self.marker_tag = tag.to_ascii_lowercase();
        self
    }

    /// Use a different reserved attribute.
    pub fn with_marker_attribute(mut self, attribute: &str) -> Self {
        self.marker_attribute = attribute.to_ascii_lowercase();
        self
    }

    /// Replace the list of parents whose text is not searched.
    pub fn with_skipped_parents<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skipped_parents = tags
            .into_iter()
            .map(|t| t.as_ref().to_ascii_lowercase())
            .collect();
        self
    }
}

/// Wraps query matches in marker elements and removes them again.
///
/// Both operations take the document by `&mut`, so a scope cannot be mutated
/// by anyone else while a highlight or clear is in progress.
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    options: HighlightOptions,
}

impl Highlighter {
    /// Create a highlighter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a highlighter with custom options.
    pub fn with_options(options: HighlightOptions) -> Self {
        Self { options }
    }

    /// Active options.
    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// Whether `id` is a marker created by this highlighter.
    pub fn is_marker(&self, doc: &Document, id: NodeId) -> bool {
        doc.tag_name(id)
            .is_some_and(|name| name.eq_ignore_ascii_case(&self.options.marker_tag))
            && doc.has_attribute(id, &self.options.marker_attribute)
    }

    /// All markers below `root` (the whole document for `None`), in document order.
    pub fn markers(&self, doc: &Document, root: Option<NodeId>) -> Vec<NodeId> {
        let scope = root.unwrap_or_else(|| doc.root());
        doc.descendants(scope)
            .into_iter()
            .filter(|&n| self.is_marker(doc, n))
            .collect()
    }

    /// First marker below `root` in document order.
    pub fn first_marker(&self, doc: &Document, root: Option<NodeId>) -> Option<NodeId> {
        self.markers(doc, root).into_iter().next()
    }

    /// Remove every marker below `root` (the whole document for `None`).
    ///
    /// Marker contents move back into the parent at the marker's position and
    /// the parent is normalized, so split text merges back into one node.
    /// Calling this with no markers present changes nothing.
    pub fn clear(&self, doc: &mut Document, root: Option<NodeId>) {
        for marker in self.markers(doc, root) {
            self.unwrap_marker(doc, marker);
        }
    }

    /// Move the contents of `marker` into its parent and drop the marker.
    ///
    /// Returns false, leaving the tree untouched, when the marker has no parent.
    fn unwrap_marker(&self, doc: &mut Document, marker: NodeId) -> bool {
        let Some(parent) = doc.parent(marker) else {
            log::debug!("Skipping detached search marker {}", marker.index());
            return false;
        };
        let children = doc.children(marker).to_vec();
        for child in children {
            if let Err(e) = doc.insert_before(parent, child, Some(marker)) {
                log::debug!("Could not restore marker content {}: {}", child.index(), e);
            }
        }
        doc.detach(marker);
        doc.normalize(parent);
        true
    }

    /// Highlight every case-insensitive occurrence of `query` below `root`.
    ///
    /// Existing markers are cleared first. Returns the number of matches,
    /// which equals the number of markers in scope afterwards. A missing or
    /// childless root and a blank query both yield 0.
    pub fn highlight(&self, doc: &mut Document, root: Option<NodeId>, query: &str) -> usize {
        self.clear(doc, root);

        let Some(root) = root.filter(|&r| doc.node(r).is_some_and(Node::is_container)) else {
            return 0;
        };
        if query.trim().is_empty() {
            return 0;
        }

        let needle = fold_case(query);
        let mut count = 0;

        for segment in self.text_segments(doc, root) {
            let spans = match doc.text(segment) {
                Some(text) => find_folded(text, &needle),
                None => continue,
            };
            if spans.is_empty() {
                continue;
            }
            match self.wrap_matches(doc, segment, &spans) {
                Ok(()) => count += spans.len(),
                Err(e) => log::debug!("Skipping text segment {}: {}", segment.index(), e),
            }
        }

        log::debug!("Highlighted {} matches for {:?}", count, query);
        count
    }

    /// Text nodes below `root` that are eligible for matching.
    fn text_segments(&self, doc: &Document, root: NodeId) -> Vec<NodeId> {
        doc.text_nodes(root)
            .into_iter()
            .filter(|&n| doc.text(n).is_some_and(|t| !t.trim().is_empty()))
            .filter(|&n| {
                let parent_tag = doc.parent(n).and_then(|p| doc.tag_name(p));
                !parent_tag.is_some_and(|tag| {
                    self.options
                        .skipped_parents
                        .iter()
                        .any(|s| s.eq_ignore_ascii_case(tag))
                })
            })
            .collect()
    }

    /// Replace `segment` with plain text and marker pieces in one splice.
    fn wrap_matches(&self, doc: &mut Document, segment: NodeId, spans: &[MatchSpan]) -> Result<()> {
        let text = doc.text(segment).unwrap_or_default().to_string();
        let mut pieces = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;

        for span in spans {
            if span.start > cursor {
                pieces.push(doc.create_text(&text[cursor..span.start]));
            }
            let marker = doc.create_element(&self.options.marker_tag);
            doc.set_attribute(marker, &self.options.marker_attribute, "")?;
            let matched = doc.create_text(span.as_str(&text));
            doc.append_child(marker, matched)?;
            pieces.push(marker);
            cursor = span.end;
        }
        if cursor < text.len() {
            pieces.push(doc.create_text(&text[cursor..]));
        }

        doc.replace_with(segment, &pieces)
    }
}
