//! HTML serialization of document trees.
//!
//! Output is produced by html5ever's `HtmlSerializer`, which knows the void
//! elements and the raw text elements. The tree walk feeding it keeps its own
//! stack, so nesting depth is bounded by memory only.

use super::document::Document;
use super::node::{NodeId, NodeKind};
use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};
use html5ever::{LocalName, Namespace, QualName};
use std::io;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Escape HTML special characters.
///
/// Replaces `& < > " '` with their entity equivalents, which makes the output
/// safe both as element content and inside double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn element_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(name))
}

fn attribute_name(name: &str) -> QualName {
    QualName::new(None, Namespace::from(""), LocalName::from(name))
}

/// A node of a document, viewed as something html5ever can serialize.
struct Subtree<'a> {
    doc: &'a Document,
    node: NodeId,
}

enum Step {
    Enter(NodeId),
    Leave(QualName),
}

impl Serialize for Subtree<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let mut steps: Vec<Step> = match traversal_scope {
            TraversalScope::IncludeNode => vec![Step::Enter(self.node)],
            TraversalScope::ChildrenOnly(_) => self
                .doc
                .children(self.node)
                .iter()
                .rev()
                .map(|&c| Step::Enter(c))
                .collect(),
        };

        while let Some(step) = steps.pop() {
            let id = match step {
                Step::Leave(name) => {
                    serializer.end_elem(name)?;
                    continue;
                },
                Step::Enter(id) => id,
            };
            let Some(node) = self.doc.node(id) else {
                continue;
            };

            match &node.kind {
                NodeKind::Document => {},
                NodeKind::Text(text) => {
                    serializer.write_text(text)?;
                    continue;
                },
                NodeKind::Comment(text) => {
                    serializer.write_comment(text)?;
                    continue;
                },
                NodeKind::Element { name, attributes } => {
                    let name = element_name(name);
                    let attrs: Vec<(QualName, &str)> = attributes
                        .iter()
                        .map(|(key, value)| (attribute_name(key), value.as_str()))
                        .collect();
                    serializer.start_elem(name.clone(), attrs.iter().map(|(key, value)| (key, *value)))?;
                    steps.push(Step::Leave(name));
                },
            }
            steps.extend(node.children.iter().rev().map(|&c| Step::Enter(c)));
        }

        Ok(())
    }
}

impl Document {
    /// Serialize a node including its own tag.
    ///
    /// For the document node this is the serialization of its children.
    pub fn to_html(&self, id: NodeId) -> String {
        self.serialize_scope(id, TraversalScope::IncludeNode)
    }

    /// Serialize only the children of a node.
    pub fn inner_html(&self, id: NodeId) -> String {
        let context = self.tag_name(id).map(element_name);
        self.serialize_scope(id, TraversalScope::ChildrenOnly(context))
    }

    fn serialize_scope(&self, id: NodeId, traversal_scope: TraversalScope) -> String {
        let opts = SerializeOpts {
            scripting_enabled: false,
            traversal_scope,
            ..Default::default()
        };
        let mut out = Vec::new();
        if let Err(e) = serialize(&mut out, &Subtree { doc: self, node: id }, opts) {
            log::debug!("Serialization of node {} stopped early: {}", id.index(), e);
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}
