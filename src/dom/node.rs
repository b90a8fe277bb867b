//! Document tree nodes.
//!
//! Nodes live in an arena owned by [`Document`](super::Document) and refer to
//! each other through [`NodeId`] indices.

use indexmap::IndexMap;

/// Index of a node in its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Element attributes, kept in source order.
pub type Attributes = IndexMap<String, String>;

/// Kind and payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Document root
    Document,
    /// Element with a lowercase tag name and its attributes
    Element {
        /// Tag name, lowercased
        name: String,
        /// Attributes in source order
        attributes: Attributes,
    },
    /// Character data
    Text(String),
    /// Comment
    Comment(String),
}

/// A node in the document arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// Kind and payload
    pub kind: NodeKind,
    /// Parent node (None for the document root and detached nodes)
    pub parent: Option<NodeId>,
    /// Children in document order
    pub children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Whether this node can hold children.
    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Document | NodeKind::Element { .. })
    }

    /// Whether this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }

    /// Tag name for elements.
    pub fn tag_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Character data for text nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Attribute map for elements.
    pub fn attributes(&self) -> Option<&Attributes> {
        match &self.kind {
            NodeKind::Element { attributes, .. } => Some(attributes),
            _ => None,
        }
    }
}
