//! Arena-backed document tree with DOM-style structural operations.
//!
//! The document owns every node it ever created. Detaching a node only unlinks
//! it from its parent; the slot stays valid so callers holding a [`NodeId`]
//! never observe a dangling index.

use super::node::{Attributes, Node, NodeId, NodeKind};
use crate::error::{Error, Result};

/// An owned document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Document)],
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes ever allocated, attached or not.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether `id` names a node of this document.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Borrow a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(id.0)
            .ok_or_else(|| Error::Dom(format!("node {} does not exist", id.0)))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.0)
            .ok_or_else(|| Error::Dom(format!("node {} does not exist", id.0)))
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node::new(kind));
        NodeId(self.nodes.len() - 1)
    }

    /// Create a detached element. The tag name is stored lowercased.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.alloc(NodeKind::Element {
            name: name.to_ascii_lowercase(),
            attributes: Attributes::new(),
        })
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text(text.into()))
    }

    /// Create a detached comment node.
    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Comment(text.into()))
    }

    /// Parent of a node, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children of a node in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Tag name of an element.
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(Node::tag_name)
    }

    /// Character data of a text node.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(Node::text)
    }

    /// Attribute value of an element.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)
            .and_then(Node::attributes)
            .and_then(|attrs| attrs.get(name))
            .map(String::as_str)
    }

    /// Whether an element carries the attribute, whatever its value.
    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    /// Set an attribute on an element, replacing any previous value.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> Result<()> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Element { attributes, .. } => {
                attributes.insert(name.to_ascii_lowercase(), value.into());
                Ok(())
            },
            _ => Err(Error::Dom(format!("node {} is not an element", id.0))),
        }
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Unlink a node from its parent. Detached nodes are left untouched.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        self.nodes[parent.0].children.retain(|&c| c != id);
        self.nodes[id.0].parent = None;
    }

    fn check_insertable(&self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.get(parent)?.is_container() {
            return Err(Error::Dom(format!("node {} cannot have children", parent.0)));
        }
        self.get(child)?;
        if child == self.root() {
            return Err(Error::Dom("the document node cannot be inserted".to_string()));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(Error::Dom(format!(
                "inserting node {} into node {} would create a cycle",
                child.0, parent.0
            )));
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, moving it if attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` before `reference` (or last, for `None`).
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()> {
        self.check_insertable(parent, child)?;
        if let Some(reference) = reference {
            if self.parent(reference) != Some(parent) {
                return Err(Error::Dom(format!(
                    "node {} is not a child of node {}",
                    reference.0, parent.0
                )));
            }
            if reference == child {
                return Ok(());
            }
        }

        self.detach(child);
        let index = match reference {
            Some(reference) => self.index_in_parent(parent, reference)?,
            None => self.nodes[parent.0].children.len(),
        };
        self.nodes[parent.0].children.insert(index, child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Append a freshly created node without the cycle and ownership checks.
    pub(super) fn push_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Set an attribute on a freshly created element.
    pub(super) fn push_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attributes, .. } = &mut self.nodes[id.0].kind {
            attributes.insert(name.to_ascii_lowercase(), value.to_string());
        }
    }

    /// Remove `child` from `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.parent(child) != Some(parent) {
            return Err(Error::Dom(format!(
                "node {} is not a child of node {}",
                child.0, parent.0
            )));
        }
        self.detach(child);
        Ok(())
    }

    fn index_in_parent(&self, parent: NodeId, child: NodeId) -> Result<usize> {
        self.get(parent)?
            .children
            .iter()
            .position(|&c| c == child)
            .ok_or_else(|| Error::Dom(format!("node {} is not a child of node {}", child.0, parent.0)))
    }

    /// Replace `node` with `replacements`, in order, in a single splice.
    pub fn replace_with(&mut self, node: NodeId, replacements: &[NodeId]) -> Result<()> {
        let parent = self
            .parent(node)
            .ok_or_else(|| Error::Dom(format!("node {} has no parent", node.0)))?;
        for &replacement in replacements {
            if replacement == node {
                return Err(Error::Dom(format!("node {} cannot replace itself", node.0)));
            }
            self.check_insertable(parent, replacement)?;
        }
        for &replacement in replacements {
            self.detach(replacement);
        }

        let index = self.index_in_parent(parent, node)?;
        self.nodes[parent.0]
            .children
            .splice(index..=index, replacements.iter().copied());
        self.nodes[node.0].parent = None;
        for &replacement in replacements {
            self.nodes[replacement.0].parent = Some(parent);
        }
        Ok(())
    }

    /// Merge adjacent text nodes and drop empty ones below `id`.
    pub fn normalize(&mut self, id: NodeId) {
        if !self.contains(id) {
            return;
        }
        let mut pending = vec![id];

        while let Some(current) = pending.pop() {
            let children = std::mem::take(&mut self.nodes[current.0].children);
            let mut kept: Vec<NodeId> = Vec::with_capacity(children.len());

            for child in children {
                if !self.nodes[child.0].is_text() {
                    pending.push(child);
                    kept.push(child);
                    continue;
                }

                let empty = self.nodes[child.0].text().map_or(true, str::is_empty);
                let follows_text = kept.last().is_some_and(|&last| self.nodes[last.0].is_text());
                if !empty && !follows_text {
                    kept.push(child);
                    continue;
                }

                let dropped = &mut self.nodes[child.0];
                dropped.parent = None;
                let data = match &mut dropped.kind {
                    NodeKind::Text(text) => std::mem::take(text),
                    _ => String::new(),
                };
                if let Some(&last) = kept.last() {
                    if let NodeKind::Text(prev) = &mut self.nodes[last.0].kind {
                        prev.push_str(&data);
                    }
                }
            }

            self.nodes[current.0].children = kept;
        }
    }

    /// All descendants of `id` in document (pre-)order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Text node descendants of `id` in document order.
    pub fn text_nodes(&self, id: NodeId) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&n| self.nodes[n.0].is_text())
            .collect()
    }

    /// Element descendants of `id` with the given tag name (case-insensitive).
    pub fn elements_by_tag_name(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&n| {
                self.tag_name(n)
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    /// First element descendant of `id` with the given tag name.
    pub fn find_first_element(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.elements_by_tag_name(id, tag).into_iter().next()
    }

    /// Concatenated character data of all text nodes at or below `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.text(id) {
            return text.to_string();
        }
        self.text_nodes(id)
            .into_iter()
            .filter_map(|n| self.text(n))
            .collect()
    }
}
