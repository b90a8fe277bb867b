//! HTML parsing through html5ever.
//!
//! Markup goes through html5ever's tree builder into an `RcDom`, so error
//! recovery, raw text in `script`/`style`, void elements and character
//! references all follow the HTML5 parsing algorithm. The resulting tree is
//! then copied into the document arena. Doctypes and processing instructions
//! are dropped and `<template>` contents are not copied.

use super::document::Document;
use super::node::NodeId;
use crate::error::{Error, Result};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::io::{Cursor, Read};

impl Document {
    /// Parse an HTML document or fragment into a new tree.
    ///
    /// Fragments are placed the way a browser places them, so the result
    /// always has `html`, `head` and `body` elements. The tree is normalized.
    pub fn parse_html(markup: &str) -> Result<Self> {
        Self::parse_html_reader(Cursor::new(markup.as_bytes()))
    }

    /// Parse HTML read from `reader`. Invalid UTF-8 is replaced, not rejected.
    ///
    /// Fails with [`Error::Markup`] when the reader itself fails.
    pub fn parse_html_reader<R: Read>(mut reader: R) -> Result<Self> {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                scripting_enabled: false,
                ..Default::default()
            },
            ..Default::default()
        };

        let dom = parse_document(RcDom::default(), opts)
            .from_utf8()
            .read_from(&mut reader)
            .map_err(|e| Error::Markup(format!("Failed to read HTML: {}", e)))?;

        let mut doc = Document::new();
        let root = doc.root();
        doc.copy_from(&dom.document, root);
        doc.normalize(root);
        Ok(doc)
    }

    /// Copy the descendants of `source` below `target`, one level at a time.
    fn copy_from(&mut self, source: &Handle, target: NodeId) {
        let mut pending: Vec<(Handle, NodeId)> = vec![(source.clone(), target)];

        while let Some((handle, parent)) = pending.pop() {
            for child in handle.children.borrow().iter() {
                let Some(id) = self.node_from(child) else {
                    continue;
                };
                self.push_child(parent, id);
                if !child.children.borrow().is_empty() {
                    pending.push((child.clone(), id));
                }
            }
        }
    }

    fn node_from(&mut self, handle: &Handle) -> Option<NodeId> {
        let id = match &handle.data {
            NodeData::Element { name, attrs, .. } => {
                let element = self.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    self.push_attribute(element, &attr.name.local, &attr.value);
                }
                element
            },
            NodeData::Text { contents } => self.create_text(contents.borrow().to_string()),
            NodeData::Comment { contents } => self.create_comment(contents.to_string()),
            _ => return None,
        };
        Some(id)
    }
}
