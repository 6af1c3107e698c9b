//! Immutable suffix tree
//!
//! Produced by [`SuffixTreeBuilder::finish`]. After construction the tree is
//! read-only, so it can be shared between any number of cursors.

use super::builder::SuffixTreeBuilder;
use super::types::*;
use crate::error::{InvalidInputError, Result};
use std::io::{self, Write};

/// Suffix tree over a sentinel-terminated text
#[derive(Debug, Clone)]
pub struct SuffixTree {
    /// Indexed text including the trailing sentinel
    text: Vec<u8>,
    /// Node arena; slot 0 is the root
    nodes: Vec<Node>,
    sentinel: u8,
}

impl SuffixTree {
    pub(crate) fn from_parts(text: Vec<u8>, nodes: Vec<Node>, sentinel: u8) -> Self {
        Self {
            text,
            nodes,
            sentinel,
        }
    }

    /// Build the tree for `text`, appending `sentinel` as terminator
    pub fn build(text: &[u8], sentinel: u8) -> Result<Self> {
        if text.is_empty() {
            return Err(InvalidInputError::EmptyText);
        }
        if let Some(position) = memchr::memchr(sentinel, text) {
            return Err(InvalidInputError::SentinelInText { sentinel, position });
        }

        let mut builder = SuffixTreeBuilder::with_capacity(sentinel, text.len());
        builder.extend_from_slice(text)?;
        Ok(builder.finish())
    }

    /// Build the tree for a text that already ends with `sentinel`
    pub fn from_terminated(text: &[u8], sentinel: u8) -> Result<Self> {
        match text.split_last() {
            Some((&last, body)) if last == sentinel => Self::build(body, sentinel),
            _ => Err(InvalidInputError::MissingSentinel { sentinel }),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// Indexed text including the sentinel
    #[inline]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Indexed text without the sentinel
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.text[..self.text.len() - 1]
    }

    #[inline]
    pub fn sentinel(&self) -> u8 {
        self.sentinel
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    /// Child of `node` whose edge starts with `byte`
    #[inline]
    pub fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        self.node(node).children.get(&byte).copied()
    }

    /// Children of `node` ordered by their first edge character
    pub fn children(&self, node: NodeId) -> Vec<(u8, NodeId)> {
        let mut children: Vec<(u8, NodeId)> = self
            .node(node)
            .children
            .iter()
            .map(|(&byte, &child)| (byte, child))
            .collect();
        children.sort_unstable();
        children
    }

    #[inline]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    #[inline]
    pub fn suffix_link(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).suffix_link
    }

    #[inline]
    pub fn suffix_index(&self, node: NodeId) -> Option<TextPosition> {
        self.node(node).suffix_index
    }

    #[inline]
    pub fn is_leaf(&self, node: NodeId) -> bool {
        node != ROOT && self.node(node).is_leaf()
    }

    /// Half-open text range labelling the edge into `node`
    #[inline]
    pub fn edge(&self, node: NodeId) -> (TextPosition, TextPosition) {
        let n = self.node(node);
        (n.start, n.end.resolve(self.text.len() as TextPosition))
    }

    #[inline]
    pub fn edge_len(&self, node: NodeId) -> TextPosition {
        let (start, end) = self.edge(node);
        end - start
    }

    pub fn edge_label(&self, node: NodeId) -> &[u8] {
        let (start, end) = self.edge(node);
        &self.text[start as usize..end as usize]
    }

    /// Concatenated edge labels from the root down to `node`
    pub fn path_label(&self, node: NodeId) -> Vec<u8> {
        let mut path = Vec::new();
        let mut current = node;
        while current != ROOT {
            path.push(current);
            current = match self.parent(current) {
                Some(parent) => parent,
                None => break,
            };
        }

        let mut label = Vec::new();
        for &id in path.iter().rev() {
            label.extend_from_slice(self.edge_label(id));
        }
        label
    }

    /// Leaves in arena order
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as NodeId).filter(move |&id| self.is_leaf(id))
    }

    /// Branching nodes other than the root, in arena order
    pub fn internal_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len() as NodeId).filter(move |&id| !self.node(id).is_leaf())
    }

    /// Whether `pattern` occurs in the indexed body
    pub fn contains(&self, pattern: &[u8]) -> bool {
        if memchr::memchr(self.sentinel, pattern).is_some() {
            return false;
        }

        let mut node = ROOT;
        let mut i = 0;

        while i < pattern.len() {
            node = match self.child(node, pattern[i]) {
                Some(child) => child,
                None => return false,
            };

            let label = self.edge_label(node);
            let take = label.len().min(pattern.len() - i);
            if label[..take] != pattern[i..i + take] {
                return false;
            }
            i += take;
        }

        true
    }

    pub fn stats(&self) -> TreeStats {
        let leaf_count = self.leaf_count();
        TreeStats {
            text_len: self.text.len(),
            node_count: self.nodes.len(),
            leaf_count,
            internal_count: self.nodes.len() - leaf_count - 1,
        }
    }

    /// Write an indented listing of every edge, children in byte order
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.dump_node(out, ROOT, 0)
    }

    fn dump_node<W: Write>(&self, out: &mut W, node: NodeId, depth: usize) -> io::Result<()> {
        for (_, child) in self.children(node) {
            let label: String = self
                .edge_label(child)
                .iter()
                .map(|&b| {
                    if b == self.sentinel {
                        '$'
                    } else if b.is_ascii_graphic() || b == b' ' {
                        b as char
                    } else {
                        '.'
                    }
                })
                .collect();

            write!(out, "{:indent$}{}", "", label, indent = depth * 2)?;
            match self.suffix_index(child) {
                Some(index) if self.is_leaf(child) => writeln!(out, " [{}]", index)?,
                _ => writeln!(out)?,
            }
            self.dump_node(out, child, depth + 1)?;
        }
        Ok(())
    }
}
