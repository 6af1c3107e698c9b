//! Online suffix tree builder
//!
//! Builds a suffix tree with Ukkonen's algorithm, one character at a time:
//! 1. Each new character opens a phase and adds one pending suffix
//! 2. Pending suffixes are inserted at the active point until one of them
//!    is already present implicitly
//! 3. Suffix links let the active point move to the next shorter suffix
//!    without walking down from the root again
//!
//! Leaf edges stay open while the text grows, so extending every leaf by
//! the new character costs nothing. `finish` appends the sentinel, which
//! turns every suffix into an explicit leaf, and freezes the open ends.

use super::suffix_tree::SuffixTree;
use super::types::*;
use crate::error::{InvalidInputError, Result};
use log::debug;

/// Builder for constructing a suffix tree from a growing text
pub struct SuffixTreeBuilder {
    /// Text indexed so far (sentinel appended by `finish`)
    text: Vec<u8>,
    /// Node arena; slot 0 is the root
    nodes: Vec<Node>,
    /// Terminator that must not occur in the body
    sentinel: u8,
    /// Suffixes not yet represented explicitly
    remainder: TextPosition,
    active_node: NodeId,
    /// Text position of the first character of the active edge
    active_edge: TextPosition,
    active_length: TextPosition,
    /// Last internal node created or visited in this phase, waiting for its suffix link
    awaiting_link: NodeId,
}

impl SuffixTreeBuilder {
    /// Create an empty builder terminated by `sentinel` on `finish`
    pub fn new(sentinel: u8) -> Self {
        Self::with_capacity(sentinel, 0)
    }

    /// Create a builder with room for a text of `capacity` bytes
    pub fn with_capacity(sentinel: u8, capacity: usize) -> Self {
        // A suffix tree over n characters has at most 2n nodes
        let mut nodes = Vec::with_capacity(2 * (capacity + 1));
        nodes.push(Node::root());

        Self {
            text: Vec::with_capacity(capacity + 1),
            nodes,
            sentinel,
            remainder: 0,
            active_node: ROOT,
            active_edge: 0,
            active_length: 0,
            awaiting_link: ROOT,
        }
    }

    /// Append one character to the indexed text
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if byte == self.sentinel {
            return Err(InvalidInputError::SentinelInText {
                sentinel: self.sentinel,
                position: self.text.len(),
            });
        }
        // Leave room for the sentinel and the exclusive end position
        if self.text.len() >= (TextPosition::MAX - 1) as usize {
            return Err(InvalidInputError::TextTooLong {
                len: self.text.len() + 1,
            });
        }

        self.extend(byte);
        Ok(())
    }

    /// Append every character of `bytes`, stopping at the first rejected one
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.text.reserve(bytes.len());
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Number of characters indexed so far (without the sentinel)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of nodes created so far, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Terminate the text with the sentinel and freeze the tree
    pub fn finish(mut self) -> SuffixTree {
        let sentinel = self.sentinel;
        self.extend(sentinel);
        debug_assert_eq!(self.remainder, 0, "sentinel must flush every pending suffix");

        let text_end = self.text.len() as TextPosition;
        for node in &mut self.nodes {
            if node.end == EdgeEnd::Open {
                node.end = EdgeEnd::Fixed(text_end);
            }
        }

        debug!(
            "built suffix tree: {} bytes, {} nodes",
            self.text.len(),
            self.nodes.len()
        );

        SuffixTree::from_parts(self.text, self.nodes, sentinel)
    }

    /// Run one phase of Ukkonen's algorithm for the character `byte`
    fn extend(&mut self, byte: u8) {
        let pos = self.text.len() as TextPosition;
        self.text.push(byte);
        let current_end = pos + 1;

        self.remainder += 1;
        self.awaiting_link = ROOT;

        while self.remainder > 0 {
            if self.active_length == 0 {
                self.active_edge = pos;
            }

            let edge_char = self.text[self.active_edge as usize];
            let next = self.nodes[self.active_node as usize]
                .children
                .get(&edge_char)
                .copied();

            match next {
                None => {
                    let leaf = self.alloc(Node::leaf(
                        self.active_node,
                        pos,
                        current_end - self.remainder,
                    ));
                    self.nodes[self.active_node as usize]
                        .children
                        .insert(edge_char, leaf);
                    self.add_suffix_link(self.active_node);
                }
                Some(next) => {
                    if self.walk_down(next, current_end) {
                        continue;
                    }

                    let next_start = self.nodes[next as usize].start;
                    let split = next_start + self.active_length;

                    // Already present implicitly; the rest of the phase is too
                    if self.text[split as usize] == byte {
                        self.add_suffix_link(self.active_node);
                        self.active_length += 1;
                        break;
                    }

                    let inner = self.alloc(Node::internal(self.active_node, next_start, split));
                    let leaf = self.alloc(Node::leaf(inner, pos, current_end - self.remainder));

                    self.nodes[self.active_node as usize]
                        .children
                        .insert(edge_char, inner);

                    let next_node = &mut self.nodes[next as usize];
                    next_node.start = split;
                    next_node.parent = Some(inner);

                    let inner_node = &mut self.nodes[inner as usize];
                    inner_node.children.insert(byte, leaf);
                    inner_node.children.insert(self.text[split as usize], next);

                    self.add_suffix_link(inner);
                }
            }

            self.remainder -= 1;

            if self.active_node == ROOT && self.active_length > 0 {
                self.active_length -= 1;
                self.active_edge = current_end - self.remainder;
            } else {
                self.active_node = self.nodes[self.active_node as usize]
                    .suffix_link
                    .unwrap_or(ROOT);
            }
        }
    }

    /// Move the active point past `next` if the active length covers its whole edge
    #[inline]
    fn walk_down(&mut self, next: NodeId, current_end: TextPosition) -> bool {
        let node = &self.nodes[next as usize];
        let edge_len = node.end.resolve(current_end) - node.start;

        if self.active_length >= edge_len {
            self.active_edge += edge_len;
            self.active_length -= edge_len;
            self.active_node = next;
            true
        } else {
            false
        }
    }

    /// Link the node awaiting a suffix link to `node`, then make `node` the one awaiting
    #[inline]
    fn add_suffix_link(&mut self, node: NodeId) {
        if self.awaiting_link != ROOT {
            self.nodes[self.awaiting_link as usize].suffix_link = Some(node);
        }
        self.awaiting_link = node;
    }

    #[inline]
    fn alloc(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }
}
