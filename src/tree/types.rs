//! Types for suffix tree construction and traversal
//!
//! Nodes live in a single arena (`Vec<Node>`) owned by the tree. Every
//! relation between nodes (children, parent, suffix link) is an index into
//! that arena, so the whole structure is released in one piece.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Index of a node in the tree arena
pub type NodeId = u32;

/// Position in the indexed text buffer
pub type TextPosition = u32;

/// The root always occupies the first arena slot
pub const ROOT: NodeId = 0;

/// Sentinel byte appended to the indexed text by default.
/// Using 0x00 as it does not occur in line-oriented text input.
pub const DEFAULT_SENTINEL: u8 = 0x00;

/// End of an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Leaf edge growing with the text during construction
    Open,
    /// Frozen end position (exclusive)
    Fixed(TextPosition),
}

impl EdgeEnd {
    /// Resolve against the current end of the text
    #[inline]
    pub fn resolve(self, current_end: TextPosition) -> TextPosition {
        match self {
            EdgeEnd::Open => current_end,
            EdgeEnd::Fixed(end) => end,
        }
    }
}

/// A node of the suffix tree.
///
/// The edge label from the parent to this node is `text[start..end)`.
/// The root carries an empty edge.
#[derive(Debug, Clone)]
pub struct Node {
    /// Outgoing edges keyed by their first character
    pub children: FxHashMap<u8, NodeId>,
    /// Start of the incoming edge label (inclusive)
    pub start: TextPosition,
    /// End of the incoming edge label
    pub end: EdgeEnd,
    /// Parent node (`None` only for the root)
    pub parent: Option<NodeId>,
    /// Suffix link to the node for this path label minus its first character
    pub suffix_link: Option<NodeId>,
    /// Start of the suffix this leaf spells out (leaves only)
    pub suffix_index: Option<TextPosition>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            children: FxHashMap::default(),
            start: 0,
            end: EdgeEnd::Fixed(0),
            parent: None,
            suffix_link: Some(ROOT),
            suffix_index: None,
        }
    }

    pub(crate) fn leaf(parent: NodeId, start: TextPosition, suffix_index: TextPosition) -> Self {
        Self {
            children: FxHashMap::default(),
            start,
            end: EdgeEnd::Open,
            parent: Some(parent),
            suffix_link: None,
            suffix_index: Some(suffix_index),
        }
    }

    pub(crate) fn internal(parent: NodeId, start: TextPosition, end: TextPosition) -> Self {
        Self {
            children: FxHashMap::default(),
            start,
            end: EdgeEnd::Fixed(end),
            parent: Some(parent),
            suffix_link: None,
            suffix_index: None,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Summary of a built tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeStats {
    /// Length of the indexed text including the sentinel
    pub text_len: usize,
    /// Total number of nodes including the root
    pub node_count: usize,
    /// Number of leaves (one per suffix)
    pub leaf_count: usize,
    /// Number of branching nodes excluding the root
    pub internal_count: usize,
}
