//! Matching statistics cursor
//!
//! A [`MatchCursor`] walks the suffix tree against a query string. For an
//! alignment offset `i` it finds `k`, the length of the longest prefix of
//! `query[i..]` that occurs in the indexed text. Moving on to `i + 1` does
//! not restart from the root: the first `k - 1` characters are known to
//! match, so the cursor follows a suffix link and re-descends with
//! skip/count (whole edges at a time) before extending again.
//!
//! Every path label in a Ukkonen tree is a contiguous span of the text, so
//! the matched string is always `text[second - k..second]` where `second`
//! is the cursor's tree position.

use super::suffix_tree::SuffixTree;
use super::types::*;
use log::warn;

/// Traversal state for one left-to-right scan of a query
#[derive(Debug, Clone)]
pub struct MatchCursor<'t> {
    tree: &'t SuffixTree,
    /// Node whose incoming edge holds the cursor (root when nothing matched)
    node: NodeId,
    /// Matched length for the current offset
    k: usize,
    /// Query characters already known to match at the current offset
    offset: usize,
    /// Characters consumed on the edge into `node`
    length: TextPosition,
    /// Text span `[first, second)` of the consumed part of that edge
    range: (TextPosition, TextPosition),
    /// Whether the match ran up to the end of the indexed text
    in_leaf: bool,
}

impl<'t> MatchCursor<'t> {
    /// Start a cursor at the root with nothing matched
    pub fn new(tree: &'t SuffixTree) -> Self {
        Self {
            tree,
            node: ROOT,
            k: 0,
            offset: 0,
            length: 0,
            range: (0, 0),
            in_leaf: false,
        }
    }

    /// Extend the match for alignment `start` of `query` as far as possible.
    ///
    /// Returns the total matched length for this offset.
    pub fn extend(&mut self, query: &[u8], start: usize) -> usize {
        let tree = self.tree;
        let text = tree.text();
        let sentinel = tree.sentinel();

        let mut node = self.node;
        let (mut edge_start, mut edge_end) = tree.edge(node);
        let mut t = edge_start + self.length;
        let mut q = start + self.offset;

        while let Some(&c) = query.get(q) {
            // The terminator never takes part in a match
            if c == sentinel {
                break;
            }

            if t == edge_end {
                match tree.child(node, c) {
                    Some(child) => {
                        node = child;
                        (edge_start, edge_end) = tree.edge(child);
                        t = edge_start;
                    }
                    None => break,
                }
            }

            if text[t as usize] != c {
                break;
            }
            self.k += 1;
            t += 1;
            q += 1;
        }

        self.node = node;
        self.range = (edge_start, t);
        self.length = t - edge_start;
        self.in_leaf = tree.is_leaf(node) && t + 1 == edge_end;
        self.k
    }

    /// Move from the result at offset `i` to the starting state for `i + 1`
    pub fn jump(&mut self) {
        if self.k <= 1 {
            self.reset();
            return;
        }

        let tree = self.tree;
        let (edge_start, edge_end) = tree.edge(self.node);

        // Deepest explicit node at or above the cursor, and what lies below it
        let (anchor, rest_start, rest_len) = if self.range.1 == edge_end {
            (self.node, edge_end, 0)
        } else {
            let parent = tree.parent(self.node).unwrap_or(ROOT);
            (parent, edge_start, self.length)
        };

        let target = match tree.suffix_link(anchor) {
            Some(link) if anchor != ROOT && link != ROOT => {
                self.descend(link, rest_start, rest_len)
            }
            _ => {
                // Drop the first character of the matched span and walk it from the root
                let dropped = (self.k - 1) as TextPosition;
                self.descend(ROOT, self.range.1 - dropped, dropped)
            }
        };

        match target {
            Some((node, length)) => {
                let start = tree.edge(node).0;
                self.node = node;
                self.length = length;
                self.range = (start, start + length);
                self.k -= 1;
                self.offset = self.k;
            }
            None => {
                warn!("matched span missing from the tree, rescanning from the root");
                self.reset();
            }
        }
    }

    /// Skip/count descent from `from` along `text[pos..pos + rem]`.
    ///
    /// Only the first character of each edge is inspected; the span is
    /// known to be present. Returns the node whose edge holds the end of
    /// the span and how far into that edge it lies.
    fn descend(
        &self,
        from: NodeId,
        mut pos: TextPosition,
        mut rem: TextPosition,
    ) -> Option<(NodeId, TextPosition)> {
        let tree = self.tree;
        let text = tree.text();
        let mut node = from;

        if rem == 0 {
            return Some((node, tree.edge_len(node)));
        }

        loop {
            let child = tree.child(node, text[pos as usize])?;
            let edge_len = tree.edge_len(child);
            if rem <= edge_len {
                return Some((child, rem));
            }
            rem -= edge_len;
            pos += edge_len;
            node = child;
        }
    }

    /// Return to the root with nothing matched
    pub fn reset(&mut self) {
        self.node = ROOT;
        self.k = 0;
        self.offset = 0;
        self.length = 0;
        self.range = (0, 0);
        self.in_leaf = false;
    }

    /// Matched length at the current offset
    #[inline]
    pub fn matched(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn length(&self) -> TextPosition {
        self.length
    }

    #[inline]
    pub fn range(&self) -> (TextPosition, TextPosition) {
        self.range
    }

    /// Whether the last extend matched a whole suffix of the indexed text
    #[inline]
    pub fn stopped_in_leaf(&self) -> bool {
        self.in_leaf
    }

    pub fn tree(&self) -> &'t SuffixTree {
        self.tree
    }
}
