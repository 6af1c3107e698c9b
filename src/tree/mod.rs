//! Suffix tree module
//!
//! This module provides online suffix tree construction (Ukkonen's
//! algorithm) and a cursor that computes matching statistics of a query
//! against the indexed text in amortized linear time.
//!
//! ## Architecture
//!
//! - `builder`: Incremental construction with active point and suffix links
//! - `suffix_tree`: The frozen, read-only tree and its accessors
//! - `cursor`: Extend/jump traversal for matching statistics
//! - `types`: Core type definitions
//!
//! ## Layout
//!
//! All nodes live in one arena owned by the tree. Edges are half-open
//! ranges into a single text buffer that ends with a unique sentinel, so
//! every suffix ends at its own leaf.

pub mod builder;
pub mod cursor;
pub mod suffix_tree;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixTreeBuilder;
pub use cursor::MatchCursor;
pub use suffix_tree::SuffixTree;
pub use types::{DEFAULT_SENTINEL, EdgeEnd, NodeId, ROOT, TextPosition, TreeStats};
