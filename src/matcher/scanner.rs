//! Occurrence scanning
//!
//! Builds the suffix tree over the pattern once, then drives one
//! [`MatchCursor`] across the haystack: extend at every alignment offset,
//! report the offset when the whole pattern matched, jump to the next one.

use crate::config::MatchConfig;
use crate::error::{InvalidInputError, Result};
use crate::tree::{MatchCursor, SuffixTree};
use std::borrow::Cow;

/// Exact pattern matcher backed by a suffix tree of the pattern
#[derive(Debug, Clone)]
pub struct Matcher {
    tree: SuffixTree,
    pattern_len: usize,
    config: MatchConfig,
}

impl Matcher {
    /// Build the matcher for `pattern`
    pub fn new(pattern: &[u8], config: &MatchConfig) -> Result<Self> {
        if pattern.is_empty() {
            return Err(InvalidInputError::EmptyText);
        }

        let folded = fold_case(pattern, config.case_insensitive);
        let tree = SuffixTree::build(&folded, config.sentinel)?;

        Ok(Self {
            tree,
            pattern_len: pattern.len(),
            config: config.clone(),
        })
    }

    /// Build the matcher with default configuration
    pub fn with_defaults(pattern: &[u8]) -> Result<Self> {
        Self::new(pattern, &MatchConfig::default())
    }

    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    pub fn tree(&self) -> &SuffixTree {
        &self.tree
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Start offsets (0-based, ascending) of every occurrence in `haystack`.
    ///
    /// A haystack that is empty or shorter than the pattern has none.
    pub fn find(&self, haystack: &[u8]) -> Vec<usize> {
        if haystack.is_empty() || haystack.len() < self.pattern_len {
            return Vec::new();
        }

        let haystack = fold_case(haystack, self.config.case_insensitive);
        let mut cursor = MatchCursor::new(&self.tree);
        let mut positions = Vec::new();

        for i in 0..=haystack.len() - self.pattern_len {
            if cursor.extend(&haystack, i) == self.pattern_len {
                positions.push(i);
            }
            cursor.jump();
        }

        positions
    }

    /// Number of occurrences in `haystack`
    pub fn count(&self, haystack: &[u8]) -> usize {
        self.find(haystack).len()
    }

    /// Matching statistics: for every offset `i` of `query`, the length of
    /// the longest prefix of `query[i..]` occurring in the pattern
    pub fn matching_statistics(&self, query: &[u8]) -> Vec<usize> {
        let query = fold_case(query, self.config.case_insensitive);
        let mut cursor = MatchCursor::new(&self.tree);

        (0..query.len())
            .map(|i| {
                let k = cursor.extend(&query, i);
                cursor.jump();
                k
            })
            .collect()
    }
}

/// Occurrences of `pattern` in `haystack` with default configuration.
///
/// Returns an empty list without building anything when either input is
/// empty or the haystack is shorter than the pattern.
pub fn find_occurrences(pattern: &[u8], haystack: &[u8]) -> Result<Vec<usize>> {
    if pattern.is_empty() || haystack.is_empty() || haystack.len() < pattern.len() {
        return Ok(Vec::new());
    }
    Ok(Matcher::with_defaults(pattern)?.find(haystack))
}

/// ASCII case folding, borrowing when disabled
pub(crate) fn fold_case(bytes: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        Cow::Owned(bytes.iter().map(|b| b.to_ascii_lowercase()).collect())
    } else {
        Cow::Borrowed(bytes)
    }
}
