//! Property-based tests for tree construction and scanning.

use proptest::prelude::*;
use sufmatch::matcher::Matcher;
use sufmatch::tree::{MatchCursor, SuffixTree};

// =============================================================================
// Test helpers
// =============================================================================

/// Small alphabets produce many repeats, which is where the tree gets interesting
fn text_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'c', 1..max_len)
}

fn naive_occurrences(pattern: &[u8], haystack: &[u8]) -> Vec<usize> {
    if haystack.len() < pattern.len() {
        return Vec::new();
    }
    haystack
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

fn naive_statistic(text: &[u8], query: &[u8], i: usize) -> usize {
    (0..text.len())
        .map(|start| {
            text[start..]
                .iter()
                .zip(&query[i..])
                .take_while(|(a, b)| a == b)
                .count()
        })
        .max()
        .unwrap_or(0)
}

// =============================================================================
// Construction properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// One leaf per suffix of the terminated text
    #[test]
    fn one_leaf_per_suffix(text in text_strategy(60)) {
        let tree = SuffixTree::build(&text, 0).unwrap();
        prop_assert_eq!(tree.leaf_count(), text.len() + 1);
        prop_assert!(tree.node_count() <= 2 * (text.len() + 1));
    }

    /// Each leaf spells exactly the suffix it is labelled with
    #[test]
    fn leaves_spell_their_suffix(text in text_strategy(40)) {
        let tree = SuffixTree::build(&text, 0).unwrap();
        for leaf in tree.leaves() {
            let start = tree.suffix_index(leaf).unwrap() as usize;
            prop_assert_eq!(tree.path_label(leaf), tree.text()[start..].to_vec());
        }
    }

    /// Suffix link of `cα` leads to `α`
    #[test]
    fn suffix_links_drop_first_character(text in text_strategy(60)) {
        let tree = SuffixTree::build(&text, 0).unwrap();
        for node in tree.internal_nodes() {
            let link = tree.suffix_link(node);
            prop_assert!(link.is_some(), "internal node {} has no suffix link", node);
            let label = tree.path_label(node);
            prop_assert_eq!(tree.path_label(link.unwrap()), label[1..].to_vec());
            prop_assert!(!tree.is_leaf(link.unwrap()));
        }
    }

    /// No two children of a node share a first character, and no edge is empty
    #[test]
    fn children_are_unambiguous(text in text_strategy(60)) {
        let tree = SuffixTree::build(&text, 0).unwrap();
        for node in 1..tree.node_count() as u32 {
            prop_assert!(tree.edge_len(node) > 0);
        }
        for node in std::iter::once(tree.root()).chain(tree.internal_nodes()) {
            for (byte, child) in tree.children(node) {
                prop_assert_eq!(tree.edge_label(child)[0], byte);
                prop_assert_eq!(tree.parent(child), Some(node));
            }
        }
    }

    /// Every substring is found, and nothing else of the same alphabet
    #[test]
    fn contains_matches_naive(text in text_strategy(30), probe in text_strategy(6)) {
        let tree = SuffixTree::build(&text, 0).unwrap();
        let expected = text.windows(probe.len()).any(|w| w == probe.as_slice());
        prop_assert_eq!(tree.contains(&probe), expected);
    }
}

// =============================================================================
// Scanning properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Offset i is reported iff haystack[i..i + len] == pattern
    #[test]
    fn reports_exactly_the_occurrences(pattern in text_strategy(8), haystack in text_strategy(80)) {
        let matcher = Matcher::with_defaults(&pattern).unwrap();
        prop_assert_eq!(matcher.find(&haystack), naive_occurrences(&pattern, &haystack));
    }

    /// Two scans over the same input agree
    #[test]
    fn scanning_is_deterministic(pattern in text_strategy(8), haystack in text_strategy(80)) {
        let matcher = Matcher::with_defaults(&pattern).unwrap();
        prop_assert_eq!(matcher.find(&haystack), matcher.find(&haystack));
    }

    /// Jump then extend gives the same length as extending from the root
    #[test]
    fn jump_equals_restart(text in text_strategy(30), query in text_strategy(80)) {
        let tree = SuffixTree::build(&text, 0).unwrap();
        let mut cursor = MatchCursor::new(&tree);

        for i in 0..query.len() {
            let k = cursor.extend(&query, i);
            let mut fresh = MatchCursor::new(&tree);
            prop_assert_eq!(k, fresh.extend(&query, i), "offset {}", i);
            cursor.jump();
        }
    }

    /// Matching statistics equal the brute-force longest common prefix
    #[test]
    fn matching_statistics_match_naive(text in text_strategy(25), query in text_strategy(50)) {
        let matcher = Matcher::with_defaults(&text).unwrap();
        let expected: Vec<usize> = (0..query.len())
            .map(|i| naive_statistic(&text, &query, i))
            .collect();
        prop_assert_eq!(matcher.matching_statistics(&query), expected);
    }

    /// Case folding agrees with folding the inputs up front
    #[test]
    fn case_insensitive_matches_folded(
        pattern in prop::collection::vec(prop::sample::select(b"aAbB".to_vec()), 1..5),
        haystack in prop::collection::vec(prop::sample::select(b"aAbB".to_vec()), 1..60),
    ) {
        let config = sufmatch::config::MatchConfig {
            case_insensitive: true,
            ..Default::default()
        };
        let matcher = Matcher::new(&pattern, &config).unwrap();
        let expected = naive_occurrences(
            &pattern.to_ascii_lowercase(),
            &haystack.to_ascii_lowercase(),
        );
        prop_assert_eq!(matcher.find(&haystack), expected);
    }
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn example_overlapping_pair() {
    let matcher = Matcher::with_defaults(b"ab").unwrap();
    assert_eq!(matcher.find(b"abab"), vec![0, 2]);
}

#[test]
fn example_run_of_one_character() {
    let matcher = Matcher::with_defaults(b"aaa").unwrap();
    assert_eq!(matcher.find(b"aaaaa"), vec![0, 1, 2]);
}

#[test]
fn example_same_length_no_match() {
    let matcher = Matcher::with_defaults(b"xy").unwrap();
    assert!(matcher.find(b"ab").is_empty());
}

#[test]
fn example_empty_or_short_input() {
    assert!(sufmatch::matcher::find_occurrences(b"", b"abc").unwrap().is_empty());
    assert!(sufmatch::matcher::find_occurrences(b"abc", b"").unwrap().is_empty());
    assert!(sufmatch::matcher::find_occurrences(b"abcd", b"abc").unwrap().is_empty());
}
