//! # sufmatch - Exact search via suffix trees
//!
//! sufmatch indexes a pattern in a suffix tree built online with Ukkonen's
//! algorithm, then slides a cursor over a haystack to find every
//! occurrence. At each alignment the cursor computes the matching
//! statistic (longest common prefix with any substring of the pattern) and
//! uses suffix links to carry it over to the next alignment instead of
//! rescanning from the root.
//!
//! ## Architecture
//!
//! - [`tree`] - Suffix tree construction and the matching cursor
//! - [`matcher`] - Occurrence search, matching statistics, per-line search
//! - [`config`] - Sentinel, case folding and parallelism settings
//! - [`output`] - Result formatting (plain, coloured, JSON)
//! - [`error`] - Input validation errors
//! - [`utils`] - Progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use sufmatch::matcher::Matcher;
//! use sufmatch::config::MatchConfig;
//!
//! let matcher = Matcher::new(b"aaa", &MatchConfig::default()).unwrap();
//! assert_eq!(matcher.find(b"aaaaa"), vec![0, 1, 2]);
//! assert_eq!(matcher.matching_statistics(b"aab"), vec![2, 1, 0]);
//! ```
//!
//! ## Performance
//!
//! Construction is linear in the pattern length. The scan is amortized
//! linear in the haystack length: every jump drops exactly one matched
//! character, and skip/count re-descends whole edges at a time.

pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod tree;
pub mod utils;

pub use error::InvalidInputError;
