//! Pattern search on top of the suffix tree
//!
//! - `scanner`: Single-haystack occurrence search and matching statistics
//! - `lines`: Per-line search over a buffer, parallel for large inputs
//!
//! ```
//! use sufmatch::matcher::Matcher;
//!
//! let matcher = Matcher::with_defaults(b"ab").unwrap();
//! assert_eq!(matcher.find(b"abab"), vec![0, 2]);
//! ```

pub mod lines;
pub mod scanner;

pub use lines::{LineMatches, count_lines, split_lines};
pub use scanner::{Matcher, find_occurrences};
