//! Line-oriented search
//!
//! Treats every line of a buffer as an independent haystack. The tree is
//! read-only after construction, so lines are scanned in parallel with one
//! cursor per line once there are enough of them to pay for the threads.

use super::scanner::Matcher;
use crate::utils::progress::ProgressBar;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// Occurrences within one line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatches {
    /// 1-based line number
    pub line_number: usize,
    /// 0-based start offsets within the line
    pub positions: Vec<usize>,
}

impl Matcher {
    /// Search every line of `data`, returning only lines with occurrences
    pub fn find_in_lines(&self, data: &[u8]) -> Vec<LineMatches> {
        self.find_in_lines_with_progress(data, &ProgressBar::hidden())
    }

    /// Like [`Matcher::find_in_lines`], ticking `progress` once per line
    pub fn find_in_lines_with_progress(&self, data: &[u8], progress: &ProgressBar) -> Vec<LineMatches> {
        let lines = split_lines(data);
        let parallel = lines.len() >= self.config().parallel_threshold;

        debug!(
            "scanning {} lines ({})",
            lines.len(),
            if parallel { "parallel" } else { "sequential" }
        );

        let search = |(idx, line): (usize, &&[u8])| {
            let positions = self.find(line);
            progress.inc(1);
            if positions.is_empty() {
                None
            } else {
                Some(LineMatches {
                    line_number: idx + 1,
                    positions,
                })
            }
        };

        if parallel {
            lines.par_iter().enumerate().filter_map(search).collect()
        } else {
            lines.iter().enumerate().filter_map(search).collect()
        }
    }
}

/// Split on `\n`, dropping a trailing `\r` and the empty tail after a final newline
pub fn split_lines(data: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;

    for end in memchr::memchr_iter(b'\n', data) {
        lines.push(trim_cr(&data[start..end]));
        start = end + 1;
    }
    if start < data.len() {
        lines.push(trim_cr(&data[start..]));
    }

    lines
}

/// Number of lines [`split_lines`] yields, without collecting them
pub fn count_lines(data: &[u8]) -> usize {
    let newlines = memchr::memchr_iter(b'\n', data).count();
    if data.last().is_some_and(|&b| b != b'\n') {
        newlines + 1
    } else {
        newlines
    }
}

#[inline]
fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;

    #[test]
    fn test_split_lines() {
        let expected: Vec<&[u8]> = vec![b"a", b"bc", b"", b"d"];
        assert_eq!(split_lines(b"a\nbc\r\n\nd"), expected);

        let expected: Vec<&[u8]> = vec![b"a"];
        assert_eq!(split_lines(b"a\n"), expected);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn test_count_lines_matches_split() {
        let inputs: &[&[u8]] = &[b"", b"\n", b"a", b"a\n", b"a\nb", b"a\r\nb\r\n", b"\n\n\nx"];
        for &data in inputs {
            assert_eq!(count_lines(data), split_lines(data).len(), "{:?}", data);
        }
        assert_eq!(count_lines(b"abab\nxyz\nzab\n"), 3);
    }

    #[test]
    fn test_find_in_lines() {
        let matcher = Matcher::with_defaults(b"ab").unwrap();
        let results = matcher.find_in_lines(b"abab\nxyz\nzab\n");

        assert_eq!(
            results,
            vec![
                LineMatches {
                    line_number: 1,
                    positions: vec![0, 2]
                },
                LineMatches {
                    line_number: 3,
                    positions: vec![1]
                },
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<u8> = (0..500)
            .map(|i| format!("line {} abc{}abc\n", i, i % 7))
            .collect::<String>()
            .into_bytes();

        let sequential = Matcher::new(
            b"c3a",
            &MatchConfig {
                parallel_threshold: usize::MAX,
                ..Default::default()
            },
        )
        .unwrap();
        let parallel = Matcher::new(
            b"c3a",
            &MatchConfig {
                parallel_threshold: 1,
                ..Default::default()
            },
        )
        .unwrap();

        let expected = sequential.find_in_lines(&data);
        assert!(!expected.is_empty());
        assert_eq!(parallel.find_in_lines(&data), expected);
    }
}
