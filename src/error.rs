use thiserror::Error;

/// Rejected input for tree construction.
///
/// Construction itself has no failure states; these are the preconditions
/// the tree needs (a non-empty body terminated by a sentinel that occurs
/// nowhere else) checked up front instead of silently producing a bad tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("invalid input: text is empty")]
    EmptyText,

    #[error("invalid input: text is not terminated by sentinel {sentinel:#04x}")]
    MissingSentinel { sentinel: u8 },

    #[error("invalid input: sentinel {sentinel:#04x} occurs in text at position {position}")]
    SentinelInText { sentinel: u8, position: usize },

    #[error("invalid input: text of {len} bytes exceeds the addressable size")]
    TextTooLong { len: usize },
}

pub type Result<T> = std::result::Result<T, InvalidInputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_compares_fields() {
        let at = |position| InvalidInputError::SentinelInText {
            sentinel: b'$',
            position,
        };
        assert_eq!(at(3), at(3));
        assert_ne!(at(3), at(4));
        assert_ne!(
            InvalidInputError::MissingSentinel { sentinel: b'$' },
            InvalidInputError::MissingSentinel { sentinel: 0 }
        );
    }

    #[test]
    fn test_display_text_too_long() {
        let err = InvalidInputError::TextTooLong { len: 5_000_000_000 };
        assert_eq!(
            err.to_string(),
            "invalid input: text of 5000000000 bytes exceeds the addressable size"
        );
    }

    #[test]
    fn test_display_includes_sentinel() {
        let err = InvalidInputError::MissingSentinel { sentinel: b'$' };
        let display = format!("{}", err);
        assert!(display.contains("0x24"), "got: {}", display);
    }

    #[test]
    fn test_display_includes_position() {
        let err = InvalidInputError::SentinelInText {
            sentinel: 0,
            position: 17,
        };
        let display = format!("{}", err);
        assert!(display.contains("17"), "got: {}", display);
    }
}
