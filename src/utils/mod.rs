//! Shared utilities
//!
//! - [`progress`] - Progress bar for line search (no-op without the `progress` feature)

pub mod progress;
