//! Matcher configuration
//!
//! Read from a JSON file, every field optional:
//!
//! ```json
//! { "sentinel": 0, "case_insensitive": false, "parallel_threshold": 64 }
//! ```

use crate::tree::DEFAULT_SENTINEL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for building and scanning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Terminator appended to the pattern (default: 0x00)
    pub sentinel: u8,
    /// Fold ASCII case of pattern and haystack (default: false)
    pub case_insensitive: bool,
    /// Minimum number of lines before line search runs in parallel (default: 64)
    pub parallel_threshold: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            case_insensitive: false,
            parallel_threshold: 64,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}
