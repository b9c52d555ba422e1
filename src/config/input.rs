//! Sequence input configuration module.
//!
//! Controls how labeled sequences are normalized before they become trie keys.

use serde::{Deserialize, Serialize};

/// Sequence input configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Whether sequences keep their case; otherwise they are upper-cased
    pub case_sensitive: bool,

    /// Whether records with an empty sequence are dropped
    pub skip_empty: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            skip_empty: true,
        }
    }
}
