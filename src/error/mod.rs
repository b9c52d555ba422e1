//! Error module for seqtrie.
//!
//! Each component defines its own error enum next to its code; this module
//! gathers them into a single crate-level error for the binary and for callers
//! that drive the whole pipeline.

use thiserror::Error;

use crate::data_structures::compressed_trie::CompressedTrieError;
use crate::sequence::FastaError;

pub mod config;

/// Result type alias used throughout seqtrie.
pub type SeqTrieResult<T> = Result<T, SeqTrieError>;

/// Core error enum for seqtrie.
#[derive(Error, Debug)]
pub enum SeqTrieError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Structural faults detected in the compressed trie.
    #[error("Trie error: {0}")]
    Trie(#[from] CompressedTrieError),

    /// Malformed or unreadable sequence input.
    #[error("Input error: {0}")]
    Fasta(#[from] FastaError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
