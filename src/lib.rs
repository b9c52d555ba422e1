//! Seqtrie Library
//!
//! This library contains the core components of seqtrie: a compressed radix
//! trie keyed by sequence strings, FASTA input handling that feeds it, and the
//! configuration and error layers shared with the `seqtrie` binary.
//!
//! # Architecture
//!
//! - [`data_structures::compressed_trie`] stores labels under their sequences
//!   and derives a prefix map that groups labels by shared prefixes
//! - [`sequence`] reads FASTA records and turns them into `(sequence, label)` pairs
//! - [`config`] loads settings from files and environment variables
//! - [`error`] gathers the component errors into [`error::SeqTrieError`]

pub mod config;
pub mod data_structures;
pub mod error;
pub mod sequence;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::compressed_trie::{CompressedTrie, PrefixMap, SharedCompressedTrie};
pub use error::{SeqTrieError, SeqTrieResult};

/// Version information for seqtrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
