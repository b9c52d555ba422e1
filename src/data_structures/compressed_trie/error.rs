//! Error types for the compressed trie.
//!
//! Insertion and lookup never fail. The only error is a structural fault
//! detected while folding the tree into a prefix map.

/// Errors that can occur in compressed trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompressedTrieError {
    /// A leaf node without any values was reached.
    #[error("Leaf node at key '{path}' holds no values")]
    EmptyLeaf {
        /// Full key from the root down to the offending node.
        path: String,
    },
}

/// Result type for compressed trie operations.
pub type CompressedTrieResult<T> = Result<T, CompressedTrieError>;
