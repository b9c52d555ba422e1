//! Data structures for seqtrie.

pub mod compressed_trie;

pub use compressed_trie::{
    CompressedNode, CompressedTrie, CompressedTrieError, CompressedTrieResult,
    SharedCompressedTrie,
};
