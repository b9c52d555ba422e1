// Copyright (c) 2025 Seqtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Compressed Trie Implementation
//!
//! A PATRICIA-style radix trie indexing string keys, where every key can carry
//! any number of values. It is meant for large collections of short strings
//! such as labeled biological sequences: duplicate sequences end up on the same
//! node, and sequences that are prefixes of others sit on the path above them.
//!
//! # Example
//!
//! ```
//! use seqtrie_lib::data_structures::compressed_trie::CompressedTrie;
//!
//! let trie: CompressedTrie<&str> = vec![
//!     ("ab", "0"),
//!     ("abababa", "1"),
//!     ("abab", "2"),
//!     ("baba", "3"),
//!     ("ababaa", "4"),
//!     ("a", "5"),
//!     ("abababa", "6"),
//!     ("bab", "7"),
//!     ("babba", "8"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(trie.len(), 9);
//! assert_eq!(trie.size(), 10);
//! assert_eq!(trie.find("ababaa"), &["4"]);
//!
//! let map = trie.prefix_map().unwrap();
//! assert_eq!(map["1"], vec!["6", "2", "0", "5"]);
//! assert_eq!(map["8"], vec!["7"]);
//! ```
//!
//! # Prefix map
//!
//! The prefix map groups values by the longest keys of the tree. Each leaf
//! starts a group headed by its first value, with the remaining duplicates as
//! members. Values on internal nodes (keys that are prefixes of longer keys)
//! join the largest group below them. Children are folded in descending order
//! of their first character and ties go to the first group found, which makes
//! the result fully deterministic.

mod error;
mod node;
mod shared;

#[cfg(test)]
mod tests;

use std::hash::Hash;

pub use error::{CompressedTrieError, CompressedTrieResult};
pub use node::{CompressedNode, PrefixMap};
pub use shared::SharedCompressedTrie;

/// A compressed trie mapping string keys to one or more values.
///
/// Key features:
/// * Duplicate keys keep every value in insertion order
/// * Exact structural lookup by key
/// * Prefix-map aggregation for deduplicating sequence collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedTrie<V> {
    /// The root node, whose segment is always empty
    root: CompressedNode<V>,
}

impl<V> CompressedTrie<V> {
    /// Creates a new empty `CompressedTrie`.
    pub fn new() -> Self {
        Self {
            root: CompressedNode::new(""),
        }
    }

    /// Builds a trie by inserting every `(key, value)` pair in order.
    ///
    /// # Arguments
    ///
    /// * `pairs` - The pairs to insert.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(pairs);
        tracing::debug!(
            nodes = trie.size(),
            values = trie.len(),
            "built compressed trie"
        );
        trie
    }

    /// Inserts `value` under `key`.
    ///
    /// Inserting under a key that already exists appends the value after the
    /// ones already stored there.
    pub fn insert<K>(&mut self, key: K, value: V)
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        tracing::trace!(key, "inserting into compressed trie");
        self.root.insert(key, value);
    }

    /// Returns the values stored under `key`, or an empty slice if the key
    /// was never inserted.
    pub fn find<K>(&self, key: K) -> &[V]
    where
        K: AsRef<str>,
    {
        self.root.find(key.as_ref())
    }

    /// Returns `true` if at least one value is stored under `key`.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        !self.find(key).is_empty()
    }

    /// Number of nodes in the trie, counting the root.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Total number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Alias of [`CompressedTrie::len`].
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.values().is_empty() && self.root.is_leaf()
    }

    /// The root node.
    pub fn root(&self) -> &CompressedNode<V> {
        &self.root
    }
}

impl<V> CompressedTrie<V>
where
    V: Clone + Eq + Hash,
{
    /// Computes the prefix map of the whole trie.
    ///
    /// # Returns
    ///
    /// * `Ok(PrefixMap<V>)` - Representatives mapped to their group members;
    ///   empty for an empty trie.
    /// * `Err(CompressedTrieError)` - If the tree structure is inconsistent.
    pub fn prefix_map(&self) -> CompressedTrieResult<PrefixMap<V>> {
        if self.is_empty() {
            return Ok(PrefixMap::new());
        }
        self.root.prefix_map()
    }
}

impl<V> Default for CompressedTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Extend<(K, V)> for CompressedTrie<V>
where
    K: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, pairs: I) {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for CompressedTrie<V>
where
    K: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self::from_pairs(pairs)
    }
}
