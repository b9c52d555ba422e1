// Copyright (c) 2025 Seqtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lock-guarded handle for sharing a trie between threads.
//!
//! The trie itself has no concurrent mutation support. This handle serializes
//! writers behind a read/write lock so that lookups and prefix-map queries can
//! run in parallel whenever no insertion is in flight.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{CompressedTrie, CompressedTrieResult, PrefixMap};

/// A cloneable, thread-safe handle around a [`CompressedTrie`].
#[derive(Debug)]
pub struct SharedCompressedTrie<V> {
    inner: Arc<RwLock<CompressedTrie<V>>>,
}

impl<V> SharedCompressedTrie<V> {
    /// Creates a handle around a new empty trie.
    pub fn new() -> Self {
        Self::from_trie(CompressedTrie::new())
    }

    /// Wraps an existing trie.
    pub fn from_trie(trie: CompressedTrie<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Inserts `value` under `key`, holding the write lock.
    pub fn insert<K>(&self, key: K, value: V)
    where
        K: AsRef<str>,
    {
        self.inner.write().insert(key, value);
    }

    /// Number of nodes in the trie.
    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs `f` against the trie while holding the read lock.
    pub fn with_trie<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&CompressedTrie<V>) -> R,
    {
        f(&self.inner.read())
    }

    /// Returns the inner trie if this is the last handle, or the handle back
    /// otherwise.
    pub fn try_into_inner(self) -> Result<CompressedTrie<V>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<V: Clone> SharedCompressedTrie<V> {
    /// Returns a copy of the values stored under `key`.
    pub fn find<K>(&self, key: K) -> Vec<V>
    where
        K: AsRef<str>,
    {
        self.inner.read().find(key).to_vec()
    }
}

impl<V> SharedCompressedTrie<V>
where
    V: Clone + Eq + Hash,
{
    /// Computes the prefix map while holding the read lock.
    pub fn prefix_map(&self) -> CompressedTrieResult<PrefixMap<V>> {
        self.inner.read().prefix_map()
    }
}

impl<V> Clone for SharedCompressedTrie<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SharedCompressedTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<CompressedTrie<V>> for SharedCompressedTrie<V> {
    fn from(trie: CompressedTrie<V>) -> Self {
        Self::from_trie(trie)
    }
}
