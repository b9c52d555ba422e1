// Copyright (c) 2025 Seqtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the compressed trie.
//!
//! A [`CompressedNode`] holds a key segment, the values whose full key ends
//! exactly at the node, and its children keyed by the first character of
//! their own segment. Nodes own their children outright; restructuring a node
//! during insertion only ever moves owned data around.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::mem;

use super::error::{CompressedTrieError, CompressedTrieResult};

/// Mapping from a group representative to the other members of its group.
pub type PrefixMap<V> = HashMap<V, Vec<V>>;

/// Ordered list of `(representative, members)` groups produced while folding
/// the tree bottom-up.
type PrefixGroups<V> = Vec<(V, Vec<V>)>;

/// A node in the compressed trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedNode<V> {
    /// Portion of the key consumed between the parent and this node
    pub(crate) key: String,

    /// Values of keys terminating exactly at this node, in insertion order
    pub(crate) values: Vec<V>,

    /// Children keyed by the first character of their segment
    pub(crate) children: BTreeMap<char, CompressedNode<V>>,
}

impl<V> CompressedNode<V> {
    /// Creates a node with the given key segment and no values.
    pub fn new<K: Into<String>>(key: K) -> Self {
        Self {
            key: key.into(),
            values: Vec::new(),
            children: BTreeMap::new(),
        }
    }

    fn with_value<K: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            values: vec![value],
            children: BTreeMap::new(),
        }
    }

    /// The key segment attached to this node.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Values whose key ends exactly at this node.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Returns the child whose segment starts with `first`.
    pub fn child(&self, first: char) -> Option<&CompressedNode<V>> {
        self.children.get(&first)
    }

    /// Iterates over children in ascending order of their first character.
    pub fn children(&self) -> impl Iterator<Item = (char, &CompressedNode<V>)> + '_ {
        self.children.iter().map(|(first, child)| (*first, child))
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Inserts `value` under `key`, where `key` is the part of the full key
    /// not yet consumed above this node.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut node = self;
        let mut key = key;

        loop {
            let shared = common_prefix_len(key, &node.key);
            let old_next = node.key[shared..].chars().next();
            let new_next = key[shared..].chars().next();

            match (old_next, new_next) {
                (Some(old_first), Some(new_first)) => {
                    node.split(shared, old_first, new_first, &key[shared..], value);
                    return;
                }
                (None, None) => {
                    node.values.push(value);
                    return;
                }
                (Some(old_first), None) => {
                    node.demote(shared, old_first, value);
                    return;
                }
                (None, Some(next)) => {
                    let remainder = &key[shared..];
                    match node.children.entry(next) {
                        Entry::Occupied(entry) => {
                            node = entry.into_mut();
                            key = remainder;
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(CompressedNode::with_value(remainder, value));
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Divergence inside both strings: this node keeps the shared prefix and
    /// gets exactly two children, the old content and the new key.
    fn split(&mut self, shared: usize, old_first: char, new_first: char, remainder: &str, value: V) {
        tracing::trace!(prefix = %&self.key[..shared], "splitting trie node");

        let old_suffix = self.key.split_off(shared);
        let old = CompressedNode {
            key: old_suffix,
            values: mem::take(&mut self.values),
            children: mem::take(&mut self.children),
        };

        self.children.insert(old_first, old);
        self.children.insert(new_first, CompressedNode::with_value(remainder, value));
    }

    /// The incoming key is a strict prefix of this node's segment: push the
    /// current content one level down under the leftover suffix.
    fn demote(&mut self, shared: usize, old_first: char, value: V) {
        let old_suffix = self.key.split_off(shared);
        let lower = CompressedNode {
            key: old_suffix,
            values: mem::replace(&mut self.values, vec![value]),
            children: mem::take(&mut self.children),
        };

        self.children.insert(old_first, lower);
    }

    /// Returns the values attached to the node reached by following `key`.
    ///
    /// A key that runs out inside this node's segment yields this node's
    /// values; a mismatch or a missing child yields an empty slice.
    pub fn find(&self, key: &str) -> &[V] {
        let mut node = self;
        let mut key = key;

        loop {
            if key.is_empty() {
                return &node.values;
            }

            let shared = common_prefix_len(key, &node.key);
            if shared == key.len() {
                return &node.values;
            }
            if shared < node.key.len() {
                return &[];
            }

            let remainder = &key[shared..];
            match remainder.chars().next().and_then(|next| node.children.get(&next)) {
                Some(child) => {
                    node = child;
                    key = remainder;
                }
                None => return &[],
            }
        }
    }

    /// Number of nodes in the subtree rooted here, including this one.
    pub fn size(&self) -> usize {
        1 + self.children.values().map(CompressedNode::size).sum::<usize>()
    }

    /// Number of values stored in the subtree rooted here.
    pub fn len(&self) -> usize {
        self.values.len() + self.children.values().map(CompressedNode::len).sum::<usize>()
    }

    /// Returns `true` if the subtree holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.children.values().all(CompressedNode::is_empty)
    }
}

impl<V> CompressedNode<V>
where
    V: Clone + Eq + Hash,
{
    /// Builds the prefix map of the subtree rooted here.
    ///
    /// Leaves start a group headed by their first value. Internal nodes merge
    /// the groups of their children, visiting children in descending order of
    /// their first character, and append their own values to the largest
    /// group (the first one found wins ties). A representative produced by
    /// more than one child keeps its first position and the members of the
    /// last child that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`CompressedTrieError::EmptyLeaf`] if a leaf without values is
    /// reached, which means the tree was built incorrectly.
    pub fn prefix_map(&self) -> CompressedTrieResult<PrefixMap<V>> {
        let mut path = String::new();
        let groups = self.prefix_groups(&mut path)?;
        Ok(groups.into_iter().collect())
    }

    fn prefix_groups(&self, path: &mut String) -> CompressedTrieResult<PrefixGroups<V>> {
        path.push_str(&self.key);

        let groups = if self.children.is_empty() {
            let (head, rest) = self
                .values
                .split_first()
                .ok_or_else(|| CompressedTrieError::EmptyLeaf { path: path.clone() })?;
            vec![(head.clone(), rest.to_vec())]
        } else {
            let mut groups = PrefixGroups::new();
            let mut positions: HashMap<V, usize> = HashMap::new();
            for child in self.children.values().rev() {
                for (rep, members) in child.prefix_groups(path)? {
                    match positions.get(&rep) {
                        // A representative seen under an earlier child keeps
                        // its position and takes the newer members
                        Some(&idx) => groups[idx].1 = members,
                        None => {
                            positions.insert(rep.clone(), groups.len());
                            groups.push((rep, members));
                        }
                    }
                }
            }
            if let Some((_, members)) = largest_group(&mut groups) {
                members.extend(self.values.iter().cloned());
            }
            groups
        };

        path.truncate(path.len() - self.key.len());
        Ok(groups)
    }
}

/// First group with the greatest number of members.
fn largest_group<V>(groups: &mut [(V, Vec<V>)]) -> Option<&mut (V, Vec<V>)> {
    let mut best: Option<usize> = None;
    for (idx, (_, members)) in groups.iter().enumerate() {
        if best.map_or(true, |b| members.len() > groups[b].1.len()) {
            best = Some(idx);
        }
    }
    best.and_then(move |idx| groups.get_mut(idx))
}

/// Byte length of the longest common prefix of `a` and `b`, always on a
/// `char` boundary of both strings.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map_or_else(|| a.len().min(b.len()), |((idx, _), _)| idx)
}
