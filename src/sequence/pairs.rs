// Copyright (c) 2025 Seqtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pair-list adapter between labeled sequences and trie input.

use std::iter::FusedIterator;

/// Lazy iterator turning `(label, sequence)` pairs into `(sequence, label)`
/// pairs, so that sequence content becomes the trie key.
///
/// Cloning the iterator restarts it from the same position when the
/// underlying iterator is cloneable.
#[derive(Debug, Clone)]
pub struct PairList<I> {
    inner: I,
}

impl<I, L, S> Iterator for PairList<I>
where
    I: Iterator<Item = (L, S)>,
{
    type Item = (S, L);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(label, seq)| (seq, label))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, L, S> DoubleEndedIterator for PairList<I>
where
    I: DoubleEndedIterator<Item = (L, S)>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(label, seq)| (seq, label))
    }
}

impl<I, L, S> ExactSizeIterator for PairList<I> where I: ExactSizeIterator<Item = (L, S)> {}

impl<I, L, S> FusedIterator for PairList<I> where I: FusedIterator<Item = (L, S)> {}

/// Returns the sequences in `(sequence, label)` order for trie construction.
///
/// # Arguments
///
/// * `seqs` - Labeled sequences as `(label, sequence)` pairs.
///
/// # Example
///
/// ```
/// use seqtrie_lib::sequence::fasta_to_pairlist;
///
/// let seqs = vec![("s0", "ACA"), ("s1", "ACAGTC")];
/// let pairs: Vec<_> = fasta_to_pairlist(seqs).collect();
/// assert_eq!(pairs, vec![("ACA", "s0"), ("ACAGTC", "s1")]);
/// ```
pub fn fasta_to_pairlist<I, L, S>(seqs: I) -> PairList<I::IntoIter>
where
    I: IntoIterator<Item = (L, S)>,
{
    PairList {
        inner: seqs.into_iter(),
    }
}
