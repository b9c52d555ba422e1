// Copyright (c) 2025 Seqtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Labeled sequence input.
//!
//! Bridges labeled sequences and the compressed trie: FASTA records are read
//! as `(label, sequence)` pairs and swapped into `(sequence, label)` pairs so
//! that sequence content becomes the trie key.

mod error;
mod fasta;
mod pairs;

pub use error::{FastaError, FastaResult};
pub use fasta::{read_fasta, FastaRecord};
pub use pairs::{fasta_to_pairlist, PairList};

use crate::config::InputConfig;

/// Applies the input settings to `records` and yields trie-ready
/// `(sequence, label)` pairs.
///
/// Records with an empty sequence are dropped when `skip_empty` is set, and
/// sequences are upper-cased unless `case_sensitive` is set.
pub fn prepare_pairs<I>(records: I, input: &InputConfig) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = FastaRecord>,
{
    let case_sensitive = input.case_sensitive;
    let skip_empty = input.skip_empty;

    let labeled = records
        .into_iter()
        .filter(move |record| !(skip_empty && record.sequence.is_empty()))
        .map(move |mut record| {
            if !case_sensitive {
                record.sequence = record.sequence.to_uppercase();
            }
            record.into_pair()
        });

    fasta_to_pairlist(labeled)
}
