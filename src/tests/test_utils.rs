//! Test utilities and fixtures for seqtrie.
//!
//! Reusable proptest strategies and filesystem helpers.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum number of keys in a generated key list.
const MAX_KEY_COUNT: usize = 40;

/// Maximum length of a key in a generated key list.
const MAX_KEY_LENGTH: usize = 10;

/// Create a temporary directory for test files.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for DNA strings over `ACGT`.
///
/// # Parameters
///
/// * `max_length` - The maximum length of the generated strings.
///
/// # Returns
///
/// A boxed strategy that generates strings of length `0..max_length`.
pub fn dna_strategy(max_length: usize) -> BoxedStrategy<String> {
    proptest::collection::vec(prop::sample::select(vec!['A', 'C', 'G', 'T']), 0..max_length)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for lists of DNA keys, duplicates allowed.
pub fn key_list_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(dna_strategy(MAX_KEY_LENGTH), 0..MAX_KEY_COUNT).boxed()
}
