//! Test modules for seqtrie.
//!
//! This module contains the crate-level tests that span components, along
//! with the shared proptest strategies used by the per-module test suites.

pub mod test_utils;

pub use test_utils::{create_test_dir, dna_strategy, key_list_strategy};
