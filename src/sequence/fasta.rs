// Copyright (c) 2025 Seqtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Minimal FASTA reader.
//!
//! Each record starts with a `>label` header line followed by one or more
//! sequence lines, which are concatenated. Blank lines are ignored.

use std::io::BufRead;

use super::error::{FastaError, FastaResult};

/// A labeled sequence read from FASTA input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Header text after `>`, trimmed
    pub label: String,

    /// Sequence lines concatenated, without whitespace
    pub sequence: String,
}

impl FastaRecord {
    /// Creates a record from a label and a sequence.
    pub fn new<L: Into<String>, S: Into<String>>(label: L, sequence: S) -> Self {
        Self {
            label: label.into(),
            sequence: sequence.into(),
        }
    }

    /// Consumes the record into a `(label, sequence)` pair.
    pub fn into_pair(self) -> (String, String) {
        (self.label, self.sequence)
    }
}

/// Reads every record from `reader`.
///
/// # Returns
///
/// * `Ok(Vec<FastaRecord>)` - The records in file order.
/// * `Err(FastaError)` - If the input is malformed or cannot be read.
pub fn read_fasta<R: BufRead>(reader: R) -> FastaResult<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            let label = header.trim();
            if label.is_empty() {
                return Err(FastaError::EmptyLabel { line: idx + 1 });
            }
            records.extend(current.replace(FastaRecord::new(label, String::new())));
        } else {
            match current.as_mut() {
                Some(record) => record
                    .sequence
                    .extend(line.chars().filter(|c| !c.is_whitespace())),
                None => return Err(FastaError::MissingHeader { line: idx + 1 }),
            }
        }
    }

    records.extend(current);
    tracing::debug!(records = records.len(), "read FASTA input");
    Ok(records)
}
