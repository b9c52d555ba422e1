//! Error types for reading labeled sequences.

/// Errors that can occur while reading FASTA input.
#[derive(Debug, thiserror::Error)]
pub enum FastaError {
    /// Sequence data appeared before any `>` header line.
    #[error("Sequence data before any header on line {line}")]
    MissingHeader {
        /// One-based line number.
        line: usize,
    },

    /// A header line carried no label.
    #[error("Empty sequence label on line {line}")]
    EmptyLabel {
        /// One-based line number.
        line: usize,
    },

    /// The underlying reader failed.
    #[error("Failed to read FASTA input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;
