//! Error types for the edgemap library.
//!
//! The graph operations themselves never fail — operating on a missing
//! node is a documented no-op. Errors only arise at the boundaries: file
//! I/O and edge-list parsing.

use thiserror::Error;

/// All errors that can occur in the edgemap library.
#[derive(Error, Debug)]
pub enum EdgemapError {
    /// A line in an edge-list file could not be parsed.
    #[error("Malformed edge list at line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for edgemap operations.
pub type EdgemapResult<T> = Result<T, EdgemapError>;
