//! Error types for the divination engine.

use thiserror::Error;

/// Result type for casting and drawing operations.
pub type CastResult<T> = Result<T, CastError>;

/// Errors that can occur while preparing or performing a reading.
#[derive(Debug, Error)]
pub enum CastError {
    /// The query was empty or contained only whitespace.
    #[error("a question is required for divination")]
    EmptyQuery,

    /// An explicitly supplied timestamp could not be parsed as RFC 3339.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// The requested spread size is not one of the supported layouts.
    #[error("invalid spread size: {0} (expected 1, 3 or 10)")]
    InvalidSpread(u32),

    /// A hash prefix matched more than one card in the pool.
    #[error("ambiguous choice '{0}': multiple hashes match")]
    AmbiguousPrefix(String),

    /// A hash prefix matched no card in the pool.
    #[error("invalid choice '{0}': no matching hash found")]
    NoMatchingPrefix(String),
}
