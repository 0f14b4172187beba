//! Structured error types for the biomap ecosystem.

use thiserror::Error;

/// Unified error type for all biomap operations.
#[derive(Debug, Error)]
pub enum BiomapError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error propagated from an external format parser
    #[error("parse error: {0}")]
    Parse(String),

    /// An expected attribute was absent on an input object
    #[error("missing field `{field}` on {node}")]
    MissingField {
        field: &'static str,
        node: &'static str,
    },

    /// A mapping operation referenced a key that is not present
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the biomap ecosystem.
pub type Result<T> = std::result::Result<T, BiomapError>;
