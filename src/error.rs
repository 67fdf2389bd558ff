//! Error types for rowpack
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RowError
pub type Result<T> = std::result::Result<T, RowError>;

/// Unified error type for rowpack operations
#[derive(Debug, Error)]
pub enum RowError {
    // -------------------------------------------------------------------------
    // Bounds Errors
    // -------------------------------------------------------------------------
    #[error("out of range: {0}")]
    OutOfRange(String),

    // -------------------------------------------------------------------------
    // Format Errors
    // -------------------------------------------------------------------------
    #[error("row corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // I/O Errors (inspection tooling only; the codec itself performs no I/O)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
