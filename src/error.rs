//! Error types for log-converter
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Unified error type for log-converter operations
#[derive(Debug, Error)]
pub enum ConvertError {
    // -------------------------------------------------------------------------
    // Invocation Errors
    // -------------------------------------------------------------------------
    #[error("No input file given.")]
    Usage,

    #[error("Endianness must be l for little or b for big.")]
    InvalidEndianness(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Cannot open input file {} ({source}).", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Event Table Errors
    // -------------------------------------------------------------------------
    #[error("Event table error: {0}")]
    EventTable(String),
}

impl ConvertError {
    /// Whether the usage text should follow this error on the console
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            ConvertError::Usage | ConvertError::InvalidEndianness(_) | ConvertError::FileOpen { .. }
        )
    }
}
