//! Unified error types for icy_browse

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for browser list operations
#[derive(Debug, Error)]
pub enum BrowserError {
    // === Store Errors ===
    #[error("Row {index} out of range (list has {len} rows)")]
    OutOfRange { index: usize, len: usize },

    // === Metadata Errors ===
    #[error("Metadata unavailable for '{location}': {message}")]
    MetadataUnavailable { location: String, message: String },

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options file '{path}': {message}")]
    Options { path: PathBuf, message: String },
}

impl BrowserError {
    pub fn metadata_unavailable(location: impl Into<String>, message: impl Into<String>) -> Self {
        BrowserError::MetadataUnavailable {
            location: location.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
