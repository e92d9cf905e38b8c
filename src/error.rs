//! Error taxonomy for the catalog.
//!
//! Storage failures are split from catalog-level conditions so the menu loop
//! can treat validation and not-found as recoverable while I/O and corrupt
//! files abort the current operation.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file unreadable or unwritable.
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file present but not parseable in the expected shape.
    #[error("corrupt store file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

/// Failures raised by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Bad user input, carrying the specific violated rule.
    #[error("{0}")]
    Validation(String),

    /// Operation targets a title absent from the collection.
    #[error("movie '{0}' does not exist")]
    NotFound(String),

    /// Operation requires a non-empty collection.
    #[error("no movies in the catalog")]
    EmptyCatalog,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures raised by the metadata lookup client.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata lookup not configured: {0}")]
    NotConfigured(String),

    #[error("metadata request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("metadata API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse metadata response: {0}")]
    Parse(String),
}

/// Configuration loading or resolution failure.
#[derive(Debug, Error)]
#[error("configuration error: {0}")]
pub struct ConfigError(pub String);
