//! Error types for flowprint-core

use thiserror::Error;

/// Main error type for the flowprint-core library
///
/// Only startup-fatal conditions are errors: a catalog that cannot be
/// loaded or that violates its structural invariants, and bad
/// configuration. Malformed individual answers never produce an error;
/// the scoring engine drops them and keeps going.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog load or structural error
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for flowprint-core
pub type Result<T> = std::result::Result<T, Error>;
