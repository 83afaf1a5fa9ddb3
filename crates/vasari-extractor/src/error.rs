//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;
use vasari_domain::TargetDomain;

/// Result type alias for extraction and pipeline operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Errors that abort an extraction run
///
/// Every variant is fatal for the run: a missing or corrupt source document
/// is a build-time misconfiguration, not a per-entry condition.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A required source document does not exist
    #[error("Missing source document '{name}' (expected at {})", .path.display())]
    MissingDocument {
        /// Document file name
        name: String,
        /// Path that was read
        path: PathBuf,
    },

    /// A source document is not parseable JSON
    #[error("Source document '{name}' is not valid JSON: {source}")]
    InvalidDocument {
        /// Document file name
        name: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// Reading a document or writing a bundle failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The registry has no extractor for a domain
    #[error("No extractor registered for domain '{0}'")]
    UnregisteredDomain(TargetDomain),

    /// Bundle serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
