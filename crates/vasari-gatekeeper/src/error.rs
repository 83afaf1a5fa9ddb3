//! Gatekeeper error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop validation as a whole
///
/// Defects inside bundles are never errors; they are collected as issues in
/// the report.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// The bundle directory could not be listed
    #[error("Cannot read bundle directory {}: {source}", .path.display())]
    Io {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
