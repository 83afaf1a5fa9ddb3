//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Conversion failure, reported as-is
    #[error(transparent)]
    Extractor(#[from] vasari_extractor::ExtractorError),

    /// Bundle directory could not be examined
    #[error(transparent)]
    Gatekeeper(#[from] vasari_gatekeeper::GatekeeperError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
