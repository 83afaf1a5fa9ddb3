//! Configuration for the pipeline driver

use std::path::PathBuf;
use vasari_domain::{is_semver, DEFAULT_VERSION};

/// Configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory holding the source JSON documents
    pub source_dir: PathBuf,

    /// Directory bundles are written to (created if absent)
    pub output_dir: PathBuf,

    /// Semantic version stamped on every bundle of the run
    pub version: String,
}

impl PipelineConfig {
    /// Create a configuration with the default bundle version
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            version: DEFAULT_VERSION.to_string(),
        }
    }

    /// Override the bundle version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Path of the bundle file for a file name inside the output directory
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.source_dir.as_os_str().is_empty() {
            return Err("source_dir must not be empty".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty".to_string());
        }
        if !is_semver(&self.version) {
            return Err(format!(
                "version '{}' is not a MAJOR.MINOR.PATCH version",
                self.version
            ));
        }
        Ok(())
    }
}
