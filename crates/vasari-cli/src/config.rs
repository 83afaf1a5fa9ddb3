//! Configuration management for the CLI.
//!
//! Values resolve, highest first: command-line flags, the `SALVADOR_DATA`
//! environment variable (corpus root only, applied by clap), the TOML config
//! file, then built-in defaults.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vasari_domain::DEFAULT_VERSION;
use vasari_extractor::PipelineConfig;

/// Environment variable overriding the corpus root.
pub const ENV_SOURCE_DIR: &str = "SALVADOR_DATA";

/// Corpus root under the home directory when nothing else is configured.
const DEFAULT_SOURCE_SUBDIR: &str = "projects/salvador/intelligence/data";

/// Output directory name under the package root when nothing else is configured.
const DEFAULT_OUTPUT_SUBDIR: &str = "bundles";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the source JSON documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,

    /// Directory bundles are written to and validated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Version stamped on every bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

impl Config {
    /// Default configuration file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".vasari").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is read
    /// when present and built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&contents)
    }

    /// Resolve the corpus root.
    pub fn source_dir(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = flag.or_else(|| self.source_dir.clone()) {
            return Ok(dir);
        }
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(DEFAULT_SOURCE_SUBDIR))
    }

    /// Resolve the bundle directory.
    ///
    /// The default is fixed to the package location, so `convert` and
    /// `validate` agree on it wherever they are run from.
    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output_dir.clone())
            .unwrap_or_else(default_output_dir)
    }

    /// Resolve the bundle version.
    pub fn version(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.version.clone())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }

    /// Build the pipeline configuration for a conversion run.
    pub fn pipeline_config(
        &self,
        source: Option<PathBuf>,
        output: Option<PathBuf>,
        version: Option<String>,
    ) -> Result<PipelineConfig> {
        let config = PipelineConfig::new(self.source_dir(source)?, self.output_dir(output))
            .with_version(self.version(version));
        config.validate().map_err(CliError::Config)?;
        Ok(config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

/// Bundle directory used when neither a flag nor the config file names one.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_OUTPUT_SUBDIR)
}

fn default_true() -> bool {
    true
}
