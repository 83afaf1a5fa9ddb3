//! CLI command definitions and argument parsing.

use crate::config::{OutputFormat, ENV_SOURCE_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vasari CLI - Normalize the design knowledge base into intelligence bundles.
#[derive(Debug, Parser)]
#[command(name = "vasari")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (defaults to ~/.vasari/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert the source corpus into one bundle per domain
    Convert(ConvertArgs),

    /// Validate the bundles in a directory
    Validate(ValidateArgs),

    /// Show which domains read each source document
    Sources(SourcesArgs),
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    /// Directory holding the source JSON documents
    #[arg(short, long, env = ENV_SOURCE_DIR)]
    pub source: Option<PathBuf>,

    /// Directory the bundles are written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Version stamped on every bundle (MAJOR.MINOR.PATCH)
    #[arg(long)]
    pub bundle_version: Option<String>,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Directory holding the bundles
    #[arg(short, long)]
    pub bundles: Option<PathBuf>,

    /// Only run structural checks
    #[arg(long)]
    pub permissive: bool,
}

/// Arguments for the sources command.
#[derive(Debug, Parser)]
pub struct SourcesArgs {
    /// Directory holding the source JSON documents
    #[arg(short, long, env = ENV_SOURCE_DIR)]
    pub source: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_command() {
        let cli = Cli::parse_from([
            "vasari",
            "convert",
            "--source",
            "/data",
            "--output",
            "out",
            "--bundle-version",
            "2.0.0",
        ]);
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.source, Some(PathBuf::from("/data")));
                assert_eq!(args.output, Some(PathBuf::from("out")));
                assert_eq!(args.bundle_version.as_deref(), Some("2.0.0"));
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_validate_command_with_global_flags() {
        let cli = Cli::parse_from([
            "vasari",
            "validate",
            "--permissive",
            "--format",
            "json",
            "--no-color",
        ]);
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        match cli.command {
            Command::Validate(args) => {
                assert!(args.permissive);
                assert!(args.bundles.is_none());
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["vasari"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Json.into();
        assert_eq!(format, OutputFormat::Json);
    }
}
