//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tracing::info;
use vasari_gatekeeper::{BundleValidator, ValidationConfig};

/// Execute the validate command.
///
/// Returns `false` when any issue was found.
pub fn execute_validate(args: ValidateArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let dir = config.output_dir(args.bundles);
    let validation = if args.permissive {
        ValidationConfig::permissive()
    } else {
        ValidationConfig::default()
    };

    info!("Validating bundles in {}", dir.display());
    let report = BundleValidator::new(validation).validate_dir(&dir)?;
    println!("{}", formatter.format_report(&report)?);

    Ok(report.is_pass())
}
