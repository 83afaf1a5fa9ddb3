//! Convert command implementation.

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use vasari_extractor::{ExtractorRegistry, Pipeline};

/// Execute the convert command.
///
/// Any extraction or write failure aborts the run and is returned as an error.
pub fn execute_convert(args: ConvertArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let pipeline_config = config.pipeline_config(args.source, args.output, args.bundle_version)?;
    let pipeline = Pipeline::new(ExtractorRegistry::standard(), pipeline_config);

    let summary = pipeline.run()?;
    println!("{}", formatter.format_conversion(&summary)?);

    Ok(true)
}
