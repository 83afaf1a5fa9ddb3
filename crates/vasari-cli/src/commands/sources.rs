//! Sources command implementation.

use crate::cli::SourcesArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{Formatter, SourceStatus};
use vasari_extractor::{ExtractorRegistry, SourceCorpus};

/// Execute the sources command.
///
/// Returns `false` when a required document is missing from the corpus.
pub fn execute_sources(args: SourcesArgs, config: &Config, formatter: &Formatter) -> Result<bool> {
    let corpus = SourceCorpus::new(config.source_dir(args.source)?);
    let sources = source_statuses(&ExtractorRegistry::standard(), &corpus);

    println!("{}", formatter.format_sources(corpus.root(), &sources)?);

    Ok(sources.iter().all(|s| s.present))
}

/// Every document the registry reads, with its presence in the corpus.
pub fn source_statuses(registry: &ExtractorRegistry, corpus: &SourceCorpus) -> Vec<SourceStatus> {
    registry
        .source_mapping()
        .into_iter()
        .map(|(document, domains)| SourceStatus {
            document: document.to_string(),
            domains,
            present: corpus.contains(document),
        })
        .collect()
}
