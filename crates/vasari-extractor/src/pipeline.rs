//! Pipeline driver: run every extractor and persist one bundle per domain

use crate::config::PipelineConfig;
use crate::document::SourceCorpus;
use crate::error::{ExtractorError, Result};
use crate::registry::ExtractorRegistry;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};
use vasari_domain::{IntelligenceBundle, IntelligenceEntry, TargetDomain};

/// Outcome of one domain in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainOutcome {
    /// Domain processed
    pub domain: TargetDomain,

    /// Number of entries written
    pub entries: usize,

    /// Bundle file written
    pub path: PathBuf,
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Per-domain outcomes in pipeline order
    pub domains: Vec<DomainOutcome>,
}

impl RunSummary {
    /// Entries written across all domains
    pub fn total_entries(&self) -> usize {
        self.domains.iter().map(|d| d.entries).sum()
    }

    /// Number of domains processed
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}

/// Drives the extractors over a corpus and writes bundles
///
/// Domains run one at a time in [`TargetDomain::ALL`] order. The first
/// failure aborts the run; bundles already written stay on disk.
pub struct Pipeline {
    registry: ExtractorRegistry,
    config: PipelineConfig,
    corpus: SourceCorpus,
}

impl Pipeline {
    /// Create a pipeline
    pub fn new(registry: ExtractorRegistry, config: PipelineConfig) -> Self {
        let corpus = SourceCorpus::new(config.source_dir.clone());
        Self {
            registry,
            config,
            corpus,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the extractor for a single domain without writing anything
    pub fn extract_domain(&self, domain: TargetDomain) -> Result<Vec<IntelligenceEntry>> {
        let extractor = self
            .registry
            .get(domain)
            .ok_or(ExtractorError::UnregisteredDomain(domain))?;
        extractor.run(&self.corpus)
    }

    /// Run every domain and write its bundle
    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate().map_err(ExtractorError::Config)?;

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|source| ExtractorError::Io {
            path: output_dir.clone(),
            source,
        })?;

        info!(
            "Converting corpus at {} into {}",
            self.corpus.root().display(),
            output_dir.display()
        );

        let mut summary = RunSummary::default();
        for domain in TargetDomain::ALL {
            let outcome = self.write_domain(domain)?;
            summary.domains.push(outcome);
        }

        info!(
            "Wrote {} entries across {} domains",
            summary.total_entries(),
            summary.domain_count()
        );
        Ok(summary)
    }

    fn write_domain(&self, domain: TargetDomain) -> Result<DomainOutcome> {
        debug!("Extracting domain {}", domain);
        let entries = self.extract_domain(domain)?;
        let bundle = IntelligenceBundle::new(domain, self.config.version.clone(), entries);

        let path = self.config.output_path(&domain.bundle_file_name());
        let json = serde_json::to_string_pretty(&bundle)?;
        fs::write(&path, json).map_err(|source| ExtractorError::Io {
            path: path.clone(),
            source,
        })?;

        info!("{}: {} entries → {}", domain, bundle.len(), path.display());
        Ok(DomainOutcome {
            domain,
            entries: bundle.len(),
            path,
        })
    }
}
