//! Domain → extractor registry

use crate::document::SourceCorpus;
use crate::error::Result;
use crate::extractors;
use std::collections::BTreeMap;
use std::fmt;
use vasari_domain::{IntelligenceEntry, TargetDomain};

/// Signature every domain extractor implements
pub type ExtractFn = fn(TargetDomain, &SourceCorpus) -> Result<Vec<IntelligenceEntry>>;

/// An extractor bound to the domain it serves
#[derive(Clone, Copy)]
pub struct RegisteredExtractor {
    /// Domain served
    pub domain: TargetDomain,

    /// Source documents read, all required
    pub documents: &'static [&'static str],

    /// Extraction function
    pub extract: ExtractFn,
}

impl RegisteredExtractor {
    /// Bind an extraction function to a domain
    pub fn new(domain: TargetDomain, documents: &'static [&'static str], extract: ExtractFn) -> Self {
        Self {
            domain,
            documents,
            extract,
        }
    }

    /// Run the extractor over a corpus
    pub fn run(&self, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
        (self.extract)(self.domain, corpus)
    }
}

impl fmt::Debug for RegisteredExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredExtractor")
            .field("domain", &self.domain)
            .field("documents", &self.documents)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from domain to extractor
///
/// Built once and handed to the pipeline; there is no global registry.
#[derive(Debug, Clone, Default)]
pub struct ExtractorRegistry {
    extractors: Vec<RegisteredExtractor>,
}

impl ExtractorRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the eight standard extractors in pipeline order
    pub fn standard() -> Self {
        Self::new()
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::DesignTokens,
                extractors::design_tokens::DOCUMENTS,
                extractors::design_tokens::extract,
            ))
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::Components,
                extractors::components::DOCUMENTS,
                extractors::components::extract,
            ))
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::Storybook,
                extractors::storybook::DOCUMENTS,
                extractors::storybook::extract,
            ))
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::Accessibility,
                extractors::accessibility::DOCUMENTS,
                extractors::accessibility::extract,
            ))
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::Typography,
                extractors::typography::DOCUMENTS,
                extractors::typography::extract,
            ))
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::Spacing,
                extractors::spacing::DOCUMENTS,
                extractors::spacing::extract,
            ))
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::ColorSystem,
                extractors::color_system::DOCUMENTS,
                extractors::color_system::extract,
            ))
            .with_extractor(RegisteredExtractor::new(
                TargetDomain::UxPatterns,
                extractors::ux_patterns::DOCUMENTS,
                extractors::ux_patterns::extract,
            ))
    }

    /// Register an extractor, replacing any existing one for its domain
    pub fn with_extractor(mut self, extractor: RegisteredExtractor) -> Self {
        match self.extractors.iter_mut().find(|e| e.domain == extractor.domain) {
            Some(existing) => *existing = extractor,
            None => self.extractors.push(extractor),
        }
        self
    }

    /// Extractor for a domain
    pub fn get(&self, domain: TargetDomain) -> Option<&RegisteredExtractor> {
        self.extractors.iter().find(|e| e.domain == domain)
    }

    /// Registered extractors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredExtractor> {
        self.extractors.iter()
    }

    /// Whether every domain has an extractor
    pub fn is_complete(&self) -> bool {
        TargetDomain::ALL.iter().all(|d| self.get(*d).is_some())
    }

    /// Which domains read each source document
    ///
    /// Domains are listed in pipeline order.
    pub fn source_mapping(&self) -> BTreeMap<&'static str, Vec<TargetDomain>> {
        let mut mapping: BTreeMap<&'static str, Vec<TargetDomain>> = BTreeMap::new();
        for domain in TargetDomain::ALL {
            let Some(extractor) = self.get(domain) else {
                continue;
            };
            for &document in extractor.documents {
                mapping.entry(document).or_default().push(domain);
            }
        }
        mapping
    }
}
