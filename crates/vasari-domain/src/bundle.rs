//! Bundle module - the persisted collection of entries for one domain

use crate::domain::TargetDomain;
use crate::entry::IntelligenceEntry;
use serde::{Deserialize, Serialize};

/// Version stamped on bundles when a run does not choose one
pub const DEFAULT_VERSION: &str = "1.0.0";

/// All entries extracted for one domain in a single pipeline run
///
/// Bundles are created fresh on every run and replace any previous bundle
/// for the same domain. The version is fixed by the run, not derived from
/// the entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceBundle {
    /// Owning domain
    pub domain: TargetDomain,

    /// Semantic version of the run
    pub version: String,

    /// Entries in extraction order
    pub entries: Vec<IntelligenceEntry>,
}

impl IntelligenceBundle {
    /// Create a new bundle
    pub fn new(domain: TargetDomain, version: impl Into<String>, entries: Vec<IntelligenceEntry>) -> Self {
        Self {
            domain,
            version: version.into(),
            entries,
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Check that a version string has the `MAJOR.MINOR.PATCH` shape
///
/// Pre-release and build suffixes are not accepted.
pub fn is_semver(version: &str) -> bool {
    let parts: Vec<&str> = version.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}
