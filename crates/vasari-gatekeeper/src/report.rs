//! Validation issues and reports

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// What is wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// The bundle file could not be read
    Unreadable(String),

    /// The bundle file is not valid JSON
    InvalidJson(String),

    /// The bundle or entry is not a JSON object
    NotAnObject,

    /// A required field is absent or `null`
    MissingField(String),

    /// A required text field is blank
    EmptyField(String),

    /// A text field holds a non-string value
    NotText(String),

    /// `tags` is present but not an array
    TagsNotArray,

    /// A tag is not a non-blank string
    InvalidTag(usize),

    /// `appliesTo` is present but not an array of strings
    AppliesToNotList,

    /// `entries` is present but not an array
    EntriesNotArray,

    /// `type` outside the enumeration
    InvalidType(String),

    /// `severity` outside the enumeration
    InvalidSeverity(String),

    /// Bundle `domain` is not one of the known domains
    UnknownDomain(String),

    /// Bundle `version` is not `MAJOR.MINOR.PATCH`
    InvalidVersion(String),

    /// Entry `domain` differs from the bundle `domain`
    DomainMismatch {
        /// Entry domain
        entry: String,
        /// Bundle domain
        bundle: String,
    },

    /// The `id` was already used earlier in the same bundle
    DuplicateId,

    /// The `id` was already used by an earlier bundle
    CrossBundleDuplicate {
        /// File of the bundle that used it first
        first_seen_in: String,
    },
}

impl IssueKind {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            IssueKind::Unreadable(_) => "unreadable",
            IssueKind::InvalidJson(_) => "invalid-json",
            IssueKind::NotAnObject => "not-an-object",
            IssueKind::MissingField(_) => "missing-field",
            IssueKind::EmptyField(_) => "empty-field",
            IssueKind::NotText(_) => "not-text",
            IssueKind::TagsNotArray => "tags-not-array",
            IssueKind::InvalidTag(_) => "invalid-tag",
            IssueKind::AppliesToNotList => "applies-to-not-list",
            IssueKind::EntriesNotArray => "entries-not-array",
            IssueKind::InvalidType(_) => "invalid-type",
            IssueKind::InvalidSeverity(_) => "invalid-severity",
            IssueKind::UnknownDomain(_) => "unknown-domain",
            IssueKind::InvalidVersion(_) => "invalid-version",
            IssueKind::DomainMismatch { .. } => "domain-mismatch",
            IssueKind::DuplicateId => "duplicate-id",
            IssueKind::CrossBundleDuplicate { .. } => "cross-bundle-duplicate",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Unreadable(err) => write!(f, "cannot read bundle: {}", err),
            IssueKind::InvalidJson(err) => write!(f, "invalid JSON: {}", err),
            IssueKind::NotAnObject => f.write_str("must be a JSON object"),
            IssueKind::MissingField(field) => write!(f, "missing required field '{}'", field),
            IssueKind::EmptyField(field) => write!(f, "empty required field '{}'", field),
            IssueKind::NotText(field) => write!(f, "'{}' must be a string", field),
            IssueKind::TagsNotArray => f.write_str("'tags' must be an array"),
            IssueKind::InvalidTag(position) => {
                write!(f, "tag {} must be a non-empty string", position)
            }
            IssueKind::AppliesToNotList => f.write_str("'appliesTo' must be an array of strings"),
            IssueKind::EntriesNotArray => f.write_str("'entries' must be an array"),
            IssueKind::InvalidType(value) => write!(f, "invalid type '{}'", value),
            IssueKind::InvalidSeverity(value) => write!(f, "invalid severity '{}'", value),
            IssueKind::UnknownDomain(value) => write!(f, "unknown domain '{}'", value),
            IssueKind::InvalidVersion(value) => {
                write!(f, "version '{}' is not MAJOR.MINOR.PATCH", value)
            }
            IssueKind::DomainMismatch { entry, bundle } => {
                write!(f, "domain '{}' does not match bundle domain '{}'", entry, bundle)
            }
            IssueKind::DuplicateId => f.write_str("duplicate ID within bundle"),
            IssueKind::CrossBundleDuplicate { first_seen_in } => {
                write!(f, "duplicate ID across bundles (first seen in {})", first_seen_in)
            }
        }
    }
}

/// Where an issue was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueLocation {
    /// The bundle as a whole
    Bundle,

    /// One entry, by position and `id` when it has one
    Entry {
        /// Position in `entries`
        index: usize,
        /// Entry `id`, if a non-empty string
        id: Option<String>,
    },
}

/// One validation finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Location of the defect
    pub location: IssueLocation,

    /// Nature of the defect
    pub kind: IssueKind,
}

impl Issue {
    /// An issue affecting the bundle as a whole
    pub fn bundle(kind: IssueKind) -> Self {
        Self {
            location: IssueLocation::Bundle,
            kind,
        }
    }

    /// An issue affecting one entry
    pub fn entry(index: usize, id: Option<String>, kind: IssueKind) -> Self {
        Self {
            location: IssueLocation::Entry { index, id },
            kind,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            IssueLocation::Bundle => write!(f, "bundle: {}", self.kind),
            IssueLocation::Entry { index, id } => write!(
                f,
                "[{}] {}: {}",
                index,
                id.as_deref().unwrap_or("(no id)"),
                self.kind
            ),
        }
    }
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (index, id) = match &self.location {
            IssueLocation::Bundle => (None, None),
            IssueLocation::Entry { index, id } => (Some(*index), id.as_deref()),
        };
        let mut state = serializer.serialize_struct("Issue", 4)?;
        state.serialize_field("index", &index)?;
        state.serialize_field("id", &id)?;
        state.serialize_field("code", self.kind.code())?;
        state.serialize_field("message", &self.kind.to_string())?;
        state.end()
    }
}

/// Outcome for one bundle file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleVerdict {
    /// File name inside the bundle directory
    pub file: String,

    /// Declared bundle domain, when readable
    pub domain: Option<String>,

    /// Number of entries
    pub entries: usize,

    /// Findings in discovery order
    pub issues: Vec<Issue>,
}

impl BundleVerdict {
    /// A bundle passes when it has no issues
    pub fn is_pass(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Totals across all bundles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Bundle files examined
    pub bundles: usize,

    /// Entries across all bundles
    pub total_entries: usize,

    /// Issues across all bundles
    pub total_issues: usize,

    /// Distinct entry ids seen
    pub unique_ids: usize,

    /// Ids that reappeared in a later bundle, once per reappearance
    pub cross_bundle_duplicates: Vec<String>,
}

/// Full validation report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Per-bundle verdicts in file-name order
    pub bundles: Vec<BundleVerdict>,

    /// Totals
    pub summary: Summary,
}

impl ValidationReport {
    /// The run passes only when no bundle has an issue
    pub fn is_pass(&self) -> bool {
        self.summary.total_issues == 0
    }
}
