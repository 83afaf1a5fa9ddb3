//! Bundle validation logic

use crate::report::{BundleVerdict, Issue, IssueKind, ValidationReport};
use crate::{GatekeeperError, ValidationConfig};
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use vasari_domain::{is_semver, EntryType, Severity, TargetDomain};

/// Fields every entry must carry
const REQUIRED_FIELDS: [&str; 7] = ["id", "type", "domain", "title", "severity", "description", "tags"];

/// Optional fields holding text
const OPTIONAL_TEXT_FIELDS: [&str; 4] = ["context", "example", "counterExample", "why"];

/// The BundleValidator checks persisted bundles for schema conformance and
/// identifier collisions
pub struct BundleValidator {
    config: ValidationConfig,
}

/// The bundle an entry is checked within
struct BundleScope<'a> {
    file: &'a str,
    domain: Option<&'a str>,
    local_ids: HashSet<String>,
}

/// Ids seen so far in a run, with the bundle that used each first
#[derive(Default)]
struct IdIndex {
    first_seen: HashMap<String, String>,
    cross_bundle: Vec<String>,
}

impl BundleValidator {
    /// Create a new BundleValidator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a BundleValidator with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Validate every `*.json` bundle in a directory
    ///
    /// Files are examined in file-name order. Unreadable or unparseable
    /// files become issues; only failing to list the directory is an error.
    pub fn validate_dir(&self, dir: &Path) -> Result<ValidationReport, GatekeeperError> {
        self.config.validate().map_err(GatekeeperError::Config)?;

        let io_error = |source: std::io::Error| GatekeeperError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = Vec::new();
        for dir_entry in fs::read_dir(dir).map_err(io_error)? {
            let path = dir_entry.map_err(io_error)?.path();
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            if is_json && path.is_file() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    files.push(name.to_string());
                }
            }
        }
        files.sort();

        let bundles = files.into_iter().map(|file| {
            let parsed = fs::read_to_string(dir.join(&file))
                .map_err(|e| {
                    warn!("Cannot read bundle {}: {}", file, e);
                    IssueKind::Unreadable(e.to_string())
                })
                .and_then(|raw| {
                    serde_json::from_str::<Value>(&raw)
                        .map_err(|e| IssueKind::InvalidJson(e.to_string()))
                });
            (file, parsed)
        });

        Ok(self.validate_all(bundles))
    }

    /// Validate already parsed bundles, in the order given
    pub fn validate_values<I>(&self, bundles: I) -> ValidationReport
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.validate_all(bundles.into_iter().map(|(file, value)| (file, Ok(value))))
    }

    fn validate_all<I>(&self, bundles: I) -> ValidationReport
    where
        I: IntoIterator<Item = (String, Result<Value, IssueKind>)>,
    {
        let mut ids = IdIndex::default();
        let mut report = ValidationReport::default();

        for (file, parsed) in bundles {
            let verdict = match parsed {
                Ok(value) => self.check_bundle(file, &value, &mut ids),
                Err(kind) => BundleVerdict {
                    file,
                    domain: None,
                    entries: 0,
                    issues: vec![Issue::bundle(kind)],
                },
            };
            debug!(
                "Validated {}: {} entries, {} issues",
                verdict.file,
                verdict.entries,
                verdict.issues.len()
            );

            report.summary.bundles += 1;
            report.summary.total_entries += verdict.entries;
            report.summary.total_issues += verdict.issues.len();
            report.bundles.push(verdict);
        }

        report.summary.unique_ids = ids.first_seen.len();
        report.summary.cross_bundle_duplicates = ids.cross_bundle;
        report
    }

    fn check_bundle(&self, file: String, value: &Value, ids: &mut IdIndex) -> BundleVerdict {
        let mut issues = Vec::new();

        let Some(bundle) = value.as_object() else {
            return BundleVerdict {
                file,
                domain: None,
                entries: 0,
                issues: vec![Issue::bundle(IssueKind::NotAnObject)],
            };
        };

        let domain = match required_text(bundle, "domain") {
            Ok(domain) => Some(domain),
            Err(kind) => {
                issues.push(Issue::bundle(kind));
                None
            }
        };
        if let Some(domain) = domain {
            if self.config.check_domain_consistency && TargetDomain::parse(domain).is_none() {
                issues.push(Issue::bundle(IssueKind::UnknownDomain(domain.to_string())));
            }
        }

        match required_text(bundle, "version") {
            Ok(version) if self.config.check_version && !is_semver(version) => {
                issues.push(Issue::bundle(IssueKind::InvalidVersion(version.to_string())));
            }
            Ok(_) => {}
            Err(kind) => issues.push(Issue::bundle(kind)),
        }

        let entries: &[Value] = match bundle.get("entries") {
            Some(Value::Array(entries)) => entries,
            None | Some(Value::Null) => {
                issues.push(Issue::bundle(IssueKind::MissingField("entries".to_string())));
                &[]
            }
            Some(_) => {
                issues.push(Issue::bundle(IssueKind::EntriesNotArray));
                &[]
            }
        };

        let mut scope = BundleScope {
            file: &file,
            domain,
            local_ids: HashSet::new(),
        };
        for (index, entry) in entries.iter().enumerate() {
            self.check_entry(index, entry, &mut scope, ids, &mut issues);
        }

        BundleVerdict {
            domain: domain.map(str::to_string),
            entries: entries.len(),
            file,
            issues,
        }
    }

    fn check_entry(
        &self,
        index: usize,
        entry: &Value,
        scope: &mut BundleScope<'_>,
        ids: &mut IdIndex,
        issues: &mut Vec<Issue>,
    ) {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        let mut report = |kind| issues.push(Issue::entry(index, id.clone(), kind));

        let Some(fields) = entry.as_object() else {
            report(IssueKind::NotAnObject);
            return;
        };

        // 1. Required fields
        for field in REQUIRED_FIELDS {
            match fields.get(field) {
                None | Some(Value::Null) => report(IssueKind::MissingField(field.to_string())),
                Some(Value::String(s)) if s.trim().is_empty() => {
                    report(IssueKind::EmptyField(field.to_string()))
                }
                Some(Value::String(_)) => {}
                Some(_) if field != "tags" => report(IssueKind::NotText(field.to_string())),
                Some(_) => {}
            }
        }

        // 2. Tags
        match fields.get("tags") {
            Some(Value::Array(tags)) => {
                for (position, tag) in tags.iter().enumerate() {
                    if !tag.as_str().is_some_and(|t| !t.trim().is_empty()) {
                        report(IssueKind::InvalidTag(position));
                    }
                }
            }
            None | Some(Value::Null) => {}
            Some(_) => report(IssueKind::TagsNotArray),
        }

        // 3. Enumerations
        if self.config.check_enumerations {
            if let Some(kind) = non_empty_str(fields, "type") {
                if EntryType::parse(kind).is_none() {
                    report(IssueKind::InvalidType(kind.to_string()));
                }
            }
            if let Some(severity) = non_empty_str(fields, "severity") {
                if Severity::parse(severity).is_none() {
                    report(IssueKind::InvalidSeverity(severity.to_string()));
                }
            }
        }

        // 4. Domain consistency
        if self.config.check_domain_consistency {
            if let (Some(entry_domain), Some(bundle_domain)) =
                (non_empty_str(fields, "domain"), scope.domain)
            {
                if entry_domain != bundle_domain {
                    report(IssueKind::DomainMismatch {
                        entry: entry_domain.to_string(),
                        bundle: bundle_domain.to_string(),
                    });
                }
            }
        }

        // 5. Optional fields
        if self.config.check_optional_fields {
            for field in OPTIONAL_TEXT_FIELDS {
                match fields.get(field) {
                    None | Some(Value::Null) | Some(Value::String(_)) => {}
                    Some(_) => report(IssueKind::NotText(field.to_string())),
                }
            }
            match fields.get("appliesTo") {
                None | Some(Value::Null) => {}
                Some(Value::Array(targets)) if targets.iter().all(Value::is_string) => {}
                Some(_) => report(IssueKind::AppliesToNotList),
            }
        }

        // 6. Identifier collisions
        let Some(id) = id.clone() else {
            return;
        };
        if self.config.check_duplicates && !scope.local_ids.insert(id.clone()) {
            report(IssueKind::DuplicateId);
        }
        match ids.first_seen.get(&id) {
            Some(first) if first != scope.file => {
                if self.config.check_cross_bundle_duplicates {
                    report(IssueKind::CrossBundleDuplicate {
                        first_seen_in: first.clone(),
                    });
                    ids.cross_bundle.push(id);
                }
            }
            Some(_) => {}
            None => {
                ids.first_seen.insert(id, scope.file.to_string());
            }
        }
    }
}

/// A required bundle-level text field
fn required_text<'a>(bundle: &'a Map<String, Value>, field: &str) -> Result<&'a str, IssueKind> {
    match bundle.get(field) {
        None | Some(Value::Null) => Err(IssueKind::MissingField(field.to_string())),
        Some(Value::String(s)) if s.trim().is_empty() => Err(IssueKind::EmptyField(field.to_string())),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(IssueKind::NotText(field.to_string())),
    }
}

fn non_empty_str<'a>(fields: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
