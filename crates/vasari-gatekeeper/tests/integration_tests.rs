//! Integration tests for bundle directory validation

use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vasari_domain::TargetDomain;
use vasari_extractor::{ExtractorRegistry, Pipeline, PipelineConfig};
use vasari_gatekeeper::{BundleValidator, GatekeeperError, IssueKind, ValidationConfig};

/// Helper to write a bundle file
fn write_bundle(dir: &Path, file: &str, value: serde_json::Value) {
    fs::write(dir.join(file), serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

fn entry(id: &str, domain: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": "pattern",
        "domain": domain,
        "title": "A title",
        "severity": "suggestion",
        "description": "A description",
        "tags": []
    })
}

/// Helper to generate bundles from a small corpus
fn generate_bundles(output: &Path) {
    let corpus = TempDir::new().unwrap();
    for name in ExtractorRegistry::standard().source_mapping().keys() {
        fs::write(corpus.path().join(name), "{}").unwrap();
    }
    fs::write(
        corpus.path().join("token-rules.json"),
        r#"{"forbidden": [{"pattern": "inline-hex-color", "reason": "breaks theming", "severity": "error"}]}"#,
    )
    .unwrap();
    fs::write(
        corpus.path().join("ux-laws.json"),
        r#"{"coreLaws": [{"name": "Fitts's Law", "rule": "Big targets", "application": "Buttons"}]}"#,
    )
    .unwrap();

    let config = PipelineConfig::new(corpus.path(), output);
    Pipeline::new(ExtractorRegistry::standard(), config)
        .run()
        .unwrap();
}

#[test]
fn test_generated_bundles_pass() {
    let output = TempDir::new().unwrap();
    generate_bundles(output.path());

    let report = BundleValidator::default_config()
        .validate_dir(output.path())
        .unwrap();

    assert!(report.is_pass(), "unexpected issues: {:?}", report.bundles);
    assert_eq!(report.summary.bundles, 8);
    assert_eq!(report.summary.total_entries, 3);
    assert_eq!(report.summary.unique_ids, 3);
    assert!(report.summary.cross_bundle_duplicates.is_empty());
}

#[test]
fn test_bundles_examined_in_file_name_order() {
    let output = TempDir::new().unwrap();
    generate_bundles(output.path());

    let report = BundleValidator::default_config()
        .validate_dir(output.path())
        .unwrap();
    let files: Vec<&str> = report.bundles.iter().map(|b| b.file.as_str()).collect();

    let mut expected: Vec<String> = TargetDomain::ALL
        .iter()
        .map(|d| d.bundle_file_name())
        .collect();
    expected.sort();
    assert_eq!(files, expected);
}

#[test]
fn test_duplicate_id_within_one_bundle() {
    let dir = TempDir::new().unwrap();
    write_bundle(
        dir.path(),
        "components.json",
        json!({"domain": "components", "version": "1.0.0",
               "entries": [entry("components-x", "components"), entry("components-x", "components")]}),
    );

    let report = BundleValidator::default_config()
        .validate_dir(dir.path())
        .unwrap();

    assert_eq!(report.summary.total_issues, 1);
    assert_eq!(report.bundles[0].issues[0].kind, IssueKind::DuplicateId);
    assert!(!report.is_pass());
}

#[test]
fn test_duplicate_id_across_bundles() {
    let dir = TempDir::new().unwrap();
    write_bundle(
        dir.path(),
        "spacing.json",
        json!({"domain": "spacing", "version": "1.0.0", "entries": [entry("layout-grid", "spacing")]}),
    );
    write_bundle(
        dir.path(),
        "typography.json",
        json!({"domain": "typography", "version": "1.0.0", "entries": [entry("layout-grid", "typography")]}),
    );

    let report = BundleValidator::default_config()
        .validate_dir(dir.path())
        .unwrap();

    assert_eq!(report.summary.cross_bundle_duplicates, vec!["layout-grid"]);
    assert!(report.bundles[0].is_pass());
    assert_eq!(
        report.bundles[1].issues[0].kind,
        IssueKind::CrossBundleDuplicate {
            first_seen_in: "spacing.json".to_string()
        }
    );
    assert!(!report.is_pass());

    let permissive = BundleValidator::new(ValidationConfig::permissive())
        .validate_dir(dir.path())
        .unwrap();
    assert!(permissive.is_pass());
}

#[test]
fn test_corrupt_bundle_is_an_issue_not_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.json"), "{ \"domain\": ").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let report = BundleValidator::default_config()
        .validate_dir(dir.path())
        .unwrap();

    assert_eq!(report.summary.bundles, 1);
    assert!(matches!(
        report.bundles[0].issues[0].kind,
        IssueKind::InvalidJson(_)
    ));
    assert!(!report.is_pass());
}

#[test]
fn test_empty_directory_passes() {
    let dir = TempDir::new().unwrap();
    let report = BundleValidator::default_config()
        .validate_dir(dir.path())
        .unwrap();

    assert!(report.is_pass());
    assert_eq!(report.summary.bundles, 0);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = BundleValidator::default_config().validate_dir(&dir.path().join("absent"));
    assert!(matches!(result, Err(GatekeeperError::Io { .. })));
}
