//! Integration tests for the pipeline

#[cfg(test)]
mod tests {
    use crate::extractors::fixtures::Corpus;
    use crate::{ExtractorError, ExtractorRegistry, Pipeline, PipelineConfig};
    use serde_json::{json, Value};
    use std::fs;
    use tempfile::TempDir;
    use vasari_domain::{is_semver, slugify, IntelligenceBundle, Severity, TargetDomain};

    fn rich_corpus() -> Corpus {
        Corpus::empty()
            .with(
                "token-rules.json",
                json!({
                    "forbidden": [{"pattern": "inline-hex-color", "reason": "breaks theming", "severity": "error"}],
                    "stylingRules": {"prefer": "Tailwind utilities", "avoidImportant": "always"},
                    "recommendations": {"bg-white": "bg-background"}
                }),
            )
            .with(
                "design-foundations.json",
                json!({
                    "typography": {"goldenRules": ["Max two typefaces"], "forbidden": ["text-[13px]"]},
                    "spacing": {"forbidden": ["p-[13px]"]},
                    "validation": {"accessibilityViolations": [
                        {"issue": "Missing alt text", "fix": "Add alt", "pattern": "<img", "severity": "critical"}
                    ]}
                }),
            )
            .with(
                "ux-laws.json",
                json!({"coreLaws": [{"name": "Cognitive Load", "rule": "Less is more", "application": "Forms"}]}),
            )
            .with(
                "workflow-patterns.json",
                json!({"storybook": {"forbidden": ["Hard-coded data"]}}),
            )
            .with(
                "color-intelligence.json",
                json!({"forbidden": [{"pattern": "pure-black", "reason": "Too harsh"}]}),
            )
    }

    fn run(corpus: &Corpus, output: &TempDir) -> crate::RunSummary {
        let config = PipelineConfig::new(corpus.dir.path(), output.path());
        Pipeline::new(ExtractorRegistry::standard(), config).run().unwrap()
    }

    fn read_bundle(output: &TempDir, domain: TargetDomain) -> IntelligenceBundle {
        let raw = fs::read_to_string(output.path().join(domain.bundle_file_name())).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_forbidden_hex_color_end_to_end() {
        let corpus = Corpus::empty().with(
            "token-rules.json",
            json!({"forbidden": [{"pattern": "inline-hex-color", "reason": "breaks theming", "severity": "error"}]}),
        );
        let output = TempDir::new().unwrap();

        let summary = run(&corpus, &output);
        assert_eq!(summary.domain_count(), 8);
        assert_eq!(summary.total_entries(), 1);

        let raw = fs::read_to_string(output.path().join("design-tokens.json")).unwrap();
        let bundle: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(bundle["domain"], "design-tokens");
        assert_eq!(bundle["version"], "1.0.0");
        assert_eq!(bundle["entries"].as_array().unwrap().len(), 1);

        let entry = &bundle["entries"][0];
        assert_eq!(entry["id"], "design-tokens-forbidden-inline-hex-color");
        assert_eq!(entry["type"], "rule");
        assert_eq!(entry["severity"], "critical");
        assert_eq!(entry["description"], "breaks theming");
    }

    #[test]
    fn test_empty_documents_yield_empty_bundles() {
        let corpus = Corpus::empty();
        let output = TempDir::new().unwrap();

        let summary = run(&corpus, &output);
        assert_eq!(summary.total_entries(), 0);

        for domain in TargetDomain::ALL {
            let bundle = read_bundle(&output, domain);
            assert_eq!(bundle.domain, domain);
            assert!(bundle.is_empty());
        }
    }

    #[test]
    fn test_runs_are_byte_identical() {
        let corpus = rich_corpus();
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        run(&corpus, &first);
        run(&corpus, &second);

        for domain in TargetDomain::ALL {
            let name = domain.bundle_file_name();
            let a = fs::read(first.path().join(&name)).unwrap();
            let b = fs::read(second.path().join(&name)).unwrap();
            assert_eq!(a, b, "{} differs between runs", name);
        }
    }

    #[test]
    fn test_rerun_overwrites_previous_bundles() {
        let output = TempDir::new().unwrap();
        run(&rich_corpus(), &output);
        assert!(!read_bundle(&output, TargetDomain::DesignTokens).is_empty());

        run(&Corpus::empty(), &output);
        assert!(read_bundle(&output, TargetDomain::DesignTokens).is_empty());
    }

    #[test]
    fn test_missing_document_fails_fast_and_keeps_earlier_bundles() {
        let corpus = Corpus::empty();
        fs::remove_file(corpus.dir.path().join("workflow-patterns.json")).unwrap();
        let output = TempDir::new().unwrap();

        let config = PipelineConfig::new(corpus.dir.path(), output.path());
        let err = Pipeline::new(ExtractorRegistry::standard(), config)
            .run()
            .unwrap_err();

        assert!(matches!(
            err,
            ExtractorError::MissingDocument { ref name, .. } if name == "workflow-patterns.json"
        ));
        assert!(output.path().join("design-tokens.json").exists());
        assert!(output.path().join("components.json").exists());
        assert!(!output.path().join("storybook.json").exists());
        assert!(!output.path().join("accessibility.json").exists());
    }

    #[test]
    fn test_invalid_document_is_fatal() {
        let corpus = Corpus::empty();
        fs::write(corpus.dir.path().join("guidance.json"), "[1, 2,").unwrap();
        let output = TempDir::new().unwrap();

        let config = PipelineConfig::new(corpus.dir.path(), output.path());
        let err = Pipeline::new(ExtractorRegistry::standard(), config)
            .run()
            .unwrap_err();
        assert!(matches!(err, ExtractorError::InvalidDocument { .. }));
    }

    #[test]
    fn test_unregistered_domain() {
        let corpus = Corpus::empty();
        let output = TempDir::new().unwrap();
        let config = PipelineConfig::new(corpus.dir.path(), output.path());

        let err = Pipeline::new(ExtractorRegistry::new(), config).run().unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::UnregisteredDomain(TargetDomain::DesignTokens)
        ));
    }

    #[test]
    fn test_invalid_version_rejected_before_writing() {
        let corpus = Corpus::empty();
        let output = TempDir::new().unwrap();
        let target = output.path().join("out");
        let config = PipelineConfig::new(corpus.dir.path(), &target).with_version("latest");

        let err = Pipeline::new(ExtractorRegistry::standard(), config)
            .run()
            .unwrap_err();
        assert!(matches!(err, ExtractorError::Config(_)));
        assert!(!target.exists());
    }

    #[test]
    fn test_custom_version_and_nested_output_dir() {
        let corpus = Corpus::empty();
        let output = TempDir::new().unwrap();
        let target = output.path().join("nested").join("bundles");
        let config = PipelineConfig::new(corpus.dir.path(), &target).with_version("2.3.4");

        Pipeline::new(ExtractorRegistry::standard(), config).run().unwrap();

        let raw = fs::read_to_string(target.join("spacing.json")).unwrap();
        let bundle: IntelligenceBundle = serde_json::from_str(&raw).unwrap();
        assert_eq!(bundle.version, "2.3.4");
    }

    #[test]
    fn test_entries_satisfy_invariants() {
        let corpus = rich_corpus();
        let output = TempDir::new().unwrap();
        run(&corpus, &output);

        for domain in TargetDomain::ALL {
            let bundle = read_bundle(&output, domain);
            assert!(is_semver(&bundle.version));
            for entry in &bundle.entries {
                assert_eq!(entry.domain, domain);
                assert!(entry.id.starts_with(domain.as_str()));
                assert_eq!(slugify(&entry.id), entry.id);
                assert!(!entry.title.trim().is_empty());
                assert!(!entry.description.trim().is_empty());
                assert!(entry.tags.iter().all(|t| !t.trim().is_empty()));
            }
        }
    }

    #[test]
    fn test_shared_document_feeds_several_domains() {
        let corpus = rich_corpus();
        let output = TempDir::new().unwrap();
        run(&corpus, &output);

        let typography = read_bundle(&output, TargetDomain::Typography);
        let spacing = read_bundle(&output, TargetDomain::Spacing);
        let accessibility = read_bundle(&output, TargetDomain::Accessibility);

        assert_eq!(typography.len(), 2);
        assert_eq!(spacing.len(), 1);
        assert_eq!(accessibility.entries[0].id, "accessibility-violation-missing-alt-text");
        assert_eq!(accessibility.entries[0].severity, Severity::Critical);
        assert_eq!(accessibility.entries[1].id, "accessibility-cognitive-load");
    }

    #[test]
    fn test_extract_domain_does_not_write() {
        let corpus = rich_corpus();
        let output = TempDir::new().unwrap();
        let config = PipelineConfig::new(corpus.dir.path(), output.path().join("unused"));
        let pipeline = Pipeline::new(ExtractorRegistry::standard(), config);

        let entries = pipeline.extract_domain(TargetDomain::ColorSystem).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "color-system-forbidden-pure-black");
        assert!(!output.path().join("unused").exists());
    }
}
