//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vasari_domain::TargetDomain;
use vasari_extractor::RunSummary;
use vasari_gatekeeper::ValidationReport;

/// One row of the source document table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceStatus {
    /// Document file name
    pub document: String,
    /// Domains reading it, in pipeline order
    pub domains: Vec<TargetDomain>,
    /// Whether it exists under the corpus root
    pub present: bool,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the outcome of a conversion run.
    pub fn format_conversion(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let domains: Vec<serde_json::Value> = summary
                    .domains
                    .iter()
                    .map(|d| {
                        serde_json::json!({
                            "domain": d.domain,
                            "entries": d.entries,
                            "path": d.path.display().to_string(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "domains": domains,
                    "totalEntries": summary.total_entries(),
                }))?)
            }
            OutputFormat::Text => {
                let mut lines: Vec<String> = summary
                    .domains
                    .iter()
                    .map(|d| format!("{}: {} entries → {}", d.domain, d.entries, d.path.display()))
                    .collect();
                lines.push(String::new());
                lines.push(format!(
                    "Total: {} entries across {} domains",
                    summary.total_entries(),
                    summary.domain_count()
                ));
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a validation report.
    pub fn format_report(&self, report: &ValidationReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => Ok(self.format_report_text(report)),
        }
    }

    fn format_report_text(&self, report: &ValidationReport) -> String {
        let mut lines = Vec::new();
        for verdict in &report.bundles {
            let status = if verdict.is_pass() {
                self.colorize("PASS", Color::Green)
            } else {
                self.colorize("FAIL", Color::Red)
            };
            lines.push(format!(
                "{}  {}: {} entries, {} issues",
                status,
                verdict.file,
                verdict.entries,
                verdict.issues.len()
            ));
            lines.extend(verdict.issues.iter().map(|issue| format!("  {}", issue)));
        }

        let summary = &report.summary;
        lines.push(String::new());
        lines.push("--- Summary ---".to_string());
        lines.push(format!("Bundles: {}", summary.bundles));
        lines.push(format!("Total entries: {}", summary.total_entries));
        lines.push(format!("Total issues: {}", summary.total_issues));
        lines.push(format!("Unique IDs: {}", summary.unique_ids));
        if !summary.cross_bundle_duplicates.is_empty() {
            lines.push(format!(
                "Cross-bundle duplicate IDs: {}",
                summary.cross_bundle_duplicates.join(", ")
            ));
        }

        let result = if report.is_pass() {
            self.colorize("ALL PASS", Color::Green)
        } else {
            self.colorize("ISSUES FOUND", Color::Red)
        };
        lines.push(String::new());
        lines.push(format!("Result: {}", result));
        lines.join("\n")
    }

    /// Format the source document table.
    pub fn format_sources(&self, root: &Path, sources: &[SourceStatus]) -> Result<String> {
        if let OutputFormat::Json = self.format {
            return Ok(serde_json::to_string_pretty(&serde_json::json!({
                "root": root.display().to_string(),
                "documents": sources,
            }))?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Document", "Domains", "Present"]);
        for source in sources {
            let domains: Vec<&str> = source.domains.iter().map(|d| d.as_str()).collect();
            let domains = domains.join(", ");
            builder.push_record([
                source.document.as_str(),
                domains.as_str(),
                if source.present { "yes" } else { "no" },
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let present = sources.iter().filter(|s| s.present).count();
        let footer = format!(
            "{}/{} documents present under {}",
            present,
            sources.len(),
            root.display()
        );
        let footer = if present == sources.len() {
            self.success(&footer)
        } else {
            self.warning(&footer)
        };
        Ok(format!("{}\n{}", table, footer))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use vasari_extractor::DomainOutcome;
    use vasari_gatekeeper::BundleValidator;

    fn summary() -> RunSummary {
        RunSummary {
            domains: vec![
                DomainOutcome {
                    domain: TargetDomain::DesignTokens,
                    entries: 2,
                    path: PathBuf::from("bundles/design-tokens.json"),
                },
                DomainOutcome {
                    domain: TargetDomain::Components,
                    entries: 0,
                    path: PathBuf::from("bundles/components.json"),
                },
            ],
        }
    }

    fn bundle(domain: &str, ids: &[&str]) -> serde_json::Value {
        let entries: Vec<serde_json::Value> = ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "domain": domain,
                    "type": "rule",
                    "key": id,
                    "title": "Title",
                    "severity": "warning",
                    "description": "Description",
                    "tags": []
                })
            })
            .collect();
        json!({"domain": domain, "version": "1.0.0", "entries": entries})
    }

    #[test]
    fn test_conversion_text() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_conversion(&summary()).unwrap();
        assert_eq!(
            output,
            "design-tokens: 2 entries → bundles/design-tokens.json\n\
             components: 0 entries → bundles/components.json\n\
             \n\
             Total: 2 entries across 2 domains"
        );
    }

    #[test]
    fn test_conversion_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_conversion(&summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["totalEntries"], 2);
        assert_eq!(value["domains"][0]["domain"], "design-tokens");
    }

    #[test]
    fn test_report_text_pass() {
        let report = BundleValidator::default_config().validate_values([(
            "spacing.json".to_string(),
            bundle("spacing", &["spacing-a"]),
        )]);
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_report(&report).unwrap();

        assert!(output.starts_with("PASS  spacing.json: 1 entries, 0 issues\n"));
        assert!(output.contains("Unique IDs: 1"));
        assert!(!output.contains("Cross-bundle"));
        assert!(output.ends_with("\nResult: ALL PASS"));
    }

    #[test]
    fn test_report_text_cross_bundle_duplicate() {
        let report = BundleValidator::default_config().validate_values([
            ("a.json".to_string(), bundle("spacing", &["shared"])),
            ("b.json".to_string(), bundle("spacing", &["shared"])),
        ]);
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_report(&report).unwrap();

        assert!(output.contains("FAIL  b.json: 1 entries, 1 issues\n  [0] shared: "));
        assert!(output.contains("Cross-bundle duplicate IDs: shared"));
        assert!(output.ends_with("Result: ISSUES FOUND"));
    }

    #[test]
    fn test_report_text_empty_layout() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let output = formatter.format_report(&ValidationReport::default()).unwrap();
        assert_eq!(
            output,
            "\n--- Summary ---\nBundles: 0\nTotal entries: 0\nTotal issues: 0\nUnique IDs: 0\n\nResult: ALL PASS"
        );
    }

    #[test]
    fn test_report_json() {
        let report = ValidationReport::default();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let value: serde_json::Value =
            serde_json::from_str(&formatter.format_report(&report).unwrap()).unwrap();
        assert_eq!(value["summary"]["bundles"], 0);
    }

    #[test]
    fn test_sources_table() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let sources = vec![SourceStatus {
            document: "ux-laws.json".to_string(),
            domains: vec![TargetDomain::Accessibility, TargetDomain::UxPatterns],
            present: false,
        }];
        let output = formatter
            .format_sources(&PathBuf::from("/data"), &sources)
            .unwrap();

        assert!(output.contains("Document"));
        assert!(output.contains("accessibility, ux-patterns"));
        assert!(output.ends_with("⚠ 0/1 documents present under /data"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}
