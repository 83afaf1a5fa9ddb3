//! Spacing system, layout anti-patterns and border radius

use crate::document::SourceCorpus;
use crate::error::Result;
use vasari_domain::{map_severity, EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &["design-foundations.json", "design-advanced.json"];

/// Extract spacing entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    let foundations = corpus.load("design-foundations.json")?;
    let sp = foundations.root().get("spacing");

    let layers = sp.get("layers");
    if layers.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "two-layer-system",
                "Two-layer spacing system: precision (4pt) + rhythm (8pt)",
                Severity::Critical,
                layers.get("description").text(),
            )
            .with_example(format!(
                "Precision: {}. Rhythm: {}",
                layers.get("precision").get("role").text(),
                layers.get("rhythm").get("role").text()
            ))
            .with_tags(["spacing", "layers", "system", "4pt", "8pt"]),
        );
    }

    for t in sp.get("tokens").items() {
        let name = t.get("name").text();
        let layer = t.get("layer").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("token-{}", name),
                format!("Spacing token: {} ({}px)", name, t.get("px").text()),
                Severity::Suggestion,
                format!("Use: {}. Layer: {}", t.get("use").text(), layer),
            )
            .with_example(format!("Tailwind: {}", t.get("tailwind").text()))
            .with_tags(["spacing".to_string(), "tokens".into(), layer]),
        );
    }

    for f in sp.get("forbidden").items() {
        let text = f.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("forbidden-{}", text),
                format!("Spacing forbidden: {}", text),
                Severity::Critical,
                text,
            )
            .with_tags(["spacing", "forbidden"]),
        );
    }

    for (name, data) in sp.get("layoutAntiPatterns").fields() {
        let severity = data.get("severity");
        let severity = if severity.is_present() {
            map_severity(severity.str())
        } else {
            Severity::Warning
        };
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("layout-antipattern-{}", name),
                format!("Layout anti-pattern: {}", name),
                severity,
                data.get("description").text(),
            )
            .with_why(data.get("rule").text())
            .with_counter_example(data.get("fix").text())
            .with_tags(["spacing", "layout", "anti-pattern"]),
        );
    }

    let principles = sp.get("principles");
    for rule in principles.get("rules").items() {
        let text = rule.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("principle-{}", text),
                format!("Spacing principle: {}", text),
                Severity::Warning,
                text,
            )
            .with_context(principles.get("corePhilosophy").text())
            .with_tags(["spacing", "principles", "white-space"]),
        );
    }

    let advanced = corpus.load("design-advanced.json")?;
    let radius = advanced.root().get("borderRadius");

    for t in radius.get("tokens").items() {
        let name = t.get("name").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("border-radius-{}", name),
                format!("Border radius: {} ({}px)", name, t.get("px").text()),
                Severity::Suggestion,
                format!("Use: {}", t.get("use").text()),
            )
            .with_example(format!("Tailwind: {}", t.get("tailwind").text()))
            .with_tags(["spacing", "border-radius", "tokens"]),
        );
    }

    let nested = radius.get("nestedFormula");
    if nested.is_truthy() {
        let rule = nested.get("rule").text();
        let examples = nested
            .get("examples")
            .items()
            .map(|e| {
                format!(
                    "inner {} + padding {} = outer {}",
                    e.get("inner").text(),
                    e.get("padding").text(),
                    e.get("outer").text()
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "nested-radius-formula",
                format!("Nested border radius: {}", rule),
                Severity::Warning,
                format!("{}. {}", rule, examples),
            )
            .with_tags(["spacing", "border-radius", "nested", "formula"]),
        );
    }

    Ok(entries)
}
