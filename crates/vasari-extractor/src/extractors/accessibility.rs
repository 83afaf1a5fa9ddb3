//! Accessibility violations, required patterns, keyboard and screen reader
//! guidance, plus the accessibility reading of two UX laws

use crate::document::{Node, SourceCorpus};
use crate::error::Result;
use vasari_domain::{map_severity, EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &[
    "design-foundations.json",
    "component-usage-patterns.json",
    "ux-laws.json",
];

/// Extract accessibility entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    let foundations = corpus.load("design-foundations.json")?;
    let validation = foundations.root().get("validation");

    for v in validation.get("accessibilityViolations").items() {
        let issue = v.get("issue").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("violation-{}", issue),
                issue,
                map_severity(v.get("severity").str()),
                v.get("fix").text(),
            )
            .with_context(format!("Pattern: {}", v.get("pattern").text()))
            .with_tags(["accessibility", "validation", "violation"]),
        );
    }

    for p in validation.get("requiredPatterns").items() {
        let context = p.get("context").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("required-{}-{}", context, p.get("pattern").text()),
                format!("Required: {}", p.get("issue").text()),
                map_severity(p.get("severity").str()),
                p.get("fix").text(),
            )
            .with_context(format!("Context: {}", context))
            .with_applies_to(p.get("appliesTo").strings())
            .with_tags(["accessibility".to_string(), "required-patterns".into(), context]),
        );
    }

    let usage = corpus.load("component-usage-patterns.json")?;
    let a11y = usage.root().get("accessibility");

    for rule in a11y.get("keyboardNavigation").items() {
        let text = rule.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("keyboard-{}", text),
                format!("Keyboard: {}", text),
                Severity::Critical,
                text,
            )
            .with_tags(["accessibility", "keyboard", "navigation"]),
        );
    }

    for rule in a11y.get("screenReaders").items() {
        let text = rule.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("screenreader-{}", text),
                format!("Screen reader: {}", text),
                Severity::Critical,
                text,
            )
            .with_tags(["accessibility", "screen-reader", "aria"]),
        );
    }

    for rule in a11y.get("colorContrast").items() {
        let text = rule.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("contrast-{}", text),
                format!("Color contrast: {}", text),
                Severity::Critical,
                text,
            )
            .with_tags(["accessibility", "color", "contrast", "wcag"]),
        );
    }

    let ux_laws = corpus.load("ux-laws.json")?;
    let laws = ux_laws.root().get("coreLaws");

    if let Some(fitts) = find_law(laws, "Fitts's Law") {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "fitts-law-touch-targets",
                "Fitts's Law: minimum touch target size",
                Severity::Critical,
                format!(
                    "{}. Application: {}",
                    fitts.get("rule").text(),
                    fitts.get("application").text()
                ),
            )
            .with_example(fitts.get("tokens").join(", "))
            .with_counter_example(fitts.get("violations").join(", "))
            .with_tags(["accessibility", "touch-target", "fitts-law", "mobile"]),
        );
    }

    if let Some(load) = find_law(laws, "Cognitive Load") {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "cognitive-load",
                "Cognitive Load: reduce unnecessary mental burden",
                Severity::Warning,
                format!(
                    "{}. Application: {}",
                    load.get("rule").text(),
                    load.get("application").text()
                ),
            )
            .with_counter_example(load.get("violations").join(", "))
            .with_tags(["accessibility", "cognitive-load", "usability"]),
        );
    }

    Ok(entries)
}

/// First law with an exact name match
fn find_law<'a>(laws: Node<'a>, name: &str) -> Option<Node<'a>> {
    laws.items().find(|l| l.get("name").str() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fixtures::Corpus;
    use serde_json::json;

    #[test]
    fn test_fitts_law_touch_targets() {
        let fixture = Corpus::empty().with(
            "ux-laws.json",
            json!({"coreLaws": [
                {"name": "Hick's Law", "rule": "Fewer choices"},
                {"name": "Fitts's Law", "rule": "Targets >= 44px", "application": "Buttons",
                 "tokens": ["h-11", "min-w-11"], "violations": ["h-6 icon buttons"]}
            ]}),
        );

        let entries = extract(TargetDomain::Accessibility, &fixture.corpus()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "accessibility-fitts-law-touch-targets");
        assert_eq!(entries[0].severity, Severity::Critical);
        assert_eq!(entries[0].description, "Targets >= 44px. Application: Buttons");
        assert_eq!(entries[0].example.as_deref(), Some("h-11, min-w-11"));
    }

    #[test]
    fn test_required_patterns_carry_applies_to() {
        let fixture = Corpus::empty().with(
            "design-foundations.json",
            json!({"validation": {"requiredPatterns": [
                {"context": "forms", "pattern": "label", "issue": "Inputs need labels", "fix": "Add <Label>",
                 "severity": "error", "appliesTo": ["Input", "Select"]}
            ]}}),
        );

        let entries = extract(TargetDomain::Accessibility, &fixture.corpus()).unwrap();
        assert_eq!(entries[0].id, "accessibility-required-forms-label");
        assert_eq!(entries[0].severity, Severity::Critical);
        assert_eq!(entries[0].applies_to, Some(vec!["Input".to_string(), "Select".to_string()]));
        assert_eq!(entries[0].tags, vec!["accessibility", "required-patterns", "forms"]);
    }

    #[test]
    fn test_usage_guidance_lists() {
        let fixture = Corpus::empty().with(
            "component-usage-patterns.json",
            json!({"accessibility": {
                "keyboardNavigation": ["Tab reaches every control"],
                "colorContrast": ["4.5:1 for body text"]
            }}),
        );

        let entries = extract(TargetDomain::Accessibility, &fixture.corpus()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry_type, EntryType::Pattern);
        assert_eq!(entries[1].id, "accessibility-contrast-4-5-1-for-body-text");
        assert_eq!(entries[1].entry_type, EntryType::Rule);
    }
}
