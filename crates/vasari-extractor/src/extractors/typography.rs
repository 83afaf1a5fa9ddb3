//! Type scale, typography rules, font requirements and icon sizing

use crate::document::SourceCorpus;
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;
use vasari_domain::{EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &["design-foundations.json", "design-enhancements.json"];

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Extract typography entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    let foundations = corpus.load("design-foundations.json")?;
    let foundations = foundations.root();
    let typo = foundations.get("typography");

    for s in typo.get("scale").items() {
        let role = s.get("role").text();
        let role_tag = WHITESPACE.replace_all(&role.to_lowercase(), "-").into_owned();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("scale-{}", role),
                format!("Type scale: {}", role),
                Severity::Suggestion,
                format!(
                    "{}. Size: {}, weight: {}",
                    s.get("use").text(),
                    s.get("size").text(),
                    s.get("weight").text()
                ),
            )
            .with_example(format!("Tailwind: {}", s.get("tailwind").text()))
            .with_tags(["typography".to_string(), "scale".into(), role_tag]),
        );
    }

    for rule in typo.get("goldenRules").items() {
        let text = rule.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("golden-rule-{}", text),
                format!("Typography rule: {}", text),
                Severity::Warning,
                text,
            )
            .with_tags(["typography", "golden-rules"]),
        );
    }

    for f in typo.get("forbidden").items() {
        let text = f.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("forbidden-{}", text),
                format!("Typography forbidden: {}", text),
                Severity::Critical,
                text,
            )
            .with_tags(["typography", "forbidden"]),
        );
    }

    let fonts = foundations.get("fontRequirements");
    if fonts.is_truthy() {
        let formats = fonts
            .get("formats")
            .fields()
            .map(|(format, data)| {
                let required = if data.get("required").is_truthy() { " (required)" } else { "" };
                format!("{}: priority {}{}", format, data.get("priority").text(), required)
            })
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "font-formats",
                "Font format requirements",
                Severity::Warning,
                format!(
                    "Required formats: {}. Preference: {}",
                    formats,
                    fonts.get("formatPreference").join(" > ")
                ),
            )
            .with_tags(["typography", "fonts", "formats"]),
        );

        let minimum = fonts.get("minimumWeights").join(", ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "font-minimum-weights",
                format!("Font minimum weights: {}", minimum),
                Severity::Warning,
                format!(
                    "Minimum weights: {}. Recommended: {}",
                    minimum,
                    fonts.get("recommendedWeights").join(", ")
                ),
            )
            .with_tags(["typography", "fonts", "weights"]),
        );
    }

    let enhancements = corpus.load("design-enhancements.json")?;
    let icons = enhancements.root().get("iconography");

    for size in icons.get("sizes").items() {
        let name = size.get("name").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("icon-size-{}", name),
                format!("Icon size: {} ({}px)", name, size.get("px").text()),
                Severity::Suggestion,
                format!("Use: {}", size.get("use").text()),
            )
            .with_tags(["typography", "iconography", "sizes"]),
        );
    }

    let forbidden = icons.get("forbidden");
    if forbidden.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                "icon-forbidden-emojis",
                format!("Icons forbidden: {}", forbidden.text()),
                Severity::Critical,
                format!(
                    "{}. Use {} instead.",
                    icons.get("rule").text(),
                    icons.get("library").text()
                ),
            )
            .with_tags(["typography", "iconography", "forbidden", "emojis"]),
        );
    }

    Ok(entries)
}
