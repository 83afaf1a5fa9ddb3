//! Color contexts, harmony principles, depth layering and dark mode

use super::pairs;
use crate::document::SourceCorpus;
use crate::error::Result;
use vasari_domain::{EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &[
    "color-intelligence.json",
    "design-advanced.json",
    "design-enhancements.json",
];

/// Extract color-system entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    let colors = corpus.load("color-intelligence.json")?;
    let colors = colors.root();

    for (name, d) in colors.get("contexts").fields() {
        let mut details = Vec::new();
        if d.get("description").is_truthy() {
            details.push(d.get("description").text());
        }
        let solid = d.get("solid");
        if solid.is_truthy() {
            details.push(format!(
                "Light: {}, Dark: {}",
                solid.get("light").get("bg").or(d.get("light").get("bg")).text_or("N/A"),
                solid.get("dark").get("bg").or(d.get("dark").get("bg")).text_or("N/A")
            ));
        }
        if d.get("light").is_truthy() && !solid.is_truthy() {
            details.push(format!("Light: {}", d.get("light").get("bg").text()));
        }
        let variants = d.get("variants");
        if variants.is_truthy() {
            let names = variants.fields().map(|(k, _)| k).collect::<Vec<_>>().join(", ");
            details.push(format!("Variants: {}", names));
        }

        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("context-{}", name),
                format!("Color context: {}", name),
                Severity::Suggestion,
                details.join(". "),
            )
            .with_tags(["color-system", "context", name]),
        );
    }

    for (key, d) in colors.get("harmony_principles").fields() {
        if key == "_note" {
            continue;
        }
        let description = if d.get("formula").is_truthy() {
            d.get("formula").text()
        } else {
            d.get("rule").text()
        };
        let example = d.get("example");
        let good = if example.get("good").is_truthy() {
            format!("Good: {}", example.get("good").text())
        } else {
            d.get("use").text()
        };
        let mut entry = IntelligenceEntry::new(
            domain,
            EntryType::Rule,
            format!("harmony-{}", key),
            format!("Color harmony: {}", d.get("rule").text()),
            Severity::Critical,
            description,
        )
        .with_why(d.get("why").text())
        .with_example(good)
        .with_tags(["color-system", "harmony", "contrast"]);
        if example.get("bad").is_truthy() {
            entry = entry.with_counter_example(format!("Bad: {}", example.get("bad").text()));
        }
        entries.push(entry);
    }

    for f in colors.get("forbidden").items() {
        let pattern = f.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("forbidden-{}", pattern),
                format!("Color forbidden: {}", pattern),
                Severity::Critical,
                f.get("reason").text(),
            )
            .with_example(f.get("examples").join(", "))
            .with_tags(["color-system", "forbidden"]),
        );
    }

    let advanced = corpus.load("design-advanced.json")?;
    let depth = advanced.root().get("depthLayering");

    for layer in depth.get("layers").items() {
        let name = layer.get("name").text();
        let light = layer.get("light");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("depth-layer-{}", name),
                format!("Depth layer: {} (depth {})", name, layer.get("depth").text()),
                Severity::Suggestion,
                format!("Use: {}. Token: {}", layer.get("use").text(), layer.get("token").text()),
            )
            .with_example(format!(
                "Shadow: {}. Light: {}",
                layer.get("shadow").text_or("none"),
                light.get("name").or(light.get("color")).text_or("N/A")
            ))
            .with_tags(["color-system", "depth", "layering"]),
        );
    }

    for ap in depth.get("antiPatterns").items() {
        let pattern = ap.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("depth-antipattern-{}", pattern),
                format!("Depth anti-pattern: {}", pattern),
                Severity::Warning,
                format!("{}. Fix: {}", ap.get("why").text(), ap.get("fix").text()),
            )
            .with_tags(["color-system", "depth", "anti-pattern"]),
        );
    }

    let enhancements = corpus.load("design-enhancements.json")?;
    let dark = enhancements.root().get("darkMode");

    let formula = dark.get("formula");
    if formula.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "dark-mode-formula",
                format!("Dark mode formula: {}", formula.text()),
                Severity::Critical,
                format!("Shade mapping: {}", pairs(dark.get("mapping"), " ↔ ", ", ")),
            )
            .with_tags(["color-system", "dark-mode", "formula"]),
        );
    }

    let semantic = dark.get("semanticTokens");
    if semantic.is_truthy() {
        let summary = semantic
            .fields()
            .map(|(category, tokens)| {
                let list = tokens
                    .fields()
                    .map(|(name, vals)| {
                        format!(
                            "{}: light={}, dark={}",
                            name,
                            vals.get("light").text(),
                            vals.get("dark").text()
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("{}: {}", category, list)
            })
            .collect::<Vec<_>>()
            .join(" | ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "dark-mode-semantic-tokens",
                "Dark mode semantic tokens",
                Severity::Suggestion,
                summary,
            )
            .with_tags(["color-system", "dark-mode", "semantic-tokens"]),
        );
    }

    let anti = dark.get("antiPattern");
    if anti.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                "dark-mode-antipattern",
                format!("Dark mode anti-pattern: {}", anti.text()),
                Severity::Critical,
                anti.text(),
            )
            .with_tags(["color-system", "dark-mode", "anti-pattern"]),
        );
    }

    Ok(entries)
}
