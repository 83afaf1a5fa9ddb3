//! Token usage rules, selection priority and per-component token guidance

use super::pairs;
use crate::document::{Node, SourceCorpus};
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;
use vasari_domain::{map_severity, EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &["token-rules.json", "design-foundations.json", "guidance.json"];

static TOKEN_RELATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)color|hex|rgb|hsl|bg-|text-|#[0-9]").expect("token pattern is a valid regex")
});

/// Extract design-token entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    let token_rules = corpus.load("token-rules.json")?;
    let rules = token_rules.root();

    for f in rules.get("forbidden").items() {
        let pattern = f.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("forbidden-{}", pattern),
                format!("Forbidden: {}", pattern),
                map_severity(f.get("severity").str()),
                f.get("reason").text(),
            )
            .with_context("Token usage validation")
            .with_tags(["tokens", "forbidden", "validation"]),
        );
    }

    let selection = rules.get("tokenSelectionPriority");
    for p in selection.get("priority").items() {
        let rank = p.get("rank").text();
        let kind = p.get("type").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("priority-rank-{}-{}", rank, kind),
                format!("Token Priority {}: {}", rank, kind),
                Severity::Critical,
                format!("{}. Examples: {}", p.get("when").text(), p.get("examples").join(", ")),
            )
            .with_context(selection.get("rule").text())
            .with_why(selection.get("whySemantic").join("; "))
            .with_tags(["tokens".to_string(), "priority".into(), "semantic".into(), kind.to_lowercase()]),
        );
    }

    let styling = rules.get("stylingRules");
    if styling.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "styling-prefer-tailwind",
                "Prefer Tailwind classes over inline styles",
                Severity::Warning,
                styling.get("prefer").text(),
            )
            .with_context(format!("Avoid !important: {}", styling.get("avoidImportant").text()))
            .with_tags(["tokens", "styling", "tailwind"]),
        );
    }

    let recommendations = rules.get("recommendations");
    if recommendations.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "recommendations-map",
                "Token replacement recommendations",
                Severity::Suggestion,
                format!("Common color-to-token mappings: {}", pairs(recommendations, " → ", ", ")),
            )
            .with_tags(["tokens", "migration", "recommendations"]),
        );
    }

    let foundations = corpus.load("design-foundations.json")?;
    for v in foundations.root().get("validation").get("commonViolations").items() {
        if !is_token_related(v) {
            continue;
        }
        let auto_fix = v.get("autoFix");
        let mut entry = IntelligenceEntry::new(
            domain,
            EntryType::Rule,
            format!("violation-{}", v.get("pattern").text()),
            v.get("issue").text(),
            map_severity(v.get("severity").str()),
            v.get("fix").text(),
        )
        .with_tags(["tokens", "validation", "violation"]);
        if auto_fix.is_truthy() {
            entry = entry.with_example(format!(
                "Auto-fix: {} → {}",
                auto_fix.get("find").text(),
                auto_fix.get("replace").text()
            ));
        }
        entries.push(entry);
    }

    let guidance = corpus.load("guidance.json")?;
    for (component, variants) in guidance.root().fields() {
        let token_list = variants
            .fields()
            .map(|(variant, tokens)| format!("{}: {}", variant, pairs(tokens, ": ", ", ")))
            .collect::<Vec<_>>()
            .join("; ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("guidance-{}", component),
                format!("Token guidance: {}", component),
                Severity::Suggestion,
                format!("Recommended tokens for {} component: {}", component, token_list),
            )
            .with_tags(["tokens", "guidance", component]),
        );
    }

    Ok(entries)
}

fn is_token_related(violation: Node<'_>) -> bool {
    [violation.get("pattern"), violation.get("issue")]
        .iter()
        .any(|n| TOKEN_RELATED.is_match(&n.text()))
}
