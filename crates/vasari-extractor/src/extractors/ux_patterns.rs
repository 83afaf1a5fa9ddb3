//! UX laws, Gestalt principles, defensive design, badges, dialogs, UX
//! writing, containers, error handling and response-time thresholds

use crate::document::SourceCorpus;
use crate::error::Result;
use vasari_domain::{slugify, EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &[
    "ux-laws.json",
    "defensive-design.json",
    "ui-patterns.json",
    "dialog-patterns.json",
    "ux-writing.json",
    "design-advanced.json",
    "performance-constraints.json",
];

/// Extract UX pattern entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    // ux-laws.json
    let laws = corpus.load("ux-laws.json")?;
    let laws = laws.root();

    for law in laws.get("coreLaws").items() {
        let name = law.get("name").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("law-{}", name),
                format!("UX Law: {}", name),
                Severity::Warning,
                format!(
                    "{}. Application: {}",
                    law.get("rule").text(),
                    law.get("application").text()
                ),
            )
            .with_example(law.get("tokens").join(", "))
            .with_counter_example(law.get("violations").join(", "))
            .with_tags(["ux-patterns".to_string(), "ux-laws".into(), slugify(&name)]),
        );
    }

    for g in laws.get("gestaltPrinciples").items() {
        let name = g.get("name").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("gestalt-{}", name),
                format!("Gestalt: {}", name),
                Severity::Suggestion,
                g.get("meaning").text(),
            )
            .with_example(g.get("tokens").join(", "))
            .with_tags(["ux-patterns".to_string(), "gestalt".into(), name.to_lowercase()]),
        );
    }

    let buttons = laws.get("buttonColorSemantics");
    if buttons.is_truthy() {
        let rules = buttons
            .get("rules")
            .fields()
            .map(|(variant, data)| {
                format!(
                    "{}: {} (not for: {})",
                    variant,
                    data.get("use").text(),
                    data.get("notFor").text()
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "button-color-semantics",
                "Button color semantics",
                Severity::Critical,
                format!("{}. {}", buttons.get("critical").text(), rules),
            )
            .with_why(buttons.get("rationale").join("; "))
            .with_tags(["ux-patterns", "buttons", "color", "semantics"]),
        );
    }

    let overflow = laws.get("actionOverflow");
    if overflow.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "action-overflow",
                "Action overflow rule",
                Severity::Warning,
                overflow.get("critical").text(),
            )
            .with_counter_example(overflow.get("violations").join("; "))
            .with_tags(["ux-patterns", "actions", "overflow", "hicks-law"]),
        );
    }

    // defensive-design.json
    let defensive = corpus.load("defensive-design.json")?;
    let defensive = defensive.root();

    for layer in defensive
        .get("validationLevel")
        .get("architecture")
        .get("layers")
        .items()
    {
        let name = layer.get("layer").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("validation-layer-{}", name),
                format!("Validation layer: {}", name),
                Severity::Suggestion,
                format!(
                    "{}. Has validation: {}. Action: {}",
                    layer.get("role").text(),
                    layer.get("hasValidation").text(),
                    layer.get("action").text()
                ),
            )
            .with_context(format!("Analogy: {}", layer.get("analogy").text()))
            .with_tags(["ux-patterns", "defensive-design", "validation"]),
        );
    }

    for level in defensive
        .get("dataError")
        .get("gracefulDegradationLevels")
        .items()
    {
        let name = level.get("level").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("degradation-{}", name),
                format!("Graceful degradation: {}", name),
                Severity::Suggestion,
                format!("{}. When: {}", level.get("behavior").text(), level.get("when").text()),
            )
            .with_tags(["ux-patterns", "defensive-design", "error-handling", "degradation"]),
        );
    }

    // ui-patterns.json
    let ui = corpus.load("ui-patterns.json")?;
    let ui = ui.root();

    for (status, d) in ui.get("statusBadges").get("statuses").fields() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("status-badge-{}", status),
                format!("Status badge: {}", d.get("name").text()),
                Severity::Suggestion,
                format!(
                    "{}. Color: {}. Icon: {}",
                    d.get("meaning").text(),
                    d.get("semanticColor").text(),
                    d.get("icon").text()
                ),
            )
            .with_tags(["ux-patterns", "status", "badges", status]),
        );
    }

    for (priority, d) in ui.get("priorityBadges").get("priorities").fields() {
        let animation = d.get("animation");
        let animation = if animation.is_truthy() {
            format!(". Animation: {}", animation.text())
        } else {
            String::new()
        };
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("priority-badge-{}", priority),
                format!("Priority badge: {}", d.get("name").text()),
                Severity::Suggestion,
                format!(
                    "Color: {}. Icon: {}{}",
                    d.get("semanticColor").text(),
                    d.get("icon").text(),
                    animation
                ),
            )
            .with_tags(["ux-patterns", "priority", "badges", priority]),
        );
    }

    // dialog-patterns.json
    let dialogs = corpus.load("dialog-patterns.json")?;
    let dialogs = dialogs.root();

    for s in dialogs.get("selectionByFieldCount").items() {
        let range = s.get("range").text();
        let recommended = s.get("recommendedPattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("container-selection-{}-fields", range),
                format!("Container selection: {} fields → {}", range, recommended),
                Severity::Warning,
                format!(
                    "Complexity: {}. Examples: {}",
                    s.get("complexity").text(),
                    s.get("examples").join(", ")
                ),
            )
            .with_tags([
                "ux-patterns".to_string(),
                "dialog".into(),
                "container-selection".into(),
                recommended,
            ]),
        );
    }

    for ap in dialogs.get("antiPatterns").items() {
        let practice = ap.get("badPractice").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("dialog-antipattern-{}", practice),
                format!("Dialog anti-pattern: {}", practice),
                Severity::Warning,
                format!(
                    "Problem: {}. Solution: {}",
                    ap.get("problem").text(),
                    ap.get("solution").text()
                ),
            )
            .with_tags(["ux-patterns", "dialog", "anti-pattern"]),
        );
    }

    // ux-writing.json
    let writing = corpus.load("ux-writing.json")?;
    let writing = writing.root();

    for (name, d) in writing.get("patterns").fields() {
        if !(d.get("do").is_truthy() && d.get("examples").is_truthy()) {
            continue;
        }
        let title = d.get("title");
        let title = if title.is_truthy() { title.text() } else { name.to_string() };
        let examples = d.get("examples");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("ux-writing-{}", name),
                format!("UX writing: {}", title),
                Severity::Suggestion,
                d.get("do").join(". "),
            )
            .with_example(examples.get("good").join("; "))
            .with_counter_example(examples.get("bad").join("; "))
            .with_tags(["ux-patterns", "ux-writing", name]),
        );
    }

    for rule in writing.get("goldenRules").get("values").items() {
        let text = rule.get("rule").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("writing-rule-{}", text),
                format!("UX writing rule: {}", text),
                Severity::Warning,
                rule.get("description").text(),
            )
            .with_tags(["ux-patterns", "ux-writing", "golden-rules"]),
        );
    }

    // design-advanced.json
    let advanced = corpus.load("design-advanced.json")?;
    let advanced = advanced.root();

    for (name, d) in advanced.get("containerPatterns").get("patterns").fields() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("container-{}", name),
                format!("Container pattern: {}", name),
                Severity::Suggestion,
                format!(
                    "Use for: {}. Fields: {}. Complexity: {}",
                    d.get("useFor").join(", "),
                    d.get("fields").text_or("Variable"),
                    d.get("complexity").text()
                ),
            )
            .with_tags(["ux-patterns", "containers", name]),
        );
    }

    for (name, d) in advanced.get("errorHandling").get("patterns").fields() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("error-handling-{}", name),
                format!("Error handling: {}", name),
                Severity::Suggestion,
                format!("Use: {}. {}", d.get("use").text(), d.get("rule").text()),
            )
            .with_tags(["ux-patterns", "error-handling", name]),
        );
    }

    // performance-constraints.json
    let perf = corpus.load("performance-constraints.json")?;
    for t in perf.root().get("responseTime").get("thresholds").items() {
        let duration = t.get("duration").text();
        let severity = if duration.contains("400") || duration.contains("> 1") {
            Severity::Warning
        } else {
            Severity::Suggestion
        };
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("response-time-{}", duration),
                format!("Response time {}: {}", duration, t.get("perception").text()),
                severity,
                format!("Required feedback: {}", t.get("requiredFeedback").text()),
            )
            .with_tags(["ux-patterns", "performance", "response-time"]),
        );
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fixtures::Corpus;
    use serde_json::json;

    #[test]
    fn test_core_laws_become_patterns() {
        let fixture = Corpus::empty().with(
            "ux-laws.json",
            json!({"coreLaws": [{"name": "Fitts's Law", "rule": "Bigger is easier", "application": "CTAs",
                                 "tokens": ["h-11"], "violations": ["tiny links"]}]}),
        );

        let entries = extract(TargetDomain::UxPatterns, &fixture.corpus()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "ux-patterns-law-fitts-s-law");
        assert_eq!(entries[0].severity, Severity::Warning);
        assert_eq!(entries[0].tags, vec!["ux-patterns", "ux-laws", "fitts-s-law"]);
    }

    #[test]
    fn test_response_time_severity() {
        let fixture = Corpus::empty().with(
            "performance-constraints.json",
            json!({"responseTime": {"thresholds": [
                {"duration": "< 100ms", "perception": "Instant", "requiredFeedback": "None"},
                {"duration": "100-400ms", "perception": "Slight delay", "requiredFeedback": "Spinner"},
                {"duration": "> 10s", "perception": "Lost attention", "requiredFeedback": "Progress bar"}
            ]}}),
        );

        let entries = extract(TargetDomain::UxPatterns, &fixture.corpus()).unwrap();
        let severities: Vec<Severity> = entries.iter().map(|e| e.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Suggestion, Severity::Warning, Severity::Warning]
        );
        assert_eq!(entries[0].id, "ux-patterns-response-time-100ms");
    }

    #[test]
    fn test_ux_writing_requires_do_and_examples() {
        let fixture = Corpus::empty().with(
            "ux-writing.json",
            json!({"patterns": {
                "errors": {"title": "Error messages", "do": ["Say what happened", "Say how to fix it"],
                           "examples": {"good": ["Card declined"], "bad": ["Error 402"]}},
                "empty": {"do": ["Offer a next step"]}
            }}),
        );

        let entries = extract(TargetDomain::UxPatterns, &fixture.corpus()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "UX writing: Error messages");
        assert_eq!(entries[0].description, "Say what happened. Say how to fix it");
        assert_eq!(entries[0].counter_example.as_deref(), Some("Error 402"));
    }

    #[test]
    fn test_priority_badge_animation_is_optional() {
        let fixture = Corpus::empty().with(
            "ui-patterns.json",
            json!({"priorityBadges": {"priorities": {
                "urgent": {"name": "Urgent", "semanticColor": "destructive", "icon": "AlertTriangle", "animation": "pulse"},
                "low": {"name": "Low", "semanticColor": "muted", "icon": "ArrowDown"}
            }}}),
        );

        let entries = extract(TargetDomain::UxPatterns, &fixture.corpus()).unwrap();
        assert_eq!(
            entries[0].description,
            "Color: destructive. Icon: AlertTriangle. Animation: pulse"
        );
        assert_eq!(entries[1].description, "Color: muted. Icon: ArrowDown");
    }
}
