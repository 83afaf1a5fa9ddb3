//! Component-architecture knowledge: variants, API limits, composition,
//! atomic design, shadcn catalogue, stabilization and clean-code limits

use super::present_text;
use crate::document::SourceCorpus;
use crate::error::Result;
use vasari_domain::{EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &[
    "variant-philosophy.json",
    "component-dev-intelligence.json",
    "component-usage-patterns.json",
    "api-constraints.json",
    "architecture-patterns.json",
    "shadcn-intelligence.json",
    "stabilization-patterns.json",
    "clean-code-rules.json",
];

/// Extract component entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    // variant-philosophy.json
    let variants = corpus.load("variant-philosophy.json")?;
    let variants = variants.root();

    for c in variants.get("whenToReject").get("autoRejectCriteria").items() {
        let signal = c.get("signal").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("variant-reject-{}", signal),
                format!("Variant rejection: {}", signal),
                Severity::Warning,
                c.get("reason").text(),
            )
            .with_example(format!("Bad: {}", c.get("example").text()))
            .with_tags(["components", "variants", "anti-pattern"]),
        );
    }

    let semantic = variants.get("semanticVsCosmetic");
    let status = semantic.get("statusVariants");
    if status.is_truthy() {
        let list = status
            .get("variants")
            .items()
            .map(|v| format!("{}: {}", v.get("name").text(), v.get("meaning").text()))
            .collect::<Vec<_>>()
            .join("; ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "semantic-status-variants",
                "Semantic status variants",
                Severity::Critical,
                format!("{}. {}", status.get("description").text(), list),
            )
            .with_tags(["components", "variants", "semantic"]),
        );
    }

    let action = semantic.get("actionVariants");
    if action.is_truthy() {
        let list = action
            .get("variants")
            .items()
            .map(|v| format!("{}: {}", v.get("name").text(), v.get("use").text()))
            .collect::<Vec<_>>()
            .join("; ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "semantic-action-variants",
                "Semantic action variants",
                Severity::Critical,
                format!("{}. {}", action.get("description").text(), list),
            )
            .with_tags(["components", "variants", "semantic", "actions"]),
        );
    }

    for ap in variants.get("antiPatterns").get("signals").items() {
        let signal = ap.get("signal").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("variant-antipattern-{}", signal),
                format!("Variant anti-pattern: {}", signal),
                Severity::Warning,
                ap.get("fix").text(),
            )
            .with_example(format!("Bad: {}", ap.get("example").text()))
            .with_tags(["components", "variants", "anti-pattern"]),
        );
    }

    // component-dev-intelligence.json
    let dev = corpus.load("component-dev-intelligence.json")?;
    let dev = dev.root();

    for q in dev.get("preBuild").get("gate").get("questions").items() {
        let question = q.get("question").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("prebuild-{}", question),
                format!("Pre-build gate: {}", question),
                Severity::Critical,
                format!("If yes: {}. If no: {}", q.get("ifYes").text(), q.get("ifNo").text()),
            )
            .with_tags(["components", "pre-build", "gate"]),
        );
    }

    for rf in dev.get("redFlags").get("signals").items() {
        let signal = rf.get("signal").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("redflag-{}", signal),
                format!("Red flag: {}", signal),
                Severity::Warning,
                rf.get("action").text(),
            )
            .with_tags(["components", "red-flags"]),
        );
    }

    let rule_333 = dev.get("apiDesign").get("the333Rule");
    if rule_333.is_truthy() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "api-333-rule",
                "The 3-3-3 Rule for component APIs",
                Severity::Critical,
                rule_333.get("rules").join(". "),
            )
            .with_tags(["components", "api-design", "rule"]),
        );
    }

    // component-usage-patterns.json
    let usage = corpus.load("component-usage-patterns.json")?;
    for f in usage.root().get("composition").get("forbidden").items() {
        let pattern = f.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("composition-forbidden-{}", pattern),
                format!("Forbidden composition: {}", pattern),
                Severity::Critical,
                f.get("why").text(),
            )
            .with_counter_example(f.get("fix").text())
            .with_tags(["components", "composition", "forbidden"]),
        );
    }

    // api-constraints.json
    let api = corpus.load("api-constraints.json")?;
    let api = api.root();

    for c in api.get("propLimits").get("constraints").items() {
        let name = c.get("name").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("api-constraint-{}", name),
                format!("API constraint: {} (limit: {})", name, c.get("limit").text()),
                Severity::Critical,
                format!("{}. Action: {}", c.get("rationale").text(), c.get("action").text()),
            )
            .with_tags(["components", "api-constraints", "props"]),
        );
    }

    for ap in api.get("antiPatterns").items() {
        let pattern = ap.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("api-antipattern-{}", pattern),
                format!("API anti-pattern: {}", pattern),
                Severity::Warning,
                format!("Issue: {}. Fix: {}", ap.get("issue").text(), ap.get("fix").text()),
            )
            .with_tags(["components", "api-constraints", "anti-pattern"]),
        );
    }

    // architecture-patterns.json
    let architecture = corpus.load("architecture-patterns.json")?;
    let architecture = architecture.root();

    for (level, data) in architecture.get("atomicLevels").fields() {
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("atomic-{}", level),
                format!("Atomic level: {} — {}", level, data.get("definition").text()),
                Severity::Suggestion,
                data.get("description").text(),
            )
            .with_example(format!("Examples: {}", data.get("examples").join(", ")))
            .with_context(format!(
                "State: {}",
                data.get("stateManagement").get("approach").text_or("N/A")
            ))
            .with_tags([
                "components".to_string(),
                "architecture".into(),
                "atomic-design".into(),
                level.to_lowercase(),
            ]),
        );
    }

    for ap in architecture.get("antiPatterns").items() {
        let pattern = ap.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("arch-antipattern-{}", pattern),
                format!("Architecture anti-pattern: {}", pattern),
                Severity::Warning,
                format!("Problem: {}. Fix: {}", ap.get("problem").text(), ap.get("fix").text()),
            )
            .with_tags(["components", "architecture", "anti-pattern"]),
        );
    }

    // shadcn-intelligence.json
    let shadcn = corpus.load("shadcn-intelligence.json")?;
    for comp in shadcn.root().get("components").items() {
        let mut tags = vec![
            "components".to_string(),
            "shadcn".to_string(),
            comp.get("category").text(),
        ];
        tags.extend(comp.get("features").strings());

        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("shadcn-{}", comp.get("slug").text()),
                format!("shadcn/ui: {}", comp.get("name").text()),
                Severity::Suggestion,
                comp.get("description").text(),
            )
            .with_example(comp.get("installCmd").text())
            .with_context(present_text(comp.get("radixPrimitive"), |p| {
                format!("Radix primitive: {}", p)
            }))
            .with_tags(tags)
            .with_applies_to(comp.get("subComponents").strings()),
        );
    }

    // stabilization-patterns.json
    let stabilization = corpus.load("stabilization-patterns.json")?;
    let stabilization = stabilization.root();

    for p in stabilization.get("safeChanges").get("patterns").items() {
        let pattern = p.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("safe-change-{}", pattern),
                format!("Safe change: {}", pattern),
                Severity::Suggestion,
                p.get("implementationNotes").text(),
            )
            .with_example(p.get("examples").join("; "))
            .with_tags([
                "components".to_string(),
                "stabilization".into(),
                "safe-changes".into(),
                p.get("riskLevel").text().to_lowercase(),
            ]),
        );
    }

    for bc in stabilization.get("breakingChanges").get("highRisk").items() {
        let change = bc.get("changeType").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("breaking-change-{}", change),
                format!("Breaking change risk: {}", change),
                Severity::Critical,
                format!("Mitigation: {}", bc.get("mitigationStrategy").text()),
            )
            .with_example(bc.get("examples").join("; "))
            .with_tags(["components", "stabilization", "breaking-changes"]),
        );
    }

    // clean-code-rules.json
    let clean = corpus.load("clean-code-rules.json")?;
    let clean = clean.root();

    for ap in clean.get("anti-patterns").items() {
        let pattern = ap.get("pattern").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("clean-code-{}", pattern),
                format!("Clean code: {}", pattern),
                Severity::Warning,
                format!("Problem: {}. Fix: {}", ap.get("problem").text(), ap.get("fix").text()),
            )
            .with_tags(["components", "clean-code", "anti-pattern"]),
        );
    }

    for target in clean.get("functions").get("sizeTargets").items() {
        let severity = match target.get("status").str() {
            Some("Critical") => Severity::Critical,
            Some("Warning") => Severity::Warning,
            _ => continue,
        };
        let status = target.get("status").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("function-size-{}", status),
                format!("Function size {}: {} lines", status, target.get("lines").text()),
                severity,
                target.get("action").text(),
            )
            .with_tags(["components", "clean-code", "function-size"]),
        );
    }

    for limit in clean.get("file-limits").get("limits").items() {
        let file_type = limit.get("fileType").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("file-limit-{}", file_type),
                format!("File limit: {} max {} lines", file_type, limit.get("maxLines").text()),
                Severity::Warning,
                limit.get("actionWhenExceeded").text(),
            )
            .with_tags(["components", "clean-code", "file-limits"]),
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
    fn test_red_flags_and_gate_questions() {
        let fixture = Corpus::empty().with(
            "component-dev-intelligence.json",
            json!({
                "preBuild": {"gate": {"questions": [{"question": "Does it exist?", "ifYes": "Reuse", "ifNo": "Build"}]}},
                "redFlags": {"signals": [{"signal": "Too many props", "action": "Split the component"}]}
            }),
        );

        let entries = extract(TargetDomain::Components, &fixture.corpus()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "components-prebuild-does-it-exist");
        assert_eq!(entries[0].description, "If yes: Reuse. If no: Build");
        assert_eq!(entries[1].id, "components-redflag-too-many-props");
        assert_eq!(entries[1].entry_type, EntryType::AntiPattern);
    }

    #[test]
    fn test_shadcn_component() {
        let fixture = Corpus::empty().with(
            "shadcn-intelligence.json",
            json!({"components": [
                {"slug": "dialog", "name": "Dialog", "description": "Modal window", "category": "overlay",
                 "features": ["focus-trap"], "installCmd": "npx shadcn add dialog",
                 "radixPrimitive": "@radix-ui/react-dialog", "subComponents": ["DialogTrigger", "DialogContent"]},
                {"slug": "badge", "name": "Badge", "description": "Label", "category": "display", "subComponents": []}
            ]}),
        );

        let entries = extract(TargetDomain::Components, &fixture.corpus()).unwrap();
        assert_eq!(entries.len(), 2);

        let dialog = &entries[0];
        assert_eq!(dialog.id, "components-shadcn-dialog");
        assert_eq!(dialog.tags, vec!["components", "shadcn", "overlay", "focus-trap"]);
        assert_eq!(dialog.context.as_deref(), Some("Radix primitive: @radix-ui/react-dialog"));
        assert_eq!(
            dialog.applies_to,
            Some(vec!["DialogTrigger".to_string(), "DialogContent".to_string()])
        );

        let badge = &entries[1];
        assert_eq!(badge.context, None);
        assert_eq!(badge.example, None);
        assert_eq!(badge.applies_to, None);
    }

    #[test]
    fn test_function_size_targets_keep_only_critical_and_warning() {
        let fixture = Corpus::empty().with(
            "clean-code-rules.json",
            json!({"functions": {"sizeTargets": [
                {"status": "Ideal", "lines": "< 20", "action": "None"},
                {"status": "Warning", "lines": "50", "action": "Consider splitting"},
                {"status": "Critical", "lines": "100", "action": "Split now"}
            ]}}),
        );

        let entries = extract(TargetDomain::Components, &fixture.corpus()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "components-function-size-warning");
        assert_eq!(entries[0].severity, Severity::Warning);
        assert_eq!(entries[1].severity, Severity::Critical);
    }

    #[test]
    fn test_atomic_levels_without_state_management() {
        let fixture = Corpus::empty().with(
            "architecture-patterns.json",
            json!({"atomicLevels": {"Atoms": {"definition": "Smallest", "description": "Basic blocks", "examples": ["Button"]}}}),
        );

        let entries = extract(TargetDomain::Components, &fixture.corpus()).unwrap();
        assert_eq!(entries[0].id, "components-atomic-atoms");
        assert_eq!(entries[0].context.as_deref(), Some("State: N/A"));
        assert_eq!(entries[0].example.as_deref(), Some("Examples: Button"));
        assert!(entries[0].tags.contains(&"atoms".to_string()));
    }
}
