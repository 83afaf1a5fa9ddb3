//! Story requirements, master-story protocol and test-id conventions

use crate::document::SourceCorpus;
use crate::error::Result;
use vasari_domain::{EntryType, IntelligenceEntry, Severity, TargetDomain};

/// Documents read by this extractor
pub const DOCUMENTS: &[&str] = &["workflow-patterns.json"];

const STATE_MECHANISMS: [&str; 4] = ["autoFocus", "defaultChecked", "disabled", "ariaInvalid"];

/// Extract storybook entries
pub fn extract(domain: TargetDomain, corpus: &SourceCorpus) -> Result<Vec<IntelligenceEntry>> {
    let mut entries = Vec::new();

    let workflow = corpus.load("workflow-patterns.json")?;
    let workflow = workflow.root();
    let sb = workflow.get("storybook");
    let testing = workflow.get("testing");

    for s in sb.get("requiredStories").items() {
        let name = s.get("name").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("required-story-{}", name),
                format!("Required story: {}", name),
                Severity::Critical,
                format!("{}. Shows: {}", s.get("purpose").text(), s.get("shows").text()),
            )
            .with_tags(["storybook", "required", "stories"]),
        );
    }

    for s in sb.get("optionalStories").items() {
        let name = s.get("name").text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("optional-story-{}", name),
                format!("Optional story: {}", name),
                Severity::Suggestion,
                format!("When: {}. Shows: {}", s.get("when").text(), s.get("shows").text()),
            )
            .with_tags(["storybook", "optional", "stories"]),
        );
    }

    for f in sb.get("forbidden").items() {
        let text = f.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("forbidden-{}", text),
                format!("Storybook forbidden: {}", text),
                Severity::Critical,
                text,
            )
            .with_tags(["storybook", "forbidden"]),
        );
    }

    let states = sb.get("stateRealMechanisms");
    if states.is_truthy() {
        let mechanisms = STATE_MECHANISMS
            .iter()
            .filter(|k| states.get(k).is_truthy())
            .map(|k| format!("{}: {}", k, states.get(k).text()))
            .collect::<Vec<_>>()
            .join("; ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                "state-real-mechanisms",
                "Use real HTML/React mechanisms for states",
                Severity::Critical,
                format!("{}. {}", states.get("description").text(), mechanisms),
            )
            .with_counter_example(states.get("forbidden").join("; "))
            .with_tags(["storybook", "states", "accessibility"]),
        );
    }

    let frames = sb.get("mobileDeviceFrames");
    if frames.is_truthy() {
        let iphones = frames
            .get("iPhoneModels")
            .fields()
            .map(|(name, dims)| {
                format!("{}: {}x{}", name, dims.get("width").text(), dims.get("height").text())
            })
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "mobile-device-frames",
                "Mobile device frames for story testing",
                Severity::Suggestion,
                format!(
                    "{}. iPhone models: {}. Scale: {}",
                    frames.get("description").text(),
                    iphones,
                    frames.get("scaleRequirement").text()
                ),
            )
            .with_tags(["storybook", "mobile", "responsive", "testing"]),
        );
    }

    let master = workflow.get("masterStoryProtocol");
    if master.is_truthy() {
        let naming = master.get("naming");
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                "master-story-protocol",
                "Master story protocol: source of truth for page compositions",
                Severity::Critical,
                master.get("purpose").text(),
            )
            .with_example(format!(
                "Naming: {}. Examples: {}",
                naming.get("pattern").text(),
                naming.get("examples").join(", ")
            ))
            .with_why(master.get("benefits").join("; "))
            .with_tags(["storybook", "master", "protocol", "api-contract"]),
        );

        let api = master.get("requirements").get("apiSimulation");
        if api.is_truthy() {
            entries.push(
                IntelligenceEntry::new(
                    domain,
                    EntryType::Rule,
                    "master-api-simulation",
                    "Master stories: use API hooks, never inline mocks",
                    Severity::Critical,
                    api.get("rule").text(),
                )
                .with_why(api.get("why").text())
                .with_example(api.get("correct").join("; "))
                .with_counter_example(api.get("forbidden").join("; "))
                .with_tags(["storybook", "master", "api", "mocking"]),
            );
        }
    }

    for item in testing.get("mustHave").items() {
        let text = item.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::Rule,
                format!("test-must-have-{}", text),
                format!("Must have data-testid: {}", text),
                Severity::Warning,
                format!("Elements that must have data-testid attributes: {}", text),
            )
            .with_tags(["storybook", "testing", "data-testid"]),
        );
    }

    for f in testing.get("forbidden").items() {
        let text = f.text();
        entries.push(
            IntelligenceEntry::new(
                domain,
                EntryType::AntiPattern,
                format!("test-forbidden-{}", text),
                format!("Test ID anti-pattern: {}", text),
                Severity::Warning,
                text,
            )
            .with_tags(["storybook", "testing", "data-testid", "anti-pattern"]),
        );
    }

    for (layer, data) in testing.get("dataTestIdByLayer").fields() {
        if layer == "description" {
            continue;
        }
        let entry = if let Some(text) = data.str() {
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("testid-layer-{}", layer),
                format!("Test ID layer: {}", layer),
                Severity::Suggestion,
                text,
            )
        } else {
            IntelligenceEntry::new(
                domain,
                EntryType::Pattern,
                format!("testid-layer-{}", layer),
                format!("Test ID layer: {}", layer),
                Severity::Suggestion,
                format!("Format: {}", data.get("format").text()),
            )
            .with_example(data.get("examples").join(", "))
        };
        entries.push(entry.with_tags(["storybook", "testing", "data-testid", layer]));
    }

    Ok(entries)
}
