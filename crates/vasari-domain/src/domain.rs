//! Target domain module - the fixed set of knowledge categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target domain for intelligence entries
///
/// Each domain owns exactly one extractor and one output bundle. The set is
/// closed and its declaration order is the order the pipeline processes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetDomain {
    /// Token selection, forbidden literals, component token guidance
    DesignTokens,

    /// Variant philosophy, API constraints, architecture, shadcn/ui
    Components,

    /// Story requirements and test id conventions
    Storybook,

    /// Violations, keyboard/screen reader rules, touch targets
    Accessibility,

    /// Type scale, font requirements, iconography
    Typography,

    /// Spacing tokens, layout anti-patterns, border radius
    Spacing,

    /// Color contexts, harmony, depth, dark mode
    ColorSystem,

    /// UX laws, defensive design, dialogs, writing, performance
    UxPatterns,
}

impl TargetDomain {
    /// All domains in pipeline order
    pub const ALL: [TargetDomain; 8] = [
        TargetDomain::DesignTokens,
        TargetDomain::Components,
        TargetDomain::Storybook,
        TargetDomain::Accessibility,
        TargetDomain::Typography,
        TargetDomain::Spacing,
        TargetDomain::ColorSystem,
        TargetDomain::UxPatterns,
    ];

    /// Get the domain identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDomain::DesignTokens => "design-tokens",
            TargetDomain::Components => "components",
            TargetDomain::Storybook => "storybook",
            TargetDomain::Accessibility => "accessibility",
            TargetDomain::Typography => "typography",
            TargetDomain::Spacing => "spacing",
            TargetDomain::ColorSystem => "color-system",
            TargetDomain::UxPatterns => "ux-patterns",
        }
    }

    /// Parse a domain from its identifier
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    /// File name of this domain's bundle
    pub fn bundle_file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for TargetDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TargetDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid domain: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_round_trip() {
        for domain in TargetDomain::ALL {
            assert_eq!(TargetDomain::parse(domain.as_str()), Some(domain));
        }
        assert_eq!(TargetDomain::parse("Spacing"), None);
    }

    #[test]
    fn test_pipeline_order() {
        assert_eq!(TargetDomain::ALL[0], TargetDomain::DesignTokens);
        assert_eq!(TargetDomain::ALL[7], TargetDomain::UxPatterns);
    }

    #[test]
    fn test_bundle_file_name() {
        assert_eq!(TargetDomain::ColorSystem.bundle_file_name(), "color-system.json");
    }

    #[test]
    fn test_serialized_form_matches_identifier() {
        let json = serde_json::to_string(&TargetDomain::UxPatterns).unwrap();
        assert_eq!(json, "\"ux-patterns\"");
    }
}
