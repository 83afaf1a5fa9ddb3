//! Entry module - the unit of normalized design knowledge

use crate::domain::TargetDomain;
use crate::severity::Severity;
use crate::slug::slugify;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic nature of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    /// Guidance or an example to follow
    Pattern,

    /// Something to avoid
    AntiPattern,

    /// A constraint to enforce
    Rule,
}

impl EntryType {
    /// All entry types
    pub const ALL: [EntryType; 3] = [EntryType::Pattern, EntryType::AntiPattern, EntryType::Rule];

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Pattern => "pattern",
            EntryType::AntiPattern => "anti-pattern",
            EntryType::Rule => "rule",
        }
    }

    /// Parse an exact type name
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intelligence entry - one normalized design/UX record
///
/// Entries are built once by an extractor and never mutated afterwards.
/// Required text fields are always populated: construction falls back to the
/// title when the description is blank and to the distinguishing key when
/// the title is blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligenceEntry {
    /// Corpus-wide identifier, `slugify(domain-key)`
    pub id: String,

    /// Semantic nature of the entry
    #[serde(rename = "type")]
    pub entry_type: EntryType,

    /// Owning domain
    pub domain: TargetDomain,

    /// Human-readable headline
    pub title: String,

    /// Canonical severity
    pub severity: Severity,

    /// Explanatory text
    pub description: String,

    /// Where the entry applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// What to do
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// What not to do
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_example: Option<String>,

    /// Rationale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,

    /// Free-form classification, possibly empty
    #[serde(default)]
    pub tags: Vec<String>,

    /// Components or contexts the entry targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<Vec<String>>,
}

impl IntelligenceEntry {
    /// Create a new entry
    ///
    /// `key` is the distinguishing key within the domain; the identifier is
    /// `slugify("{domain}-{key}")`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_domain::{EntryType, IntelligenceEntry, Severity, TargetDomain};
    ///
    /// let entry = IntelligenceEntry::new(
    ///     TargetDomain::DesignTokens,
    ///     EntryType::Rule,
    ///     "forbidden-inline-hex-color",
    ///     "Forbidden: inline-hex-color",
    ///     Severity::Critical,
    ///     "breaks theming",
    /// );
    /// assert_eq!(entry.id, "design-tokens-forbidden-inline-hex-color");
    /// ```
    pub fn new(
        domain: TargetDomain,
        entry_type: EntryType,
        key: impl AsRef<str>,
        title: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        let key = key.as_ref();
        let mut title = title.into();
        if title.trim().is_empty() {
            title = key.to_string();
        }
        let mut description = description.into();
        if description.trim().is_empty() {
            description = title.clone();
        }

        Self {
            id: slugify(&format!("{}-{}", domain.as_str(), key)),
            entry_type,
            domain,
            title,
            severity,
            description,
            context: None,
            example: None,
            counter_example: None,
            why: None,
            tags: Vec::new(),
            applies_to: None,
        }
    }

    /// Set the context; blank text leaves it absent
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = non_blank(context.into());
        self
    }

    /// Set the example; blank text leaves it absent
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = non_blank(example.into());
        self
    }

    /// Set the counter-example; blank text leaves it absent
    pub fn with_counter_example(mut self, counter_example: impl Into<String>) -> Self {
        self.counter_example = non_blank(counter_example.into());
        self
    }

    /// Set the rationale; blank text leaves it absent
    pub fn with_why(mut self, why: impl Into<String>) -> Self {
        self.why = non_blank(why.into());
        self
    }

    /// Append tags in order, dropping blank ones
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().filter_map(|t| non_blank(t.into())));
        self
    }

    /// Set `appliesTo`; an empty list leaves it absent
    pub fn with_applies_to(mut self, targets: Vec<String>) -> Self {
        self.applies_to = if targets.is_empty() { None } else { Some(targets) };
        self
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
