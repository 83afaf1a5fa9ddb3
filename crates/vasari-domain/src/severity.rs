//! Severity taxonomy and canonicalization of source labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an intelligence entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must never be violated
    Critical,

    /// Should be addressed
    Warning,

    /// Advisory guidance
    Suggestion,
}

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Suggestion];

    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
        }
    }

    /// Parse an exact severity name (no canonicalization)
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sev| sev.as_str() == s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalize an arbitrary source severity label
///
/// `error` and `critical` map to [`Severity::Critical`], `warning` maps to
/// [`Severity::Warning`], and every other label (including an absent one)
/// maps to [`Severity::Suggestion`].
///
/// # Examples
///
/// ```
/// use vasari_domain::{map_severity, Severity};
///
/// assert_eq!(map_severity(Some("error")), Severity::Critical);
/// assert_eq!(map_severity(None), Severity::Suggestion);
/// ```
pub fn map_severity(label: Option<&str>) -> Severity {
    match label {
        Some("error") | Some("critical") => Severity::Critical,
        Some("warning") => Severity::Warning,
        _ => Severity::Suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_error_and_critical_are_critical() {
        assert_eq!(map_severity(Some("error")), Severity::Critical);
        assert_eq!(map_severity(Some("critical")), Severity::Critical);
    }

    #[test]
    fn test_unknown_labels_are_suggestions() {
        assert_eq!(map_severity(Some("info")), Severity::Suggestion);
        assert_eq!(map_severity(Some("Error")), Severity::Suggestion);
        assert_eq!(map_severity(Some("")), Severity::Suggestion);
        assert_eq!(map_severity(None), Severity::Suggestion);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }

    proptest! {
        #[test]
        fn map_severity_is_closed_and_idempotent(label in ".*") {
            let sev = map_severity(Some(&label));
            prop_assert!(Severity::ALL.contains(&sev));
            prop_assert_eq!(map_severity(Some(sev.as_str())), sev);
        }
    }
}
