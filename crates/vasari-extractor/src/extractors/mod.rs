//! Per-domain extractors
//!
//! Each submodule exposes `DOCUMENTS`, the source files it reads, and an
//! `extract` function matching [`crate::ExtractFn`]. Extractors walk their
//! documents in declared order and emit one entry per matched substructure.

pub mod accessibility;
pub mod color_system;
pub mod components;
pub mod design_tokens;
pub mod spacing;
pub mod storybook;
pub mod typography;
pub mod ux_patterns;

use crate::document::Node;

/// Render every member of an object as `"{key}{sep}{value}"`, joined by `join`
pub(crate) fn pairs(node: Node<'_>, sep: &str, join: &str) -> String {
    node.fields()
        .map(|(k, v)| format!("{}{}{}", k, sep, v.text()))
        .collect::<Vec<_>>()
        .join(join)
}

/// Optional text that is only set when the source value is present
pub(crate) fn present_text(node: Node<'_>, render: impl FnOnce(String) -> String) -> String {
    if node.is_truthy() {
        render(node.text())
    } else {
        String::new()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! Throwaway corpora for extractor tests

    use crate::document::SourceCorpus;
    use crate::registry::ExtractorRegistry;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;

    /// A corpus where every known document is `{}` unless overridden
    pub struct Corpus {
        pub dir: TempDir,
    }

    impl Corpus {
        pub fn empty() -> Self {
            let dir = TempDir::new().unwrap();
            for name in ExtractorRegistry::standard().source_mapping().keys() {
                fs::write(dir.path().join(name), "{}").unwrap();
            }
            Self { dir }
        }

        pub fn with(self, name: &str, value: Value) -> Self {
            fs::write(
                self.dir.path().join(name),
                serde_json::to_string_pretty(&value).unwrap(),
            )
            .unwrap();
            self
        }

        pub fn corpus(&self) -> SourceCorpus {
            SourceCorpus::new(self.dir.path())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pairs_in_declared_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"bg-white": "bg-background", "text-gray-500": "text-muted"}"#).unwrap();
        assert_eq!(
            pairs(Node::new(&value), " → ", ", "),
            "bg-white → bg-background, text-gray-500 → text-muted"
        );
    }

    #[test]
    fn test_present_text() {
        let value = json!({"cmd": "npx shadcn add button"});
        let root = Node::new(&value);
        assert_eq!(present_text(root.get("cmd"), |t| format!("Run: {}", t)), "Run: npx shadcn add button");
        assert_eq!(present_text(root.get("none"), |t| format!("Run: {}", t)), "");
    }
}
