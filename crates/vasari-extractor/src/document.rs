//! Source documents and absent-tolerant navigation over them

use crate::error::{ExtractorError, Result};
use serde_json::{Number, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory of named source JSON documents
///
/// The corpus is read-only and shared by every extractor; a document may be
/// loaded by several domains.
#[derive(Debug, Clone)]
pub struct SourceCorpus {
    root: PathBuf,
}

impl SourceCorpus {
    /// Create a corpus rooted at a directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Corpus root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a document is read from
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Whether a document file exists
    pub fn contains(&self, name: &str) -> bool {
        self.path_of(name).is_file()
    }

    /// Load and parse a required document
    ///
    /// A missing file or invalid JSON is fatal for the run.
    pub fn load(&self, name: &str) -> Result<SourceDocument> {
        let path = self.path_of(name);
        let raw = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ExtractorError::MissingDocument {
                    name: name.to_string(),
                    path: path.clone(),
                }
            } else {
                ExtractorError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        let value = serde_json::from_str(&raw).map_err(|source| ExtractorError::InvalidDocument {
            name: name.to_string(),
            source,
        })?;

        debug!("Loaded source document {} ({} bytes)", name, raw.len());
        Ok(SourceDocument::from_value(name, value))
    }
}

/// A parsed source document
#[derive(Debug, Clone)]
pub struct SourceDocument {
    name: String,
    value: Value,
}

impl SourceDocument {
    /// Wrap an already parsed value
    pub fn from_value(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Document file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Navigation handle on the document root
    pub fn root(&self) -> Node<'_> {
        Node::new(&self.value)
    }
}

/// A view over a JSON value that may be absent
///
/// Every lookup on an absent node yields another absent node, so a chain of
/// `get` calls never fails. Each access site then decides explicitly how to
/// treat absence: iterate nothing, render empty text, or fall back.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(Option<&'a Value>);

impl<'a> Node<'a> {
    /// Node over a present value
    pub fn new(value: &'a Value) -> Self {
        Self(Some(value))
    }

    /// Member of an object; absent for non-objects and missing keys
    pub fn get(self, key: &str) -> Node<'a> {
        Node(self.0.and_then(|v| v.get(key)))
    }

    /// This node if present, otherwise `other`
    pub fn or(self, other: Node<'a>) -> Node<'a> {
        if self.is_present() {
            self
        } else {
            other
        }
    }

    /// Present and not `null`
    pub fn is_present(self) -> bool {
        matches!(self.0, Some(v) if !v.is_null())
    }

    /// JavaScript-style truthiness: present, not `false`, `0` or `""`
    pub fn is_truthy(self) -> bool {
        match self.0 {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// The underlying string, if this is a string
    pub fn str(self) -> Option<&'a str> {
        self.0.and_then(Value::as_str)
    }

    /// Render a scalar as text
    ///
    /// Strings render as-is, booleans as `true`/`false`, numbers with
    /// integral values and no fraction (`2.0` renders as `2`), arrays as their
    /// rendered items joined by `,`. Absent values, `null` and objects render
    /// as the empty string.
    pub fn text(self) -> String {
        match self.0 {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => number_text(n),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Array(_)) => self.join(","),
            None | Some(Value::Null) | Some(Value::Object(_)) => String::new(),
        }
    }

    /// Render as text, substituting `fallback` when absent
    pub fn text_or(self, fallback: &str) -> String {
        if self.is_present() {
            self.text()
        } else {
            fallback.to_string()
        }
    }

    /// Elements of an array; nothing for absent or non-array values
    pub fn items(self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.0
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(Node::new)
    }

    /// Members of an object in declared order; nothing for non-objects
    pub fn fields(self) -> impl Iterator<Item = (&'a str, Node<'a>)> + 'a {
        self.0
            .and_then(Value::as_object)
            .into_iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), Node::new(v)))
    }

    /// Rendered text of every array element
    pub fn strings(self) -> Vec<String> {
        self.items().map(Node::text).collect()
    }

    /// Rendered array elements joined by `sep`; empty for absent values
    pub fn join(self, sep: &str) -> String {
        self.strings().join(sep)
    }
}

/// Largest magnitude at which every integer is exactly representable in `f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
