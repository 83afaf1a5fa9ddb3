//! Vasari Domain Layer
//!
//! This crate contains the canonical schema every extractor must produce and
//! the pure normalizers that derive identifiers and severities. It defines the
//! fundamental concepts the extraction pipeline and the validator share.
//!
//! ## Key Concepts
//!
//! - **Entry**: The unit of knowledge - one normalized design/UX record
//! - **Bundle**: All entries for one target domain plus a version tag
//! - **Target Domain**: One of eight fixed knowledge categories
//! - **Severity**: Closed three-value taxonomy (critical, warning, suggestion)
//! - **Slug**: Deterministic text-to-identifier normalization
//!
//! ## Architecture
//!
//! - Pure data and functions only, no I/O
//! - Serialization derives describe the bundle file contract
//! - Reading and writing bundles lives in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod domain;
pub mod entry;
pub mod severity;
pub mod slug;

// Re-exports for convenience
pub use bundle::{is_semver, IntelligenceBundle, DEFAULT_VERSION};
pub use domain::TargetDomain;
pub use entry::{EntryType, IntelligenceEntry};
pub use severity::{map_severity, Severity};
pub use slug::slugify;
