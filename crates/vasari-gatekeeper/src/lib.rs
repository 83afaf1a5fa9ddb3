//! Vasari Gatekeeper
//!
//! Validates persisted intelligence bundles for schema conformance and
//! identifier collisions.
//!
//! The Gatekeeper provides:
//! - Required field and type/severity enumeration checks
//! - `tags` and optional field shape checks
//! - Duplicate `id` detection within a bundle and across bundles
//! - Bundle-level checks (domain, semver version, entries array)
//!
//! Defects are collected as issues in a [`ValidationReport`]; the run passes
//! only when there are none.
//!
//! # Examples
//!
//! ```no_run
//! use std::path::Path;
//! use vasari_gatekeeper::{BundleValidator, ValidationConfig};
//!
//! let validator = BundleValidator::new(ValidationConfig::default());
//! let report = validator.validate_dir(Path::new("bundles")).unwrap();
//!
//! println!("{} issues", report.summary.total_issues);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod report;
mod validator;

pub use config::ValidationConfig;
pub use error::GatekeeperError;
pub use report::{BundleVerdict, Issue, IssueKind, IssueLocation, Summary, ValidationReport};
pub use validator::BundleValidator;
