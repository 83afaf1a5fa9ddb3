//! Vasari Extractor
//!
//! Normalizes a corpus of loosely structured design/UX JSON documents into
//! one [`IntelligenceBundle`](vasari_domain::IntelligenceBundle) per domain.
//!
//! # Overview
//!
//! Each of the eight domains owns an extractor that reads a fixed set of
//! source documents and emits entries in document order. The pipeline runs
//! the extractors one at a time and writes `<output>/<domain>.json`.
//!
//! # Architecture
//!
//! ```text
//! Source JSON → SourceCorpus → Extractor (per domain) → IntelligenceBundle → <domain>.json
//! ```
//!
//! # Key Features
//!
//! - **Absent-tolerant navigation**: [`Node`] makes every missing substructure
//!   contribute zero entries instead of failing
//! - **Explicit registry**: [`ExtractorRegistry`] is an immutable value passed
//!   to the pipeline, never global state
//! - **Deterministic output**: two runs over an unchanged corpus produce
//!   byte-identical bundles
//! - **Fail fast**: a missing or corrupt source document aborts the run
//!
//! # Example Usage
//!
//! ```no_run
//! use vasari_extractor::{ExtractorRegistry, Pipeline, PipelineConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig::new("intelligence/data", "bundles");
//! let pipeline = Pipeline::new(ExtractorRegistry::standard(), config);
//!
//! let summary = pipeline.run()?;
//! for outcome in &summary.domains {
//!     println!("{}: {} entries", outcome.domain, outcome.entries);
//! }
//! println!("Total: {}", summary.total_entries());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod error;
pub mod extractors;
mod pipeline;
mod registry;

#[cfg(test)]
mod tests;

pub use config::PipelineConfig;
pub use document::{Node, SourceCorpus, SourceDocument};
pub use error::{ExtractorError, Result};
pub use pipeline::{DomainOutcome, Pipeline, RunSummary};
pub use registry::{ExtractFn, ExtractorRegistry, RegisteredExtractor};
