//! A Rust library for enriching Synthea "coherent" FHIR bundles with the
//! Specimen and Task resources the source data model omits, rewriting inline
//! genomic attachments to URL references along the way.

pub mod batch;
pub mod config;
pub mod enrich;
pub mod error;
pub mod model;
pub mod progress;
pub mod writer;

// Re-export the most common types for easier use
// Core types
pub use config::TransformConfig;
pub use error::{Result, TransformError};
pub use model::{Bundle, BundleEntry};

// Single-bundle enrichment
pub use enrich::ids::{IdRole, derive_id};
pub use enrich::{BundleSummary, enrich_bundle};

// Batch processing
pub use batch::{BatchOutcome, FileReport, run_batch};
