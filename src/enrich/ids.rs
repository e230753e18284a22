//! Deterministic identifier derivation for synthesized resources
//!
//! Synthesized identifiers are a pure function of the source diagnostic
//! report's identifier plus a role label, so re-running the transform on the
//! same input reproduces identical identifiers across runs and processes.

use uuid::Uuid;

use crate::error::{Result, TransformError};

/// Role of a synthesized resource within an enrichment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRole {
    /// The biological specimen backing the report
    Specimen,
    /// The fulfillment task
    Task,
    /// The per-report copy of the rewritten document reference
    DocumentReferenceWithUrl,
}

impl IdRole {
    /// Stable label hashed into the derived identifier. Changing a label
    /// changes every derived identifier, so these are part of the format.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            IdRole::Specimen => "specimen",
            IdRole::Task => "task",
            IdRole::DocumentReferenceWithUrl => "document_reference_with_url",
        }
    }
}

/// Derive the identifier for a synthesized resource.
///
/// Computed as a version 5 (name-based) UUID with the parsed source
/// identifier as namespace and the role label as name.
///
/// # Errors
/// Returns [`TransformError::MalformedIdentifier`] if `source_id` is not a
/// parseable UUID.
pub fn derive_id(source_id: &str, role: IdRole) -> Result<String> {
    let namespace =
        Uuid::parse_str(source_id).map_err(|source| TransformError::MalformedIdentifier {
            id: source_id.to_string(),
            source,
        })?;
    Ok(Uuid::new_v5(&namespace, role.label().as_bytes()).to_string())
}
