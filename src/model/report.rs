//! Diagnostic report model
//!
//! A report qualifies for enrichment when one of its codings carries the
//! genetic analysis panel code. Qualifying reports are the only resources
//! this system mutates in place: each gains a reference to its synthesized
//! specimen.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{CodeableConcept, Reference};

/// Clinical report record with one or more coded classifications
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specimen: Vec<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DiagnosticReport {
    /// True if any of the report's codings carries `code`
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.as_ref().is_some_and(|c| c.has_code(code))
    }
}
