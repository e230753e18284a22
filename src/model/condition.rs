//! Condition (diagnosis) model, read-only in this system

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::CodeableConcept;

/// Diagnosis record with a coded diagnosis; collected into the per-bundle
/// summary for later cohort construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CodeableConcept>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Condition {
    /// The first coding of the diagnosis as a `(code, display)` pair.
    /// Conditions without a coded diagnosis yield `None`.
    #[must_use]
    pub fn coded_diagnosis(&self) -> Option<(String, String)> {
        let coding = self.code.as_ref()?.coding.first()?;
        Some((
            coding.code.clone().unwrap_or_default(),
            coding.display.clone().unwrap_or_default(),
        ))
    }
}
