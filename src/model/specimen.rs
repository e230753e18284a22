//! Specimen model, synthesized by this system

use serde::{Deserialize, Serialize};

use super::types::{Narrative, Reference};

/// Biological sample backing a diagnostic report. Created once during
/// enrichment and never mutated after being appended to the bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specimen {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<Reference>,
}

impl Specimen {
    /// New specimen with a generated narrative, subject copied from the
    /// diagnostic report it backs
    #[must_use]
    pub fn new(id: String, subject: Option<Reference>) -> Self {
        Self {
            resource_type: "Specimen".to_string(),
            id,
            text: Some(Narrative::generated(
                "Autogenerated specimen. Inserted to make data model research friendly.",
            )),
            subject,
        }
    }
}
