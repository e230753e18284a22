//! Task model, synthesized by this system

use serde::{Deserialize, Serialize};

use super::types::{CodeableConcept, Narrative, Reference};

/// Completed order/fulfillment workflow record tying the synthesized
/// specimen to the diagnostic report and rewritten document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Narrative>,
    pub status: String,
    pub intent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Reference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<TaskParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<TaskParameter>,
}

/// Typed input or output slot of a task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskParameter {
    #[serde(rename = "type")]
    pub kind: CodeableConcept,
    #[serde(rename = "valueReference")]
    pub value_reference: Reference,
}

impl TaskParameter {
    /// Parameter whose type is a single bare code
    #[must_use]
    pub fn new(kind_code: &str, value_reference: Reference) -> Self {
        Self {
            kind: CodeableConcept::from_code(kind_code),
            value_reference,
        }
    }
}
