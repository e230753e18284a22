//! Shared FHIR datatypes used across resource models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single code taken from a terminology system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A concept expressed as one or more codings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeableConcept {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coding: Vec<Coding>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CodeableConcept {
    /// Concept with a single bare code, as used for task input/output types
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self {
            coding: vec![Coding {
                code: Some(code.to_string()),
                display: None,
                extra: Map::new(),
            }],
            extra: Map::new(),
        }
    }

    /// True if any coding carries exactly this code
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.coding.iter().any(|c| c.code.as_deref() == Some(code))
    }
}

/// A weak reference to another resource, by `Type/id` string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Reference {
    /// Build a relative reference of the form `Type/id`
    #[must_use]
    pub fn to(resource_type: &str, id: &str) -> Self {
        Self {
            reference: Some(format!("{resource_type}/{id}")),
            extra: Map::new(),
        }
    }
}

/// Human-readable narrative attached to a resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub status: String,
    pub div: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Narrative {
    /// Narrative with status `generated`, as carried by synthesized resources
    #[must_use]
    pub fn generated(div: &str) -> Self {
        Self {
            status: "generated".to_string(),
            div: div.to_string(),
            extra: Map::new(),
        }
    }
}

/// Document content, either embedded inline (`data`) or by location (`url`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Base64-encoded inline payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Location of the externally stored payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
