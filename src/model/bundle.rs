//! Bundle container model
//!
//! A bundle is the root unit of input and output: an ordered sequence of
//! entries, each wrapping exactly one resource. Entry order is preserved;
//! synthesized entries are appended at the end.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A FHIR bundle: the full record of one simulated patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One bundle entry wrapping a single resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleEntry {
    /// The wrapped resource, kept as raw JSON so untouched resources
    /// round-trip without loss
    pub resource: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BundleEntry {
    /// Wrap a raw resource in a fresh entry
    #[must_use]
    pub fn new(resource: Value) -> Self {
        Self {
            resource,
            extra: Map::new(),
        }
    }

    /// The declared `resourceType` of the wrapped resource, if any
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.resource.get("resourceType").and_then(Value::as_str)
    }
}
