//! Patient demographic model, read-only in this system

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Demographic record; at most one is expected per bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
