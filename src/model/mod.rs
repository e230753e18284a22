//! Typed wire models for the fixed FHIR bundle schema
//!
//! The coherent corpus carries many resource types this system never touches,
//! so bundle entries hold their resource as raw JSON and the typed views below
//! are decoded on demand by `resourceType`. Every typed struct flattens the
//! fields it does not model into an extras map, so decoding a resource,
//! mutating one field and re-encoding it loses nothing.

pub mod bundle;
pub mod condition;
pub mod document;
pub mod patient;
pub mod report;
pub mod specimen;
pub mod task;
pub mod types;

pub use bundle::{Bundle, BundleEntry};
pub use condition::Condition;
pub use document::{DocumentContent, DocumentReference};
pub use patient::Patient;
pub use report::DiagnosticReport;
pub use specimen::Specimen;
pub use task::{Task, TaskParameter};
pub use types::{Attachment, CodeableConcept, Coding, Narrative, Reference};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Decode a typed view of a raw bundle resource
pub fn decode<T: DeserializeOwned>(resource: &Value) -> Result<T> {
    Ok(serde_json::from_value(resource.clone())?)
}

/// Encode a typed resource back into the raw JSON form bundle entries hold
pub fn encode<T: Serialize>(resource: &T) -> Result<Value> {
    Ok(serde_json::to_value(resource)?)
}
