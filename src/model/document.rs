//! Document reference model
//!
//! A document reference holds an attachment whose payload is either embedded
//! inline as base64 text or addressed by URL. The clinical note carrying the
//! genomic data file starts out inline and is rewritten to a URL.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::Attachment;

/// Note/document record holding one or more attachments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReference {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<DocumentContent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One content slot of a document reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContent {
    pub attachment: Attachment,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentReference {
    /// The base64 inline payload of the first attachment, if embedded
    #[must_use]
    pub fn inline_data(&self) -> Option<&str> {
        self.content.first()?.attachment.data.as_deref()
    }
}
