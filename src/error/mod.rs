//! Error handling for the bundle transform.

use std::io;

/// Specialized error type for bundle enrichment and batch processing.
///
/// Every variant is fatal for the file being processed: a bundle either
/// enriches completely or is not written at all. The batch driver records
/// which file an error belongs to; the variants themselves only describe the
/// nature of the violation.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// Error opening, reading or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The document does not decode as a valid record bundle
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Zero or multiple DNA document references where exactly one is required
    #[error("expected exactly one document reference carrying the DNA data, found {found}")]
    MissingDocumentCarrier {
        /// Number of qualifying document references actually found
        found: usize,
    },

    /// The decoded attachment payload does not match the assumed report format
    #[error("attachment format violation: {0}")]
    AttachmentFormatViolation(String),

    /// A source identifier cannot be parsed for deterministic derivation
    #[error("malformed identifier {id:?}: {source}")]
    MalformedIdentifier {
        /// The identifier that failed to parse
        id: String,
        source: uuid::Error,
    },

    /// The input corpus does not match the expected directory layout
    #[error("corpus layout error: {0}")]
    CorpusLayout(String),

    /// The worker pool could not be constructed
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

impl From<serde_json::Error> for TransformError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedInput(error.to_string())
    }
}

impl From<base64::DecodeError> for TransformError {
    fn from(error: base64::DecodeError) -> Self {
        Self::MalformedInput(format!("invalid base64 attachment payload: {error}"))
    }
}

/// Result type for bundle transform operations
pub type Result<T> = std::result::Result<T, TransformError>;
