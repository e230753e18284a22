//! Attachment rewriting: inline genomic payloads become URL references
//!
//! The qualifying clinical note embeds its text as base64. Somewhere in that
//! text the report names the CSV file the DNA data was stored in; the
//! rewriter extracts that path and converts the attachment from
//! inline-embedded to external-by-location. A missing marker line or an
//! unexpected path is a data-integrity violation, not a recoverable
//! condition: it means the corpus does not match the assumed report format.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Result, TransformError};
use crate::model::DocumentReference;

/// Marker phrase naming the stored DNA file inside the note text.
/// The double space is present in the source reports.
pub const FILE_LOCATION_MARKER: &str = "genetic analysis summary panel  stored in";

/// Substring identifying the genomic data file path
pub const DNA_FILE_MARKER: &str = "_dna.csv";

/// Decode a base64 inline attachment payload to text
pub fn decode_inline_text(data: &str) -> Result<String> {
    let bytes = STANDARD.decode(data)?;
    String::from_utf8(bytes).map_err(|e| {
        TransformError::MalformedInput(format!("attachment payload is not UTF-8 text: {e}"))
    })
}

/// Rewrite a qualifying document reference so its attachment is addressed by
/// location instead of embedded inline. The original is not mutated.
///
/// The decoded payload is scanned line by line for [`FILE_LOCATION_MARKER`];
/// the trailing whitespace-delimited token of the first such line is the file
/// path, which must contain [`DNA_FILE_MARKER`].
///
/// # Errors
/// Returns [`TransformError::AttachmentFormatViolation`] if the marker line
/// is absent or the extracted path lacks the expected suffix.
pub fn rewrite_as_url(document: &DocumentReference) -> Result<DocumentReference> {
    let data = document.inline_data().ok_or_else(|| {
        TransformError::AttachmentFormatViolation(
            "document reference has no inline attachment payload".to_string(),
        )
    })?;
    let text = decode_inline_text(data)?;

    let line = text
        .lines()
        .find(|line| line.contains(FILE_LOCATION_MARKER))
        .ok_or_else(|| {
            TransformError::AttachmentFormatViolation(format!(
                "no line containing {FILE_LOCATION_MARKER:?} in decoded note text"
            ))
        })?;
    let path = line.split_whitespace().last().ok_or_else(|| {
        TransformError::AttachmentFormatViolation("marker line carries no file path".to_string())
    })?;
    if !path.contains(DNA_FILE_MARKER) {
        return Err(TransformError::AttachmentFormatViolation(format!(
            "extracted path {path:?} does not reference a {DNA_FILE_MARKER} file"
        )));
    }

    let mut rewritten = document.clone();
    if let Some(content) = rewritten.content.first_mut() {
        content.attachment.data = None;
        content.attachment.url = Some(path.to_string());
    }
    Ok(rewritten)
}
