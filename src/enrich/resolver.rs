//! Reference resolution: classify and collect the resources enrichment needs
//!
//! A single read-only pass over the bundle entries. Typed views are decoded
//! on demand, so the only failures this pass can produce are decode errors
//! for exactly the resources it inspects.

use crate::enrich::attachment::{DNA_FILE_MARKER, decode_inline_text};
use crate::error::Result;
use crate::model::{self, Bundle, Condition, DiagnosticReport, DocumentReference, Patient};

/// Code identifying a diagnostic report as a genetic analysis panel
pub const GENETIC_ANALYSIS_PANEL_CODE: &str = "55232-3";

/// The resources a bundle enrichment works from
#[derive(Debug, Default)]
pub struct BundleRefs {
    /// The demographic record, zero or one per bundle
    pub patient: Option<Patient>,
    /// Qualifying diagnostic reports, with their entry index for write-back
    pub reports: Vec<(usize, DiagnosticReport)>,
    /// Document references whose decoded payload names the DNA data file
    pub carriers: Vec<DocumentReference>,
    /// All conditions, for the per-bundle summary
    pub conditions: Vec<Condition>,
}

/// Classify every bundle entry and collect the enrichment inputs.
///
/// # Errors
/// Propagates decode failures for the resources it inspects; everything else
/// is passed over untouched.
pub fn resolve(bundle: &Bundle) -> Result<BundleRefs> {
    let mut refs = BundleRefs::default();
    for (index, entry) in bundle.entry.iter().enumerate() {
        match entry.resource_type() {
            Some("Patient") => {
                refs.patient = Some(model::decode(&entry.resource)?);
            }
            Some("DiagnosticReport") => {
                let report: DiagnosticReport = model::decode(&entry.resource)?;
                if report.has_code(GENETIC_ANALYSIS_PANEL_CODE) {
                    refs.reports.push((index, report));
                }
            }
            Some("DocumentReference") => {
                let document: DocumentReference = model::decode(&entry.resource)?;
                if qualifies_as_carrier(&document)? {
                    refs.carriers.push(document);
                }
            }
            Some("Condition") => {
                refs.conditions.push(model::decode(&entry.resource)?);
            }
            _ => {}
        }
    }
    Ok(refs)
}

/// True if the document's decoded inline payload references the DNA data
/// file. Documents without an inline payload never qualify.
fn qualifies_as_carrier(document: &DocumentReference) -> Result<bool> {
    match document.inline_data() {
        Some(data) => Ok(decode_inline_text(data)?.contains(DNA_FILE_MARKER)),
        None => Ok(false),
    }
}
