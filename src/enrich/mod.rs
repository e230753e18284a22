//! Single-bundle enrichment
//!
//! The enrichment core: resolve the resources a bundle carries, rewrite the
//! genomic attachment, synthesize the specimen and task per qualifying
//! report, and append the new entries. Bundles without a qualifying report
//! pass through with their entry set untouched.

pub mod attachment;
pub mod ids;
pub mod resolver;
pub mod synthesize;

use itertools::Itertools;

use crate::error::{Result, TransformError};
use crate::model::{self, Bundle, BundleEntry};

pub use resolver::{BundleRefs, GENETIC_ANALYSIS_PANEL_CODE, resolve};

/// Per-bundle summary returned to the batch driver as a side channel for
/// later research-cohort construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleSummary {
    /// Identifier of the bundle's patient, absent if the bundle has none
    pub patient_id: Option<String>,
    /// `(code, display)` of every coded condition in the bundle
    pub conditions: Vec<(String, String)>,
}

/// Enrich one decoded bundle in place.
///
/// For every diagnostic report coded as a genetic analysis panel, a Specimen,
/// a rewritten DocumentReference copy and a Task are synthesized and appended
/// to the bundle's entries; the report itself gains a specimen reference.
/// Entry order is otherwise preserved.
///
/// # Errors
/// - [`TransformError::MissingDocumentCarrier`] if the bundle has qualifying
///   reports but not exactly one document reference naming the DNA data file
/// - [`TransformError::AttachmentFormatViolation`] if the carrier's payload
///   does not match the assumed report format
/// - [`TransformError::MalformedIdentifier`] if a report identifier cannot be
///   parsed for derivation
pub fn enrich_bundle(bundle: &mut Bundle) -> Result<BundleSummary> {
    let refs = resolve(bundle)?;

    if !refs.reports.is_empty() {
        log::debug!(
            "bundle has {} genetic analysis reports",
            refs.reports.len()
        );
        // Exactly one clinical note carries the DNA data per bundle; every
        // qualifying report shares it.
        let carrier = refs
            .carriers
            .iter()
            .exactly_one()
            .map_err(|found| TransformError::MissingDocumentCarrier {
                found: found.count(),
            })?;
        let rewritten = attachment::rewrite_as_url(carrier)?;

        let mut appended = Vec::new();
        for (index, mut report) in refs.reports {
            let synthesized = synthesize::synthesize(&mut report, &rewritten)?;
            bundle.entry[index].resource = model::encode(&report)?;
            appended.push(model::encode(&synthesized.specimen)?);
            appended.push(model::encode(&synthesized.document)?);
            appended.push(model::encode(&synthesized.task)?);
        }
        bundle
            .entry
            .extend(appended.into_iter().map(BundleEntry::new));
    }

    Ok(BundleSummary {
        patient_id: refs.patient.and_then(|p| p.id),
        conditions: refs
            .conditions
            .iter()
            .filter_map(model::Condition::coded_diagnosis)
            .collect(),
    })
}
