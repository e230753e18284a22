//! Synthesis of Specimen and Task resources for one qualifying report
//!
//! Cross-references are weak `Type/id` strings, resolved by lookup within
//! the bundle, never owned. Each qualifying report gets its own
//! identifier-derived copy of the rewritten document reference so
//! synthesized identifiers never collide when several reports in one bundle
//! qualify.

use crate::enrich::ids::{IdRole, derive_id};
use crate::error::Result;
use crate::model::{DiagnosticReport, DocumentReference, Reference, Specimen, Task, TaskParameter};
use crate::model::types::Narrative;

/// The resources synthesized for one qualifying diagnostic report, in the
/// order they are appended to the bundle
#[derive(Debug, Clone)]
pub struct Synthesized {
    pub specimen: Specimen,
    pub document: DocumentReference,
    pub task: Task,
}

/// Build the specimen, per-report document copy and fulfillment task for one
/// qualifying report, wiring the cross-references between them. The report
/// is mutated in place: it gains a reference to the new specimen.
///
/// # Errors
/// Returns [`crate::TransformError::MalformedIdentifier`] if the report's
/// identifier cannot be parsed for derivation.
pub fn synthesize(
    report: &mut DiagnosticReport,
    rewritten_document: &DocumentReference,
) -> Result<Synthesized> {
    let report_id = report.id.clone().unwrap_or_default();

    let specimen = Specimen::new(
        derive_id(&report_id, IdRole::Specimen)?,
        report.subject.clone(),
    );
    let specimen_reference = Reference::to("Specimen", &specimen.id);
    report.specimen = vec![specimen_reference.clone()];

    let mut document = rewritten_document.clone();
    let document_id = derive_id(&report_id, IdRole::DocumentReferenceWithUrl)?;
    document.id = Some(document_id.clone());

    let task = Task {
        resource_type: "Task".to_string(),
        id: derive_id(&report_id, IdRole::Task)?,
        text: Some(Narrative::generated(
            "Autogenerated task. Inserted to make data model research friendly.",
        )),
        status: "completed".to_string(),
        intent: "order".to_string(),
        focus: Some(specimen_reference.clone()),
        input: vec![TaskParameter::new("specimen", specimen_reference)],
        output: vec![
            TaskParameter::new(
                "DiagnosticReport",
                Reference::to("DiagnosticReport", &report_id),
            ),
            TaskParameter::new(
                "DocumentReference",
                Reference::to("DocumentReference", &document_id),
            ),
        ],
    };

    Ok(Synthesized {
        specimen,
        document,
        task,
    })
}
