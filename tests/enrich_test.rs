//! Tests for single-bundle enrichment: resolution, synthesis, attachment
//! rewriting and the per-bundle summary.

mod common;

use coherent_transform::model::{self, Bundle, DiagnosticReport, DocumentReference, Specimen, Task};
use coherent_transform::{TransformError, enrich_bundle};
use common::{
    OTHER_REPORT_ID, REPORT_ID, bundle_with, condition_resource, dna_note_text, note_resource,
    patient_resource, qualifying_bundle, report_resource,
};

fn decode_bundle(value: serde_json::Value) -> Bundle {
    serde_json::from_value(value).expect("fixture bundle should decode")
}

fn entries_of_type<'a>(bundle: &'a Bundle, resource_type: &str) -> Vec<&'a serde_json::Value> {
    bundle
        .entry
        .iter()
        .filter(|e| e.resource_type() == Some(resource_type))
        .map(|e| &e.resource)
        .collect()
}

#[test]
fn bundle_without_qualifying_reports_passes_through() {
    let raw = bundle_with(vec![
        patient_resource("P1"),
        condition_resource("E11.9", "Type 2 diabetes"),
        // wrong panel code, must not trigger enrichment
        report_resource(REPORT_ID, "58410-2", "Patient/P1"),
    ]);
    let mut bundle = decode_bundle(raw.clone());

    let summary = enrich_bundle(&mut bundle).expect("non-qualifying bundle should enrich");

    assert_eq!(serde_json::to_value(&bundle).unwrap(), raw);
    assert_eq!(summary.patient_id.as_deref(), Some("P1"));
}

#[test]
fn qualifying_bundle_gains_specimen_document_and_task() {
    let mut bundle = decode_bundle(qualifying_bundle());
    let original_entries = bundle.entry.len();

    enrich_bundle(&mut bundle).expect("qualifying bundle should enrich");

    assert_eq!(bundle.entry.len(), original_entries + 3);
    assert_eq!(entries_of_type(&bundle, "Specimen").len(), 1);
    assert_eq!(entries_of_type(&bundle, "Task").len(), 1);
    // original note plus the rewritten copy
    assert_eq!(entries_of_type(&bundle, "DocumentReference").len(), 2);

    // the report gained exactly one specimen reference
    let report: DiagnosticReport =
        model::decode(entries_of_type(&bundle, "DiagnosticReport")[0]).unwrap();
    let specimen: Specimen = model::decode(entries_of_type(&bundle, "Specimen")[0]).unwrap();
    assert_eq!(report.specimen.len(), 1);
    assert_eq!(
        report.specimen[0].reference.as_deref(),
        Some(format!("Specimen/{}", specimen.id).as_str())
    );
}

#[test]
fn end_to_end_p1_scenario() {
    let mut bundle = decode_bundle(qualifying_bundle());

    let summary = enrich_bundle(&mut bundle).expect("bundle should enrich");

    let specimen: Specimen = model::decode(entries_of_type(&bundle, "Specimen")[0]).unwrap();
    assert_eq!(
        specimen.subject.as_ref().and_then(|s| s.reference.as_deref()),
        Some("Patient/P1")
    );

    let task: Task = model::decode(entries_of_type(&bundle, "Task")[0]).unwrap();
    assert_eq!(task.status, "completed");
    assert_eq!(task.intent, "order");
    assert_eq!(
        task.focus.as_ref().and_then(|f| f.reference.as_deref()),
        Some(format!("Specimen/{}", specimen.id).as_str())
    );
    // outputs reference the report and the rewritten document
    let output_refs: Vec<_> = task
        .output
        .iter()
        .filter_map(|o| o.value_reference.reference.as_deref())
        .collect();
    assert_eq!(output_refs.len(), 2);
    assert!(output_refs[0].starts_with("DiagnosticReport/"));
    assert!(output_refs[1].starts_with("DocumentReference/"));

    // the rewritten copy is URL-addressed, the original still inline
    let documents = entries_of_type(&bundle, "DocumentReference");
    let rewritten: DocumentReference = model::decode(documents[1]).unwrap();
    let attachment = &rewritten.content[0].attachment;
    assert_eq!(attachment.url.as_deref(), Some("/data/p1_dna.csv"));
    assert!(attachment.data.is_none());
    let original: DocumentReference = model::decode(documents[0]).unwrap();
    assert!(original.inline_data().is_some());

    assert_eq!(summary.patient_id.as_deref(), Some("P1"));
    assert_eq!(
        summary.conditions,
        vec![("E11.9".to_string(), "Type 2 diabetes".to_string())]
    );
}

#[test]
fn synthesized_identifiers_are_deterministic() {
    let mut first = decode_bundle(qualifying_bundle());
    let mut second = decode_bundle(qualifying_bundle());

    enrich_bundle(&mut first).unwrap();
    enrich_bundle(&mut second).unwrap();

    let ids = |bundle: &Bundle| -> Vec<String> {
        bundle
            .entry
            .iter()
            .skip(4)
            .map(|e| e.resource["id"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first).len(), 3);
}

#[test]
fn missing_carrier_is_a_hard_invariant() {
    // qualifying report, but no note referencing the DNA file
    let mut bundle = decode_bundle(bundle_with(vec![
        patient_resource("P1"),
        report_resource(REPORT_ID, "55232-3", "Patient/P1"),
        note_resource("note-1", "plain clinical note, nothing genomic\n"),
    ]));

    let err = enrich_bundle(&mut bundle).unwrap_err();
    assert!(matches!(
        err,
        TransformError::MissingDocumentCarrier { found: 0 }
    ));
}

#[test]
fn two_carriers_are_rejected() {
    let mut bundle = decode_bundle(bundle_with(vec![
        report_resource(REPORT_ID, "55232-3", "Patient/P1"),
        note_resource("note-1", &dna_note_text("/data/a_dna.csv")),
        note_resource("note-2", &dna_note_text("/data/b_dna.csv")),
    ]));

    let err = enrich_bundle(&mut bundle).unwrap_err();
    assert!(matches!(
        err,
        TransformError::MissingDocumentCarrier { found: 2 }
    ));
}

#[test]
fn multiple_reports_share_the_carrier_with_distinct_ids() {
    let mut bundle = decode_bundle(bundle_with(vec![
        patient_resource("P1"),
        report_resource(REPORT_ID, "55232-3", "Patient/P1"),
        report_resource(OTHER_REPORT_ID, "55232-3", "Patient/P1"),
        note_resource("note-1", &dna_note_text("/data/p1_dna.csv")),
    ]));

    enrich_bundle(&mut bundle).expect("bundle should enrich");

    // one specimen/document/task triple per qualifying report
    assert_eq!(entries_of_type(&bundle, "Specimen").len(), 2);
    assert_eq!(entries_of_type(&bundle, "Task").len(), 2);
    assert_eq!(entries_of_type(&bundle, "DocumentReference").len(), 3);

    // every synthesized identifier is distinct
    let mut ids: Vec<&str> = bundle
        .entry
        .iter()
        .skip(4)
        .map(|e| e.resource["id"].as_str().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn unparseable_report_id_is_rejected() {
    let mut bundle = decode_bundle(bundle_with(vec![
        report_resource("report-1", "55232-3", "Patient/P1"),
        note_resource("note-1", &dna_note_text("/data/p1_dna.csv")),
    ]));

    let err = enrich_bundle(&mut bundle).unwrap_err();
    assert!(matches!(err, TransformError::MalformedIdentifier { .. }));
}
