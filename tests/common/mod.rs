//! Shared fixture builders for the integration tests
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

/// Report id used by most fixtures; must parse as a UUID for derivation
pub const REPORT_ID: &str = "1b5b1b63-0a72-4b86-97a9-4a2a2e1070e5";

/// Second report id for multi-report bundles
pub const OTHER_REPORT_ID: &str = "7e4c1de2-9c30-44e6-8a6f-0f8e2f9f2b11";

/// Note text naming the stored DNA file, as the source reports phrase it
/// (the double space before "stored" is part of the format)
pub fn dna_note_text(csv_path: &str) -> String {
    format!(
        "History of present illness\n\
         genetic analysis summary panel  stored in {csv_path}\n\
         Plan\n"
    )
}

pub fn encode_note(text: &str) -> String {
    STANDARD.encode(text)
}

pub fn patient_resource(id: &str) -> Value {
    json!({
        "resourceType": "Patient",
        "id": id,
        "gender": "female"
    })
}

pub fn condition_resource(code: &str, display: &str) -> Value {
    json!({
        "resourceType": "Condition",
        "id": "condition-1",
        "code": { "coding": [{ "code": code, "display": display }] }
    })
}

pub fn report_resource(id: &str, panel_code: &str, subject: &str) -> Value {
    json!({
        "resourceType": "DiagnosticReport",
        "id": id,
        "status": "final",
        "code": { "coding": [{ "code": panel_code, "display": "Genetic analysis summary panel" }] },
        "subject": { "reference": subject }
    })
}

pub fn note_resource(id: &str, note_text: &str) -> Value {
    json!({
        "resourceType": "DocumentReference",
        "id": id,
        "status": "current",
        "content": [{ "attachment": { "contentType": "text/plain", "data": encode_note(note_text) } }]
    })
}

pub fn bundle_with(resources: Vec<Value>) -> Value {
    json!({
        "resourceType": "Bundle",
        "type": "transaction",
        "entry": resources.into_iter().map(|r| json!({ "resource": r })).collect::<Vec<_>>()
    })
}

/// A bundle that fully qualifies for enrichment: patient P1, one diabetes
/// condition, one genetic panel report and the note carrying the DNA file
pub fn qualifying_bundle() -> Value {
    bundle_with(vec![
        patient_resource("P1"),
        condition_resource("E11.9", "Type 2 diabetes"),
        report_resource(REPORT_ID, "55232-3", "Patient/P1"),
        note_resource("note-1", &dna_note_text("/data/p1_dna.csv")),
    ])
}
