//! Unit tests for the JSON and base64 boundary adapters.

use super::helpers::{FixedClock, clock};
use crate::message::adapters::binary::decode_preview;
use crate::message::adapters::json::{
    ResponseBuckets, decode_message, decode_messages, encode_message,
};
use crate::message::domain::{BinaryDraft, Category, Field, Notes, WireMessage};
use crate::message::error::NormalizationError;
use crate::message::normalization::{AwkwardKey, assemble_outbound};
use crate::message::samples::initial_form;
use rstest::rstest;
use serde_json::{Value, json};

fn minimal(extra: Value) -> Value {
    let mut value = json!({
        "id": 1,
        "text": "",
        "createdAt": "2024-05-01T12:00:00Z",
        "category": "A"
    });
    if let (Some(target), Value::Object(fields)) = (value.as_object_mut(), extra) {
        target.extend(fields);
    }
    value
}

// ============================================================================
// JSON decoding
// ============================================================================

#[rstest]
fn decodes_minimal_message() {
    let wire = decode_message(minimal(json!({}))).expect("conforming payload");
    assert_eq!(wire.id, 1);
    assert_eq!(wire.category, Category::A);
    assert_eq!(wire.active, None);
    assert!(wire.items.is_absent());
}

#[rstest]
#[case(json!({ "_class": "w", "withSpace": "x" }))]
#[case(json!({ "class": "w", "with space": "x" }))]
fn accepts_either_naming(#[case] extra: Value) {
    let wire = decode_message(minimal(extra)).expect("conforming payload");
    assert_eq!(wire.awkward.get(AwkwardKey::Class), &Field::Present("w".to_owned()));
    assert_eq!(wire.awkward.get(AwkwardKey::WithSpace), &Field::Present("x".to_owned()));
}

#[rstest]
fn nulls_and_empties_stay_distinct() {
    let wire = decode_message(minimal(json!({
        "items": null,
        "notes": { "comment": "c" },
        "binaryData": "",
        "meta": { "tags": [] },
        "displayName": null
    })))
    .expect("conforming payload");

    assert!(wire.items.is_null());
    assert!(matches!(wire.notes, Field::Present(Notes::Structured(_))));
    assert_eq!(wire.binary_data, Field::Present(String::new()));
    assert_eq!(wire.meta.map(|meta| meta.tags), Some(Field::Present(Vec::new())));
    assert!(wire.awkward.display_name.is_null());
}

#[rstest]
#[case(json!([1, 2]))]
#[case(json!("message"))]
#[case(Value::Null)]
fn rejects_non_objects(#[case] value: Value) {
    assert_eq!(decode_message(value), Err(NormalizationError::NotAnObject));
}

#[rstest]
#[case(json!({ "text": "", "createdAt": "2024-05-01T12:00:00Z", "category": "A" }))]
#[case(minimal(json!({ "category": "E" })))]
#[case(minimal(json!({ "createdAt": "yesterday" })))]
#[case(minimal(json!({ "items": [{ "quantity": 1 }] })))]
#[case(minimal(json!({ "dateOnly": "2024-02-30" })))]
fn rejects_schema_violations(#[case] value: Value) {
    assert!(matches!(
        decode_message(value),
        Err(NormalizationError::MalformedWire(_))
    ));
}

#[rstest]
fn list_decoding_names_failing_entry() {
    let result = decode_messages(vec![minimal(json!({})), json!(7)]);
    assert_eq!(
        result,
        Err(NormalizationError::malformed_entry(1, NormalizationError::NotAnObject))
    );
}

#[rstest]
fn encoded_assembly_decodes_back(clock: FixedClock) {
    let wire = assemble_outbound(&initial_form(&clock), &clock);
    let json = encode_message(&wire).expect("serialise");
    assert_eq!(decode_message(json), Ok(wire));
}

#[rstest]
fn buckets_invert_every_list(clock: FixedClock) {
    let one = WireMessage::new(1, "a", clock.0, Category::A);
    let two = WireMessage::new(2, "b", clock.0, Category::B);

    let buckets = ResponseBuckets::from_wire(&[one.clone()], &[], &[one, two], &[]);
    assert_eq!(buckets.len(), 3);
    assert!(!buckets.is_empty());
    assert_eq!(buckets.java.len(), 1);
    assert_eq!(buckets.python.get(1).map(|local| local.id), Some(2));
    assert!(ResponseBuckets::default().is_empty());
}

// ============================================================================
// Binary staging
// ============================================================================

#[rstest]
fn bytes_stage_as_padded_base64() {
    let draft = BinaryDraft::from_bytes(b"Sample Base64", "sample.bin");
    assert_eq!(draft.text, "U2FtcGxlIEJhc2U2NA==");
    assert_eq!(draft.filename, "sample.bin");
    assert!(!draft.null);
}

#[rstest]
#[case("data:text/plain;base64,SGVsbG8=", "SGVsbG8=")]
#[case("data:,", "")]
#[case("no-comma", "")]
fn data_url_payload_is_staged(#[case] url: &str, #[case] expected: &str) {
    assert_eq!(BinaryDraft::from_data_url(url, "f").text, expected);
}

#[rstest]
fn preview_decodes_staged_text() {
    assert_eq!(decode_preview("U2FtcGxlIEJhc2U2NA=="), Ok(b"Sample Base64".to_vec()));
    assert_eq!(decode_preview(""), Ok(Vec::new()));
}

#[rstest]
#[case("not base64!")]
#[case("SGVsbG8")]
fn preview_rejects_invalid_base64(#[case] text: &str) {
    assert!(matches!(
        decode_preview(text),
        Err(NormalizationError::InvalidBase64(_))
    ));
}
