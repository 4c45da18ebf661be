//! E2E Test Suite 01: Known wire-format byte vectors.
//!
//! Pins the encoder to exact byte sequences and checks the decoder against
//! the same vectors:
//! - Timestamp `{seconds: 5678, nanos: 1234}` ⇔ `08 AE 2C 10 D2 09`
//! - packed repeated int32 `{1, 2, 127, 128}` at field 4 ⇔ `22 05 01 02 7F 80 01`
//! - unpacked input decoding to the same list
//! - optional (wrapper) fields: absent ⇔ zero bytes, present-zero ⇔ framed zero
//! - oneof tags emitted even for default payloads

mod models {
    include!("models.rs");
}

use models::*;
use pbwire::codec::Codec;
use pbwire::schema;

// ─────────────────────────────────────────────────────────────────────────────
// Timestamp vector
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn timestamp_encodes_to_reference_bytes() {
    let ts = Timestamp {
        seconds: 5678,
        nanos: 1234,
    };
    let encoded = TIMESTAMP.to_bytes(&ts).expect("encode");
    assert_eq!(
        encoded.as_slice(),
        hex::decode("08ae2c10d209").unwrap().as_slice(),
        "tag 1 varint 5678, tag 2 varint 1234"
    );
    assert_eq!(TIMESTAMP.measure_record(&ts), 6);
}

#[test]
fn timestamp_decodes_from_reference_bytes() {
    let encoded = pbwire::Bytes::from_static(&[0x08, 0xAE, 0x2C, 0x10, 0xD2, 0x09]);
    let ts = TIMESTAMP.parse_bytes(&encoded).expect("parse");
    assert_eq!(
        ts,
        Timestamp {
            seconds: 5678,
            nanos: 1234
        }
    );
}

#[test]
fn timestamp_field_table_resolves_numbers() {
    assert_eq!(
        schema::lookup(TIMESTAMP_FIELDS, 1).map(|f| f.name),
        Some("seconds")
    );
    assert_eq!(
        schema::lookup(TIMESTAMP_FIELDS, 2).map(|f| f.name),
        Some("nanos")
    );
    assert!(schema::lookup(TIMESTAMP_FIELDS, 3).is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Packed repeated int32
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn packed_int32_list_encodes_to_reference_bytes() {
    let samples = Samples {
        values: vec![1, 2, 127, 128],
    };
    let encoded = SAMPLES.to_bytes(&samples).expect("encode");
    assert_eq!(
        encoded.as_slice(),
        &[0x22, 0x05, 0x01, 0x02, 0x7F, 0x80, 0x01],
        "field 4 length-delimited, 5 payload bytes, four varints"
    );
    assert_eq!(SAMPLES.measure_record(&samples), encoded.len());
}

#[test]
fn packed_and_unpacked_inputs_decode_identically() {
    let packed = pbwire::Bytes::from_static(&[0x22, 0x05, 0x01, 0x02, 0x7F, 0x80, 0x01]);
    // The same four values as individually tagged varint entries (tag 0x20).
    let unpacked =
        pbwire::Bytes::from_static(&[0x20, 0x01, 0x20, 0x02, 0x20, 0x7F, 0x20, 0x80, 0x01]);

    let from_packed = SAMPLES.parse_bytes(&packed).expect("packed");
    let from_unpacked = SAMPLES.parse_bytes(&unpacked).expect("unpacked");
    assert_eq!(from_packed.values, vec![1, 2, 127, 128]);
    assert_eq!(from_packed, from_unpacked);
}

#[test]
fn empty_list_writes_nothing() {
    let encoded = SAMPLES.to_bytes(&Samples::default()).expect("encode");
    assert!(encoded.is_empty());
    assert_eq!(SAMPLES.measure_record(&Samples::default()), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Optional wrapper fields
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn absent_optional_writes_zero_bytes_and_round_trips_as_absent() {
    let encoded = WRAPPED.to_bytes(&Wrapped { x: None }).expect("encode");
    assert!(encoded.is_empty());
    let back = WRAPPED.parse_bytes(&encoded).expect("parse");
    assert_eq!(back.x, None);
}

#[test]
fn present_zero_optional_is_framed_with_its_inner_field() {
    let encoded = WRAPPED.to_bytes(&Wrapped { x: Some(0) }).expect("encode");
    // Outer tag, wrapper length 2, inner tag, value 0: presence survives even
    // though the payload is the default.
    assert_eq!(encoded.as_slice(), &[0x0A, 0x02, 0x08, 0x00]);
    assert_eq!(WRAPPED.measure_record(&Wrapped { x: Some(0) }), 4);

    let back = WRAPPED.parse_bytes(&encoded).expect("parse");
    assert_eq!(back.x, Some(0));
}

#[test]
fn present_nonzero_optional_round_trips() {
    for x in [1, -1, 127, 128, i32::MIN, i32::MAX] {
        let encoded = WRAPPED.to_bytes(&Wrapped { x: Some(x) }).expect("encode");
        assert_eq!(encoded.len(), WRAPPED.measure_record(&Wrapped { x: Some(x) }));
        let back = WRAPPED.parse_bytes(&encoded).expect("parse");
        assert_eq!(back.x, Some(x), "wrapped value {x}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Oneof fields
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn oneof_emits_tag_even_for_default_payload() {
    let m = Everything {
        choice: Some(Choice::Note(String::new())),
        ..Everything::default()
    };
    let encoded = EVERYTHING.to_bytes(&m).expect("encode");
    // Field 20, wire LEN: tag varint 0xA2 0x01, then length 0. An empty note
    // is still a set variant, so the tag must go out.
    assert_eq!(encoded.as_slice(), &[0xA2, 0x01, 0x00]);

    let back = EVERYTHING.parse_bytes(&encoded).expect("parse");
    assert_eq!(back.choice, Some(Choice::Note(String::new())));
}

#[test]
fn oneof_zero_level_round_trips_as_set_variant() {
    let m = Everything {
        choice: Some(Choice::Level(0)),
        ..Everything::default()
    };
    let encoded = EVERYTHING.to_bytes(&m).expect("encode");
    assert!(
        !encoded.is_empty(),
        "a set oneof variant at its default value must still be encoded"
    );
    let back = EVERYTHING.parse_bytes(&encoded).expect("parse");
    assert_eq!(back.choice, Some(Choice::Level(0)));
}
