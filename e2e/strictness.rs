//! E2E Test Suite 03: Parse-flag semantics, malformed input, recursion guard
//! and lazy extraction.
//!
//! - unknown fields: skipped leniently, fatal under `strict` or without
//!   `parse_unknown`
//! - strict rejection of explicitly encoded default values
//! - group wire types, oversized varints, bad bools
//! - `max_depth` failing exactly when the allowance runs out
//! - `extract_field_bytes` returning raw sub-message payloads

mod models {
    include!("models.rs");
}

use models::*;
use pbwire::codec::{Codec, DEFAULT_MAX_DEPTH};
use pbwire::error::WireError;
use pbwire::parser;
use pbwire::Bytes;

// ─────────────────────────────────────────────────────────────────────────────
// Unknown fields
// ─────────────────────────────────────────────────────────────────────────────

/// Field 1 = 7, then unknown field 99 (wire VARINT, value 42).
fn input_with_unknown_field() -> Bytes {
    Bytes::from_static(&[0x08, 0x07, 0x98, 0x06, 0x2A])
}

#[test]
fn lenient_parse_skips_unknown_fields() {
    let parsed = ONE_FIELD
        .parse(&mut input_with_unknown_field().open(), false, true, DEFAULT_MAX_DEPTH)
        .expect("lenient parse");
    assert_eq!(parsed, OneField { value: 7 });
}

#[test]
fn strict_parse_rejects_unknown_fields() {
    let err = ONE_FIELD
        .parse(&mut input_with_unknown_field().open(), true, true, DEFAULT_MAX_DEPTH)
        .unwrap_err();
    assert!(
        matches!(err, WireError::UnexpectedField(99)),
        "expected UnexpectedField(99), got {err:?}"
    );
}

#[test]
fn lenient_parse_without_opt_in_rejects_unknown_fields() {
    let err = ONE_FIELD
        .parse(&mut input_with_unknown_field().open(), false, false, DEFAULT_MAX_DEPTH)
        .unwrap_err();
    assert!(matches!(err, WireError::UnexpectedField(99)));
}

#[test]
fn strict_parse_rejects_explicit_default_values() {
    let explicit_zero = Bytes::from_static(&[0x08, 0x00]);
    let err = ONE_FIELD
        .parse(&mut explicit_zero.open(), true, false, DEFAULT_MAX_DEPTH)
        .unwrap_err();
    assert!(matches!(err, WireError::Malformed(_)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed input
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn group_wire_types_fail_the_parse() {
    for wire in [3u8, 4] {
        let input = Bytes::wrap(vec![(1 << 3) | wire]);
        let err = ONE_FIELD
            .parse(&mut input.open(), false, true, DEFAULT_MAX_DEPTH)
            .unwrap_err();
        assert!(matches!(err, WireError::Malformed(_)), "wire {wire}");
    }
}

#[test]
fn bool_above_one_is_malformed() {
    // Everything field 13 (bool) with value 3.
    let input = Bytes::from_static(&[0x68, 0x03]);
    let err = EVERYTHING
        .parse(&mut input.open(), false, true, DEFAULT_MAX_DEPTH)
        .unwrap_err();
    assert!(matches!(err, WireError::Malformed(_)));
}

#[test]
fn oversized_varint_is_malformed() {
    // Field 1 varint with 11 continuation bytes.
    let mut raw = vec![0x08];
    raw.extend([0x80u8; 11]);
    let err = ONE_FIELD
        .parse(&mut Bytes::wrap(raw).open(), false, true, DEFAULT_MAX_DEPTH)
        .unwrap_err();
    assert!(matches!(err, WireError::Malformed(_)));
}

#[test]
fn truncation_after_a_tag_is_fatal() {
    // Timestamp cut off inside the varint of field 1.
    let input = Bytes::from_static(&[0x08, 0xAE]);
    let err = TIMESTAMP
        .parse(&mut input.open(), false, true, DEFAULT_MAX_DEPTH)
        .unwrap_err();
    assert!(matches!(err, WireError::BufferUnderflow));
}

#[test]
fn truncated_nested_message_is_fatal() {
    // Chain field 2 announces 5 payload bytes but only 1 follows.
    let input = Bytes::from_static(&[0x12, 0x05, 0x08]);
    let err = CHAIN
        .parse(&mut input.open(), false, true, DEFAULT_MAX_DEPTH)
        .unwrap_err();
    assert!(matches!(err, WireError::BufferUnderflow));
}

// ─────────────────────────────────────────────────────────────────────────────
// Recursion guard
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn depth_33_chain_fails_with_max_depth_32() {
    let encoded = CHAIN.to_bytes(&chain_of(33)).expect("encode");
    let err = CHAIN
        .parse(&mut encoded.open(), false, true, 32)
        .unwrap_err();
    assert!(matches!(err, WireError::DepthExceeded));
}

#[test]
fn depth_32_chain_parses_with_max_depth_32() {
    let chain = chain_of(32);
    let encoded = CHAIN.to_bytes(&chain).expect("encode");
    let back = CHAIN
        .parse(&mut encoded.open(), false, true, 32)
        .expect("parse at the allowance boundary");
    assert_eq!(back, chain);
}

#[test]
fn depth_33_chain_parses_with_max_depth_33() {
    let chain = chain_of(33);
    let encoded = CHAIN.to_bytes(&chain).expect("encode");
    assert_eq!(
        CHAIN.parse(&mut encoded.open(), false, true, 33).expect("parse"),
        chain
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Lazy extraction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn extract_returns_the_raw_sub_message_payload() {
    let m = everything_sample();
    let encoded = EVERYTHING.to_bytes(&m).expect("encode");

    let extracted = parser::extract_field_bytes(&mut encoded.open(), &EV_CREATED)
        .expect("extract")
        .expect("created is present");

    // The raw payload is exactly what the nested codec would have written,
    // and parses independently later.
    let created = m.created.unwrap();
    assert_eq!(extracted, TIMESTAMP.to_bytes(&created).unwrap());
    assert_eq!(TIMESTAMP.parse_bytes(&extracted).unwrap(), created);
}

#[test]
fn extract_of_an_absent_field_returns_none() {
    let encoded = EVERYTHING
        .to_bytes(&Everything {
            a_int32: 5,
            ..Everything::default()
        })
        .expect("encode");
    let extracted =
        parser::extract_field_bytes(&mut encoded.open(), &EV_CREATED).expect("extract");
    assert!(extracted.is_none());
}

#[test]
fn extract_rejects_repeated_and_non_delimited_fields() {
    let encoded = EVERYTHING.to_bytes(&everything_sample()).expect("encode");
    assert!(matches!(
        parser::extract_field_bytes(&mut encoded.open(), &EV_COUNTS),
        Err(WireError::InvalidArgument(_))
    ));
    assert!(matches!(
        parser::extract_field_bytes(&mut encoded.open(), &EV_INT32),
        Err(WireError::InvalidArgument(_))
    ));
}

#[test]
fn extract_returns_the_first_occurrence() {
    // Two occurrences of "created"; a lenient reader keeps the later one, the
    // lazy extractor deliberately stops at the first.
    let first = TIMESTAMP
        .to_bytes(&Timestamp {
            seconds: 1,
            nanos: 0,
        })
        .unwrap();
    let second = TIMESTAMP
        .to_bytes(&Timestamp {
            seconds: 2,
            nanos: 0,
        })
        .unwrap();
    let mut raw = Vec::new();
    for payload in [&first, &second] {
        raw.push(0x8A); // field 17, wire LEN (two-byte tag)
        raw.push(0x01);
        raw.push(payload.len() as u8);
        raw.extend_from_slice(payload.as_slice());
    }
    let extracted = parser::extract_field_bytes(&mut Bytes::wrap(raw).open(), &EV_CREATED)
        .expect("extract")
        .expect("present");
    assert_eq!(extracted, first);
}
