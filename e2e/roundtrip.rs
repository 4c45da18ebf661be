//! E2E Test Suite 02: Structural round-trips and the measure/write contract.
//!
//! For every sample message: `parse(write(m)) == m`, and `measure_record(m)`
//! equals the number of bytes `write` produced, across blob cursors, heap
//! buffers and off-heap buffers.

mod models {
    include!("models.rs");
}

use models::*;
use pbwire::buffer::{BufferedData, SequentialData};
use pbwire::codec::{Codec, DEFAULT_MAX_DEPTH};
use pbwire::parser;
use pbwire::schema::WireType;

// ─────────────────────────────────────────────────────────────────────────────
// Round-trips through Bytes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn everything_round_trips_structurally() {
    let m = everything_sample();
    let encoded = EVERYTHING.to_bytes(&m).expect("encode");
    assert_eq!(encoded.len(), EVERYTHING.measure_record(&m));
    let back = EVERYTHING.parse_bytes(&encoded).expect("parse");
    assert_eq!(back, m);
}

#[test]
fn default_instance_writes_zero_bytes() {
    let m = EVERYTHING.default_instance();
    assert_eq!(EVERYTHING.measure_record(&m), 0);
    let encoded = EVERYTHING.to_bytes(&m).expect("encode");
    assert!(encoded.is_empty());
    // An empty input parses back to the default instance.
    assert_eq!(EVERYTHING.parse_bytes(&encoded).expect("parse"), m);
}

#[test]
fn nested_chain_round_trips() {
    let chain = chain_of(5);
    let encoded = CHAIN.to_bytes(&chain).expect("encode");
    assert_eq!(encoded.len(), CHAIN.measure_record(&chain));
    assert_eq!(CHAIN.parse_bytes(&encoded).expect("parse"), chain);
}

#[test]
fn measure_matches_written_length_across_samples() {
    let samples = Samples {
        values: vec![0, -1, i32::MIN, i32::MAX, 64],
    };
    let ts = Timestamp {
        seconds: -1,
        nanos: i32::MAX,
    };
    assert_eq!(
        SAMPLES.to_bytes(&samples).unwrap().len(),
        SAMPLES.measure_record(&samples)
    );
    assert_eq!(
        TIMESTAMP.to_bytes(&ts).unwrap().len(),
        TIMESTAMP.measure_record(&ts)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trips through buffers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn heap_buffer_write_flip_parse() {
    let m = everything_sample();
    let size = EVERYTHING.measure_record(&m);
    let mut buf = BufferedData::allocate(size);
    EVERYTHING.write(&m, &mut buf).expect("write");
    assert_eq!(buf.position(), size as u64, "write fills the buffer exactly");

    buf.flip();
    let back = EVERYTHING
        .parse(&mut buf, false, true, DEFAULT_MAX_DEPTH)
        .expect("parse");
    assert_eq!(back, m);
}

#[test]
fn off_heap_buffer_write_flip_parse() {
    let m = everything_sample();
    let size = EVERYTHING.measure_record(&m);
    let mut buf = BufferedData::allocate_off_heap(size).expect("mmap");
    EVERYTHING.write(&m, &mut buf).expect("write");
    buf.flip();
    let back = EVERYTHING
        .parse(&mut buf, false, true, DEFAULT_MAX_DEPTH)
        .expect("parse");
    assert_eq!(back, m);
}

#[test]
fn exact_size_buffer_overflows_when_one_byte_short() {
    let m = everything_sample();
    let size = EVERYTHING.measure_record(&m);
    let mut buf = BufferedData::allocate(size - 1);
    assert!(
        EVERYTHING.write(&m, &mut buf).is_err(),
        "a buffer one byte too small must overflow"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire-level ordering and fast_equals
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn tags_are_emitted_in_field_number_order() {
    let encoded = EVERYTHING.to_bytes(&everything_sample()).expect("encode");
    let mut cursor = encoded.open();
    let mut last = 0i32;
    while let Some((number, wire)) = parser::read_tag(&mut cursor).expect("tag") {
        assert!(
            number >= last,
            "field {number} emitted after field {last}"
        );
        last = number;
        parser::skip_field(&mut cursor, wire, parser::DEFAULT_MAX_SIZE).expect("skip");
    }
    assert_eq!(last, 28, "the highest populated field closes the record");
}

#[test]
fn skipping_every_field_consumes_the_whole_record() {
    // A schema-less walk over a full record: read_tag + skip_field must land
    // exactly on the end of input for every wire type in the message.
    let encoded = EVERYTHING.to_bytes(&everything_sample()).expect("encode");
    let mut cursor = encoded.open();
    let mut seen = [false; 4];
    while let Some((_, wire)) = parser::read_tag(&mut cursor).expect("tag") {
        seen[match wire {
            WireType::Varint => 0,
            WireType::Fixed64 => 1,
            WireType::Delimited => 2,
            WireType::Fixed32 => 3,
        }] = true;
        parser::skip_field(&mut cursor, wire, parser::DEFAULT_MAX_SIZE).expect("skip");
    }
    assert!(!cursor.has_remaining());
    assert_eq!(seen, [true; 4], "sample must exercise all four wire types");
}

#[test]
fn fast_equals_matches_parse_then_compare() {
    let m = everything_sample();
    let encoded = EVERYTHING.to_bytes(&m).expect("encode");

    assert!(EVERYTHING
        .fast_equals(&m, &mut encoded.open())
        .expect("fast_equals"));

    let mut other = m.clone();
    other.a_uint32 += 1;
    assert!(!EVERYTHING
        .fast_equals(&other, &mut encoded.open())
        .expect("fast_equals"));
}

#[test]
fn parse_bytes_of_foreign_default_values_round_trips() {
    // A peer that does not elide defaults may legally send `0`; lenient
    // parsing accepts it and the value is indistinguishable from an unset
    // field afterwards.
    let explicit_zero = pbwire::Bytes::from_static(&[0x08, 0x00]); // seconds = 0
    let ts = TIMESTAMP.parse_bytes(&explicit_zero).expect("parse");
    assert_eq!(ts, Timestamp::default());
    assert_eq!(TIMESTAMP.measure_record(&ts), 0);
}
