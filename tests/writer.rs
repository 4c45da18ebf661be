// Unit tests for src/writer.rs:
//   - default elision for every scalar shape (no tag, size 0)
//   - oneof fields always carrying their tag
//   - optional wrapper framing, including present-default values
//   - packed list encoding and the empty-list rule
//   - exact agreement between write_* and size_of_* on every path

use pbwire::buffer::WriteStream;
use pbwire::bytes::Bytes;
use pbwire::error::Result;
use pbwire::schema::{FieldDefinition, FieldType};
use pbwire::writer;

fn emit(f: impl FnOnce(&mut WriteStream<Vec<u8>>) -> Result<()>) -> Vec<u8> {
    let mut out = WriteStream::new(Vec::new());
    f(&mut out).expect("write");
    out.into_inner()
}

const PLAIN_I32: FieldDefinition = FieldDefinition::new("v", FieldType::Int32, 1);
const ONEOF_I32: FieldDefinition = FieldDefinition::new("v", FieldType::Int32, 1).oneof();
const PLAIN_STR: FieldDefinition = FieldDefinition::new("s", FieldType::String, 2);
const ONEOF_STR: FieldDefinition = FieldDefinition::new("s", FieldType::String, 2).oneof();
const PLAIN_BOOL: FieldDefinition = FieldDefinition::new("b", FieldType::Bool, 3);
const PLAIN_F64: FieldDefinition = FieldDefinition::new("d", FieldType::Double, 4);
const PLAIN_FIX32: FieldDefinition = FieldDefinition::new("x", FieldType::Fixed32, 5);
const HIGH_FIELD: FieldDefinition = FieldDefinition::new("hi", FieldType::Int32, 16);

// ─────────────────────────────────────────────────────────────────────────────
// Default elision
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn defaults_write_nothing_and_measure_zero() {
    assert!(emit(|o| writer::write_int32(o, &PLAIN_I32, 0)).is_empty());
    assert_eq!(writer::size_of_int32(&PLAIN_I32, 0), 0);

    assert!(emit(|o| writer::write_string(o, &PLAIN_STR, "")).is_empty());
    assert_eq!(writer::size_of_string(&PLAIN_STR, ""), 0);

    assert!(emit(|o| writer::write_bool(o, &PLAIN_BOOL, false)).is_empty());
    assert_eq!(writer::size_of_bool(&PLAIN_BOOL, false), 0);

    assert!(emit(|o| writer::write_double(o, &PLAIN_F64, 0.0)).is_empty());
    assert_eq!(writer::size_of_double(&PLAIN_F64, 0.0), 0);

    assert!(emit(|o| writer::write_fixed32(o, &PLAIN_FIX32, 0)).is_empty());
    assert_eq!(writer::size_of_fixed32(&PLAIN_FIX32, 0), 0);

    let empty = Bytes::empty();
    let bytes_field = FieldDefinition::new("p", FieldType::Bytes, 6);
    assert!(emit(|o| writer::write_bytes(o, &bytes_field, &empty)).is_empty());
    assert_eq!(writer::size_of_bytes(&bytes_field, &empty), 0);
}

#[test]
fn negative_zero_floats_count_as_default() {
    assert!(emit(|o| writer::write_double(o, &PLAIN_F64, -0.0)).is_empty());
    let float_field = FieldDefinition::new("f", FieldType::Float, 7);
    assert!(emit(|o| writer::write_float(o, &float_field, -0.0)).is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Oneof policy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn oneof_default_values_still_carry_their_tag() {
    assert_eq!(emit(|o| writer::write_int32(o, &ONEOF_I32, 0)), vec![0x08, 0x00]);
    assert_eq!(writer::size_of_int32(&ONEOF_I32, 0), 2);

    assert_eq!(
        emit(|o| writer::write_string(o, &ONEOF_STR, "")),
        vec![0x12, 0x00]
    );
    assert_eq!(writer::size_of_string(&ONEOF_STR, ""), 2);
}

#[test]
fn oneof_absent_message_emits_tag_with_length_zero() {
    // A message-typed oneof variant that is set but holds nothing.
    struct NullCodec;
    impl pbwire::Codec for NullCodec {
        type Message = ();
        fn parse(
            &self,
            _input: &mut impl pbwire::ReadableSequentialData,
            _strict: bool,
            _parse_unknown: bool,
            _max_depth: u32,
        ) -> Result<()> {
            Ok(())
        }
        fn write(
            &self,
            _item: &(),
            _out: &mut impl pbwire::WritableSequentialData,
        ) -> Result<()> {
            Ok(())
        }
        fn measure_record(&self, _item: &()) -> usize {
            0
        }
        fn default_instance(&self) {}
    }

    let field = FieldDefinition::new("m", FieldType::Message, 3).oneof();
    assert_eq!(
        emit(|o| writer::write_message(o, &field, None, &NullCodec)),
        vec![0x1A, 0x00]
    );
    assert_eq!(writer::size_of_message(&field, None, &NullCodec), 2);

    // Outside a oneof, an absent message writes nothing at all.
    let plain = FieldDefinition::new("m", FieldType::Message, 3);
    assert!(emit(|o| writer::write_message(o, &plain, None, &NullCodec)).is_empty());
    assert_eq!(writer::size_of_message(&plain, None, &NullCodec), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Optional wrappers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn wrapper_framing_for_present_values() {
    let field = FieldDefinition::new("w", FieldType::Message, 1).optional();

    assert!(emit(|o| writer::write_optional_int32(o, &field, None)).is_empty());
    assert_eq!(writer::size_of_optional_int32(&field, None), 0);

    // Present zero keeps its inner field: outer tag, length 2, inner tag, 0.
    assert_eq!(
        emit(|o| writer::write_optional_int32(o, &field, Some(0))),
        vec![0x0A, 0x02, 0x08, 0x00]
    );
    assert_eq!(writer::size_of_optional_int32(&field, Some(0)), 4);

    assert_eq!(
        emit(|o| writer::write_optional_uint64(o, &field, Some(300))),
        vec![0x0A, 0x03, 0x08, 0xAC, 0x02]
    );

    // Present empty string: outer tag, length 2, inner tag, length 0.
    assert_eq!(
        emit(|o| writer::write_optional_string(o, &field, Some(""))),
        vec![0x0A, 0x02, 0x0A, 0x00]
    );
    assert_eq!(writer::size_of_optional_string(&field, Some("")), 4);

    // Doubles are nine fixed payload bytes behind the inner tag.
    let mut expected = vec![0x0A, 0x09, 0x09];
    expected.extend_from_slice(&0.0f64.to_bits().to_le_bytes());
    assert_eq!(
        emit(|o| writer::write_optional_double(o, &field, Some(0.0))),
        expected
    );
    assert_eq!(writer::size_of_optional_double(&field, Some(0.0)), 11);
}

#[test]
fn wrapper_sizes_match_writes_across_values() {
    let field = FieldDefinition::new("w", FieldType::Message, 9).optional();
    for v in [0i64, 1, -1, i64::MIN, i64::MAX] {
        let raw = emit(|o| writer::write_optional_int64(o, &field, Some(v)));
        assert_eq!(raw.len(), writer::size_of_optional_int64(&field, Some(v)), "value {v}");

        let raw = emit(|o| writer::write_optional_sint64(o, &field, Some(v)));
        assert_eq!(raw.len(), writer::size_of_optional_sint64(&field, Some(v)), "sint {v}");
    }
    let blob = Bytes::from_static(&[1, 2, 3]);
    let raw = emit(|o| writer::write_optional_bytes(o, &field, Some(&blob)));
    assert_eq!(raw.len(), writer::size_of_optional_bytes(&field, Some(&blob)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Packed lists
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn packed_scalars_share_one_tag_and_length() {
    let field = FieldDefinition::new("v", FieldType::Int32, 4).repeated();
    assert_eq!(
        emit(|o| writer::write_int32_list(o, &field, &[1, 2, 127, 128])),
        vec![0x22, 0x05, 0x01, 0x02, 0x7F, 0x80, 0x01]
    );
    assert_eq!(
        writer::size_of_int32_list(&field, &[1, 2, 127, 128]),
        7
    );

    let fix = FieldDefinition::new("x", FieldType::Fixed32, 1).repeated();
    assert_eq!(
        emit(|o| writer::write_fixed32_list(o, &fix, &[1, 2])),
        vec![0x0A, 0x08, 1, 0, 0, 0, 2, 0, 0, 0]
    );

    let bools = FieldDefinition::new("b", FieldType::Bool, 1).repeated();
    assert_eq!(
        emit(|o| writer::write_bool_list(o, &bools, &[true, false, true])),
        vec![0x0A, 0x03, 1, 0, 1]
    );
}

#[test]
fn empty_lists_write_nothing() {
    let field = FieldDefinition::new("v", FieldType::SInt64, 4).repeated();
    assert!(emit(|o| writer::write_sint64_list(o, &field, &[])).is_empty());
    assert_eq!(writer::size_of_sint64_list(&field, &[]), 0);

    let strs = FieldDefinition::new("s", FieldType::String, 2).repeated();
    let no_strings: [&str; 0] = [];
    assert!(emit(|o| writer::write_string_list(o, &strs, &no_strings)).is_empty());
}

#[test]
fn packed_sizes_match_writes_for_every_scalar_list() {
    let f = |t, n| FieldDefinition::new("r", t, n).repeated();

    let d = f(FieldType::Double, 1);
    let raw = emit(|o| writer::write_double_list(o, &d, &[0.0, -1.5]));
    assert_eq!(raw.len(), writer::size_of_double_list(&d, &[0.0, -1.5]));

    let s32 = f(FieldType::SInt32, 2);
    let raw = emit(|o| writer::write_sint32_list(o, &s32, &[-1, 1, i32::MIN]));
    assert_eq!(raw.len(), writer::size_of_sint32_list(&s32, &[-1, 1, i32::MIN]));

    let u64s = f(FieldType::UInt64, 3);
    let raw = emit(|o| writer::write_uint64_list(o, &u64s, &[0, u64::MAX]));
    assert_eq!(raw.len(), writer::size_of_uint64_list(&u64s, &[0, u64::MAX]));

    let sf64 = f(FieldType::SFixed64, 4);
    let raw = emit(|o| writer::write_sfixed64_list(o, &sf64, &[-1, 1]));
    assert_eq!(raw.len(), writer::size_of_sfixed64_list(&sf64, &[-1, 1]));

    let e = f(FieldType::Enum, 5);
    let raw = emit(|o| writer::write_enum_list(o, &e, &[0, 1, 2]));
    assert_eq!(raw.len(), writer::size_of_enum_list(&e, &[0, 1, 2]));
}

// ─────────────────────────────────────────────────────────────────────────────
// Tagged lists and tag arithmetic
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn string_list_tags_every_entry() {
    let field = FieldDefinition::new("s", FieldType::String, 2).repeated();
    assert_eq!(
        emit(|o| writer::write_string_list(o, &field, &["ab", ""])),
        vec![0x12, 0x02, b'a', b'b', 0x12, 0x00],
        "empty entries still get their tag, unlike elided singular strings"
    );
    assert_eq!(writer::size_of_string_list(&field, &["ab", ""]), 6);
}

#[test]
fn bytes_list_tags_every_entry() {
    let field = FieldDefinition::new("p", FieldType::Bytes, 1).repeated();
    let values = [Bytes::empty(), Bytes::from_static(&[9])];
    assert_eq!(
        emit(|o| writer::write_bytes_list(o, &field, &values)),
        vec![0x0A, 0x00, 0x0A, 0x01, 0x09]
    );
    assert_eq!(writer::size_of_bytes_list(&field, &values), 5);
}

#[test]
fn two_byte_tags_above_field_15() {
    // Field 16 varint: tag 128 = 0x80 0x01.
    assert_eq!(writer::size_of_tag(&HIGH_FIELD), 2);
    assert_eq!(
        emit(|o| writer::write_int32(o, &HIGH_FIELD, 1)),
        vec![0x80, 0x01, 0x01]
    );
    assert_eq!(writer::size_of_int32(&HIGH_FIELD, 1), 3);
}

#[test]
fn size_of_delimited_sums_tag_length_and_payload() {
    let field = FieldDefinition::new("p", FieldType::Bytes, 1);
    assert_eq!(writer::size_of_delimited(&field, 0), 2);
    assert_eq!(writer::size_of_delimited(&field, 127), 129);
    assert_eq!(writer::size_of_delimited(&field, 128), 131);
}

#[test]
fn negative_int32_costs_ten_payload_bytes() {
    let raw = emit(|o| writer::write_int32(o, &PLAIN_I32, -1));
    assert_eq!(raw.len(), 11, "one tag byte plus ten varint bytes");
    assert_eq!(writer::size_of_int32(&PLAIN_I32, -1), 11);
}
