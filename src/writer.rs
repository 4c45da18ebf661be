//! Field writers and their exact-size counterparts.
//!
//! Every `write_*` function has a `size_of_*` twin that returns precisely the
//! number of bytes the write will produce; generated `measure_record`
//! implementations are sums of these, and the pair must never disagree.
//!
//! Encoding policies:
//!
//! - **Default elision.** A singular field that is neither `optional` nor part
//!   of a `oneof` is skipped entirely when its value is the language default
//!   (0, false, empty). Size 0, no tag.
//! - **Oneof.** The tag is always emitted, because the tag itself records
//!   which variant is set; a message-typed oneof holding nothing emits the
//!   tag with length 0.
//! - **Optional wrappers.** Encoded as a one-field sub-message at field
//!   number 1; an absent value writes nothing, a present value always writes
//!   the inner field, default or not.
//! - **Repeated scalars** are packed: one tag, one length, concatenated
//!   payloads. Strings, bytes and messages are emitted one tagged entry per
//!   element. Empty lists write nothing.
//! - **Messages** are measured first, then framed: tag, length varint, body.

use crate::buffer::WritableSequentialData;
use crate::bytes::Bytes;
use crate::codec::Codec;
use crate::error::Result;
use crate::schema::{FieldDefinition, FieldType, WireType};
use crate::utf8;
use crate::varint;

// Inner tags of the well-known wrapper sub-message: field number 1 with the
// wire type of the wrapped scalar.
const WRAPPER_VARINT_TAG: u8 = 0x08;
const WRAPPER_FIXED64_TAG: u8 = 0x09;
const WRAPPER_DELIMITED_TAG: u8 = 0x0A;
const WRAPPER_FIXED32_TAG: u8 = 0x0D;

#[inline]
fn check_type(field: &FieldDefinition, expected: FieldType) {
    debug_assert!(
        field.field_type == expected,
        "field `{}` is declared {:?}, written as {:?}",
        field.name,
        field.field_type,
        expected
    );
}

#[inline]
fn elides(field: &FieldDefinition, is_default: bool) -> bool {
    is_default && !field.oneof && !field.optional
}

/// Emit the tag for `field` with an explicit wire type.
#[inline]
fn write_tag(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    wire: WireType,
) -> Result<()> {
    out.write_var_u64(u64::from(((field.number as u32) << 3) | wire as u32))
}

/// Encoded size of the tag for `field`.
#[inline]
pub fn size_of_tag(field: &FieldDefinition) -> usize {
    varint::size_of_unsigned(u64::from(field.tag()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Varint-backed scalars
// ─────────────────────────────────────────────────────────────────────────────

fn write_varint_field(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    raw: u64,
    is_default: bool,
) -> Result<()> {
    if elides(field, is_default) {
        return Ok(());
    }
    write_tag(out, field, WireType::Varint)?;
    out.write_var_u64(raw)
}

fn size_of_varint_field(field: &FieldDefinition, raw: u64, is_default: bool) -> usize {
    if elides(field, is_default) {
        0
    } else {
        size_of_tag(field) + varint::size_of_unsigned(raw)
    }
}

/// Write an `int32` field.
pub fn write_int32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: i32,
) -> Result<()> {
    check_type(field, FieldType::Int32);
    write_varint_field(out, field, value as i64 as u64, value == 0)
}

/// Size of an `int32` field.
pub fn size_of_int32(field: &FieldDefinition, value: i32) -> usize {
    size_of_varint_field(field, value as i64 as u64, value == 0)
}

/// Write an `int64` field.
pub fn write_int64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: i64,
) -> Result<()> {
    check_type(field, FieldType::Int64);
    write_varint_field(out, field, value as u64, value == 0)
}

/// Size of an `int64` field.
pub fn size_of_int64(field: &FieldDefinition, value: i64) -> usize {
    size_of_varint_field(field, value as u64, value == 0)
}

/// Write a `uint32` field.
pub fn write_uint32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: u32,
) -> Result<()> {
    check_type(field, FieldType::UInt32);
    write_varint_field(out, field, u64::from(value), value == 0)
}

/// Size of a `uint32` field.
pub fn size_of_uint32(field: &FieldDefinition, value: u32) -> usize {
    size_of_varint_field(field, u64::from(value), value == 0)
}

/// Write a `uint64` field.
pub fn write_uint64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: u64,
) -> Result<()> {
    check_type(field, FieldType::UInt64);
    write_varint_field(out, field, value, value == 0)
}

/// Size of a `uint64` field.
pub fn size_of_uint64(field: &FieldDefinition, value: u64) -> usize {
    size_of_varint_field(field, value, value == 0)
}

/// Write an `sint32` field (zig-zag).
pub fn write_sint32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: i32,
) -> Result<()> {
    check_type(field, FieldType::SInt32);
    write_varint_field(
        out,
        field,
        u64::from(varint::zigzag_encode32(value)),
        value == 0,
    )
}

/// Size of an `sint32` field.
pub fn size_of_sint32(field: &FieldDefinition, value: i32) -> usize {
    size_of_varint_field(field, u64::from(varint::zigzag_encode32(value)), value == 0)
}

/// Write an `sint64` field (zig-zag).
pub fn write_sint64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: i64,
) -> Result<()> {
    check_type(field, FieldType::SInt64);
    write_varint_field(out, field, varint::zigzag_encode64(value), value == 0)
}

/// Size of an `sint64` field.
pub fn size_of_sint64(field: &FieldDefinition, value: i64) -> usize {
    size_of_varint_field(field, varint::zigzag_encode64(value), value == 0)
}

/// Write a `bool` field.
pub fn write_bool(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: bool,
) -> Result<()> {
    check_type(field, FieldType::Bool);
    write_varint_field(out, field, u64::from(value), !value)
}

/// Size of a `bool` field.
pub fn size_of_bool(field: &FieldDefinition, value: bool) -> usize {
    size_of_varint_field(field, u64::from(value), !value)
}

/// Write an `enum` field from its ordinal.
pub fn write_enum(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    ordinal: i32,
) -> Result<()> {
    check_type(field, FieldType::Enum);
    write_varint_field(out, field, ordinal as i64 as u64, ordinal == 0)
}

/// Size of an `enum` field.
pub fn size_of_enum(field: &FieldDefinition, ordinal: i32) -> usize {
    size_of_varint_field(field, ordinal as i64 as u64, ordinal == 0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-width scalars
// ─────────────────────────────────────────────────────────────────────────────

fn write_fixed_field(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    le_bytes: &[u8],
    is_default: bool,
) -> Result<()> {
    if elides(field, is_default) {
        return Ok(());
    }
    write_tag(out, field, field.field_type.wire_type())?;
    out.write_slice(le_bytes)
}

fn size_of_fixed_field(field: &FieldDefinition, width: usize, is_default: bool) -> usize {
    if elides(field, is_default) {
        0
    } else {
        size_of_tag(field) + width
    }
}

/// Write a `fixed32` field.
pub fn write_fixed32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: u32,
) -> Result<()> {
    check_type(field, FieldType::Fixed32);
    write_fixed_field(out, field, &value.to_le_bytes(), value == 0)
}

/// Size of a `fixed32` field.
pub fn size_of_fixed32(field: &FieldDefinition, value: u32) -> usize {
    size_of_fixed_field(field, 4, value == 0)
}

/// Write a `fixed64` field.
pub fn write_fixed64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: u64,
) -> Result<()> {
    check_type(field, FieldType::Fixed64);
    write_fixed_field(out, field, &value.to_le_bytes(), value == 0)
}

/// Size of a `fixed64` field.
pub fn size_of_fixed64(field: &FieldDefinition, value: u64) -> usize {
    size_of_fixed_field(field, 8, value == 0)
}

/// Write an `sfixed32` field.
pub fn write_sfixed32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: i32,
) -> Result<()> {
    check_type(field, FieldType::SFixed32);
    write_fixed_field(out, field, &value.to_le_bytes(), value == 0)
}

/// Size of an `sfixed32` field.
pub fn size_of_sfixed32(field: &FieldDefinition, value: i32) -> usize {
    size_of_fixed_field(field, 4, value == 0)
}

/// Write an `sfixed64` field.
pub fn write_sfixed64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: i64,
) -> Result<()> {
    check_type(field, FieldType::SFixed64);
    write_fixed_field(out, field, &value.to_le_bytes(), value == 0)
}

/// Size of an `sfixed64` field.
pub fn size_of_sfixed64(field: &FieldDefinition, value: i64) -> usize {
    size_of_fixed_field(field, 8, value == 0)
}

/// Write a `float` field.
pub fn write_float(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: f32,
) -> Result<()> {
    check_type(field, FieldType::Float);
    write_fixed_field(out, field, &value.to_bits().to_le_bytes(), value == 0.0)
}

/// Size of a `float` field.
pub fn size_of_float(field: &FieldDefinition, value: f32) -> usize {
    size_of_fixed_field(field, 4, value == 0.0)
}

/// Write a `double` field.
pub fn write_double(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: f64,
) -> Result<()> {
    check_type(field, FieldType::Double);
    write_fixed_field(out, field, &value.to_bits().to_le_bytes(), value == 0.0)
}

/// Size of a `double` field.
pub fn size_of_double(field: &FieldDefinition, value: f64) -> usize {
    size_of_fixed_field(field, 8, value == 0.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Length-delimited fields
// ─────────────────────────────────────────────────────────────────────────────

/// Size of a length-delimited field carrying `length` payload bytes:
/// tag, length varint, payload.
#[inline]
pub fn size_of_delimited(field: &FieldDefinition, length: usize) -> usize {
    size_of_tag(field) + varint::size_of_unsigned(length as u64) + length
}

/// Write a `string` field.
pub fn write_string(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: &str,
) -> Result<()> {
    check_type(field, FieldType::String);
    if elides(field, value.is_empty()) {
        return Ok(());
    }
    write_tag(out, field, WireType::Delimited)?;
    out.write_var_u64(utf8::encoded_len(value) as u64)?;
    out.write_utf8(value)
}

/// Size of a `string` field.
pub fn size_of_string(field: &FieldDefinition, value: &str) -> usize {
    if elides(field, value.is_empty()) {
        0
    } else {
        size_of_delimited(field, utf8::encoded_len(value))
    }
}

/// Write a `bytes` field.
pub fn write_bytes(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: &Bytes,
) -> Result<()> {
    check_type(field, FieldType::Bytes);
    if elides(field, value.is_empty()) {
        return Ok(());
    }
    write_tag(out, field, WireType::Delimited)?;
    out.write_var_u64(value.len() as u64)?;
    out.write_bytes(value)
}

/// Size of a `bytes` field.
pub fn size_of_bytes(field: &FieldDefinition, value: &Bytes) -> usize {
    if elides(field, value.is_empty()) {
        0
    } else {
        size_of_delimited(field, value.len())
    }
}

/// Write a message field.
///
/// An absent message writes nothing, except inside a `oneof`, where the
/// variant itself is the information and the tag goes out with length 0. A
/// present message is measured, framed and emitted.
pub fn write_message<C: Codec>(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<&C::Message>,
    codec: &C,
) -> Result<()> {
    check_type(field, FieldType::Message);
    match value {
        None if field.oneof => {
            write_tag(out, field, WireType::Delimited)?;
            out.write_var_u64(0)
        }
        None => Ok(()),
        Some(message) => {
            write_tag(out, field, WireType::Delimited)?;
            let body = codec.measure_record(message);
            out.write_var_u64(body as u64)?;
            codec.write(message, out)
        }
    }
}

/// Size of a message field.
pub fn size_of_message<C: Codec>(
    field: &FieldDefinition,
    value: Option<&C::Message>,
    codec: &C,
) -> usize {
    match value {
        None if field.oneof => size_of_tag(field) + 1,
        None => 0,
        Some(message) => size_of_delimited(field, codec.measure_record(message)),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Optional (well-known wrapper) fields
// ─────────────────────────────────────────────────────────────────────────────

fn write_wrapper_varint(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    raw: u64,
) -> Result<()> {
    write_tag(out, field, WireType::Delimited)?;
    out.write_var_u64(1 + varint::size_of_unsigned(raw) as u64)?;
    out.write_byte(WRAPPER_VARINT_TAG)?;
    out.write_var_u64(raw)
}

fn size_of_wrapper_varint(field: &FieldDefinition, raw: u64) -> usize {
    let body = 1 + varint::size_of_unsigned(raw);
    size_of_tag(field) + varint::size_of_unsigned(body as u64) + body
}

/// Write an optional `int32` (an `Int32Value` wrapper on the wire).
pub fn write_optional_int32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<i32>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => write_wrapper_varint(out, field, v as i64 as u64),
    }
}

/// Size of an optional `int32`.
pub fn size_of_optional_int32(field: &FieldDefinition, value: Option<i32>) -> usize {
    value.map_or(0, |v| size_of_wrapper_varint(field, v as i64 as u64))
}

/// Write an optional `int64` (`Int64Value`).
pub fn write_optional_int64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<i64>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => write_wrapper_varint(out, field, v as u64),
    }
}

/// Size of an optional `int64`.
pub fn size_of_optional_int64(field: &FieldDefinition, value: Option<i64>) -> usize {
    value.map_or(0, |v| size_of_wrapper_varint(field, v as u64))
}

/// Write an optional `uint32` (`UInt32Value`).
pub fn write_optional_uint32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<u32>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => write_wrapper_varint(out, field, u64::from(v)),
    }
}

/// Size of an optional `uint32`.
pub fn size_of_optional_uint32(field: &FieldDefinition, value: Option<u32>) -> usize {
    value.map_or(0, |v| size_of_wrapper_varint(field, u64::from(v)))
}

/// Write an optional `uint64` (`UInt64Value`).
pub fn write_optional_uint64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<u64>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => write_wrapper_varint(out, field, v),
    }
}

/// Size of an optional `uint64`.
pub fn size_of_optional_uint64(field: &FieldDefinition, value: Option<u64>) -> usize {
    value.map_or(0, |v| size_of_wrapper_varint(field, v))
}

/// Write an optional `sint32` (`SInt32Value`, zig-zag inner encoding).
pub fn write_optional_sint32(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<i32>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => write_wrapper_varint(out, field, u64::from(varint::zigzag_encode32(v))),
    }
}

/// Size of an optional `sint32`.
pub fn size_of_optional_sint32(field: &FieldDefinition, value: Option<i32>) -> usize {
    value.map_or(0, |v| {
        size_of_wrapper_varint(field, u64::from(varint::zigzag_encode32(v)))
    })
}

/// Write an optional `sint64` (`SInt64Value`, zig-zag inner encoding).
pub fn write_optional_sint64(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<i64>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => write_wrapper_varint(out, field, varint::zigzag_encode64(v)),
    }
}

/// Size of an optional `sint64`.
pub fn size_of_optional_sint64(field: &FieldDefinition, value: Option<i64>) -> usize {
    value.map_or(0, |v| size_of_wrapper_varint(field, varint::zigzag_encode64(v)))
}

/// Write an optional `bool` (`BoolValue`).
pub fn write_optional_bool(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<bool>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => write_wrapper_varint(out, field, u64::from(v)),
    }
}

/// Size of an optional `bool`.
pub fn size_of_optional_bool(field: &FieldDefinition, value: Option<bool>) -> usize {
    value.map_or(0, |v| size_of_wrapper_varint(field, u64::from(v)))
}

/// Write an optional `float` (`FloatValue`).
pub fn write_optional_float(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<f32>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => {
            write_tag(out, field, WireType::Delimited)?;
            out.write_var_u64(5)?;
            out.write_byte(WRAPPER_FIXED32_TAG)?;
            out.write_slice(&v.to_bits().to_le_bytes())
        }
    }
}

/// Size of an optional `float`.
pub fn size_of_optional_float(field: &FieldDefinition, value: Option<f32>) -> usize {
    value.map_or(0, |_| size_of_tag(field) + 1 + 5)
}

/// Write an optional `double` (`DoubleValue`).
pub fn write_optional_double(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<f64>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => {
            write_tag(out, field, WireType::Delimited)?;
            out.write_var_u64(9)?;
            out.write_byte(WRAPPER_FIXED64_TAG)?;
            out.write_slice(&v.to_bits().to_le_bytes())
        }
    }
}

/// Size of an optional `double`.
pub fn size_of_optional_double(field: &FieldDefinition, value: Option<f64>) -> usize {
    value.map_or(0, |_| size_of_tag(field) + 1 + 9)
}

/// Write an optional `string` (`StringValue`).
pub fn write_optional_string(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<&str>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(s) => {
            let payload = utf8::encoded_len(s);
            let body = 1 + varint::size_of_unsigned(payload as u64) + payload;
            write_tag(out, field, WireType::Delimited)?;
            out.write_var_u64(body as u64)?;
            out.write_byte(WRAPPER_DELIMITED_TAG)?;
            out.write_var_u64(payload as u64)?;
            out.write_utf8(s)
        }
    }
}

/// Size of an optional `string`.
pub fn size_of_optional_string(field: &FieldDefinition, value: Option<&str>) -> usize {
    value.map_or(0, |s| {
        let payload = utf8::encoded_len(s);
        let body = 1 + varint::size_of_unsigned(payload as u64) + payload;
        size_of_tag(field) + varint::size_of_unsigned(body as u64) + body
    })
}

/// Write an optional `bytes` (`BytesValue`).
pub fn write_optional_bytes(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    value: Option<&Bytes>,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(b) => {
            let body = 1 + varint::size_of_unsigned(b.len() as u64) + b.len();
            write_tag(out, field, WireType::Delimited)?;
            out.write_var_u64(body as u64)?;
            out.write_byte(WRAPPER_DELIMITED_TAG)?;
            out.write_var_u64(b.len() as u64)?;
            out.write_bytes(b)
        }
    }
}

/// Size of an optional `bytes`.
pub fn size_of_optional_bytes(field: &FieldDefinition, value: Option<&Bytes>) -> usize {
    value.map_or(0, |b| {
        let body = 1 + varint::size_of_unsigned(b.len() as u64) + b.len();
        size_of_tag(field) + varint::size_of_unsigned(body as u64) + body
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Repeated scalars (packed)
// ─────────────────────────────────────────────────────────────────────────────

fn write_packed<W, T, F>(
    out: &mut W,
    field: &FieldDefinition,
    values: &[T],
    payload: usize,
    mut emit: F,
) -> Result<()>
where
    W: WritableSequentialData,
    T: Copy,
    F: FnMut(&mut W, T) -> Result<()>,
{
    if values.is_empty() {
        return Ok(());
    }
    write_tag(out, field, WireType::Delimited)?;
    out.write_var_u64(payload as u64)?;
    for &v in values {
        emit(out, v)?;
    }
    Ok(())
}

#[inline]
fn size_of_packed(field: &FieldDefinition, count: usize, payload: usize) -> usize {
    if count == 0 {
        0
    } else {
        size_of_tag(field) + varint::size_of_unsigned(payload as u64) + payload
    }
}

/// Write a packed repeated `int32` field.
pub fn write_int32_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[i32],
) -> Result<()> {
    check_type(field, FieldType::Int32);
    let payload = values
        .iter()
        .map(|&v| varint::size_of_varint32(v))
        .sum::<usize>();
    write_packed(out, field, values, payload, |out, v| {
        out.write_var_int(v, false)
    })
}

/// Size of a packed repeated `int32` field.
pub fn size_of_int32_list(field: &FieldDefinition, values: &[i32]) -> usize {
    let payload = values
        .iter()
        .map(|&v| varint::size_of_varint32(v))
        .sum::<usize>();
    size_of_packed(field, values.len(), payload)
}

/// Write a packed repeated `int64` field.
pub fn write_int64_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[i64],
) -> Result<()> {
    check_type(field, FieldType::Int64);
    let payload = values
        .iter()
        .map(|&v| varint::size_of_varint64(v))
        .sum::<usize>();
    write_packed(out, field, values, payload, |out, v| {
        out.write_var_long(v, false)
    })
}

/// Size of a packed repeated `int64` field.
pub fn size_of_int64_list(field: &FieldDefinition, values: &[i64]) -> usize {
    let payload = values
        .iter()
        .map(|&v| varint::size_of_varint64(v))
        .sum::<usize>();
    size_of_packed(field, values.len(), payload)
}

/// Write a packed repeated `uint32` field.
pub fn write_uint32_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[u32],
) -> Result<()> {
    check_type(field, FieldType::UInt32);
    let payload = values
        .iter()
        .map(|&v| varint::size_of_unsigned(u64::from(v)))
        .sum::<usize>();
    write_packed(out, field, values, payload, |out, v| {
        out.write_var_u64(u64::from(v))
    })
}

/// Size of a packed repeated `uint32` field.
pub fn size_of_uint32_list(field: &FieldDefinition, values: &[u32]) -> usize {
    let payload = values
        .iter()
        .map(|&v| varint::size_of_unsigned(u64::from(v)))
        .sum::<usize>();
    size_of_packed(field, values.len(), payload)
}

/// Write a packed repeated `uint64` field.
pub fn write_uint64_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[u64],
) -> Result<()> {
    check_type(field, FieldType::UInt64);
    let payload = values
        .iter()
        .map(|&v| varint::size_of_unsigned(v))
        .sum::<usize>();
    write_packed(out, field, values, payload, |out, v| out.write_var_u64(v))
}

/// Size of a packed repeated `uint64` field.
pub fn size_of_uint64_list(field: &FieldDefinition, values: &[u64]) -> usize {
    let payload = values
        .iter()
        .map(|&v| varint::size_of_unsigned(v))
        .sum::<usize>();
    size_of_packed(field, values.len(), payload)
}

/// Write a packed repeated `sint32` field.
pub fn write_sint32_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[i32],
) -> Result<()> {
    check_type(field, FieldType::SInt32);
    let payload = values
        .iter()
        .map(|&v| varint::size_of_zigzag32(v))
        .sum::<usize>();
    write_packed(out, field, values, payload, |out, v| {
        out.write_var_int(v, true)
    })
}

/// Size of a packed repeated `sint32` field.
pub fn size_of_sint32_list(field: &FieldDefinition, values: &[i32]) -> usize {
    let payload = values
        .iter()
        .map(|&v| varint::size_of_zigzag32(v))
        .sum::<usize>();
    size_of_packed(field, values.len(), payload)
}

/// Write a packed repeated `sint64` field.
pub fn write_sint64_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[i64],
) -> Result<()> {
    check_type(field, FieldType::SInt64);
    let payload = values
        .iter()
        .map(|&v| varint::size_of_zigzag64(v))
        .sum::<usize>();
    write_packed(out, field, values, payload, |out, v| {
        out.write_var_long(v, true)
    })
}

/// Size of a packed repeated `sint64` field.
pub fn size_of_sint64_list(field: &FieldDefinition, values: &[i64]) -> usize {
    let payload = values
        .iter()
        .map(|&v| varint::size_of_zigzag64(v))
        .sum::<usize>();
    size_of_packed(field, values.len(), payload)
}

/// Write a packed repeated `fixed32` field.
pub fn write_fixed32_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[u32],
) -> Result<()> {
    check_type(field, FieldType::Fixed32);
    write_packed(out, field, values, values.len() * 4, |out, v| {
        out.write_slice(&v.to_le_bytes())
    })
}

/// Size of a packed repeated `fixed32` field.
pub fn size_of_fixed32_list(field: &FieldDefinition, values: &[u32]) -> usize {
    size_of_packed(field, values.len(), values.len() * 4)
}

/// Write a packed repeated `fixed64` field.
pub fn write_fixed64_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[u64],
) -> Result<()> {
    check_type(field, FieldType::Fixed64);
    write_packed(out, field, values, values.len() * 8, |out, v| {
        out.write_slice(&v.to_le_bytes())
    })
}

/// Size of a packed repeated `fixed64` field.
pub fn size_of_fixed64_list(field: &FieldDefinition, values: &[u64]) -> usize {
    size_of_packed(field, values.len(), values.len() * 8)
}

/// Write a packed repeated `sfixed32` field.
pub fn write_sfixed32_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[i32],
) -> Result<()> {
    check_type(field, FieldType::SFixed32);
    write_packed(out, field, values, values.len() * 4, |out, v| {
        out.write_slice(&v.to_le_bytes())
    })
}

/// Size of a packed repeated `sfixed32` field.
pub fn size_of_sfixed32_list(field: &FieldDefinition, values: &[i32]) -> usize {
    size_of_packed(field, values.len(), values.len() * 4)
}

/// Write a packed repeated `sfixed64` field.
pub fn write_sfixed64_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[i64],
) -> Result<()> {
    check_type(field, FieldType::SFixed64);
    write_packed(out, field, values, values.len() * 8, |out, v| {
        out.write_slice(&v.to_le_bytes())
    })
}

/// Size of a packed repeated `sfixed64` field.
pub fn size_of_sfixed64_list(field: &FieldDefinition, values: &[i64]) -> usize {
    size_of_packed(field, values.len(), values.len() * 8)
}

/// Write a packed repeated `float` field.
pub fn write_float_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[f32],
) -> Result<()> {
    check_type(field, FieldType::Float);
    write_packed(out, field, values, values.len() * 4, |out, v| {
        out.write_slice(&v.to_bits().to_le_bytes())
    })
}

/// Size of a packed repeated `float` field.
pub fn size_of_float_list(field: &FieldDefinition, values: &[f32]) -> usize {
    size_of_packed(field, values.len(), values.len() * 4)
}

/// Write a packed repeated `double` field.
pub fn write_double_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[f64],
) -> Result<()> {
    check_type(field, FieldType::Double);
    write_packed(out, field, values, values.len() * 8, |out, v| {
        out.write_slice(&v.to_bits().to_le_bytes())
    })
}

/// Size of a packed repeated `double` field.
pub fn size_of_double_list(field: &FieldDefinition, values: &[f64]) -> usize {
    size_of_packed(field, values.len(), values.len() * 8)
}

/// Write a packed repeated `bool` field.
pub fn write_bool_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[bool],
) -> Result<()> {
    check_type(field, FieldType::Bool);
    write_packed(out, field, values, values.len(), |out, v| {
        out.write_byte(u8::from(v))
    })
}

/// Size of a packed repeated `bool` field.
pub fn size_of_bool_list(field: &FieldDefinition, values: &[bool]) -> usize {
    size_of_packed(field, values.len(), values.len())
}

/// Write a packed repeated `enum` field from ordinals.
pub fn write_enum_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    ordinals: &[i32],
) -> Result<()> {
    check_type(field, FieldType::Enum);
    let payload = ordinals
        .iter()
        .map(|&v| varint::size_of_varint32(v))
        .sum::<usize>();
    write_packed(out, field, ordinals, payload, |out, v| {
        out.write_var_int(v, false)
    })
}

/// Size of a packed repeated `enum` field.
pub fn size_of_enum_list(field: &FieldDefinition, ordinals: &[i32]) -> usize {
    let payload = ordinals
        .iter()
        .map(|&v| varint::size_of_varint32(v))
        .sum::<usize>();
    size_of_packed(field, ordinals.len(), payload)
}

// ─────────────────────────────────────────────────────────────────────────────
// Repeated length-delimited fields (never packed)
// ─────────────────────────────────────────────────────────────────────────────

/// Write a repeated `string` field, one tagged entry per element.
pub fn write_string_list<S: AsRef<str>>(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[S],
) -> Result<()> {
    check_type(field, FieldType::String);
    for s in values {
        let s = s.as_ref();
        write_tag(out, field, WireType::Delimited)?;
        out.write_var_u64(utf8::encoded_len(s) as u64)?;
        out.write_utf8(s)?;
    }
    Ok(())
}

/// Size of a repeated `string` field.
pub fn size_of_string_list<S: AsRef<str>>(field: &FieldDefinition, values: &[S]) -> usize {
    values
        .iter()
        .map(|s| size_of_delimited(field, utf8::encoded_len(s.as_ref())))
        .sum()
}

/// Write a repeated `bytes` field, one tagged entry per element.
pub fn write_bytes_list(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[Bytes],
) -> Result<()> {
    check_type(field, FieldType::Bytes);
    for b in values {
        write_tag(out, field, WireType::Delimited)?;
        out.write_var_u64(b.len() as u64)?;
        out.write_bytes(b)?;
    }
    Ok(())
}

/// Size of a repeated `bytes` field.
pub fn size_of_bytes_list(field: &FieldDefinition, values: &[Bytes]) -> usize {
    values
        .iter()
        .map(|b| size_of_delimited(field, b.len()))
        .sum()
}

/// Write a repeated message field, one framed entry per element.
pub fn write_message_list<C: Codec>(
    out: &mut impl WritableSequentialData,
    field: &FieldDefinition,
    values: &[C::Message],
    codec: &C,
) -> Result<()> {
    check_type(field, FieldType::Message);
    for message in values {
        write_tag(out, field, WireType::Delimited)?;
        let body = codec.measure_record(message);
        out.write_var_u64(body as u64)?;
        codec.write(message, out)?;
    }
    Ok(())
}

/// Size of a repeated message field.
pub fn size_of_message_list<C: Codec>(
    field: &FieldDefinition,
    values: &[C::Message],
    codec: &C,
) -> usize {
    values
        .iter()
        .map(|m| size_of_delimited(field, codec.measure_record(m)))
        .sum()
}
