//! Scalar readers and the field-walking primitives used by generated parse
//! loops.
//!
//! Everything here is generic over [`ReadableSequentialData`], so the same
//! generated code runs against heap buffers, off-heap buffers, blob cursors
//! and streams. The functions consume exactly the bytes of the value they
//! decode and nothing more; resynchronization after an error is not
//! attempted.

use crate::buffer::{ReadableSequentialData, SequentialData};
use crate::bytes::Bytes;
use crate::error::{Result, WireError};
use crate::schema::{FieldDefinition, WireType, MAX_FIELD_NUMBER};
use crate::utf8;
use crate::varint;

/// Default ceiling for length-delimited payloads when the caller does not
/// supply one.
pub const DEFAULT_MAX_SIZE: u64 = 16 * 1024 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// Tags
// ─────────────────────────────────────────────────────────────────────────────

/// Read the next field tag, or `Ok(None)` at a clean end of input.
///
/// End of data is only acceptable *before* the first tag byte; running dry
/// inside a tag varint is `BufferUnderflow` like any other truncation.
/// Field number 0 and the group wire types are rejected as malformed.
pub fn read_tag(input: &mut impl ReadableSequentialData) -> Result<Option<(i32, WireType)>> {
    let first = match input.try_read_byte()? {
        None => return Ok(None),
        Some(b) => b,
    };
    let mut tag = u64::from(first & 0x7F);
    if first & 0x80 != 0 {
        let mut shift = 7;
        loop {
            if shift >= 7 * varint::MAX_VARINT_LEN {
                return Err(WireError::Malformed("varint exceeds 10 bytes"));
            }
            let b = input.read_byte()?;
            tag |= u64::from(b & 0x7F) << shift;
            if b & 0x80 == 0 {
                break;
            }
            shift += 7;
        }
    }
    let field_number = tag >> 3;
    if field_number == 0 {
        return Err(WireError::Malformed("zero field number"));
    }
    if field_number > MAX_FIELD_NUMBER as u64 {
        return Err(WireError::Malformed("field number out of range"));
    }
    let wire = WireType::from_ordinal((tag & 0x7) as u8)?;
    Ok(Some((field_number as i32, wire)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalar readers
// ─────────────────────────────────────────────────────────────────────────────

/// `int32`: raw varint, low 32 bits as two's complement.
#[inline]
pub fn read_int32(input: &mut impl ReadableSequentialData) -> Result<i32> {
    input.read_var_int(false)
}

/// `int64`: raw varint as two's complement.
#[inline]
pub fn read_int64(input: &mut impl ReadableSequentialData) -> Result<i64> {
    input.read_var_long(false)
}

/// `uint32`: raw varint, low 32 bits unsigned.
#[inline]
pub fn read_uint32(input: &mut impl ReadableSequentialData) -> Result<u32> {
    input.read_var_u64().map(|v| v as u32)
}

/// `uint64`: raw varint unsigned.
#[inline]
pub fn read_uint64(input: &mut impl ReadableSequentialData) -> Result<u64> {
    input.read_var_u64()
}

/// `sint32`: zig-zag varint.
#[inline]
pub fn read_sint32(input: &mut impl ReadableSequentialData) -> Result<i32> {
    input.read_var_int(true)
}

/// `sint64`: zig-zag varint.
#[inline]
pub fn read_sint64(input: &mut impl ReadableSequentialData) -> Result<i64> {
    input.read_var_long(true)
}

/// `fixed32`: four bytes little-endian, unsigned.
#[inline]
pub fn read_fixed32(input: &mut impl ReadableSequentialData) -> Result<u32> {
    input.read_u32_le()
}

/// `fixed64`: eight bytes little-endian, unsigned.
#[inline]
pub fn read_fixed64(input: &mut impl ReadableSequentialData) -> Result<u64> {
    input.read_u64_le()
}

/// `sfixed32`: four bytes little-endian, signed.
#[inline]
pub fn read_sfixed32(input: &mut impl ReadableSequentialData) -> Result<i32> {
    input.read_u32_le().map(|v| v as i32)
}

/// `sfixed64`: eight bytes little-endian, signed.
#[inline]
pub fn read_sfixed64(input: &mut impl ReadableSequentialData) -> Result<i64> {
    input.read_u64_le().map(|v| v as i64)
}

/// `float`: IEEE-754 single, little-endian.
#[inline]
pub fn read_float(input: &mut impl ReadableSequentialData) -> Result<f32> {
    input.read_u32_le().map(f32::from_bits)
}

/// `double`: IEEE-754 double, little-endian.
#[inline]
pub fn read_double(input: &mut impl ReadableSequentialData) -> Result<f64> {
    input.read_u64_le().map(f64::from_bits)
}

/// `bool`: varint that must be exactly 0 or 1.
pub fn read_bool(input: &mut impl ReadableSequentialData) -> Result<bool> {
    match input.read_var_u64()? {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(WireError::Malformed("boolean encoded with a value above 1")),
    }
}

/// `enum`: raw varint as a 32-bit ordinal. Mapping the ordinal onto a
/// variant (or an unknown-value sentinel) is the generated layer's job.
#[inline]
pub fn read_enum(input: &mut impl ReadableSequentialData) -> Result<i32> {
    input.read_var_int(false)
}

// ─────────────────────────────────────────────────────────────────────────────
// Length-delimited readers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a length prefix and check it against `max`.
pub fn read_length(input: &mut impl ReadableSequentialData, max: u64) -> Result<usize> {
    let length = input.read_var_u64()?;
    if length > max {
        return Err(WireError::SizeExceeded { length, max });
    }
    if length > i32::MAX as u64 {
        return Err(WireError::SizeExceeded {
            length,
            max: i32::MAX as u64,
        });
    }
    Ok(length as usize)
}

/// `string`: length prefix, payload, UTF-8 validation.
pub fn read_string(input: &mut impl ReadableSequentialData, max: u64) -> Result<String> {
    let n = read_length(input, max)?;
    let mut v = vec![0u8; n];
    input.read_slice(&mut v)?;
    utf8::into_string(v)
}

/// `bytes`: length prefix and payload, returned as an owning blob.
pub fn read_bytes_field(input: &mut impl ReadableSequentialData, max: u64) -> Result<Bytes> {
    let n = read_length(input, max)?;
    input.read_bytes(n)
}

// ─────────────────────────────────────────────────────────────────────────────
// Skipping and lazy extraction
// ─────────────────────────────────────────────────────────────────────────────

fn skip_exact(input: &mut impl ReadableSequentialData, n: u64) -> Result<()> {
    if input.skip(n)? < n {
        return Err(WireError::BufferUnderflow);
    }
    Ok(())
}

/// Consume exactly the bytes of one field whose tag has already been read.
///
/// `max` bounds length-delimited payloads the same way the typed readers do.
pub fn skip_field(input: &mut impl ReadableSequentialData, wire: WireType, max: u64) -> Result<()> {
    match wire {
        WireType::Varint => input.read_var_u64().map(|_| ()),
        WireType::Fixed64 => skip_exact(input, 8),
        WireType::Fixed32 => skip_exact(input, 4),
        WireType::Delimited => {
            let n = read_length(input, max)?;
            skip_exact(input, n as u64)
        }
    }
}

/// Walk the input and return the raw payload of the first occurrence of
/// `field`, or `Ok(None)` when the input ends without it.
///
/// This is the lazy-materialization primitive: the caller keeps the returned
/// blob and parses it only if the sub-message is ever needed. Only singular
/// length-delimited fields can be extracted; should the (non-repeated) field
/// occur more than once, the first occurrence wins and the cursor is left
/// just past it.
pub fn extract_field_bytes(
    input: &mut impl ReadableSequentialData,
    field: &FieldDefinition,
) -> Result<Option<Bytes>> {
    if field.repeated {
        return Err(WireError::InvalidArgument(
            "cannot extract a repeated field as a single payload",
        ));
    }
    if field.field_type.wire_type() != WireType::Delimited {
        return Err(WireError::InvalidArgument(
            "only length-delimited fields can be extracted",
        ));
    }
    while let Some((number, wire)) = read_tag(input)? {
        if number == field.number {
            if wire != WireType::Delimited {
                return Err(WireError::Malformed(
                    "field encoded with an unexpected wire type",
                ));
            }
            return read_bytes_field(input, DEFAULT_MAX_SIZE).map(Some);
        }
        skip_field(input, wire, DEFAULT_MAX_SIZE)?;
    }
    Ok(None)
}

// ─────────────────────────────────────────────────────────────────────────────
// Optional (well-known wrapper) fields
// ─────────────────────────────────────────────────────────────────────────────

/// Read a wrapper sub-message and extract its single inner field (number 1).
///
/// Presence is decided by the caller having seen the outer tag at all; this
/// only produces the wrapped value, substituting the default when the inner
/// field is absent from the window.
fn read_wrapper<R, T>(
    input: &mut R,
    max: u64,
    default: T,
    mut read_value: impl FnMut(&mut R) -> Result<T>,
) -> Result<T>
where
    R: ReadableSequentialData,
{
    let n = read_length(input, max)? as u64;
    let end = input
        .position()
        .checked_add(n)
        .ok_or(WireError::BufferUnderflow)?;
    if end > input.limit() {
        return Err(WireError::BufferUnderflow);
    }
    let outer_limit = input.limit();
    input.set_limit(end);
    let result = (|| {
        let mut value = default;
        while let Some((number, wire)) = read_tag(input)? {
            if number == 1 {
                value = read_value(input)?;
            } else {
                skip_field(input, wire, max)?;
            }
        }
        Ok(value)
    })();
    input.set_limit(outer_limit);
    result
}

/// Read an `Int32Value` wrapper payload.
pub fn read_optional_int32(input: &mut impl ReadableSequentialData, max: u64) -> Result<i32> {
    read_wrapper(input, max, 0, |input| read_int32(input))
}

/// Read an `Int64Value` wrapper payload.
pub fn read_optional_int64(input: &mut impl ReadableSequentialData, max: u64) -> Result<i64> {
    read_wrapper(input, max, 0, |input| read_int64(input))
}

/// Read a `UInt32Value` wrapper payload.
pub fn read_optional_uint32(input: &mut impl ReadableSequentialData, max: u64) -> Result<u32> {
    read_wrapper(input, max, 0, |input| read_uint32(input))
}

/// Read a `UInt64Value` wrapper payload.
pub fn read_optional_uint64(input: &mut impl ReadableSequentialData, max: u64) -> Result<u64> {
    read_wrapper(input, max, 0, |input| read_uint64(input))
}

/// Read an `SInt32Value` wrapper payload (zig-zag inner encoding).
pub fn read_optional_sint32(input: &mut impl ReadableSequentialData, max: u64) -> Result<i32> {
    read_wrapper(input, max, 0, |input| read_sint32(input))
}

/// Read an `SInt64Value` wrapper payload (zig-zag inner encoding).
pub fn read_optional_sint64(input: &mut impl ReadableSequentialData, max: u64) -> Result<i64> {
    read_wrapper(input, max, 0, |input| read_sint64(input))
}

/// Read a `BoolValue` wrapper payload.
pub fn read_optional_bool(input: &mut impl ReadableSequentialData, max: u64) -> Result<bool> {
    read_wrapper(input, max, false, |input| read_bool(input))
}

/// Read a `FloatValue` wrapper payload.
pub fn read_optional_float(input: &mut impl ReadableSequentialData, max: u64) -> Result<f32> {
    read_wrapper(input, max, 0.0, |input| read_float(input))
}

/// Read a `DoubleValue` wrapper payload.
pub fn read_optional_double(input: &mut impl ReadableSequentialData, max: u64) -> Result<f64> {
    read_wrapper(input, max, 0.0, |input| read_double(input))
}

/// Read a `StringValue` wrapper payload.
pub fn read_optional_string(input: &mut impl ReadableSequentialData, max: u64) -> Result<String> {
    read_wrapper(input, max, String::new(), |input| read_string(input, max))
}

/// Read a `BytesValue` wrapper payload.
pub fn read_optional_bytes(input: &mut impl ReadableSequentialData, max: u64) -> Result<Bytes> {
    read_wrapper(input, max, Bytes::empty(), |input| {
        read_bytes_field(input, max)
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Repeated scalars
// ─────────────────────────────────────────────────────────────────────────────

/// Read one occurrence of a repeated scalar field, packed or unpacked, and
/// append the value(s) to `values`.
///
/// With `wire == Delimited` the payload is a packed run and `read_one` is
/// applied until it is exhausted; any other wire type contributes a single
/// element. Generated code calls this once per tag occurrence, which makes
/// mixed packed/unpacked inputs decode into one flat list.
pub fn read_repeated<R, T>(
    input: &mut R,
    wire: WireType,
    max: u64,
    values: &mut Vec<T>,
    mut read_one: impl FnMut(&mut R) -> Result<T>,
) -> Result<()>
where
    R: ReadableSequentialData,
{
    if wire != WireType::Delimited {
        values.push(read_one(input)?);
        return Ok(());
    }
    let n = read_length(input, max)? as u64;
    let end = input
        .position()
        .checked_add(n)
        .ok_or(WireError::BufferUnderflow)?;
    if end > input.limit() {
        return Err(WireError::BufferUnderflow);
    }
    let outer_limit = input.limit();
    input.set_limit(end);
    let mut result = Ok(());
    while input.has_remaining() {
        match read_one(input) {
            Ok(v) => values.push(v),
            Err(e) => {
                result = Err(e);
                break;
            }
        }
    }
    input.set_limit(outer_limit);
    result
}
