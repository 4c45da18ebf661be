//! The contract between the runtime and generated message codecs.
//!
//! The generator emits one unit-struct codec per message, placed as a
//! freestanding `static`; consumers hold a reference. A codec is immutable
//! and safe to share across threads as long as every call gets its own input
//! and output buffers.
//!
//! Besides the trait itself, this module carries the helpers every generated
//! parse loop leans on: nested-message framing with the recursion guard,
//! unknown-field policy, wire-type checking and strict-mode default
//! rejection.

use crate::buffer::{ReadableSequentialData, SequentialData, WritableSequentialData, WriteStream};
use crate::bytes::Bytes;
use crate::error::{Result, WireError};
use crate::parser;
use crate::schema::{FieldDefinition, WireType};

/// Message nesting allowance used by the convenience entry points.
///
/// `max_depth` counts message levels including the root: a value of `n`
/// parses a chain of `n` nested messages and rejects the `n + 1`-th.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// A generated message codec.
///
/// `write` and `measure_record` must agree exactly: for every message,
/// `measure_record(m)` equals the number of bytes `write(m, out)` advances
/// `out` by. `parse` of those bytes reproduces a structurally equal message.
pub trait Codec {
    /// The model type this codec encodes and decodes.
    type Message;

    /// Run the field-dispatch loop until the input runs out, returning the
    /// materialized message.
    ///
    /// `strict` rejects unknown fields and wire-level default values;
    /// `parse_unknown` lets lenient parses skip unknown fields instead of
    /// failing; `max_depth` bounds message nesting as described on
    /// [`DEFAULT_MAX_DEPTH`].
    fn parse(
        &self,
        input: &mut impl ReadableSequentialData,
        strict: bool,
        parse_unknown: bool,
        max_depth: u32,
    ) -> Result<Self::Message>;

    /// Emit `item` in ascending field-number order, eliding defaults.
    fn write(&self, item: &Self::Message, out: &mut impl WritableSequentialData) -> Result<()>;

    /// Exact byte length a subsequent [`write`](Codec::write) will produce.
    fn measure_record(&self, item: &Self::Message) -> usize;

    /// The canonical empty message.
    fn default_instance(&self) -> Self::Message;

    /// Compare `item` against a serialized form without requiring the caller
    /// to materialize it first.
    ///
    /// The provided implementation parses leniently and compares; codecs can
    /// override with a streaming comparison when it pays off.
    fn fast_equals(
        &self,
        item: &Self::Message,
        input: &mut impl ReadableSequentialData,
    ) -> Result<bool>
    where
        Self::Message: PartialEq,
    {
        Ok(self.parse(input, false, true, DEFAULT_MAX_DEPTH)? == *item)
    }

    /// Measure, encode and return `item` as an owning blob.
    fn to_bytes(&self, item: &Self::Message) -> Result<Bytes> {
        let size = self.measure_record(item);
        let mut out = WriteStream::new(Vec::with_capacity(size));
        self.write(item, &mut out)?;
        Ok(Bytes::wrap(out.into_inner()))
    }

    /// Parse a blob leniently, skipping unknown fields.
    fn parse_bytes(&self, data: &Bytes) -> Result<Self::Message> {
        self.parse(&mut data.open(), false, true, DEFAULT_MAX_DEPTH)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Parse-loop helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Frame and parse one nested message field.
///
/// Reads the length prefix, narrows the input limit to exactly the nested
/// payload, hands the window to `codec` with one less level of depth
/// allowance, and restores the limit. Fails with `DepthExceeded` when the
/// nested message would not fit in `max_depth` levels.
pub fn read_message_field<C: Codec>(
    input: &mut impl ReadableSequentialData,
    codec: &C,
    strict: bool,
    parse_unknown: bool,
    max_depth: u32,
    max_size: u64,
) -> Result<C::Message> {
    if max_depth <= 1 {
        return Err(WireError::DepthExceeded);
    }
    let length = parser::read_length(input, max_size)? as u64;
    let end = input
        .position()
        .checked_add(length)
        .ok_or(WireError::BufferUnderflow)?;
    if end > input.limit() {
        return Err(WireError::BufferUnderflow);
    }
    let outer_limit = input.limit();
    input.set_limit(end);
    let result = codec.parse(input, strict, parse_unknown, max_depth - 1);
    input.set_limit(outer_limit);
    // A lenient sub-parse stops at its limit, so on success the cursor sits
    // exactly at `end`.
    result
}

/// Apply the unknown-field policy for a tag the schema does not know.
///
/// Strict parses refuse unknown fields outright; lenient parses skip them
/// when `parse_unknown` is set and refuse otherwise.
pub fn handle_unknown_field(
    input: &mut impl ReadableSequentialData,
    field_number: i32,
    wire: WireType,
    strict: bool,
    parse_unknown: bool,
    max_size: u64,
) -> Result<()> {
    if strict || !parse_unknown {
        return Err(WireError::UnexpectedField(field_number));
    }
    parser::skip_field(input, wire, max_size)
}

/// Check an incoming wire type against a field's schema.
///
/// Repeated scalar fields accept both their element wire type (unpacked
/// entries) and `Delimited` (packed runs).
pub fn check_wire_type(field: &FieldDefinition, wire: WireType) -> Result<()> {
    let declared = field.field_type.wire_type();
    if wire == declared || (field.repeated && wire == WireType::Delimited) {
        Ok(())
    } else {
        Err(WireError::Malformed(
            "field encoded with an unexpected wire type",
        ))
    }
}

/// Strict-mode check applied after decoding a singular field's value: a
/// writer following the elision rules never puts a default value on the
/// wire, so meeting one under `strict` marks the payload as non-canonical.
pub fn reject_default(strict: bool, field: &FieldDefinition, is_default: bool) -> Result<()> {
    if strict && is_default && !field.optional && !field.oneof && !field.repeated {
        return Err(WireError::Malformed(
            "default value explicitly encoded for a field that elides defaults",
        ));
    }
    Ok(())
}
