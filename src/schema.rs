//! Compile-time message schemas: field types, wire types, field definitions
//! and tag packing.
//!
//! A code generator emits one `static <MESSAGE>_FIELDS: &[FieldDefinition]`
//! table per message; the parse loop looks incoming field numbers up in that
//! table and the writer derives tags from it. Nothing here is constructed at
//! runtime.

use crate::error::{Result, WireError};

/// The declared type of a message field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// Varint, two's complement on the wire.
    Int32,
    /// Varint, two's complement on the wire.
    Int64,
    /// Varint, unsigned.
    UInt32,
    /// Varint, unsigned.
    UInt64,
    /// Varint, zig-zag encoded.
    SInt32,
    /// Varint, zig-zag encoded.
    SInt64,
    /// Four bytes little-endian, unsigned.
    Fixed32,
    /// Eight bytes little-endian, unsigned.
    Fixed64,
    /// Four bytes little-endian, signed.
    SFixed32,
    /// Eight bytes little-endian, signed.
    SFixed64,
    /// IEEE-754 single, little-endian.
    Float,
    /// IEEE-754 double, little-endian.
    Double,
    /// Varint restricted to 0 or 1.
    Bool,
    /// Varint carrying an enum ordinal.
    Enum,
    /// Length-delimited UTF-8.
    String,
    /// Length-delimited octets.
    Bytes,
    /// Length-delimited nested message.
    Message,
}

impl FieldType {
    /// The wire type a single (unpacked) value of this field type uses.
    pub const fn wire_type(self) -> WireType {
        match self {
            FieldType::Int32
            | FieldType::Int64
            | FieldType::UInt32
            | FieldType::UInt64
            | FieldType::SInt32
            | FieldType::SInt64
            | FieldType::Bool
            | FieldType::Enum => WireType::Varint,
            FieldType::Fixed64 | FieldType::SFixed64 | FieldType::Double => WireType::Fixed64,
            FieldType::Fixed32 | FieldType::SFixed32 | FieldType::Float => WireType::Fixed32,
            FieldType::String | FieldType::Bytes | FieldType::Message => WireType::Delimited,
        }
    }
}

/// The 3-bit payload-format selector carried in every tag.
///
/// Ordinals 3 and 4 (the retired group markers) and 6/7 (never assigned) are
/// deliberately absent; [`WireType::from_ordinal`] rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WireType {
    /// Base-128 varint payload.
    Varint = 0,
    /// Eight-byte little-endian payload.
    Fixed64 = 1,
    /// Varint length prefix followed by that many bytes.
    Delimited = 2,
    /// Four-byte little-endian payload.
    Fixed32 = 5,
}

impl WireType {
    /// Decode the low three bits of a tag.
    pub fn from_ordinal(ordinal: u8) -> Result<WireType> {
        match ordinal {
            0 => Ok(WireType::Varint),
            1 => Ok(WireType::Fixed64),
            2 => Ok(WireType::Delimited),
            5 => Ok(WireType::Fixed32),
            3 | 4 => Err(WireError::Malformed("group wire types are unsupported")),
            _ => Err(WireError::Malformed("invalid wire type")),
        }
    }
}

/// Highest field number the tag encoding can carry (2^29 − 1).
pub const MAX_FIELD_NUMBER: i32 = (1 << 29) - 1;

/// One field of a generated message schema.
///
/// Definitions are const-constructible so generators can emit them into
/// `static` tables. Two definitions with the same number but from different
/// tables are different fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name as written in the schema source.
    pub name: &'static str,
    /// Declared type.
    pub field_type: FieldType,
    /// True for `repeated` fields.
    pub repeated: bool,
    /// True for well-known wrapper ("boxed scalar") fields, which track
    /// presence explicitly.
    pub optional: bool,
    /// True when the field belongs to a `oneof` group.
    pub oneof: bool,
    /// Field number, `1 ..= MAX_FIELD_NUMBER`.
    pub number: i32,
}

impl FieldDefinition {
    /// A singular, non-optional, non-oneof field.
    pub const fn new(name: &'static str, field_type: FieldType, number: i32) -> Self {
        FieldDefinition {
            name,
            field_type,
            repeated: false,
            optional: false,
            oneof: false,
            number,
        }
    }

    /// Mark as `repeated`.
    pub const fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Mark as a presence-tracking wrapper field.
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as a `oneof` member.
    pub const fn oneof(mut self) -> Self {
        self.oneof = true;
        self
    }

    /// The tag carrying this field's number and its single-value wire type:
    /// `(number << 3) | wire_type`.
    #[inline]
    pub fn tag(&self) -> u32 {
        ((self.number as u32) << 3) | self.field_type.wire_type() as u32
    }
}

/// Find a field by number in a generated table.
///
/// Tables are small enough that a linear scan beats anything clever.
#[inline]
pub fn lookup(fields: &[FieldDefinition], number: i32) -> Option<&FieldDefinition> {
    fields.iter().find(|f| f.number == number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_packs_number_and_wire_type() {
        let seconds = FieldDefinition::new("seconds", FieldType::Int64, 1);
        assert_eq!(seconds.tag(), 0x08);
        let payload = FieldDefinition::new("payload", FieldType::Bytes, 4);
        assert_eq!(payload.tag(), 0x22);
        let gauge = FieldDefinition::new("gauge", FieldType::Float, 2);
        assert_eq!(gauge.tag(), 0x15);
    }

    #[test]
    fn wire_type_ordinals_round_trip() {
        for wt in [
            WireType::Varint,
            WireType::Fixed64,
            WireType::Delimited,
            WireType::Fixed32,
        ] {
            assert_eq!(WireType::from_ordinal(wt as u8).unwrap(), wt);
        }
    }

    #[test]
    fn group_ordinals_are_rejected() {
        assert!(matches!(
            WireType::from_ordinal(3),
            Err(WireError::Malformed(_))
        ));
        assert!(matches!(
            WireType::from_ordinal(4),
            Err(WireError::Malformed(_))
        ));
        assert!(WireType::from_ordinal(6).is_err());
        assert!(WireType::from_ordinal(7).is_err());
    }

    #[test]
    fn lookup_scans_by_number() {
        static FIELDS: &[FieldDefinition] = &[
            FieldDefinition::new("a", FieldType::Int32, 1),
            FieldDefinition::new("b", FieldType::String, 7),
        ];
        assert_eq!(lookup(FIELDS, 7).map(|f| f.name), Some("b"));
        assert!(lookup(FIELDS, 2).is_none());
    }

    #[test]
    fn const_builders_compose() {
        const F: FieldDefinition =
            FieldDefinition::new("choice", FieldType::Message, 9).oneof();
        assert!(F.oneof);
        assert!(!F.repeated);
        const R: FieldDefinition =
            FieldDefinition::new("values", FieldType::SInt64, 3).repeated();
        assert!(R.repeated);
    }
}
