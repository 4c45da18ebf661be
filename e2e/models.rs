// Hand-maintained stand-ins for generator output, shared by the e2e suites
// (spliced into each suite with `include!`).
//
// Each message follows the shape the code generator emits: a plain model
// struct, a `const` field definition per field, a `static` field table, a
// unit-struct codec implementing `Codec`, and a `static` codec instance.

use pbwire::buffer::{ReadableSequentialData, WritableSequentialData};
use pbwire::bytes::Bytes;
use pbwire::codec::{self, Codec};
use pbwire::error::Result;
use pbwire::parser::{self, DEFAULT_MAX_SIZE};
use pbwire::schema::{FieldDefinition, FieldType};
use pbwire::writer;

// ─────────────────────────────────────────────────────────────────────────────
// Timestamp
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

pub const TIMESTAMP_SECONDS: FieldDefinition =
    FieldDefinition::new("seconds", FieldType::Int64, 1);
pub const TIMESTAMP_NANOS: FieldDefinition = FieldDefinition::new("nanos", FieldType::Int32, 2);

pub static TIMESTAMP_FIELDS: &[FieldDefinition] = &[TIMESTAMP_SECONDS, TIMESTAMP_NANOS];

pub struct TimestampCodec;

pub static TIMESTAMP: TimestampCodec = TimestampCodec;

impl Codec for TimestampCodec {
    type Message = Timestamp;

    fn parse(
        &self,
        input: &mut impl ReadableSequentialData,
        strict: bool,
        parse_unknown: bool,
        _max_depth: u32,
    ) -> Result<Timestamp> {
        let mut message = Timestamp::default();
        while let Some((number, wire)) = parser::read_tag(input)? {
            match number {
                1 => {
                    codec::check_wire_type(&TIMESTAMP_SECONDS, wire)?;
                    message.seconds = parser::read_int64(input)?;
                    codec::reject_default(strict, &TIMESTAMP_SECONDS, message.seconds == 0)?;
                }
                2 => {
                    codec::check_wire_type(&TIMESTAMP_NANOS, wire)?;
                    message.nanos = parser::read_int32(input)?;
                    codec::reject_default(strict, &TIMESTAMP_NANOS, message.nanos == 0)?;
                }
                _ => codec::handle_unknown_field(
                    input,
                    number,
                    wire,
                    strict,
                    parse_unknown,
                    DEFAULT_MAX_SIZE,
                )?,
            }
        }
        Ok(message)
    }

    fn write(&self, item: &Timestamp, out: &mut impl WritableSequentialData) -> Result<()> {
        writer::write_int64(out, &TIMESTAMP_SECONDS, item.seconds)?;
        writer::write_int32(out, &TIMESTAMP_NANOS, item.nanos)
    }

    fn measure_record(&self, item: &Timestamp) -> usize {
        writer::size_of_int64(&TIMESTAMP_SECONDS, item.seconds)
            + writer::size_of_int32(&TIMESTAMP_NANOS, item.nanos)
    }

    fn default_instance(&self) -> Timestamp {
        Timestamp::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// OneField: minimal schema for unknown-field scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OneField {
    pub value: i64,
}

pub const ONE_FIELD_VALUE: FieldDefinition = FieldDefinition::new("value", FieldType::Int64, 1);

pub struct OneFieldCodec;

pub static ONE_FIELD: OneFieldCodec = OneFieldCodec;

impl Codec for OneFieldCodec {
    type Message = OneField;

    fn parse(
        &self,
        input: &mut impl ReadableSequentialData,
        strict: bool,
        parse_unknown: bool,
        _max_depth: u32,
    ) -> Result<OneField> {
        let mut message = OneField::default();
        while let Some((number, wire)) = parser::read_tag(input)? {
            match number {
                1 => {
                    codec::check_wire_type(&ONE_FIELD_VALUE, wire)?;
                    message.value = parser::read_int64(input)?;
                    codec::reject_default(strict, &ONE_FIELD_VALUE, message.value == 0)?;
                }
                _ => codec::handle_unknown_field(
                    input,
                    number,
                    wire,
                    strict,
                    parse_unknown,
                    DEFAULT_MAX_SIZE,
                )?,
            }
        }
        Ok(message)
    }

    fn write(&self, item: &OneField, out: &mut impl WritableSequentialData) -> Result<()> {
        writer::write_int64(out, &ONE_FIELD_VALUE, item.value)
    }

    fn measure_record(&self, item: &OneField) -> usize {
        writer::size_of_int64(&ONE_FIELD_VALUE, item.value)
    }

    fn default_instance(&self) -> OneField {
        OneField::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Samples: packed repeated int32 at field 4
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Samples {
    pub values: Vec<i32>,
}

pub const SAMPLES_VALUES: FieldDefinition =
    FieldDefinition::new("values", FieldType::Int32, 4).repeated();

pub struct SamplesCodec;

pub static SAMPLES: SamplesCodec = SamplesCodec;

impl Codec for SamplesCodec {
    type Message = Samples;

    fn parse(
        &self,
        input: &mut impl ReadableSequentialData,
        strict: bool,
        parse_unknown: bool,
        _max_depth: u32,
    ) -> Result<Samples> {
        let mut message = Samples::default();
        while let Some((number, wire)) = parser::read_tag(input)? {
            match number {
                4 => {
                    codec::check_wire_type(&SAMPLES_VALUES, wire)?;
                    parser::read_repeated(
                        input,
                        wire,
                        DEFAULT_MAX_SIZE,
                        &mut message.values,
                        |input| parser::read_int32(input),
                    )?;
                }
                _ => codec::handle_unknown_field(
                    input,
                    number,
                    wire,
                    strict,
                    parse_unknown,
                    DEFAULT_MAX_SIZE,
                )?,
            }
        }
        Ok(message)
    }

    fn write(&self, item: &Samples, out: &mut impl WritableSequentialData) -> Result<()> {
        writer::write_int32_list(out, &SAMPLES_VALUES, &item.values)
    }

    fn measure_record(&self, item: &Samples) -> usize {
        writer::size_of_int32_list(&SAMPLES_VALUES, &item.values)
    }

    fn default_instance(&self) -> Samples {
        Samples::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wrapped: a single optional int32 (Int32Value) at field 1
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wrapped {
    pub x: Option<i32>,
}

pub const WRAPPED_X: FieldDefinition =
    FieldDefinition::new("x", FieldType::Message, 1).optional();

pub struct WrappedCodec;

pub static WRAPPED: WrappedCodec = WrappedCodec;

impl Codec for WrappedCodec {
    type Message = Wrapped;

    fn parse(
        &self,
        input: &mut impl ReadableSequentialData,
        strict: bool,
        parse_unknown: bool,
        _max_depth: u32,
    ) -> Result<Wrapped> {
        let mut message = Wrapped::default();
        while let Some((number, wire)) = parser::read_tag(input)? {
            match number {
                1 => {
                    codec::check_wire_type(&WRAPPED_X, wire)?;
                    message.x = Some(parser::read_optional_int32(input, DEFAULT_MAX_SIZE)?);
                }
                _ => codec::handle_unknown_field(
                    input,
                    number,
                    wire,
                    strict,
                    parse_unknown,
                    DEFAULT_MAX_SIZE,
                )?,
            }
        }
        Ok(message)
    }

    fn write(&self, item: &Wrapped, out: &mut impl WritableSequentialData) -> Result<()> {
        writer::write_optional_int32(out, &WRAPPED_X, item.x)
    }

    fn measure_record(&self, item: &Wrapped) -> usize {
        writer::size_of_optional_int32(&WRAPPED_X, item.x)
    }

    fn default_instance(&self) -> Wrapped {
        Wrapped::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Chain: self-nested message for recursion-guard scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    pub id: i32,
    pub next: Option<Box<Chain>>,
}

pub const CHAIN_ID: FieldDefinition = FieldDefinition::new("id", FieldType::Int32, 1);
pub const CHAIN_NEXT: FieldDefinition = FieldDefinition::new("next", FieldType::Message, 2);

pub struct ChainCodec;

pub static CHAIN: ChainCodec = ChainCodec;

impl Codec for ChainCodec {
    type Message = Chain;

    fn parse(
        &self,
        input: &mut impl ReadableSequentialData,
        strict: bool,
        parse_unknown: bool,
        max_depth: u32,
    ) -> Result<Chain> {
        let mut message = Chain::default();
        while let Some((number, wire)) = parser::read_tag(input)? {
            match number {
                1 => {
                    codec::check_wire_type(&CHAIN_ID, wire)?;
                    message.id = parser::read_int32(input)?;
                    codec::reject_default(strict, &CHAIN_ID, message.id == 0)?;
                }
                2 => {
                    codec::check_wire_type(&CHAIN_NEXT, wire)?;
                    let child = codec::read_message_field(
                        input,
                        &CHAIN,
                        strict,
                        parse_unknown,
                        max_depth,
                        DEFAULT_MAX_SIZE,
                    )?;
                    message.next = Some(Box::new(child));
                }
                _ => codec::handle_unknown_field(
                    input,
                    number,
                    wire,
                    strict,
                    parse_unknown,
                    DEFAULT_MAX_SIZE,
                )?,
            }
        }
        Ok(message)
    }

    fn write(&self, item: &Chain, out: &mut impl WritableSequentialData) -> Result<()> {
        writer::write_int32(out, &CHAIN_ID, item.id)?;
        writer::write_message(out, &CHAIN_NEXT, item.next.as_deref(), &CHAIN)
    }

    fn measure_record(&self, item: &Chain) -> usize {
        writer::size_of_int32(&CHAIN_ID, item.id)
            + writer::size_of_message(&CHAIN_NEXT, item.next.as_deref(), &CHAIN)
    }

    fn default_instance(&self) -> Chain {
        Chain::default()
    }
}

/// A chain of `depth` nested messages (depth ≥ 1), innermost id = 1.
pub fn chain_of(depth: u32) -> Chain {
    let mut node = Chain { id: 1, next: None };
    for i in 2..=depth {
        node = Chain {
            id: i as i32,
            next: Some(Box::new(node)),
        };
    }
    node
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit: generated-style enum with an unknown-ordinal fallback
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    #[default]
    Unspecified,
    Celsius,
    Fahrenheit,
}

impl Unit {
    pub fn ordinal(self) -> i32 {
        match self {
            Unit::Unspecified => 0,
            Unit::Celsius => 1,
            Unit::Fahrenheit => 2,
        }
    }

    /// Unknown ordinals collapse onto the zero variant.
    pub fn from_ordinal(ordinal: i32) -> Unit {
        match ordinal {
            1 => Unit::Celsius,
            2 => Unit::Fahrenheit,
            _ => Unit::Unspecified,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Everything: one field of every shape the writer library can produce
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    Note(String),
    At(Timestamp),
    Level(i32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Everything {
    pub a_int32: i32,
    pub a_int64: i64,
    pub a_uint32: u32,
    pub a_uint64: u64,
    pub a_sint32: i32,
    pub a_sint64: i64,
    pub a_fixed32: u32,
    pub a_fixed64: u64,
    pub a_sfixed32: i32,
    pub a_sfixed64: i64,
    pub a_float: f32,
    pub a_double: f64,
    pub a_bool: bool,
    pub unit: Unit,
    pub label: String,
    pub payload: Bytes,
    pub created: Option<Timestamp>,
    pub counts: Vec<i32>,
    pub names: Vec<String>,
    pub choice: Option<Choice>,
    pub rating: Option<i32>,
    pub tag_line: Option<String>,
    pub readings: Vec<Timestamp>,
    pub blobs: Vec<Bytes>,
    pub ratios: Vec<f64>,
    pub flagged: Option<bool>,
}

pub const EV_INT32: FieldDefinition = FieldDefinition::new("a_int32", FieldType::Int32, 1);
pub const EV_INT64: FieldDefinition = FieldDefinition::new("a_int64", FieldType::Int64, 2);
pub const EV_UINT32: FieldDefinition = FieldDefinition::new("a_uint32", FieldType::UInt32, 3);
pub const EV_UINT64: FieldDefinition = FieldDefinition::new("a_uint64", FieldType::UInt64, 4);
pub const EV_SINT32: FieldDefinition = FieldDefinition::new("a_sint32", FieldType::SInt32, 5);
pub const EV_SINT64: FieldDefinition = FieldDefinition::new("a_sint64", FieldType::SInt64, 6);
pub const EV_FIXED32: FieldDefinition = FieldDefinition::new("a_fixed32", FieldType::Fixed32, 7);
pub const EV_FIXED64: FieldDefinition = FieldDefinition::new("a_fixed64", FieldType::Fixed64, 8);
pub const EV_SFIXED32: FieldDefinition =
    FieldDefinition::new("a_sfixed32", FieldType::SFixed32, 9);
pub const EV_SFIXED64: FieldDefinition =
    FieldDefinition::new("a_sfixed64", FieldType::SFixed64, 10);
pub const EV_FLOAT: FieldDefinition = FieldDefinition::new("a_float", FieldType::Float, 11);
pub const EV_DOUBLE: FieldDefinition = FieldDefinition::new("a_double", FieldType::Double, 12);
pub const EV_BOOL: FieldDefinition = FieldDefinition::new("a_bool", FieldType::Bool, 13);
pub const EV_UNIT: FieldDefinition = FieldDefinition::new("unit", FieldType::Enum, 14);
pub const EV_LABEL: FieldDefinition = FieldDefinition::new("label", FieldType::String, 15);
pub const EV_PAYLOAD: FieldDefinition = FieldDefinition::new("payload", FieldType::Bytes, 16);
pub const EV_CREATED: FieldDefinition = FieldDefinition::new("created", FieldType::Message, 17);
pub const EV_COUNTS: FieldDefinition =
    FieldDefinition::new("counts", FieldType::Int32, 18).repeated();
pub const EV_NAMES: FieldDefinition =
    FieldDefinition::new("names", FieldType::String, 19).repeated();
pub const EV_NOTE: FieldDefinition = FieldDefinition::new("note", FieldType::String, 20).oneof();
pub const EV_AT: FieldDefinition = FieldDefinition::new("at", FieldType::Message, 21).oneof();
pub const EV_LEVEL: FieldDefinition = FieldDefinition::new("level", FieldType::SInt32, 22).oneof();
pub const EV_RATING: FieldDefinition =
    FieldDefinition::new("rating", FieldType::Message, 23).optional();
pub const EV_TAG_LINE: FieldDefinition =
    FieldDefinition::new("tag_line", FieldType::Message, 24).optional();
pub const EV_READINGS: FieldDefinition =
    FieldDefinition::new("readings", FieldType::Message, 25).repeated();
pub const EV_BLOBS: FieldDefinition =
    FieldDefinition::new("blobs", FieldType::Bytes, 26).repeated();
pub const EV_RATIOS: FieldDefinition =
    FieldDefinition::new("ratios", FieldType::Double, 27).repeated();
pub const EV_FLAGGED: FieldDefinition =
    FieldDefinition::new("flagged", FieldType::Message, 28).optional();

pub struct EverythingCodec;

pub static EVERYTHING: EverythingCodec = EverythingCodec;

impl Codec for EverythingCodec {
    type Message = Everything;

    fn parse(
        &self,
        input: &mut impl ReadableSequentialData,
        strict: bool,
        parse_unknown: bool,
        max_depth: u32,
    ) -> Result<Everything> {
        let mut m = Everything::default();
        while let Some((number, wire)) = parser::read_tag(input)? {
            match number {
                1 => {
                    codec::check_wire_type(&EV_INT32, wire)?;
                    m.a_int32 = parser::read_int32(input)?;
                    codec::reject_default(strict, &EV_INT32, m.a_int32 == 0)?;
                }
                2 => {
                    codec::check_wire_type(&EV_INT64, wire)?;
                    m.a_int64 = parser::read_int64(input)?;
                    codec::reject_default(strict, &EV_INT64, m.a_int64 == 0)?;
                }
                3 => {
                    codec::check_wire_type(&EV_UINT32, wire)?;
                    m.a_uint32 = parser::read_uint32(input)?;
                    codec::reject_default(strict, &EV_UINT32, m.a_uint32 == 0)?;
                }
                4 => {
                    codec::check_wire_type(&EV_UINT64, wire)?;
                    m.a_uint64 = parser::read_uint64(input)?;
                    codec::reject_default(strict, &EV_UINT64, m.a_uint64 == 0)?;
                }
                5 => {
                    codec::check_wire_type(&EV_SINT32, wire)?;
                    m.a_sint32 = parser::read_sint32(input)?;
                    codec::reject_default(strict, &EV_SINT32, m.a_sint32 == 0)?;
                }
                6 => {
                    codec::check_wire_type(&EV_SINT64, wire)?;
                    m.a_sint64 = parser::read_sint64(input)?;
                    codec::reject_default(strict, &EV_SINT64, m.a_sint64 == 0)?;
                }
                7 => {
                    codec::check_wire_type(&EV_FIXED32, wire)?;
                    m.a_fixed32 = parser::read_fixed32(input)?;
                    codec::reject_default(strict, &EV_FIXED32, m.a_fixed32 == 0)?;
                }
                8 => {
                    codec::check_wire_type(&EV_FIXED64, wire)?;
                    m.a_fixed64 = parser::read_fixed64(input)?;
                    codec::reject_default(strict, &EV_FIXED64, m.a_fixed64 == 0)?;
                }
                9 => {
                    codec::check_wire_type(&EV_SFIXED32, wire)?;
                    m.a_sfixed32 = parser::read_sfixed32(input)?;
                    codec::reject_default(strict, &EV_SFIXED32, m.a_sfixed32 == 0)?;
                }
                10 => {
                    codec::check_wire_type(&EV_SFIXED64, wire)?;
                    m.a_sfixed64 = parser::read_sfixed64(input)?;
                    codec::reject_default(strict, &EV_SFIXED64, m.a_sfixed64 == 0)?;
                }
                11 => {
                    codec::check_wire_type(&EV_FLOAT, wire)?;
                    m.a_float = parser::read_float(input)?;
                    codec::reject_default(strict, &EV_FLOAT, m.a_float == 0.0)?;
                }
                12 => {
                    codec::check_wire_type(&EV_DOUBLE, wire)?;
                    m.a_double = parser::read_double(input)?;
                    codec::reject_default(strict, &EV_DOUBLE, m.a_double == 0.0)?;
                }
                13 => {
                    codec::check_wire_type(&EV_BOOL, wire)?;
                    m.a_bool = parser::read_bool(input)?;
                    codec::reject_default(strict, &EV_BOOL, !m.a_bool)?;
                }
                14 => {
                    codec::check_wire_type(&EV_UNIT, wire)?;
                    let ordinal = parser::read_enum(input)?;
                    codec::reject_default(strict, &EV_UNIT, ordinal == 0)?;
                    m.unit = Unit::from_ordinal(ordinal);
                }
                15 => {
                    codec::check_wire_type(&EV_LABEL, wire)?;
                    m.label = parser::read_string(input, DEFAULT_MAX_SIZE)?;
                    codec::reject_default(strict, &EV_LABEL, m.label.is_empty())?;
                }
                16 => {
                    codec::check_wire_type(&EV_PAYLOAD, wire)?;
                    m.payload = parser::read_bytes_field(input, DEFAULT_MAX_SIZE)?;
                    codec::reject_default(strict, &EV_PAYLOAD, m.payload.is_empty())?;
                }
                17 => {
                    codec::check_wire_type(&EV_CREATED, wire)?;
                    m.created = Some(codec::read_message_field(
                        input,
                        &TIMESTAMP,
                        strict,
                        parse_unknown,
                        max_depth,
                        DEFAULT_MAX_SIZE,
                    )?);
                }
                18 => {
                    codec::check_wire_type(&EV_COUNTS, wire)?;
                    parser::read_repeated(input, wire, DEFAULT_MAX_SIZE, &mut m.counts, |input| {
                        parser::read_int32(input)
                    })?;
                }
                19 => {
                    codec::check_wire_type(&EV_NAMES, wire)?;
                    m.names.push(parser::read_string(input, DEFAULT_MAX_SIZE)?);
                }
                20 => {
                    codec::check_wire_type(&EV_NOTE, wire)?;
                    m.choice = Some(Choice::Note(parser::read_string(input, DEFAULT_MAX_SIZE)?));
                }
                21 => {
                    codec::check_wire_type(&EV_AT, wire)?;
                    m.choice = Some(Choice::At(codec::read_message_field(
                        input,
                        &TIMESTAMP,
                        strict,
                        parse_unknown,
                        max_depth,
                        DEFAULT_MAX_SIZE,
                    )?));
                }
                22 => {
                    codec::check_wire_type(&EV_LEVEL, wire)?;
                    m.choice = Some(Choice::Level(parser::read_sint32(input)?));
                }
                23 => {
                    codec::check_wire_type(&EV_RATING, wire)?;
                    m.rating = Some(parser::read_optional_int32(input, DEFAULT_MAX_SIZE)?);
                }
                24 => {
                    codec::check_wire_type(&EV_TAG_LINE, wire)?;
                    m.tag_line = Some(parser::read_optional_string(input, DEFAULT_MAX_SIZE)?);
                }
                25 => {
                    codec::check_wire_type(&EV_READINGS, wire)?;
                    m.readings.push(codec::read_message_field(
                        input,
                        &TIMESTAMP,
                        strict,
                        parse_unknown,
                        max_depth,
                        DEFAULT_MAX_SIZE,
                    )?);
                }
                26 => {
                    codec::check_wire_type(&EV_BLOBS, wire)?;
                    m.blobs
                        .push(parser::read_bytes_field(input, DEFAULT_MAX_SIZE)?);
                }
                27 => {
                    codec::check_wire_type(&EV_RATIOS, wire)?;
                    parser::read_repeated(input, wire, DEFAULT_MAX_SIZE, &mut m.ratios, |input| {
                        parser::read_double(input)
                    })?;
                }
                28 => {
                    codec::check_wire_type(&EV_FLAGGED, wire)?;
                    m.flagged = Some(parser::read_optional_bool(input, DEFAULT_MAX_SIZE)?);
                }
                _ => codec::handle_unknown_field(
                    input,
                    number,
                    wire,
                    strict,
                    parse_unknown,
                    DEFAULT_MAX_SIZE,
                )?,
            }
        }
        Ok(m)
    }

    fn write(&self, m: &Everything, out: &mut impl WritableSequentialData) -> Result<()> {
        writer::write_int32(out, &EV_INT32, m.a_int32)?;
        writer::write_int64(out, &EV_INT64, m.a_int64)?;
        writer::write_uint32(out, &EV_UINT32, m.a_uint32)?;
        writer::write_uint64(out, &EV_UINT64, m.a_uint64)?;
        writer::write_sint32(out, &EV_SINT32, m.a_sint32)?;
        writer::write_sint64(out, &EV_SINT64, m.a_sint64)?;
        writer::write_fixed32(out, &EV_FIXED32, m.a_fixed32)?;
        writer::write_fixed64(out, &EV_FIXED64, m.a_fixed64)?;
        writer::write_sfixed32(out, &EV_SFIXED32, m.a_sfixed32)?;
        writer::write_sfixed64(out, &EV_SFIXED64, m.a_sfixed64)?;
        writer::write_float(out, &EV_FLOAT, m.a_float)?;
        writer::write_double(out, &EV_DOUBLE, m.a_double)?;
        writer::write_bool(out, &EV_BOOL, m.a_bool)?;
        writer::write_enum(out, &EV_UNIT, m.unit.ordinal())?;
        writer::write_string(out, &EV_LABEL, &m.label)?;
        writer::write_bytes(out, &EV_PAYLOAD, &m.payload)?;
        writer::write_message(out, &EV_CREATED, m.created.as_ref(), &TIMESTAMP)?;
        writer::write_int32_list(out, &EV_COUNTS, &m.counts)?;
        writer::write_string_list(out, &EV_NAMES, &m.names)?;
        match &m.choice {
            None => {}
            Some(Choice::Note(s)) => writer::write_string(out, &EV_NOTE, s)?,
            Some(Choice::At(t)) => writer::write_message(out, &EV_AT, Some(t), &TIMESTAMP)?,
            Some(Choice::Level(v)) => writer::write_sint32(out, &EV_LEVEL, *v)?,
        }
        writer::write_optional_int32(out, &EV_RATING, m.rating)?;
        writer::write_optional_string(out, &EV_TAG_LINE, m.tag_line.as_deref())?;
        writer::write_message_list(out, &EV_READINGS, &m.readings, &TIMESTAMP)?;
        writer::write_bytes_list(out, &EV_BLOBS, &m.blobs)?;
        writer::write_double_list(out, &EV_RATIOS, &m.ratios)?;
        writer::write_optional_bool(out, &EV_FLAGGED, m.flagged)
    }

    fn measure_record(&self, m: &Everything) -> usize {
        let mut size = 0;
        size += writer::size_of_int32(&EV_INT32, m.a_int32);
        size += writer::size_of_int64(&EV_INT64, m.a_int64);
        size += writer::size_of_uint32(&EV_UINT32, m.a_uint32);
        size += writer::size_of_uint64(&EV_UINT64, m.a_uint64);
        size += writer::size_of_sint32(&EV_SINT32, m.a_sint32);
        size += writer::size_of_sint64(&EV_SINT64, m.a_sint64);
        size += writer::size_of_fixed32(&EV_FIXED32, m.a_fixed32);
        size += writer::size_of_fixed64(&EV_FIXED64, m.a_fixed64);
        size += writer::size_of_sfixed32(&EV_SFIXED32, m.a_sfixed32);
        size += writer::size_of_sfixed64(&EV_SFIXED64, m.a_sfixed64);
        size += writer::size_of_float(&EV_FLOAT, m.a_float);
        size += writer::size_of_double(&EV_DOUBLE, m.a_double);
        size += writer::size_of_bool(&EV_BOOL, m.a_bool);
        size += writer::size_of_enum(&EV_UNIT, m.unit.ordinal());
        size += writer::size_of_string(&EV_LABEL, &m.label);
        size += writer::size_of_bytes(&EV_PAYLOAD, &m.payload);
        size += writer::size_of_message(&EV_CREATED, m.created.as_ref(), &TIMESTAMP);
        size += writer::size_of_int32_list(&EV_COUNTS, &m.counts);
        size += writer::size_of_string_list(&EV_NAMES, &m.names);
        size += match &m.choice {
            None => 0,
            Some(Choice::Note(s)) => writer::size_of_string(&EV_NOTE, s),
            Some(Choice::At(t)) => writer::size_of_message(&EV_AT, Some(t), &TIMESTAMP),
            Some(Choice::Level(v)) => writer::size_of_sint32(&EV_LEVEL, *v),
        };
        size += writer::size_of_optional_int32(&EV_RATING, m.rating);
        size += writer::size_of_optional_string(&EV_TAG_LINE, m.tag_line.as_deref());
        size += writer::size_of_message_list(&EV_READINGS, &m.readings, &TIMESTAMP);
        size += writer::size_of_bytes_list(&EV_BLOBS, &m.blobs);
        size += writer::size_of_double_list(&EV_RATIOS, &m.ratios);
        size += writer::size_of_optional_bool(&EV_FLAGGED, m.flagged);
        size
    }

    fn default_instance(&self) -> Everything {
        Everything::default()
    }
}

/// A fully populated instance touching every field shape.
pub fn everything_sample() -> Everything {
    Everything {
        a_int32: -7,
        a_int64: 1 << 40,
        a_uint32: 300,
        a_uint64: u64::MAX / 2,
        a_sint32: -150,
        a_sint64: -(1 << 33),
        a_fixed32: 0xDEAD_BEEF,
        a_fixed64: 0x0123_4567_89AB_CDEF,
        a_sfixed32: -42,
        a_sfixed64: -1,
        a_float: 2.5,
        a_double: -0.125,
        a_bool: true,
        unit: Unit::Fahrenheit,
        label: "grüße 🦀".to_string(),
        payload: Bytes::from_static(&[0xCA, 0xFE, 0xBA, 0xBE]),
        created: Some(Timestamp {
            seconds: 5678,
            nanos: 1234,
        }),
        counts: vec![1, 2, 127, 128, -1],
        names: vec!["a".to_string(), String::new(), "long enough name".to_string()],
        choice: Some(Choice::Level(-3)),
        rating: Some(0),
        tag_line: Some("".to_string()),
        readings: vec![
            Timestamp::default(),
            Timestamp {
                seconds: 1,
                nanos: 2,
            },
        ],
        blobs: vec![Bytes::empty(), Bytes::from_static(b"blob")],
        ratios: vec![0.0, -1.5, 6.25e10],
        flagged: Some(false),
    }
}
