//! Protobuf wire-format runtime.
//!
//! This crate is the layer a code generator targets: it parses, writes,
//! measures and hashes proto3-encoded messages against schemas known at
//! compile time, over heap buffers, off-heap buffers, immutable blobs and
//! `std::io` streams. The generator's output (a model type, a
//! `FieldDefinition` table and a [`Codec`] implementation per message) is
//! all plain code calling the [`parser`] and [`writer`] libraries; nothing
//! here is reflective and no schema exists at runtime beyond those tables.

pub mod buffer;
pub mod bytes;
pub mod codec;
pub mod error;
pub mod mem;
pub mod parser;
pub mod schema;
pub mod utf8;
pub mod varint;
pub mod writer;
pub mod xxhash;

// ─────────────────────────────────────────────────────────────────────────────
// Top-level re-exports of the primary API surface.
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable, shareable byte blob.
pub use crate::bytes::Bytes;

/// Error type of every fallible runtime operation.
pub use crate::error::WireError;
/// Crate-wide result alias.
pub use crate::error::Result;

/// Heap- or off-heap-backed mutable buffer with slices and views.
pub use crate::buffer::BufferedData;
/// Sequential read cursor over random-access data.
pub use crate::buffer::DataCursor;
/// Writable sink feeding a streaming hash instead of memory.
pub use crate::buffer::HashingData;
/// Sequential data over `std::io` readers and writers.
pub use crate::buffer::{ReadStream, WriteStream};

/// Capability traits the parser and writer libraries are generic over.
pub use crate::buffer::{
    ByteOrder, RandomAccessData, ReadableSequentialData, SequentialData, WritableSequentialData,
};

/// Compile-time schema model.
pub use crate::schema::{FieldDefinition, FieldType, WireType};

/// The generated-codec contract and its default depth allowance.
pub use crate::codec::{Codec, DEFAULT_MAX_DEPTH};
