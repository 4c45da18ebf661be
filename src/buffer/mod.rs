//! Data-access capabilities and the concrete buffers that provide them.
//!
//! The runtime never works against a concrete buffer type directly; every
//! parser and writer primitive is generic over a small capability set:
//!
//! - [`SequentialData`]: a cursor with `position ≤ limit ≤ capacity`
//! - [`ReadableSequentialData`]: cursor-based reads
//! - [`WritableSequentialData`]: cursor-based writes
//! - [`RandomAccessData`]: immutable absolute-offset reads
//!
//! Concrete providers:
//!
//! | Type | Capabilities |
//! |---|---|
//! | [`BufferedData`] | sequential read/write + random access, heap or off-heap |
//! | [`DataCursor`] | sequential read over any [`RandomAccessData`] |
//! | [`ReadStream`] / [`WriteStream`] | sequential over `std::io` streams |
//! | [`HashingData`] | sequential write into a streaming hash |
//!
//! The cursor invariant `0 ≤ position ≤ limit ≤ capacity` holds at every
//! observable point. `set_limit` clamps rather than errors: below `position`
//! it becomes `position`, above `capacity` it becomes `capacity`.

mod buffered;
mod cursor;
mod hashing;
mod storage;
mod stream;

pub use buffered::BufferedData;
pub use cursor::DataCursor;
pub use hashing::{HashingData, Sha256Sink, StreamingHash, Xxh3Sink};
pub use stream::{ReadStream, WriteStream};

use crate::bytes::Bytes;
use crate::error::{Result, WireError};
use crate::varint;

/// Byte order for fixed-width reads and writes where the caller has a choice.
///
/// The protobuf wire format itself is always little-endian; the big-endian
/// variants exist for embedding foreign fixed-width framing around messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

// ─────────────────────────────────────────────────────────────────────────────
// SequentialData: the cursor contract
// ─────────────────────────────────────────────────────────────────────────────

/// State shared by every cursor-based data source or sink.
pub trait SequentialData {
    /// Maximum number of bytes this data can ever hold. `u64::MAX` for
    /// streams.
    fn capacity(&self) -> u64;

    /// Next index to be read or written; for streams, the count of bytes
    /// consumed or produced so far.
    fn position(&self) -> u64;

    /// Upper bound for reads or writes.
    fn limit(&self) -> u64;

    /// Move the limit, clamping into `[position, capacity]`.
    fn set_limit(&mut self, limit: u64);

    /// Advance the position by up to `n` bytes, returning how many were
    /// actually skipped. Stream-backed variants consume (and may block on)
    /// the underlying source.
    fn skip(&mut self, n: u64) -> Result<u64>;

    /// Bytes left between position and limit.
    #[inline]
    fn remaining(&self) -> u64 {
        self.limit().saturating_sub(self.position())
    }

    /// True when at least one byte remains.
    #[inline]
    fn has_remaining(&self) -> bool {
        self.remaining() > 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ReadableSequentialData
// ─────────────────────────────────────────────────────────────────────────────

/// Cursor-based reading.
///
/// Implementors provide the three primitive methods; everything else is
/// derived. Contiguous sources additionally override [`chunk`] so varint
/// decoding can run over raw memory instead of byte-at-a-time calls.
///
/// [`chunk`]: ReadableSequentialData::chunk
pub trait ReadableSequentialData: SequentialData {
    /// Read one byte, failing with `BufferUnderflow` at the limit or EOF.
    fn read_byte(&mut self) -> Result<u8>;

    /// Read one byte, reporting a clean end of data as `Ok(None)`.
    ///
    /// This is how the field-dispatch loop distinguishes "no more fields"
    /// from "truncated field".
    fn try_read_byte(&mut self) -> Result<Option<u8>>;

    /// Fill `dst` exactly, failing with `BufferUnderflow` if fewer than
    /// `dst.len()` bytes remain.
    fn read_slice(&mut self, dst: &mut [u8]) -> Result<()>;

    /// The remaining readable bytes as one contiguous slice, if this source
    /// is memory-backed. Streams return `None`.
    ///
    /// The returned slice aliases the buffer's backing store; callers must
    /// drop it before mutating the buffer through any handle.
    fn chunk(&self) -> Option<&[u8]> {
        None
    }

    /// Read `len` bytes into a fresh [`Bytes`] that owns its storage.
    ///
    /// The copy is deliberate: the returned value must stay intact even if
    /// the source buffer is mutated or recycled afterwards.
    fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        let mut v = vec![0u8; len];
        self.read_slice(&mut v)?;
        Ok(Bytes::wrap(v))
    }

    /// Read a little-endian `u32`.
    #[inline]
    fn read_u32_le(&mut self) -> Result<u32> {
        let mut b = [0u8; 4];
        self.read_slice(&mut b)?;
        Ok(u32::from_le_bytes(b))
    }

    /// Read a little-endian `u64`.
    #[inline]
    fn read_u64_le(&mut self) -> Result<u64> {
        let mut b = [0u8; 8];
        self.read_slice(&mut b)?;
        Ok(u64::from_le_bytes(b))
    }

    /// Read an `i32` in the requested byte order.
    #[inline]
    fn read_i32(&mut self, order: ByteOrder) -> Result<i32> {
        let mut b = [0u8; 4];
        self.read_slice(&mut b)?;
        Ok(match order {
            ByteOrder::BigEndian => i32::from_be_bytes(b),
            ByteOrder::LittleEndian => i32::from_le_bytes(b),
        })
    }

    /// Read an `i64` in the requested byte order.
    #[inline]
    fn read_i64(&mut self, order: ByteOrder) -> Result<i64> {
        let mut b = [0u8; 8];
        self.read_slice(&mut b)?;
        Ok(match order {
            ByteOrder::BigEndian => i64::from_be_bytes(b),
            ByteOrder::LittleEndian => i64::from_le_bytes(b),
        })
    }

    /// Read an IEEE-754 single in the requested byte order.
    #[inline]
    fn read_f32(&mut self, order: ByteOrder) -> Result<f32> {
        self.read_i32(order).map(|v| f32::from_bits(v as u32))
    }

    /// Read an IEEE-754 double in the requested byte order.
    #[inline]
    fn read_f64(&mut self, order: ByteOrder) -> Result<f64> {
        self.read_i64(order).map(|v| f64::from_bits(v as u64))
    }

    /// Read a raw unsigned varint.
    ///
    /// Memory-backed sources decode from [`chunk`] in one pass; streams fall
    /// through to a `read_byte` loop.
    ///
    /// [`chunk`]: ReadableSequentialData::chunk
    fn read_var_u64(&mut self) -> Result<u64> {
        let fast = self.chunk().map(varint::decode);
        if let Some(res) = fast {
            let (value, consumed) = res?;
            self.skip(consumed as u64)?;
            return Ok(value);
        }
        let mut value = 0u64;
        for i in 0..varint::MAX_VARINT_LEN {
            let b = self.read_byte()?;
            value |= u64::from(b & 0x7F) << (7 * i);
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(WireError::Malformed("varint exceeds 10 bytes"))
    }

    /// Read a 32-bit varint, optionally zig-zag encoded.
    #[inline]
    fn read_var_int(&mut self, zigzag: bool) -> Result<i32> {
        let raw = self.read_var_u64()?;
        Ok(if zigzag {
            varint::zigzag_decode32(raw as u32)
        } else {
            raw as i32
        })
    }

    /// Read a 64-bit varint, optionally zig-zag encoded.
    #[inline]
    fn read_var_long(&mut self, zigzag: bool) -> Result<i64> {
        let raw = self.read_var_u64()?;
        Ok(if zigzag {
            varint::zigzag_decode64(raw)
        } else {
            raw as i64
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WritableSequentialData
// ─────────────────────────────────────────────────────────────────────────────

/// Cursor-based writing.
///
/// Fixed-width and varint helpers stage the value in a small stack buffer and
/// hand it to [`write_slice`] in a single call, so sinks that intercept
/// writes (hashing, streams) see each value as one contiguous span.
///
/// [`write_slice`]: WritableSequentialData::write_slice
pub trait WritableSequentialData: SequentialData {
    /// Write one byte, failing with `BufferOverflow` at the limit.
    fn write_byte(&mut self, b: u8) -> Result<()>;

    /// Write all of `src`, failing with `BufferOverflow` if it does not fit.
    fn write_slice(&mut self, src: &[u8]) -> Result<()>;

    /// Write a little-endian `u32`.
    #[inline]
    fn write_u32_le(&mut self, v: u32) -> Result<()> {
        self.write_slice(&v.to_le_bytes())
    }

    /// Write a little-endian `u64`.
    #[inline]
    fn write_u64_le(&mut self, v: u64) -> Result<()> {
        self.write_slice(&v.to_le_bytes())
    }

    /// Write an `i32` in the requested byte order.
    #[inline]
    fn write_i32(&mut self, v: i32, order: ByteOrder) -> Result<()> {
        match order {
            ByteOrder::BigEndian => self.write_slice(&v.to_be_bytes()),
            ByteOrder::LittleEndian => self.write_slice(&v.to_le_bytes()),
        }
    }

    /// Write an `i64` in the requested byte order.
    #[inline]
    fn write_i64(&mut self, v: i64, order: ByteOrder) -> Result<()> {
        match order {
            ByteOrder::BigEndian => self.write_slice(&v.to_be_bytes()),
            ByteOrder::LittleEndian => self.write_slice(&v.to_le_bytes()),
        }
    }

    /// Write an IEEE-754 single in the requested byte order.
    #[inline]
    fn write_f32(&mut self, v: f32, order: ByteOrder) -> Result<()> {
        self.write_i32(v.to_bits() as i32, order)
    }

    /// Write an IEEE-754 double in the requested byte order.
    #[inline]
    fn write_f64(&mut self, v: f64, order: ByteOrder) -> Result<()> {
        self.write_i64(v.to_bits() as i64, order)
    }

    /// Write a raw unsigned varint.
    #[inline]
    fn write_var_u64(&mut self, v: u64) -> Result<()> {
        let mut buf = [0u8; varint::MAX_VARINT_LEN];
        let n = varint::encode(v, &mut buf);
        self.write_slice(&buf[..n])
    }

    /// Write a 32-bit varint. Without zig-zag, negative values are
    /// sign-extended to 64 bits and cost the full 10 bytes.
    #[inline]
    fn write_var_int(&mut self, v: i32, zigzag: bool) -> Result<()> {
        if zigzag {
            self.write_var_u64(u64::from(varint::zigzag_encode32(v)))
        } else {
            self.write_var_u64(v as i64 as u64)
        }
    }

    /// Write a 64-bit varint, optionally zig-zag encoded.
    #[inline]
    fn write_var_long(&mut self, v: i64, zigzag: bool) -> Result<()> {
        if zigzag {
            self.write_var_u64(varint::zigzag_encode64(v))
        } else {
            self.write_var_u64(v as u64)
        }
    }

    /// Write the UTF-8 bytes of `s`.
    #[inline]
    fn write_utf8(&mut self, s: &str) -> Result<()> {
        self.write_slice(s.as_bytes())
    }

    /// Write the content of a byte blob.
    #[inline]
    fn write_bytes(&mut self, b: &Bytes) -> Result<()> {
        self.write_slice(b.as_ref())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RandomAccessData
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable absolute-offset access over length-known data.
///
/// Every convenience getter derives from `length` / `byte_at` / `get_bytes`,
/// so implementors only supply those three.
pub trait RandomAccessData {
    /// Total number of readable bytes.
    fn length(&self) -> u64;

    /// The byte at `offset`, or `BufferUnderflow` past the end.
    fn byte_at(&self, offset: u64) -> Result<u8>;

    /// Copy bytes starting at `offset` into `dst`, clamped by the source
    /// length. Returns the number of bytes copied. Moves no cursor.
    fn get_bytes(&self, offset: u64, dst: &mut [u8]) -> usize;

    /// The whole content as one contiguous slice, when the backing store is
    /// immutable memory. Mutable buffers return `None`.
    fn as_contiguous(&self) -> Option<&[u8]> {
        None
    }

    /// Little-endian `u32` at `offset`.
    #[inline]
    fn get_u32_le(&self, offset: u64) -> Result<u32> {
        let mut b = [0u8; 4];
        if self.get_bytes(offset, &mut b) < 4 {
            return Err(WireError::BufferUnderflow);
        }
        Ok(u32::from_le_bytes(b))
    }

    /// Little-endian `u64` at `offset`.
    #[inline]
    fn get_u64_le(&self, offset: u64) -> Result<u64> {
        let mut b = [0u8; 8];
        if self.get_bytes(offset, &mut b) < 8 {
            return Err(WireError::BufferUnderflow);
        }
        Ok(u64::from_le_bytes(b))
    }

    /// Little-endian `i32` at `offset`.
    #[inline]
    fn get_i32_le(&self, offset: u64) -> Result<i32> {
        self.get_u32_le(offset).map(|v| v as i32)
    }

    /// Little-endian `i64` at `offset`.
    #[inline]
    fn get_i64_le(&self, offset: u64) -> Result<i64> {
        self.get_u64_le(offset).map(|v| v as i64)
    }

    /// Little-endian single at `offset`.
    #[inline]
    fn get_f32_le(&self, offset: u64) -> Result<f32> {
        self.get_u32_le(offset).map(f32::from_bits)
    }

    /// Little-endian double at `offset`.
    #[inline]
    fn get_f64_le(&self, offset: u64) -> Result<f64> {
        self.get_u64_le(offset).map(f64::from_bits)
    }

    /// Decode a 32-bit varint at `offset`.
    fn get_var_int(&self, offset: u64, zigzag: bool) -> Result<i32> {
        let raw = self.get_var_raw(offset)?;
        Ok(if zigzag {
            varint::zigzag_decode32(raw as u32)
        } else {
            raw as i32
        })
    }

    /// Decode a 64-bit varint at `offset`.
    fn get_var_long(&self, offset: u64, zigzag: bool) -> Result<i64> {
        let raw = self.get_var_raw(offset)?;
        Ok(if zigzag {
            varint::zigzag_decode64(raw)
        } else {
            raw as i64
        })
    }

    /// Raw varint at `offset`.
    fn get_var_raw(&self, offset: u64) -> Result<u64> {
        let mut buf = [0u8; varint::MAX_VARINT_LEN];
        let n = self.get_bytes(offset, &mut buf);
        varint::decode(&buf[..n]).map(|(v, _)| v)
    }

    /// True when this data starts with `prefix`.
    fn matches_prefix(&self, prefix: &[u8]) -> bool {
        self.contains(0, prefix)
    }

    /// True when `other` occurs in full at `offset`.
    fn contains(&self, offset: u64, other: &[u8]) -> bool {
        if (other.len() as u64).saturating_add(offset) > self.length() {
            return false;
        }
        let mut scratch = [0u8; 64];
        let mut done = 0usize;
        while done < other.len() {
            let n = (other.len() - done).min(scratch.len());
            let got = self.get_bytes(offset + done as u64, &mut scratch[..n]);
            if got < n || scratch[..n] != other[done..done + n] {
                return false;
            }
            done += n;
        }
        true
    }

    /// The whole content validated as UTF-8.
    fn as_utf8(&self) -> Result<String> {
        if let Some(s) = self.as_contiguous() {
            return crate::utf8::validate(s).map(str::to_owned);
        }
        let mut v = vec![0u8; self.length() as usize];
        self.get_bytes(0, &mut v);
        crate::utf8::into_string(v)
    }
}
