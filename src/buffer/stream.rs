//! Sequential data over `std::io` streams.
//!
//! Stream-backed data has no random access and no views: the position only
//! moves forward, the capacity is unbounded, and the limit defaults to
//! `u64::MAX` but can be lowered to hard-cap how much a parse may consume.
//! Interrupted system calls are retried; everything else surfaces as `Io`.

use std::io::{self, Read, Write};

use super::{ReadableSequentialData, SequentialData, WritableSequentialData};
use crate::error::{Result, WireError};

const SKIP_CHUNK: usize = 8 * 1024;

// ─────────────────────────────────────────────────────────────────────────────
// ReadStream
// ─────────────────────────────────────────────────────────────────────────────

/// Readable sequential data over any [`io::Read`].
pub struct ReadStream<R> {
    inner: R,
    position: u64,
    limit: u64,
}

impl<R: Read> ReadStream<R> {
    /// Stream with an unbounded limit.
    pub fn new(inner: R) -> Self {
        ReadStream {
            inner,
            position: 0,
            limit: u64::MAX,
        }
    }

    /// The underlying reader, discarding the cursor.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn pull(&mut self, dst: &mut [u8]) -> Result<usize> {
        loop {
            match self.inner.read(dst) {
                Ok(n) => {
                    self.position += n as u64;
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(WireError::Io(e)),
            }
        }
    }
}

impl<R: Read> SequentialData for ReadStream<R> {
    #[inline]
    fn capacity(&self) -> u64 {
        u64::MAX
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    fn limit(&self) -> u64 {
        self.limit
    }

    fn set_limit(&mut self, limit: u64) {
        self.limit = limit.max(self.position);
    }

    /// Consume up to `n` bytes from the stream, blocking as the underlying
    /// reader does. Returns the number actually consumed, which falls short
    /// only at end of stream or at the limit.
    fn skip(&mut self, n: u64) -> Result<u64> {
        let mut left = n.min(self.remaining());
        let skipped_target = left;
        let mut scratch = [0u8; SKIP_CHUNK];
        while left > 0 {
            let want = left.min(SKIP_CHUNK as u64) as usize;
            let got = self.pull(&mut scratch[..want])?;
            if got == 0 {
                break;
            }
            left -= got as u64;
        }
        Ok(skipped_target - left)
    }
}

impl<R: Read> ReadableSequentialData for ReadStream<R> {
    fn read_byte(&mut self) -> Result<u8> {
        match self.try_read_byte()? {
            Some(b) => Ok(b),
            None => Err(WireError::BufferUnderflow),
        }
    }

    fn try_read_byte(&mut self) -> Result<Option<u8>> {
        if self.position >= self.limit {
            return Ok(None);
        }
        let mut b = [0u8; 1];
        match self.pull(&mut b)? {
            0 => Ok(None),
            _ => Ok(Some(b[0])),
        }
    }

    fn read_slice(&mut self, dst: &mut [u8]) -> Result<()> {
        if (dst.len() as u64) > self.remaining() {
            return Err(WireError::BufferUnderflow);
        }
        let mut filled = 0;
        while filled < dst.len() {
            let got = self.pull(&mut dst[filled..])?;
            if got == 0 {
                return Err(WireError::BufferUnderflow);
            }
            filled += got;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WriteStream
// ─────────────────────────────────────────────────────────────────────────────

/// Writable sequential data over any [`io::Write`].
///
/// Unlike a fixed buffer the downstream sink grows as needed, so writes only
/// fail when a caller-lowered limit is hit or the sink itself errors.
pub struct WriteStream<W> {
    inner: W,
    position: u64,
    limit: u64,
}

impl<W: Write> WriteStream<W> {
    /// Stream with an unbounded limit.
    pub fn new(inner: W) -> Self {
        WriteStream {
            inner,
            position: 0,
            limit: u64::MAX,
        }
    }

    /// Flush the downstream sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(WireError::Io)
    }

    /// The underlying writer, discarding the cursor.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> SequentialData for WriteStream<W> {
    #[inline]
    fn capacity(&self) -> u64 {
        u64::MAX
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    fn limit(&self) -> u64 {
        self.limit
    }

    fn set_limit(&mut self, limit: u64) {
        self.limit = limit.max(self.position);
    }

    /// Advance by writing `n` zero bytes.
    fn skip(&mut self, n: u64) -> Result<u64> {
        let n = n.min(self.remaining());
        let zeros = [0u8; SKIP_CHUNK];
        let mut left = n;
        while left > 0 {
            let step = left.min(SKIP_CHUNK as u64) as usize;
            self.inner.write_all(&zeros[..step])?;
            self.position += step as u64;
            left -= step as u64;
        }
        Ok(n)
    }
}

impl<W: Write> WritableSequentialData for WriteStream<W> {
    #[inline]
    fn write_byte(&mut self, b: u8) -> Result<()> {
        self.write_slice(&[b])
    }

    fn write_slice(&mut self, src: &[u8]) -> Result<()> {
        if (src.len() as u64) > self.remaining() {
            return Err(WireError::BufferOverflow);
        }
        self.inner.write_all(src)?;
        self.position += src.len() as u64;
        Ok(())
    }
}
