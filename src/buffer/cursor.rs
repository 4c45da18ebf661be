//! Sequential reading over any random-access data.
//!
//! [`DataCursor`] pairs an immutable [`RandomAccessData`] with a
//! `(position, limit)` cursor, which is how a [`crate::bytes::Bytes`] blob is
//! fed to the parser without copying it into a mutable buffer first.

use super::{RandomAccessData, ReadableSequentialData, SequentialData};
use crate::error::{Result, WireError};

/// A read cursor over an owned [`RandomAccessData`] value.
pub struct DataCursor<D> {
    data: D,
    position: u64,
    limit: u64,
}

impl<D: RandomAccessData> DataCursor<D> {
    /// Cursor at position 0 with the limit at the end of `data`.
    pub fn new(data: D) -> Self {
        let limit = data.length();
        DataCursor {
            data,
            position: 0,
            limit,
        }
    }

    /// The wrapped data, discarding the cursor.
    pub fn into_inner(self) -> D {
        self.data
    }
}

impl<D: RandomAccessData> SequentialData for DataCursor<D> {
    #[inline]
    fn capacity(&self) -> u64 {
        self.data.length()
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
        self.limit = limit.min(self.data.length()).max(self.position);
    }

    fn skip(&mut self, n: u64) -> Result<u64> {
        let step = n.min(self.limit - self.position);
        self.position += step;
        Ok(step)
    }
}

impl<D: RandomAccessData> ReadableSequentialData for DataCursor<D> {
    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        if self.position >= self.limit {
            return Err(WireError::BufferUnderflow);
        }
        let b = self.data.byte_at(self.position)?;
        self.position += 1;
        Ok(b)
    }

    #[inline]
    fn try_read_byte(&mut self) -> Result<Option<u8>> {
        if self.position >= self.limit {
            return Ok(None);
        }
        self.read_byte().map(Some)
    }

    fn read_slice(&mut self, dst: &mut [u8]) -> Result<()> {
        if (dst.len() as u64) > self.limit - self.position {
            return Err(WireError::BufferUnderflow);
        }
        let got = self.data.get_bytes(self.position, dst);
        if got < dst.len() {
            return Err(WireError::BufferUnderflow);
        }
        self.position += dst.len() as u64;
        Ok(())
    }

    #[inline]
    fn chunk(&self) -> Option<&[u8]> {
        self.data
            .as_contiguous()
            .map(|s| &s[self.position as usize..self.limit as usize])
    }
}
