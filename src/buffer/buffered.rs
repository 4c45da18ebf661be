//! Finite buffers over shared, reference-counted storage.
//!
//! A [`BufferedData`] is a window `(origin, length)` into a [`Storage`]
//! allocation plus its own `(position, limit)` cursor. `slice` and `view`
//! produce further windows over the *same* allocation, so writes through any
//! handle are visible through all of them; what each handle owns privately is
//! only its cursor. The `Rc` backing makes every handle `!Send`, which is the
//! enforcement of the single-thread contract for mutable buffers.

use std::fmt;
use std::rc::Rc;

use super::storage::Storage;
use super::{RandomAccessData, ReadableSequentialData, SequentialData, WritableSequentialData};
use crate::error::{Result, WireError};

/// A finite sequential buffer backed by heap or off-heap memory.
pub struct BufferedData {
    storage: Rc<Storage>,
    /// Absolute start of this buffer's window within the storage.
    origin: usize,
    /// Window length; this buffer's capacity.
    len: usize,
    /// Cursor, relative to `origin`. Invariant: `position ≤ limit ≤ len`.
    position: usize,
    limit: usize,
}

impl BufferedData {
    /// New zero-filled heap buffer with `position = 0`, `limit = capacity = n`.
    pub fn allocate(n: usize) -> Self {
        Self::over(Rc::new(Storage::heap(n)))
    }

    /// New zero-filled buffer in memory mapped outside the Rust allocator.
    ///
    /// # Errors
    /// `Io` when the operating system refuses the mapping.
    pub fn allocate_off_heap(n: usize) -> Result<Self> {
        Ok(Self::over(Rc::new(Storage::off_heap(n)?)))
    }

    /// Adopt `data` as the backing store, readable and writable over its full
    /// length.
    pub fn wrap(data: Vec<u8>) -> Self {
        Self::over(Rc::new(Storage::from_vec(data)))
    }

    /// Adopt `data` with the cursor pre-positioned: `position = offset`,
    /// `limit = offset + len`, capacity the full vector length.
    ///
    /// # Errors
    /// `InvalidArgument` when the range does not fit in `data`.
    pub fn wrap_range(data: Vec<u8>, offset: usize, len: usize) -> Result<Self> {
        let total = data.len();
        let end = offset
            .checked_add(len)
            .ok_or(WireError::InvalidArgument("wrap range overflows"))?;
        if end > total {
            return Err(WireError::InvalidArgument("wrap range outside the data"));
        }
        let mut buf = Self::over(Rc::new(Storage::from_vec(data)));
        buf.position = offset;
        buf.limit = end;
        Ok(buf)
    }

    fn over(storage: Rc<Storage>) -> Self {
        let len = storage.len();
        BufferedData {
            storage,
            origin: 0,
            len,
            position: 0,
            limit: len,
        }
    }

    /// A sub-buffer over `[offset, offset + len)` of this buffer's window,
    /// sharing storage, with a fresh independent cursor. This buffer's own
    /// cursor is untouched.
    ///
    /// # Errors
    /// `InvalidArgument` when the range falls outside the capacity.
    pub fn slice(&self, offset: usize, len: usize) -> Result<BufferedData> {
        let end = offset
            .checked_add(len)
            .ok_or(WireError::InvalidArgument("slice range overflows"))?;
        if end > self.len {
            return Err(WireError::InvalidArgument("slice outside the buffer"));
        }
        Ok(BufferedData {
            storage: Rc::clone(&self.storage),
            origin: self.origin + offset,
            len,
            position: 0,
            limit: len,
        })
    }

    /// A sub-buffer over the next `len` readable bytes, sharing storage, and
    /// advance this buffer's position past them. Views can be chained:
    /// a view of a view windows the same root allocation.
    ///
    /// # Errors
    /// `BufferUnderflow` when fewer than `len` bytes remain.
    pub fn view(&mut self, len: usize) -> Result<BufferedData> {
        if len > self.limit - self.position {
            return Err(WireError::BufferUnderflow);
        }
        let child = BufferedData {
            storage: Rc::clone(&self.storage),
            origin: self.origin + self.position,
            len,
            position: 0,
            limit: len,
        };
        self.position += len;
        Ok(child)
    }

    /// Move the cursor back to the start; the limit stays where it is.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Flip from filling to draining: `limit = position`, `position = 0`.
    pub fn flip(&mut self) {
        self.limit = self.position;
        self.position = 0;
    }

    #[inline]
    fn abs(&self, relative: usize) -> usize {
        self.origin + relative
    }
}

impl SequentialData for BufferedData {
    #[inline]
    fn capacity(&self) -> u64 {
        self.len as u64
    }

    #[inline]
    fn position(&self) -> u64 {
        self.position as u64
    }

    #[inline]
    fn limit(&self) -> u64 {
        self.limit as u64
    }

    fn set_limit(&mut self, limit: u64) {
        let clamped = limit.min(self.len as u64) as usize;
        self.limit = clamped.max(self.position);
    }

    fn skip(&mut self, n: u64) -> Result<u64> {
        let step = n.min((self.limit - self.position) as u64);
        self.position += step as usize;
        Ok(step)
    }
}

impl ReadableSequentialData for BufferedData {
    #[inline]
    fn read_byte(&mut self) -> Result<u8> {
        if self.position >= self.limit {
            return Err(WireError::BufferUnderflow);
        }
        let b = self.storage.get(self.abs(self.position));
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
        if dst.len() > self.limit - self.position {
            return Err(WireError::BufferUnderflow);
        }
        self.storage.copy_out(self.abs(self.position), dst);
        self.position += dst.len();
        Ok(())
    }

    #[inline]
    fn chunk(&self) -> Option<&[u8]> {
        Some(
            self.storage
                .as_slice(self.abs(self.position), self.limit - self.position),
        )
    }
}

impl WritableSequentialData for BufferedData {
    #[inline]
    fn write_byte(&mut self, b: u8) -> Result<()> {
        if self.position >= self.limit {
            return Err(WireError::BufferOverflow);
        }
        self.storage.set(self.abs(self.position), b);
        self.position += 1;
        Ok(())
    }

    fn write_slice(&mut self, src: &[u8]) -> Result<()> {
        if src.len() > self.limit - self.position {
            return Err(WireError::BufferOverflow);
        }
        self.storage.copy_in(self.abs(self.position), src);
        self.position += src.len();
        Ok(())
    }
}

impl RandomAccessData for BufferedData {
    #[inline]
    fn length(&self) -> u64 {
        self.len as u64
    }

    #[inline]
    fn byte_at(&self, offset: u64) -> Result<u8> {
        if offset >= self.len as u64 {
            return Err(WireError::BufferUnderflow);
        }
        Ok(self.storage.get(self.abs(offset as usize)))
    }

    fn get_bytes(&self, offset: u64, dst: &mut [u8]) -> usize {
        if offset >= self.len as u64 {
            return 0;
        }
        let offset = offset as usize;
        let n = dst.len().min(self.len - offset);
        self.storage.copy_out(self.abs(offset), &mut dst[..n]);
        n
    }
}

impl fmt::Debug for BufferedData {
    /// Type tag plus the content from 0 to `limit`, independent of the
    /// current position.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BufferedData[capacity={} position={} limit={}]#",
            self.len, self.position, self.limit
        )?;
        for i in 0..self.limit {
            write!(f, "{:02x}", self.storage.get(self.abs(i)))?;
        }
        Ok(())
    }
}
