//! Immutable byte blobs.
//!
//! [`Bytes`] is the value type for `bytes` fields and for raw message
//! payloads held before lazy parsing. It is immutable, content-compared,
//! cheap to clone, and safe to share across threads. Slicing shares the
//! backing allocation; that sharing is an optimization callers cannot
//! observe.

use std::fmt;

use crate::buffer::{DataCursor, RandomAccessData};
use crate::error::{Result, WireError};
use crate::utf8;
use crate::xxhash;

/// An immutable, length-known sequence of octets.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes {
    data: ::bytes::Bytes,
}

impl Bytes {
    /// The empty blob.
    pub fn empty() -> Self {
        Bytes {
            data: ::bytes::Bytes::new(),
        }
    }

    /// Take ownership of `data` without copying.
    pub fn wrap(data: Vec<u8>) -> Self {
        Bytes { data: data.into() }
    }

    /// Copy `data` into a fresh blob.
    pub fn copy_from_slice(data: &[u8]) -> Self {
        Bytes {
            data: ::bytes::Bytes::copy_from_slice(data),
        }
    }

    /// Wrap a static byte string without copying.
    pub fn from_static(data: &'static [u8]) -> Self {
        Bytes {
            data: ::bytes::Bytes::from_static(data),
        }
    }

    /// Number of octets.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for the zero-length blob.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The byte at `index`.
    #[inline]
    pub fn get_byte(&self, index: usize) -> Result<u8> {
        self.data
            .get(index)
            .copied()
            .ok_or(WireError::BufferUnderflow)
    }

    /// A sub-blob over `[offset, offset + len)`, sharing storage.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Bytes> {
        let end = offset
            .checked_add(len)
            .ok_or(WireError::InvalidArgument("slice range overflows"))?;
        if end > self.data.len() {
            return Err(WireError::InvalidArgument("slice outside the data"));
        }
        Ok(Bytes {
            data: self.data.slice(offset..end),
        })
    }

    /// The content validated as UTF-8, borrowed.
    pub fn as_utf8_str(&self) -> Result<&str> {
        utf8::validate(&self.data)
    }

    /// The content as a borrowed slice.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The content copied into a fresh vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// A sequential read cursor over this blob (cheap, shares storage).
    pub fn open(&self) -> DataCursor<Bytes> {
        DataCursor::new(self.clone())
    }

    /// XXH3-64 fingerprint of the content.
    pub fn hash64(&self) -> u64 {
        xxhash::xxh3_64(&self.data)
    }
}

impl RandomAccessData for Bytes {
    #[inline]
    fn length(&self) -> u64 {
        self.data.len() as u64
    }

    #[inline]
    fn byte_at(&self, offset: u64) -> Result<u8> {
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.data.get(i).copied())
            .ok_or(WireError::BufferUnderflow)
    }

    fn get_bytes(&self, offset: u64, dst: &mut [u8]) -> usize {
        let Ok(offset) = usize::try_from(offset) else {
            return 0;
        };
        if offset >= self.data.len() {
            return 0;
        }
        let n = dst.len().min(self.data.len() - offset);
        dst[..n].copy_from_slice(&self.data[offset..offset + n]);
        n
    }

    #[inline]
    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl AsRef<[u8]> for Bytes {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes::wrap(v)
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes[{}]#", self.data.len())?;
        for b in self.data.iter() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_share_content_and_compare_by_value() {
        let a = Bytes::wrap(b"protobuf wire".to_vec());
        let b = a.slice(9, 4).unwrap();
        assert_eq!(b.as_slice(), b"wire");
        assert_eq!(b, Bytes::copy_from_slice(b"wire"));
        assert!(a.slice(10, 4).is_err());
    }

    #[test]
    fn prefix_and_contains() {
        let b = Bytes::from_static(b"\x08\xAE\x2C\x10\xD2\x09");
        assert!(b.matches_prefix(&[0x08, 0xAE]));
        assert!(!b.matches_prefix(&[0x09]));
        assert!(b.contains(3, &[0x10, 0xD2]));
        assert!(!b.contains(5, &[0x09, 0x00]));
    }

    #[test]
    fn varints_at_absolute_offsets() {
        // field 1 varint 5678, field 2 varint 1234
        let b = Bytes::from_static(&[0x08, 0xAE, 0x2C, 0x10, 0xD2, 0x09]);
        assert_eq!(b.get_var_long(1, false).unwrap(), 5678);
        assert_eq!(b.get_var_long(4, false).unwrap(), 1234);
    }

    #[test]
    fn utf8_accessor_validates() {
        assert_eq!(
            Bytes::copy_from_slice("héllo".as_bytes())
                .as_utf8_str()
                .unwrap(),
            "héllo"
        );
        assert!(Bytes::from_static(&[0xC3]).as_utf8_str().is_err());
    }

    #[test]
    fn debug_shows_tag_and_hex() {
        let b = Bytes::from_static(&[0xCA, 0xFE]);
        assert_eq!(format!("{b:?}"), "Bytes[2]#cafe");
    }
}
