//! Fixed-width little-endian loads and stores over byte slices.
//!
//! These are the bounds-checked primitives behind every absolute-offset
//! accessor in the buffer layer. Out-of-range offsets are reported as
//! `BufferUnderflow` / `BufferOverflow` rather than panicking, because the
//! offsets here routinely come straight from untrusted wire data.

use crate::error::{Result, WireError};

#[inline]
fn load<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    let end = offset.checked_add(N).ok_or(WireError::BufferUnderflow)?;
    let src = buf.get(offset..end).ok_or(WireError::BufferUnderflow)?;
    let mut out = [0u8; N];
    out.copy_from_slice(src);
    Ok(out)
}

#[inline]
fn store(buf: &mut [u8], offset: usize, src: &[u8]) -> Result<()> {
    let end = offset
        .checked_add(src.len())
        .ok_or(WireError::BufferOverflow)?;
    buf.get_mut(offset..end)
        .ok_or(WireError::BufferOverflow)?
        .copy_from_slice(src);
    Ok(())
}

/// Read a little-endian `u32` at `offset`.
#[inline]
pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32> {
    load::<4>(buf, offset).map(u32::from_le_bytes)
}

/// Read a little-endian `u64` at `offset`.
#[inline]
pub fn read_u64_le(buf: &[u8], offset: usize) -> Result<u64> {
    load::<8>(buf, offset).map(u64::from_le_bytes)
}

/// Read a little-endian `i32` at `offset`.
#[inline]
pub fn read_i32_le(buf: &[u8], offset: usize) -> Result<i32> {
    load::<4>(buf, offset).map(i32::from_le_bytes)
}

/// Read a little-endian `i64` at `offset`.
#[inline]
pub fn read_i64_le(buf: &[u8], offset: usize) -> Result<i64> {
    load::<8>(buf, offset).map(i64::from_le_bytes)
}

/// Read a little-endian IEEE-754 single at `offset`.
#[inline]
pub fn read_f32_le(buf: &[u8], offset: usize) -> Result<f32> {
    read_u32_le(buf, offset).map(f32::from_bits)
}

/// Read a little-endian IEEE-754 double at `offset`.
#[inline]
pub fn read_f64_le(buf: &[u8], offset: usize) -> Result<f64> {
    read_u64_le(buf, offset).map(f64::from_bits)
}

/// Store `v` little-endian at `offset`.
#[inline]
pub fn write_u32_le(buf: &mut [u8], offset: usize, v: u32) -> Result<()> {
    store(buf, offset, &v.to_le_bytes())
}

/// Store `v` little-endian at `offset`.
#[inline]
pub fn write_u64_le(buf: &mut [u8], offset: usize, v: u64) -> Result<()> {
    store(buf, offset, &v.to_le_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_are_little_endian() {
        let buf = [0x78, 0x56, 0x34, 0x12, 0xEF, 0xCD, 0xAB, 0x89];
        assert_eq!(read_u32_le(&buf, 0).unwrap(), 0x1234_5678);
        assert_eq!(read_u32_le(&buf, 4).unwrap(), 0x89AB_CDEF);
        assert_eq!(read_u64_le(&buf, 0).unwrap(), 0x89AB_CDEF_1234_5678);
        assert_eq!(read_i32_le(&buf, 4).unwrap(), 0x89AB_CDEFu32 as i32);
    }

    #[test]
    fn floats_round_trip_through_bits() {
        let mut buf = [0u8; 8];
        write_u32_le(&mut buf, 0, 1.5f32.to_bits()).unwrap();
        assert_eq!(read_f32_le(&buf, 0).unwrap(), 1.5);
        write_u64_le(&mut buf, 0, (-2.25f64).to_bits()).unwrap();
        assert_eq!(read_f64_le(&buf, 0).unwrap(), -2.25);
    }

    #[test]
    fn out_of_range_offsets_are_rejected() {
        let buf = [0u8; 7];
        assert!(matches!(
            read_u64_le(&buf, 0),
            Err(WireError::BufferUnderflow)
        ));
        assert!(matches!(
            read_u32_le(&buf, 4),
            Err(WireError::BufferUnderflow)
        ));
        assert!(matches!(
            read_u32_le(&buf, usize::MAX - 1),
            Err(WireError::BufferUnderflow)
        ));
        let mut buf = [0u8; 3];
        assert!(matches!(
            write_u32_le(&mut buf, 0, 1),
            Err(WireError::BufferOverflow)
        ));
    }
}
