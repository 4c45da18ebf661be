//! A writable sink that hashes instead of storing.
//!
//! [`HashingData`] implements [`WritableSequentialData`] by feeding every
//! write into a streaming hash, so a codec's ordinary `write` path doubles as
//! a message fingerprint without materializing the encoded bytes anywhere.
//!
//! Fixed-width writes are normalized to little-endian before they reach the
//! hasher, whatever byte order the caller requested: hashing a value written
//! as a word must equal hashing the same bytes written one at a time, and the
//! wire format's native order is the canonical one. Every multi-byte write is
//! staged in a small stack scratch buffer and handed to the hasher in a
//! single `update` call.

use sha2::Digest;

use super::{ByteOrder, SequentialData, WritableSequentialData};
use crate::bytes::Bytes;
use crate::error::Result;
use crate::xxhash::Xxh3State;

/// A streaming hash a [`HashingData`] can feed.
///
/// `finalize` must not disturb the running state: callers may keep writing
/// after taking a hash and finalize again, with both results coherent for
/// their respective prefixes.
pub trait StreamingHash {
    /// The finalized hash value.
    type Output;

    /// Absorb `data`.
    fn update(&mut self, data: &[u8]);

    /// Produce the hash of everything absorbed so far.
    fn finalize(&self) -> Self::Output;

    /// Forget everything absorbed so far.
    fn reset(&mut self);
}

/// Streaming XXH3-64 with seed 0 and the canonical secret.
pub struct Xxh3Sink(Xxh3State);

impl Xxh3Sink {
    /// Fresh accumulator.
    pub fn new() -> Self {
        Xxh3Sink(Xxh3State::new())
    }
}

impl Default for Xxh3Sink {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHash for Xxh3Sink {
    type Output = u64;

    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    #[inline]
    fn finalize(&self) -> u64 {
        // Xxh3::digest folds the accumulators into a value without mutating
        // them, so further updates stay coherent.
        self.0.digest()
    }

    fn reset(&mut self) {
        self.0 = Xxh3State::new();
    }
}

/// Streaming SHA-256.
pub struct Sha256Sink(sha2::Sha256);

impl Sha256Sink {
    /// Fresh digest state.
    pub fn new() -> Self {
        Sha256Sink(sha2::Sha256::new())
    }
}

impl Default for Sha256Sink {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingHash for Sha256Sink {
    type Output = Bytes;

    #[inline]
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(&self) -> Bytes {
        // The digest API consumes the state on finalize; clone so the live
        // state keeps absorbing.
        let out = self.0.clone().finalize();
        Bytes::copy_from_slice(&out)
    }

    fn reset(&mut self) {
        self.0 = sha2::Sha256::new();
    }
}

/// Writable sequential data whose bytes land in a streaming hash.
///
/// `capacity` and `limit` are unbounded; `position` counts bytes absorbed
/// since construction or the last [`reset`](HashingData::reset).
pub struct HashingData<H> {
    hasher: H,
    position: u64,
}

impl HashingData<Xxh3Sink> {
    /// Sink computing XXH3-64.
    pub fn xxh3() -> Self {
        Self::with(Xxh3Sink::new())
    }
}

impl HashingData<Sha256Sink> {
    /// Sink computing SHA-256.
    pub fn sha256() -> Self {
        Self::with(Sha256Sink::new())
    }
}

impl<H: StreamingHash> HashingData<H> {
    /// Sink over a caller-provided hasher.
    pub fn with(hasher: H) -> Self {
        HashingData {
            hasher,
            position: 0,
        }
    }

    /// The hash of everything written so far. Writing may continue
    /// afterwards; a later call covers the longer prefix.
    pub fn hash(&self) -> H::Output {
        self.hasher.finalize()
    }

    /// Restore the sink to its initial state.
    pub fn reset(&mut self) {
        self.hasher.reset();
        self.position = 0;
    }
}

impl<H: StreamingHash> SequentialData for HashingData<H> {
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
        u64::MAX
    }

    /// The limit of a hashing sink is fixed at unbounded.
    fn set_limit(&mut self, _limit: u64) {}

    /// Advance by hashing `n` zero bytes.
    fn skip(&mut self, n: u64) -> Result<u64> {
        let zeros = [0u8; 64];
        let mut left = n;
        while left > 0 {
            let step = left.min(zeros.len() as u64) as usize;
            self.hasher.update(&zeros[..step]);
            left -= step as u64;
        }
        self.position += n;
        Ok(n)
    }
}

impl<H: StreamingHash> WritableSequentialData for HashingData<H> {
    #[inline]
    fn write_byte(&mut self, b: u8) -> Result<()> {
        self.hasher.update(&[b]);
        self.position += 1;
        Ok(())
    }

    #[inline]
    fn write_slice(&mut self, src: &[u8]) -> Result<()> {
        self.hasher.update(src);
        self.position += src.len() as u64;
        Ok(())
    }

    // Fixed-width writes ignore the requested order: the hash always sees
    // little-endian bytes, staged through a stack scratch buffer.

    #[inline]
    fn write_i32(&mut self, v: i32, _order: ByteOrder) -> Result<()> {
        self.write_slice(&v.to_le_bytes())
    }

    #[inline]
    fn write_i64(&mut self, v: i64, _order: ByteOrder) -> Result<()> {
        self.write_slice(&v.to_le_bytes())
    }

    #[inline]
    fn write_f32(&mut self, v: f32, _order: ByteOrder) -> Result<()> {
        self.write_slice(&v.to_bits().to_le_bytes())
    }

    #[inline]
    fn write_f64(&mut self, v: f64, _order: ByteOrder) -> Result<()> {
        self.write_slice(&v.to_bits().to_le_bytes())
    }
}
