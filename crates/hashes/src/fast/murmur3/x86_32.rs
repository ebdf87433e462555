//! MurmurHash3 x86_32: 4-byte blocks, 32-bit digest.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hasher};

use traits::{FastHash, StreamingHash};

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Bytes mixed per block.
pub const BLOCK_SIZE: usize = 4;
/// Bytes in a digest.
pub const OUTPUT_SIZE: usize = 4;

#[inline(always)]
const fn mix_k(k: u32) -> u32 {
  k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Folds every complete block of `data` into `h`.
///
/// Returns the new hash and the unconsumed remainder (shorter than one block).
#[inline(always)]
fn mix_blocks(mut h: u32, data: &[u8]) -> (u32, &[u8]) {
  let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
  for block in blocks {
    h ^= mix_k(u32::from_le_bytes(*block));
    h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
  }
  (h, tail)
}

/// Folds a partial block into `h`. Only the key mixing step applies; the
/// rotate/multiply-add is reserved for full blocks.
#[inline(always)]
fn mix_tail(h: u32, tail: &[u8]) -> u32 {
  debug_assert!(tail.len() < BLOCK_SIZE);
  let k = match *tail {
    [b0, b1, b2] => u32::from(b0) | (u32::from(b1) << 8) | (u32::from(b2) << 16),
    [b0, b1] => u32::from(b0) | (u32::from(b1) << 8),
    [b0] => u32::from(b0),
    _ => return h,
  };
  h ^ mix_k(k)
}

#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^ (h >> 16)
}

#[inline(always)]
const fn finalize(h: u32, len: usize) -> u32 {
  // The length is folded in modulo 2^32.
  fmix32(h ^ len as u32)
}

/// One-shot MurmurHash3 x86_32 of `data`.
///
/// Bit-identical to feeding `data` to [`Murmur3_32::with_seed`] in any number
/// of writes and calling [`Murmur3_32::sum32`].
#[inline]
#[must_use]
pub fn checksum32(data: &[u8], seed: u32) -> u32 {
  let (h, tail) = mix_blocks(seed, data);
  finalize(mix_tail(h, tail), data.len())
}

/// Streaming MurmurHash3 x86_32.
///
/// Holds the running hash, the total length written, and fewer than
/// [`BLOCK_SIZE`] pending bytes that have not been mixed yet. Querying the
/// digest never mutates the state, so writes may continue afterwards.
///
/// ```
/// use hashes::fast::murmur3::{Murmur3_32, checksum32};
///
/// let mut h = Murmur3_32::with_seed(42);
/// assert_eq!(h.write(b"hello "), 6);
/// assert_eq!(h.write(b"world"), 5);
/// assert_eq!(h.sum32(), checksum32(b"hello world", 42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Murmur3_32 {
  seed: u32,
  h: u32,
  total_len: usize,
  pending: [u8; BLOCK_SIZE],
  pending_len: usize,
}

impl Murmur3_32 {
  /// Fresh state keyed by `seed`.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { seed, h: seed, total_len: 0, pending: [0; BLOCK_SIZE], pending_len: 0 }
  }

  /// Hash `data`; always consumes all of it and returns `data.len()`.
  #[inline]
  pub fn write(&mut self, data: &[u8]) -> usize {
    self.absorb(data);
    data.len()
  }

  /// 32-bit digest of everything written so far.
  #[inline]
  #[must_use]
  pub fn sum32(&self) -> u32 {
    finalize(mix_tail(self.h, self.pending()), self.total_len)
  }

  /// Big-endian encoding of [`sum32`](Self::sum32).
  #[inline]
  #[must_use]
  pub fn digest_bytes(&self) -> [u8; OUTPUT_SIZE] {
    self.sum32().to_be_bytes()
  }

  /// Append the big-endian digest to `out` and return it.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  pub fn sum_bytes(&self, mut out: Vec<u8>) -> Vec<u8> {
    out.extend_from_slice(&self.digest_bytes());
    out
  }

  /// Return to the freshly constructed state with the original seed.
  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u32 {
    self.seed
  }

  /// Total bytes written since construction or the last reset.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.total_len
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.total_len == 0
  }

  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    BLOCK_SIZE
  }

  #[inline]
  #[must_use]
  pub const fn digest_size(&self) -> usize {
    OUTPUT_SIZE
  }

  #[inline]
  fn pending(&self) -> &[u8] {
    self.pending.split_at(self.pending_len).0
  }

  #[inline]
  fn buffer(&mut self, bytes: &[u8]) {
    let end = self.pending_len + bytes.len();
    debug_assert!(end <= BLOCK_SIZE);
    if let Some(dst) = self.pending.get_mut(self.pending_len..end) {
      dst.copy_from_slice(bytes);
      self.pending_len = end;
    }
  }

  fn absorb(&mut self, data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len());

    if self.pending_len + data.len() < BLOCK_SIZE {
      self.buffer(data);
      return;
    }

    let mut rest = data;
    if self.pending_len != 0 {
      let (head, tail) = rest.split_at(BLOCK_SIZE - self.pending_len);
      self.buffer(head);
      self.h = mix_blocks(self.h, &self.pending).0;
      self.pending_len = 0;
      rest = tail;
    }

    let (h, tail) = mix_blocks(self.h, rest);
    self.h = h;
    self.buffer(tail);
  }
}

impl Default for Murmur3_32 {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = OUTPUT_SIZE;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    checksum32(data, seed)
  }
}

impl StreamingHash for Murmur3_32 {
  const BLOCK_SIZE: usize = BLOCK_SIZE;

  #[inline]
  fn with_seed(seed: Self::Seed) -> Self {
    Self::with_seed(seed)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.absorb(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.sum32()
  }

  #[inline]
  fn reset(&mut self) {
    Self::reset(self);
  }
}

/// `finish()` is the 32-bit digest, zero-extended.
impl Hasher for Murmur3_32 {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.absorb(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    u64::from(self.sum32())
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Murmur3_32 {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    self.absorb(buf);
    Ok(buf.len())
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

/// [`BuildHasher`] producing [`Murmur3_32`] hashers with a fixed seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildMurmur3_32 {
  seed: u32,
}

impl BuildMurmur3_32 {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { seed }
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u32 {
    self.seed
  }
}

impl BuildHasher for BuildMurmur3_32 {
  type Hasher = Murmur3_32;

  #[inline]
  fn build_hasher(&self) -> Murmur3_32 {
    Murmur3_32::with_seed(self.seed)
  }
}
