//! MurmurHash3 x64_128: 16-byte blocks, 128-bit digest as two `u64` halves.
//!
//! The finalizer ends by rotating each half by 32 bits. That swap is part of
//! this crate's output; [`smhasher_halves`] undoes it to obtain the halves
//! produced by the reference `MurmurHash3_x64_128`.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hasher};

use traits::{FastHash, StreamingHash};

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// Bytes mixed per block.
pub const BLOCK_SIZE: usize = 16;
/// Bytes in a digest.
pub const OUTPUT_SIZE: usize = 16;

#[inline(always)]
const fn mix_k1(k1: u64) -> u64 {
  k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline(always)]
const fn mix_k2(k2: u64) -> u64 {
  k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

/// Complete blocks of `data` as little-endian `(k1, k2)` word pairs, plus the
/// remainder shorter than one block.
#[inline(always)]
fn blocks(data: &[u8]) -> (&[[[u8; 8]; 2]], &[u8]) {
  let (blocks, tail) = data.as_chunks::<BLOCK_SIZE>();
  let (words, _) = blocks.as_flattened().as_chunks::<8>();
  (words.as_chunks::<2>().0, tail)
}

/// Folds every complete block of `data` into `(h1, h2)`.
///
/// Returns the new halves and the unconsumed remainder.
#[inline(always)]
fn mix_blocks(mut h1: u64, mut h2: u64, data: &[u8]) -> (u64, u64, &[u8]) {
  let (pairs, tail) = blocks(data);
  for &[w1, w2] in pairs {
    // h1 must be fully updated (against the old h2) before h2 reads it.
    h1 ^= mix_k1(u64::from_le_bytes(w1));
    h1 = h1.rotate_left(27).wrapping_add(h2).wrapping_mul(5).wrapping_add(0x52dc_e729);

    h2 ^= mix_k2(u64::from_le_bytes(w2));
    h2 = h2.rotate_left(31).wrapping_add(h1).wrapping_mul(5).wrapping_add(0x3849_5ab5);
  }
  (h1, h2, tail)
}

/// Little-endian value of up to eight bytes, zero-extended.
#[inline(always)]
fn le_partial(bytes: &[u8]) -> u64 {
  debug_assert!(bytes.len() <= 8);
  bytes.iter().rev().fold(0, |k, &b| (k << 8) | u64::from(b))
}

/// Folds a partial block into `(h1, h2)`.
///
/// Bytes 8.. of the tail feed `k2`/`h2`, bytes ..8 feed `k1`/`h1`; an empty
/// range leaves its half untouched.
#[inline(always)]
fn mix_tail(mut h1: u64, mut h2: u64, tail: &[u8]) -> (u64, u64) {
  debug_assert!(tail.len() < BLOCK_SIZE);
  let (lo, hi) = tail.split_at(tail.len().min(8));
  if !hi.is_empty() {
    h2 ^= mix_k2(le_partial(hi));
  }
  if !lo.is_empty() {
    h1 ^= mix_k1(le_partial(lo));
  }
  (h1, h2)
}

#[inline(always)]
const fn fmix64(mut k: u64) -> u64 {
  k ^= k >> 33;
  k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
  k ^= k >> 33;
  k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
  k ^ (k >> 33)
}

#[inline(always)]
const fn finalize(mut h1: u64, mut h2: u64, len: usize) -> (u64, u64) {
  let len = len as u64;
  h1 ^= len;
  h2 ^= len;

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  h1 = fmix64(h1);
  h2 = fmix64(h2);

  h1 = h1.wrapping_add(h2);
  h2 = h2.wrapping_add(h1);

  (h1.rotate_left(32), h2.rotate_left(32))
}

/// Converts a digest from this module into the `(h1, h2)` pair the SMHasher
/// reference `MurmurHash3_x64_128` writes, by undoing the final half swap.
///
/// The reference seeds with a `u32`; the conversion only matches it for seeds
/// below 2^32.
#[inline]
#[must_use]
pub const fn smhasher_halves(digest: (u64, u64)) -> (u64, u64) {
  (digest.0.rotate_left(32), digest.1.rotate_left(32))
}

/// One-shot MurmurHash3 x64_128 of `data`; both halves start at `seed`.
///
/// Bit-identical to the streaming [`Murmur3_128`] fed the same bytes.
#[inline]
#[must_use]
pub fn checksum128(data: &[u8], seed: u64) -> (u64, u64) {
  let (h1, h2, tail) = mix_blocks(seed, seed, data);
  let (h1, h2) = mix_tail(h1, h2, tail);
  finalize(h1, h2, data.len())
}

/// Streaming MurmurHash3 x64_128.
///
/// ```
/// use hashes::fast::murmur3::{Murmur3_128, checksum128};
///
/// let mut h = Murmur3_128::with_seed(7);
/// h.write(b"fifteen bytes..");
/// h.write(b"and then some more");
/// assert_eq!(h.sum128(), checksum128(b"fifteen bytes..and then some more", 7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Murmur3_128 {
  seed: u64,
  h1: u64,
  h2: u64,
  total_len: usize,
  pending: [u8; BLOCK_SIZE],
  pending_len: usize,
}

impl Murmur3_128 {
  /// Fresh state; `seed` initializes both halves.
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self { seed, h1: seed, h2: seed, total_len: 0, pending: [0; BLOCK_SIZE], pending_len: 0 }
  }

  /// Hash `data`; always consumes all of it and returns `data.len()`.
  #[inline]
  pub fn write(&mut self, data: &[u8]) -> usize {
    self.absorb(data);
    data.len()
  }

  /// 128-bit digest `(h1, h2)` of everything written so far.
  #[inline]
  #[must_use]
  pub fn sum128(&self) -> (u64, u64) {
    let (h1, h2) = mix_tail(self.h1, self.h2, self.pending());
    finalize(h1, h2, self.total_len)
  }

  /// `h1` then `h2`, each big-endian.
  #[inline]
  #[must_use]
  pub fn digest_bytes(&self) -> [u8; OUTPUT_SIZE] {
    let (h1, h2) = self.sum128();
    ((u128::from(h1) << 64) | u128::from(h2)).to_be_bytes()
  }

  /// Append the 16 digest bytes to `out` and return it.
  #[cfg(feature = "alloc")]
  #[inline]
  #[must_use]
  pub fn sum_bytes(&self, mut out: Vec<u8>) -> Vec<u8> {
    out.extend_from_slice(&self.digest_bytes());
    out
  }

  #[inline]
  pub fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
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
      let (h1, h2, _) = mix_blocks(self.h1, self.h2, &self.pending);
      self.h1 = h1;
      self.h2 = h2;
      self.pending_len = 0;
      rest = tail;
    }

    let (h1, h2, tail) = mix_blocks(self.h1, self.h2, rest);
    self.h1 = h1;
    self.h2 = h2;
    self.buffer(tail);
  }
}

impl Default for Murmur3_128 {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl FastHash for Murmur3_128 {
  const OUTPUT_SIZE: usize = OUTPUT_SIZE;
  type Output = (u64, u64);
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    checksum128(data, seed)
  }
}

impl StreamingHash for Murmur3_128 {
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
    self.sum128()
  }

  #[inline]
  fn reset(&mut self) {
    Self::reset(self);
  }
}

/// `finish()` is `h1` of the digest.
impl Hasher for Murmur3_128 {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.absorb(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.sum128().0
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Murmur3_128 {
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

/// [`BuildHasher`] producing [`Murmur3_128`] hashers with a fixed seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildMurmur3_128 {
  seed: u64,
}

impl BuildMurmur3_128 {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self { seed }
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.seed
  }
}

impl BuildHasher for BuildMurmur3_128 {
  type Hasher = Murmur3_128;

  #[inline]
  fn build_hasher(&self) -> Murmur3_128 {
    Murmur3_128::with_seed(self.seed)
  }
}
