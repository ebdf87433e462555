//! I/O adapters for [`StreamingHash`](crate::StreamingHash) types.
//!
//! [`HashReader`] and [`HashWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] and feed exactly the bytes that were transferred into the
//! hasher, so short reads and short writes are accounted for.
//!
//! # Example
//!
//! ```rust
//! # use traits::{FastHash, StreamingHash};
//! # #[derive(Clone, Default)]
//! # struct Sum(u32, u32);
//! # impl FastHash for Sum {
//! #   const OUTPUT_SIZE: usize = 4;
//! #   type Output = u32;
//! #   type Seed = u32;
//! #   fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
//! #     let mut s = Self::with_seed(seed);
//! #     s.update(data);
//! #     s.finalize()
//! #   }
//! # }
//! # impl StreamingHash for Sum {
//! #   const BLOCK_SIZE: usize = 1;
//! #   fn with_seed(seed: u32) -> Self { Self(seed, seed) }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.1 = data.iter().fold(self.1, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&self) -> u32 { self.1 }
//! #   fn reset(&mut self) { self.1 = self.0; }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.digest(), u32::from(b'a') + u32::from(b'b') + u32::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

use crate::StreamingHash;

#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[std::io::IoSlice<'_>],
  mut on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write_vectored(bufs)?;
  let mut remaining = n;
  for buf in bufs {
    let to_hash = remaining.min(buf.len());
    if to_hash == 0 {
      break;
    }
    if let Some(data) = buf.get(..to_hash) {
      on_data(data);
    }
    remaining -= to_hash;
  }
  Ok(n)
}

/// Wraps a [`Read`](std::io::Read) and hashes every byte read through it.
#[derive(Clone, Debug)]
pub struct HashReader<R, H: StreamingHash> {
  inner: R,
  hasher: H,
}

impl<R, H: StreamingHash> HashReader<R, H> {
  /// Wrap `inner` with a default-seeded hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Wrap `inner` with a hasher keyed by `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Seed) -> Self {
    Self { inner, hasher: H::with_seed(seed) }
  }

  /// Digest of the bytes read so far.
  ///
  /// Further reads keep updating the same state.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> H::Output {
    self.hasher.finalize()
  }

  /// The underlying hasher.
  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  /// Mutable access to the underlying hasher.
  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap into the inner reader and the digest of everything read.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  /// Unwrap into the inner reader, discarding the digest.
  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, H: StreamingHash> std::io::Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and hashes every byte the inner writer accepts.
///
/// Only the prefix reported as written by the inner writer is hashed, so a
/// short write followed by a retry of the remainder hashes each byte once.
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: StreamingHash> {
  inner: W,
  hasher: H,
}

impl<W, H: StreamingHash> HashWriter<W, H> {
  /// Wrap `inner` with a default-seeded hasher.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Wrap `inner` with a hasher keyed by `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Seed) -> Self {
    Self { inner, hasher: H::with_seed(seed) }
  }

  /// Digest of the bytes written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> H::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher(&self) -> &H {
    &self.hasher
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap into the inner writer and the digest of everything written.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

impl<W: std::io::Write, H: StreamingHash> std::io::Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}
