//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is one-shot. Incremental hashing lives in [`StreamingHash`].
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

/// Incremental form of a [`FastHash`].
///
/// # Usage
///
/// ```rust,ignore
/// use hashes::fast::Murmur3_32;
/// use traits::{FastHash, StreamingHash};
///
/// // One-shot
/// let h = Murmur3_32::hash_with_seed(42, b"hello world");
///
/// // Streaming
/// let mut hasher = Murmur3_32::with_seed(42);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), h);
/// ```
///
/// # Implementor Requirements
///
/// - Any partition of the input into `update` calls yields the one-shot result
/// - `finalize()` takes `&self` and is idempotent
/// - `reset()` restores the state produced by `with_seed` for the original seed
pub trait StreamingHash: FastHash + Clone {
  /// Size in bytes of the block the algorithm mixes at once.
  const BLOCK_SIZE: usize;

  /// Create a hasher keyed by `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// Create a hasher with the default seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// Feed more input.
  fn update(&mut self, data: &[u8]);

  /// Feed several non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Feed `std::io::IoSlice` buffers, in order.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Digest of everything written so far.
  ///
  /// Does not consume or modify the hasher; writing may continue afterwards.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Return to the freshly constructed state, keeping the seed.
  fn reset(&mut self);

  /// Wrap a reader so everything read through it is hashed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer so everything written through it is hashed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
