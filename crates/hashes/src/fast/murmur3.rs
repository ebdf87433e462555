//! MurmurHash3 (**NOT CRYPTO**).
//!
//! Two fixed variants:
//!
//! | Type | Block | Digest | Seed |
//! |------|-------|--------|------|
//! | [`Murmur3_32`] (x86_32) | 4 bytes | `u32` | `u32` |
//! | [`Murmur3_128`] (x64_128) | 16 bytes | `(u64, u64)` | `u64` |
//!
//! Each variant has a one-shot function ([`checksum32`], [`checksum128`]) and a
//! streaming state whose digest equals the one-shot result for the
//! concatenation of everything written, however the input was chunked.
//!
//! Input words are always decoded little-endian, independent of the host.
//!
//! # Example
//!
//! ```
//! use hashes::fast::murmur3::{Murmur3_32, Murmur3_128, checksum32, checksum128};
//!
//! let mut h32 = Murmur3_32::with_seed(42);
//! let mut h128 = Murmur3_128::with_seed(42);
//! for chunk in [&b"sharded "[..], &b"key"[..]] {
//!   h32.write(chunk);
//!   h128.write(chunk);
//! }
//! assert_eq!(h32.sum32(), checksum32(b"sharded key", 42));
//! assert_eq!(h128.sum128(), checksum128(b"sharded key", 42));
//! ```

pub mod x64_128;
pub mod x86_32;

pub use x64_128::{BuildMurmur3_128, Murmur3_128, checksum128, smhasher_halves};
pub use x86_32::{BuildMurmur3_32, Murmur3_32, checksum32};
