//! Digest computation and checksum-line parsing.

use core::fmt;
use std::io::{self, Read};

use hashes::{
  HashReader,
  fast::{Murmur3_32, Murmur3_128},
};
use traits::StreamingHash;

use crate::{
  cli::Bits,
  error::{Error, Result},
};

/// A Murmur3 variant together with its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
  X86_32 { seed: u32 },
  X64_128 { seed: u64 },
}

impl Algorithm {
  /// Select the variant for `bits`, rejecting seeds the variant cannot take.
  pub fn new(bits: Bits, seed: u64) -> Result<Self> {
    match bits {
      Bits::X86_32 => u32::try_from(seed).map(|seed| Self::X86_32 { seed }).map_err(|_| Error::SeedOutOfRange(seed)),
      Bits::X64_128 => Ok(Self::X64_128 { seed }),
    }
  }

  /// Number of hex digits in a digest of this variant.
  pub const fn hex_len(self) -> usize {
    match self {
      Self::X86_32 { .. } => 8,
      Self::X64_128 { .. } => 32,
    }
  }

  /// Hash everything `reader` yields, reading at most `buf.len()` bytes at a time.
  ///
  /// Returns the digest and the number of bytes hashed.
  pub fn digest<R: Read>(self, reader: R, buf: &mut [u8]) -> io::Result<(Digest, u64)> {
    match self {
      Self::X86_32 { seed } => {
        stream::<Murmur3_32, R>(reader, seed, buf).map(|(h, len)| (Digest::X86_32(h), len))
      }
      Self::X64_128 { seed } => {
        stream::<Murmur3_128, R>(reader, seed, buf).map(|((h1, h2), len)| (Digest::X64_128(h1, h2), len))
      }
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::X86_32 { seed } => write!(f, "murmur3-x86_32 (seed {seed:#x})"),
      Self::X64_128 { seed } => write!(f, "murmur3-x64_128 (seed {seed:#x})"),
    }
  }
}

fn stream<H: StreamingHash, R: Read>(reader: R, seed: H::Seed, buf: &mut [u8]) -> io::Result<(H::Output, u64)> {
  let mut reader = HashReader::<R, H>::with_seed(reader, seed);
  let mut total = 0u64;
  loop {
    match reader.read(buf) {
      Ok(0) => break,
      Ok(n) => total += n as u64,
      Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
      Err(e) => return Err(e),
    }
  }
  Ok((reader.digest(), total))
}

/// A finished digest. Displays as lowercase hex, `h1` before `h2` for x64_128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
  X86_32(u32),
  X64_128(u64, u64),
}

impl Digest {
  /// Whether `hex` spells this digest (case-insensitive).
  pub fn matches(&self, hex: &str) -> bool {
    self.to_string().eq_ignore_ascii_case(hex)
  }
}

impl fmt::Display for Digest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::X86_32(h) => write!(f, "{h:08x}"),
      Self::X64_128(h1, h2) => write!(f, "{h1:016x}{h2:016x}"),
    }
  }
}

/// Split a `<hex>  <name>` (or `<hex> *<name>`) line.
///
/// Returns `None` unless the digest is exactly as wide as `algorithm` produces.
pub fn parse_check_line(line: &str, algorithm: Algorithm) -> Option<(&str, &str)> {
  let (hex, rest) = line.split_once(' ')?;
  let name = rest.strip_prefix(' ').or_else(|| rest.strip_prefix('*'))?;
  if hex.len() != algorithm.hex_len() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) || name.is_empty() {
    return None;
  }
  Some((hex, name))
}

#[cfg(test)]
mod tests {
  use hashes::fast::murmur3::{checksum32, checksum128};

  use super::*;

  const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

  #[test]
  fn seed_must_fit_the_variant() {
    assert_eq!(Algorithm::new(Bits::X86_32, 0xffff_ffff).unwrap(), Algorithm::X86_32 { seed: 0xffff_ffff });
    assert!(matches!(Algorithm::new(Bits::X86_32, 1 << 32), Err(Error::SeedOutOfRange(0x1_0000_0000))));
    assert_eq!(Algorithm::new(Bits::X64_128, u64::MAX).unwrap(), Algorithm::X64_128 { seed: u64::MAX });
  }

  #[test]
  fn digest_display_is_fixed_width_hex() {
    assert_eq!(Digest::X86_32(0x2e4f_f723).to_string(), "2e4ff723");
    assert_eq!(Digest::X86_32(0).to_string(), "00000000");
    assert_eq!(
      Digest::X64_128(0xbc07_1b6c_e34b_bc7b, 0xc49a_9347_7a43_3ca9).to_string(),
      "bc071b6ce34bbc7bc49a93477a433ca9"
    );
    assert_eq!(Digest::X64_128(1, 2).to_string().len(), 32);
  }

  #[test]
  fn digest_matches_ignores_case() {
    let d = Digest::X86_32(0x2fa8_26cd);
    assert!(d.matches("2fa826cd"));
    assert!(d.matches("2FA826CD"));
    assert!(!d.matches("2fa826ce"));
    assert!(!d.matches("2fa826c"));
  }

  #[test]
  fn small_buffers_give_the_one_shot_digest() {
    for size in [1usize, 3, 4, 7, 16, 64] {
      let mut buf = vec![0u8; size];

      let (d, len) = Algorithm::X86_32 { seed: 0x9747_b28c }.digest(FOX, &mut buf).unwrap();
      assert_eq!(d, Digest::X86_32(checksum32(FOX, 0x9747_b28c)));
      assert_eq!(len, FOX.len() as u64);

      let (d, len) = Algorithm::X64_128 { seed: 7 }.digest(FOX, &mut buf).unwrap();
      let (h1, h2) = checksum128(FOX, 7);
      assert_eq!(d, Digest::X64_128(h1, h2));
      assert_eq!(len, FOX.len() as u64);
    }
  }

  #[test]
  fn empty_input_hashes_to_the_seeded_empty_digest() {
    let mut buf = [0u8; 8];
    let (d, len) = Algorithm::X86_32 { seed: 1 }.digest(io::empty(), &mut buf).unwrap();
    assert_eq!(d, Digest::X86_32(0x514e_28b7));
    assert_eq!(len, 0);
  }

  #[test]
  fn check_lines() {
    let a32 = Algorithm::X86_32 { seed: 0 };
    let a128 = Algorithm::X64_128 { seed: 0 };

    assert_eq!(parse_check_line("2e4ff723  fox.txt", a32), Some(("2e4ff723", "fox.txt")));
    assert_eq!(parse_check_line("2e4ff723 *fox.txt", a32), Some(("2e4ff723", "fox.txt")));
    assert_eq!(parse_check_line("2e4ff723  name with spaces", a32), Some(("2e4ff723", "name with spaces")));
    assert_eq!(parse_check_line("2e4ff723  fox.txt", a128), None);
    assert_eq!(parse_check_line("2e4ff72g  fox.txt", a32), None);
    assert_eq!(parse_check_line("2e4ff723 fox.txt", a32), None);
    assert_eq!(parse_check_line("2e4ff723  ", a32), None);
    assert_eq!(parse_check_line("garbage", a32), None);
    assert_eq!(
      parse_check_line("bc071b6ce34bbc7bc49a93477a433ca9  -", a128),
      Some(("bc071b6ce34bbc7bc49a93477a433ca9", "-"))
    );
  }
}
