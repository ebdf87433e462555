//! Errors reported by `murmur3sum`.

use std::io;

use thiserror::Error;

/// Everything that can go wrong while configuring or hashing.
#[derive(Debug, Error)]
pub enum Error {
  /// Reading an input failed. `path` is `-` for standard input.
  #[error("{path}: {source}")]
  Io {
    path: String,
    #[source]
    source: io::Error,
  },

  /// A seed wider than 32 bits was given for the x86_32 variant.
  #[error("seed {0:#x} does not fit in 32 bits (use --bits 128 for 64-bit seeds)")]
  SeedOutOfRange(u64),

  /// A line in a checksum list is not `<hex>  <name>` with a digest of the right width.
  #[error("{path}:{line}: malformed checksum line")]
  MalformedLine { path: String, line: usize },

  #[error("buffer size must be greater than zero")]
  ZeroBufferSize,
}

impl Error {
  pub(crate) fn io(path: &str, source: io::Error) -> Self {
    Self::Io { path: path.to_owned(), source }
  }

  /// Configuration errors exit with 2, per-file failures with 1.
  pub fn is_usage(&self) -> bool {
    matches!(self, Self::SeedOutOfRange(_) | Self::ZeroBufferSize)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
