//! Command-line arguments and the validated configuration built from them.
//!
//! Every option can also come from a `MURMUR3SUM_*` environment variable;
//! flags on the command line win.

use core::num::{NonZeroUsize, ParseIntError};
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::{
  error::{Error, Result},
  sum::Algorithm,
};

pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Print or check Murmur3 digests.
///
/// With no FILE, or when FILE is -, read standard input.
#[derive(Debug, Parser)]
#[command(name = "murmur3sum", version, about)]
pub struct Args {
  /// Digest width: 32 (x86_32) or 128 (x64_128).
  #[arg(short, long, value_enum, env = "MURMUR3SUM_BITS", default_value = "32")]
  pub bits: Bits,

  /// Seed, decimal or 0x-prefixed hex. Must fit in 32 bits for --bits 32.
  #[arg(short, long, env = "MURMUR3SUM_SEED", default_value = "0", value_parser = parse_seed)]
  pub seed: u64,

  /// Bytes read from an input per call.
  #[arg(long, env = "MURMUR3SUM_BUFFER_SIZE", default_value_t = DEFAULT_BUFFER_SIZE)]
  pub buffer_size: usize,

  /// Read digests from the FILEs and verify them.
  #[arg(short, long)]
  pub check: bool,

  /// More logging on stderr (repeatable).
  #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
  pub verbose: u8,

  /// Only report errors; in check mode, don't print OK lines.
  #[arg(short, long)]
  pub quiet: bool,

  #[arg(value_name = "FILE")]
  pub files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Bits {
  #[value(name = "32")]
  X86_32,
  #[value(name = "128")]
  X64_128,
}

impl Args {
  pub fn log_level(&self) -> LevelFilter {
    if self.quiet {
      return LevelFilter::Error;
    }
    match self.verbose {
      0 => LevelFilter::Warn,
      1 => LevelFilter::Info,
      2 => LevelFilter::Debug,
      _ => LevelFilter::Trace,
    }
  }
}

/// Accept `123` or `0x7b`.
fn parse_seed(s: &str) -> Result<u64, ParseIntError> {
  match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
    Some(hex) => u64::from_str_radix(hex, 16),
    None => s.parse(),
  }
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub algorithm: Algorithm,
  pub buffer_size: NonZeroUsize,
  pub check: bool,
  pub quiet: bool,
  pub files: Vec<PathBuf>,
}

impl TryFrom<Args> for Config {
  type Error = Error;

  fn try_from(args: Args) -> Result<Self> {
    let algorithm = Algorithm::new(args.bits, args.seed)?;
    let buffer_size = NonZeroUsize::new(args.buffer_size).ok_or(Error::ZeroBufferSize)?;
    let files = if args.files.is_empty() { vec![PathBuf::from("-")] } else { args.files };
    Ok(Self { algorithm, buffer_size, check: args.check, quiet: args.quiet, files })
  }
}
