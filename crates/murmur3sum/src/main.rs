//! `murmur3sum`: print or check Murmur3 digests, in the style of `sha256sum`.
//!
//! Usage:
//!   murmur3sum FILE...                  # `<hex>  <name>` per file
//!   murmur3sum --bits 128 --seed 0x2a - # stdin, x64_128
//!   murmur3sum -c SUMS                  # verify a list written by the above
//!
//! Exit status: 0 on success, 1 if any input failed or did not match,
//! 2 on invalid configuration.

mod cli;
mod error;
mod sum;

use std::{
  fs::File,
  io::{self, BufRead, BufReader, Read, Write},
  path::Path,
  process::ExitCode,
};

use clap::Parser;
use log::{debug, error, info, warn};
use simple_logger::SimpleLogger;

use crate::{
  cli::{Args, Config},
  error::{Error, Result},
  sum::parse_check_line,
};

const STDIN: &str = "-";
const STDOUT: &str = "<stdout>";

fn main() -> ExitCode {
  let args = Args::parse();

  if let Err(err) = SimpleLogger::new().with_level(args.log_level()).env().init() {
    eprintln!("murmur3sum: cannot initialise logging: {err}");
  }

  let config = match Config::try_from(args) {
    Ok(config) => config,
    Err(err) => {
      eprintln!("murmur3sum: {err}");
      return if err.is_usage() { ExitCode::from(2) } else { ExitCode::FAILURE };
    }
  };
  debug!("using {} with {} byte reads", config.algorithm, config.buffer_size);

  match run(&config) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(err) => {
      error!("{err}");
      ExitCode::FAILURE
    }
  }
}

/// Process every input. `Ok(false)` means at least one input failed or mismatched.
fn run(config: &Config) -> Result<bool> {
  let mut buf = vec![0u8; config.buffer_size.get()];
  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut all_ok = true;

  for path in &config.files {
    let result = if config.check {
      check_list(config, path, &mut buf, &mut out)
    } else {
      print_digest(config, path, &mut buf, &mut out)
    };
    match result {
      Ok(ok) => all_ok &= ok,
      Err(err) if err_is_stdout(&err) => return Err(err),
      Err(err) => {
        error!("{err}");
        all_ok = false;
      }
    }
  }

  out.flush().map_err(|e| Error::io(STDOUT, e))?;
  Ok(all_ok)
}

fn err_is_stdout(err: &Error) -> bool {
  matches!(err, Error::Io { path, .. } if path == STDOUT)
}

fn open(path: &Path) -> Result<Box<dyn Read>> {
  if path.as_os_str() == STDIN {
    return Ok(Box::new(io::stdin().lock()));
  }
  File::open(path).map(|f| Box::new(f) as Box<dyn Read>).map_err(|e| Error::io(&path.display().to_string(), e))
}

fn print_digest(config: &Config, path: &Path, buf: &mut [u8], out: &mut impl Write) -> Result<bool> {
  let name = path.display().to_string();
  let input = open(path)?;
  let (digest, len) = config.algorithm.digest(input, buf).map_err(|e| Error::io(&name, e))?;
  debug!("{name}: {len} bytes");
  writeln!(out, "{digest}  {name}").map_err(|e| Error::io(STDOUT, e))?;
  Ok(true)
}

/// Verify every `<hex>  <name>` line of the list at `path`.
fn check_list(config: &Config, path: &Path, buf: &mut [u8], out: &mut impl Write) -> Result<bool> {
  let list_name = path.display().to_string();
  let list_is_stdin = path.as_os_str() == STDIN;
  let list = BufReader::new(open(path)?);
  let (mut mismatched, mut unreadable, mut malformed) = (0usize, 0usize, 0usize);

  for (idx, line) in list.lines().enumerate() {
    let line = line.map_err(|e| Error::io(&list_name, e))?;
    if line.trim().is_empty() {
      continue;
    }
    let Some((expected, name)) = parse_check_line(&line, config.algorithm) else {
      warn!("{}", Error::MalformedLine { path: list_name.clone(), line: idx + 1 });
      malformed += 1;
      continue;
    };

    // Standard input is still locked by the list reader.
    let input = if list_is_stdin && name == STDIN {
      Err(Error::io(name, io::Error::other("standard input is already being read as the checksum list")))
    } else {
      open(Path::new(name))
    };
    let status = match input.and_then(|input| config.algorithm.digest(input, buf).map_err(|e| Error::io(name, e))) {
      Ok((digest, _)) if digest.matches(expected) => {
        if config.quiet {
          continue;
        }
        "OK"
      }
      Ok((digest, _)) => {
        debug!("{name}: expected {expected}, computed {digest}");
        mismatched += 1;
        "FAILED"
      }
      Err(err) => {
        error!("{err}");
        unreadable += 1;
        "FAILED open or read"
      }
    };
    writeln!(out, "{name}: {status}").map_err(|e| Error::io(STDOUT, e))?;
  }

  if malformed > 0 {
    warn!("{list_name}: {malformed} line(s) are improperly formatted");
  }
  if unreadable > 0 {
    warn!("{list_name}: {unreadable} listed file(s) could not be read");
  }
  if mismatched > 0 {
    warn!("{list_name}: {mismatched} computed checksum(s) did NOT match");
  }
  info!("{list_name}: checked");
  Ok(mismatched == 0 && unreadable == 0 && malformed == 0)
}
