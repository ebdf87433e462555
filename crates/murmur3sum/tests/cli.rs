//! End-to-end tests for the `murmur3sum` binary.

use std::{fs, time::Duration};

use assert_cmd::Command;
use tempfile::TempDir;

const FOX: &str = "The quick brown fox jumps over the lazy dog";

fn murmur3sum() -> Command {
  let mut cmd = Command::cargo_bin("murmur3sum").unwrap();
  for var in ["MURMUR3SUM_BITS", "MURMUR3SUM_SEED", "MURMUR3SUM_BUFFER_SIZE", "RUST_LOG"] {
    cmd.env_remove(var);
  }
  cmd
}

fn stderr_of(cmd: &mut Command) -> String {
  String::from_utf8_lossy(&cmd.output().unwrap().stderr).into_owned()
}

/// A scratch directory holding `fox.txt` and `hello.txt`.
fn fixture() -> TempDir {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("fox.txt"), FOX).unwrap();
  fs::write(dir.path().join("hello.txt"), "Hello, world!").unwrap();
  dir
}

#[test]
fn hashes_stdin_by_default() {
  murmur3sum().write_stdin(FOX).assert().success().stdout("2e4ff723  -\n");
  murmur3sum().arg("-").write_stdin(FOX).assert().success().stdout("2e4ff723  -\n");
}

#[test]
fn empty_input() {
  murmur3sum().write_stdin("").assert().success().stdout("00000000  -\n");
  murmur3sum().args(["--seed", "1"]).write_stdin("").assert().success().stdout("514e28b7  -\n");
  murmur3sum().args(["-b", "128"]).write_stdin("").assert().success().stdout(format!("{}  -\n", "0".repeat(32)));
}

#[test]
fn seeds_in_decimal_hex_and_env() {
  murmur3sum().args(["-s", "0x9747b28c"]).write_stdin(FOX).assert().success().stdout("2fa826cd  -\n");
  murmur3sum().args(["-s", "2538058380"]).write_stdin(FOX).assert().success().stdout("2fa826cd  -\n");
  murmur3sum().env("MURMUR3SUM_SEED", "0x9747b28c").write_stdin(FOX).assert().success().stdout("2fa826cd  -\n");
  murmur3sum()
    .env("MURMUR3SUM_SEED", "5")
    .args(["--seed", "0x9747b28c"])
    .write_stdin(FOX)
    .assert()
    .success()
    .stdout("2fa826cd  -\n");
}

#[test]
fn x64_128_digest() {
  murmur3sum().args(["--bits", "128"]).write_stdin(FOX).assert().success().stdout("bc071b6ce34bbc7bc49a93477a433ca9  -\n");
  murmur3sum()
    .env("MURMUR3SUM_BITS", "128")
    .write_stdin(FOX)
    .assert()
    .success()
    .stdout("bc071b6ce34bbc7bc49a93477a433ca9  -\n");
}

#[test]
fn x64_128_takes_wide_seeds() {
  murmur3sum()
    .args(["-b", "128", "-s", "0x0123456789abcdef"])
    .write_stdin(FOX)
    .assert()
    .success()
    .stdout(format!("{}  -\n", hex128(FOX.as_bytes(), 0x0123_4567_89ab_cdef)));
}

#[test]
fn tiny_buffer_gives_the_same_digest() {
  murmur3sum().args(["--buffer-size", "3"]).write_stdin(FOX).assert().success().stdout("2e4ff723  -\n");
  murmur3sum()
    .args(["--buffer-size", "5", "-b", "128"])
    .write_stdin(FOX)
    .assert()
    .success()
    .stdout("bc071b6ce34bbc7bc49a93477a433ca9  -\n");
}

#[test]
fn files_are_listed_in_order() {
  let dir = fixture();
  murmur3sum()
    .current_dir(dir.path())
    .args(["-s", "1234", "hello.txt", "fox.txt"])
    .assert()
    .success()
    .stdout(format!("faf6cdb3  hello.txt\n{}  fox.txt\n", hex32(FOX.as_bytes(), 1234)));
}

#[test]
fn missing_file_reports_and_continues() {
  let dir = fixture();
  let mut cmd = murmur3sum();
  cmd.current_dir(dir.path()).args(["missing.bin", "fox.txt"]);
  cmd.assert().code(1).stdout("2e4ff723  fox.txt\n");
  assert!(stderr_of(&mut cmd).contains("missing.bin"));
}

#[test]
fn invalid_configuration_exits_2() {
  let stderr = stderr_of(murmur3sum().args(["--seed", "0x100000000"]).write_stdin(FOX));
  assert!(stderr.contains("does not fit in 32 bits"), "{stderr}");
  murmur3sum().args(["--seed", "0x100000000"]).write_stdin(FOX).assert().code(2).stdout("");

  murmur3sum().args(["--buffer-size", "0"]).write_stdin(FOX).assert().code(2);
  murmur3sum().env("MURMUR3SUM_BUFFER_SIZE", "0").write_stdin(FOX).assert().code(2);
  murmur3sum().args(["--bits", "64"]).write_stdin(FOX).assert().code(2);
  murmur3sum().args(["--seed", "forty-two"]).write_stdin(FOX).assert().code(2);
}

#[test]
fn check_accepts_its_own_output() {
  let dir = fixture();
  for bits in ["32", "128"] {
    let out = murmur3sum()
      .current_dir(dir.path())
      .args(["-b", bits, "-s", "99", "fox.txt", "hello.txt"])
      .output()
      .unwrap();
    assert!(out.status.success());
    fs::write(dir.path().join("SUMS"), &out.stdout).unwrap();

    murmur3sum()
      .current_dir(dir.path())
      .args(["-b", bits, "-s", "99", "-c", "SUMS"])
      .assert()
      .success()
      .stdout("fox.txt: OK\nhello.txt: OK\n");
  }
}

#[test]
fn check_reports_mismatches() {
  let dir = fixture();
  fs::write(dir.path().join("SUMS"), "2E4FF723  fox.txt\n00000000  hello.txt\n").unwrap();

  murmur3sum()
    .current_dir(dir.path())
    .args(["--check", "SUMS"])
    .assert()
    .code(1)
    .stdout("fox.txt: OK\nhello.txt: FAILED\n");

  murmur3sum().current_dir(dir.path()).args(["-q", "-c", "SUMS"]).assert().code(1).stdout("hello.txt: FAILED\n");
}

#[test]
fn check_reads_the_list_from_stdin() {
  let dir = fixture();
  murmur3sum().current_dir(dir.path()).arg("-c").write_stdin("2e4ff723  fox.txt\n").assert().success().stdout("fox.txt: OK\n");
}

#[test]
fn check_list_on_stdin_cannot_also_list_stdin() {
  let mut cmd = murmur3sum();
  cmd.arg("-c").write_stdin("2e4ff723  -\n").timeout(Duration::from_secs(10));
  cmd.assert().code(1).stdout("-: FAILED open or read\n");

  let stderr = stderr_of(&mut cmd);
  assert!(stderr.contains("already being read as the checksum list"), "{stderr}");
}

#[test]
fn check_list_from_a_file_may_list_stdin() {
  let dir = fixture();
  fs::write(dir.path().join("SUMS"), "2e4ff723  -\n").unwrap();
  murmur3sum()
    .current_dir(dir.path())
    .args(["-c", "SUMS"])
    .write_stdin(FOX)
    .timeout(Duration::from_secs(10))
    .assert()
    .success()
    .stdout("-: OK\n");
}

#[test]
fn check_flags_unreadable_and_malformed_lines() {
  let dir = fixture();
  fs::write(dir.path().join("SUMS"), "2e4ff723  fox.txt\nnot a checksum line\n\n2e4ff723  gone.txt\n").unwrap();

  let mut cmd = murmur3sum();
  cmd.current_dir(dir.path()).args(["-c", "SUMS"]);
  cmd.assert().code(1).stdout("fox.txt: OK\ngone.txt: FAILED open or read\n");

  let stderr = stderr_of(&mut cmd);
  assert!(stderr.contains("SUMS:2: malformed checksum line"), "{stderr}");
  assert!(stderr.contains("gone.txt"), "{stderr}");
}

#[test]
fn check_rejects_digests_of_the_wrong_width() {
  let dir = fixture();
  fs::write(dir.path().join("SUMS"), "2e4ff723  fox.txt\n").unwrap();
  murmur3sum().current_dir(dir.path()).args(["-b", "128", "-c", "SUMS"]).assert().code(1).stdout("");
}

fn hex32(data: &[u8], seed: u32) -> String {
  format!("{:08x}", hashes::fast::murmur3::checksum32(data, seed))
}

fn hex128(data: &[u8], seed: u64) -> String {
  let (h1, h2) = hashes::fast::murmur3::checksum128(data, seed);
  format!("{h1:016x}{h2:016x}")
}
