//! Differential fuzzing against the `murmur3` crate.
//!
//! The reference crate follows SMHasher exactly, so 128-bit digests are
//! compared through `smhasher_halves`.

#![no_main]

use hashes::fast::murmur3::{checksum32, checksum128, smhasher_halves};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, &[u8])| {
  let (seed, data) = input;
  test_x86_32_differential(seed, data);
  test_x64_128_differential(seed, data);
});

fn test_x86_32_differential(seed: u32, data: &[u8]) {
  let ours = checksum32(data, seed);
  let reference = murmur3::murmur3_32(&mut &data[..], seed).expect("reading a slice cannot fail");

  assert_eq!(
    ours, reference,
    "x86_32 differential mismatch: ours={:#010x}, reference={:#010x}, seed={:#x}, len={}",
    ours, reference, seed, data.len()
  );
}

fn test_x64_128_differential(seed: u32, data: &[u8]) {
  let (h1, h2) = smhasher_halves(checksum128(data, u64::from(seed)));
  let ours = (u128::from(h2) << 64) | u128::from(h1);
  let reference = murmur3::murmur3_x64_128(&mut &data[..], seed).expect("reading a slice cannot fail");

  assert_eq!(
    ours, reference,
    "x64_128 differential mismatch: ours={:#034x}, reference={:#034x}, seed={:#x}, len={}",
    ours, reference, seed, data.len()
  );
}
