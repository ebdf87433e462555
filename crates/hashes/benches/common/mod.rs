use core::hint::black_box;

use criterion::{BenchmarkGroup, Throughput, measurement::WallTime};
use hashes::fast::murmur3::{x64_128, x86_32};

/// Typical hash-table keys, then bulk payloads.
const KEY_AND_BULK_LENGTHS: [usize; 6] = [8, 24, 100, 1024, 64 * 1024, 1024 * 1024];

/// Filler bytes from a splitmix64 stream, so no input is all zeros.
pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed;
  let mut out = Vec::with_capacity(len);
  while out.len() < len {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^= z >> 31;
    let take = (len - out.len()).min(8);
    out.extend_from_slice(&z.to_le_bytes()[..take]);
  }
  black_box(&out);
  out
}

/// One below, at, and one past each block size (and its double), plus the empty input.
fn boundary_lengths() -> Vec<usize> {
  let mut lens = vec![0];
  for block in [x86_32::BLOCK_SIZE, x64_128::BLOCK_SIZE] {
    for whole in [block, 2 * block] {
      lens.extend([whole - 1, whole, whole + 1]);
    }
  }
  lens
}

pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  let mut lens = boundary_lengths();
  lens.extend(KEY_AND_BULK_LENGTHS);
  lens.sort_unstable();
  lens.dedup();
  lens.into_iter().map(|len| (len, pseudo_random_bytes(len, len as u64 ^ 0x6d75_726d))).collect()
}

pub fn set_throughput(group: &mut BenchmarkGroup<'_, WallTime>, len: usize) {
  group.throughput(match len {
    0 => Throughput::Elements(1),
    n => Throughput::Bytes(n as u64),
  });
}
