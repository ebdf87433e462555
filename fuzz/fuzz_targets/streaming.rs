//! Fuzz target for the streaming Murmur3 API.
//!
//! Any chunking of the input must give the one-shot digest, and a
//! finalize in the middle must not disturb the stream.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{Murmur3_32, Murmur3_128};
use libfuzzer_sys::fuzz_target;
use traits::{FastHash, StreamingHash};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  seed32: u32,
  seed64: u64,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<u8>,
}

fuzz_target!(|input: Input| {
  check_streaming::<Murmur3_32>(&input.data, input.seed32, &input.chunk_sizes);
  check_streaming::<Murmur3_128>(&input.data, input.seed64, &input.chunk_sizes);
});

fn check_streaming<H: StreamingHash>(data: &[u8], seed: H::Seed, chunk_sizes: &[u8]) {
  let expected = H::hash_with_seed(seed, data);

  let mut hasher = H::with_seed(seed);
  let mut rest = data;
  let mut chunk_idx = 0;

  while !rest.is_empty() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      usize::from(chunk_sizes[chunk_idx % chunk_sizes.len()]).max(1)
    };

    let (chunk, tail) = rest.split_at(chunk_size.min(rest.len()));
    hasher.update(chunk);
    // Peeking must be side-effect free.
    let _ = hasher.finalize();
    rest = tail;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "streaming mismatch, len={}", data.len());

  let fork = hasher.clone();
  hasher.reset();
  hasher.update(data);
  assert_eq!(hasher.finalize(), expected, "reset mismatch, len={}", data.len());
  assert_eq!(fork.finalize(), expected, "clone mismatch, len={}", data.len());
}
