//! Murmur3 non-cryptographic hashes, one-shot and streaming.
//!
//! This crate is `no_std` compatible and has no library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**).
//!
//! # Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::Write` for the streaming states, I/O adapters |
//! | `alloc` | Yes (via `std`) | `sum_bytes` appending into a `Vec<u8>` |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod fast;

#[cfg(feature = "std")]
pub use traits::io::{HashReader, HashWriter};
pub use traits::{FastHash, StreamingHash};
