//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.

pub mod murmur3;

pub use murmur3::{BuildMurmur3_32, BuildMurmur3_128, Murmur3_32, Murmur3_128};
