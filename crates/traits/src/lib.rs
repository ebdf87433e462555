//! Core hashing traits for the Murmur3 workspace.
//!
//! This crate provides the traits the hash implementations conform to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot seeded non-cryptographic hashing | Murmur3 x86_32, x64_128 |
//! | [`StreamingHash`] | Incremental hashing, identical to one-shot | `Murmur3_32`, `Murmur3_128` |
//!
//! With the `std` feature, [`io`] adds reader/writer adapters that hash bytes
//! as they flow through.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fast_hash;
#[cfg(feature = "std")]
pub mod io;

pub use fast_hash::{FastHash, StreamingHash};
