#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod params;
mod signature;
mod signing;
mod verifying;

pub use crate::{
    error::{Error, Result},
    params::SigningParams,
    signature::Signature,
    signing::SigningKey,
    verifying::VerifyingKey,
};
pub use hashexpand::SecurityLevel;
pub use num_bigint::{self, BigUint};
pub use rand_core;

/// Bit length of each prime in a generated key pair, giving a 512-bit
/// modulus.
pub const DEFAULT_PRIME_BITS: u64 = 256;

/// Smallest accepted prime bit length.
///
/// There is only one prime congruent to 3 mod 4 of each of the bit lengths
/// 2, 3 and 4, so two distinct primes of equal size need at least 5 bits.
pub const MIN_PRIME_BITS: u64 = 5;
