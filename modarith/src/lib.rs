#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod inverse;
mod prime;
mod sqrt;

pub use crate::{
    error::{Error, Result},
    inverse::{invert, inverse_mod},
    prime::{is_prime, is_probable_prime, next_blum_prime, random_blum_prime},
    sqrt::{is_quadratic_residue, sqrt_blum},
};
pub use num_bigint::{self, BigInt, BigUint};
pub use rand_core;
