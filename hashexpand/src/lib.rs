#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod expander;
mod wide;

pub use crate::{
    expander::{CounterExpander, Expander, key_derivation},
    wide::{HASH512_LEN, SecurityLevel, expand, hash_to_int, hash512},
};
pub use digest;
pub use sha2;

use core::fmt;

/// Hash expansion errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Requested output exceeds what a 32-bit block counter can address.
    OutputTooLong,

    /// Security level must be at least 1.
    InvalidSecurityLevel,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutputTooLong => f.write_str("requested expansion length is too long"),
            Error::InvalidSecurityLevel => f.write_str("security level must be nonzero"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
