//! Doubled SHA-256 and its expansion to wide outputs.

use crate::{Error, Result};
use alloc::vec::Vec;
use core::num::NonZeroU32;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

/// Output length of [`hash512`] in bytes.
pub const HASH512_LEN: usize = 64;

/// Number of [`hash512`] blocks produced by [`expand`].
///
/// Level 1 yields a 512-bit value; each further level appends another
/// 512 bits.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SecurityLevel(NonZeroU32);

impl SecurityLevel {
    /// Single `hash512` block (512 bits).
    pub const DEFAULT: Self = Self(NonZeroU32::MIN);

    /// Create a security level.
    ///
    /// # Errors
    /// [`Error::InvalidSecurityLevel`] if `level` is zero.
    pub fn new(level: u32) -> Result<Self> {
        NonZeroU32::new(level)
            .map(Self)
            .ok_or(Error::InvalidSecurityLevel)
    }

    /// Numeric value of this level.
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Length in bytes of the output of [`expand`] at this level.
    pub const fn output_len(self) -> usize {
        self.0.get() as usize * HASH512_LEN
    }

    /// Length in bits of the output of [`expand`] at this level.
    pub const fn output_bits(self) -> u64 {
        self.0.get() as u64 * HASH512_LEN as u64 * 8
    }
}

impl Default for SecurityLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Doubled SHA-256: hash the message, then hash each half of that digest
/// separately and concatenate the two results.
///
/// The message is the concatenation of `msg`.
pub fn hash512(msg: &[&[u8]]) -> [u8; HASH512_LEN] {
    let mut hasher = Sha256::new();
    for part in msg {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let (lo, hi) = digest.split_at(digest.len() / 2);

    let mut out = [0u8; HASH512_LEN];
    out[..HASH512_LEN / 2].copy_from_slice(&Sha256::digest(lo));
    out[HASH512_LEN / 2..].copy_from_slice(&Sha256::digest(hi));
    out
}

/// Expand `msg` to `level.output_len()` bytes.
///
/// The first block is `hash512(msg)`; every further block is `hash512` of
/// all the output accumulated so far.
pub fn expand(msg: &[&[u8]], level: SecurityLevel) -> Vec<u8> {
    let mut out = Vec::with_capacity(level.output_len());
    out.extend_from_slice(&hash512(msg));

    for _ in 1..level.get() {
        let block = hash512(&[out.as_slice()]);
        out.extend_from_slice(&block);
    }

    out
}

/// Map `msg` to a `level.output_bits()`-bit integer by reading
/// [`expand`] as little-endian.
pub fn hash_to_int(msg: &[&[u8]], level: SecurityLevel) -> BigUint {
    BigUint::from_bytes_le(&expand(msg, level))
}
