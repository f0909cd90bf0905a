//! Signing parameters.

use alloc::vec::Vec;
use core::iter;
use hashexpand::{SecurityLevel, hash_to_int};
use num_bigint::BigUint;

/// Source of padding bytes.
static ZERO_BLOCK: [u8; 64] = [0; 64];

/// Parameters shared by a signing key and its verifying key.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SigningParams {
    /// Width of the message hash: 512 bits per level.
    pub security_level: SecurityLevel,

    /// Largest number of zero bytes appended to a message while searching
    /// for a quadratic residue. Paddings `0..=max_padding` are tried.
    pub max_padding: u32,
}

impl SigningParams {
    /// Default padding limit.
    pub const DEFAULT_MAX_PADDING: u32 = 256;

    /// Hash `msg ‖ 0x00 × padding` to an integer modulo `n`.
    ///
    /// The padding is fed to the hash as slices of a shared zero block, so
    /// no buffer of `padding` bytes is allocated.
    pub(crate) fn message_representative(&self, msg: &[u8], padding: u32, n: &BigUint) -> BigUint {
        let padding = padding as usize;
        let mut parts = Vec::with_capacity(2 + padding / ZERO_BLOCK.len());
        parts.push(msg);
        parts.extend(iter::repeat_n(&ZERO_BLOCK[..], padding / ZERO_BLOCK.len()));
        parts.push(&ZERO_BLOCK[..padding % ZERO_BLOCK.len()]);

        hash_to_int(&parts, self.security_level) % n
    }
}

impl Default for SigningParams {
    fn default() -> Self {
        Self {
            security_level: SecurityLevel::DEFAULT,
            max_padding: Self::DEFAULT_MAX_PADDING,
        }
    }
}
