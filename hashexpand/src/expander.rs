//! Counter-mode expansion of a secret into an arbitrary-length byte stream.

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use digest::{Digest, Output};
use sha2::Sha256;

/// Source of expanded output bytes.
pub trait Expander {
    /// Fill `okm` with the next `okm.len()` bytes of output.
    ///
    /// # Errors
    /// [`Error::OutputTooLong`] if this would read past the length the
    /// expander was created for.
    fn fill_bytes(&mut self, okm: &mut [u8]) -> Result<()>;
}

/// Counter-mode expander: `D(secret ‖ 0u32) ‖ D(secret ‖ 1u32) ‖ …`, with the
/// counter encoded big-endian.
///
/// Output is a pure function of the secret, so a shorter read is always a
/// prefix of a longer one.
pub struct CounterExpander<'a, D: Digest> {
    secret: &'a [&'a [u8]],
    counter: u32,
    block: Output<D>,
    offset: usize,
    remaining: usize,
}

impl<'a, D: Digest> CounterExpander<'a, D> {
    /// Create an expander over the concatenation of `secret` which will
    /// produce at most `len_in_bytes` bytes.
    ///
    /// # Errors
    /// [`Error::OutputTooLong`] if `len_in_bytes` needs more than `2³²` blocks.
    pub fn new(secret: &'a [&'a [u8]], len_in_bytes: usize) -> Result<Self> {
        let blocks = (len_in_bytes as u64).div_ceil(<D as Digest>::output_size() as u64);
        if blocks > u64::from(u32::MAX) + 1 {
            return Err(Error::OutputTooLong);
        }

        let block = Output::<D>::default();
        Ok(Self {
            secret,
            counter: 0,
            offset: block.len(),
            block,
            remaining: len_in_bytes,
        })
    }

    /// Number of bytes this expander can still produce.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    fn next_block(&mut self) {
        let mut hasher = D::new();
        for part in self.secret {
            hasher.update(part);
        }
        hasher.update(self.counter.to_be_bytes());

        self.block = hasher.finalize();
        self.counter = self.counter.wrapping_add(1);
        self.offset = 0;
    }
}

impl<D: Digest> Expander for CounterExpander<'_, D> {
    fn fill_bytes(&mut self, okm: &mut [u8]) -> Result<()> {
        if okm.len() > self.remaining {
            return Err(Error::OutputTooLong);
        }
        self.remaining -= okm.len();

        let mut filled = 0;
        while filled < okm.len() {
            if self.offset == self.block.len() {
                self.next_block();
            }

            let take = (okm.len() - filled).min(self.block.len() - self.offset);
            okm[filled..filled + take]
                .copy_from_slice(&self.block[self.offset..self.offset + take]);
            filled += take;
            self.offset += take;
        }

        Ok(())
    }
}

impl<D: Digest> core::fmt::Debug for CounterExpander<'_, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CounterExpander")
            .field("counter", &self.counter)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Derive exactly `len` bytes from `secret` with SHA-256 in counter mode.
///
/// # Errors
/// [`Error::OutputTooLong`] if `len` exceeds `2³²` SHA-256 blocks.
pub fn key_derivation(secret: &[u8], len: usize) -> Result<Vec<u8>> {
    let secret = [secret];
    let mut okm = vec![0u8; len];
    CounterExpander::<Sha256>::new(&secret, len)?.fill_bytes(&mut okm)?;
    Ok(okm)
}
