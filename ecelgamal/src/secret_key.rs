//! Secret keys.

use crate::{AffinePoint, Error, FIELD_BYTES_LEN, NonZeroScalar, PublicKey, Result};
use alloc::vec::Vec;
use core::fmt;
use rand_core::CryptoRng;

/// secp256k1 secret key: a scalar `d` in `[1, n)`.
///
/// The scalar is never printed by [`fmt::Debug`].
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey {
    inner: NonZeroScalar,
}

impl SecretKey {
    /// Generate a random [`SecretKey`].
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        Self {
            inner: NonZeroScalar::random(rng),
        }
    }

    /// Generate a random [`SecretKey`] from the operating system's
    /// entropy source.
    ///
    /// # Panics
    /// If the operating system's random number generator fails.
    #[cfg(feature = "getrandom")]
    pub fn generate() -> Self {
        use rand_core::{OsRng, TryRngCore};
        Self::random(&mut OsRng.unwrap_err())
    }

    /// Deserialize a big-endian secret scalar.
    ///
    /// # Errors
    /// [`Error::InvalidScalar`] if the input is longer than 32 bytes, zero,
    /// or not less than the group order.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > FIELD_BYTES_LEN {
            return Err(Error::InvalidScalar);
        }

        Ok(Self {
            inner: NonZeroScalar::from_slice(bytes)?,
        })
    }

    /// Serialize as 32 big-endian bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.inner.to_bytes()
    }

    /// Borrow the secret scalar.
    pub fn as_scalar(&self) -> &NonZeroScalar {
        &self.inner
    }

    /// Compute the public key `Q = d·G`.
    ///
    /// # Errors
    /// Propagates curve arithmetic failures.
    pub fn public_key(&self) -> Result<PublicKey> {
        PublicKey::from_affine(AffinePoint::mul_by_generator(&self.inner)?)
    }
}

impl From<NonZeroScalar> for SecretKey {
    fn from(inner: NonZeroScalar) -> SecretKey {
        SecretKey { inner }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}
