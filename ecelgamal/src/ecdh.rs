//! Elliptic Curve Diffie-Hellman.
//!
//! Both [`encrypt`][crate::encrypt] and [`decrypt`][crate::decrypt] reduce
//! to this step: one party's secret scalar times the other party's public
//! point. The sender uses its ephemeral scalar with the recipient's public
//! key; the recipient uses its secret key with the ephemeral point.
//!
//! ```
//! use ecelgamal::{SecretKey, ecdh::diffie_hellman};
//! use rand_core::{OsRng, TryRngCore};
//!
//! let mut rng = OsRng.unwrap_err();
//!
//! // Alice
//! let alice_secret = SecretKey::random(&mut rng);
//! let alice_public = alice_secret.public_key()?;
//!
//! // Bob
//! let bob_secret = SecretKey::random(&mut rng);
//! let bob_public = bob_secret.public_key()?;
//!
//! let alice_shared = diffie_hellman(&alice_secret, &bob_public)?;
//! let bob_shared = diffie_hellman(&bob_secret, &alice_public)?;
//!
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! # Ok::<(), ecelgamal::Error>(())
//! ```

use crate::{AffinePoint, Error, PublicKey, Result, SecretKey};
use alloc::vec::Vec;
use core::fmt;
use hashexpand::key_derivation;

/// Compute the shared secret between `secret_key` and `public_key`.
///
/// # Errors
/// - [`Error::InvalidPoint`] if the product is the identity
/// - propagates curve arithmetic failures
pub fn diffie_hellman(secret_key: &SecretKey, public_key: &PublicKey) -> Result<SharedSecret> {
    let shared = public_key.as_affine().multiply(secret_key.as_scalar())?;
    SharedSecret::try_from(&shared)
}

/// Shared secret value computed via ECDH key agreement: the big-endian
/// x-coordinate of the shared point.
///
/// The secret is never printed by [`fmt::Debug`].
#[derive(Clone)]
pub struct SharedSecret {
    secret_bytes: Vec<u8>,
}

impl SharedSecret {
    /// Shared secret value, not suitable for use as a key directly.
    pub fn raw_secret_bytes(&self) -> &[u8] {
        &self.secret_bytes
    }

    /// Derive `len` keystream bytes from the shared secret with the
    /// SHA-256 counter-mode KDF.
    ///
    /// # Errors
    /// [`Error::KeyDerivation`] if `len` exceeds what the KDF can produce.
    pub fn keystream(&self, len: usize) -> Result<Vec<u8>> {
        Ok(key_derivation(&self.secret_bytes, len)?)
    }
}

impl TryFrom<&AffinePoint> for SharedSecret {
    type Error = Error;

    fn try_from(point: &AffinePoint) -> Result<SharedSecret> {
        point
            .x_bytes()
            .map(|secret_bytes| SharedSecret { secret_bytes })
            .ok_or(Error::InvalidPoint)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}
