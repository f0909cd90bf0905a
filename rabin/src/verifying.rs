//! Signature verification.

use crate::{Signature, SigningParams};
use num_bigint::BigUint;

/// Rabin public key: the modulus `n = p·q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    n: BigUint,
    params: SigningParams,
}

impl VerifyingKey {
    /// Create a verifying key from a modulus and the parameters the signer
    /// used.
    pub fn new(n: BigUint, params: SigningParams) -> Self {
        Self { n, params }
    }

    /// Create a verifying key from a modulus with default parameters.
    pub fn from_modulus(n: BigUint) -> Self {
        Self::new(n, SigningParams::default())
    }

    /// Public modulus `n`.
    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    /// Parameters used to hash messages.
    pub fn params(&self) -> &SigningParams {
        &self.params
    }

    /// Check `signature` over `msg`.
    ///
    /// Accepts iff `s < n`, the padding does not exceed
    /// [`SigningParams::max_padding`] and `s² ≡ h (mod n)`, where `h` is the
    /// hash of `msg` with the signature's padding appended.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> bool {
        let s = signature.s();
        if *s >= self.n || signature.padding() > self.params.max_padding {
            return false;
        }

        let h = self
            .params
            .message_representative(msg, signature.padding(), &self.n);
        s * s % &self.n == h
    }
}
