//! Hybrid encryption.

use crate::{
    AffinePoint, Error, PublicKey, Result, SecretKey, UNCOMPRESSED_POINT_LEN, ecdh::diffie_hellman,
};
use alloc::vec::Vec;
use rand_core::CryptoRng;

/// Encrypted message: the sender's ephemeral point `R = e·G` and the
/// message XORed with the keystream derived from `e·Q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    ephemeral: AffinePoint,
    bytes: Vec<u8>,
}

impl Ciphertext {
    /// Assemble a ciphertext from its parts.
    ///
    /// The ephemeral point is checked when the ciphertext is decrypted.
    pub fn new(ephemeral: AffinePoint, bytes: Vec<u8>) -> Self {
        Self { ephemeral, bytes }
    }

    /// Ephemeral point `R`.
    pub fn ephemeral(&self) -> &AffinePoint {
        &self.ephemeral
    }

    /// Encrypted payload.
    pub fn payload(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the encrypted payload, equal to the plaintext length.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is the encrypted payload empty?
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Serialize as `SEC1(R) ‖ payload`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = self.ephemeral.to_sec1_bytes();
        out.extend_from_slice(&self.bytes);
        out
    }

    /// Parse a ciphertext serialized by [`Ciphertext::to_bytes`].
    ///
    /// # Errors
    /// [`Error::InvalidPoint`] if the input is shorter than an uncompressed
    /// point or the point is not a valid non-identity curve point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < UNCOMPRESSED_POINT_LEN {
            return Err(Error::InvalidPoint);
        }

        let (point, payload) = bytes.split_at(UNCOMPRESSED_POINT_LEN);
        let ephemeral = PublicKey::from_sec1_bytes(point)?;
        Ok(Self::new(ephemeral.into(), payload.to_vec()))
    }
}

/// Encrypt `msg` to `public_key`.
///
/// A fresh ephemeral scalar is drawn from `rng` for every call, so
/// encrypting the same message twice yields different ciphertexts.
///
/// # Errors
/// Propagates curve arithmetic and key derivation failures.
pub fn encrypt<R: CryptoRng + ?Sized>(
    rng: &mut R,
    public_key: &PublicKey,
    msg: &[u8],
) -> Result<Ciphertext> {
    let ephemeral_secret = SecretKey::random(rng);
    let ephemeral = AffinePoint::mul_by_generator(ephemeral_secret.as_scalar())?;

    let keystream = diffie_hellman(&ephemeral_secret, public_key)?.keystream(msg.len())?;
    Ok(Ciphertext::new(ephemeral, xor(msg, &keystream)))
}

/// Decrypt `ciphertext` with `secret_key`.
///
/// Without an authentication tag, a ciphertext for another key decrypts to
/// unrelated bytes rather than failing.
///
/// # Errors
/// - [`Error::InvalidPoint`] if the ephemeral point is the identity or not
///   on the curve
/// - propagates curve arithmetic and key derivation failures
pub fn decrypt(secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<Vec<u8>> {
    let ephemeral = PublicKey::from_affine(ciphertext.ephemeral.clone())?;
    let keystream = diffie_hellman(secret_key, &ephemeral)?.keystream(ciphertext.len())?;
    Ok(xor(&ciphertext.bytes, &keystream))
}

fn xor(data: &[u8], keystream: &[u8]) -> Vec<u8> {
    debug_assert_eq!(data.len(), keystream.len());
    data.iter().zip(keystream).map(|(d, k)| d ^ k).collect()
}
