//! Public keys.

use crate::{AffinePoint, Error, Result};
use alloc::vec::Vec;

/// secp256k1 public key: a curve point other than the identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wrap a curve point.
    ///
    /// # Errors
    /// [`Error::InvalidPoint`] if `point` is the identity or not on the curve.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        if point.is_identity() || !point.is_on_curve() {
            return Err(Error::InvalidPoint);
        }

        Ok(Self { point })
    }

    /// Decode an uncompressed SEC1 point.
    ///
    /// # Errors
    /// [`Error::InvalidPoint`] if the encoding is malformed, the point is not
    /// on the curve, or it is the identity.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_affine(AffinePoint::from_sec1_bytes(bytes)?)
    }

    /// Serialize as an uncompressed SEC1 point: `0x04 ‖ x ‖ y`.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.point.to_sec1_bytes()
    }

    /// Borrow the underlying curve point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }
}

impl AsRef<AffinePoint> for PublicKey {
    fn as_ref(&self) -> &AffinePoint {
        &self.point
    }
}

impl From<PublicKey> for AffinePoint {
    fn from(public_key: PublicKey) -> AffinePoint {
        public_key.point
    }
}

impl TryFrom<AffinePoint> for PublicKey {
    type Error = Error;

    fn try_from(point: AffinePoint) -> Result<Self> {
        Self::from_affine(point)
    }
}
