//! Non-zero scalars.

use crate::{Error, PrimeCurveParams, Result, to_fixed_be};
use alloc::vec::Vec;
use core::marker::PhantomData;
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRng;

/// Integer in the range `[1, n)` where `n` is the order of the curve's base
/// point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonZeroScalar<C: PrimeCurveParams> {
    value: BigUint,
    curve: PhantomData<C>,
}

impl<C> NonZeroScalar<C>
where
    C: PrimeCurveParams,
{
    /// Wrap `value`, checking that it lies in `[1, n)`.
    ///
    /// # Errors
    /// [`Error::InvalidScalar`] if `value` is zero or not less than `n`.
    pub fn new(value: BigUint) -> Result<Self> {
        if value.is_zero() || value >= C::order() {
            return Err(Error::InvalidScalar);
        }

        Ok(Self {
            value,
            curve: PhantomData,
        })
    }

    /// Generate a uniformly random scalar in `[1, n)`.
    ///
    /// Candidates are drawn with the bit length of `n` and rejected until one
    /// falls in range.
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let order = C::order();
        let bits = order.bits();
        let mut bytes = alloc::vec![0u8; C::scalar_bytes_len()];

        loop {
            rng.fill_bytes(&mut bytes);

            let excess = (bytes.len() as u64 * 8).saturating_sub(bits);
            if let Some(first) = bytes.first_mut() {
                *first &= 0xffu8.checked_shr(excess as u32).unwrap_or(0);
            }

            let candidate = BigUint::from_bytes_be(&bytes);
            if !candidate.is_zero() && candidate < order {
                return Self {
                    value: candidate,
                    curve: PhantomData,
                };
            }
        }
    }

    /// Decode a big-endian scalar.
    ///
    /// # Errors
    /// [`Error::InvalidScalar`] if the decoded value is zero or not less than
    /// `n`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Borrow the scalar as an integer.
    pub fn as_biguint(&self) -> &BigUint {
        &self.value
    }

    /// Convert into the underlying integer.
    pub fn into_biguint(self) -> BigUint {
        self.value
    }

    /// Encode as a fixed-width big-endian byte string.
    pub fn to_bytes(&self) -> Vec<u8> {
        to_fixed_be(&self.value, C::scalar_bytes_len())
    }
}

impl<C> From<NonZeroScalar<C>> for BigUint
where
    C: PrimeCurveParams,
{
    fn from(scalar: NonZeroScalar<C>) -> BigUint {
        scalar.value
    }
}
