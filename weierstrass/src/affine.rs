//! Affine curve points.

use crate::{Error, NonZeroScalar, PrimeCurveParams, Result, point_arithmetic, to_fixed_be};
use alloc::vec::Vec;
use core::{marker::PhantomData, ops::Neg};
use num_bigint::BigUint;
use num_traits::Zero;

/// SEC1 tag for the point at infinity.
const TAG_IDENTITY: u8 = 0x00;

/// SEC1 tag for an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Point on a Weierstrass curve in affine coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint<C: PrimeCurveParams> {
    /// x-coordinate
    pub(crate) x: BigUint,

    /// y-coordinate
    pub(crate) y: BigUint,

    /// Is this point the point at infinity?
    pub(crate) infinity: bool,

    curve: PhantomData<C>,
}

impl<C> AffinePoint<C>
where
    C: PrimeCurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub const IDENTITY: Self = Self {
        x: BigUint::ZERO,
        y: BigUint::ZERO,
        infinity: true,
        curve: PhantomData,
    };

    /// Base point of the curve.
    pub fn generator() -> Self {
        Self::from_raw(
            BigUint::from_bytes_be(C::GENERATOR.0),
            BigUint::from_bytes_be(C::GENERATOR.1),
        )
    }

    /// Build a point from coordinates which are already known to be reduced
    /// and on the curve.
    pub(crate) fn from_raw(x: BigUint, y: BigUint) -> Self {
        Self {
            x,
            y,
            infinity: false,
            curve: PhantomData,
        }
    }

    /// Create a point from untrusted affine coordinates.
    ///
    /// # Errors
    /// [`Error::InvalidPoint`] if either coordinate is not reduced modulo `p`
    /// or `(x, y)` does not satisfy the curve equation.
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Result<Self> {
        let p = C::field_modulus();
        if x >= p || y >= p {
            return Err(Error::InvalidPoint);
        }

        let point = Self::from_raw(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Affine coordinates `(x, y)`, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        if self.infinity {
            None
        } else {
            Some((&self.x, &self.y))
        }
    }

    /// Affine x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Affine x-coordinate encoded as a fixed-width big-endian byte string, or
    /// `None` for the point at infinity.
    pub fn x_bytes(&self) -> Option<Vec<u8>> {
        self.x().map(|x| to_fixed_be(x, C::field_bytes_len()))
    }

    /// Does this point satisfy `y² ≡ x³ + a·x + b (mod p)`?
    ///
    /// The point at infinity is always considered on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }

        let p = C::field_modulus();
        let a = BigUint::from_bytes_be(C::EQUATION_A);
        let b = BigUint::from_bytes_be(C::EQUATION_B);

        let lhs = &self.y * &self.y % &p;
        let rhs = (&self.x * &self.x * &self.x + a * &self.x + b) % &p;
        lhs == rhs
    }

    /// Returns `self + other`.
    ///
    /// # Errors
    /// Propagates inversion failures, which only occur for curves whose field
    /// modulus is not prime.
    pub fn add(&self, other: &Self) -> Result<Self> {
        point_arithmetic::point_add(self, other)
    }

    /// Returns `self + self`.
    ///
    /// # Errors
    /// See [`AffinePoint::add`].
    pub fn double(&self) -> Result<Self> {
        point_arithmetic::point_double(self)
    }

    /// Returns `k·self`.
    ///
    /// # Errors
    /// See [`AffinePoint::add`].
    pub fn multiply(&self, k: &NonZeroScalar<C>) -> Result<Self> {
        point_arithmetic::mul(self, k.as_biguint())
    }

    /// Returns `k·G` where `G` is the curve's base point.
    ///
    /// # Errors
    /// See [`AffinePoint::add`].
    pub fn mul_by_generator(k: &NonZeroScalar<C>) -> Result<Self> {
        Self::generator().multiply(k)
    }

    /// Serialize this point in SEC1 form: a single `0x00` byte for the point
    /// at infinity, otherwise `0x04 ‖ x ‖ y` with fixed-width coordinates.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        if self.infinity {
            return alloc::vec![TAG_IDENTITY];
        }

        let len = C::field_bytes_len();
        let mut out = Vec::with_capacity(1 + 2 * len);
        out.push(TAG_UNCOMPRESSED);
        out.extend_from_slice(&to_fixed_be(&self.x, len));
        out.extend_from_slice(&to_fixed_be(&self.y, len));
        out
    }

    /// Decode a point serialized by [`AffinePoint::to_sec1_bytes`].
    ///
    /// # Errors
    /// [`Error::InvalidPoint`] if the encoding is malformed or the decoded
    /// coordinates are not a point on the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let len = C::field_bytes_len();

        match bytes.split_first() {
            Some((&TAG_IDENTITY, [])) => Ok(Self::IDENTITY),
            Some((&TAG_UNCOMPRESSED, coords)) if coords.len() == 2 * len => {
                let (x, y) = coords.split_at(len);
                Self::from_coordinates(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
            }
            _ => Err(Error::InvalidPoint),
        }
    }
}

impl<C> Default for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<C> Neg for &AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Output = AffinePoint<C>;

    /// Reflect the point across the x-axis: `(x, -y mod p)`.
    fn neg(self) -> AffinePoint<C> {
        if self.infinity {
            return AffinePoint::IDENTITY;
        }

        let p = C::field_modulus();
        let y = if self.y.is_zero() {
            BigUint::ZERO
        } else {
            &p - &self.y
        };

        AffinePoint::from_raw(self.x.clone(), y)
    }
}

impl<C> Neg for AffinePoint<C>
where
    C: PrimeCurveParams,
{
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        -&self
    }
}
