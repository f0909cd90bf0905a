//! Point addition, doubling and scalar multiplication.
//!
//! The slope of the line through the two inputs (or of the tangent, when
//! doubling) is computed with a modular inversion, so every operation works
//! directly on affine coordinates.

use crate::{AffinePoint, Error, PrimeCurveParams, Result};
use modarith::invert;
use num_bigint::BigUint;
use num_traits::Zero;

/// Curve constants converted to integers once per operation.
struct Constants {
    p: BigUint,
    a: BigUint,
}

impl Constants {
    fn of<C: PrimeCurveParams>() -> Self {
        Self {
            p: C::field_modulus(),
            a: BigUint::from_bytes_be(C::EQUATION_A),
        }
    }
}

/// `(a - b) mod p`
fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a % p + p - b % p) % p
}

fn add_with<C: PrimeCurveParams>(
    lhs: &AffinePoint<C>,
    rhs: &AffinePoint<C>,
    k: &Constants,
) -> Result<AffinePoint<C>> {
    if lhs.infinity {
        return Ok(rhs.clone());
    }
    if rhs.infinity {
        return Ok(lhs.clone());
    }

    let p = &k.p;

    let slope = if lhs.x == rhs.x {
        // Either `rhs = -lhs`, or a point of order two being doubled
        if lhs.y != rhs.y || lhs.y.is_zero() {
            return Ok(AffinePoint::IDENTITY);
        }

        // (3·x² + a) / 2·y
        let numerator = (BigUint::from(3u8) * &lhs.x * &lhs.x + &k.a) % p;
        numerator * invert(&(&lhs.y << 1u32), p)? % p
    } else {
        // (y₂ - y₁) / (x₂ - x₁)
        let numerator = sub_mod(&rhs.y, &lhs.y, p);
        numerator * invert(&sub_mod(&rhs.x, &lhs.x, p), p)? % p
    };

    let x3 = sub_mod(&(&slope * &slope), &(&lhs.x + &rhs.x), p);
    let y3 = sub_mod(&(&slope * sub_mod(&lhs.x, &x3, p)), &lhs.y, p);

    Ok(AffinePoint::from_raw(x3, y3))
}

/// Double-and-add over the bits of `k`, most significant bit first.
fn mul_with<C: PrimeCurveParams>(
    point: &AffinePoint<C>,
    k: &BigUint,
    consts: &Constants,
) -> Result<AffinePoint<C>> {
    let mut acc = AffinePoint::IDENTITY;

    for i in (0..k.bits()).rev() {
        acc = add_with(&acc, &acc, consts)?;

        if k.bit(i) {
            acc = add_with(&acc, point, consts)?;
        }
    }

    Ok(acc)
}

/// Multiply without checking the range of `k`.
pub(crate) fn mul<C: PrimeCurveParams>(point: &AffinePoint<C>, k: &BigUint) -> Result<AffinePoint<C>> {
    mul_with(point, k, &Constants::of::<C>())
}

/// Returns `p1 + p2`.
///
/// The point at infinity is the identity; `P + (-P)` is the point at
/// infinity; `P + P` uses the tangent slope.
///
/// # Errors
/// [`Error::Arithmetic`] if a required inversion fails, which cannot happen
/// for valid points on a curve over a prime field.
pub fn point_add<C: PrimeCurveParams>(
    p1: &AffinePoint<C>,
    p2: &AffinePoint<C>,
) -> Result<AffinePoint<C>> {
    add_with(p1, p2, &Constants::of::<C>())
}

/// Returns `point + point`.
///
/// # Errors
/// See [`point_add`].
pub fn point_double<C: PrimeCurveParams>(point: &AffinePoint<C>) -> Result<AffinePoint<C>> {
    add_with(point, point, &Constants::of::<C>())
}

/// Returns `k·point`.
///
/// # Errors
/// - [`Error::InvalidScalar`] if `k = 0` or `k >= n`
/// - see [`point_add`]
pub fn point_multiply<C: PrimeCurveParams>(
    k: &BigUint,
    point: &AffinePoint<C>,
) -> Result<AffinePoint<C>> {
    if k.is_zero() || *k >= C::order() {
        return Err(Error::InvalidScalar);
    }

    mul(point, k)
}

#[cfg(test)]
mod tests {
    use super::{mul, point_add, point_double, point_multiply};
    use crate::{AffinePoint, Error, dev::TestCurve};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    type Point = AffinePoint<TestCurve>;

    fn point(x: u32, y: u32) -> Point {
        Point::from_coordinates(BigUint::from(x), BigUint::from(y)).unwrap()
    }

    #[test]
    fn doubling_generator() {
        // slope = (3·3² + 2) / (2·6) = 29·12⁻¹ = 59 (mod 97)
        let g = Point::generator();
        assert_eq!(point_double(&g).unwrap(), point(80, 10));
    }

    #[test]
    fn secant_addition() {
        let g = Point::generator();
        let two_g = point(80, 10);
        assert_eq!(point_add(&g, &two_g).unwrap(), point(80, 87));
        assert_eq!(point_add(&two_g, &g).unwrap(), point(80, 87));
    }

    #[test]
    fn inverse_points_sum_to_identity() {
        assert!(point_add(&point(80, 10), &point(80, 87)).unwrap().is_identity());
    }

    #[test]
    fn multiply_range_checks() {
        let g = Point::generator();
        let n = BigUint::from(5u8);

        assert_eq!(point_multiply(&BigUint::ZERO, &g), Err(Error::InvalidScalar));
        assert_eq!(point_multiply(&n, &g), Err(Error::InvalidScalar));
        assert_eq!(point_multiply(&(n + 1u8), &g), Err(Error::InvalidScalar));
        assert_eq!(point_multiply(&BigUint::from(4u8), &g).unwrap(), point(3, 91));
    }

    #[test]
    fn order_two_point_doubles_to_identity() {
        // y = 0 only when x³ + 2x + 3 ≡ 0 (mod 97); such a point is its own
        // negation, so doubling must not attempt to invert 2·y.
        for x in 0u32..97 {
            if let Ok(p) = Point::from_coordinates(BigUint::from(x), BigUint::ZERO) {
                assert!(point_double(&p).unwrap().is_identity());
            }
        }
    }

    /// Least significant bit first double-and-add.
    fn mul_lsb_first(point: &Point, mut k: u32) -> Point {
        let mut acc = Point::IDENTITY;
        let mut addend = point.clone();

        while k > 0 {
            if k & 1 == 1 {
                acc = point_add(&acc, &addend).unwrap();
            }
            addend = point_double(&addend).unwrap();
            k >>= 1;
        }

        acc
    }

    prop_compose! {
        fn curve_point()(x in 0u32..97, negate in any::<bool>()) -> Point {
            // walk forward to the first x with a point on it
            (0..97)
                .flat_map(|i| (0u32..97).map(move |y| ((x + i) % 97, y)))
                .find_map(|(x, y)| Point::from_coordinates(BigUint::from(x), BigUint::from(y)).ok())
                .map(|p| if negate { -p } else { p })
                .unwrap()
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn msb_first_matches_lsb_first(p in curve_point(), k in 0u32..1000) {
            prop_assert_eq!(mul(&p, &BigUint::from(k)).unwrap(), mul_lsb_first(&p, k));
        }
    }
}
