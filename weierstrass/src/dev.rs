//! Development-related functionality.

use crate::PrimeCurveParams;

/// Curve `y² = x³ + 2x + 3` over the field of 97 elements, with base point
/// `(3, 6)` of order 5.
///
/// Small enough that every group element can be checked by hand.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct TestCurve;

impl PrimeCurveParams for TestCurve {
    const FIELD_MODULUS: &'static [u8] = &[97];
    const EQUATION_A: &'static [u8] = &[2];
    const EQUATION_B: &'static [u8] = &[3];
    const GENERATOR: (&'static [u8], &'static [u8]) = (&[3], &[6]);
    const ORDER: &'static [u8] = &[5];
}

/// Multiples `k·G` of [`TestCurve`]'s base point for `k = 1..=4`.
pub const TEST_CURVE_MUL_VECTORS: &[([u8; 1], [u8; 1])] =
    &[([3], [6]), ([80], [10]), ([80], [87]), ([3], [91])];

/// Implement point arithmetic tests for a curve.
///
/// `$vectors` lists the fixed-width big-endian affine coordinates of
/// `G, 2G, 3G, …`.
#[macro_export]
macro_rules! impl_point_arithmetic_tests {
    ($curve:ty, $vectors:expr) => {
        /// Assert that the provided point matches the given test vector.
        macro_rules! assert_point_eq {
            ($actual:expr, $expected:expr) => {
                let (expected_x, expected_y) = $expected;
                let sec1 = $actual.to_sec1_bytes();
                let len = expected_x.len();

                assert_eq!(sec1.len(), 1 + 2 * len, "point is not finite");
                assert_eq!(&expected_x[..], &sec1[1..1 + len]);
                assert_eq!(&expected_y[..], &sec1[1 + len..]);
            };
        }

        #[test]
        fn generator_is_on_curve() {
            let g = $crate::AffinePoint::<$curve>::generator();
            assert!(g.is_on_curve());
            assert!(!g.is_identity());
        }

        #[test]
        fn identity_addition() {
            let identity = $crate::AffinePoint::<$curve>::IDENTITY;
            let g = $crate::AffinePoint::<$curve>::generator();

            assert_eq!(identity.add(&g).unwrap(), g);
            assert_eq!(g.add(&identity).unwrap(), g);
            assert!(identity.add(&identity).unwrap().is_identity());
            assert!(identity.double().unwrap().is_identity());
        }

        #[test]
        fn negation_cancels() {
            let g = $crate::AffinePoint::<$curve>::generator();
            assert!(g.add(&-&g).unwrap().is_identity());
            assert_eq!(-(-g.clone()), g);
        }

        #[test]
        fn test_vector_repeated_add() {
            let g = $crate::AffinePoint::<$curve>::generator();
            let mut p = g.clone();

            for vector in $vectors.iter() {
                assert_point_eq!(p, *vector);
                assert!(p.is_on_curve());
                p = p.add(&g).unwrap();
            }
        }

        #[test]
        fn test_vector_double_generator() {
            let g = $crate::AffinePoint::<$curve>::generator();
            assert_eq!(g.double().unwrap(), g.add(&g).unwrap());
            assert_point_eq!(g.double().unwrap(), $vectors[1]);
        }

        #[test]
        fn test_vector_scalar_mult() {
            let g = $crate::AffinePoint::<$curve>::generator();

            for (k, vector) in $vectors.iter().enumerate() {
                let k = $crate::BigUint::from(k as u64 + 1);
                let p = $crate::point_multiply(&k, &g).unwrap();
                assert_point_eq!(p, *vector);
            }
        }

        #[test]
        fn sec1_round_trip() {
            let g = $crate::AffinePoint::<$curve>::generator();
            let identity = $crate::AffinePoint::<$curve>::IDENTITY;

            for p in [g.clone(), g.double().unwrap(), identity] {
                let bytes = p.to_sec1_bytes();
                assert_eq!($crate::AffinePoint::<$curve>::from_sec1_bytes(&bytes).unwrap(), p);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::{TEST_CURVE_MUL_VECTORS, TestCurve};

    impl_point_arithmetic_tests!(TestCurve, TEST_CURVE_MUL_VECTORS);
}
