//! Group law properties over the small test curve.

use num_bigint::BigUint;
use proptest::prelude::*;
use weierstrass::{AffinePoint, Error, NonZeroScalar, PrimeCurveParams, point_multiply};

/// `y² = x³ + 2x + 3` over the field of 97 elements, base point `(3, 6)`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct Toy97;

impl PrimeCurveParams for Toy97 {
    const FIELD_MODULUS: &'static [u8] = &[97];
    const EQUATION_A: &'static [u8] = &[2];
    const EQUATION_B: &'static [u8] = &[3];
    const GENERATOR: (&'static [u8], &'static [u8]) = (&[3], &[6]);
    const ORDER: &'static [u8] = &[5];
}

type Point = AffinePoint<Toy97>;
type Scalar = NonZeroScalar<Toy97>;

const ORDER: u32 = 5;

/// Every finite point of `y² = x³ + 2x + 3 (mod 97)`.
fn all_points() -> Vec<Point> {
    let mut points = Vec::new();
    for x in 0u32..97 {
        for y in 0u32..97 {
            if let Ok(p) = Point::from_coordinates(BigUint::from(x), BigUint::from(y)) {
                points.push(p);
            }
        }
    }
    points
}

/// Least significant bit first double-and-add.
fn mul_lsb_first(point: &Point, k: u32) -> Point {
    let mut acc = Point::IDENTITY;
    let mut addend = point.clone();
    let mut k = k;

    while k > 0 {
        if k & 1 == 1 {
            acc = acc.add(&addend).unwrap();
        }
        addend = addend.double().unwrap();
        k >>= 1;
    }

    acc
}

#[test]
fn addition_is_commutative_and_closed() {
    let points = all_points();
    assert!(!points.is_empty());

    for p in &points {
        for q in &points {
            let pq = p.add(q).unwrap();
            assert_eq!(pq, q.add(p).unwrap());
            assert!(pq.is_on_curve());
        }
    }
}

#[test]
fn addition_is_associative() {
    let points = all_points();

    for p in points.iter().step_by(7) {
        for q in points.iter().step_by(5) {
            for r in points.iter().step_by(11) {
                let lhs = p.add(q).unwrap().add(r).unwrap();
                let rhs = p.add(&q.add(r).unwrap()).unwrap();
                assert_eq!(lhs, rhs);
            }
        }
    }
}

#[test]
fn every_point_has_an_inverse() {
    for p in all_points() {
        assert!(p.add(&-&p).unwrap().is_identity());
        assert!((-&p).is_on_curve());
    }
}

#[test]
fn generator_has_order_five() {
    let g = Point::generator();
    let four_g = point_multiply(&BigUint::from(4u8), &g).unwrap();

    assert!(four_g.add(&g).unwrap().is_identity());
    assert_eq!(four_g, -g);
}

#[test]
fn multiply_rejects_out_of_range_scalars() {
    let g = Point::generator();
    for k in [0u32, ORDER, ORDER + 1, 1000] {
        assert_eq!(point_multiply(&BigUint::from(k), &g), Err(Error::InvalidScalar));
    }
}

#[test]
fn coordinates_must_be_reduced() {
    // (3 + 97, 6) satisfies the equation modulo 97 but is not reduced
    assert_eq!(
        Point::from_coordinates(BigUint::from(100u32), BigUint::from(6u32)),
        Err(Error::InvalidPoint)
    );
    assert_eq!(
        Point::from_coordinates(BigUint::from(3u32), BigUint::from(7u32)),
        Err(Error::InvalidPoint)
    );
}

#[test]
fn sec1_rejects_malformed_input() {
    let malformed: [&[u8]; 6] = [&[], &[0x04, 3], &[0x04, 3, 7], &[0x02, 3], &[0x00, 0x00], &[0x05, 3, 6]];
    for bytes in malformed {
        assert_eq!(Point::from_sec1_bytes(bytes), Err(Error::InvalidPoint));
    }

    assert_eq!(Point::from_sec1_bytes(&[0x04, 3, 6]).unwrap(), Point::generator());
}

prop_compose! {
    fn scalar()(k in 1..ORDER) -> u32 {
        k
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scalar_multiplication_is_linear(a in scalar(), b in scalar()) {
        let g = Point::generator();
        let sa = Scalar::new(BigUint::from(a)).unwrap();
        let sb = Scalar::new(BigUint::from(b)).unwrap();

        let sum = g.multiply(&sa).unwrap().add(&g.multiply(&sb).unwrap()).unwrap();

        match (a + b) % ORDER {
            0 => prop_assert!(sum.is_identity()),
            c => prop_assert_eq!(sum, mul_lsb_first(&g, c)),
        }
    }

    #[test]
    fn multiply_by_generator_matches_repeated_addition(k in scalar()) {
        let s = Scalar::new(BigUint::from(k)).unwrap();
        prop_assert_eq!(Point::mul_by_generator(&s).unwrap(), mul_lsb_first(&Point::generator(), k));
    }
}
