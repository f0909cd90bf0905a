#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(any(feature = "dev", test))]
pub mod dev;

mod affine;
mod error;
mod point_arithmetic;
mod scalar;

pub use crate::{
    affine::AffinePoint,
    error::{Error, Result},
    point_arithmetic::{point_add, point_double, point_multiply},
    scalar::NonZeroScalar,
};
pub use modarith;
pub use num_bigint::{self, BigUint};
pub use rand_core;

use core::fmt::Debug;

/// Parameters for elliptic curves of prime order which can be described by the
/// short Weierstrass equation `y² = x³ + a·x + b (mod p)`.
///
/// All values are big-endian byte strings without leading zero bytes. The
/// length of [`PrimeCurveParams::FIELD_MODULUS`] determines the width of
/// encoded coordinates, and the length of [`PrimeCurveParams::ORDER`] the
/// width of encoded scalars.
pub trait PrimeCurveParams: Copy + Clone + Debug + Default + Eq + PartialEq + 'static {
    /// Prime `p` of the base field.
    const FIELD_MODULUS: &'static [u8];

    /// Coefficient `a` in the curve equation.
    const EQUATION_A: &'static [u8];

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: &'static [u8];

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (&'static [u8], &'static [u8]);

    /// Order `n` of the group generated by [`PrimeCurveParams::GENERATOR`].
    const ORDER: &'static [u8];

    /// Field modulus `p` as an integer.
    fn field_modulus() -> BigUint {
        BigUint::from_bytes_be(Self::FIELD_MODULUS)
    }

    /// Group order `n` as an integer.
    fn order() -> BigUint {
        BigUint::from_bytes_be(Self::ORDER)
    }

    /// Size in bytes of an encoded field element.
    fn field_bytes_len() -> usize {
        Self::FIELD_MODULUS.len()
    }

    /// Size in bytes of an encoded scalar.
    fn scalar_bytes_len() -> usize {
        Self::ORDER.len()
    }
}

/// Encode `value` as exactly `len` big-endian bytes, left-padded with zeros.
///
/// `value` must fit in `len` bytes.
pub(crate) fn to_fixed_be(value: &BigUint, len: usize) -> alloc::vec::Vec<u8> {
    let bytes = value.to_bytes_be();
    debug_assert!(bytes.len() <= len);

    let mut out = alloc::vec![0u8; len];
    out[len.saturating_sub(bytes.len())..].copy_from_slice(&bytes[bytes.len().saturating_sub(len)..]);
    out
}
