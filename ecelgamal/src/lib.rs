#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod ecdh;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

mod ciphertext;
mod error;
mod public_key;
mod secret_key;

pub use crate::{
    ciphertext::{Ciphertext, decrypt, encrypt},
    error::{Error, Result},
    public_key::PublicKey,
    secret_key::SecretKey,
};
pub use hashexpand::key_derivation;
pub use rand_core;
pub use weierstrass;

use hex_literal::hex;
use rand_core::CryptoRng;
use weierstrass::PrimeCurveParams;

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain
/// Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl PrimeCurveParams for Secp256k1 {
    const FIELD_MODULUS: &'static [u8] =
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");
    const EQUATION_A: &'static [u8] = &[];
    const EQUATION_B: &'static [u8] = &[7];
    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"),
        &hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"),
    );
    const ORDER: &'static [u8] =
        &hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
}

/// secp256k1 point in affine coordinates.
pub type AffinePoint = weierstrass::AffinePoint<Secp256k1>;

/// secp256k1 scalar in `[1, n)`.
pub type NonZeroScalar = weierstrass::NonZeroScalar<Secp256k1>;

/// Size of a serialized field element or scalar in bytes.
pub const FIELD_BYTES_LEN: usize = 32;

/// Size of an uncompressed SEC1 point encoding in bytes.
pub const UNCOMPRESSED_POINT_LEN: usize = 1 + 2 * FIELD_BYTES_LEN;

/// Generate a fresh key pair: a random secret scalar `d` and `Q = d·G`.
///
/// # Errors
/// Propagates curve arithmetic failures.
pub fn generate_keys<R: CryptoRng + ?Sized>(rng: &mut R) -> Result<(SecretKey, PublicKey)> {
    let secret_key = SecretKey::random(rng);
    let public_key = secret_key.public_key()?;
    Ok((secret_key, public_key))
}
