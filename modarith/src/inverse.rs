//! Modular inversion via the extended Euclidean algorithm.

use crate::{Error, Result};
use core::mem;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Compute the inverse of a signed `k` modulo `modulus`.
///
/// Returns the unique `r` with `0 <= r < modulus` such that
/// `k·r ≡ 1 (mod modulus)`. Negative inputs are normalized as
/// `modulus - inverse_mod(-k, modulus)`.
///
/// # Errors
/// - [`Error::DivisionByZero`] if `k ≡ 0 (mod modulus)`
/// - [`Error::NotInvertible`] if `gcd(k, modulus) != 1`
pub fn inverse_mod(k: &BigInt, modulus: &BigUint) -> Result<BigUint> {
    let inverse = invert(k.magnitude(), modulus)?;

    if k.is_negative() {
        Ok(modulus - inverse)
    } else {
        Ok(inverse)
    }
}

/// Compute the inverse of `k` modulo `modulus`.
///
/// Iterative form of the extended Euclidean algorithm, so the stack depth does
/// not grow with the size of the operands.
///
/// # Errors
/// - [`Error::DivisionByZero`] if `k ≡ 0 (mod modulus)`
/// - [`Error::NotInvertible`] if `gcd(k, modulus) != 1`
pub fn invert(k: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let k = k % modulus;
    if k.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let modulus = BigInt::from(modulus.clone());
    let (mut old_r, mut r) = (BigInt::from(k), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    // `old_r` is now `gcd(k, modulus)`
    if !old_r.is_one() {
        return Err(Error::NotInvertible);
    }

    Ok(old_s.mod_floor(&modulus).magnitude().clone())
}
