//! Quadratic residuosity and square roots modulo Blum primes.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Decide whether `h` is a quadratic residue modulo the odd prime `p` using
/// Euler's criterion.
///
/// Zero counts as a residue (`0² ≡ 0`), matching what a square-root
/// extraction modulo `p` needs.
pub fn is_quadratic_residue(h: &BigUint, p: &BigUint) -> bool {
    let h = h % p;

    if h.is_zero() {
        return true;
    }

    let exponent = (p - 1u8) >> 1u32;
    h.modpow(&exponent, p).is_one()
}

/// Square root of `h` modulo a prime `p ≡ 3 (mod 4)`, computed as
/// `h^((p+1)/4) mod p`.
///
/// The result is only meaningful when `h` is a quadratic residue modulo `p`.
pub fn sqrt_blum(h: &BigUint, p: &BigUint) -> BigUint {
    debug_assert_eq!(p % 4u8, BigUint::from(3u8));
    let exponent = (p + 1u8) >> 2u32;
    h.modpow(&exponent, p)
}
