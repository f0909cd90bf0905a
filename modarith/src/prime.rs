//! Primality testing and Blum prime generation.

use alloc::vec;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRng;

/// The first twenty primes, used both for the small-prime sieve and as the
/// Miller–Rabin witness set.
const SMALL_PRIMES: [u32; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// `3·5·7·11·13·17·19·23·29`
const ODD_PRIMORIAL_29: u64 = 3_234_846_615;

/// Deterministic primality test by trial division up to `√n`.
///
/// Exact, but only practical for small inputs. Use [`is_probable_prime`] for
/// key-sized values.
pub fn is_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u8) {
        return false;
    }

    if n.is_even() {
        return *n == BigUint::from(2u8);
    }

    let limit = n.sqrt();
    let mut divisor = BigUint::from(3u8);

    while divisor <= limit {
        if (n % &divisor).is_zero() {
            return false;
        }
        divisor += 2u8;
    }

    true
}

/// Miller–Rabin primality test.
///
/// Candidates are first sieved by the first twenty primes, then tested against
/// those same primes as witnesses. Exact for `n < 3.3·10²⁴`; for larger `n` a
/// composite passes with probability at most `4⁻²⁰` when the candidate is not
/// chosen adversarially.
pub fn is_probable_prime(n: &BigUint) -> bool {
    if *n < BigUint::from(2u8) {
        return false;
    }

    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);

        if *n == p {
            return true;
        }

        if (n % &p).is_zero() {
            return false;
        }
    }

    let n_minus_one = n - 1u8;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &a in SMALL_PRIMES.iter() {
        let mut x = BigUint::from(a).modpow(&d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = &x * &x % n;

            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Find the smallest prime `p >= start` with `p ≡ 3 (mod 4)`.
///
/// Candidates advance in steps of 4; above 29 any candidate sharing a factor
/// with `3·5·…·29` is skipped before the Miller–Rabin test.
pub fn next_blum_prime(start: &BigUint) -> BigUint {
    let four = BigUint::from(4u8);
    let three = BigUint::from(3u8);
    let sieve_limit = BigUint::from(29u8);
    let primorial = BigUint::from(ODD_PRIMORIAL_29);

    let mut candidate = start.clone();
    while &candidate % &four != three {
        candidate += 1u8;
    }

    loop {
        let sieved = candidate <= sieve_limit || candidate.gcd(&primorial).is_one();

        if sieved && is_probable_prime(&candidate) {
            return candidate;
        }

        candidate += 4u8;
    }
}

/// Generate a random `bits`-bit prime `p ≡ 3 (mod 4)`.
///
/// Candidates have their top bit and both low bits set, so every draw is an
/// odd `bits`-bit value congruent to 3 mod 4. Draws are repeated until one
/// passes [`is_probable_prime`]. `bits` is clamped to at least 2.
pub fn random_blum_prime<R: CryptoRng + ?Sized>(bits: u64, rng: &mut R) -> BigUint {
    let bits = bits.max(2);

    loop {
        let candidate = random_candidate(bits, rng);

        if is_probable_prime(&candidate) {
            return candidate;
        }
    }
}

fn random_candidate<R: CryptoRng + ?Sized>(bits: u64, rng: &mut R) -> BigUint {
    let len = bits.div_ceil(8);
    let mut bytes = vec![0u8; len as usize];
    rng.fill_bytes(&mut bytes);

    let mut candidate = BigUint::from_bytes_be(&bytes) >> (len * 8 - bits);
    candidate.set_bit(bits - 1, true);
    candidate.set_bit(1, true);
    candidate.set_bit(0, true);
    candidate
}
