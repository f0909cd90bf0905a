//! Key generation and signing.

use crate::{Error, MIN_PRIME_BITS, Result, Signature, SigningParams, VerifyingKey};
use core::fmt;
use hashexpand::hash_to_int;
use modarith::{invert, is_probable_prime, is_quadratic_residue, next_blum_prime, random_blum_prime, sqrt_blum};
use num_bigint::BigUint;
use num_traits::One;
use rand_core::CryptoRng;

/// Rabin private key: two distinct primes `p` and `q`, both congruent to
/// 3 mod 4.
///
/// The primes are never printed by [`fmt::Debug`].
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey {
    p: BigUint,
    q: BigUint,
    /// `q⁻¹ mod p`
    q_inv: BigUint,
    /// `p⁻¹ mod q`
    p_inv: BigUint,
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a key from two random `bits`-bit Blum primes, with default
    /// [`SigningParams`].
    ///
    /// # Errors
    /// [`Error::InvalidBitLength`] if `bits` is below
    /// [`MIN_PRIME_BITS`][crate::MIN_PRIME_BITS].
    pub fn random<R: CryptoRng + ?Sized>(rng: &mut R, bits: u64) -> Result<Self> {
        if bits < MIN_PRIME_BITS {
            return Err(Error::InvalidBitLength);
        }

        loop {
            let p = random_blum_prime(bits, rng);
            let q = random_blum_prime(bits, rng);

            if p != q {
                return Self::from_primes(p, q);
            }
        }
    }

    /// Generate a key of [`DEFAULT_PRIME_BITS`][crate::DEFAULT_PRIME_BITS]
    /// primes from the operating system's entropy source.
    ///
    /// # Errors
    /// See [`SigningKey::random`].
    ///
    /// # Panics
    /// If the operating system's random number generator fails.
    #[cfg(feature = "getrandom")]
    pub fn generate() -> Result<Self> {
        use rand_core::{OsRng, TryRngCore};
        Self::random(&mut OsRng.unwrap_err(), crate::DEFAULT_PRIME_BITS)
    }

    /// Create a key from explicit primes.
    ///
    /// # Errors
    /// [`Error::InvalidKeyPair`] if `p = q`, or either value is not a prime
    /// congruent to 3 mod 4.
    pub fn from_primes(p: BigUint, q: BigUint) -> Result<Self> {
        if p == q || !is_blum_prime(&p) || !is_blum_prime(&q) {
            return Err(Error::InvalidKeyPair);
        }

        let q_inv = invert(&q, &p)?;
        let p_inv = invert(&p, &q)?;
        let verifying_key = VerifyingKey::new(&p * &q, SigningParams::default());

        Ok(Self {
            p,
            q,
            q_inv,
            p_inv,
            verifying_key,
        })
    }

    /// Derive a key deterministically from `seed`.
    ///
    /// Each prime is the first Blum prime at or above the seed's hash reduced
    /// modulo `2^(256·level)`; `q` hashes the seed with a zero byte appended.
    ///
    /// # Errors
    /// [`Error::InvalidKeyPair`] if both hashes lead to the same prime.
    pub fn from_seed(seed: &[u8], params: SigningParams) -> Result<Self> {
        let bits = 256 * u64::from(params.security_level.get());
        let mask = (BigUint::one() << bits) - 1u8;

        let seed_q: [&[u8]; 2] = [seed, &[0]];

        let p = next_blum_prime(&(hash_to_int(&[seed], params.security_level) & &mask));
        let q = next_blum_prime(&(hash_to_int(&seed_q, params.security_level) & &mask));

        Ok(Self::from_primes(p, q)?.with_params(params))
    }

    /// Replace the parameters used when signing and verifying.
    pub fn with_params(mut self, params: SigningParams) -> Self {
        self.verifying_key = VerifyingKey::new(self.verifying_key.modulus().clone(), params);
        self
    }

    /// First prime factor.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Second prime factor.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign `msg`.
    ///
    /// Tries paddings `0, 1, …, max_padding` and signs the first padded
    /// message whose hash is a square modulo both primes.
    ///
    /// # Errors
    /// [`Error::SignatureSearchExhausted`] if no padding up to
    /// [`SigningParams::max_padding`] works.
    pub fn sign(&self, msg: &[u8]) -> Result<Signature> {
        let params = self.verifying_key.params();
        let n = self.verifying_key.modulus();

        for padding in 0..=params.max_padding {
            let h = params.message_representative(msg, padding, n);

            if is_quadratic_residue(&h, &self.p) && is_quadratic_residue(&h, &self.q) {
                return Ok(Signature::new(self.sqrt_mod_n(&h), padding));
            }
        }

        Err(Error::SignatureSearchExhausted)
    }

    /// Square root of a residue `h` modulo `n`, combined from the roots
    /// modulo `p` and `q`.
    fn sqrt_mod_n(&self, h: &BigUint) -> BigUint {
        let n = self.verifying_key.modulus();
        let root_p = sqrt_blum(h, &self.p);
        let root_q = sqrt_blum(h, &self.q);

        let lp = &self.q * root_p * &self.q_inv;
        let rp = &self.p * root_q * &self.p_inv;
        (lp + rp) % n
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

fn is_blum_prime(n: &BigUint) -> bool {
    n.bit(0) && n.bit(1) && is_probable_prime(n)
}
