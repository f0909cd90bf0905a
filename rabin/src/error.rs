//! Error types.

use core::fmt;

/// Rabin signature errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Primes are equal, composite, or not congruent to 3 mod 4.
    InvalidKeyPair,

    /// Requested prime size is below [`MIN_PRIME_BITS`][crate::MIN_PRIME_BITS].
    InvalidBitLength,

    /// No padding up to the configured maximum yields a quadratic residue.
    SignatureSearchExhausted,

    /// Signature text is not of the form `<s in hex>:<padding>`.
    InvalidSignatureEncoding,

    /// Modular arithmetic failed.
    Arithmetic(modarith::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyPair => f.write_str("invalid Rabin key pair"),
            Error::InvalidBitLength => f.write_str("prime bit length too small"),
            Error::SignatureSearchExhausted => {
                f.write_str("no quadratic residue found within the padding limit")
            }
            Error::InvalidSignatureEncoding => f.write_str("malformed signature encoding"),
            Error::Arithmetic(err) => write!(f, "modular arithmetic failed: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<modarith::Error> for Error {
    fn from(err: modarith::Error) -> Error {
        Error::Arithmetic(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
