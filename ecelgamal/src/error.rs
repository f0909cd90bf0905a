//! Error types.

use core::fmt;

/// Encryption errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Public or ephemeral point is the identity, off the curve, or badly
    /// encoded.
    InvalidPoint,

    /// Secret scalar is zero or not less than the group order.
    InvalidScalar,

    /// Curve arithmetic failed.
    Curve(weierstrass::Error),

    /// Keystream derivation failed.
    KeyDerivation(hashexpand::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPoint => f.write_str("invalid secp256k1 point"),
            Error::InvalidScalar => f.write_str("invalid secp256k1 scalar"),
            Error::Curve(err) => write!(f, "curve arithmetic failed: {err}"),
            Error::KeyDerivation(err) => write!(f, "key derivation failed: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Curve(err) => Some(err),
            Error::KeyDerivation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Error {
        match err {
            weierstrass::Error::InvalidPoint => Error::InvalidPoint,
            weierstrass::Error::InvalidScalar => Error::InvalidScalar,
            other => Error::Curve(other),
        }
    }
}

impl From<hashexpand::Error> for Error {
    fn from(err: hashexpand::Error) -> Error {
        Error::KeyDerivation(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
