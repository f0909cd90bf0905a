//! Error types.

use core::fmt;

/// Elliptic curve errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Scalar is zero or not less than the group order.
    InvalidScalar,

    /// Coordinates are out of range, not on the curve, or badly encoded.
    InvalidPoint,

    /// Underlying modular arithmetic failed.
    Arithmetic(modarith::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidScalar => f.write_str("scalar is zero or exceeds the group order"),
            Error::InvalidPoint => f.write_str("invalid curve point"),
            Error::Arithmetic(err) => write!(f, "curve arithmetic failed: {err}"),
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
