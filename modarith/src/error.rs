//! Error types.

use core::fmt;

/// Modular arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Inverse requested for a value congruent to zero.
    DivisionByZero,

    /// Value shares a factor with the modulus, so no inverse exists.
    NotInvertible,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::NotInvertible => f.write_str("value is not invertible modulo the modulus"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
