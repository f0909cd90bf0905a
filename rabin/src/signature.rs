//! Rabin signatures.

use crate::{Error, Result};
use core::{fmt, str::FromStr};
use num_bigint::BigUint;

/// Rabin signature: a square root `s` modulo `n` of the padded message's
/// hash, and the number of zero bytes appended to the message.
///
/// The text form is `<s in lowercase hex>:<padding in decimal>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    s: BigUint,
    padding: u32,
}

impl Signature {
    /// Create a signature from its components.
    pub fn new(s: BigUint, padding: u32) -> Self {
        Self { s, padding }
    }

    /// Square root `s`.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Number of zero bytes appended to the message before hashing.
    pub fn padding(&self) -> u32 {
        self.padding
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}:{}", self.s, self.padding)
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (root, padding) = s.split_once(':').ok_or(Error::InvalidSignatureEncoding)?;

        // digits only: no signs or separators
        if !is_digits(root, u8::is_ascii_hexdigit) || !is_digits(padding, u8::is_ascii_digit) {
            return Err(Error::InvalidSignatureEncoding);
        }

        let root = BigUint::parse_bytes(root.as_bytes(), 16).ok_or(Error::InvalidSignatureEncoding)?;
        let padding = padding
            .parse::<u32>()
            .map_err(|_| Error::InvalidSignatureEncoding)?;

        Ok(Self::new(root, padding))
    }
}

fn is_digits(s: &str, is_digit: fn(&u8) -> bool) -> bool {
    !s.is_empty() && s.as_bytes().iter().all(is_digit)
}
