//! Error types.

use core::fmt;

/// secp256k1 errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Point is not on the curve, is the identity where one was not
    /// allowed, or carries an unknown SEC1 tag.
    InvalidPoint,

    /// Scalar is zero or out of the range `[1, n)`.
    InvalidScalar,

    /// Malformed DER or fixed-width signature encoding.
    InvalidSignatureEncoding,

    /// Hex input has the wrong number of digits.
    InvalidHexLength,

    /// Key has the wrong length or contains non-hex characters.
    InvalidKeyFormat,

    /// Value has no inverse modulo the given modulus.
    NoInverse,

    /// RFC6979 nonce generation ran out of candidates.
    NonceSearchExhausted,

    /// wNAF window size does not divide 256 or exceeds the supported maximum.
    InvalidWindowSize,

    /// Recovery id is outside `0..=3`.
    InvalidRecoveryId,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidPoint => "invalid curve point",
            Error::InvalidScalar => "scalar out of range",
            Error::InvalidSignatureEncoding => "invalid signature encoding",
            Error::InvalidHexLength => "invalid hex length",
            Error::InvalidKeyFormat => "invalid key format",
            Error::NoInverse => "value has no modular inverse",
            Error::NonceSearchExhausted => "nonce search exhausted",
            Error::InvalidWindowSize => "invalid wNAF window size",
            Error::InvalidRecoveryId => "invalid recovery id",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
