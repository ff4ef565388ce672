//! Hex and fixed-width big-endian conversions.
//!
//! Scalars, coordinates and keys travel as 32-byte big-endian strings. The
//! helpers here validate the number of hex digits before decoding so that
//! callers can tell a truncated input from a corrupted one.

use crate::{Error, FieldBytes, Result};
use alloc::{string::String, vec::Vec};
use bigint::{Encoding, U256};

/// Decodes a hex string of any even length.
///
/// Odd lengths fail with [`Error::InvalidHexLength`]; non-hex characters fail
/// with [`Error::InvalidKeyFormat`].
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(Error::InvalidHexLength);
    }

    hex::decode(hex).map_err(|_| Error::InvalidKeyFormat)
}

/// Decodes a hex string of exactly `2 * N` digits into an array.
pub fn hex_to_array<const N: usize>(hex: &str) -> Result<[u8; N]> {
    if hex.len() != N * 2 {
        return Err(Error::InvalidHexLength);
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(hex, &mut out).map_err(|_| Error::InvalidKeyFormat)?;
    Ok(out)
}

/// Lowercase hex encoding.
pub fn bytes_to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Big-endian, zero-padded 32-byte encoding of `n`.
pub fn int_to_bytes(n: &U256) -> FieldBytes {
    n.to_be_bytes()
}

/// Parses up to 32 big-endian bytes as an integer.
///
/// Shorter inputs are left-padded with zeros; longer inputs fail with
/// [`Error::InvalidKeyFormat`].
pub fn bytes_to_int(bytes: &[u8]) -> Result<U256> {
    if bytes.len() > 32 {
        return Err(Error::InvalidKeyFormat);
    }

    let mut padded = FieldBytes::default();
    padded[32 - bytes.len()..].copy_from_slice(bytes);
    Ok(U256::from_be_bytes(padded))
}

/// 64-digit lowercase hex encoding of `n`.
pub fn int_to_hex(n: &U256) -> String {
    bytes_to_hex(int_to_bytes(n))
}

/// Parses exactly 64 hex digits as a big-endian integer.
pub fn hex_to_int(hex: &str) -> Result<U256> {
    hex_to_array::<32>(hex).map(U256::from_be_bytes)
}
