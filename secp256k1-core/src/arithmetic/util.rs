//! Test helpers for checking arithmetic against `num-bigint`.

use bigint::{Encoding, U256};
use num_bigint::BigUint;

/// Converts a byte array (big-endian) to BigUint.
pub fn bytes_to_biguint(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Converts a BigUint below `2^256` to a byte array (big-endian).
pub fn biguint_to_bytes(x: &BigUint) -> [u8; 32] {
    let be = x.to_bytes_be();
    assert!(be.len() <= 32, "value exceeds 256 bits");
    let mut bytes = [0u8; 32];
    bytes[32 - be.len()..].copy_from_slice(&be);
    bytes
}

pub fn u256_to_biguint(x: &U256) -> BigUint {
    bytes_to_biguint(&x.to_be_bytes())
}

pub fn biguint_to_u256(x: &BigUint) -> U256 {
    U256::from_be_bytes(biguint_to_bytes(x))
}
