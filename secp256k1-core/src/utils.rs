//! Miscellaneous helpers: key generation and HMAC-SHA256.

use crate::{FieldBytes, SecretKey};
use hmac::{Hmac, Mac};
use rand_core::CryptoRngCore;
use sha2::Sha256;

/// Generates 32 bytes encoding a valid secret key.
pub fn random_private_key(rng: &mut impl CryptoRngCore) -> FieldBytes {
    SecretKey::random(rng).to_bytes()
}

/// HMAC-SHA256 of the concatenation of `messages` under `key`.
pub fn hmac_sha256(key: &[u8], messages: &[&[u8]]) -> [u8; 32] {
    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key)
        .expect("HMAC can take a key of any size");

    for message in messages {
        mac.update(message);
    }

    mac.finalize().into_bytes().into()
}
