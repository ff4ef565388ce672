//! Deterministic nonce generation as described in RFC6979 § 3.2, using
//! HMAC-DRBG over SHA-256.

use crate::utils::hmac_sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum number of candidates drawn before giving up on a nonce.
pub(crate) const MAX_NONCE_CANDIDATES: usize = 1000;

/// HMAC-DRBG state `(K, V)`.
pub(crate) struct HmacDrbg {
    k: [u8; 32],
    v: [u8; 32],
}

impl HmacDrbg {
    /// Steps b through g: seeds the generator with the concatenation of
    /// `seed_parts`.
    pub(crate) fn new(seed_parts: &[&[u8]]) -> Self {
        let mut drbg = Self {
            k: [0x00; 32],
            v: [0x01; 32],
        };

        let empty: &[u8] = &[];

        for tag in [0x00u8, 0x01] {
            let mut input = [empty; 6];
            input[0] = &drbg.v[..];
            input[1] = core::slice::from_ref(&tag);
            for (slot, part) in input[2..].iter_mut().zip(seed_parts.iter().copied()) {
                *slot = part;
            }

            drbg.k = hmac_sha256(&drbg.k, &input);
            drbg.v = hmac_sha256(&drbg.k, &[&drbg.v[..]]);
        }

        drbg
    }

    /// Step h.2: the next 32-byte candidate.
    pub(crate) fn generate(&mut self) -> [u8; 32] {
        self.v = hmac_sha256(&self.k, &[&self.v[..]]);
        self.v
    }

    /// Step h.3: rejects the last candidate and updates the state.
    pub(crate) fn reseed(&mut self) {
        self.k = hmac_sha256(&self.k, &[&self.v[..], &[0x00][..]]);
        self.v = hmac_sha256(&self.k, &[&self.v[..]]);
    }
}

impl Drop for HmacDrbg {
    fn drop(&mut self) {
        self.k.zeroize();
        self.v.zeroize();
    }
}

impl ZeroizeOnDrop for HmacDrbg {}
