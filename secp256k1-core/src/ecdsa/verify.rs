//! ECDSA verification.

use super::{RecoveryId, Signature, VerifyOptions, hash_to_scalar, recoverable};
use crate::{AffinePoint, EncodedPoint, PublicKey, Result, Scalar};
use sha2::{Digest, Sha256};

/// ECDSA/secp256k1 verification key (i.e. public key).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    inner: PublicKey,
}

impl VerifyingKey {
    /// Initializes from a SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        PublicKey::from_sec1_bytes(bytes).map(Into::into)
    }

    /// Initializes from an affine point, rejecting the identity.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        PublicKey::from_affine(point).map(Into::into)
    }

    /// Borrows the underlying [`PublicKey`].
    pub fn as_public_key(&self) -> &PublicKey {
        &self.inner
    }

    /// Borrows the underlying point.
    pub fn as_affine(&self) -> &AffinePoint {
        self.inner.as_affine()
    }

    /// SEC1 encoding.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        self.inner.to_encoded_point(compress)
    }

    /// Verifies a signature over the SHA-256 digest of `msg`.
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> bool {
        self.verify_prehash(&Sha256::digest(msg), signature)
    }

    /// Verifies a signature over a message hash. High-S signatures are
    /// accepted.
    pub fn verify_prehash(&self, msg_hash: &[u8], signature: &Signature) -> bool {
        verify_prehash(&self.inner, msg_hash, signature, &VerifyOptions::default())
    }

    /// Verifies a signature over a message hash, rejecting high-S
    /// signatures.
    pub fn verify_prehash_strict(&self, msg_hash: &[u8], signature: &Signature) -> bool {
        verify_prehash(&self.inner, msg_hash, signature, &VerifyOptions { strict: true })
    }

    /// Recovers the key which signed the SHA-256 digest of `msg`.
    pub fn recover_from_msg(
        msg: &[u8],
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self> {
        Self::recover_from_prehash(&Sha256::digest(msg), signature, recovery_id)
    }

    /// Recovers the key which signed `msg_hash`.
    pub fn recover_from_prehash(
        msg_hash: &[u8],
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self> {
        recoverable::recover_prehash(msg_hash, signature, recovery_id).map(Into::into)
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(inner: PublicKey) -> Self {
        Self { inner }
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.inner
    }
}

impl From<&VerifyingKey> for EncodedPoint {
    fn from(verifying_key: &VerifyingKey) -> EncodedPoint {
        verifying_key.to_encoded_point(true)
    }
}

/// Checks `R = u1·G + u2·Q` with `u1 = z/s`, `u2 = r/s` and `R.x ≡ r (mod n)`.
pub(super) fn verify_prehash(
    public_key: &PublicKey,
    msg_hash: &[u8],
    signature: &Signature,
    options: &VerifyOptions,
) -> bool {
    if options.strict && signature.has_high_s() {
        return false;
    }

    let (r, s) = (signature.r(), signature.s());
    let z = hash_to_scalar(msg_hash);

    let s_inv = match s.invert() {
        Ok(s_inv) => s_inv,
        Err(_) => return false,
    };

    let u1 = z * &s_inv;
    let u2 = *r * &s_inv;

    let point = public_key
        .to_projective()
        .mul_add_generator_vartime(&u1, &u2);

    if point.is_identity().into() {
        return false;
    }

    Scalar::from_uint_reduced(point.to_affine().x.to_uint()) == *r
}
