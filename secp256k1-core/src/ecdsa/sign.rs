//! ECDSA signing.

use super::{
    RecoveryId, SignOptions, Signature, VerifyingKey, hash_to_scalar,
    rfc6979::{HmacDrbg, MAX_NONCE_CANDIDATES},
};
use crate::{Error, FieldBytes, ProjectivePoint, Result, Scalar, SecretKey};
use core::fmt;
use rand_core::CryptoRngCore;
use sha2::{Digest, Sha256};

/// ECDSA/secp256k1 signing key.
#[derive(Clone)]
pub struct SigningKey {
    secret_key: SecretKey,
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generates a random signing key.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        SecretKey::random(rng).into()
    }

    /// Initializes a signing key from a 32-byte big-endian scalar.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        SecretKey::from_bytes(bytes).map(Into::into)
    }

    /// Initializes a signing key from a slice of exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SecretKey::from_slice(bytes).map(Into::into)
    }

    /// Serializes the secret scalar.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_key.to_bytes()
    }

    /// Borrows the underlying [`SecretKey`].
    pub fn as_secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// The [`VerifyingKey`] which corresponds to this key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Hashes `msg` with SHA-256 and signs the digest.
    pub fn sign(&self, msg: &[u8]) -> Result<(Signature, RecoveryId)> {
        self.sign_prehash(&Sha256::digest(msg))
    }

    /// Signs a message hash with the default [`SignOptions`].
    pub fn sign_prehash(&self, msg_hash: &[u8]) -> Result<(Signature, RecoveryId)> {
        self.sign_prehash_with_options(msg_hash, &SignOptions::default())
    }

    /// Signs a message hash.
    pub fn sign_prehash_with_options(
        &self,
        msg_hash: &[u8],
        options: &SignOptions,
    ) -> Result<(Signature, RecoveryId)> {
        sign_prehash(self.secret_key.as_scalar(), msg_hash, options)
    }

    /// Signs a message hash, mixing 32 bytes drawn from `rng` into the
    /// RFC6979 seed.
    pub fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg_hash: &[u8],
    ) -> Result<(Signature, RecoveryId)> {
        let mut extra_entropy = FieldBytes::default();
        rng.fill_bytes(&mut extra_entropy);

        let options = SignOptions {
            extra_entropy: Some(extra_entropy),
            ..SignOptions::default()
        };
        self.sign_prehash_with_options(msg_hash, &options)
    }

    /// Signs a message hash with an explicitly provided ephemeral scalar.
    ///
    /// The signature is returned exactly as computed, without low-S
    /// normalization.
    ///
    /// # ⚠️ Warning
    ///
    /// Reusing `k` for two different messages, or choosing it predictably,
    /// reveals the secret key.
    pub fn sign_prehash_with_nonce(
        &self,
        k: &Scalar,
        msg_hash: &[u8],
    ) -> Result<(Signature, RecoveryId)> {
        sign_with_nonce(self.secret_key.as_scalar(), k, &hash_to_scalar(msg_hash))
    }
}

impl From<SecretKey> for SigningKey {
    fn from(secret_key: SecretKey) -> Self {
        let verifying_key = VerifyingKey::from(secret_key.public_key());
        Self {
            secret_key,
            verifying_key,
        }
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        *signing_key.verifying_key()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.secret_key == other.secret_key
    }
}

impl Eq for SigningKey {}

/// RFC6979 signing of `msg_hash` under the secret scalar `d`.
pub(super) fn sign_prehash(
    d: &Scalar,
    msg_hash: &[u8],
    options: &SignOptions,
) -> Result<(Signature, RecoveryId)> {
    let z = hash_to_scalar(msg_hash);
    let d_bytes = d.to_bytes();
    let z_bytes = z.to_bytes();
    let extra_entropy = options.extra_entropy.as_ref().map_or(&[][..], |e| &e[..]);

    let mut drbg = HmacDrbg::new(&[&d_bytes[..], &z_bytes[..], extra_entropy]);

    for _ in 0..MAX_NONCE_CANDIDATES {
        let candidate: Option<Scalar> = Scalar::from_bytes(&drbg.generate()).into();

        if let Some(k) = candidate {
            if let Ok((signature, recovery_id)) = sign_with_nonce(d, &k, &z) {
                return Ok(if options.canonical {
                    canonicalize(signature, recovery_id)
                } else {
                    (signature, recovery_id)
                });
            }
        }

        drbg.reseed();
    }

    Err(Error::NonceSearchExhausted)
}

/// Computes `(r, s)` for the ephemeral scalar `k`.
///
/// Fails with [`Error::InvalidScalar`] when `k`, `r` or `s` is zero, in
/// which case the caller draws another nonce.
#[allow(non_snake_case)]
fn sign_with_nonce(d: &Scalar, k: &Scalar, z: &Scalar) -> Result<(Signature, RecoveryId)> {
    // Compute 𝑹 = 𝑘×𝑮
    let R = ProjectivePoint::GENERATOR.mul_ct(k)?.to_affine();

    // Lift the x-coordinate of 𝑹 into an integer and reduce it into the
    // scalar field
    let x = R.x.to_uint();
    let r = Scalar::from_uint_reduced(x);
    let k_inv = k.invert()?;

    let s = k_inv * (*z + r * d);
    let signature = Signature::from_scalars(r, s)?;

    let is_x_reduced = x != r.to_uint();
    let recovery_id = RecoveryId::new(R.y_is_odd().into(), is_x_reduced);
    Ok((signature, recovery_id))
}

/// Moves `s` into the lower half, flipping the parity bit of the recovery id
/// to match `-R`.
fn canonicalize(signature: Signature, recovery_id: RecoveryId) -> (Signature, RecoveryId) {
    if signature.has_high_s() {
        (
            signature.normalize_s(),
            RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced()),
        )
    } else {
        (signature, recovery_id)
    }
}
