//! Elliptic Curve Diffie-Hellman (Ephemeral) Support.
//!
//! This module contains a high-level interface for performing ephemeral
//! Diffie-Hellman key exchanges using the secp256k1 elliptic curve.
//!
//! # Usage
//!
//! This usage example is from the perspective of two participants in the
//! exchange, nicknamed "Alice" and "Bob".
//!
//! ```
//! use secp256k1_core::{EncodedPoint, PublicKey, ecdh::EphemeralSecret};
//! use rand_core::OsRng; // requires 'getrandom' feature
//!
//! // Alice
//! let alice_secret = EphemeralSecret::random(&mut OsRng);
//! let alice_pk_bytes = EncodedPoint::from(&alice_secret.public_key());
//!
//! // Bob
//! let bob_secret = EphemeralSecret::random(&mut OsRng);
//! let bob_pk_bytes = EncodedPoint::from(&bob_secret.public_key());
//!
//! // Alice decodes Bob's serialized public key and computes a shared secret from it
//! let bob_public = PublicKey::from_sec1_bytes(bob_pk_bytes.as_ref())?;
//! let alice_shared = alice_secret.diffie_hellman(&bob_public);
//!
//! // Bob decodes Alice's serialized public key and computes the same shared secret
//! let alice_public = PublicKey::from_sec1_bytes(alice_pk_bytes.as_ref())?;
//! let bob_shared = bob_secret.diffie_hellman(&alice_public);
//!
//! // Both participants arrive on the same shared secret
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! # Ok::<(), secp256k1_core::Error>(())
//! ```

use crate::{AffinePoint, EncodedPoint, FieldBytes, PublicKey, SecretKey};
use core::fmt;
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SEC1 encoding of the shared point `[d] Q`, computed in constant time.
///
/// The result is never the identity: `d` is nonzero and the group has prime
/// order.
pub fn shared_secret(
    secret_key: &SecretKey,
    public_key: &PublicKey,
    compress: bool,
) -> EncodedPoint {
    shared_point(secret_key, public_key).to_encoded_point(compress)
}

/// x-coordinate of the shared point `[d] Q`.
pub fn diffie_hellman(secret_key: &SecretKey, public_key: &PublicKey) -> SharedSecret {
    SharedSecret::from(&shared_point(secret_key, public_key))
}

fn shared_point(secret_key: &SecretKey, public_key: &PublicKey) -> AffinePoint {
    (public_key.to_projective() * secret_key.as_scalar()).to_affine()
}

/// secp256k1 Ephemeral Diffie-Hellman Secret.
///
/// Used once and dropped; there is no way to serialize it.
pub struct EphemeralSecret {
    secret_key: SecretKey,
}

impl EphemeralSecret {
    /// Generates a random ephemeral secret.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        Self {
            secret_key: SecretKey::random(rng),
        }
    }

    /// Public key to send to the other party.
    pub fn public_key(&self) -> PublicKey {
        self.secret_key.public_key()
    }

    /// Computes the shared secret with the other party's public key.
    pub fn diffie_hellman(&self, public_key: &PublicKey) -> SharedSecret {
        diffie_hellman(&self.secret_key, public_key)
    }
}

impl fmt::Debug for EphemeralSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EphemeralSecret").finish_non_exhaustive()
    }
}

/// Shared secret value computed via ECDH key agreement.
///
/// Holds the x-coordinate of the shared point, which should be fed through a
/// KDF before use as a symmetric key.
pub struct SharedSecret {
    secret_bytes: FieldBytes,
}

impl SharedSecret {
    /// Shared secret value, not suitable for use as a key as-is.
    pub fn raw_secret_bytes(&self) -> &FieldBytes {
        &self.secret_bytes
    }
}

impl From<&AffinePoint> for SharedSecret {
    fn from(affine: &AffinePoint) -> SharedSecret {
        Self {
            secret_bytes: affine.x.to_bytes(),
        }
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SharedSecret {}
