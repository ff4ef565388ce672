//! Secret keys.

use crate::{Error, FieldBytes, ProjectivePoint, PublicKey, Result, Scalar, codec};
use core::{fmt, str::FromStr};
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 secret key: a scalar in `[1, n)`.
///
/// The scalar is zeroized on drop and never printed by [`fmt::Debug`].
#[derive(Clone)]
pub struct SecretKey {
    inner: Scalar,
}

impl SecretKey {
    /// Generates a random secret key by rejection sampling.
    pub fn random(rng: &mut impl CryptoRngCore) -> Self {
        let mut bytes = FieldBytes::default();

        loop {
            rng.fill_bytes(&mut bytes);

            if let Ok(secret_key) = Self::from_bytes(&bytes) {
                bytes.zeroize();
                return secret_key;
            }
        }
    }

    /// Deserializes a 32-byte big-endian scalar.
    ///
    /// Zero and values `>= n` fail with [`Error::InvalidScalar`].
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        let scalar: Option<Scalar> = Scalar::from_bytes(bytes).into();

        match scalar {
            Some(inner) if !bool::from(inner.is_zero()) => Ok(Self { inner }),
            _ => Err(Error::InvalidScalar),
        }
    }

    /// Deserializes a big-endian scalar from a slice of exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes: &FieldBytes = slice.try_into().map_err(|_| Error::InvalidKeyFormat)?;
        Self::from_bytes(bytes)
    }

    /// Wraps a nonzero scalar.
    pub fn from_scalar(inner: Scalar) -> Result<Self> {
        if inner.is_zero().into() {
            return Err(Error::InvalidScalar);
        }

        Ok(Self { inner })
    }

    /// Serializes the scalar as 32 big-endian bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.inner.to_bytes()
    }

    /// Borrows the secret scalar.
    pub fn as_scalar(&self) -> &Scalar {
        &self.inner
    }

    /// Public key `[d] G`, computed in constant time.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_scalar(&self.inner)
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.inner.ct_eq(&other.inner)
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl FromStr for SecretKey {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self> {
        let mut bytes = codec::hex_to_array::<32>(hex)?;
        let result = Self::from_bytes(&bytes);
        bytes.zeroize();
        result
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl From<&SecretKey> for ProjectivePoint {
    fn from(secret_key: &SecretKey) -> ProjectivePoint {
        secret_key.public_key().to_projective()
    }
}
