//! Elliptic Curve Digital Signature Algorithm (ECDSA).
//!
//! Signing uses RFC6979 deterministic nonces, optionally mixed with extra
//! entropy, and by default produces low-S ("canonical") signatures as
//! described in [BIP 0062][1]. Every signature comes with a [`RecoveryId`]
//! from which the signer's public key can be recovered.
//!
//! ## Signing and verification
//!
//! ```
//! use secp256k1_core::ecdsa::{SigningKey, VerifyingKey};
//! use rand_core::OsRng; // requires 'getrandom' feature
//!
//! let signing_key = SigningKey::random(&mut OsRng);
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//!
//! let (signature, recovery_id) = signing_key.sign(message)?;
//! assert!(signing_key.verifying_key().verify(message, &signature));
//!
//! let recovered = VerifyingKey::recover_from_msg(message, &signature, recovery_id)?;
//! assert_eq!(&recovered, signing_key.verifying_key());
//! # Ok::<(), secp256k1_core::Error>(())
//! ```
//!
//! Messages are hashed with SHA-256. The `*_prehash` methods and the free
//! functions in this module accept an already computed hash instead.
//!
//! [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki

pub mod der;
pub mod recoverable;

mod rfc6979;
mod sign;
mod verify;

pub use self::{recoverable::RecoveryId, sign::SigningKey, verify::VerifyingKey};

use crate::{EncodedPoint, Error, FieldBytes, PublicKey, Result, Scalar, SecretKey, codec};
use alloc::vec::Vec;
use core::{fmt, str::FromStr};

/// Size of a fixed-width `r || s` signature.
pub const SIGNATURE_SIZE: usize = 64;

/// ECDSA/secp256k1 signature: a pair of nonzero scalars `(r, s)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    /// Builds a signature from its components, rejecting zero.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self> {
        if bool::from(r.is_zero() | s.is_zero()) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self { r, s })
    }

    /// Parses the fixed-width `r || s` encoding.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Result<Self> {
        let (r, s) = bytes.split_at(32);
        let r = Option::<Scalar>::from(Scalar::from_bytes(&field_bytes(r)))
            .ok_or(Error::InvalidScalar)?;
        let s = Option::<Scalar>::from(Scalar::from_bytes(&field_bytes(s)))
            .ok_or(Error::InvalidScalar)?;
        Self::from_scalars(r, s)
    }

    /// Parses the fixed-width `r || s` encoding from a slice.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = slice
            .try_into()
            .map_err(|_| Error::InvalidSignatureEncoding)?;
        Self::from_bytes(bytes)
    }

    /// Parses a strict ASN.1 DER signature.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        der::decode(bytes)
    }

    /// Fixed-width `r || s` encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..32].copy_from_slice(&self.r.to_bytes());
        bytes[32..].copy_from_slice(&self.s.to_bytes());
        bytes
    }

    /// ASN.1 DER encoding, at most [`der::MAX_SIZE`] bytes.
    pub fn to_der(&self) -> Vec<u8> {
        der::encode(self)
    }

    /// The `r` component.
    pub fn r(&self) -> &Scalar {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Is `s` in the upper half of the scalar field?
    pub fn has_high_s(&self) -> bool {
        self.s.is_high().into()
    }

    /// Normalizes the signature into "low S" form: `s` is replaced by
    /// `n - s` when it exceeds `n / 2`.
    pub fn normalize_s(&self) -> Self {
        if self.has_high_s() {
            Self {
                r: self.r,
                s: -self.s,
            }
        } else {
            *self
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::bytes_to_hex(self.to_bytes()))
    }
}

impl FromStr for Signature {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self> {
        Self::from_bytes(&codec::hex_to_array(hex)?)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

/// Signing options.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SignOptions {
    /// Produce a low-S signature, adjusting the recovery id accordingly.
    pub canonical: bool,

    /// Additional data mixed into the RFC6979 seed (§ 3.6). Signatures stay
    /// valid but are no longer deterministic in the key and hash alone.
    pub extra_entropy: Option<FieldBytes>,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            canonical: true,
            extra_entropy: None,
        }
    }
}

/// Verification options.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerifyOptions {
    /// Reject signatures whose `s` exceeds `n / 2`.
    pub strict: bool,
}

/// SEC1 encoding of the public key for `secret_key`.
pub fn get_public_key(secret_key: &SecretKey, compress: bool) -> EncodedPoint {
    secret_key.public_key().to_encoded_point(compress)
}

/// Signs a message hash.
///
/// Hashes longer than 32 bytes are truncated to their leftmost 256 bits.
pub fn sign(
    msg_hash: &[u8],
    secret_key: &SecretKey,
    options: SignOptions,
) -> Result<(Signature, RecoveryId)> {
    sign::sign_prehash(secret_key.as_scalar(), msg_hash, &options)
}

/// Verifies a signature over a message hash. High-S signatures are accepted.
pub fn verify(signature: &Signature, msg_hash: &[u8], public_key: &PublicKey) -> bool {
    verify_with_options(signature, msg_hash, public_key, &VerifyOptions::default())
}

/// Verifies a signature over a message hash with the given options.
pub fn verify_with_options(
    signature: &Signature,
    msg_hash: &[u8],
    public_key: &PublicKey,
    options: &VerifyOptions,
) -> bool {
    verify::verify_prehash(public_key, msg_hash, signature, options)
}

/// Recovers the public key that produced `signature` over `msg_hash`.
pub fn recover_public_key(
    msg_hash: &[u8],
    signature: &Signature,
    recovery_id: RecoveryId,
) -> Result<PublicKey> {
    recoverable::recover_prehash(msg_hash, signature, recovery_id)
}

/// Interprets the leftmost 256 bits of a message hash as a big-endian
/// integer and reduces it modulo `n`.
pub(crate) fn hash_to_scalar(msg_hash: &[u8]) -> Scalar {
    let len = msg_hash.len().min(32);
    let mut bytes = FieldBytes::default();
    bytes[32 - len..].copy_from_slice(&msg_hash[..len]);
    Scalar::from_bytes_reduced(&bytes)
}

fn field_bytes(slice: &[u8]) -> FieldBytes {
    let mut bytes = FieldBytes::default();
    bytes.copy_from_slice(slice);
    bytes
}

#[cfg(test)]
mod tests {
    use super::{Signature, hash_to_scalar};
    use crate::{Error, Scalar, Secp256k1};
    use bigint::{Encoding, U256};
    use hex_literal::hex;

    // Test vectors generated using rust-secp256k1
    #[test]
    #[rustfmt::skip]
    fn normalize_s_high() {
        let sig_hi = Signature::from_bytes(&[
            0x20, 0xc0, 0x1a, 0x91, 0x0e, 0xbb, 0x26, 0x10,
            0xaf, 0x2d, 0x76, 0x3f, 0xa0, 0x9b, 0x3b, 0x30,
            0x92, 0x3c, 0x8e, 0x40, 0x8b, 0x11, 0xdf, 0x2c,
            0x61, 0xad, 0x76, 0xd9, 0x70, 0xa2, 0xf1, 0xbc,
            0xee, 0x2f, 0x11, 0xef, 0x8c, 0xb0, 0x0a, 0x49,
            0x61, 0x7d, 0x13, 0x57, 0xf4, 0xd5, 0x56, 0x41,
            0x09, 0x0a, 0x48, 0xf2, 0x01, 0xe9, 0xb9, 0x59,
            0xc4, 0x8f, 0x6f, 0x6b, 0xec, 0x6f, 0x93, 0x8f,
        ]).unwrap();

        let sig_lo = Signature::from_bytes(&[
            0x20, 0xc0, 0x1a, 0x91, 0x0e, 0xbb, 0x26, 0x10,
            0xaf, 0x2d, 0x76, 0x3f, 0xa0, 0x9b, 0x3b, 0x30,
            0x92, 0x3c, 0x8e, 0x40, 0x8b, 0x11, 0xdf, 0x2c,
            0x61, 0xad, 0x76, 0xd9, 0x70, 0xa2, 0xf1, 0xbc,
            0x11, 0xd0, 0xee, 0x10, 0x73, 0x4f, 0xf5, 0xb6,
            0x9e, 0x82, 0xec, 0xa8, 0x0b, 0x2a, 0xa9, 0xbd,
            0xb1, 0xa4, 0x93, 0xf4, 0xad, 0x5e, 0xe6, 0xe1,
            0xfb, 0x42, 0xef, 0x20, 0xe3, 0xc6, 0xad, 0xb2,
        ]).unwrap();

        assert!(sig_hi.has_high_s());
        assert!(!sig_lo.has_high_s());
        assert_eq!(sig_lo, sig_hi.normalize_s());
    }

    #[test]
    fn normalize_s_low() {
        let sig = Signature::from_scalars(Scalar::ONE, Scalar::ONE).unwrap();
        assert_eq!(sig, sig.normalize_s());
    }

    #[test]
    fn fixed_width_errors() {
        assert_eq!(
            Signature::from_slice(&[1u8; 63]),
            Err(Error::InvalidSignatureEncoding)
        );
        assert_eq!(Signature::from_bytes(&[0u8; 64]), Err(Error::InvalidScalar));

        let mut bytes = [1u8; 64];
        bytes[..32].copy_from_slice(&Secp256k1::ORDER.to_be_bytes());
        assert_eq!(Signature::from_bytes(&bytes), Err(Error::InvalidScalar));
    }

    #[test]
    fn hex_round_trip() {
        let hex = "432310e32cb80eb6503a26ce83cc165c783b870845fb8aad6d970889fcd7a6c8\
                   530128b6b81c548874a6305d93ed071ca6e05074d85863d4056ce89b02bfab69";
        let sig: Signature = hex.parse().unwrap();
        assert_eq!(alloc::string::ToString::to_string(&sig), hex);
        assert_eq!(Signature::from_der(&sig.to_der()).unwrap(), sig);
    }

    #[test]
    fn hash_truncation() {
        let long = [0xffu8; 40];
        let expected = Scalar::from_uint_reduced(U256::MAX);
        assert_eq!(hash_to_scalar(&long), expected);

        assert_eq!(hash_to_scalar(&hex!("0102")), Scalar::from(0x0102u64));
        assert_eq!(hash_to_scalar(&[]), Scalar::ZERO);
    }
}
