//! Pure Rust secp256k1 core: field and group arithmetic, constant-time and
//! variable-time scalar multiplication, RFC6979 deterministic ECDSA,
//! public-key recovery and Elliptic Curve Diffie-Hellman.
//!
//! ## Usage
//!
//! ```
//! use secp256k1_core::{ecdsa, SecretKey};
//! use hex_literal::hex;
//!
//! let secret_key = SecretKey::from_slice(&hex!(
//!     "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721"
//! ))?;
//!
//! // SHA-256("sample")
//! let msg_hash = hex!("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf");
//!
//! let (signature, recovery_id) = ecdsa::sign(&msg_hash, &secret_key, Default::default())?;
//! let public_key = secret_key.public_key();
//!
//! assert!(ecdsa::verify(&signature, &msg_hash, &public_key));
//! assert_eq!(
//!     ecdsa::recover_public_key(&msg_hash, &signature, recovery_id)?,
//!     public_key
//! );
//! # Ok::<(), secp256k1_core::Error>(())
//! ```
//!
//! ## Minimum Supported Rust Version
//!
//! Rust **1.85** or higher.
//!
//! Minimum supported Rust version can be changed in the future, but it will be
//! done with a minor version bump.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod arithmetic;
pub mod codec;
pub mod ecdh;
pub mod ecdsa;
pub mod sec1;
pub mod utils;

mod error;
mod public_key;
mod secret_key;

#[cfg(test)]
mod test_vectors;

pub use crate::{
    arithmetic::{
        AffinePoint, ProjectivePoint, WnafTable, field::FieldElement, scalar::Scalar,
    },
    error::{Error, Result},
    public_key::PublicKey,
    sec1::EncodedPoint,
    secret_key::SecretKey,
};

pub use bigint::U256;
pub use rand_core;
pub use subtle;

/// Big-endian serialization of a 32-byte field element or scalar.
pub type FieldBytes = [u8; 32];

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl Secp256k1 {
    /// Order of the base field, `P = 2^256 - 2^32 - 977`.
    pub const FIELD_MODULUS: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

    /// Order of the group generated by [`Secp256k1::GENERATOR`].
    pub const ORDER: U256 =
        U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

    /// Curve equation coefficient `a`.
    pub const EQUATION_A: u32 = 0;

    /// Curve equation coefficient `b`.
    pub const EQUATION_B: u32 = 7;

    /// Cofactor of the curve.
    pub const COFACTOR: u32 = 1;

    /// Base point of secp256k1.
    pub const GENERATOR: AffinePoint = AffinePoint::GENERATOR;

    /// Cube root of unity in the base field used by the GLV endomorphism
    /// `(x, y) ↦ (β·x, y)`.
    pub const ENDOMORPHISM_BETA: FieldElement = arithmetic::ENDOMORPHISM_BETA;
}
