//! A pure-Rust implementation of group operations on secp256k1.

pub(crate) mod affine;
pub mod field;
pub(crate) mod modular;
pub(crate) mod mul;
pub(crate) mod projective;
pub mod scalar;
pub(crate) mod tables;

#[cfg(test)]
pub(crate) mod util;

pub use self::{affine::AffinePoint, mul::WnafTable, projective::ProjectivePoint};

use self::{field::FieldElement, scalar::Scalar};

pub(crate) const CURVE_EQUATION_B: FieldElement = FieldElement::from_u64(7);

/// Cube root of unity `β` in the base field; `λ·(x, y) = (β·x, y)`.
pub(crate) const ENDOMORPHISM_BETA: FieldElement = FieldElement::from_hex_unchecked(
    "7ae96a2b657c07106e64479eac3434e99cf0497512f58995c1396c28719501ee",
);
