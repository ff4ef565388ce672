//! Affine points

#![allow(clippy::op_ref)]

use super::{CURVE_EQUATION_B, FieldElement, ProjectivePoint, Scalar};
use crate::{EncodedPoint, Error, FieldBytes, Result, sec1::Tag};
use core::ops::{Add, Neg, Sub};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::DefaultIsZeroes;

/// secp256k1 curve point expressed in affine coordinates.
///
/// The identity is represented by the sentinel `(0, 0)`, which is never on
/// the curve since `7` is not a square modulo `p`.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: FieldElement,

    /// y-coordinate
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// Additive identity of the group: the point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
    };

    /// Base point of secp256k1.
    ///
    /// ```text
    /// Gₓ = 79be667e f9dcbbac 55a06295 ce870b07 029bfcdb 2dce28d9 59f2815b 16f81798
    /// Gᵧ = 483ada77 26a3c465 5da4fbfc 0e1108a8 fd17b448 a6855419 9c47d08f fb10d4b8
    /// ```
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_hex_unchecked(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        ),
        y: FieldElement::from_hex_unchecked(
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        ),
    };

    /// Create a new [`AffinePoint`] with the given coordinates.
    pub(crate) const fn new_unchecked(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    /// Create a new [`AffinePoint`], checking that it lies on the curve.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self::new_unchecked(x, y);
        point.assert_validity()?;
        Ok(point)
    }

    /// Serialized x-coordinate.
    pub fn x(&self) -> FieldBytes {
        self.x.to_bytes()
    }

    /// Serialized y-coordinate.
    pub fn y(&self) -> FieldBytes {
        self.y.to_bytes()
    }

    /// Is the y-coordinate odd?
    pub fn y_is_odd(&self) -> Choice {
        self.y.is_odd()
    }

    /// Is this point the identity point?
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.is_zero()
    }

    /// Checks that both coordinates are nonzero and `y² = x³ + 7`.
    ///
    /// Coordinates are below `p` by construction of [`FieldElement`].
    pub fn assert_validity(&self) -> Result<()> {
        let nonzero = !self.x.is_zero() & !self.y.is_zero();
        let on_curve = self.y.square().ct_eq(&(self.x.square() * &self.x + &CURVE_EQUATION_B));

        if bool::from(nonzero & on_curve) {
            Ok(())
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Recovers the point with the given x-coordinate and y parity.
    pub fn decompress(x_bytes: &FieldBytes, y_is_odd: Choice) -> CtOption<Self> {
        FieldElement::from_bytes(x_bytes).and_then(|x| {
            let alpha = (x * &x * &x) + &CURVE_EQUATION_B;
            let beta = alpha.sqrt();

            beta.map(|beta| {
                let y = FieldElement::conditional_select(
                    &-beta,
                    &beta,
                    beta.is_odd().ct_eq(&y_is_odd),
                );

                Self::new_unchecked(x, y)
            })
        })
    }

    /// Decodes a compressed or uncompressed SEC1 point and validates it.
    ///
    /// Fails with [`Error::InvalidKeyFormat`] on a length other than 33 or 65
    /// bytes, and with [`Error::InvalidPoint`] on an unknown tag or a point
    /// that is not on the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_encoded_point(&EncodedPoint::from_bytes(bytes)?)
    }

    /// Attempts to parse the given [`EncodedPoint`] as a point on the curve.
    pub fn from_encoded_point(encoded_point: &EncodedPoint) -> Result<Self> {
        let x = encoded_point.x();

        let point: Self = match encoded_point.tag() {
            Tag::CompressedEvenY => Option::<Self>::from(Self::decompress(&x, Choice::from(0))),
            Tag::CompressedOddY => Option::<Self>::from(Self::decompress(&x, Choice::from(1))),
            Tag::Uncompressed => encoded_point.y().and_then(|y| {
                let x = FieldElement::from_bytes(&x);
                let y = FieldElement::from_bytes(&y);
                Option::<Self>::from(x.and_then(|x| y.map(|y| Self::new_unchecked(x, y))))
            }),
        }
        .ok_or(Error::InvalidPoint)?;

        point.assert_validity()?;
        Ok(point)
    }

    /// Serializes this point as SEC1, compressed if requested.
    ///
    /// The identity serializes with zero coordinates, which does not decode.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        EncodedPoint::from_affine_coordinates(&self.x.to_bytes(), &self.y.to_bytes(), compress)
    }

    /// Doubles this point.
    pub fn double(&self) -> AffinePoint {
        ProjectivePoint::from(*self).double().to_affine()
    }

    /// Multiplies this point by `k` in constant time.
    ///
    /// Fails with [`Error::InvalidScalar`] when `k` is zero.
    pub fn multiply(&self, k: &Scalar) -> Result<AffinePoint> {
        Ok(ProjectivePoint::from(*self).mul_ct(k)?.to_affine())
    }

    /// Multiplies this point by `k` in variable time. Only for public scalars.
    ///
    /// Fails with [`Error::InvalidScalar`] when `k` is zero.
    pub fn multiply_unsafe(&self, k: &Scalar) -> Result<AffinePoint> {
        Ok(ProjectivePoint::from(*self).mul_vartime(k)?.to_affine())
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &AffinePoint, b: &AffinePoint, choice: Choice) -> AffinePoint {
        AffinePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &AffinePoint) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DefaultIsZeroes for AffinePoint {}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &AffinePoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Neg for AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> Self::Output {
        AffinePoint {
            x: self.x,
            y: -self.y,
        }
    }
}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Add<&AffinePoint> for &AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: &AffinePoint) -> AffinePoint {
        (ProjectivePoint::from(*self) + other).to_affine()
    }
}

impl Add<AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    fn add(self, other: AffinePoint) -> AffinePoint {
        &self + &other
    }
}

impl Sub<&AffinePoint> for &AffinePoint {
    type Output = AffinePoint;

    fn sub(self, other: &AffinePoint) -> AffinePoint {
        (ProjectivePoint::from(*self) - other).to_affine()
    }
}

impl Sub<AffinePoint> for AffinePoint {
    type Output = AffinePoint;

    fn sub(self, other: AffinePoint) -> AffinePoint {
        &self - &other
    }
}

impl TryFrom<EncodedPoint> for AffinePoint {
    type Error = Error;

    fn try_from(point: EncodedPoint) -> Result<AffinePoint> {
        AffinePoint::from_encoded_point(&point)
    }
}

impl TryFrom<&EncodedPoint> for AffinePoint {
    type Error = Error;

    fn try_from(point: &EncodedPoint) -> Result<AffinePoint> {
        AffinePoint::from_encoded_point(point)
    }
}

impl From<AffinePoint> for EncodedPoint {
    fn from(affine_point: AffinePoint) -> EncodedPoint {
        EncodedPoint::from(&affine_point)
    }
}

impl From<&AffinePoint> for EncodedPoint {
    fn from(affine_point: &AffinePoint) -> EncodedPoint {
        affine_point.to_encoded_point(true)
    }
}
