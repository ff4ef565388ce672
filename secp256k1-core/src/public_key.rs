//! Public keys.

use crate::{AffinePoint, EncodedPoint, Error, ProjectivePoint, Result, Scalar, codec};
use core::{fmt, str::FromStr};

/// secp256k1 public key: a curve point other than the identity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wraps an affine point after checking that it lies on the curve and is
    /// not the identity.
    pub fn from_affine(point: AffinePoint) -> Result<Self> {
        point.assert_validity()?;
        Ok(Self { point })
    }

    /// Normalizes a projective point and wraps it.
    pub fn from_projective(point: &ProjectivePoint) -> Result<Self> {
        Self::from_affine(point.to_affine())
    }

    /// `[d] G` for a nonzero secret scalar `d`.
    pub(crate) fn from_secret_scalar(d: &Scalar) -> Self {
        Self {
            point: (ProjectivePoint::GENERATOR * d).to_affine(),
        }
    }

    /// Parses a 33-byte compressed or 65-byte uncompressed SEC1 encoding.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_affine(AffinePoint::from_sec1_bytes(bytes)?)
    }

    /// Parses an [`EncodedPoint`].
    pub fn from_encoded_point(encoded_point: &EncodedPoint) -> Result<Self> {
        Self::from_affine(AffinePoint::from_encoded_point(encoded_point)?)
    }

    /// Borrows the underlying point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Converts to Jacobian coordinates.
    pub fn to_projective(&self) -> ProjectivePoint {
        self.point.into()
    }

    /// SEC1 encoding.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        self.point.to_encoded_point(compress)
    }
}

impl AsRef<AffinePoint> for PublicKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<PublicKey> for AffinePoint {
    fn from(public_key: PublicKey) -> AffinePoint {
        public_key.point
    }
}

impl From<&PublicKey> for EncodedPoint {
    fn from(public_key: &PublicKey) -> EncodedPoint {
        public_key.to_encoded_point(true)
    }
}

impl TryFrom<AffinePoint> for PublicKey {
    type Error = Error;

    fn try_from(point: AffinePoint) -> Result<Self> {
        Self::from_affine(point)
    }
}

impl TryFrom<&EncodedPoint> for PublicKey {
    type Error = Error;

    fn try_from(encoded_point: &EncodedPoint) -> Result<Self> {
        Self::from_encoded_point(encoded_point)
    }
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(hex: &str) -> Result<Self> {
        Self::from_sec1_bytes(&codec::hex_to_bytes(hex)?)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.to_encoded_point(true))
    }
}

#[cfg(test)]
mod tests {
    use super::PublicKey;
    use crate::{AffinePoint, Error, ProjectivePoint};
    use alloc::string::ToString;

    const SAMPLE: &str = "032c8c31fc9f990c6b55e3865a184a4ce50e09481f2eaeb3e60ec1cea13a6ae645";

    #[test]
    fn hex_round_trip() {
        let pk: PublicKey = SAMPLE.parse().unwrap();
        assert_eq!(pk.to_string(), SAMPLE);

        let uncompressed = pk.to_encoded_point(false);
        assert_eq!(PublicKey::from_encoded_point(&uncompressed).unwrap(), pk);
    }

    #[test]
    fn identity_is_rejected() {
        assert_eq!(
            PublicKey::from_affine(AffinePoint::IDENTITY),
            Err(Error::InvalidPoint)
        );
        assert_eq!(
            PublicKey::from_projective(&ProjectivePoint::IDENTITY),
            Err(Error::InvalidPoint)
        );
    }

    #[test]
    fn bad_lengths_are_rejected() {
        assert_eq!("0279".parse::<PublicKey>(), Err(Error::InvalidKeyFormat));
        assert_eq!("027".parse::<PublicKey>(), Err(Error::InvalidHexLength));
    }
}
