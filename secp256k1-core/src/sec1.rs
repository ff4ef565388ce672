//! Compressed and uncompressed secp256k1 points.
//!
//! Serialized according to the `Elliptic-Curve-Point-to-Octet-String`
//! algorithm described in SEC 1: Elliptic Curve Cryptography (Version 2.0)
//! section 2.3.3 (page 10):
//!
//! <https://www.secg.org/sec1-v2.pdf>

use crate::{Error, FieldBytes, Result};
use core::fmt;

/// Size of a compressed point including the `0x02`/`0x03` tag byte.
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of an uncompressed point including the `0x04` tag byte.
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

/// SEC1 tag byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum Tag {
    /// Compressed point with even y-coordinate
    CompressedEvenY = 0x02,

    /// Compressed point with odd y-coordinate
    CompressedOddY = 0x03,

    /// Uncompressed point
    Uncompressed = 0x04,
}

impl Tag {
    /// Parses a tag byte.
    pub fn from_u8(byte: u8) -> Result<Self> {
        match byte {
            0x02 => Ok(Tag::CompressedEvenY),
            0x03 => Ok(Tag::CompressedOddY),
            0x04 => Ok(Tag::Uncompressed),
            _ => Err(Error::InvalidPoint),
        }
    }

    /// Is this a compressed tag?
    pub fn is_compressed(self) -> bool {
        self != Tag::Uncompressed
    }

    /// Total length of a point with this tag.
    pub fn message_len(self) -> usize {
        if self.is_compressed() {
            COMPRESSED_POINT_SIZE
        } else {
            UNCOMPRESSED_POINT_SIZE
        }
    }
}

/// SEC1-encoded secp256k1 point, either compressed or uncompressed.
///
/// Only structure (length and tag) is checked here; curve membership is
/// checked when decoding into an [`AffinePoint`](crate::AffinePoint).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct EncodedPoint {
    bytes: [u8; UNCOMPRESSED_POINT_SIZE],
}

impl EncodedPoint {
    /// Serializes a point from its affine coordinates, compressing if requested.
    pub fn from_affine_coordinates(x: &FieldBytes, y: &FieldBytes, compress: bool) -> Self {
        let mut bytes = [0u8; UNCOMPRESSED_POINT_SIZE];
        bytes[1..33].copy_from_slice(x);

        if compress {
            // Is the y-coordinate odd in the SEC1 sense: `self mod 2 == 1`?
            let is_y_odd = y[31] & 1 == 1;
            bytes[0] = if is_y_odd {
                Tag::CompressedOddY
            } else {
                Tag::CompressedEvenY
            } as u8;
        } else {
            bytes[0] = Tag::Uncompressed as u8;
            bytes[33..].copy_from_slice(y);
        }

        Self { bytes }
    }

    /// Decodes the structure of a SEC1-encoded point.
    ///
    /// Fails with [`Error::InvalidKeyFormat`] when the length is neither 33
    /// nor 65 bytes, and with [`Error::InvalidPoint`] on an unknown tag or a
    /// tag that disagrees with the length.
    pub fn from_bytes(input: impl AsRef<[u8]>) -> Result<Self> {
        let input = input.as_ref();

        if input.len() != COMPRESSED_POINT_SIZE && input.len() != UNCOMPRESSED_POINT_SIZE {
            return Err(Error::InvalidKeyFormat);
        }

        let tag = Tag::from_u8(input[0])?;

        if tag.message_len() != input.len() {
            return Err(Error::InvalidPoint);
        }

        let mut bytes = [0u8; UNCOMPRESSED_POINT_SIZE];
        bytes[..input.len()].copy_from_slice(input);
        Ok(Self { bytes })
    }

    /// Get the SEC1 tag for this point.
    pub fn tag(&self) -> Tag {
        match self.bytes[0] {
            0x02 => Tag::CompressedEvenY,
            0x03 => Tag::CompressedOddY,
            _ => Tag::Uncompressed,
        }
    }

    /// Is this point compressed?
    pub fn is_compressed(&self) -> bool {
        self.tag().is_compressed()
    }

    /// Length of the encoding in bytes.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tag().message_len()
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Get the x-coordinate.
    pub fn x(&self) -> FieldBytes {
        let mut x = FieldBytes::default();
        x.copy_from_slice(&self.bytes[1..33]);
        x
    }

    /// Get the y-coordinate, if this point is uncompressed.
    pub fn y(&self) -> Option<FieldBytes> {
        if self.is_compressed() {
            return None;
        }

        let mut y = FieldBytes::default();
        y.copy_from_slice(&self.bytes[33..]);
        Some(y)
    }
}

impl AsRef<[u8]> for EncodedPoint {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedPoint({:X?})", self.as_bytes())
    }
}

impl fmt::LowerHex for EncodedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
