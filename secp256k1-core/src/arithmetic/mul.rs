//! Scalar multiplication.
//!
//! Two strategies are provided:
//!
//! - [`ProjectivePoint::mul_vartime`]: binary double-and-add over the GLV
//!   decomposition of the scalar. Only for public scalars.
//! - [`ProjectivePoint::mul_ct`] / [`WnafTable::mul`]: windowed NAF over a
//!   precomputed table. Every window performs exactly one point addition,
//!   into either the real accumulator or a decoy one, and table lookups scan
//!   the whole window.

use super::{AffinePoint, ProjectivePoint, scalar::Scalar, tables};
use crate::{Error, Result};
use alloc::vec::Vec;
use bigint::U256;
use core::ops::{Mul, MulAssign};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Largest supported wNAF window, bounding a table at `33 · 2^7` points.
pub const MAX_WINDOW_SIZE: usize = 8;

/// Window used for one-off tables in [`ProjectivePoint::mul_ct`]: 65 windows
/// of 8 points, built with 520 additions and one batch inversion.
pub(crate) const VARIABLE_BASE_WINDOW: usize = 4;

/*
From libsecp256k1:

The Secp256k1 curve has an endomorphism, where lambda * (x, y) = (beta * x, y), where
lambda is {0x53,0x63,0xad,0x4c,0xc0,0x5c,0x30,0xe0,0xa5,0x26,0x1c,0x02,0x88,0x12,0x64,0x5a,
        0x12,0x2e,0x22,0xea,0x20,0x81,0x66,0x78,0xdf,0x02,0x96,0x7c,0x1b,0x23,0xbd,0x72}

"Guide to Elliptic Curve Cryptography" (Hankerson, Menezes, Vanstone) gives an algorithm
(algorithm 3.74) to find k1 and k2 given k, such that k1 + k2 * lambda == k mod n, and k1
and k2 have a small size.

The algorithm computes c1 = round(b2 * k / n) and c2 = round((-b1) * k / n), and gives
k2 = -(c1*b1 + c2*b2) and k1 = k - k2 * lambda, avoiding the need for constants a1 and a2.

g1, g2 are precomputed constants used to replace division with a rounded multiplication:
g1 = round(2^384 * b2 / n), g2 = round(2^384 * (-b1) / n). With 384 bits of precision the
rounding never disagrees with exact division for k < n, so both halves stay below 2^128.
*/

const MINUS_LAMBDA: Scalar = Scalar::from_hex_unchecked(
    "ac9c52b33fa3cf1f5ad9e3fd77ed9ba4a880b9fc8ec739c2e0cfc810b51283cf",
);

const MINUS_B1: Scalar = Scalar::from_hex_unchecked(
    "00000000000000000000000000000000e4437ed6010e88286f547fa90abfe4c3",
);

const MINUS_B2: Scalar = Scalar::from_hex_unchecked(
    "fffffffffffffffffffffffffffffffe8a280ac50774346dd765cda83db1562c",
);

const G1: U256 =
    U256::from_be_hex("3086d221a7d46bcde86c90e49284eb153daa8a1471e8ca7fe893209a45dbb031");

const G2: U256 =
    U256::from_be_hex("e4437ed6010e88286f547fa90abfe4c4221208ac9df506c61571b4ae8ac47f71");

/// Find r1 and r2 given k, such that r1 + r2 * lambda == k mod n.
fn decompose_scalar(k: &Scalar) -> (Scalar, Scalar) {
    // these _var calls are constant time since the shift amount is constant
    let c1 = Scalar::from_uint_reduced(k.mul_shift_var(&G1, 384));
    let c2 = Scalar::from_uint_reduced(k.mul_shift_var(&G2, 384));

    let c1 = c1 * MINUS_B1;
    let c2 = c2 * MINUS_B2;
    let r2 = c1 + c2;
    let r1 = *k + r2 * MINUS_LAMBDA;

    (r1, r2)
}

/// Precomputed multiples of a fixed point for windowed-NAF multiplication.
///
/// For window size `W` the table holds `256/W + 1` windows of `2^(W-1)`
/// points each: window `i` stores `j · 2^(W·i) · P` for `j = 1..=2^(W-1)`.
#[derive(Clone, Debug)]
pub struct WnafTable {
    window: usize,
    points: Vec<AffinePoint>,
}

impl WnafTable {
    /// Builds the table for `point` with window size `window`.
    ///
    /// Fails with [`Error::InvalidWindowSize`] unless `window` divides 256
    /// and is at most [`MAX_WINDOW_SIZE`].
    pub fn new(point: &ProjectivePoint, window: usize) -> Result<Self> {
        if window == 0 || window > MAX_WINDOW_SIZE || 256 % window != 0 {
            return Err(Error::InvalidWindowSize);
        }

        let windows = 256 / window + 1;
        let window_size = 1 << (window - 1);
        let mut points = Vec::with_capacity(windows * window_size);

        let mut p = *point;
        for _ in 0..windows {
            let mut base = p;
            points.push(base);
            for _ in 1..window_size {
                base += &p;
                points.push(base);
            }
            p = base.double();
        }

        Ok(Self {
            window,
            points: ProjectivePoint::batch_normalize(&points)?,
        })
    }

    /// Window size `W` of this table.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns `[k] P` for the point this table was built from.
    ///
    /// Fails with [`Error::InvalidScalar`] when `k` is zero.
    pub fn mul(&self, k: &Scalar) -> Result<ProjectivePoint> {
        if k.is_zero().into() {
            return Err(Error::InvalidScalar);
        }

        let w = self.window;
        let windows = 256 / w + 1;
        let window_size = 1i32 << (w - 1);
        let max_number = 1i32 << w;
        let mask = (1u64 << w) - 1;

        let mut acc = ProjectivePoint::IDENTITY;
        let mut fake = ProjectivePoint::GENERATOR;
        let mut n = k.to_uint();

        for window in 0..windows {
            let offset = window * window_size as usize;

            let mut digit = (n.as_words()[0] as u64 & mask) as i32;
            n = n.shr_vartime(w);

            // Recenter digits above 2^(W-1) and carry into the next window.
            let carry = ((window_size - digit) >> 31) & 1;
            digit -= carry * max_number;
            n = n.wrapping_add(&U256::from_u8(carry as u8));

            let is_zero = (digit as u32).ct_eq(&0);
            let sign = (digit >> 31) & 1;
            let magnitude = (digit ^ -sign) + sign;
            let index = u32::conditional_select(&((magnitude - 1) as u32), &0, is_zero);

            let mut addend = ProjectivePoint::from(self.select(offset, index));
            let negate = Choice::conditional_select(
                &Choice::from(sign as u8),
                &Choice::from((window & 1) as u8),
                is_zero,
            );
            addend.conditional_assign(&-addend, negate);

            let target = ProjectivePoint::conditional_select(&acc, &fake, is_zero);
            let sum = target + &addend;
            acc.conditional_assign(&sum, !is_zero);
            fake.conditional_assign(&sum, is_zero);
        }

        core::hint::black_box(fake);
        Ok(acc)
    }

    /// Returns `points[offset + index]` without branching on `index`.
    fn select(&self, offset: usize, index: u32) -> AffinePoint {
        let window_size = 1usize << (self.window - 1);
        let mut t = AffinePoint::IDENTITY;

        for (j, point) in self.points[offset..offset + window_size].iter().enumerate() {
            t.conditional_assign(point, (j as u32).ct_eq(&index));
        }

        t
    }
}

impl ProjectivePoint {
    /// Returns `[k] self` using constant-time windowed NAF.
    ///
    /// The generator uses its cached table; other points build a
    /// window-4 table per call. Callers multiplying the same point many times
    /// should keep a [`WnafTable`] instead. Fails with
    /// [`Error::InvalidScalar`] when `k` is zero.
    pub fn mul_ct(&self, k: &Scalar) -> Result<ProjectivePoint> {
        if self == &ProjectivePoint::GENERATOR {
            tables::mul_base(k)
        } else {
            WnafTable::new(self, VARIABLE_BASE_WINDOW)?.mul(k)
        }
    }

    /// Returns `[k] self` in variable time using the GLV endomorphism.
    ///
    /// Only for public scalars. Fails with [`Error::InvalidScalar`] when `k`
    /// is zero.
    pub fn mul_vartime(&self, k: &Scalar) -> Result<ProjectivePoint> {
        if k.is_zero().into() {
            return Err(Error::InvalidScalar);
        }

        let (k1, k2) = decompose_scalar(k);
        let k1_neg = bool::from(k1.is_high());
        let k2_neg = bool::from(k2.is_high());
        let k1 = if k1_neg { -k1 } else { k1 };
        let k2 = if k2_neg { -k2 } else { k2 };

        let mut p1 = ProjectivePoint::IDENTITY;
        let mut p2 = ProjectivePoint::IDENTITY;
        let mut d = *self;

        for i in 0..k1.bits_vartime().max(k2.bits_vartime()) {
            if k1.bit_vartime(i) {
                p1 += &d;
            }
            if k2.bit_vartime(i) {
                p2 += &d;
            }
            d = d.double();
        }

        if k1_neg {
            p1 = -p1;
        }
        if k2_neg {
            p2 = -p2;
        }

        Ok(p1 + &p2.endomorphism())
    }

    /// Returns `[a] G + [b] self` in variable time; zero scalars contribute
    /// the identity.
    pub fn mul_add_generator_vartime(&self, a: &Scalar, b: &Scalar) -> ProjectivePoint {
        let lhs = if a.is_zero().into() {
            ProjectivePoint::IDENTITY
        } else {
            tables::mul_base(a).unwrap_or(ProjectivePoint::IDENTITY)
        };

        let rhs = self.mul_vartime(b).unwrap_or(ProjectivePoint::IDENTITY);
        lhs + &rhs
    }
}

/// Constant-time multiplication; a zero scalar yields the identity.
fn mul(x: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
    x.mul_ct(k).unwrap_or(ProjectivePoint::IDENTITY)
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: Scalar) -> ProjectivePoint {
        mul(&self, &other)
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul(self, other)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul(&self, other)
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = mul(self, &rhs);
    }
}

impl MulAssign<&Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: &Scalar) {
        *self = mul(self, rhs);
    }
}

impl Mul<Scalar> for AffinePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: Scalar) -> ProjectivePoint {
        ProjectivePoint::from(self) * scalar
    }
}

impl Mul<&Scalar> for AffinePoint {
    type Output = ProjectivePoint;

    fn mul(self, scalar: &Scalar) -> ProjectivePoint {
        ProjectivePoint::from(self) * scalar
    }
}
