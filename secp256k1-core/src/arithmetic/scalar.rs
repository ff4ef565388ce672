//! Scalar field arithmetic modulo n.

use super::modular::Modulus;
use crate::{FieldBytes, Result, Secp256k1};
use bigint::{Encoding, U256, Zero};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
    CtOption,
};
use zeroize::DefaultIsZeroes;

const MODULUS: Modulus = Modulus::new(Secp256k1::ORDER);

/// Constant representing the modulus / 2
/// n/2 = 7FFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 5D576E73 57A4501D DFE92F46 681B20A0
const FRAC_MODULUS_2: U256 =
    U256::from_be_hex("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0");

/// An element in the finite field modulo n.
///
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
#[derive(Clone, Copy, Default)]
pub struct Scalar(U256);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(U256::ONE);

    /// Parses a big-endian hex string; only for constants known to be below `n`.
    pub(crate) const fn from_hex_unchecked(hex: &str) -> Self {
        Self(U256::from_be_hex(hex))
    }

    /// Creates a scalar from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self(U256::from_u64(w))
    }

    /// Decodes a scalar from an integer, rejecting values `≥ n`.
    pub fn from_uint(w: U256) -> CtOption<Self> {
        CtOption::new(Self(w), w.ct_lt(&Secp256k1::ORDER))
    }

    /// Reduces an arbitrary 256-bit integer modulo `n` with a single
    /// conditional subtraction.
    pub fn from_uint_reduced(w: U256) -> Self {
        Self(MODULUS.reduce(&w))
    }

    /// Attempts to parse the given byte array as an SEC1-encoded scalar.
    ///
    /// Returns None if the byte array does not contain a big-endian integer in the range
    /// [0, n).
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        Self::from_uint(U256::from_be_bytes(*bytes))
    }

    /// Parses the given byte array as a big-endian integer and reduces it
    /// modulo `n` once.
    pub fn from_bytes_reduced(bytes: &FieldBytes) -> Self {
        Self::from_uint_reduced(U256::from_be_bytes(*bytes))
    }

    /// Returns the SEC1 encoding of this scalar.
    pub fn to_bytes(&self) -> FieldBytes {
        self.0.to_be_bytes()
    }

    /// Returns the underlying integer.
    pub const fn to_uint(&self) -> U256 {
        self.0
    }

    /// Is this scalar equal to zero?
    pub fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    /// Is this scalar greater than n / 2?
    pub fn is_high(&self) -> Choice {
        self.0.ct_gt(&FRAC_MODULUS_2)
    }

    /// Returns the multiplicative inverse of self.
    ///
    /// Fails with [`Error::NoInverse`](crate::Error::NoInverse) for zero.
    pub fn invert(&self) -> Result<Self> {
        MODULUS.invert(&self.0).map(Self)
    }

    /// Returns self * self.
    pub fn square(&self) -> Self {
        Self(MODULUS.square(&self.0))
    }

    /// Returns the number of significant bits. Variable-time.
    pub(crate) fn bits_vartime(&self) -> usize {
        self.0.bits_vartime()
    }

    /// Returns bit `index` of the scalar. Variable-time.
    pub(crate) fn bit_vartime(&self, index: usize) -> bool {
        self.0.bit_vartime(index)
    }

    /// Returns `[self * b >> shift]`, rounded to the nearest integer.
    ///
    /// Variable-time only in `shift`, which must lie in `[257, 512)`.
    pub(crate) fn mul_shift_var(&self, b: &U256, shift: usize) -> U256 {
        debug_assert!((257..512).contains(&shift));
        let (_, hi) = self.0.mul_wide(b);
        let shifted = hi.shr_vartime(shift - 256);
        let round = hi.bit_vartime(shift - 257);
        shifted.wrapping_add(&U256::from_word(round as bigint::Word))
    }

}

impl From<u64> for Scalar {
    fn from(k: u64) -> Self {
        Self::from_u64(k)
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:X})", &self.0)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U256::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl DefaultIsZeroes for Scalar {}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Self(MODULUS.neg(&self.0))
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        -*self
    }
}

macro_rules! impl_scalar_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl $op<&Scalar> for &Scalar {
            type Output = Scalar;

            #[inline]
            fn $op_fn(self, other: &Scalar) -> Scalar {
                Scalar(MODULUS.$inner(&self.0, &other.0))
            }
        }

        impl $op<&Scalar> for Scalar {
            type Output = Scalar;

            #[inline]
            fn $op_fn(self, other: &Scalar) -> Scalar {
                (&self).$op_fn(other)
            }
        }

        impl $op<Scalar> for Scalar {
            type Output = Scalar;

            #[inline]
            fn $op_fn(self, other: Scalar) -> Scalar {
                (&self).$op_fn(&other)
            }
        }

        impl $assign<Scalar> for Scalar {
            #[inline]
            fn $assign_fn(&mut self, other: Scalar) {
                *self = (&*self).$op_fn(&other);
            }
        }

        impl $assign<&Scalar> for Scalar {
            #[inline]
            fn $assign_fn(&mut self, other: &Scalar) {
                *self = (&*self).$op_fn(other);
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, add);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, mul);
