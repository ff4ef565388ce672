//! Field arithmetic modulo p = 2^256 - 2^32 - 977

use super::modular::Modulus;
use crate::{FieldBytes, Result, Secp256k1};
use bigint::{Encoding, U256, Zero};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess, CtOption};
use zeroize::DefaultIsZeroes;

const MODULUS: Modulus = Modulus::new(Secp256k1::FIELD_MODULUS);

/// `(p + 1) / 4`, the square root exponent for `p ≡ 3 (mod 4)`.
const SQRT_EXP: U256 =
    U256::from_be_hex("3fffffffffffffffffffffffffffffffffffffffffffffffffffffffbfffff0c");

/// An element in the finite field modulo p = 2^256 - 2^32 - 977.
///
/// Values are always kept fully reduced.
#[derive(Clone, Copy, Default)]
pub struct FieldElement(U256);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Multiplicative identity.
    pub const ONE: Self = Self(U256::ONE);

    /// Parses a big-endian hex string; only for constants known to be below `p`.
    pub(crate) const fn from_hex_unchecked(hex: &str) -> Self {
        Self(U256::from_be_hex(hex))
    }

    /// Creates a field element from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self(U256::from_u64(w))
    }

    /// Decodes a field element from a big-endian integer, rejecting values `≥ p`.
    pub fn from_uint(w: U256) -> CtOption<Self> {
        CtOption::new(Self(w), w.ct_lt(&Secp256k1::FIELD_MODULUS))
    }

    /// Attempts to parse the given byte array as an SEC1-encoded field element.
    ///
    /// Returns None if the byte array does not contain a big-endian integer in the range
    /// [0, p).
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        Self::from_uint(U256::from_be_bytes(*bytes))
    }

    /// Returns the SEC1 encoding of this field element.
    pub fn to_bytes(self) -> FieldBytes {
        self.0.to_be_bytes()
    }

    /// Returns the underlying integer.
    pub const fn to_uint(self) -> U256 {
        self.0
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> Choice {
        self.0.is_zero()
    }

    /// Determine if this `FieldElement` is odd in the SEC1 sense: `self mod 2 == 1`.
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0.as_words()[0] & 1) as u8)
    }

    /// Returns 2*self.
    pub fn double(&self) -> Self {
        self + self
    }

    /// Returns self * self.
    pub fn square(&self) -> Self {
        Self(MODULUS.square(&self.0))
    }

    /// Returns `self^exp`, variable-time in the exponent.
    pub fn pow_vartime(&self, exp: &U256) -> Self {
        Self(MODULUS.pow(&self.0, exp))
    }

    /// Returns the multiplicative inverse of self.
    ///
    /// Fails with [`Error::NoInverse`](crate::Error::NoInverse) for zero.
    pub fn invert(&self) -> Result<Self> {
        MODULUS.invert(&self.0).map(Self)
    }

    /// Inverts all nonzero elements of `elements` in place with one inversion.
    pub fn invert_batch(elements: &mut [Self]) -> Result<()> {
        let mut values: alloc::vec::Vec<U256> = elements.iter().map(|e| e.0).collect();
        MODULUS.invert_batch(&mut values)?;

        for (element, value) in elements.iter_mut().zip(values) {
            element.0 = value;
        }

        Ok(())
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        let root = self.pow_vartime(&SQRT_EXP);
        CtOption::new(root, root.square().ct_eq(self))
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", &self.0)
    }
}

impl ConditionallySelectable for FieldElement {
    #[inline(always)]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U256::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl DefaultIsZeroes for FieldElement {}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        Self(MODULUS.neg(&self.0))
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -*self
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, other: &FieldElement) -> FieldElement {
                FieldElement(MODULUS.$inner(&self.0, &other.0))
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, other: &FieldElement) -> FieldElement {
                (&self).$op_fn(other)
            }
        }

        impl $op<FieldElement> for FieldElement {
            type Output = FieldElement;

            #[inline]
            fn $op_fn(self, other: FieldElement) -> FieldElement {
                (&self).$op_fn(&other)
            }
        }

        impl $assign<FieldElement> for FieldElement {
            #[inline]
            fn $assign_fn(&mut self, other: FieldElement) {
                *self = (&*self).$op_fn(&other);
            }
        }

        impl $assign<&FieldElement> for FieldElement {
            #[inline]
            fn $assign_fn(&mut self, other: &FieldElement) {
                *self = (&*self).$op_fn(other);
            }
        }
    };
}

impl_field_op!(Add, add, AddAssign, add_assign, add);
impl_field_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_field_op!(Mul, mul, MulAssign, mul_assign, mul);

#[cfg(test)]
mod tests {
    use num_bigint::{BigUint, ToBigUint};
    use proptest::prelude::*;

    use super::FieldElement;
    use crate::{
        Error, FieldBytes, Secp256k1,
        arithmetic::util::{biguint_to_bytes, bytes_to_biguint, u256_to_biguint},
        test_vectors::field::DBL_TEST_VECTORS,
    };

    impl From<&BigUint> for FieldElement {
        fn from(x: &BigUint) -> Self {
            let bytes = biguint_to_bytes(x);
            Self::from_bytes(&bytes).unwrap()
        }
    }

    impl ToBigUint for FieldElement {
        fn to_biguint(&self) -> Option<BigUint> {
            Some(bytes_to_biguint(&self.to_bytes()))
        }
    }

    fn modulus_as_biguint() -> BigUint {
        u256_to_biguint(&Secp256k1::FIELD_MODULUS)
    }

    #[test]
    fn zero_is_additive_identity() {
        let zero = FieldElement::ZERO;
        let one = FieldElement::ONE;
        assert_eq!(zero + &zero, zero);
        assert_eq!(one + &zero, one);
    }

    #[test]
    fn one_is_multiplicative_identity() {
        let one = FieldElement::ONE;
        assert_eq!(one * &one, one);
    }

    #[test]
    fn from_bytes() {
        assert_eq!(
            FieldElement::from_bytes(&FieldBytes::default()).unwrap(),
            FieldElement::ZERO
        );
        let mut one = [0u8; 32];
        one[31] = 1;
        assert_eq!(FieldElement::from_bytes(&one).unwrap(), FieldElement::ONE);
        assert!(bool::from(FieldElement::from_bytes(&[0xff; 32]).is_none()));
        assert!(bool::from(
            FieldElement::from_uint(Secp256k1::FIELD_MODULUS).is_none()
        ));
    }

    #[test]
    fn repeated_add() {
        let mut r = FieldElement::ONE;
        for i in 0..DBL_TEST_VECTORS.len() {
            assert_eq!(r.to_bytes(), DBL_TEST_VECTORS[i]);
            r = r + &r;
        }
    }

    #[test]
    fn repeated_double() {
        let mut r = FieldElement::ONE;
        for i in 0..DBL_TEST_VECTORS.len() {
            assert_eq!(r.to_bytes(), DBL_TEST_VECTORS[i]);
            r = r.double();
        }
    }

    #[test]
    fn repeated_mul() {
        let mut r = FieldElement::ONE;
        let two = r + &r;
        for i in 0..DBL_TEST_VECTORS.len() {
            assert_eq!(r.to_bytes(), DBL_TEST_VECTORS[i]);
            r = r * &two;
        }
    }

    #[test]
    fn negation() {
        let two = FieldElement::ONE.double();
        let neg_two = -two;
        assert_eq!(two + &neg_two, FieldElement::ZERO);
        assert_eq!(-neg_two, two);
        assert_eq!(-FieldElement::ZERO, FieldElement::ZERO);
    }

    #[test]
    fn invert() {
        assert_eq!(FieldElement::ZERO.invert(), Err(Error::NoInverse));

        let one = FieldElement::ONE;
        assert_eq!(one.invert().unwrap(), one);

        let two = one + &one;
        let inv_two = two.invert().unwrap();
        assert_eq!(two * &inv_two, one);
    }

    #[test]
    fn invert_batch() {
        let mut elements = [
            FieldElement::from_u64(3),
            FieldElement::ZERO,
            FieldElement::from_u64(11),
        ];
        FieldElement::invert_batch(&mut elements).unwrap();
        assert_eq!(elements[0] * FieldElement::from_u64(3), FieldElement::ONE);
        assert_eq!(elements[1], FieldElement::ZERO);
        assert_eq!(elements[2] * FieldElement::from_u64(11), FieldElement::ONE);
    }

    #[test]
    fn sqrt() {
        let one = FieldElement::ONE;
        let two = one + &one;
        let four = two.square();
        let root = four.sqrt().unwrap();
        assert!(root == two || root == -two);

        // 7 is not a quadratic residue mod p, so no point has x = 0
        assert!(bool::from(FieldElement::from_u64(7).sqrt().is_none()));
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
            let mut res = bytes_to_biguint(&bytes);
            let m = modulus_as_biguint();
            // Modulus is 256 bit long, same as the maximum `res`,
            // so this is guaranteed to land us in the correct range.
            if res >= m {
                res -= m;
            }
            FieldElement::from(&res)
        }
    }

    proptest! {

        #[test]
        fn fuzzy_add(
            a in field_element(),
            b in field_element()
        ) {
            let a_bi = a.to_biguint().unwrap();
            let b_bi = b.to_biguint().unwrap();
            let res_bi = (&a_bi + &b_bi) % modulus_as_biguint();
            let res_ref = FieldElement::from(&res_bi);
            let res_test = &a + &b;
            assert_eq!(res_test, res_ref);
        }

        #[test]
        fn fuzzy_sub(
            a in field_element(),
            b in field_element()
        ) {
            let m = modulus_as_biguint();
            let a_bi = a.to_biguint().unwrap();
            let b_bi = b.to_biguint().unwrap();
            let res_bi = (&m + &a_bi - &b_bi) % &m;
            let res_ref = FieldElement::from(&res_bi);
            let res_test = &a - &b;
            assert_eq!(res_test, res_ref);
        }

        #[test]
        fn fuzzy_mul(
            a in field_element(),
            b in field_element()
        ) {
            let a_bi = a.to_biguint().unwrap();
            let b_bi = b.to_biguint().unwrap();
            let res_bi = (&a_bi * &b_bi) % modulus_as_biguint();
            let res_ref = FieldElement::from(&res_bi);
            let res_test = &a * &b;
            assert_eq!(res_test, res_ref);
        }

        #[test]
        fn fuzzy_square(
            a in field_element()
        ) {
            let a_bi = a.to_biguint().unwrap();
            let res_bi = (&a_bi * &a_bi) % modulus_as_biguint();
            let res_ref = FieldElement::from(&res_bi);
            let res_test = a.square();
            assert_eq!(res_test, res_ref);
        }

        #[test]
        fn fuzzy_negate(
            a in field_element()
        ) {
            let m = modulus_as_biguint();
            let a_bi = a.to_biguint().unwrap();
            let res_bi = (&m - &a_bi) % &m;
            let res_ref = FieldElement::from(&res_bi);
            let res_test = -a;
            assert_eq!(res_test, res_ref);
        }

        #[test]
        fn fuzzy_sqrt(
            a in field_element()
        ) {
            let m = modulus_as_biguint();
            let a_bi = a.to_biguint().unwrap();
            let sqr_bi = (&a_bi * &a_bi) % &m;
            let sqr = FieldElement::from(&sqr_bi);

            let res_ref1 = a;
            let possible_sqrt = (&m - &a_bi) % &m;
            let res_ref2 = FieldElement::from(&possible_sqrt);
            let res_test = sqr.sqrt().unwrap();
            assert!(res_test == res_ref1 || res_test == res_ref2);
        }

        #[test]
        fn fuzzy_invert(
            a in field_element()
        ) {
            let a = if bool::from(a.is_zero()) { FieldElement::ONE } else { a };
            let a_bi = a.to_biguint().unwrap();
            let inv = a.invert().unwrap();
            let inv_bi = inv.to_biguint().unwrap();
            let m = modulus_as_biguint();
            assert_eq!((&inv_bi * &a_bi) % &m, 1.to_biguint().unwrap());
        }
    }
}
