//! Arithmetic modulo a 256-bit odd modulus larger than `2^255`.
//!
//! Both secp256k1 moduli (the field prime `P` and the group order `n`) are
//! just below `2^256`, which makes reduction a matter of folding the high
//! half of a product back in via `2^256 ≡ 2^256 - m (mod m)` and finishing
//! with a single conditional subtraction.

use crate::{Error, Result};
use alloc::vec::Vec;
use bigint::{Limb, U256, Zero};
use subtle::{Choice, ConditionallySelectable};

/// Number of folds needed to bring a 512-bit product under `2^256` when the
/// modulus complement is at most 129 bits wide.
const WIDE_REDUCTION_FOLDS: usize = 6;

/// A modulus `m` with `2^255 < m < 2^256` and `m` odd.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Modulus {
    value: U256,
    /// `2^256 - m`
    complement: U256,
    /// `(m + 1) / 2`, the inverse of two
    half: U256,
}

impl Modulus {
    pub(crate) const fn new(value: U256) -> Self {
        Self {
            value,
            complement: U256::ZERO.wrapping_sub(&value),
            half: value.shr_vartime(1).wrapping_add(&U256::ONE),
        }
    }

    /// Reduces `x < 2m` into `[0, m)`.
    #[inline]
    pub(crate) fn reduce(&self, x: &U256) -> U256 {
        let (diff, borrow) = x.sbb(&self.value, Limb::ZERO);
        U256::conditional_select(&diff, x, Choice::from((borrow.0 & 1) as u8))
    }

    /// Reduces the 512-bit value `hi·2^256 + lo` into `[0, m)`.
    pub(crate) fn reduce_wide(&self, lo: &U256, hi: &U256) -> U256 {
        let (mut lo, mut hi) = (*lo, *hi);

        for _ in 0..WIDE_REDUCTION_FOLDS {
            let (folded_lo, folded_hi) = hi.mul_wide(&self.complement);
            let (sum, carry) = folded_lo.adc(&lo, Limb::ZERO);
            lo = sum;
            hi = folded_hi.wrapping_add(&U256::from_word(carry.0));
        }

        debug_assert!(bool::from(hi.is_zero()));
        self.reduce(&lo)
    }

    #[inline]
    pub(crate) fn add(&self, a: &U256, b: &U256) -> U256 {
        a.add_mod(b, &self.value)
    }

    #[inline]
    pub(crate) fn sub(&self, a: &U256, b: &U256) -> U256 {
        a.sub_mod(b, &self.value)
    }

    #[inline]
    pub(crate) fn neg(&self, a: &U256) -> U256 {
        a.neg_mod(&self.value)
    }

    #[inline]
    pub(crate) fn mul(&self, a: &U256, b: &U256) -> U256 {
        let (lo, hi) = a.mul_wide(b);
        self.reduce_wide(&lo, &hi)
    }

    #[inline]
    pub(crate) fn square(&self, a: &U256) -> U256 {
        let (lo, hi) = a.square_wide();
        self.reduce_wide(&lo, &hi)
    }

    /// Computes `x^e mod m` by square-and-multiply.
    ///
    /// Variable-time in the exponent, which is public in every caller.
    pub(crate) fn pow(&self, x: &U256, exp: &U256) -> U256 {
        let mut acc = U256::ONE;

        for i in (0..exp.bits_vartime()).rev() {
            acc = self.square(&acc);
            if exp.bit_vartime(i) {
                acc = self.mul(&acc, x);
            }
        }

        self.reduce(&acc)
    }

    /// Halves `x` modulo `m`.
    #[inline]
    fn halve(&self, x: &U256) -> U256 {
        let shifted = x.shr_vartime(1);
        let odd = Choice::from((x.as_words()[0] & 1) as u8);
        U256::conditional_select(&shifted, &shifted.wrapping_add(&self.half), odd)
    }

    /// Computes `a⁻¹ mod m` with the binary extended Euclidean algorithm.
    ///
    /// Fails with [`Error::NoInverse`] when `gcd(a, m) ≠ 1`, which includes
    /// `a ≡ 0`. Not constant time.
    pub(crate) fn invert(&self, a: &U256) -> Result<U256> {
        let mut u = self.reduce(a);
        let mut v = self.value;
        let mut x1 = U256::ONE;
        let mut x2 = U256::ZERO;

        if bool::from(u.is_zero()) {
            return Err(Error::NoInverse);
        }

        while u != U256::ONE && v != U256::ONE {
            while !is_odd(&u) {
                u = u.shr_vartime(1);
                x1 = self.halve(&x1);
            }

            while !is_odd(&v) {
                v = v.shr_vartime(1);
                x2 = self.halve(&x2);
            }

            if u >= v {
                u = u.wrapping_sub(&v);
                x1 = self.sub(&x1, &x2);
            } else {
                v = v.wrapping_sub(&u);
                x2 = self.sub(&x2, &x1);
            }

            // A zero remainder means the common divisor is not one.
            if bool::from(u.is_zero()) || bool::from(v.is_zero()) {
                return Err(Error::NoInverse);
            }
        }

        Ok(if u == U256::ONE { x1 } else { x2 })
    }

    /// Inverts every nonzero element of `values` in place using a single
    /// modular inversion (Montgomery's trick). Zero entries are left as-is.
    pub(crate) fn invert_batch(&self, values: &mut [U256]) -> Result<()> {
        let mut prefix = Vec::with_capacity(values.len());
        let mut acc = U256::ONE;

        for value in values.iter() {
            prefix.push(acc);
            if !bool::from(value.is_zero()) {
                acc = self.mul(&acc, value);
            }
        }

        let mut inv = self.invert(&acc)?;

        for (value, before) in values.iter_mut().zip(prefix).rev() {
            if bool::from(value.is_zero()) {
                continue;
            }

            let next = self.mul(&inv, value);
            *value = self.mul(&inv, &before);
            inv = next;
        }

        Ok(())
    }
}

#[inline]
fn is_odd(x: &U256) -> bool {
    x.as_words()[0] & 1 == 1
}
