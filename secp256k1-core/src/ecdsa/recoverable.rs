//! Public key recovery.
//!
//! Every signature produced by this crate carries a [`RecoveryId`]. Together
//! with the message hash, it identifies which of the (at most four) points
//! `R` with `R.x ≡ r (mod n)` was used during signing, so that the signer's
//! public key can be computed from the signature alone:
//!
//! ```text
//! Q = r⁻¹ (s·R − z·G)
//! ```

use super::{Signature, VerifyingKey, hash_to_scalar};
use crate::{AffinePoint, Error, FieldElement, ProjectivePoint, PublicKey, Result, Secp256k1};
use subtle::Choice;

/// Identifier used to recover a public key from a [`Signature`].
///
/// Bit 0 is the parity of `R.y`; bit 1 is set when `R.x` was reduced modulo
/// `n` to obtain `r`. Values 2 and 3 occur with negligible probability but
/// are fully supported.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Maximum supported value.
    pub const MAX: u8 = 3;

    /// Creates a recovery id from its two flags.
    pub const fn new(is_y_odd: bool, is_x_reduced: bool) -> Self {
        Self((is_x_reduced as u8) << 1 | (is_y_odd as u8))
    }

    /// Creates a recovery id from its byte value, which must be at most
    /// [`RecoveryId::MAX`].
    pub const fn from_byte(byte: u8) -> Result<Self> {
        if byte <= Self::MAX {
            Ok(Self(byte))
        } else {
            Err(Error::InvalidRecoveryId)
        }
    }

    /// Is `R.y` odd?
    pub const fn is_y_odd(self) -> bool {
        self.0 & 1 != 0
    }

    /// Was `R.x` reduced modulo `n`?
    pub const fn is_x_reduced(self) -> bool {
        self.0 & 2 != 0
    }

    /// Byte value.
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// Finds the recovery id under which `signature` over `msg_hash` recovers
    /// to `verifying_key`, failing with [`Error::InvalidRecoveryId`] if none
    /// does.
    pub fn trial_recovery_from_prehash(
        verifying_key: &VerifyingKey,
        msg_hash: &[u8],
        signature: &Signature,
    ) -> Result<Self> {
        for byte in 0..=Self::MAX {
            let recovery_id = Self(byte);

            if let Ok(recovered) = recover_prehash(msg_hash, signature, recovery_id) {
                if &recovered == verifying_key.as_public_key() {
                    return Ok(recovery_id);
                }
            }
        }

        Err(Error::InvalidRecoveryId)
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte)
    }
}

impl From<RecoveryId> for u8 {
    fn from(recovery_id: RecoveryId) -> u8 {
        recovery_id.0
    }
}

/// Recovers `Q` from a signature over `msg_hash`.
///
/// Fails with [`Error::InvalidPoint`] when no curve point matches `r` and the
/// recovery id, or when the recovered point is the identity.
#[allow(non_snake_case)]
pub(super) fn recover_prehash(
    msg_hash: &[u8],
    signature: &Signature,
    recovery_id: RecoveryId,
) -> Result<PublicKey> {
    let (r, s) = (signature.r(), signature.s());

    // Candidate x-coordinate of 𝑹: either r or r + n
    let mut x = r.to_uint();
    if recovery_id.is_x_reduced() {
        let (sum, carry) = x.adc(&Secp256k1::ORDER, bigint::Limb::ZERO);
        if carry.0 != 0 {
            return Err(Error::InvalidPoint);
        }
        x = sum;
    }

    let x = Option::<FieldElement>::from(FieldElement::from_uint(x)).ok_or(Error::InvalidPoint)?;
    let R = Option::<AffinePoint>::from(AffinePoint::decompress(
        &x.to_bytes(),
        Choice::from(recovery_id.is_y_odd() as u8),
    ))
    .ok_or(Error::InvalidPoint)?;

    let z = hash_to_scalar(msg_hash);
    let r_inv = r.invert()?;
    let u1 = -(r_inv * z);
    let u2 = r_inv * s;

    let Q = ProjectivePoint::from(R).mul_add_generator_vartime(&u1, &u2);
    PublicKey::from_projective(&Q)
}
