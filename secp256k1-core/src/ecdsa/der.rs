//! Strict ASN.1 DER encoding of ECDSA signatures:
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```

use super::Signature;
use crate::{Error, FieldBytes, Result, Scalar};
use alloc::vec::Vec;

/// Largest possible DER-encoded signature.
pub const MAX_SIZE: usize = 72;

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// Encodes `signature` with minimal-length integers.
pub fn encode(signature: &Signature) -> Vec<u8> {
    let r = signature.r().to_bytes();
    let s = signature.s().to_bytes();
    let r = minimal_integer(&r);
    let s = minimal_integer(&s);

    let body_len = 4 + r.len() + s.len() + usize::from(needs_pad(r)) + usize::from(needs_pad(s));
    let mut out = Vec::with_capacity(2 + body_len);
    out.push(SEQUENCE_TAG);
    out.push(body_len as u8);
    push_integer(&mut out, r);
    push_integer(&mut out, s);
    out
}

/// Decodes a DER signature, rejecting any non-canonical encoding.
///
/// Structural problems fail with [`Error::InvalidSignatureEncoding`]; a
/// well-formed integer that is zero or `>= n` fails with
/// [`Error::InvalidScalar`].
pub fn decode(der: &[u8]) -> Result<Signature> {
    if der.len() < 8 || der.len() > MAX_SIZE {
        return Err(Error::InvalidSignatureEncoding);
    }

    // Short-form length only; the largest signature body is 70 bytes.
    if der[0] != SEQUENCE_TAG || usize::from(der[1]) != der.len() - 2 {
        return Err(Error::InvalidSignatureEncoding);
    }

    let (r, rest) = parse_integer(&der[2..])?;
    let (s, rest) = parse_integer(rest)?;

    if !rest.is_empty() {
        return Err(Error::InvalidSignatureEncoding);
    }

    Signature::from_scalars(r, s)
}

/// Strips leading zero bytes, keeping at least one.
fn minimal_integer(bytes: &FieldBytes) -> &[u8] {
    let leading = bytes
        .iter()
        .take(bytes.len() - 1)
        .take_while(|&&b| b == 0)
        .count();
    &bytes[leading..]
}

fn needs_pad(bytes: &[u8]) -> bool {
    bytes[0] & 0x80 != 0
}

fn push_integer(out: &mut Vec<u8>, bytes: &[u8]) {
    let pad = needs_pad(bytes);
    out.push(INTEGER_TAG);
    out.push((bytes.len() + usize::from(pad)) as u8);
    if pad {
        out.push(0);
    }
    out.extend_from_slice(bytes);
}

/// Parses one positive, minimally encoded INTEGER of at most 256 bits.
fn parse_integer(input: &[u8]) -> Result<(Scalar, &[u8])> {
    if input.len() < 2 || input[0] != INTEGER_TAG {
        return Err(Error::InvalidSignatureEncoding);
    }

    let len = usize::from(input[1]);
    if len == 0 || len > 33 || input.len() < 2 + len {
        return Err(Error::InvalidSignatureEncoding);
    }

    let (value, rest) = input[2..].split_at(len);

    // negative
    if value[0] & 0x80 != 0 {
        return Err(Error::InvalidSignatureEncoding);
    }

    // non-minimal padding
    if len > 1 && value[0] == 0 && value[1] & 0x80 == 0 {
        return Err(Error::InvalidSignatureEncoding);
    }

    // wider than 256 bits
    if len == 33 && value[0] != 0 {
        return Err(Error::InvalidSignatureEncoding);
    }

    let value = if len == 33 { &value[1..] } else { value };
    let mut bytes = FieldBytes::default();
    bytes[32 - value.len()..].copy_from_slice(value);

    let scalar = Option::<Scalar>::from(Scalar::from_bytes(&bytes)).ok_or(Error::InvalidScalar)?;
    Ok((scalar, rest))
}
