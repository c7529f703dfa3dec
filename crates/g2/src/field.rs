//! Big-endian codecs and helpers for `Fq` and `Fq2` elements.
use crate::{
    constants::{FQ2_LEN, FQ_LEN, MODULUS_REPR},
    G2Error,
};
use ark_bn254::{Fq, Fq2};
use ark_ff::{BigInteger, PrimeField, Zero};
use core::cmp::Ordering;

/// Checks if the input is a valid big-endian representation of a field element.
fn is_valid_be(input: &[u8]) -> bool {
    for (i, modul) in input.iter().zip(MODULUS_REPR.iter()) {
        match i.cmp(modul) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => continue,
        }
    }
    // false if matching the modulus
    false
}

/// Reads a single `Fq` field element from a 32 byte big-endian slice.
///
/// Values greater than or equal to the modulus are rejected, never reduced.
#[inline]
pub(crate) fn read_fq(input_be: &[u8]) -> Result<Fq, G2Error> {
    debug_assert_eq!(input_be.len(), FQ_LEN, "input must be {FQ_LEN} bytes");

    if !is_valid_be(input_be) {
        return Err(G2Error::NonCanonicalFieldElement);
    }
    Ok(Fq::from_be_bytes_mod_order(input_be))
}

/// Reads a `Fq2` element from a 64 byte slice.
///
/// The imaginary component is encoded first, ie for `c0 + c1·u` the input is
/// `c1 ‖ c0`.
#[inline]
pub(crate) fn read_fq2(input: &[u8]) -> Result<Fq2, G2Error> {
    debug_assert_eq!(input.len(), FQ2_LEN, "input must be {FQ2_LEN} bytes");

    let c1 = read_fq(&input[..FQ_LEN])?;
    let c0 = read_fq(&input[FQ_LEN..])?;

    Ok(Fq2::new(c0, c1))
}

/// Writes `fq` into `out` as a 32 byte big-endian integer.
#[inline]
pub(crate) fn write_fq(out: &mut [u8], fq: &Fq) {
    out.copy_from_slice(&fq.into_bigint().to_bytes_be());
}

/// Writes `fq2` into `out` in the same order [`read_fq2`] reads it.
#[inline]
pub(crate) fn write_fq2(out: &mut [u8], fq2: &Fq2) {
    let (c1, c0) = out.split_at_mut(FQ_LEN);
    write_fq(c1, &fq2.c1);
    write_fq(c0, &fq2.c0);
}

/// Returns `true` if `fq > (p - 1) / 2`.
#[inline]
fn fq_is_largest(fq: &Fq) -> bool {
    fq.into_bigint() > Fq::MODULUS_MINUS_ONE_DIV_TWO
}

/// Lexicographic order used to pick the sign of a compressed `y`.
///
/// The imaginary component decides unless it is zero.
#[inline]
pub(crate) fn is_lexicographically_largest(fq2: &Fq2) -> bool {
    if fq2.c1.is_zero() {
        fq_is_largest(&fq2.c0)
    } else {
        fq_is_largest(&fq2.c1)
    }
}

/// Complex conjugate `c0 - c1·u`, the `p`-power Frobenius on `Fq2`.
#[inline]
pub(crate) fn conjugate(fq2: &Fq2) -> Fq2 {
    Fq2::new(fq2.c0, -fq2.c1)
}
