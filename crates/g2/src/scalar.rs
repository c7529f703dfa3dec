//! Scalars for G2 multiplication.
use crate::constants::{SCALAR_LEN, SUBGROUP_ORDER_REPR};
use num_bigint::BigUint;

/// Reads a scalar from its 32 byte big-endian representation.
///
/// Note: The scalar does not need to be canonical, values above the subgroup
/// order are reduced by the multiplication itself.
#[inline]
pub fn read_scalar(input: &[u8; SCALAR_LEN]) -> BigUint {
    BigUint::from_bytes_be(input)
}

/// Returns the prime order `r` of the G2 subgroup.
#[inline]
pub fn subgroup_order() -> BigUint {
    BigUint::from_bytes_be(&SUBGROUP_ORDER_REPR)
}
