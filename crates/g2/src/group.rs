//! The capability set pairing and precompile layers program against.
use core::fmt::Debug;
use num_bigint::BigUint;

/// A prime-order group element with a canonical byte encoding.
///
/// Decoding is the only way to turn bytes into an element, and it validates.
/// The group operations are total on validated elements.
pub trait GroupElement: Sized + Copy + Eq + Debug + Send + Sync {
    /// Decoding error.
    type Error: core::error::Error;

    /// Canonical encoding, produced by [`GroupElement::encode`].
    type Encoded: AsRef<[u8]>;

    /// Returns the identity element.
    fn identity() -> Self;

    /// Decodes and validates an element.
    fn decode(input: &[u8]) -> Result<Self, Self::Error>;

    /// Encodes the element canonically. `decode(encode(p)) == p`.
    fn encode(&self) -> Self::Encoded;

    /// Group addition.
    fn add(&self, other: &Self) -> Self;

    /// Multiplication by a non-negative scalar of any size.
    fn scalar_mul(&self, scalar: &BigUint) -> Self;

    /// Returns `true` if this is the identity element.
    #[inline]
    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
