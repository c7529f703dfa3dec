//! Decoding errors.

/// Reasons an encoding is rejected by [`G2Point::decode`](crate::G2Point::decode).
///
/// Every variant is terminal for the input that produced it. Group operations
/// on decoded points never fail and have no error type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum G2Error {
    /// Input length is neither the compressed nor the uncompressed length.
    #[error("G2 encoding must be 64 or 128 bytes, was {0}")]
    MalformedLength(usize),
    /// Flag bits do not name a known compressed encoding.
    #[error("invalid G2 encoding flag {0:#04x}")]
    InvalidFlag(u8),
    /// Compressed infinity flag set, but the remaining bits are not all zero.
    #[error("compressed point at infinity has non-zero bits")]
    InvalidInfinityEncoding,
    /// A coordinate is not strictly less than the field modulus.
    #[error("non-canonical fq value")]
    NonCanonicalFieldElement,
    /// `x³ + b'` has no square root, so no `y` exists for the compressed `x`.
    #[error("no square root for compressed x coordinate")]
    NoSquareRootForCompressedX,
    /// `(x, y)` does not satisfy the twist equation.
    #[error("element not on G2 curve")]
    PointNotOnCurve,
    /// `(x, y)` is on the twist but outside the prime-order subgroup.
    #[error("element not in G2")]
    PointNotInSubgroup,
}
