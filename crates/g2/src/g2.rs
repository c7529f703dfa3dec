//! The BN254 G2 point type, its codecs and group operations.
use crate::{
    constants::{
        BN_PARAM, FLAG_COMPRESSED_INFINITY, FLAG_COMPRESSED_LARGEST, FLAG_COMPRESSED_SMALLEST,
        FLAG_MASK, FLAG_UNCOMPRESSED, FQ2_LEN, G2_COMPRESSED_LEN, G2_UNCOMPRESSED_LEN,
        GENERATOR_X, GENERATOR_Y, SCALAR_BITS, TWIST_B,
    },
    field::{is_lexicographically_largest, read_fq2, write_fq2},
    jacobian::Jacobian,
    scalar::subgroup_order,
    G2Error, GroupElement,
};
use ark_bn254::Fq2;
use ark_ff::Field;
use core::ops::{Add, AddAssign, Neg, Sub};
use num_bigint::BigUint;
use tracing::{debug, trace};

/// A validated element of the BN254 G2 subgroup in affine coordinates.
///
/// G2 is the order `r` subgroup of the twist `E': y² = x³ + 3 / (9 + u)` over
/// `Fq2 = Fq[u] / (u² + 1)`.
///
/// Values are only produced by validating decoders, by group operations and
/// by the [`G2Point::IDENTITY`] and [`G2Point::generator`] constants. They are
/// always normalised, so equality is structural.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G2Point(Repr);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
enum Repr {
    /// The point at infinity. It has no coordinates.
    #[default]
    Identity,
    Affine {
        x: Fq2,
        y: Fq2,
    },
}

impl G2Point {
    /// The identity element (point at infinity).
    pub const IDENTITY: Self = Self(Repr::Identity);

    /// Returns the identity element.
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns the generator of G2 used by EIP-197.
    #[inline]
    pub const fn generator() -> Self {
        Self(Repr::Affine {
            x: GENERATOR_X,
            y: GENERATOR_Y,
        })
    }

    /// Wraps coordinates that are already known to be in G2.
    #[inline]
    pub(crate) fn from_affine_unchecked(x: Fq2, y: Fq2) -> Self {
        Self(Repr::Affine { x, y })
    }

    /// Returns `true` if this is the point at infinity.
    #[inline]
    pub const fn is_identity(&self) -> bool {
        matches!(self.0, Repr::Identity)
    }

    /// Returns the affine `(x, y)` coordinates, or `None` for the identity.
    #[inline]
    pub const fn coordinates(&self) -> Option<(Fq2, Fq2)> {
        match self.0 {
            Repr::Identity => None,
            Repr::Affine { x, y } => Some((x, y)),
        }
    }

    /// Decodes and validates a G2 point.
    ///
    /// The input length selects the encoding:
    ///
    /// - [`G2_UNCOMPRESSED_LEN`] bytes: `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0`, all zeroes
    ///   for the point at infinity.
    /// - [`G2_COMPRESSED_LEN`] bytes: `x.c1 ‖ x.c0` with the two most
    ///   significant bits of the first byte used as flags.
    ///
    /// Coordinates must be canonical, the point must be on the twist and in
    /// the prime-order subgroup.
    pub fn decode(input: &[u8]) -> Result<Self, G2Error> {
        let result = match input.len() {
            G2_UNCOMPRESSED_LEN => Self::decode_uncompressed(input),
            G2_COMPRESSED_LEN => Self::decode_compressed(input),
            len => Err(G2Error::MalformedLength(len)),
        };

        match &result {
            Ok(point) => trace!(
                len = input.len(),
                identity = point.is_identity(),
                "decoded G2 point"
            ),
            Err(err) => debug!(len = input.len(), %err, "rejected G2 encoding"),
        }

        result
    }

    /// Decodes one point from the front of `input`, returning it with the
    /// number of bytes consumed.
    ///
    /// Unlike [`G2Point::decode`], the flag bits of the first byte decide the
    /// encoding, so points can be read one after another from a longer buffer.
    pub fn read_from(input: &[u8]) -> Result<(Self, usize), G2Error> {
        let Some(first) = input.first() else {
            return Err(G2Error::MalformedLength(0));
        };

        let len = if first & FLAG_MASK == FLAG_UNCOMPRESSED {
            G2_UNCOMPRESSED_LEN
        } else {
            G2_COMPRESSED_LEN
        };
        if input.len() < len {
            debug!(len = input.len(), expected = len, "G2 encoding is truncated");
            return Err(G2Error::MalformedLength(input.len()));
        }

        Self::decode(&input[..len]).map(|point| (point, len))
    }

    /// Decodes [`G2_UNCOMPRESSED_LEN`] bytes.
    fn decode_uncompressed(input: &[u8]) -> Result<Self, G2Error> {
        // Flag bits need no separate check here: any of them set makes the
        // leading coordinate exceed the modulus.
        let x = read_fq2(&input[..FQ2_LEN])?;
        let y = read_fq2(&input[FQ2_LEN..])?;

        if input.iter().all(|&b| b == 0) {
            return Ok(Self::IDENTITY);
        }

        Self::from_affine_checked(x, y)
    }

    /// Decodes [`G2_COMPRESSED_LEN`] bytes, recovering `y` from the twist equation.
    fn decode_compressed(input: &[u8]) -> Result<Self, G2Error> {
        let flag = input[0] & FLAG_MASK;
        match flag {
            FLAG_COMPRESSED_INFINITY => {
                if input[0] & !FLAG_MASK != 0 || input[1..].iter().any(|&b| b != 0) {
                    return Err(G2Error::InvalidInfinityEncoding);
                }
                return Ok(Self::IDENTITY);
            }
            FLAG_COMPRESSED_SMALLEST | FLAG_COMPRESSED_LARGEST => {}
            _ => return Err(G2Error::InvalidFlag(flag)),
        }

        let mut x_bytes = [0u8; G2_COMPRESSED_LEN];
        x_bytes.copy_from_slice(input);
        x_bytes[0] &= !FLAG_MASK;
        let x = read_fq2(&x_bytes)?;

        let y_squared = x.square() * x + TWIST_B;
        let mut y = y_squared
            .sqrt()
            .ok_or(G2Error::NoSquareRootForCompressedX)?;
        if is_lexicographically_largest(&y) != (flag == FLAG_COMPRESSED_LARGEST) {
            y = -y;
        }

        Self::from_affine_checked(x, y)
    }

    /// Validates `(x, y)` as a G2 element.
    fn from_affine_checked(x: Fq2, y: Fq2) -> Result<Self, G2Error> {
        if !is_on_curve(&x, &y) {
            return Err(G2Error::PointNotOnCurve);
        }
        // NB: Subgroup checks
        //
        // The twist has a large cofactor, points on it are not in general in
        // G2. Accepting them exposes the pairing to small subgroup attacks.
        if !is_in_subgroup(&x, &y) {
            return Err(G2Error::PointNotInSubgroup);
        }
        Ok(Self::from_affine_unchecked(x, y))
    }

    /// Encodes the point uncompressed into [`G2_UNCOMPRESSED_LEN`] bytes.
    ///
    /// Note: If the point is the point at infinity, this function returns
    /// all zeroes.
    pub fn encode(&self) -> [u8; G2_UNCOMPRESSED_LEN] {
        let mut output = [0u8; G2_UNCOMPRESSED_LEN];
        let Repr::Affine { x, y } = self.0 else {
            return output;
        };

        write_fq2(&mut output[..FQ2_LEN], &x);
        write_fq2(&mut output[FQ2_LEN..], &y);

        output
    }

    /// Encodes the point compressed into [`G2_COMPRESSED_LEN`] bytes.
    ///
    /// The flag bits hold the sign of `y`, or mark the point at infinity.
    pub fn encode_compressed(&self) -> [u8; G2_COMPRESSED_LEN] {
        let mut output = [0u8; G2_COMPRESSED_LEN];
        let Repr::Affine { x, y } = self.0 else {
            output[0] = FLAG_COMPRESSED_INFINITY;
            return output;
        };

        write_fq2(&mut output, &x);
        output[0] |= if is_lexicographically_largest(&y) {
            FLAG_COMPRESSED_LARGEST
        } else {
            FLAG_COMPRESSED_SMALLEST
        };

        output
    }

    /// Returns `2·self`.
    #[inline]
    pub fn double(&self) -> Self {
        Jacobian::from(*self).double().into_affine()
    }

    /// Computes `scalar·self`.
    ///
    /// The scalar is reduced modulo the subgroup order first, then processed
    /// over a fixed number of bits.
    pub fn mul_bigint(&self, scalar: &BigUint) -> Self {
        if self.is_identity() {
            return Self::IDENTITY;
        }
        let scalar = scalar % subgroup_order();
        Jacobian::from(*self)
            .mul_bits(&scalar, SCALAR_BITS)
            .into_affine()
    }

    /// Computes `Σ kᵢ·Pᵢ` with a single normalisation at the end.
    pub fn msm<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a G2Point, &'a BigUint)>,
    {
        let order = subgroup_order();
        pairs
            .into_iter()
            .filter(|(point, _)| !point.is_identity())
            .fold(Jacobian::identity(), |acc, (point, scalar)| {
                let scalar = scalar % &order;
                acc.add(&Jacobian::from(*point).mul_bits(&scalar, SCALAR_BITS))
            })
            .into_affine()
    }
}

/// Checks `y² = x³ + b'`.
#[inline]
fn is_on_curve(x: &Fq2, y: &Fq2) -> bool {
    y.square() == x.square() * x + TWIST_B
}

/// Checks membership in the order `r` subgroup of a point on the twist.
///
/// Q is in G2 iff `(t+1)·Q + ψ(t·Q) + ψ²(t·Q) == ψ³(2t·Q)`, where `t` is the
/// BN parameter and ψ the untwist-Frobenius-twist endomorphism.
///
/// See <https://eprint.iacr.org/2022/348.pdf>.
fn is_in_subgroup(x: &Fq2, y: &Fq2) -> bool {
    let q = Jacobian::from_affine(*x, *y);
    let tq = q.mul_u64(BN_PARAM);
    let psi_tq = tq.psi();

    let lhs = q.add(&tq).add(&psi_tq).add(&psi_tq.psi());
    let rhs = tq.double().psi().psi().psi();

    lhs.into_affine() == rhs.into_affine()
}

impl Add for G2Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Jacobian::from(self)
            .add(&Jacobian::from(rhs))
            .into_affine()
    }
}

impl AddAssign for G2Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for G2Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        match self.0 {
            Repr::Identity => self,
            Repr::Affine { x, y } => Self::from_affine_unchecked(x, -y),
        }
    }
}

impl Sub for G2Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl TryFrom<&[u8]> for G2Point {
    type Error = G2Error;

    #[inline]
    fn try_from(input: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(input)
    }
}

impl From<G2Point> for [u8; G2_UNCOMPRESSED_LEN] {
    #[inline]
    fn from(point: G2Point) -> Self {
        point.encode()
    }
}

impl GroupElement for G2Point {
    type Error = G2Error;
    type Encoded = [u8; G2_UNCOMPRESSED_LEN];

    #[inline]
    fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    fn decode(input: &[u8]) -> Result<Self, G2Error> {
        G2Point::decode(input)
    }

    #[inline]
    fn encode(&self) -> Self::Encoded {
        G2Point::encode(self)
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    #[inline]
    fn scalar_mul(&self, scalar: &BigUint) -> Self {
        self.mul_bigint(scalar)
    }

    #[inline]
    fn is_identity(&self) -> bool {
        G2Point::is_identity(self)
    }
}
