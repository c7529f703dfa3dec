//! Jacobian coordinates for intermediate results.
//!
//! `(X, Y, Z)` represents the affine point `(X / Z², Y / Z³)`; `Z = 0` is the
//! point at infinity. Values of this type never leave the crate, they are
//! normalised back into a [`G2Point`] first.
use crate::{
    constants::{PSI_COEFF_X, PSI_COEFF_Y},
    field::conjugate,
    G2Point,
};
use ark_bn254::Fq2;
use ark_ff::{Field, One, Zero};
use num_bigint::BigUint;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Jacobian {
    x: Fq2,
    y: Fq2,
    z: Fq2,
}

impl Jacobian {
    /// The point at infinity.
    #[inline]
    pub(crate) fn identity() -> Self {
        Self {
            x: Fq2::one(),
            y: Fq2::one(),
            z: Fq2::zero(),
        }
    }

    #[inline]
    pub(crate) fn from_affine(x: Fq2, y: Fq2) -> Self {
        Self { x, y, z: Fq2::one() }
    }

    #[inline]
    pub(crate) fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Point doubling for `a = 0` curves.
    ///
    /// <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#doubling-dbl-2009-l>
    pub(crate) fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();

        let mut d = (self.x + b).square() - a - c;
        d = d + d;

        let e = a + a + a;
        let f = e.square();

        let x3 = f - d - d;

        let mut c8 = c + c;
        c8 = c8 + c8;
        c8 = c8 + c8;
        let y3 = e * (d - x3) - c8;

        let mut z3 = self.y * self.z;
        z3 = z3 + z3;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point addition with the doubling and inverse cases handled.
    ///
    /// <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html#addition-add-2007-bl>
    pub(crate) fn add(&self, rhs: &Self) -> Self {
        if self.is_identity() {
            return *rhs;
        }
        if rhs.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();

        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;

        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        let h = u2 - u1;
        let mut r = s2 - s1;

        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return Self::identity();
        }

        let i = (h + h).square();
        let j = h * i;
        r = r + r;
        let v = u1 * i;

        let x3 = r.square() - j - v - v;

        let s1j = s1 * j;
        let y3 = r * (v - x3) - s1j - s1j;

        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// The untwist-Frobenius-twist endomorphism `ψ(x, y) = (x̄·γ₁₂, ȳ·γ₁₃)`.
    ///
    /// Conjugation commutes with the projective scaling, so `Z` is only
    /// conjugated.
    pub(crate) fn psi(&self) -> Self {
        Self {
            x: conjugate(&self.x) * PSI_COEFF_X,
            y: conjugate(&self.y) * PSI_COEFF_Y,
            z: conjugate(&self.z),
        }
    }

    /// Double-and-add over the lowest `bits` bits of `scalar`, most significant first.
    ///
    /// Every iteration computes both the doubling and the addition, the scalar
    /// bit only selects which one is kept.
    pub(crate) fn mul_bits(&self, scalar: &BigUint, bits: u64) -> Self {
        let mut acc = Self::identity();
        for i in (0..bits).rev() {
            acc = acc.double();
            let sum = acc.add(self);
            if scalar.bit(i) {
                acc = sum;
            }
        }
        acc
    }

    /// Multiplication by a small public constant.
    pub(crate) fn mul_u64(&self, scalar: u64) -> Self {
        let mut acc = Self::identity();
        for i in (0..u64::BITS - scalar.leading_zeros()).rev() {
            acc = acc.double();
            if (scalar >> i) & 1 == 1 {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Normalises into affine coordinates, the only inversion of a computation.
    pub(crate) fn into_affine(self) -> G2Point {
        let Some(z_inv) = self.z.inverse() else {
            return G2Point::IDENTITY;
        };
        let z_inv_sq = z_inv.square();

        let x = self.x * z_inv_sq;
        let y = self.y * z_inv_sq * z_inv;

        G2Point::from_affine_unchecked(x, y)
    }
}

impl From<G2Point> for Jacobian {
    #[inline]
    fn from(point: G2Point) -> Self {
        match point.coordinates() {
            Some((x, y)) => Self::from_affine(x, y),
            None => Self::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> Jacobian {
        G2Point::generator().into()
    }

    #[test]
    fn test_identity_normalises_to_identity() {
        assert_eq!(Jacobian::identity().into_affine(), G2Point::IDENTITY);
        assert_eq!(Jacobian::identity().double().into_affine(), G2Point::IDENTITY);
    }

    #[test]
    fn test_add_handles_doubling_and_inverse() {
        let g = generator();
        assert_eq!(g.add(&g).into_affine(), g.double().into_affine());

        let neg_g: Jacobian = (-G2Point::generator()).into();
        assert!(g.add(&neg_g).is_identity());
    }

    #[test]
    fn test_add_is_independent_of_scaling() {
        let g = generator();
        // 2G in non-trivial Z against G with Z = 1
        let two_g = g.double();
        let three_g_mixed = two_g.add(&g);
        let three_g_projective = g.add(&two_g);
        assert_eq!(three_g_mixed.into_affine(), three_g_projective.into_affine());
        assert_eq!(three_g_mixed.into_affine(), g.mul_u64(3).into_affine());
    }

    #[test]
    fn test_mul_bits_matches_mul_u64() {
        let g = generator();
        for k in [0u64, 1, 2, 7, 255, 1 << 40, u64::MAX] {
            let by_bits = g.mul_bits(&BigUint::from(k), 64).into_affine();
            assert_eq!(by_bits, g.mul_u64(k).into_affine(), "k = {k}");
        }
    }

    #[test]
    fn test_psi_of_identity_is_identity() {
        assert!(Jacobian::identity().psi().is_identity());
    }

    #[test]
    fn test_psi_is_additive() {
        let g = generator();
        let two_g = g.double();
        assert_eq!(
            g.psi().add(&two_g.psi()).into_affine(),
            g.add(&two_g).psi().into_affine()
        );
    }
}
