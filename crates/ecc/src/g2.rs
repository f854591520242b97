use halo2curves_axiom::bn256::{Fq, G2Affine};
use zircon_algebra::Fp2Gadget;

use crate::{AffinePoint, G2Params};

/// In-circuit BN254 G2 group law over the quadratic extension field.
///
/// Holds the field gadget it builds on together with the fixed curve
/// parameter table; every operation forwards to the gadget explicitly and
/// returns a fresh point. Arguments are never written through.
///
/// None of the operations handle the point at infinity, and none validate
/// curve or subgroup membership; callers own those invariants. Where an
/// operation divides by a coordinate difference, equal coordinates make the
/// division unconstrained rather than failing (see
/// [`Fp2Gadget::div_unsafe`]).
pub struct G2<F: Fp2Gadget> {
    fp2: F,
    w: Fq,
    u: F::Fp2,
    v: F::Fp2,
}

impl<F: Fp2Gadget> G2<F> {
    /// Builds the gadget, allocating the table's Fp2 entries as circuit
    /// constants.
    pub fn new(fp2: F, params: G2Params) -> Self {
        params.check_valid();
        let u = fp2.constant(params.u);
        let v = fp2.constant(params.v);
        Self {
            fp2,
            w: params.w,
            u,
            v,
        }
    }

    /// Loads a concrete point as a witness. Used when assigning circuit
    /// inputs, not by the group law itself.
    pub fn new_point(&self, value: G2Affine) -> AffinePoint<F::Fp2> {
        AffinePoint::new(self.fp2.witness(value.x), self.fp2.witness(value.y))
    }

    /// `p + q`. Requires `p.x != q.x`; equal x-coordinates leave the slope
    /// division unconstrained.
    pub fn add(&self, p: &AffinePoint<F::Fp2>, q: &AffinePoint<F::Fp2>) -> AffinePoint<F::Fp2> {
        // λ = (q.y - p.y) / (q.x - p.x)
        let qypy = self.fp2.sub(&q.y, &p.y);
        let qxpx = self.fp2.sub(&q.x, &p.x);
        let lambda = self.fp2.div_unsafe(&qypy, &qxpx);

        // xr = λ² - p.x - q.x
        let lambda_sq = self.fp2.square(&lambda);
        let xsum = self.fp2.add(&p.x, &q.x);
        let xr = self.fp2.sub(&lambda_sq, &xsum);

        // yr = λ(p.x - xr) - p.y
        let pxrx = self.fp2.sub(&p.x, &xr);
        let yr = self.fp2.mul(&lambda, &pxrx);
        let yr = self.fp2.sub(&yr, &p.y);

        AffinePoint::new(xr, yr)
    }

    pub fn neg(&self, p: &AffinePoint<F::Fp2>) -> AffinePoint<F::Fp2> {
        AffinePoint::new(p.x.clone(), self.fp2.neg(&p.y))
    }

    pub fn sub(&self, p: &AffinePoint<F::Fp2>, q: &AffinePoint<F::Fp2>) -> AffinePoint<F::Fp2> {
        self.add(p, &self.neg(q))
    }

    /// `2p`.
    pub fn double(&self, p: &AffinePoint<F::Fp2>) -> AffinePoint<F::Fp2> {
        // λ = 3 p.x² / 2 p.y
        let xx = self.fp2.square(&p.x);
        let xx3 = self.fp2.int_mul(&xx, 3);
        let y2 = self.fp2.double(&p.y);
        let lambda = self.fp2.div_unsafe(&xx3, &y2);

        // xr = λ² - 2 p.x
        let lambda_sq = self.fp2.square(&lambda);
        let x2 = self.fp2.double(&p.x);
        let xr = self.fp2.sub(&lambda_sq, &x2);

        // yr = λ(p.x - xr) - p.y
        let pxrx = self.fp2.sub(&p.x, &xr);
        let yr = self.fp2.mul(&lambda, &pxrx);
        let yr = self.fp2.sub(&yr, &p.y);

        AffinePoint::new(xr, yr)
    }

    /// `n` sequential doublings; each iteration stands alone, nothing is
    /// shared between them.
    pub fn double_n(&self, p: &AffinePoint<F::Fp2>, n: usize) -> AffinePoint<F::Fp2> {
        let mut pn = p.clone();
        for _ in 0..n {
            pn = self.double(&pn);
        }
        pn
    }

    /// `2p + q`, skipping the intermediate sum's y-coordinate. Saves field
    /// multiplications over a separate `add` and `double` at the price of two
    /// divisions and one more precondition: besides `p.x != q.x`, the
    /// x-coordinate of `p + q` must differ from `p.x`.
    pub fn double_and_add(
        &self,
        p: &AffinePoint<F::Fp2>,
        q: &AffinePoint<F::Fp2>,
    ) -> AffinePoint<F::Fp2> {
        // λ1 = (q.y - p.y) / (q.x - p.x)
        let yqyp = self.fp2.sub(&q.y, &p.y);
        let xqxp = self.fp2.sub(&q.x, &p.x);
        let lambda1 = self.fp2.div_unsafe(&yqyp, &xqxp);

        // x2 = λ1² - p.x - q.x
        let lambda1_sq = self.fp2.square(&lambda1);
        let xsum = self.fp2.add(&p.x, &q.x);
        let x2 = self.fp2.sub(&lambda1_sq, &xsum);

        // omit y2: λ2 = -λ1 - 2 p.y / (x2 - p.x)
        let ypyp = self.fp2.double(&p.y);
        let x2xp = self.fp2.sub(&x2, &p.x);
        let lambda2 = self.fp2.div_unsafe(&ypyp, &x2xp);
        let lambda2 = self.fp2.add(&lambda1, &lambda2);
        let lambda2 = self.fp2.neg(&lambda2);

        // x3 = λ2² - p.x - x2
        let lambda2_sq = self.fp2.square(&lambda2);
        let x3 = self.fp2.sub(&lambda2_sq, &p.x);
        let x3 = self.fp2.sub(&x3, &x2);

        // y3 = λ2(p.x - x3) - p.y
        let y3 = self.fp2.sub(&p.x, &x3);
        let y3 = self.fp2.mul(&lambda2, &y3);
        let y3 = self.fp2.sub(&y3, &p.y);

        AffinePoint::new(x3, y3)
    }

    /// x-coordinate scaling by the cube root of unity; realizes the GLV
    /// endomorphism on the subgroup. Does not verify membership.
    pub fn phi(&self, q: &AffinePoint<F::Fp2>) -> AffinePoint<F::Fp2> {
        AffinePoint::new(self.fp2.mul_base(&q.x, &self.w), q.y.clone())
    }

    /// Untwist-Frobenius endomorphism: conjugates both coordinates and scales
    /// them by the fixed coefficients `u` and `v`. Acts as multiplication by
    /// p on the subgroup. Does not verify membership.
    pub fn psi(&self, q: &AffinePoint<F::Fp2>) -> AffinePoint<F::Fp2> {
        let x = self.fp2.conjugate(&q.x);
        let x = self.fp2.mul(&x, &self.u);
        let y = self.fp2.conjugate(&q.y);
        let y = self.fp2.mul(&y, &self.v);
        AffinePoint::new(x, y)
    }

    /// `[x] q` for the BN254 seed x = 4965661367192848881, as a fixed
    /// interleaving of doublings and additions derived offline from the
    /// seed's addition chain. Nothing branches on data: every instantiation
    /// emits the identical gate sequence.
    ///
    /// The chain is seed-specific. A different constant needs a freshly
    /// derived chain, not new parameters for this one.
    pub fn mul_by_seed(&self, q: &AffinePoint<F::Fp2>) -> AffinePoint<F::Fp2> {
        let mut z = self.double(q);
        let mut t0 = self.add(q, &z);
        let mut t2 = self.add(q, &t0);
        let mut t1 = self.add(&z, &t2);
        z = self.double_and_add(&t1, &t0);
        t0 = self.add(&t0, &z);
        t2 = self.add(&t2, &t0);
        t1 = self.add(&t1, &t2);
        t0 = self.add(&t0, &t1);
        t1 = self.add(&t1, &t0);
        t0 = self.add(&t0, &t1);
        t2 = self.add(&t2, &t0);
        t1 = self.double_and_add(&t2, &t1);
        t2 = self.add(&t2, &t1);
        z = self.add(&z, &t2);
        t2 = self.add(&t2, &z);
        z = self.double_and_add(&t2, &z);
        t0 = self.add(&t0, &z);
        t1 = self.add(&t1, &t0);
        let t3 = self.double(&t1);
        let t3 = self.double_and_add(&t3, &t1);
        t2 = self.add(&t2, &t3);
        t1 = self.add(&t1, &t2);
        t2 = self.add(&t2, &t1);
        t2 = self.double_n(&t2, 16);
        t1 = self.double_and_add(&t2, &t1);
        t1 = self.double_n(&t1, 13);
        t0 = self.double_and_add(&t1, &t0);
        t0 = self.double_n(&t0, 15);
        self.double_and_add(&t0, &z)
    }

    /// Coordinate-wise equality assertion.
    pub fn assert_equal(&self, p: &AffinePoint<F::Fp2>, q: &AffinePoint<F::Fp2>) {
        self.fp2.assert_equal(&p.x, &q.x);
        self.fp2.assert_equal(&p.y, &q.y);
    }
}
