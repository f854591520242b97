//! Native halo2curves-backed implementations of the external curve and
//! pairing gadgets, for driving the facades in tests.

use core::mem::transmute;
use std::rc::Rc;

use group::{prime::PrimeCurveAffine, Curve as _};
use halo2curves_axiom::{
    bn256::{multi_miller_loop, Fq12, Fq2, Fq6, Fr, G1Affine, G2Affine, G2Prepared, Gt},
    pairing::MillerLoopResult,
    CurveAffine,
};
use zircon_algebra::test_utils::EvalContext;
use zircon_ecc::AffinePoint;

use crate::{Fp12, Fp6, G1Gadget, GadgetError, PairingEngine};

/// [`G1Gadget`] backend evaluating natively on halo2curves points.
#[derive(Clone)]
pub struct NativeG1 {
    ctx: Rc<EvalContext>,
}

impl NativeG1 {
    pub fn new(ctx: Rc<EvalContext>) -> Self {
        Self { ctx }
    }
}

impl G1Gadget for NativeG1 {
    type Point = G1Affine;
    type Scalar = Fr;

    fn add_assign(&self, p: &mut G1Affine, q: &G1Affine) {
        self.ctx.record_gate();
        *p = (p.to_curve() + q).to_affine();
    }

    fn neg(&self, p: &mut G1Affine) {
        self.ctx.record_gate();
        *p = -*p;
    }

    fn scalar_mul(&self, p: &mut G1Affine, scalar: &Fr) {
        self.ctx.record_gate();
        *p = (*p * scalar).to_affine();
    }

    fn scalar_mul_base(&self, scalar: &Fr) -> G1Affine {
        self.ctx.record_gate();
        (G1Affine::generator() * scalar).to_affine()
    }

    fn zero(&self) -> G1Affine {
        self.ctx.record_gate();
        // halo2curves encodes the affine identity as the (0, 0) pair.
        G1Affine::identity()
    }

    fn assert_equal(&self, p: &G1Affine, q: &G1Affine) {
        self.ctx.record_gate();
        if p != q {
            self.ctx.record_violation();
        }
    }
}

/// Rebuilds a concrete `Fq12` from a tower of native handles.
pub fn gt_value(f: &Fp12<Fq2>) -> Fq12 {
    Fq12 {
        c0: Fq6 {
            c0: f.c0.c0,
            c1: f.c0.c1,
            c2: f.c0.c2,
        },
        c1: Fq6 {
            c0: f.c1.c0,
            c1: f.c1.c1,
            c2: f.c1.c2,
        },
    }
}

fn wrap(f: Fq12) -> Fp12<Fq2> {
    Fp12 {
        c0: Fp6 {
            c0: f.c0.c0,
            c1: f.c0.c1,
            c2: f.c0.c2,
        },
        c1: Fp6 {
            c0: f.c1.c0,
            c1: f.c1.c1,
            c2: f.c1.c2,
        },
    }
}

/// Compares a handle tower against a concrete, final-exponentiated [`Gt`].
pub fn assert_gt_eq(a: &Fp12<Fq2>, b: Gt) {
    // Gt does not expose its inner Fq12.
    assert_eq!(gt_value(a), unsafe { transmute::<Gt, Fq12>(b) });
}

/// [`PairingEngine`] backend over halo2curves' BN254 pairing.
#[derive(Clone)]
pub struct NativePairing {
    ctx: Rc<EvalContext>,
}

impl NativePairing {
    pub fn new(ctx: Rc<EvalContext>) -> Self {
        Self { ctx }
    }
}

impl PairingEngine for NativePairing {
    type Fp2 = Fq2;
    type G1Point = G1Affine;

    fn miller_loop(
        &self,
        p: Vec<G1Affine>,
        q: Vec<AffinePoint<Fq2>>,
    ) -> Result<Fp12<Fq2>, GadgetError> {
        if p.len() != q.len() {
            return Err(GadgetError::MismatchedLengths(p.len(), q.len()));
        }
        self.ctx.record_gate();
        let prepared = q
            .iter()
            .map(|q| G2Prepared::from(G2Affine::from_xy(q.x, q.y).unwrap()))
            .collect::<Vec<_>>();
        let terms = p.iter().zip(prepared.iter()).collect::<Vec<_>>();
        let f = multi_miller_loop(&terms);
        Ok(wrap(unsafe { transmute::<Gt, Fq12>(f) }))
    }

    fn final_exponentiation(&self, f: &Fp12<Fq2>) -> Fp12<Fq2> {
        self.ctx.record_gate();
        let f = unsafe { transmute::<Fq12, Gt>(gt_value(f)) };
        wrap(unsafe { transmute::<Gt, Fq12>(f.final_exponentiation()) })
    }
}
