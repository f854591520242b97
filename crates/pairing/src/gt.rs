use halo2curves_axiom::{
    bn256::{Fq12, Fq2},
    ff::Field,
};
use zircon_algebra::Fp2Gadget;

/// Degree-3 layer of the target-group tower: three Fp2 handles.
#[derive(Clone, Debug)]
pub struct Fp6<T> {
    pub c0: T,
    pub c1: T,
    pub c2: T,
}

/// Target-group element: the quadratic layer over [`Fp6`], twelve base-field
/// coefficients behind six Fp2 handles.
#[derive(Clone, Debug)]
pub struct Fp12<T> {
    pub c0: Fp6<T>,
    pub c1: Fp6<T>,
}

impl<T> Fp12<T> {
    /// The six Fp2 coefficients, low tower half first.
    pub fn coeffs(&self) -> [&T; 6] {
        [
            &self.c0.c0,
            &self.c0.c1,
            &self.c0.c2,
            &self.c1.c0,
            &self.c1.c1,
            &self.c1.c2,
        ]
    }

    /// Allocates a concrete target-group value behind witness handles.
    pub fn witness<F: Fp2Gadget<Fp2 = T>>(fp2: &F, value: &Fq12) -> Self {
        Self {
            c0: Fp6 {
                c0: fp2.witness(value.c0.c0),
                c1: fp2.witness(value.c0.c1),
                c2: fp2.witness(value.c0.c2),
            },
            c1: Fp6 {
                c0: fp2.witness(value.c1.c0),
                c1: fp2.witness(value.c1.c1),
                c2: fp2.witness(value.c1.c2),
            },
        }
    }

    /// The multiplicative identity as a circuit constant.
    pub fn one<F: Fp2Gadget<Fp2 = T>>(fp2: &F) -> Self {
        Self {
            c0: Fp6 {
                c0: fp2.one(),
                c1: fp2.constant(Fq2::ZERO),
                c2: fp2.constant(Fq2::ZERO),
            },
            c1: Fp6 {
                c0: fp2.constant(Fq2::ZERO),
                c1: fp2.constant(Fq2::ZERO),
                c2: fp2.constant(Fq2::ZERO),
            },
        }
    }
}
