use halo2curves_axiom::bn256::Fq12;
use zircon_algebra::Fp2Gadget;
use zircon_ecc::AffinePoint;

use crate::{Fp12, GadgetError};

/// External pairing primitive: multi-Miller loop and final exponentiation
/// over in-circuit values, with `pair` as their composition.
pub trait PairingEngine {
    /// In-circuit Fp2 handle; matches the [`Fp2Gadget`] used alongside.
    type Fp2: Clone;
    /// In-circuit G1 point.
    type G1Point: Clone;

    /// Multi-Miller loop over the input pairs. Errors on a length mismatch
    /// before emitting any gate.
    fn miller_loop(
        &self,
        p: Vec<Self::G1Point>,
        q: Vec<AffinePoint<Self::Fp2>>,
    ) -> Result<Fp12<Self::Fp2>, GadgetError>;

    /// Final exponentiation of a Miller-loop output.
    fn final_exponentiation(&self, f: &Fp12<Self::Fp2>) -> Fp12<Self::Fp2>;

    /// Full multi-pairing.
    fn pair(
        &self,
        p: Vec<Self::G1Point>,
        q: Vec<AffinePoint<Self::Fp2>>,
    ) -> Result<Fp12<Self::Fp2>, GadgetError> {
        let f = self.miller_loop(p, q)?;
        Ok(self.final_exponentiation(&f))
    }
}

/// Pairing facade: adapts borrowed slices into the owned form the engine
/// consumes and keeps every operation argument-pure.
pub struct Pairing<F: Fp2Gadget, E: PairingEngine<Fp2 = F::Fp2>> {
    fp2: F,
    engine: E,
}

impl<F: Fp2Gadget, E: PairingEngine<Fp2 = F::Fp2>> Pairing<F, E> {
    pub fn new(fp2: F, engine: E) -> Self {
        Self { fp2, engine }
    }

    /// Loads a concrete target-group value as a witness.
    pub fn new_gt(&self, value: &Fq12) -> Fp12<F::Fp2> {
        Fp12::witness(&self.fp2, value)
    }

    /// Multi-Miller loop over the input pairs. The engine's length-mismatch
    /// error is propagated unchanged.
    pub fn miller_loop(
        &self,
        p: &[E::G1Point],
        q: &[AffinePoint<F::Fp2>],
    ) -> Result<Fp12<F::Fp2>, GadgetError> {
        self.engine.miller_loop(p.to_vec(), q.to_vec())
    }

    /// Final exponentiation of a Miller-loop output.
    pub fn final_exponentiation(&self, f: &Fp12<F::Fp2>) -> Fp12<F::Fp2> {
        self.engine.final_exponentiation(f)
    }

    /// Full multi-pairing over the input pairs.
    pub fn pair(
        &self,
        p: &[E::G1Point],
        q: &[AffinePoint<F::Fp2>],
    ) -> Result<Fp12<F::Fp2>, GadgetError> {
        self.engine.pair(p.to_vec(), q.to_vec())
    }

    /// Computes the multi-pairing and constrains the result to the target
    /// group's multiplicative identity. The constraint only bites at witness
    /// generation: a failing check still builds, then proves unsatisfiable.
    pub fn pairing_check(
        &self,
        p: &[E::G1Point],
        q: &[AffinePoint<F::Fp2>],
    ) -> Result<(), GadgetError> {
        let res = self.pair(p, q)?;
        tracing::debug!("asserting pairing product of {} pairs is one", p.len());
        let one = Fp12::one(&self.fp2);
        self.assert_equal(&res, &one);
        Ok(())
    }

    /// Field-wise equality assertion over both halves of the tower.
    pub fn assert_equal(&self, a: &Fp12<F::Fp2>, b: &Fp12<F::Fp2>) {
        for (x, y) in a.coeffs().into_iter().zip(b.coeffs()) {
            self.fp2.assert_equal(x, y);
        }
    }
}
