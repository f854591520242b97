//! BN254 G2 parameters.

use halo2curves_axiom::{
    bn256::{Fq, Fq2},
    ff::{Field, PrimeField},
};

/// The BN254 seed x. `G2::mul_by_seed` multiplies by this constant through a
/// fixed addition chain; it is not a runtime input anywhere.
pub const BN254_SEED: u64 = 0x44e992b44a6909f1;

/// Fixed parameter table for the BN254 G2 gadget, loaded once at construction
/// and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct G2Params {
    /// Primitive cube root of unity in Fp; `phi` scales x-coordinates by it.
    pub w: Fq,
    /// First untwist-Frobenius coefficient, `xi^((p-1)/3)` for the
    /// non-residue `xi = 9 + i`.
    pub u: Fq2,
    /// Second untwist-Frobenius coefficient, `xi^((p-1)/2)`.
    pub v: Fq2,
}

impl G2Params {
    pub fn bn254() -> Self {
        Self {
            w: fq("21888242871839275220042445260109153167277707414472061641714758635765020556616"),
            u: Fq2 {
                c0: fq(
                    "21575463638280843010398324269430826099269044274347216827212613867836435027261",
                ),
                c1: fq(
                    "10307601595873709700152284273816112264069230130616436755625194854815875713954",
                ),
            },
            v: Fq2 {
                c0: fq(
                    "2821565182194536844548159561693502659359617185244120367078079554186484126554",
                ),
                c1: fq(
                    "3505843767911556378687030309984248845540243509899259641013678093033130930403",
                ),
            },
        }
    }

    /// Internal consistency of the table. This guards the constants
    /// themselves, not caller inputs.
    pub fn check_valid(&self) {
        assert_ne!(self.w, Fq::ONE);
        assert_eq!(self.w * self.w * self.w, Fq::ONE);
        assert!(!bool::from(self.u.is_zero()));
        assert!(!bool::from(self.v.is_zero()));
    }
}

fn fq(s: &str) -> Fq {
    Fq::from_str_vartime(s).unwrap()
}
