use halo2curves_axiom::{
    bn256::{Fq, Fq2},
    ff::Field,
};

/// In-circuit arithmetic over `Fp2`, the quadratic extension of the BN254
/// coordinate field.
///
/// Implementations append gates to a shared constraint system and hand back
/// opaque handles; a handle is immutable once produced. The constraint system
/// is a single-writer resource: building the same circuit from more than one
/// thread is unsupported. Repeating a call with the same handles appends the
/// same gates again and yields a fresh handle.
pub trait Fp2Gadget {
    /// Handle to an in-circuit `Fp2` element.
    type Fp2: Clone;

    /// Allocates `value` as a circuit constant.
    fn constant(&self, value: Fq2) -> Self::Fp2;

    /// Allocates `value` as a prover-supplied witness. Used when assigning
    /// concrete inputs, not by the gate-emitting logic itself.
    fn witness(&self, value: Fq2) -> Self::Fp2;

    fn add(&self, a: &Self::Fp2, b: &Self::Fp2) -> Self::Fp2;

    fn sub(&self, a: &Self::Fp2, b: &Self::Fp2) -> Self::Fp2;

    /// `2a`.
    fn double(&self, a: &Self::Fp2) -> Self::Fp2;

    fn mul(&self, a: &Self::Fp2, b: &Self::Fp2) -> Self::Fp2;

    fn square(&self, a: &Self::Fp2) -> Self::Fp2;

    fn neg(&self, a: &Self::Fp2) -> Self::Fp2;

    /// Galois conjugation `c0 - c1 i`.
    fn conjugate(&self, a: &Self::Fp2) -> Self::Fp2;

    /// `a / b` without a zero check on `b`. A zero denominator leaves the
    /// result unconstrained instead of failing; callers must rule it out.
    fn div_unsafe(&self, a: &Self::Fp2, b: &Self::Fp2) -> Self::Fp2;

    /// Scales `a` by the base-field constant `c`.
    fn mul_base(&self, a: &Self::Fp2, c: &Fq) -> Self::Fp2;

    /// Scales `a` by a small integer constant.
    fn int_mul(&self, a: &Self::Fp2, c: isize) -> Self::Fp2;

    /// Constrains `a == b`. A violation is only observable once a witness is
    /// generated, never while the circuit is being built.
    fn assert_equal(&self, a: &Self::Fp2, b: &Self::Fp2);

    /// The multiplicative identity as a circuit constant.
    fn one(&self) -> Self::Fp2 {
        self.constant(Fq2::ONE)
    }
}
