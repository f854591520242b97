//! In-circuit BN254 G2: affine group law, the curve's two endomorphisms and
//! multiplication by the curve seed, all expressed as gate-emitting
//! operations over an external Fp2 arithmetic gadget.

mod bn254;
mod g2;
mod point;

pub use bn254::*;
pub use g2::*;
pub use point::*;
