//! Pairing orchestration for BN254 circuits: a pure G1 facade over an
//! external native-field curve gadget, and a pairing facade composing it with
//! an external Miller-loop/final-exponentiation primitive.

mod curve;
mod gt;
mod pairing;

pub use curve::*;
pub use gt::*;
pub use pairing::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Structural errors detected while the circuit is being built. Everything
/// the builder cannot check here, like a violated group-law precondition or a
/// failing pairing check, surfaces later as an unsatisfiable witness instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GadgetError {
    /// Parallel input slices disagree in length.
    #[error("mismatching input slice lengths: {0} vs {1}")]
    MismatchedLengths(usize, usize),
}
