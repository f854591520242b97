//! Interfaces to the in-circuit field arithmetic the zircon gadgets build on.
//!
//! The gadgets in the sibling crates never touch a constraint system
//! directly; everything goes through the [`Fp2Gadget`] seam defined here. A
//! native evaluation backend for tests lives behind the `test-utils` feature.

mod field;

pub use field::*;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
