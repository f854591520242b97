//! Native evaluation backend: computes with halo2curves values directly
//! instead of emitting gates, while recording how many operations a circuit
//! build would emit and which assertions a witness would violate.

use std::{cell::Cell, rc::Rc};

use halo2curves_axiom::{
    bn256::{Fq, Fq2},
    ff::Field,
};

use crate::Fp2Gadget;

/// Shared recorder standing in for the constraint system. Single-writer;
/// backends hold it behind an `Rc`.
#[derive(Debug, Default)]
pub struct EvalContext {
    gates: Cell<usize>,
    violations: Cell<usize>,
}

impl EvalContext {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of operations recorded so far.
    pub fn gates(&self) -> usize {
        self.gates.get()
    }

    /// True if no recorded assertion failed. A real backend only learns this
    /// at witness generation; here it is available immediately.
    pub fn is_satisfied(&self) -> bool {
        self.violations.get() == 0
    }

    pub fn record_gate(&self) {
        self.gates.set(self.gates.get() + 1);
    }

    pub fn record_violation(&self) {
        self.violations.set(self.violations.get() + 1);
    }
}

/// [`Fp2Gadget`] backend evaluating natively over [`Fq2`].
#[derive(Clone)]
pub struct NativeFp2 {
    ctx: Rc<EvalContext>,
}

impl NativeFp2 {
    pub fn new(ctx: Rc<EvalContext>) -> Self {
        Self { ctx }
    }

    fn emit(&self, value: Fq2) -> Fq2 {
        self.ctx.record_gate();
        value
    }
}

impl Fp2Gadget for NativeFp2 {
    type Fp2 = Fq2;

    fn constant(&self, value: Fq2) -> Fq2 {
        self.emit(value)
    }

    fn witness(&self, value: Fq2) -> Fq2 {
        self.emit(value)
    }

    fn add(&self, a: &Fq2, b: &Fq2) -> Fq2 {
        self.emit(a + b)
    }

    fn sub(&self, a: &Fq2, b: &Fq2) -> Fq2 {
        self.emit(a - b)
    }

    fn double(&self, a: &Fq2) -> Fq2 {
        self.emit(a + a)
    }

    fn mul(&self, a: &Fq2, b: &Fq2) -> Fq2 {
        self.emit(a * b)
    }

    fn square(&self, a: &Fq2) -> Fq2 {
        self.emit(a.square())
    }

    fn neg(&self, a: &Fq2) -> Fq2 {
        self.emit(-a)
    }

    fn conjugate(&self, a: &Fq2) -> Fq2 {
        self.emit(Fq2 {
            c0: a.c0,
            c1: -a.c1,
        })
    }

    fn div_unsafe(&self, a: &Fq2, b: &Fq2) -> Fq2 {
        // A zero denominator yields garbage, matching the unconstrained
        // result an actual backend would leave behind.
        let inv = b.invert().unwrap_or(Fq2::ZERO);
        self.emit(a * inv)
    }

    fn mul_base(&self, a: &Fq2, c: &Fq) -> Fq2 {
        self.emit(Fq2 {
            c0: a.c0 * c,
            c1: a.c1 * c,
        })
    }

    fn int_mul(&self, a: &Fq2, c: isize) -> Fq2 {
        let scale = Fq::from(c.unsigned_abs() as u64);
        let scaled = Fq2 {
            c0: a.c0 * scale,
            c1: a.c1 * scale,
        };
        self.emit(if c < 0 { -scaled } else { scaled })
    }

    fn assert_equal(&self, a: &Fq2, b: &Fq2) {
        self.ctx.record_gate();
        if a != b {
            self.ctx.record_violation();
        }
    }
}
