use itertools::izip;

use crate::GadgetError;

/// In-circuit operations of the native-field (G1) curve, as implemented by an
/// external backend. The mutating receivers mirror the backend's in-place
/// style; [`Curve`] wraps them into pure operations.
pub trait G1Gadget {
    /// Handle to an in-circuit G1 point.
    type Point: Clone;
    /// Opaque in-circuit scalar.
    type Scalar: Clone;

    fn add_assign(&self, p: &mut Self::Point, q: &Self::Point);

    fn neg(&self, p: &mut Self::Point);

    fn scalar_mul(&self, p: &mut Self::Point, scalar: &Self::Scalar);

    fn scalar_mul_base(&self, scalar: &Self::Scalar) -> Self::Point;

    /// Allocates the all-zero coordinate pair. Not a group identity in
    /// general; [`Curve::msm`] hands it out for empty input.
    fn zero(&self) -> Self::Point;

    fn assert_equal(&self, p: &Self::Point, q: &Self::Point);
}

/// Pure G1 facade: copies, then delegates to the backend's in-place
/// operations. Arguments are never modified.
pub struct Curve<C: G1Gadget> {
    g1: C,
}

impl<C: G1Gadget> Curve<C> {
    pub fn new(g1: C) -> Self {
        Self { g1 }
    }

    /// `p + q`.
    pub fn add(&self, p: &C::Point, q: &C::Point) -> C::Point {
        let mut res = p.clone();
        self.g1.add_assign(&mut res, q);
        res
    }

    /// `-p`.
    pub fn neg(&self, p: &C::Point) -> C::Point {
        let mut res = p.clone();
        self.g1.neg(&mut res);
        res
    }

    /// `scalar · p`.
    pub fn scalar_mul(&self, p: &C::Point, scalar: &C::Scalar) -> C::Point {
        let mut res = p.clone();
        self.g1.scalar_mul(&mut res, scalar);
        res
    }

    /// `scalar · G` for the curve's base point.
    pub fn scalar_mul_base(&self, scalar: &C::Scalar) -> C::Point {
        self.g1.scalar_mul_base(scalar)
    }

    /// `∑ scalarsᵢ · pointsᵢ` by plain sequential accumulation; no
    /// precomputation, no bucketing. Lengths are checked before any gate is
    /// emitted. An empty input yields the backend's all-zero point, a
    /// sentinel rather than a verified group identity.
    pub fn msm(
        &self,
        points: &[C::Point],
        scalars: &[C::Scalar],
    ) -> Result<C::Point, GadgetError> {
        if points.len() != scalars.len() {
            return Err(GadgetError::MismatchedLengths(points.len(), scalars.len()));
        }
        if points.is_empty() {
            return Ok(self.g1.zero());
        }
        tracing::debug!("msm over {} points", points.len());
        let mut res = self.scalar_mul(&points[0], &scalars[0]);
        for (p, s) in izip!(&points[1..], &scalars[1..]) {
            let q = self.scalar_mul(p, s);
            res = self.add(&res, &q);
        }
        Ok(res)
    }

    /// Equality assertion on two points.
    pub fn assert_equal(&self, p: &C::Point, q: &C::Point) {
        self.g1.assert_equal(p, q);
    }
}
