/// Affine curve point: a raw coordinate pair with no point-at-infinity
/// encoding. `T` is whatever field representation the surrounding gadget
/// works with, typically a handle to an in-circuit element.
#[derive(Clone, Debug)]
pub struct AffinePoint<T> {
    pub x: T,
    pub y: T,
}

impl<T> AffinePoint<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}
