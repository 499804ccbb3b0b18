//! Point masses advanced with semi-implicit Euler.

use crate::float::Float;
use crate::vec::Vec;

/// A simulated particle with an acceleration accumulator.
///
/// `acc` only lives for one step: it is cleared by [`PointMass::integrate`].
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<V: Vec> {
    pub pos: V,
    pub vel: V,
    pub acc: V,
    /// Must be positive; it is divided by unchecked.
    pub mass: V::Scalar,
}

impl<V: Vec> PointMass<V> {
    /// A resting unit-mass point.
    pub fn new(pos: V) -> Self {
        Self::with_mass(pos, V::Scalar::one())
    }

    pub fn with_mass(pos: V, mass: V::Scalar) -> Self {
        PointMass {
            pos,
            vel: V::zero(),
            acc: V::zero(),
            mass,
        }
    }

    /// Accumulate `force / mass` into the acceleration.
    pub fn apply_force(&mut self, force: V) {
        self.acc = self.acc + force.scale(V::Scalar::one() / self.mass);
    }

    /// `vel += acc * dt`
    pub fn advance_velocity(&mut self, dt: V::Scalar) {
        self.vel = self.vel + self.acc.scale(dt);
    }

    /// `pos += vel * dt`, using whatever velocity is current.
    pub fn advance_position(&mut self, dt: V::Scalar) {
        self.pos = self.pos + self.vel.scale(dt);
    }

    pub fn clear_acceleration(&mut self) {
        self.acc = V::zero();
    }

    /// Semi-implicit Euler: velocity first, then position with the new
    /// velocity, then drop the accumulated acceleration.
    pub fn integrate(&mut self, dt: V::Scalar) {
        self.advance_velocity(dt);
        self.advance_position(dt);
        self.clear_acceleration();
    }
}
