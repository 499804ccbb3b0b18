//! Pairwise force relations between point masses: spring, damping, radial power.

use crate::float::Float;
use crate::point::PointMass;
use crate::vec::Vec;

/// Reference to a point inside a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointRef {
    /// Index into the edge ring.
    Edge(usize),
    /// The body's single center point.
    Center,
}

/// A stateless force law. Constants are fixed at construction; the force is
/// recomputed from live point state on every evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ForceKind<V: Vec> {
    /// Hooke spring along the line between the points.
    Spring { rest_length: V::Scalar, stiffness: V::Scalar },
    /// Opposes the radial part of the relative velocity.
    Damping { coefficient: V::Scalar },
    /// `strength * distance^exponent` along the line between the points.
    RadialPower { strength: V::Scalar, exponent: V::Scalar },
}

impl<V: Vec> ForceKind<V> {
    pub fn spring(rest_length: V::Scalar, stiffness: V::Scalar) -> Self {
        ForceKind::Spring { rest_length, stiffness }
    }

    pub fn damping(coefficient: V::Scalar) -> Self {
        ForceKind::Damping { coefficient }
    }

    pub fn radial_power(strength: V::Scalar, exponent: V::Scalar) -> Self {
        ForceKind::RadialPower { strength, exponent }
    }

    /// Force on `a` due to `b`.
    pub fn evaluate(&self, a: &PointMass<V>, b: &PointMass<V>) -> V {
        let offset = a.pos - b.pos;
        match *self {
            ForceKind::Spring { rest_length, stiffness } => {
                let dist = offset.length();
                offset.normalize().scale(stiffness * (rest_length - dist))
            }
            ForceKind::Damping { coefficient } => {
                let rel_vel = a.vel - b.vel;
                if rel_vel == V::zero() {
                    return V::zero();
                }
                // Only the closing/separating component is damped.
                rel_vel.project(offset).scale(-coefficient)
            }
            ForceKind::RadialPower { strength, exponent } => {
                let dist = offset.length();
                if dist == V::Scalar::zero() {
                    return V::zero();
                }
                offset.normalize().scale(strength * dist.powf(exponent))
            }
        }
    }
}

/// A force law bound to two points of a body.
///
/// The owning body applies it in both directions every step, so the
/// reaction on `b` is always `kind.evaluate(b, a)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ForceRelation<V: Vec> {
    pub a: PointRef,
    pub b: PointRef,
    pub kind: ForceKind<V>,
}

impl<V: Vec> ForceRelation<V> {
    pub fn new(a: PointRef, b: PointRef, kind: ForceKind<V>) -> Self {
        ForceRelation { a, b, kind }
    }

    /// Forces on `(a, b)` for the given resolved points.
    pub fn forces(&self, a: &PointMass<V>, b: &PointMass<V>) -> (V, V) {
        (self.kind.evaluate(a, b), self.kind.evaluate(b, a))
    }
}
