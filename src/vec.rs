//! Vector types and traits for physics calculations.

use crate::error::PhysicsError;
use crate::float::Float;
use alloc::vec::Vec as AllocVec;
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Trait for vector types used by points and forces.
///
/// Vectors are plain `Copy` values: every operation returns a fresh vector,
/// so callers never need to copy before "mutating".
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// Component-wise multiplication.
    fn component_mul(self, other: Self) -> Self;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Euclidean length.
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. A zero vector comes back unchanged.
    fn normalize(self) -> Self {
        let len = self.length();
        if len == Self::Scalar::zero() {
            self
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    /// Component of `self` parallel to `onto`. Zero if `onto` has no length.
    fn project(self, onto: Self) -> Self {
        let dir = onto.normalize();
        dir.scale(self.dot(dir))
    }

    /// Shorten to at most `max_len`. A negative limit is rejected.
    fn limit(self, max_len: Self::Scalar) -> Result<Self, PhysicsError> {
        if max_len < Self::Scalar::zero() {
            return Err(PhysicsError::InvalidArgument("length limit must be non-negative"));
        }
        let len = self.length();
        if len != Self::Scalar::zero() && len > max_len {
            Ok(self.scale(max_len / len))
        } else {
            Ok(self)
        }
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }

    /// Squared distance between two points.
    fn distance_sq(self, other: Self) -> Self::Scalar {
        (self - other).length_sq()
    }
}

// --------------------------------------------------------------------------
// Vec2<F>: 2D vector
// --------------------------------------------------------------------------

/// 2D vector. All angles are radians.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Build a vector from a magnitude and an angle.
    pub fn from_polar(magnitude: F, angle: F) -> Self {
        Vec2 { x: magnitude * angle.cos(), y: magnitude * angle.sin() }
    }

    /// Angle from the +x axis, in (-pi, pi].
    pub fn angle(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// 2D cross product (returns scalar): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Perpendicular vector (rotated 90 degrees counter-clockwise).
    pub fn perp(self) -> Self {
        Vec2 { x: -self.y, y: self.x }
    }

    /// Rotate counter-clockwise about the origin.
    pub fn rotate(self, angle: F) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Vec2 {
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }

    /// Rotate counter-clockwise about `origin`.
    pub fn rotate_about(self, angle: F, origin: Self) -> Self {
        (self - origin).rotate(angle) + origin
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }
}

// --------------------------------------------------------------------------
// VecN<F>: N-dimensional vector
// --------------------------------------------------------------------------

/// Heap-backed vector of any dimension.
///
/// Binary operations check dimensions and fail fast with
/// [`PhysicsError::DimensionMismatch`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VecN<F: Float> {
    vals: AllocVec<F>,
}

impl<F: Float> VecN<F> {
    pub fn new(vals: AllocVec<F>) -> Self { VecN { vals } }

    pub fn zeros(dim: usize) -> Self {
        VecN { vals: alloc::vec![F::zero(); dim] }
    }

    pub fn dim(&self) -> usize { self.vals.len() }

    pub fn as_slice(&self) -> &[F] { &self.vals }

    fn check_dim(&self, other: &Self) -> Result<(), PhysicsError> {
        if self.dim() != other.dim() {
            return Err(PhysicsError::DimensionMismatch {
                expected: self.dim(),
                found: other.dim(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, f: impl Fn(F, F) -> F) -> Result<Self, PhysicsError> {
        self.check_dim(other)?;
        let vals = self.vals.iter().zip(other.vals.iter()).map(|(&a, &b)| f(a, b)).collect();
        Ok(VecN { vals })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, PhysicsError> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, PhysicsError> {
        self.zip_with(other, |a, b| a - b)
    }

    pub fn component_mul(&self, other: &Self) -> Result<Self, PhysicsError> {
        self.zip_with(other, |a, b| a * b)
    }

    pub fn try_dot(&self, other: &Self) -> Result<F, PhysicsError> {
        self.check_dim(other)?;
        Ok(self
            .vals
            .iter()
            .zip(other.vals.iter())
            .fold(F::zero(), |acc, (&a, &b)| acc + a * b))
    }

    pub fn scale(&self, s: F) -> Self {
        VecN { vals: self.vals.iter().map(|&v| v * s).collect() }
    }

    pub fn length(&self) -> F {
        self.vals.iter().fold(F::zero(), |acc, &v| acc + v * v).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == F::zero() {
            self.clone()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Narrow to a [`Vec2`]; only valid for two-dimensional vectors.
    pub fn to_vec2(&self) -> Result<Vec2<F>, PhysicsError> {
        match self.vals.as_slice() {
            [x, y] => Ok(Vec2::new(*x, *y)),
            _ => Err(PhysicsError::DimensionMismatch { expected: 2, found: self.dim() }),
        }
    }
}

impl<F: Float> From<Vec2<F>> for VecN<F> {
    fn from(v: Vec2<F>) -> Self {
        VecN { vals: alloc::vec![v.x, v.y] }
    }
}
