//! Scalar type shared by every ball, force and point.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Numeric backing for the simulation, `f32` or `f64`.
///
/// Transcendental functions go through `libm` so the crate builds for
/// `no_std` targets such as wasm.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    fn zero() -> Self;
    fn one() -> Self;
    fn half() -> Self;
    fn two() -> Self;
    /// Used to lay edge points out around a full turn.
    fn pi() -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    /// `self^n`, for radial power laws.
    fn powf(self, n: Self) -> Self;
    fn abs(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Literal constants in generic code are written as f32.
    fn from_f32(v: f32) -> Self;
    /// Heading of the vector (x, y), in (-pi, pi].
    fn atan2(y: Self, x: Self) -> Self;
    fn floor(self) -> Self;
    /// Widen for counting; the scheduler turns dropped backlog into an integer.
    fn to_f64(self) -> f64;

    /// Point counts as a scalar, for angular steps and averages.
    fn from_usize(n: usize) -> Self {
        Self::from_f32(n as f32)
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn sin(self) -> Self { libm::sinf(self) }
    fn cos(self) -> Self { libm::cosf(self) }
    fn powf(self, n: Self) -> Self { libm::powf(self, n) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { libm::fminf(self, other) }
    fn max(self, other: Self) -> Self { libm::fmaxf(self, other) }
    fn from_f32(v: f32) -> Self { v }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
    fn floor(self) -> Self { libm::floorf(self) }
    fn to_f64(self) -> f64 { self as f64 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn sin(self) -> Self { libm::sin(self) }
    fn cos(self) -> Self { libm::cos(self) }
    fn powf(self, n: Self) -> Self { libm::pow(self, n) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { libm::fmin(self, other) }
    fn max(self, other: Self) -> Self { libm::fmax(self, other) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
    fn floor(self) -> Self { libm::floor(self) }
    fn to_f64(self) -> f64 { self }

    // Exact for counts above f32's integer range.
    fn from_usize(n: usize) -> Self { n as f64 }
}
