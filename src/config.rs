//! Construction parameters for soft balls.

use crate::float::Float;
use crate::vec::{Vec, Vec2};

/// Everything needed to build a [`Ball`](crate::body::Ball).
///
/// Read once at construction; a ball cannot be reconfigured afterwards.
///
/// # Builder Pattern
/// ```
/// use squishy::config::BallConfig;
/// use squishy::vec::Vec2;
///
/// let config: BallConfig<f32> = BallConfig::new()
///     .with_position(Vec2::new(5.0, 0.0))
///     .with_radius(15.0)
///     .with_point_count(30)
///     .with_stiffness(1.0, 0.25)
///     .with_averaging(true, false);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BallConfig<F: Float> {
    /// Initial center position. Default: origin.
    pub position: Vec2<F>,
    /// Distance from center to every edge point. Default: 10.
    pub radius: F,
    /// Number of edge points in the ring. Default: 20.
    pub point_count: usize,
    /// Spring constant between ring neighbours. Default: 1.
    pub edge_stiffness: F,
    /// Spring constant between each edge point and the center. Default: 1.
    pub center_stiffness: F,
    /// Radial damping between ring neighbours. Default: 0.
    pub edge_damping: F,
    /// Radial damping between edge points and the center. Default: 0.
    pub center_damping: F,
    /// Derive the center position from the edge mean. Default: false.
    pub position_averaged: bool,
    /// Derive the center velocity from the edge mean. Default: false.
    pub velocity_averaged: bool,
    /// Mass of every point. Default: 1.
    pub point_mass: F,
}

impl<F: Float> BallConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        BallConfig {
            position: Vec2::zero(),
            radius: F::from_f32(10.0),
            point_count: 20,
            edge_stiffness: F::one(),
            center_stiffness: F::one(),
            edge_damping: F::zero(),
            center_damping: F::zero(),
            position_averaged: false,
            velocity_averaged: false,
            point_mass: F::one(),
        }
    }

    /// Set the initial center position.
    pub fn with_position(mut self, position: Vec2<F>) -> Self {
        self.position = position;
        self
    }

    /// Set the radius.
    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of edge points.
    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    /// Set the edge and center spring constants.
    pub fn with_stiffness(mut self, edge: F, center: F) -> Self {
        self.edge_stiffness = edge;
        self.center_stiffness = center;
        self
    }

    /// Set the edge and center damping coefficients.
    pub fn with_damping(mut self, edge: F, center: F) -> Self {
        self.edge_damping = edge;
        self.center_damping = center;
        self
    }

    /// Set the center averaging flags.
    pub fn with_averaging(mut self, position: bool, velocity: bool) -> Self {
        self.position_averaged = position;
        self.velocity_averaged = velocity;
        self
    }

    /// Set the mass of every point.
    pub fn with_point_mass(mut self, mass: F) -> Self {
        self.point_mass = mass;
        self
    }
}

impl<F: Float> Default for BallConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
