//! Squishy balls: 2D soft bodies built from point masses and spring-damper edges.
//!
//! A [`Ball`] is a ring of edge points around a center point. Springs and
//! radial dampers tie each edge point to its ring neighbour and to the
//! center; every tick the ball applies those relations in both directions
//! and integrates with semi-implicit Euler.
//!
//! # Features
//!
//! - **Point masses**: semi-implicit Euler with a per-tick acceleration accumulator
//! - **Force relations**: spring, radial damping, radial power laws
//! - **Center modes**: dynamic center or a center derived from edge averages
//! - **World stepping**: fixed-cadence ticks decoupled from rendering
//! - **Rendering interface**: viewport mapping and a `Canvas` trait for front-ends
//! - **Observable**: Monitor ball updates via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod force;
pub mod body;
pub mod world;
pub mod schedule;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, VecN};
pub use point::PointMass;
pub use force::{ForceKind, ForceRelation, PointRef};
pub use body::{Ball, CenterMode};
pub use world::World;
pub use schedule::{FixedStep, FrameClock};
pub use render::{Canvas, Color, MeshStyle, Viewport};
pub use config::BallConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
