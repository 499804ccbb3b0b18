//! A collection of independent balls stepped together.

use crate::body::Ball;
use crate::config::BallConfig;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use alloc::vec::Vec as AllocVec;

/// Owns every ball in a scene. Balls do not interact with each other.
#[derive(Clone, Debug, Default)]
pub struct World<F: Float> {
    balls: AllocVec<Ball<F>>,
    ticks: u64,
}

impl<F: Float> World<F> {
    pub fn new() -> Self {
        World { balls: AllocVec::new(), ticks: 0 }
    }

    pub fn from_configs<'a, I>(configs: I) -> Self
    where
        I: IntoIterator<Item = &'a BallConfig<F>>,
        F: 'a,
    {
        let balls: AllocVec<_> = configs.into_iter().map(Ball::new).collect();
        log::debug!("world created with {} balls", balls.len());
        World { balls, ticks: 0 }
    }

    /// Add a ball; returns its index.
    pub fn add_ball(&mut self, ball: Ball<F>) -> usize {
        let idx = self.balls.len();
        self.balls.push(ball);
        idx
    }

    /// Update every ball once, in insertion order.
    pub fn step(&mut self, dt: F) {
        self.step_observed(dt, &mut NoOpStepObserver);
    }

    pub fn step_observed<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        for ball in self.balls.iter_mut() {
            ball.update_observed(dt, observer);
        }
        self.ticks += 1;
        log::trace!("tick {} committed ({} balls)", self.ticks, self.balls.len());
    }

    pub fn balls(&self) -> &[Ball<F>] {
        &self.balls
    }

    pub fn ball(&self, index: usize) -> Option<&Ball<F>> {
        self.balls.get(index)
    }

    pub fn ball_mut(&mut self, index: usize) -> Option<&mut Ball<F>> {
        self.balls.get_mut(index)
    }

    /// Number of committed steps.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }
}
